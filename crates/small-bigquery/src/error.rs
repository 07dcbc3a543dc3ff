use std::fmt;

use bigquery_resources::ErrorProto;
use bytes::Bytes;
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifier),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Google(#[from] ErrorPayload),
}

impl Error {
    /// The HTTP status this error was built from, if it came from a response
    /// at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Reqwest(error) => error.status(),
            Self::Google(payload) => StatusCode::from_u16(payload.code()).ok(),
            Self::Config(_) | Self::InvalidIdentifier(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// Rejected [`ClientConfig`](crate::ClientConfig) contents. Everything here
/// is caught before a single request goes out.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("auth token must be set and non-empty")]
    MissingToken,
    #[error("auth token is not a valid header value")]
    InvalidToken(#[from] http::header::InvalidHeaderValue),
    #[error(transparent)]
    Identifier(#[from] InvalidIdentifier),
    #[error("{child} id was configured without a {parent} id")]
    Orphan {
        child: ResourceKind,
        parent: ResourceKind,
    },
}

/// A missing or empty identifier, caught when resolving a resource address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidIdentifier {
    #[error("{0} id must be a non-empty string")]
    Empty(ResourceKind),
    #[error("no {0} id configured")]
    Missing(ResourceKind),
}

/// The addressing level an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Project,
    Dataset,
    Table,
}

impl ResourceKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Dataset => "dataset",
            Self::Table => "table",
        }
    }

    pub(crate) fn validate(self, id: &str) -> Result<(), InvalidIdentifier> {
        if id.is_empty() {
            Err(InvalidIdentifier::Empty(self))
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validates that the response has a 2XX status and hands it back as [`Ok`],
/// otherwise consumes the body and builds the [`Error::Google`] payload.
pub(crate) async fn validate_response(resp: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = resp.status();

    if status.is_success() {
        return Ok(resp);
    }

    let bytes = resp.bytes().await?;
    Err(Error::Google(ErrorPayload::from_raw_parts(status, bytes)))
}

/// Generic error payloads sent back from Google, unwrapped from the outer
/// `{"error": {...}}` envelope.
#[derive(Debug, serde::Deserialize)]
pub struct ErrorPayload {
    code: u16,
    message: String,
    #[serde(default)]
    errors: Vec<ErrorProto>,
}

#[derive(serde::Deserialize)]
struct NestedPayload {
    error: ErrorPayload,
}

impl ErrorPayload {
    pub(crate) fn from_raw_parts(status: StatusCode, payload: Bytes) -> Self {
        // the leading non-whitespace byte hints at what kind of payload this is.
        match payload.trim_ascii_start().first().copied() {
            // likely the nested google-format error message
            Some(b'{') => match serde_json::from_slice::<NestedPayload>(&payload) {
                Ok(NestedPayload { error }) => error,
                // not the documented envelope, keep the raw body as the message
                Err(_) => Self::from_message(status.as_u16(), payload),
            },
            Some(_) => Self::from_message(status.as_u16(), payload),
            // empty/whitespace body, fall back to the status itself so the
            // message is never empty.
            None => Self::from_status(status),
        }
    }

    fn from_status(status: StatusCode) -> Self {
        Self {
            code: status.as_u16(),
            message: String::from(status.as_str()),
            errors: vec![],
        }
    }

    fn from_message(code: u16, message: Bytes) -> Self {
        Self {
            code,
            message: String::from_utf8_lossy(&message).into_owned(),
            errors: vec![],
        }
    }

    pub const fn code(&self) -> u16 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn errors(&self) -> &[ErrorProto] {
        &self.errors
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = itoa::Buffer::new();

        f.write_str("error code ")?;
        f.write_str(buf.format(self.code))?;
        f.write_str(": ")?;
        f.write_str(&self.message)?;

        // if there's more errors than just the 1, say so
        if self.errors.len() > 1 {
            f.write_str(" and ")?;
            f.write_str(buf.format(self.errors.len() - 1))?;
            f.write_str(" more")
        } else {
            Ok(())
        }
    }
}

impl std::error::Error for ErrorPayload {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_nested_error_envelope() {
        let body = Bytes::from_static(
            br#"{
                "error": {
                    "code": 404,
                    "message": "Not found: Dataset proj:missing",
                    "errors": [
                        {
                            "reason": "notFound",
                            "message": "Not found: Dataset proj:missing"
                        }
                    ]
                }
            }"#,
        );

        let payload = ErrorPayload::from_raw_parts(StatusCode::NOT_FOUND, body);
        assert_eq!(payload.code(), 404);
        assert_eq!(payload.message(), "Not found: Dataset proj:missing");
        assert!(payload.errors()[0].is_not_found());
        assert_eq!(
            payload.to_string(),
            "error code 404: Not found: Dataset proj:missing"
        );
    }

    #[test]
    fn non_envelope_body_passes_through_as_text() {
        let body = Bytes::from_static(b"upstream gateway fell over");

        let payload = ErrorPayload::from_raw_parts(StatusCode::BAD_GATEWAY, body);
        assert_eq!(payload.code(), 502);
        assert_eq!(payload.message(), "upstream gateway fell over");
        assert!(payload.errors().is_empty());
    }

    #[test]
    fn malformed_json_body_passes_through_as_text() {
        let body = Bytes::from_static(b"{\"unexpected\": ");

        let payload = ErrorPayload::from_raw_parts(StatusCode::INTERNAL_SERVER_ERROR, body);
        assert_eq!(payload.code(), 500);
        assert_eq!(payload.message(), "{\"unexpected\": ");
    }

    #[test]
    fn empty_body_falls_back_to_the_status() {
        let payload =
            ErrorPayload::from_raw_parts(StatusCode::SERVICE_UNAVAILABLE, Bytes::new());
        assert_eq!(payload.code(), 503);
        assert_eq!(payload.message(), "503");
    }

    #[test]
    fn status_helpers_only_apply_to_response_errors() {
        let google = Error::Google(ErrorPayload::from_status(StatusCode::NOT_FOUND));
        assert!(google.is_not_found());
        assert_eq!(google.status(), Some(StatusCode::NOT_FOUND));

        let config = Error::Config(ConfigError::MissingToken);
        assert_eq!(config.status(), None);
        assert!(!config.is_not_found());
    }
}

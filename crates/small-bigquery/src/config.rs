use std::fmt;

use crate::BASE_URL;
use crate::error::{ConfigError, ResourceKind};

/// Static configuration for a [`Client`](crate::Client): the caller-supplied
/// bearer token, the endpoint to hit, and optionally the identifiers the
/// client should address by default.
///
/// Immutable once built. Construction is where all identifier validation
/// happens, so an existing config is always well formed.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub(crate) auth_token: Box<str>,
    pub(crate) base_url: Box<str>,
    pub(crate) project_id: Option<Box<str>>,
    pub(crate) dataset_id: Option<Box<str>>,
    pub(crate) table_id: Option<Box<str>>,
}

impl ClientConfig {
    /// Shorthand for the common token + project pair.
    pub fn new(
        auth_token: impl Into<Box<str>>,
        project_id: impl Into<Box<str>>,
    ) -> Result<Self, ConfigError> {
        Self::builder(auth_token).project_id(project_id).build()
    }

    pub fn builder(auth_token: impl Into<Box<str>>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            auth_token: auth_token.into(),
            base_url: None,
            project_id: None,
            dataset_id: None,
            table_id: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    pub fn dataset_id(&self) -> Option<&str> {
        self.dataset_id.as_deref()
    }

    pub fn table_id(&self) -> Option<&str> {
        self.table_id.as_deref()
    }
}

// skips the token so it never ends up in logs
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("auth_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("project_id", &self.project_id)
            .field("dataset_id", &self.dataset_id)
            .field("table_id", &self.table_id)
            .finish()
    }
}

#[derive(Clone)]
pub struct ClientConfigBuilder {
    auth_token: Box<str>,
    base_url: Option<Box<str>>,
    project_id: Option<Box<str>>,
    dataset_id: Option<Box<str>>,
    table_id: Option<Box<str>>,
}

impl ClientConfigBuilder {
    /// Overrides the endpoint root, mostly useful for pointing at a local
    /// server in tests. A trailing `/` is trimmed off.
    pub fn base_url(mut self, base_url: impl Into<Box<str>>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn project_id(mut self, project_id: impl Into<Box<str>>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn dataset_id(mut self, dataset_id: impl Into<Box<str>>) -> Self {
        self.dataset_id = Some(dataset_id.into());
        self
    }

    pub fn table_id(mut self, table_id: impl Into<Box<str>>) -> Self {
        self.table_id = Some(table_id.into());
        self
    }

    /// Validates the token and every configured identifier. Identifiers nest
    /// strictly, a table id needs a dataset id, which in turn needs a
    /// project id.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        if self.auth_token.is_empty() {
            return Err(ConfigError::MissingToken);
        }

        for (kind, id) in [
            (ResourceKind::Project, self.project_id.as_deref()),
            (ResourceKind::Dataset, self.dataset_id.as_deref()),
            (ResourceKind::Table, self.table_id.as_deref()),
        ] {
            if let Some(id) = id {
                kind.validate(id)?;
            }
        }

        if self.table_id.is_some() && self.dataset_id.is_none() {
            return Err(ConfigError::Orphan {
                child: ResourceKind::Table,
                parent: ResourceKind::Dataset,
            });
        }

        if self.dataset_id.is_some() && self.project_id.is_none() {
            return Err(ConfigError::Orphan {
                child: ResourceKind::Dataset,
                parent: ResourceKind::Project,
            });
        }

        let base_url = match self.base_url {
            Some(url) if url.ends_with('/') => Box::from(url.trim_end_matches('/')),
            Some(url) => url,
            None => Box::from(BASE_URL),
        };

        Ok(ClientConfig {
            auth_token: self.auth_token,
            base_url,
            project_id: self.project_id,
            dataset_id: self.dataset_id,
            table_id: self.table_id,
        })
    }
}

impl fmt::Debug for ClientConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfigBuilder")
            .field("auth_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("project_id", &self.project_id)
            .field("dataset_id", &self.dataset_id)
            .field("table_id", &self.table_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidIdentifier;

    #[test]
    fn defaults_to_the_public_endpoint() {
        let config = ClientConfig::new("token", "my-project").unwrap();
        assert_eq!(config.base_url(), BASE_URL);
        assert_eq!(config.project_id(), Some("my-project"));
        assert_eq!(config.dataset_id(), None);
    }

    #[test]
    fn empty_token_is_rejected() {
        let err = ClientConfig::builder("").build().unwrap_err();
        assert!(matches!(err, ConfigError::MissingToken));
    }

    #[test]
    fn empty_identifiers_are_rejected_by_level() {
        let err = ClientConfig::new("token", "").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Identifier(InvalidIdentifier::Empty(ResourceKind::Project))
        ));

        let err = ClientConfig::builder("token")
            .project_id("p")
            .dataset_id("")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Identifier(InvalidIdentifier::Empty(ResourceKind::Dataset))
        ));
    }

    #[test]
    fn identifiers_nest_strictly() {
        let err = ClientConfig::builder("token")
            .project_id("p")
            .table_id("t")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Orphan {
                child: ResourceKind::Table,
                parent: ResourceKind::Dataset,
            }
        ));

        let err = ClientConfig::builder("token")
            .dataset_id("d")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Orphan {
                child: ResourceKind::Dataset,
                parent: ResourceKind::Project,
            }
        ));
    }

    #[test]
    fn trailing_slash_is_trimmed_from_the_base_url() {
        let config = ClientConfig::builder("token")
            .base_url("http://127.0.0.1:9050/bigquery/v2/")
            .project_id("p")
            .build()
            .unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:9050/bigquery/v2");
    }

    #[test]
    fn debug_never_shows_the_token() {
        let config = ClientConfig::new("super-secret", "p").unwrap();
        let repr = format!("{config:?}");
        assert!(!repr.contains("super-secret"));
        assert!(repr.contains("<redacted>"));
    }
}

use std::sync::Arc;

use bigquery_resources::project::ProjectList;
use http::header::{self, HeaderValue};
use reqwest::Response;

use crate::config::ClientConfig;
use crate::dataset::DatasetClient;
use crate::error::{ConfigError, Error, InvalidIdentifier, ResourceKind, validate_response};
use crate::project::ProjectClient;
use crate::table::TableClient;

/// Entry point to the resource hierarchy. Cheap to clone, all clones share
/// one transport and one normalized auth header.
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<InnerClient>,
}

#[derive(Debug)]
pub(crate) struct InnerClient {
    client: reqwest::Client,
    auth_header: HeaderValue,
    base_url: Box<str>,
    project_id: Option<Box<str>>,
    dataset_id: Option<Box<str>>,
    table_id: Option<Box<str>>,
}

fn build_auth_header(token: &str) -> Result<HeaderValue, ConfigError> {
    const BEARER_PREFIX: &str = "Bearer ";

    let mut dst = bytes::BytesMut::with_capacity(BEARER_PREFIX.len() + token.len());
    dst.extend_from_slice(BEARER_PREFIX.as_bytes());
    dst.extend_from_slice(token.as_bytes());

    let mut header = HeaderValue::from_maybe_shared(dst.freeze())?;
    header.set_sensitive(true);
    Ok(header)
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent("small-bigquery")
            .build()?;

        Self::from_parts(client, config)
    }

    /// Builds a client on top of an existing transport, for callers that
    /// already have a tuned [`reqwest::Client`] lying around.
    pub fn from_parts(client: reqwest::Client, config: ClientConfig) -> Result<Self, Error> {
        let ClientConfig {
            auth_token,
            base_url,
            project_id,
            dataset_id,
            table_id,
        } = config;

        let auth_header = build_auth_header(&auth_token).map_err(Error::Config)?;

        Ok(Self {
            inner: Arc::new(InnerClient {
                client,
                auth_header,
                base_url,
                project_id,
                dataset_id,
                table_id,
            }),
        })
    }

    #[inline]
    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    pub fn project(&self, project_id: impl Into<Box<str>>) -> Result<ProjectClient, Error> {
        ProjectClient::from_parts(project_id.into(), Arc::clone(&self.inner)).map_err(Error::from)
    }

    /// Resolves the project configured in [`ClientConfig`].
    pub fn project_client(&self) -> Result<ProjectClient, Error> {
        let project_id = self.inner.configured_id(ResourceKind::Project)?;
        self.project(project_id)
    }

    /// Addresses a dataset under the configured project.
    pub fn dataset(&self, dataset_id: impl Into<Box<str>>) -> Result<DatasetClient, Error> {
        self.project_client()?.dataset(dataset_id)
    }

    /// Resolves the dataset configured in [`ClientConfig`].
    pub fn dataset_client(&self) -> Result<DatasetClient, Error> {
        let dataset_id = self.inner.configured_id(ResourceKind::Dataset)?;
        self.dataset(dataset_id)
    }

    /// Resolves the table configured in [`ClientConfig`].
    pub fn table_client(&self) -> Result<TableClient, Error> {
        let table_id = self.inner.configured_id(ResourceKind::Table)?;
        self.dataset_client()?.table(table_id)
    }

    /// Lists the projects this token can see. Not project scoped, so it
    /// lives here rather than on a handle.
    pub async fn list_projects(&self) -> crate::Result<ProjectList> {
        let url = format!("{}/projects", self.inner.base_url());
        let resp = self.inner.get(url).await?;
        into_json(resp).await
    }
}

impl InnerClient {
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    fn configured_id(&self, kind: ResourceKind) -> Result<Box<str>, InvalidIdentifier> {
        let id = match kind {
            ResourceKind::Project => self.project_id.as_deref(),
            ResourceKind::Dataset => self.dataset_id.as_deref(),
            ResourceKind::Table => self.table_id.as_deref(),
        };

        id.map(Box::from).ok_or(InvalidIdentifier::Missing(kind))
    }

    pub(crate) async fn get(&self, url: String) -> Result<Response, Error> {
        tracing::debug!(%url, "GET");

        let resp = self
            .client
            .get(url)
            .header(header::AUTHORIZATION, self.auth_header.clone())
            .send()
            .await?;

        validate_response(resp).await
    }

    pub(crate) async fn delete(&self, url: String) -> Result<Response, Error> {
        tracing::debug!(%url, "DELETE");

        let resp = self
            .client
            .delete(url)
            .header(header::AUTHORIZATION, self.auth_header.clone())
            .send()
            .await?;

        validate_response(resp).await
    }

    pub(crate) async fn post<S>(&self, url: String, payload: S) -> Result<Response, Error>
    where
        S: serde::Serialize,
    {
        tracing::debug!(%url, "POST");

        let resp = self
            .client
            .post(url)
            .header(header::AUTHORIZATION, self.auth_header.clone())
            .json(&payload)
            .send()
            .await?;

        validate_response(resp).await
    }

    pub(crate) async fn put<S>(&self, url: String, payload: S) -> Result<Response, Error>
    where
        S: serde::Serialize,
    {
        tracing::debug!(%url, "PUT");

        let resp = self
            .client
            .put(url)
            .header(header::AUTHORIZATION, self.auth_header.clone())
            .json(&payload)
            .send()
            .await?;

        validate_response(resp).await
    }
}

pub(crate) async fn into_json<T>(resp: Response) -> Result<T, Error>
where
    T: serde::de::DeserializeOwned,
{
    resp.json().await.map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with(config: ClientConfig) -> Client {
        Client::new(config).unwrap()
    }

    #[test]
    fn auth_header_is_the_prefixed_token() {
        let header = build_auth_header("test-token").unwrap();
        assert_eq!(header.as_bytes(), b"Bearer test-token");
        assert!(header.is_sensitive());
    }

    #[test]
    fn tokens_with_control_bytes_are_rejected() {
        let err = build_auth_header("broken\ntoken").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidToken(_)));
    }

    #[test]
    fn resolves_configured_identifiers() {
        let config = ClientConfig::builder("token")
            .project_id("p")
            .dataset_id("d")
            .table_id("t")
            .build()
            .unwrap();
        let client = client_with(config);

        let table = client.table_client().unwrap();
        assert_eq!(
            table.url(),
            "https://www.googleapis.com/bigquery/v2/projects/p/datasets/d/tables/t"
        );
    }

    #[test]
    fn unconfigured_identifiers_are_reported_by_level() {
        let client = client_with(ClientConfig::new("token", "p").unwrap());

        let err = client.dataset_client().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidIdentifier(InvalidIdentifier::Missing(ResourceKind::Dataset))
        ));

        let err = client.table_client().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidIdentifier(InvalidIdentifier::Missing(ResourceKind::Table))
        ));
    }

    #[test]
    fn explicit_addressing_validates_each_level() {
        let client = client_with(ClientConfig::new("token", "p").unwrap());

        let err = client.project("").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidIdentifier(InvalidIdentifier::Empty(ResourceKind::Project))
        ));

        let err = client.dataset("").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidIdentifier(InvalidIdentifier::Empty(ResourceKind::Dataset))
        ));

        let project = client.project("other-project").unwrap();
        let err = project.dataset("d").unwrap().table("").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidIdentifier(InvalidIdentifier::Empty(ResourceKind::Table))
        ));
    }
}

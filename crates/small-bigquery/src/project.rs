use std::ops::Range;
use std::sync::Arc;

use bigquery_resources::dataset::{Dataset, DatasetList};

use crate::client::{InnerClient, into_json};
use crate::dataset::DatasetClient;
use crate::error::{Error, InvalidIdentifier, ResourceKind};

/// Handle to one project, the root level of the hierarchy. Datasets are
/// listed and created here; everything deeper hangs off [`DatasetClient`].
#[derive(Debug, Clone)]
pub struct ProjectClient {
    url: Box<str>,
    /// the range within 'url' holding the project id, so the id stays
    /// reachable without storing a second string.
    project_id_range: Range<usize>,
    inner: Arc<InnerClient>,
}

impl ProjectClient {
    pub(crate) fn from_parts(
        project_id: Box<str>,
        inner: Arc<InnerClient>,
    ) -> Result<Self, InvalidIdentifier> {
        ResourceKind::Project.validate(&project_id)?;

        let url = format!("{}/projects/{project_id}", inner.base_url()).into_boxed_str();
        let project_id_range = (url.len() - project_id.len())..url.len();

        Ok(Self {
            url,
            project_id_range,
            inner,
        })
    }

    #[inline]
    pub fn project_id(&self) -> &str {
        &self.url[self.project_id_range.clone()]
    }

    /// The fully qualified URL of this project resource.
    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn dataset(&self, dataset_id: impl Into<Box<str>>) -> Result<DatasetClient, Error> {
        DatasetClient::from_parts(dataset_id.into(), &self.url, Arc::clone(&self.inner))
            .map_err(Error::from)
    }

    pub async fn list_datasets(&self) -> crate::Result<DatasetList> {
        let url = format!("{}/datasets", self.url);
        let resp = self.inner.get(url).await?;
        into_json(resp).await
    }

    /// Creates a new empty dataset. The payload is forwarded as-is, so any
    /// serializable rendition of the dataset resource works, including
    /// [`Dataset`] itself.
    pub async fn insert_dataset<S>(&self, dataset: S) -> crate::Result<Dataset>
    where
        S: serde::Serialize,
    {
        let url = format!("{}/datasets", self.url);
        let resp = self.inner.post(url, dataset).await?;
        into_json(resp).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{Client, ClientConfig};

    #[test]
    fn bakes_the_project_url_once() {
        let client = Client::new(ClientConfig::new("token", "my-project").unwrap()).unwrap();
        let project = client.project_client().unwrap();

        assert_eq!(
            project.url(),
            "https://www.googleapis.com/bigquery/v2/projects/my-project"
        );
        assert_eq!(project.project_id(), "my-project");
    }
}

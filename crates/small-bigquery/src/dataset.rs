use std::ops::Range;
use std::sync::Arc;

use bigquery_resources::dataset::Dataset;
use bigquery_resources::table::TableList;

use crate::client::{InnerClient, into_json};
use crate::error::{Error, InvalidIdentifier, ResourceKind};
use crate::table::TableClient;

/// Handle to one dataset within a project.
#[derive(Debug, Clone)]
pub struct DatasetClient {
    url: Box<str>,
    dataset_id_range: Range<usize>,
    inner: Arc<InnerClient>,
}

impl DatasetClient {
    pub(crate) fn from_parts(
        dataset_id: Box<str>,
        project_url: &str,
        inner: Arc<InnerClient>,
    ) -> Result<Self, InvalidIdentifier> {
        ResourceKind::Dataset.validate(&dataset_id)?;

        let url = format!("{project_url}/datasets/{dataset_id}").into_boxed_str();
        let dataset_id_range = (url.len() - dataset_id.len())..url.len();

        Ok(Self {
            url,
            dataset_id_range,
            inner,
        })
    }

    #[inline]
    pub fn dataset_id(&self) -> &str {
        &self.url[self.dataset_id_range.clone()]
    }

    /// The fully qualified URL of this dataset resource.
    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn table(&self, table_id: impl Into<Box<str>>) -> Result<TableClient, Error> {
        TableClient::from_parts(table_id.into(), &self.url, Arc::clone(&self.inner))
            .map_err(Error::from)
    }

    /// Fetches the full dataset resource.
    pub async fn get(&self) -> crate::Result<Dataset> {
        let resp = self.inner.get(self.url.to_string()).await?;
        into_json(resp).await
    }

    /// Replaces the entire dataset resource with the given payload, returning
    /// the stored result.
    pub async fn update<S>(&self, dataset: S) -> crate::Result<Dataset>
    where
        S: serde::Serialize,
    {
        let resp = self.inner.put(self.url.to_string(), dataset).await?;
        into_json(resp).await
    }

    /// Deletes the dataset. BigQuery only allows this once the dataset has no
    /// tables left in it.
    pub async fn delete(&self) -> crate::Result<()> {
        self.inner.delete(self.url.to_string()).await?;
        Ok(())
    }

    pub async fn list_tables(&self) -> crate::Result<TableList> {
        let url = format!("{}/tables", self.url);
        let resp = self.inner.get(url).await?;
        into_json(resp).await
    }
}

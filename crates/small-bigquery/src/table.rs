use std::ops::Range;
use std::sync::Arc;

use bigquery_resources::table_data::{Row, TableDataInsertAllRequest, TableDataInsertAllResponse};

use crate::client::{InnerClient, into_json};
use crate::error::{InvalidIdentifier, ResourceKind};

/// Handle to one table. The only verb down here is `tabledata.insertAll`,
/// exposed raw via [`insert_all`](TableClient::insert_all) and with row
/// wrapping via [`insert_rows`](TableClient::insert_rows).
#[derive(Debug, Clone)]
pub struct TableClient {
    url: Box<str>,
    table_id_range: Range<usize>,
    inner: Arc<InnerClient>,
}

impl TableClient {
    pub(crate) fn from_parts(
        table_id: Box<str>,
        dataset_url: &str,
        inner: Arc<InnerClient>,
    ) -> Result<Self, InvalidIdentifier> {
        ResourceKind::Table.validate(&table_id)?;

        let url = format!("{dataset_url}/tables/{table_id}").into_boxed_str();
        let table_id_range = (url.len() - table_id.len())..url.len();

        Ok(Self {
            url,
            table_id_range,
            inner,
        })
    }

    #[inline]
    pub fn table_id(&self) -> &str {
        &self.url[self.table_id_range.clone()]
    }

    /// The fully qualified URL of this table resource.
    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Streams rows into the table without running a load job. The request
    /// body is forwarded untouched, use
    /// [`TableDataInsertAllRequest`] (or anything serializing to the same
    /// shape) to control `insertId`s and insert flags yourself.
    ///
    /// Per row failures come back in the 2XX response payload, not as an
    /// [`Error`](crate::Error). Check
    /// [`has_errors`](TableDataInsertAllResponse::has_errors).
    pub async fn insert_all<S>(&self, request: S) -> crate::Result<TableDataInsertAllResponse>
    where
        S: serde::Serialize,
    {
        let url = format!("{}/insertAll", self.url);
        let resp = self.inner.post(url, request).await?;
        into_json(resp).await
    }

    /// Wraps each row payload with a fresh UUID `insertId` and streams the
    /// batch via [`insert_all`](TableClient::insert_all).
    pub async fn insert_rows<I>(&self, rows: I) -> crate::Result<TableDataInsertAllResponse>
    where
        I: IntoIterator,
        I::Item: serde::Serialize,
    {
        self.insert_all(wrap_rows(rows)).await
    }
}

fn wrap_rows<I>(rows: I) -> TableDataInsertAllRequest<I::Item, uuid::Uuid>
where
    I: IntoIterator,
{
    TableDataInsertAllRequest::from_rows(
        rows.into_iter()
            .map(|json| Row::with_insert_id(uuid::Uuid::new_v4(), json)),
    )
}

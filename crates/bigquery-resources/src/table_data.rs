use crate::ErrorProto;
use crate::util;

/// Request body for `tabledata.insertAll`. `R` is the caller's row payload
/// type, serialized verbatim under each row's `json` key.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDataInsertAllRequest<R, S = Box<str>> {
    #[serde(default, skip_serializing_if = "util::is_false")]
    pub skip_invalid_rows: bool,
    #[serde(default, skip_serializing_if = "util::is_false")]
    pub ignore_unknown_values: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<S>,
    pub rows: Vec<Row<R, S>>,
}

impl<R, S> TableDataInsertAllRequest<R, S> {
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Row<R, S>>,
    {
        TableDataInsertAllRequest {
            rows: rows.into_iter().collect(),
            ..TableDataInsertAllRequest::default()
        }
    }
}

impl<R, S> Default for TableDataInsertAllRequest<R, S> {
    fn default() -> Self {
        TableDataInsertAllRequest {
            skip_invalid_rows: false,
            ignore_unknown_values: false,
            template_suffix: None,
            rows: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Row<R, S = Box<str>> {
    /// Best effort deduplication key for the row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_id: Option<S>,
    pub json: R,
}

impl<R, S> Row<R, S> {
    #[inline]
    pub fn new(json: R) -> Self {
        Row {
            insert_id: None,
            json,
        }
    }

    #[inline]
    pub fn with_insert_id(insert_id: S, json: R) -> Self {
        Row {
            insert_id: Some(insert_id),
            json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDataInsertAllResponse<S = Box<str>> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<S>,
    /// An array of errors for rows that were not inserted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub insert_errors: Vec<InsertErrors<S>>,
}

impl<S> TableDataInsertAllResponse<S> {
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.insert_errors.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertErrors<S> {
    /// The index of the row that the errors apply to.
    pub index: usize,
    /// Error information for the row indicated by the index property.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorProto<S>>,
}

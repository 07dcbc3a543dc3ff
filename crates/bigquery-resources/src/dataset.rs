use std::collections::HashMap;

use crate::DatasetReference;
use crate::util;

/// The `datasets` resource, with the fields the v2 REST API documents for
/// get/insert/update. Everything is optional so partial resources (request
/// bodies that only set a reference and a description, say) serialize without
/// inventing values.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset<S = Box<str>> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_reference: Option<DatasetReference<S>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<S>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "util::int64::optional"
    )]
    pub default_table_expiration_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<Box<str>, S>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub access: Vec<AccessEntry<S>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "util::int64::optional"
    )]
    pub creation_time: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "util::int64::optional"
    )]
    pub last_modified_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<S>,
}

impl<S> Dataset<S> {
    pub fn from_reference(dataset_reference: DatasetReference<S>) -> Self {
        Dataset {
            dataset_reference: Some(dataset_reference),
            ..Dataset::default()
        }
    }
}

impl<S> Default for Dataset<S> {
    fn default() -> Self {
        Dataset {
            kind: None,
            etag: None,
            id: None,
            self_link: None,
            dataset_reference: None,
            friendly_name: None,
            description: None,
            default_table_expiration_ms: None,
            labels: None,
            access: Vec::new(),
            creation_time: None,
            last_modified_time: None,
            location: None,
        }
    }
}

/// One entry in a dataset ACL. Exactly one of the principal fields is set per
/// entry, but the API owns that invariant, not this type.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessEntry<S = Box<str>> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_by_email: Option<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by_email: Option<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_group: Option<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_member: Option<S>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetList<S = Box<str>> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<S>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub datasets: Vec<DatasetListEntry<S>>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetListEntry<S = Box<str>> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_reference: Option<DatasetReference<S>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<Box<str>, S>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<S>,
}

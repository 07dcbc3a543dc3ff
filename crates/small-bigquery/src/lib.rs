//! A thin client for the BigQuery v2 REST API, covering datasets, tables and
//! `tabledata.insertAll`.
//!
//! The caller brings their own bearer token. This crate composes the resource
//! URL, attaches the token, hands the verb to [`reqwest`] and decodes
//! whatever comes back, nothing more: no retries, no pagination, no token
//! refresh.
//!
//! ```no_run
//! use small_bigquery::{Client, ClientConfig};
//!
//! # async fn run() -> Result<(), small_bigquery::Error> {
//! let config = ClientConfig::new("ya29.the-token", "my-project")?;
//! let client = Client::new(config)?;
//!
//! let datasets = client.project_client()?.list_datasets().await?;
//!
//! for entry in &datasets.datasets {
//!     println!("{:?}", entry.id);
//! }
//! # Ok(())
//! # }
//! ```

pub use bigquery_resources as resources;

mod client;
mod config;
mod dataset;
mod error;
mod project;
mod table;

pub use client::Client;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use dataset::DatasetClient;
pub use error::{ConfigError, Error, ErrorPayload, InvalidIdentifier, ResourceKind};
pub use project::ProjectClient;
pub use table::TableClient;

/// Default endpoint root for the v2 REST API.
pub const BASE_URL: &str = "https://www.googleapis.com/bigquery/v2";

pub type Result<T> = core::result::Result<T, Error>;

//! Streams a few rows into an existing table via `tabledata.insertAll`.
//!
//! ```sh
//! BIGQUERY_TOKEN=$(gcloud auth print-access-token) \
//!     cargo run --example stream_rows -- my-project my_dataset readings
//! ```

use small_bigquery::{Client, ClientConfig};

#[derive(serde::Serialize)]
struct Reading {
    sensor: &'static str,
    value: f64,
    recorded_at_ms: i64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let usage = "usage: stream_rows <project> <dataset> <table>";
    let project_id = args.next().ok_or(usage)?;
    let dataset_id = args.next().ok_or(usage)?;
    let table_id = args.next().ok_or(usage)?;

    let token = std::env::var("BIGQUERY_TOKEN")?;

    let config = ClientConfig::builder(token)
        .project_id(project_id)
        .dataset_id(dataset_id)
        .table_id(table_id)
        .build()?;
    let client = Client::new(config)?;

    let table = client.table_client()?;

    let rows = [
        Reading {
            sensor: "temp",
            value: 21.5,
            recorded_at_ms: 1415843045099,
        },
        Reading {
            sensor: "temp",
            value: 22.0,
            recorded_at_ms: 1415843105099,
        },
    ];

    let row_count = rows.len();
    let response = table.insert_rows(rows).await?;

    if response.has_errors() {
        for row_errors in &response.insert_errors {
            for error in &row_errors.errors {
                eprintln!("row {} rejected: {error}", row_errors.index);
            }
        }
        return Err("some rows were not inserted".into());
    }

    println!("streamed {row_count} rows into {}", table.table_id());
    Ok(())
}

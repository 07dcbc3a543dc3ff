//! Walks a dataset through its lifecycle: insert, list, get, update, delete.
//!
//! ```sh
//! BIGQUERY_TOKEN=$(gcloud auth print-access-token) \
//!     cargo run --example dataset_admin -- my-project scratch_dataset
//! ```

use small_bigquery::resources::DatasetReference;
use small_bigquery::resources::dataset::Dataset;
use small_bigquery::{Client, ClientConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let project_id = args.next().ok_or("usage: dataset_admin <project> <dataset>")?;
    let dataset_id = args.next().ok_or("usage: dataset_admin <project> <dataset>")?;

    let token = std::env::var("BIGQUERY_TOKEN")?;

    let config = ClientConfig::builder(token)
        .project_id(project_id.as_str())
        .dataset_id(dataset_id.as_str())
        .build()?;
    let client = Client::new(config)?;

    let project = client.project_client()?;

    let mut dataset = Dataset::from_reference(DatasetReference {
        project_id: project_id.into_boxed_str(),
        dataset_id: dataset_id.into_boxed_str(),
    });

    let created = project.insert_dataset(&dataset).await?;
    println!("created dataset {:?}", created.id);

    let list = project.list_datasets().await?;
    println!("project now has {} dataset(s)", list.datasets.len());

    let handle = client.dataset_client()?;

    dataset.description = Some("created by the dataset_admin example".into());
    let updated = handle.update(&dataset).await?;
    println!("updated description: {:?}", updated.description);

    let fetched = handle.get().await?;
    println!(
        "fetched {:?}, created at {:?}",
        fetched.id, fetched.creation_time
    );

    handle.delete().await?;
    println!("deleted {}", handle.dataset_id());

    Ok(())
}

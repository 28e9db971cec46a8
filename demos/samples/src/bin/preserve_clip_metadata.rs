//! Exports clip metadata of a project, optionally limited to a folder or shooting day
use shothub_client::application::client::Client;
use shothub_client::application::config::Config;
use shothub_client::application::interfaces::{AssetService, ProjectService};
use shothub_client::constants::OUTPUT_ROOT;
use shothub_client::model::requests::AssetQuery;
use shothub_client::presentation::asset::filter_by_shooting_day;
use shothub_client::storage::csv::write_csv_file;
use shothub_client::storage::utils::ensure_dir;
use shothub_client::utils::setup_logger;
use std::path::Path;
use tracing::info;

const PROJECT_ID: &str = "643533041b92c40aa318d8db";

// Folder of the shooting day to export, if the project has one folder per day
const FOLDER_ID: Option<&str> = None;

// Value of the "Shooting Day" metadata field to export
const SHOOTING_DAY: Option<&str> = None;

const CSV_FIELDS: [&str; 8] = [
    "assetType",
    "type",
    "name",
    "shotId",
    "episode",
    "scene",
    "shot",
    "take",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::new(Config::new()).await?;

    let output_dir = ensure_dir(&Path::new(OUTPUT_ROOT).join("metadata"))?;

    let folder_id = match FOLDER_ID {
        Some(id) => id.to_string(),
        None => client.get_project_root_folder(PROJECT_ID).await?,
    };

    let query = AssetQuery::new(&folder_id).page_size(client.config().page_size);
    let assets = filter_by_shooting_day(client.get_all_assets(&query).await?, SHOOTING_DAY);

    let outfile = output_dir.join(format!("{PROJECT_ID}.csv"));
    let written = write_csv_file(&outfile, &assets, &CSV_FIELDS)?;
    info!("Wrote {} assets to {}", written, outfile.display());
    Ok(())
}

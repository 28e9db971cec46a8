//! Groups the clips of a project (or folder) by camera and writes one CSV per camera
use shothub_client::application::client::Client;
use shothub_client::application::config::Config;
use shothub_client::application::interfaces::{AssetService, ProjectService};
use shothub_client::constants::OUTPUT_ROOT;
use shothub_client::model::requests::AssetQuery;
use shothub_client::presentation::camera::{camera_summary_table, group_by_camera};
use shothub_client::storage::csv::write_csv_file;
use shothub_client::storage::utils::{ensure_dir, sanitize_file_name};
use shothub_client::utils::setup_logger;
use std::path::PathBuf;
use tracing::info;

const PROJECT_ID: &str = "643533041b92c40aa318d8db";

// Restricts the export to a folder and its subfolders; `None` uses the project root
const FOLDER_ID: Option<&str> = None;

// See the `getAssets` operation of the API documentation for all available fields
const CSV_FIELDS: [&str; 9] = [
    "id",
    "name",
    "shotId",
    "duration",
    "durationInSecs",
    "tcStart",
    "tcEnd",
    "tcFps",
    "tcDropFlag",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::new(Config::new()).await?;

    let folder_id = match FOLDER_ID {
        Some(id) => id.to_string(),
        None => client.get_project_root_folder(PROJECT_ID).await?,
    };

    let query = AssetQuery::new(&folder_id)
        .asset_type("VideoClip")
        .page_size(client.config().page_size);
    let clips = client.get_all_assets(&query).await?;

    let groups = group_by_camera(&clips);
    let output_dir: PathBuf = [OUTPUT_ROOT, "clips-per-camera", PROJECT_ID].iter().collect();
    ensure_dir(&output_dir)?;

    for (camera, camera_clips) in &groups {
        let outfile = output_dir.join(format!("{}.csv", sanitize_file_name(camera)));
        write_csv_file(&outfile, camera_clips.iter().copied(), &CSV_FIELDS)?;
    }

    info!(
        "Wrote {} clips for {} cameras to {}",
        clips.len(),
        groups.len(),
        output_dir.display()
    );
    camera_summary_table(&groups).printstd();
    Ok(())
}

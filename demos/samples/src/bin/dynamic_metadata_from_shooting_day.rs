//! Downloads dynamic metadata for all flagged clips of a shooting day
use shothub_client::application::client::Client;
use shothub_client::application::config::Config;
use shothub_client::application::interfaces::{AssetService, ProjectService};
use shothub_client::constants::OUTPUT_ROOT;
use shothub_client::model::requests::AssetQuery;
use shothub_client::model::utils::field_str;
use shothub_client::presentation::asset::{
    is_flagged_with_dynamic_metadata, matches_shooting_day,
};
use shothub_client::storage::utils::{ensure_dir, write_text_file};
use shothub_client::utils::setup_logger;
use std::path::PathBuf;
use tracing::{info, warn};

const PROJECT_ID: &str = "643533041b92c40aa318d8db";

// Folder of the shooting day, if the project has one folder per day
const FOLDER_ID: Option<&str> = None;

// Value of the "Shooting Day" metadata field; with both unset every flagged clip is exported
const SHOOTING_DAY: Option<&str> = None;

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
    let clips: Vec<_> = client
        .get_all_assets(&query)
        .await?
        .into_iter()
        .filter(|clip| matches_shooting_day(clip, SHOOTING_DAY))
        .filter(is_flagged_with_dynamic_metadata)
        .collect();

    info!(
        "Found {} flagged clips with dynamic metadata, beginning download...",
        clips.len()
    );

    let output_dir: PathBuf = [OUTPUT_ROOT, "dynamic-metadata", PROJECT_ID].iter().collect();
    ensure_dir(&output_dir)?;

    for clip in &clips {
        let Some(id) = field_str(clip, "id") else {
            warn!("Skipping clip without id");
            continue;
        };
        let name = field_str(clip, "name").unwrap_or("unnamed");
        let csv = client.get_dynamic_metadata(id).await?;
        write_text_file(&output_dir, &format!("{name}_{id}.csv"), &csv)?;
    }

    info!("Dynamic metadata written to {}", output_dir.display());
    Ok(())
}

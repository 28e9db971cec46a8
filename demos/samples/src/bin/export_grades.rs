//! Exports the CDL grades of a folder together with grading-related clip metadata
use shothub_client::application::client::Client;
use shothub_client::application::config::Config;
use shothub_client::application::interfaces::AssetService;
use shothub_client::constants::OUTPUT_ROOT;
use shothub_client::model::requests::{AssetQuery, CdlNamingScheme};
use shothub_client::model::utils::field_str;
use shothub_client::presentation::grade::{GRADE_CSV_FIELDS, flatten_grade_info};
use shothub_client::storage::archive::extract_zip_file;
use shothub_client::storage::csv::write_csv_file;
use shothub_client::storage::utils::create_fresh_dir;
use shothub_client::utils::setup_logger;
use std::fs;
use std::path::PathBuf;
use tracing::info;

// e.g. the folder of the most recent shooting day
const FOLDER_ID: &str = "641af9c62e1cfc1ad167ce20";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    // Refuse to run over the output of a previous run
    let output_dir: PathBuf = [OUTPUT_ROOT, "export-grades", FOLDER_ID].iter().collect();
    let temp_dir = output_dir.join("tmp");
    create_fresh_dir(&output_dir)?;
    create_fresh_dir(&temp_dir)?;

    let client = Client::new(Config::new()).await?;

    let archive = client
        .download_cdl_zip(FOLDER_ID, CdlNamingScheme::ClipName)
        .await?;
    let temp_zip = temp_dir.join("grades.zip");
    fs::write(&temp_zip, &archive)?;
    extract_zip_file(&temp_zip, &output_dir)?;

    // A shot is graded when the archive contained `<clip name>.cdl` for it
    let query = AssetQuery::new(FOLDER_ID)
        .asset_type("Shot")
        .page_size(client.config().page_size);
    let shots = client.get_all_assets(&query).await?;
    let graded_ids: Vec<&str> = shots
        .iter()
        .filter(|shot| {
            field_str(shot, "name")
                .map(|name| output_dir.join(format!("{name}.cdl")).is_file())
                .unwrap_or(false)
        })
        .filter_map(|shot| field_str(shot, "id"))
        .collect();
    info!("{} of {} shots are graded", graded_ids.len(), shots.len());

    let mut records = Vec::with_capacity(graded_ids.len());
    for id in graded_ids {
        let shot = client.get_asset(id, Some("gradeInfo")).await?;
        records.push(flatten_grade_info(&shot)?);
    }

    let outfile = output_dir.join("grading_info.csv");
    write_csv_file(&outfile, &records, &GRADE_CSV_FIELDS)?;
    info!("Grading info written to {}", outfile.display());

    fs::remove_file(&temp_zip)?;
    fs::remove_dir(&temp_dir)?;
    Ok(())
}

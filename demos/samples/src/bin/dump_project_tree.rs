//! Prints the folder structure of every project the script can see
use shothub_client::application::client::Client;
use shothub_client::application::config::Config;
use shothub_client::application::interfaces::ProjectService;
use shothub_client::presentation::folder::render_folder_tree;
use shothub_client::utils::setup_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::new(Config::new()).await?;

    let projects = client.get_projects(0, 50).await?;
    info!("Found {} projects", projects.len());

    for project in projects {
        let tree = client.get_folder_tree(&project.id).await?;

        println!();
        println!("=== PROJECT {} ===", project.name);
        println!();
        for line in render_folder_tree(&tree) {
            println!("{line}");
        }
    }

    Ok(())
}

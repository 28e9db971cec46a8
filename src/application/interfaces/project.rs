use crate::error::AppError;
use crate::model::responses::{Folder, Project};
use async_trait::async_trait;

/// Interface for project and folder lookups
#[async_trait]
pub trait ProjectService: Send + Sync {
    /// Gets one page of the projects visible to the script
    async fn get_projects(&self, page: u32, page_size: u32) -> Result<Vec<Project>, AppError>;

    /// Gets the root folder id of `project_id`
    ///
    /// Only the first 50 projects are searched. If the script can see more
    /// projects than that, later ones are reported as not found.
    ///
    /// # Returns
    /// * `Err(AppError::ProjectNotFound)` - If the id is not in the first page
    async fn get_project_root_folder(&self, project_id: &str) -> Result<String, AppError>;

    /// Gets the folder hierarchy of a project
    async fn get_folder_tree(&self, project_id: &str) -> Result<Vec<Folder>, AppError>;
}

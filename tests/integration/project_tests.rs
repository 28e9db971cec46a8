use crate::common::{bearer, logged_in_client};
use mockito::{Matcher, Server};
use reqwest::StatusCode;
use shothub_client::application::interfaces::ProjectService;
use shothub_client::error::AppError;
use shothub_client::presentation::folder::render_folder_tree;

const PROJECTS: &str = r#"[
    {"id":"p1","name":"Feature","rootFolderId":"root-1"},
    {"id":"p2","name":"Series","rootFolderId":"root-2"}
]"#;

#[tokio::test]
async fn test_get_project_root_folder() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;
    let mock = server
        .mock("GET", "/v1.0/projects")
        .match_query(Matcher::UrlEncoded("pageSize".into(), "50".into()))
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .with_body(PROJECTS)
        .create_async()
        .await;

    let root = client.get_project_root_folder("p2").await.unwrap();

    assert_eq!(root, "root-2");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_project_root_folder_not_in_first_page() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;
    server
        .mock("GET", "/v1.0/projects")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(PROJECTS)
        .create_async()
        .await;

    let result = client.get_project_root_folder("p99").await;

    match result {
        Err(AppError::ProjectNotFound(id)) => assert_eq!(id, "p99"),
        other => panic!("expected ProjectNotFound, got {:?}", other.err()),
    }
}

#[tokio::test]
async fn test_get_project_root_folder_server_error() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;
    server
        .mock("GET", "/v1.0/projects")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let result = client.get_project_root_folder("p1").await;

    assert!(matches!(
        result,
        Err(AppError::Unexpected(StatusCode::INTERNAL_SERVER_ERROR))
    ));
}

#[tokio::test]
async fn test_get_projects_page() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;
    let mock = server
        .mock("GET", "/v1.0/projects")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "0".into()),
            Matcher::UrlEncoded("pageSize".into(), "50".into()),
        ]))
        .with_status(200)
        .with_body(PROJECTS)
        .create_async()
        .await;

    let projects = client.get_projects(0, 50).await.unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name, "Feature");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_folder_tree() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;
    server
        .mock("GET", "/v1.0/folders-tree/p1")
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .with_body(
            r#"[{"id":"root-1","name":"Feature","children":[
                {"id":"d1","name":"Day 01","children":[]}
            ]}]"#,
        )
        .create_async()
        .await;

    let tree = client.get_folder_tree("p1").await.unwrap();

    assert_eq!(
        render_folder_tree(&tree),
        vec![" + Feature (root-1)", "   + Day 01 (d1)"]
    );
}

use crate::common::{TOKEN, bearer, mock_login, test_config};
use mockito::Server;
use reqwest::StatusCode;
use shothub_client::application::client::Client;
use shothub_client::application::interfaces::ProjectService;
use shothub_client::error::AppError;

#[tokio::test]
async fn test_login_stores_bearer_header() {
    let mut server = Server::new_async().await;
    let mock = mock_login(&mut server).await;

    let client = Client::new_lazy(test_config(&server)).unwrap();
    let session = client.login().await.unwrap();

    assert_eq!(session.token, TOKEN);
    assert_eq!(client.get_login_header().await.unwrap(), bearer());
    assert!(client.auth().is_logged_in().await);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_header_before_login_fails() {
    let server = Server::new_async().await;
    let client = Client::new_lazy(test_config(&server)).unwrap();

    assert!(matches!(
        client.get_login_header().await,
        Err(AppError::NotLoggedIn)
    ));
}

#[tokio::test]
async fn test_requests_before_login_are_not_sent() {
    let mut server = Server::new_async().await;
    let projects = server
        .mock("GET", "/v1.0/projects")
        .match_query(mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = Client::new_lazy(test_config(&server)).unwrap();
    let result = client.get_projects(0, 50).await;

    assert!(matches!(result, Err(AppError::NotLoggedIn)));
    projects.assert_async().await;
}

#[tokio::test]
async fn test_login_rejected() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/authenticate")
        .with_status(401)
        .with_body(r#"{"title":"Unauthorized"}"#)
        .expect(1)
        .create_async()
        .await;

    let result = Client::new(test_config(&server)).await;

    match result {
        Err(AppError::LoginFailed(status)) => assert_eq!(status, StatusCode::UNAUTHORIZED),
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("login should fail"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_second_login_replaces_token() {
    let mut server = Server::new_async().await;
    let client = crate::common::logged_in_client(&mut server).await;

    server.reset_async().await;
    server
        .mock("POST", "/authenticate")
        .with_status(200)
        .with_body(r#"{"id_token":"second"}"#)
        .create_async()
        .await;

    client.login().await.unwrap();
    assert_eq!(client.get_login_header().await.unwrap(), "Bearer second");

    client.auth().logout().await;
    assert!(matches!(
        client.get_login_header().await,
        Err(AppError::NotLoggedIn)
    ));
}

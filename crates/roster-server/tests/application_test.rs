//! Application lifecycle tests: build from config, serve, shut down.

use roster_config::AppConfig;
use roster_core::{PageRequest, UserId};
use roster_grpc::RemoteUserServiceClient;
use roster_server::app::Application;
use roster_server::di::{DatabaseResolver, ServiceResolver};
use roster_service::{CreateUserRequest, UserService};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

fn test_config(dir: &tempfile::TempDir) -> AppConfig {
    let mut config = AppConfig::default();
    config.database.url = format!("sqlite://{}", dir.path().join("users.db").display());
    config
}

#[tokio::test]
async fn test_application_serves_and_shuts_down() {
    let dir = tempfile::tempdir().unwrap();
    let app = Application::build(test_config(&dir)).await.unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(app.run_with_listener(listener, async {
        let _ = rx.await;
    }));

    let client = RemoteUserServiceClient::connect(&format!("http://{addr}"))
        .await
        .unwrap();
    let created = client
        .create_user(CreateUserRequest::new("app@example.com", "App"))
        .await
        .unwrap();
    let fetched = client.get_user(UserId::new(created.id.clone())).await.unwrap();
    assert_eq!(fetched, created);
    drop(client);

    tx.send(()).unwrap();
    tokio::time::timeout(Duration::from_secs(10), handle)
        .await
        .expect("server did not shut down")
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn test_data_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let first = Application::build(test_config(&dir)).await.unwrap();
    first
        .module()
        .user_service()
        .create_user(CreateUserRequest::new("keep@example.com", "Keep"))
        .await
        .unwrap();
    first.module().database_pool().close().await;
    drop(first);

    let second = Application::build(test_config(&dir)).await.unwrap();
    let list = second
        .module()
        .user_service()
        .list_users(PageRequest::default())
        .await
        .unwrap();
    assert_eq!(list.total, 1);
    assert_eq!(list.users[0].email, "keep@example.com");
}

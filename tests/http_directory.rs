mod common;

use login_form::domain::entities::UserRecord;
use login_form::domain::repositories::UserDirectory;
use login_form::error::DirectoryError;
use login_form::infrastructure::http::HttpUserDirectory;

#[tokio::test]
async fn test_fetch_users_decodes_records_in_order() {
    let stub = common::start_stub_directory().await;
    let directory = HttpUserDirectory::new(stub.users_url());

    let users = directory.fetch_users().await.unwrap();

    assert_eq!(
        users,
        vec![
            UserRecord::new("Leanne Graham", "Sincere@april.biz", "Bret"),
            UserRecord::new("Test User", "a@b.com", "pw"),
        ]
    );
}

#[tokio::test]
async fn test_fetch_users_empty_collection() {
    let stub = common::start_stub_directory().await;
    let directory = HttpUserDirectory::new(stub.url("/empty"));

    assert!(directory.fetch_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fetch_users_non_success_status() {
    let stub = common::start_stub_directory().await;
    let directory = HttpUserDirectory::new(stub.url("/broken"));

    let err = directory.fetch_users().await.unwrap_err();

    assert!(matches!(err, DirectoryError::Status(500)));
}

#[tokio::test]
async fn test_fetch_users_missing_route() {
    let stub = common::start_stub_directory().await;
    let directory = HttpUserDirectory::new(stub.url("/nope"));

    let err = directory.fetch_users().await.unwrap_err();

    assert!(matches!(err, DirectoryError::Status(404)));
}

#[tokio::test]
async fn test_fetch_users_wrong_shape() {
    let stub = common::start_stub_directory().await;
    let directory = HttpUserDirectory::new(stub.url("/garbage"));

    let err = directory.fetch_users().await.unwrap_err();

    assert!(matches!(err, DirectoryError::Decode(_)));
}

#[tokio::test]
async fn test_fetch_users_unreachable() {
    let directory = HttpUserDirectory::new(common::unreachable_url());

    let err = directory.fetch_users().await.unwrap_err();

    assert!(matches!(err, DirectoryError::Network(_)));
}

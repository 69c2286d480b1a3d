//! Integration tests for the settings routes.

mod helpers;

use http::StatusCode;

use helpers::TestApp;

#[tokio::test]
async fn test_settings() {
    let app = TestApp::new().await;
    app.login().await;

    let response = app.get("/settings").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Test");

    let response = app.post_follow("/settings", &[("name", "Frank Chen")]).await;
    assert_eq!(response.flashes(), ["Settings updated."]);
    assert_eq!(response.body["data"]["owner_name"], "Frank Chen");

    let response = app.post("/settings", &[("name", "")]).await;
    assert_eq!(response.location.as_deref(), Some("/settings"));
    let response = app.follow(response).await;
    assert_eq!(response.flashes(), ["Invalid input."]);
    assert_eq!(response.body["data"]["name"], "Frank Chen");

    let long_name = "n".repeat(21);
    let response = app
        .post_follow("/settings", &[("name", long_name.as_str())])
        .await;
    assert_eq!(response.flashes(), ["Invalid input."]);
}

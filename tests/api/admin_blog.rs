use crate::helpers::{
    assert_is_json_error, assert_json_response, spawn_app, spawn_app_with_dead_backend,
};
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn creating_a_post_requires_a_token() {
    // Arrange
    let app = spawn_app().await;
    let body = serde_json::json!({
        "title": "Product Updates",
        "content": "We shipped a fresh batch of improvements."
    });

    // Act
    let response = app.admin_create_post(&body, None).await;

    // Assert
    assert_is_json_error(&response, 401);
    let error_body = assert_json_response(response).await;
    assert!(!error_body["success"].as_bool().unwrap());
    assert!(
        error_body["error"]
            .as_str()
            .unwrap()
            .contains("Authentication required")
    );
}

#[tokio::test]
async fn a_garbage_token_is_rejected() {
    // Arrange
    let app = spawn_app().await;
    let body = serde_json::json!({
        "title": "Product Updates",
        "content": "We shipped a fresh batch of improvements."
    });

    // Act
    let response = app
        .admin_create_post(&body, Some("definitely-not-a-token"))
        .await;

    // Assert
    assert_is_json_error(&response, 401);
    let error_body = assert_json_response(response).await;
    assert!(!error_body["success"].as_bool().unwrap());
    assert!(
        error_body["error"]
            .as_str()
            .unwrap()
            .contains("Authentication failed")
    );
}

#[tokio::test]
async fn an_expired_token_never_reaches_the_backend() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.backend_server)
        .await;
    let token = app.expired_admin_token();

    // Act
    let response = app
        .admin_update_post("launch-week", &serde_json::json!({ "title": "x" }), Some(&token))
        .await;

    // Assert
    assert_is_json_error(&response, 401);
    let error_body = assert_json_response(response).await;
    assert!(!error_body["success"].as_bool().unwrap());
    assert!(
        error_body["error"]
            .as_str()
            .unwrap()
            .contains("Token expired")
    );
}

#[tokio::test]
async fn a_valid_post_is_written_to_disk_and_served() {
    // Arrange
    let app = spawn_app().await;
    let token = app.admin_token();
    let body = serde_json::json!({
        "title": "Product Updates",
        "content": "We shipped a fresh batch of improvements."
    });

    // Act
    let response = app.admin_create_post(&body, Some(&token)).await;

    // Assert
    assert_eq!(201, response.status().as_u16());
    let created = assert_json_response(response).await;
    assert_eq!(created["slug"], "product-updates");
    assert!(
        tokio::fs::try_exists(app.posts_dir.path().join("product-updates.md"))
            .await
            .unwrap()
    );
    let served = app.get_post("product-updates").await;
    assert_eq!(200, served.status().as_u16());
    let post = assert_json_response(served).await;
    assert_eq!(post["title"], "Product Updates");
    assert_eq!(post["content"], "We shipped a fresh batch of improvements.");
}

#[tokio::test]
async fn a_supplied_slug_is_sanitised_before_use() {
    // Arrange
    let app = spawn_app().await;
    let token = app.admin_token();
    let body = serde_json::json!({
        "title": "Product Updates",
        "slug": "  Custom Launch!! ",
        "content": "We shipped a fresh batch of improvements."
    });

    // Act
    let response = app.admin_create_post(&body, Some(&token)).await;

    // Assert
    assert_eq!(201, response.status().as_u16());
    let created = assert_json_response(response).await;
    assert_eq!(created["slug"], "custom-launch");
}

#[tokio::test]
async fn the_stored_date_is_normalised_to_iso_form() {
    // Arrange
    let app = spawn_app().await;
    let token = app.admin_token();
    let body = serde_json::json!({
        "title": "Product Updates",
        "date": "March 2, 2024",
        "content": "We shipped a fresh batch of improvements."
    });

    // Act
    let response = app.admin_create_post(&body, Some(&token)).await;

    // Assert
    assert_eq!(201, response.status().as_u16());
    let raw = tokio::fs::read_to_string(app.posts_dir.path().join("product-updates.md"))
        .await
        .expect("Failed to read the stored post.");
    assert!(raw.contains("date: \"2024-03-02\""));
}

#[tokio::test]
async fn an_invalid_payload_lists_the_offending_fields() {
    // Arrange
    let app = spawn_app().await;
    let token = app.admin_token();
    let body = serde_json::json!({
        "title": "Hi",
        "content": "short"
    });

    // Act
    let response = app.admin_create_post(&body, Some(&token)).await;

    // Assert
    assert_is_json_error(&response, 400);
    let error_body = assert_json_response(response).await;
    assert!(!error_body["success"].as_bool().unwrap());
    assert_eq!(error_body["error"], "Validation failed");
    let fields: Vec<&str> = error_body["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"title"));
    assert!(fields.contains(&"content"));
}

#[tokio::test]
async fn a_payload_without_a_title_still_gets_a_field_report() {
    // Arrange
    let app = spawn_app().await;
    let token = app.admin_token();
    let body = serde_json::json!({
        "content": "We shipped a fresh batch of improvements."
    });

    // Act
    let response = app.admin_create_post(&body, Some(&token)).await;

    // Assert
    assert_is_json_error(&response, 400);
    let error_body = assert_json_response(response).await;
    assert!(!error_body["success"].as_bool().unwrap());
    assert_eq!(error_body["error"], "Validation failed");
    let fields: Vec<&str> = error_body["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"title"));
}

#[tokio::test]
async fn reusing_a_slug_is_a_conflict() {
    // Arrange
    let app = spawn_app().await;
    let token = app.admin_token();
    let body = serde_json::json!({
        "title": "Product Updates",
        "content": "We shipped a fresh batch of improvements."
    });
    let first = app.admin_create_post(&body, Some(&token)).await;
    assert_eq!(201, first.status().as_u16());

    // Act
    let response = app.admin_create_post(&body, Some(&token)).await;

    // Assert
    assert_is_json_error(&response, 409);
    let error_body = assert_json_response(response).await;
    assert!(!error_body["success"].as_bool().unwrap());
    assert_eq!(error_body["error"], "A post with this slug already exists");
}

#[tokio::test]
async fn updates_are_forwarded_with_the_bearer_token_and_the_reply_relayed() {
    // Arrange
    let app = spawn_app().await;
    let token = app.admin_token();
    let update = serde_json::json!({ "title": "Launch Week, Revised" });
    let backend_reply = serde_json::json!({ "success": true });
    Mock::given(method("PUT"))
        .and(path("/api/blog/launch-week"))
        .and(header("Authorization", format!("Bearer {}", token).as_str()))
        .and(body_json(update.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(backend_reply.clone()))
        .expect(1)
        .mount(&app.backend_server)
        .await;

    // Act
    let response = app
        .admin_update_post("launch-week", &update, Some(&token))
        .await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body = assert_json_response(response).await;
    assert_eq!(body, backend_reply);
}

#[tokio::test]
async fn the_backend_status_is_relayed_verbatim() {
    // Arrange
    let app = spawn_app().await;
    let token = app.admin_token();
    Mock::given(method("PUT"))
        .and(path("/api/blog/launch-week"))
        .respond_with(ResponseTemplate::new(418).set_body_string("I'm a teapot"))
        .expect(1)
        .mount(&app.backend_server)
        .await;

    // Act
    let response = app
        .admin_update_post("launch-week", &serde_json::json!({}), Some(&token))
        .await;

    // Assert
    assert_eq!(418, response.status().as_u16());
    assert_eq!("I'm a teapot", response.text().await.unwrap());
}

#[tokio::test]
async fn deletions_are_forwarded_with_the_bearer_token() {
    // Arrange
    let app = spawn_app().await;
    let token = app.admin_token();
    Mock::given(method("DELETE"))
        .and(path("/api/blog/launch-week"))
        .and(header("Authorization", format!("Bearer {}", token).as_str()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&app.backend_server)
        .await;

    // Act
    let response = app.admin_delete_post("launch-week", Some(&token)).await;

    // Assert
    assert_eq!(204, response.status().as_u16());
}

#[tokio::test]
async fn an_unreachable_backend_surfaces_as_a_500() {
    // Arrange
    let app = spawn_app_with_dead_backend().await;
    let token = app.admin_token();

    // Act
    let response = app
        .admin_update_post("launch-week", &serde_json::json!({}), Some(&token))
        .await;

    // Assert
    assert_is_json_error(&response, 500);
    let error_body = assert_json_response(response).await;
    assert!(!error_body["success"].as_bool().unwrap());
    assert_eq!(error_body["error"], "Something went wrong");
}

use crate::helpers::spawn_app;

#[tokio::test]
async fn the_openapi_document_is_served() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app
        .api_client
        .get(format!("{}/api-docs/openapi.json", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(200, response.status().as_u16());
    let document: serde_json::Value = response
        .json()
        .await
        .expect("Failed to parse the response body as JSON.");
    assert_eq!(document["info"]["title"], "Sitekit API");
    assert!(document["paths"].get("/api/blog").is_some());
    assert!(document["paths"].get("/api/admin/blog/{slug}").is_some());
}

#[tokio::test]
async fn the_swagger_ui_is_served() {
    // Arrange
    let app = spawn_app().await;
    // A one-off client: unlike `api_client` it follows the redirect to
    // the UI's index page.
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(format!("{}/swagger-ui", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body = response
        .text()
        .await
        .expect("Failed to read the response body.");
    assert!(body.contains("Swagger UI"));
}

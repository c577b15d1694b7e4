use crate::helpers::{assert_is_json_error, assert_json_response, spawn_app};

#[tokio::test]
async fn listing_an_empty_posts_directory_returns_an_empty_array() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_posts().await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body = assert_json_response(response).await;
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn posts_are_listed_newest_first() {
    // Arrange
    let app = spawn_app().await;
    app.seed_post(
        "january-update",
        "---\ntitle: \"January Update\"\ndate: \"2024-01-01\"\n---\nOlder news.",
    )
    .await;
    app.seed_post("next-milestones", "No date on this one.").await;
    app.seed_post(
        "june-launch",
        "---\ntitle: \"June Launch\"\ndate: \"2024-06-01\"\n---\nFresh news.",
    )
    .await;

    // Act
    let response = app.get_posts().await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body = assert_json_response(response).await;
    let slugs: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|post| post["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["june-launch", "january-update", "next-milestones"]);
}

#[tokio::test]
async fn non_markdown_files_are_ignored() {
    // Arrange
    let app = spawn_app().await;
    app.seed_post("a-real-post", "Body.").await;
    tokio::fs::write(app.posts_dir.path().join("notes.txt"), "not a post")
        .await
        .expect("Failed to write a stray file.");

    // Act
    let response = app.get_posts().await;

    // Assert
    let body = assert_json_response(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["slug"], "a-real-post");
}

#[tokio::test]
async fn a_post_is_served_with_normalised_fields() {
    // Arrange
    let app = spawn_app().await;
    let raw = "---\n\
        title: \"Shipping The New Editor\"\n\
        date: \"2024-03-02\"\n\
        author: \"Dana\"\n\
        excerpt: \"A quick look at the new editor.\"\n\
        image: \"https://example.com/editor.png\"\n\
        ---\n\n\
        Plenty of body text here.\n";
    app.seed_post("shipping-the-new-editor", raw).await;

    // Act
    let response = app.get_post("shipping-the-new-editor").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body = assert_json_response(response).await;
    assert_eq!(body["slug"], "shipping-the-new-editor");
    assert_eq!(body["title"], "Shipping The New Editor");
    assert_eq!(body["date"], "March 2, 2024");
    assert_eq!(body["author"], "Dana");
    assert_eq!(body["excerpt"], "A quick look at the new editor.");
    assert_eq!(body["image"], "https://example.com/editor.png");
    assert_eq!(body["content"], "Plenty of body text here.");
}

#[tokio::test]
async fn missing_metadata_falls_back_to_derived_values() {
    // Arrange
    let app = spawn_app().await;
    app.seed_post(
        "my-first-post",
        "This is **bold** text with [a link](https://example.com).\n",
    )
    .await;

    // Act
    let response = app.get_post("my-first-post").await;

    // Assert
    let body = assert_json_response(response).await;
    assert_eq!(body["title"], "My First Post");
    assert_eq!(body["date"], "");
    assert_eq!(body["author"], "");
    assert_eq!(body["excerpt"], "This is bold text with a link.");
    // An absent image is left out instead of being serialised as null.
    assert!(body.get("image").is_none());
}

#[tokio::test]
async fn an_unknown_slug_is_an_enveloped_404() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_post("never-written").await;

    // Assert
    assert_is_json_error(&response, 404);
    let body = assert_json_response(response).await;
    assert!(!body["success"].as_bool().unwrap());
    assert_eq!(body["error"], "Post not found");
}

#[tokio::test]
async fn a_malformed_slug_is_an_enveloped_404() {
    // Arrange
    let app = spawn_app().await;
    app.seed_post("a-real-post", "Body.").await;

    // Act
    let response = app.get_post("Not_A_Slug").await;

    // Assert
    assert_is_json_error(&response, 404);
    let body = assert_json_response(response).await;
    assert!(!body["success"].as_bool().unwrap());
    assert_eq!(body["error"], "Post not found");
}

//! Integration tests for catalog permissions and the favorites/gallery flow.
//!
//! These tests require:
//! - A migrated, seeded database (vb-cli migrate && vb-cli seed)
//! - A running server (cargo run -p vestiubem-server)
//! - `VESTIUBEM_TEST_ADMIN_PASSWORD` for the admin tests

use reqwest::StatusCode;
use serde_json::{Value, json};

use vestiubem_integration_tests::{TestContext, unique_email};

fn item_payload(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Integration test item",
        "image_url": "https://example.com/item.webp",
        "price": "49.90",
        "shein_link": "#",
    })
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_catalog_list_is_public() {
    let ctx = TestContext::new();

    let resp = ctx
        .client
        .get(format!("{}/api/catalog", ctx.base_url))
        .send()
        .await
        .expect("Failed to list catalog");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse catalog");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_anonymous_catalog_mutation_rejected() {
    let ctx = TestContext::new();

    let resp = ctx
        .client
        .post(format!("{}/api/catalog", ctx.base_url))
        .json(&item_payload("Should Not Exist"))
        .send()
        .await
        .expect("Failed to call catalog create");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_regular_user_catalog_mutation_rejected() {
    let ctx = TestContext::new();
    ctx.register_user(&unique_email("shopper"), "hunter2hunter2")
        .await;

    let resp = ctx
        .client
        .post(format!("{}/api/catalog", ctx.base_url))
        .json(&item_payload("Should Not Exist"))
        .send()
        .await
        .expect("Failed to call catalog create");

    // Logged in, but not an admin: rejected before any write.
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "Requires running server and seeded admin"]
async fn test_admin_catalog_crud_roundtrip() {
    let ctx = TestContext::new();
    ctx.login_as_admin().await;

    // Create
    let resp = ctx
        .client
        .post(format!("{}/api/catalog", ctx.base_url))
        .json(&item_payload("Integration Crud Item"))
        .send()
        .await
        .expect("Failed to create item");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await.expect("Failed to parse created item");
    let id = created["id"].as_i64().expect("created item has no id");

    // Update
    let resp = ctx
        .client
        .put(format!("{}/api/catalog/{id}", ctx.base_url))
        .json(&item_payload("Integration Crud Item v2"))
        .send()
        .await
        .expect("Failed to update item");
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await.expect("Failed to parse updated item");
    assert_eq!(updated["name"], "Integration Crud Item v2");

    // Delete
    let resp = ctx
        .client
        .delete(format!("{}/api/catalog/{id}", ctx.base_url))
        .send()
        .await
        .expect("Failed to delete item");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Gone
    let resp = ctx
        .client
        .delete(format!("{}/api/catalog/{id}", ctx.base_url))
        .send()
        .await
        .expect("Failed to re-delete item");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running server and seeded catalog"]
async fn test_favorite_toggle_roundtrip() {
    let ctx = TestContext::new();
    ctx.register_user(&unique_email("favoriter"), "hunter2hunter2")
        .await;

    // Pick any seeded catalog item.
    let catalog: Vec<Value> = ctx
        .client
        .get(format!("{}/api/catalog", ctx.base_url))
        .send()
        .await
        .expect("Failed to list catalog")
        .json()
        .await
        .expect("Failed to parse catalog");
    let item_id = catalog
        .first()
        .and_then(|i| i["id"].as_i64())
        .expect("catalog is empty - run vb-cli seed");

    // Toggle on
    let body: Value = ctx
        .client
        .post(format!(
            "{}/api/favorites/{item_id}/toggle",
            ctx.base_url
        ))
        .send()
        .await
        .expect("Failed to toggle favorite")
        .json()
        .await
        .expect("Failed to parse toggle response");
    assert_eq!(body["favorited"], true);
    assert_eq!(body["favorites"].as_array().map(Vec::len), Some(1));

    // Toggle off
    let body: Value = ctx
        .client
        .post(format!(
            "{}/api/favorites/{item_id}/toggle",
            ctx.base_url
        ))
        .send()
        .await
        .expect("Failed to toggle favorite")
        .json()
        .await
        .expect("Failed to parse toggle response");
    assert_eq!(body["favorited"], false);
    assert_eq!(body["favorites"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_gallery_record_and_list() {
    let ctx = TestContext::new();
    ctx.register_user(&unique_email("gallery"), "hunter2hunter2")
        .await;

    let resp = ctx
        .client
        .post(format!("{}/api/generations", ctx.base_url))
        .json(&json!({
            "originalUserImage": "b64-user",
            "clothingImage": "b64-cloth",
            "resultImage": "b64-result",
            "clothingName": "Vestido Floral Verão",
        }))
        .send()
        .await
        .expect("Failed to save generation");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let gallery: Vec<Value> = ctx
        .client
        .get(format!("{}/api/generations", ctx.base_url))
        .send()
        .await
        .expect("Failed to list gallery")
        .json()
        .await
        .expect("Failed to parse gallery");

    assert_eq!(gallery.len(), 1);
    assert_eq!(gallery[0]["resultImage"], "b64-result");
    assert_eq!(gallery[0]["clothingName"], "Vestido Floral Verão");
}

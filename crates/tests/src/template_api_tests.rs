use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::TemplateKey;

use crate::common::{get, get_raw, post_json, test_app};

#[tokio::test]
async fn list_returns_every_key_in_order() {
    let app = test_app();

    let (status, body) = get(&app, "/api/templates").await;

    assert_eq!(status, StatusCode::OK);
    let keys: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["key"].as_str().unwrap())
        .collect();
    let expected: Vec<&str> = TemplateKey::ALL.iter().map(|k| k.as_str()).collect();
    assert_eq!(keys, expected);
    assert_eq!(body[0]["filename"], "Motion_700k.txt");
}

#[tokio::test]
async fn get_template_returns_literal() {
    let app = test_app();

    let (status, body) = get(&app, "/api/templates/statement-of-claim").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["key"], "statement-of-claim");
    assert_eq!(body["filename"], "Statement_of_Claim.txt");
    let text = body["body"].as_str().unwrap();
    assert!(text.contains("psychological games"));
    assert!(text.contains("$700,000"));
}

#[tokio::test]
async fn get_template_is_stable_across_calls() {
    let app = test_app();

    let (_, first) = get(&app, "/api/templates/affidavit").await;
    let (_, second) = get(&app, "/api/templates/affidavit").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_key_is_404_invalid_template_key() {
    let app = test_app();

    let (status, body) = get(&app, "/api/templates/last-will").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "InvalidTemplateKey");
    assert!(body["message"].as_str().unwrap().contains("last-will"));
}

#[tokio::test]
async fn padded_key_is_not_resolved() {
    let app = test_app();

    for uri in ["/api/templates/%20factum", "/api/templates/factum%20", "/api/templates/Factum"] {
        let (status, body) = get(&app, uri).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["kind"], "InvalidTemplateKey");
    }
}

// ---------------------------------------------------------------------------
// Generate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generate_packages_the_literal() {
    let app = test_app();

    let (_, template) = get(&app, "/api/templates/factum").await;
    let (status, draft) = post_json(
        &app,
        "/api/templates/generate",
        &json!({ "key": "factum" }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(draft["key"], "factum");
    assert_eq!(draft["body"], template["body"]);
    assert_eq!(draft["label"], template["label"]);
    let generated_at = draft["generated_at"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(generated_at).is_ok());
}

#[tokio::test]
async fn generate_unknown_key_is_404() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/api/templates/generate",
        &json!({ "key": "codicil" }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "InvalidTemplateKey");
}

#[tokio::test]
async fn generate_without_key_is_validation_error() {
    let app = test_app();

    let (status, body) = post_json(&app, "/api/templates/generate", "{}").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "ValidationError");
}

#[tokio::test]
async fn generate_with_malformed_json_is_bad_request() {
    let app = test_app();

    let (status, body) = post_json(&app, "/api/templates/generate", "not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "BadRequest");
}

#[tokio::test]
async fn generate_with_padded_key_is_404() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/api/templates/generate",
        &json!({ "key": " factum " }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "InvalidTemplateKey");
}

// ---------------------------------------------------------------------------
// Download
// ---------------------------------------------------------------------------

#[tokio::test]
async fn download_is_plain_text_attachment() {
    let app = test_app();

    let (status, headers, bytes) = get_raw(&app, "/api/templates/notice-of-motion/download").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get(header::CONTENT_TYPE).unwrap().to_str().unwrap(),
        "text/plain; charset=utf-8"
    );
    assert_eq!(
        headers
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap(),
        "attachment; filename=\"Motion_700k.txt\""
    );

    let (_, template) = crate::common::get(&app, "/api/templates/notice-of-motion").await;
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        template["body"].as_str().unwrap()
    );
}

#[tokio::test]
async fn every_key_downloads_with_its_filename() {
    let app = test_app();

    for key in TemplateKey::ALL {
        let uri = format!("/api/templates/{}/download", key.as_str());
        let (status, headers, bytes) = get_raw(&app, &uri).await;

        assert_eq!(status, StatusCode::OK, "{uri}");
        let disposition = headers
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert_eq!(disposition, format!("attachment; filename=\"{}\"", key.filename()));
        assert!(!bytes.is_empty());
    }
}

#[tokio::test]
async fn download_unknown_key_is_404() {
    let app = test_app();

    let (status, headers, _) = get_raw(&app, "/api/templates/codicil/download").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(headers.get(header::CONTENT_DISPOSITION).is_none());
}

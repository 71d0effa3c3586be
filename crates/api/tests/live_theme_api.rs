//! Integration tests for the live theme read side.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::{body_json, body_text, get, post_json};
use http_body_util::BodyExt;
use serde_json::json;
use vitrine_core::theming::default_definition;

#[tokio::test]
async fn live_theme_serves_prepaint_defaults_before_mount() {
    let t = common::build_unmounted_app();

    let json = body_json(get(t.app(), "/api/v1/theme").await).await;

    assert_eq!(json["data"]["placeholder"], true);
    assert_eq!(json["data"]["propagation"]["state"], "uninitialized");
    assert_eq!(
        json["data"]["variables"]["color-primary-500"],
        default_definition().color_scheme.primary.s500
    );
}

#[tokio::test]
async fn live_theme_reports_mounted_default() {
    let t = common::build_test_app().await;

    let json = body_json(get(t.app(), "/api/v1/theme").await).await;

    assert_eq!(json["data"]["placeholder"], false);
    assert_eq!(json["data"]["theme"]["slug"], "default");
    assert!(json["data"]["token"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn stylesheet_is_served_at_root() {
    let t = common::build_test_app().await;

    let response = get(t.app(), "/theme.css").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "text/css; charset=utf-8"
    );
    let css = body_text(response).await;
    assert!(css.starts_with(":root {"));
    assert!(css.contains(".btn-primary"));
}

#[tokio::test]
async fn event_stream_delivers_applied_event() {
    let t = common::build_test_app().await;
    let created = body_json(
        post_json(
            t.app(),
            "/api/v1/admin/themes",
            common::theme_body("ocean", "#0077be"),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = get(t.app(), "/api/v1/theme/events").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "text/event-stream");

    t.state.controller.switch_to(id).await.unwrap();

    let mut body = response.into_body();
    let frame = tokio::time::timeout(Duration::from_secs(5), body.frame())
        .await
        .expect("event within timeout")
        .unwrap()
        .unwrap();
    let text = String::from_utf8(frame.into_data().unwrap().to_vec()).unwrap();

    assert!(text.starts_with("event: theme.applied\n"));
    let data = text
        .lines()
        .find_map(|l| l.strip_prefix("data: "))
        .unwrap();
    let event: serde_json::Value = serde_json::from_str(data).unwrap();
    assert_eq!(event["type"], "applied");
    assert_eq!(event["themeId"], id);
    assert_eq!(event["slug"], "ocean");
}

#[tokio::test]
async fn variables_endpoint_matches_snapshot() {
    let t = common::build_test_app().await;
    let snapshot = t.state.controller.document().snapshot();

    let json = body_json(get(t.app(), "/api/v1/theme/variables").await).await;

    assert_eq!(
        json["data"].as_object().unwrap().len(),
        snapshot.variables.len()
    );
    assert_eq!(json["data"]["color-primary-500"], json!(snapshot.variables["color-primary-500"]));
}

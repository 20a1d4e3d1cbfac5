use std::{io::Cursor, sync::Arc};

use axum::http::StatusCode;
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use clap::Parser;
use image::{ImageFormat, RgbImage};
use nutriscope_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::Value;

/// Every remote collaborator points at a closed port, so the pipeline runs
/// on its fallbacks with the builtin calorie table and in-memory history.
async fn test_server() -> TestServer {
    let args = Args::try_parse_from([
        "nutriscope",
        "--clarifai-url",
        "http://127.0.0.1:1/classify",
        "--llm-base-url",
        "http://127.0.0.1:1",
        "--http-timeout-secs",
        "2",
    ])
    .unwrap();

    let state = state(Arc::new(args)).await.unwrap();
    TestServer::new(router(state).unwrap()).unwrap()
}

fn png_image(width: u32, height: u32) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    RgbImage::new(width, height)
        .write_to(&mut buffer, ImageFormat::Png)
        .unwrap();
    buffer.into_inner()
}

fn image_part(data: Vec<u8>) -> Part {
    Part::bytes(data).file_name("meal.png").mime_type("image/png")
}

#[tokio::test]
async fn health_reports_ok() {
    let server = test_server().await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ok");
}

#[tokio::test]
async fn analyze_falls_back_to_manual_food_and_builtin_table() {
    let server = test_server().await;

    let response = server
        .post("/api/analyze")
        .multipart(
            MultipartForm::new()
                .add_part("image", image_part(png_image(10, 10)))
                .add_text("manual_food", "  Pizza "),
        )
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["foods"][0]["name"], "pizza");
    assert_eq!(body["portion"]["segmentation_fallback"], true);
    // 100 px * 0.25 cm2/px * 3 cm * 0.8 g/cm3 = 60 g at 266 kcal/100g
    let mass = body["total_mass_grams"].as_f64().unwrap();
    let calories = body["total_calories"].as_f64().unwrap();
    assert!((mass - 60.0).abs() < 1e-9);
    assert!((calories - 159.6).abs() < 1e-9);
    let protein = body["macros"]["protein_g"].as_f64().unwrap();
    let sugar_rise = body["macros"]["approx_sugar_rise_g"].as_f64().unwrap();
    assert!((protein - 6.6).abs() < 1e-9);
    assert!((sugar_rise - 19.8 * 0.6).abs() < 1e-9);
    assert_eq!(body["breakdown"][0]["glycemic_index"], 60.0);
    assert_eq!(body["top_predictions"], serde_json::json!([]));
}

#[tokio::test]
async fn analysis_shows_up_in_history() {
    let server = test_server().await;

    server
        .post("/api/analyze")
        .multipart(MultipartForm::new().add_part("image", image_part(png_image(20, 10))))
        .await
        .assert_status_ok();

    let mut entries = Vec::new();
    for _ in 0..100 {
        let response = server.get("/api/history").await;
        response.assert_status_ok();
        entries = response.json::<Value>()["data"]
            .as_array()
            .cloned()
            .unwrap_or_default();
        if !entries.is_empty() {
            break;
        }
        tokio::task::yield_now().await;
    }

    // unknown food: 120 g at the 200 kcal default
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["calories"], 240);
    assert_eq!(entries[0]["foods"][0]["food"], "unknown");
}

#[tokio::test]
async fn analyze_without_image_is_bad_request() {
    let server = test_server().await;

    let response = server
        .post("/api/analyze")
        .multipart(MultipartForm::new().add_text("manual_food", "pizza"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "E_BAD_REQUEST");
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn analyze_rejects_empty_and_undecodable_images() {
    let server = test_server().await;

    server
        .post("/api/analyze")
        .multipart(MultipartForm::new().add_part("image", image_part(Vec::new())))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .post("/api/analyze")
        .multipart(
            MultipartForm::new().add_part("image", image_part(b"not a picture".to_vec())),
        )
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversized_image_is_rejected() {
    let server = test_server().await;
    let oversized = vec![0u8; 10 * 1024 * 1024 + 1];

    let response = server
        .post("/api/analyze")
        .multipart(MultipartForm::new().add_part("image", image_part(oversized)))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn blank_chat_is_bad_request() {
    let server = test_server().await;

    let response = server
        .post("/api/chat")
        .multipart(MultipartForm::new().add_text("message", "   "))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn chat_with_undecodable_image_is_bad_request() {
    let server = test_server().await;

    let response = server
        .post("/api/chat")
        .multipart(
            MultipartForm::new()
                .add_text("message", "hi")
                .add_part("image", image_part(b"GIF89a truncated".to_vec())),
        )
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unreachable_assistant_is_bad_gateway() {
    let server = test_server().await;

    let response = server
        .post("/api/chat")
        .multipart(MultipartForm::new().add_text("message", "how much protein is in tofu?"))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert_eq!(response.json::<Value>()["code"], "E_UPSTREAM_FAILURE");
}

#[tokio::test]
async fn openapi_document_lists_the_endpoints() {
    let server = test_server().await;

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let paths = &response.json::<Value>()["paths"];
    assert!(paths.get("/api/analyze").is_some());
    assert!(paths.get("/api/chat").is_some());
    assert!(paths.get("/api/history").is_some());
}

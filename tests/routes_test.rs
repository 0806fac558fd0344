use actix_web::{http::StatusCode, test, App};
use serde_json::{json, Value};
use std::sync::Arc;
use tattoogen::{
    server::{self, AppState},
    ImageGenerator, StabilityClient, StabilityConfig, RETRY_SUGGESTION,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEXT_TO_IMAGE: &str = "/v1/generation/stable-diffusion-xl-1024-v1-0/text-to-image";

fn generator_for(uri: &str) -> Arc<dyn ImageGenerator> {
    let client = StabilityClient::new(
        StabilityConfig::new()
            .with_api_key("sk-test")
            .with_api_host(uri),
    )
    .expect("client");
    Arc::new(client.image().clone())
}

async fn post_generate(generator: Arc<dyn ImageGenerator>, body: Value) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .app_data(AppState::new(generator))
            .configure(server::configure),
    )
    .await;
    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    (status, test::read_body_json(resp).await)
}

#[actix_web::test]
async fn generate_returns_image_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_TO_IMAGE))
        .and(body_json(json!({
            "text_prompts": [
                {
                    "text": "a dragon, traditional tattoo style, high quality, detailed, professional tattoo design",
                    "weight": 1.0
                },
                {
                    "text": "blurry, low quality, text, watermark, signature",
                    "weight": -1.0
                }
            ],
            "cfg_scale": 7,
            "height": 1024,
            "width": 1024,
            "steps": 30,
            "samples": 1
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "artifacts": [{ "base64": "AAAA" }] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post_generate(
        generator_for(&server.uri()),
        json!({ "prompt": "a dragon", "style": "traditional", "width": 1024, "height": 1024 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "imageUrl": "data:image/png;base64,AAAA" }));
}

#[actix_web::test]
async fn missing_prompt_is_a_bad_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    for body in [json!({}), json!({ "prompt": "" }), json!({ "prompt": "   " })] {
        let (status, body) = post_generate(generator_for(&server.uri()), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "Prompt is required" }));
    }
}

#[actix_web::test]
async fn off_catalog_choices_are_bad_requests() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = post_generate(
        generator_for(&server.uri()),
        json!({ "prompt": "a rose", "width": 512, "height": 512 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Unsupported dimensions: 512x512");

    let (status, body) = post_generate(
        generator_for(&server.uri()),
        json!({ "prompt": "a rose", "width": 1344 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Missing height: width and height must be sent together"
    );

    let (status, body) = post_generate(
        generator_for(&server.uri()),
        json!({ "prompt": "a rose", "style": "anime" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Unknown tattoo style: anime");
}

#[actix_web::test]
async fn remote_failure_maps_to_500_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_TO_IMAGE))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "overloaded" })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) =
        post_generate(generator_for(&server.uri()), json!({ "prompt": "a dragon" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error generating image");
    assert_eq!(body["error"], "overloaded");
    assert!(!body["suggestion"].as_str().unwrap_or_default().is_empty());
}

#[actix_web::test]
async fn success_without_artifacts_maps_to_500_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_TO_IMAGE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "artifacts": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) =
        post_generate(generator_for(&server.uri()), json!({ "prompt": "a dragon" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error generating image");
    assert_eq!(body["error"], "Malformed response: No images generated");
    assert_eq!(body["suggestion"], RETRY_SUGGESTION);
}

#[actix_web::test]
async fn network_failure_maps_to_500_envelope() {
    let (status, body) =
        post_generate(generator_for("http://127.0.0.1:9"), json!({ "prompt": "a dragon" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error generating image");
    assert!(!body["error"].as_str().unwrap_or_default().is_empty());
    assert_eq!(body["suggestion"], RETRY_SUGGESTION);
}

#[actix_web::test]
async fn unparseable_body_is_a_bad_request() {
    let app = test::init_service(
        App::new()
            .app_data(AppState::new(generator_for("http://127.0.0.1:9")))
            .configure(server::configure),
    )
    .await;
    let req = test::TestRequest::post()
        .uri("/api/generate")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"]
        .as_str()
        .unwrap_or_default()
        .starts_with("Invalid request body"));
}

#[actix_web::test]
async fn catalog_health_and_index_are_served() {
    let app = test::init_service(
        App::new()
            .app_data(AppState::new(generator_for("http://127.0.0.1:9")))
            .configure(server::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/catalog").to_request();
    let catalog: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(catalog["styles"].as_array().map(Vec::len), Some(6));
    assert_eq!(catalog["styles"][1], json!({ "id": "traditional", "name": "Traditional" }));
    assert_eq!(catalog["dimensions"].as_array().map(Vec::len), Some(9));
    assert_eq!(
        catalog["dimensions"][0],
        json!({ "width": 1024, "height": 1024, "name": "Square (1024x1024)" })
    );
    assert_eq!(
        catalog["defaults"],
        json!({ "style": "realistic", "width": 1024, "height": 1024 })
    );

    let req = test::TestRequest::get().uri("/health").to_request();
    let health: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(health, json!({ "status": "ok" }));

    let req = test::TestRequest::get().uri("/").to_request();
    let page = test::call_and_read_body(&app, req).await;
    let page = String::from_utf8_lossy(&page);
    assert!(page.contains("AI Tattoo Generator"));
    assert!(page.contains("/api/generate"));
}

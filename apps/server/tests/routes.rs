use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use mlife::domain::comparison::TechnicalParameter;
use mlife::domain::config::ApiConfig;
use mlife_server::Server;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    let mut cfg = ApiConfig::default();
    cfg.dataset.parameters = vec![
        TechnicalParameter::new("Efficiency (%)", 40.0, 50.0),
        TechnicalParameter::new("Forced Outages", 0.0, 3.0),
    ];
    Server::builder().config(cfg).build().unwrap().router()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn estimate_reference_scenario() {
    let body = json!({
        "usageHoursPerYear": 4863,
        "stressCyclesPerYear": 200000,
        "operatingTemperatureCelsius": 515
    });
    let (status, json) = send(app(), post_json("/estimate", &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["years"], 1);
    assert_eq!(json["months"], 6);
    assert_eq!(json["days"], 23);
    assert_eq!(json["component"], "Turbine Blades and Compressor Components");
    assert!(json["summary"].as_str().unwrap().starts_with("Estimated Remaining Life: 1 years"));
    assert_eq!(json["warnings"], json!([]));
}

#[tokio::test]
async fn estimate_rejects_zero_stress_cycles() {
    let body = json!({
        "usageHoursPerYear": 4863,
        "stressCyclesPerYear": 0,
        "operatingTemperatureCelsius": 515
    });
    let (status, json) = send(app(), post_json("/estimate", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "InvalidInputError");
    assert!(json["message"].as_str().unwrap().contains("stressCyclesPerYear"));
}

#[tokio::test]
async fn estimate_rejects_malformed_body() {
    let (status, json) = send(app(), post_json("/estimate", &json!({ "usageHoursPerYear": 1 }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "InvalidInputError");
}

#[tokio::test]
async fn estimate_flags_out_of_range_inputs() {
    let body = json!({
        "usageHoursPerYear": 9000,
        "stressCyclesPerYear": 200000,
        "operatingTemperatureCelsius": 515
    });
    let (status, json) = send(app(), post_json("/estimate", &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["warnings"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn parameters_are_listed_in_dataset_order() {
    let (status, json) = send(app(), get("/parameters")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["name"], "Efficiency (%)");
    assert_eq!(json[0]["percentageChange"], 25.0);
    assert_eq!(json[1]["percentageChange"], 0.0);
}

#[tokio::test]
async fn single_parameter_lookup() {
    let (status, json) = send(app(), get("/parameters/Forced%20Outages")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["value2023"], 3.0);

    let (status, json) = send(app(), get("/parameters/Voltage")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "UnknownParameterError");
}

#[tokio::test]
async fn monthly_series_is_reproducible() {
    let (status, first) = send(app(), get("/parameters/Efficiency%20(%25)/monthly")).await;
    let (_, second) = send(app(), get("/parameters/Efficiency%20(%25)/monthly")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["months"][0], "Jan");
    assert_eq!(first["series2013"].as_array().unwrap().len(), 12);
    assert_eq!(first, second);

    let (status, _) = send(app(), get("/parameters/Voltage/monthly")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_lists_features_without_caching() {
    let response = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "no-store, no-cache, must-revalidate"
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "up");
    assert_eq!(json["features"], json!(["comparison", "estimator"]));
}

#[test]
fn invalid_dataset_fails_bootstrap() {
    let mut cfg = ApiConfig::default();
    cfg.dataset.parameters = vec![
        TechnicalParameter::new("Dup", 1.0, 2.0),
        TechnicalParameter::new("Dup", 1.0, 2.0),
    ];
    assert!(Server::builder().config(cfg).build().is_err());
}

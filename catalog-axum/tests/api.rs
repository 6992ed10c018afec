use axum_test::TestServer;
use catalog_axum::{config::AxumConfig, router};
use catalog_sqlite::{Db, config::SqliteConfig};
use rstest::*;
use serde_json::{Value, json};

mod app;
use app::TestApp;

async fn spawn_server() -> TestServer {
    let db = Db::open(&SqliteConfig::default()).await.unwrap();
    TestServer::new(router(TestApp(Some(db)), AxumConfig::default()).unwrap()).unwrap()
}

#[test_log::test(tokio::test)]
async fn api_index_answers_in_json() {
    let server = spawn_server().await;

    let res = server.get("/api").await;
    res.assert_status_ok();
    assert!(
        res.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("json"))
    );
    res.assert_json(&json!({ "msg": "Desde API" }));
}

#[rstest]
#[case::empty_body(json!({}), 4)]
#[case::negative_price(json!({ "name": "Mouse Testing", "price": -12 }), 1)]
#[case::zero_price(json!({ "name": "Mouse Testing", "price": 0 }), 1)]
#[case::non_numeric_price(json!({ "name": "Mouse Testing", "price": "Hello" }), 2)]
#[test_log::test(tokio::test)]
async fn create_reports_every_validation_failure(
    #[case] body: Value,
    #[case] expected: usize,
) {
    let server = spawn_server().await;

    let res = server.post("/api/products").json(&body).await;
    res.assert_status_bad_request();

    let body: Value = res.json();
    let errors = body["errors"].as_array().expect("an errors list");
    assert_eq!(errors.len(), expected);
}

#[test_log::test(tokio::test)]
async fn create_persists_a_valid_product() {
    let server = spawn_server().await;

    let res = server
        .post("/api/products")
        .json(&json!({ "name": "Mouse Testing", "price": 50 }))
        .await;
    assert_eq!(res.status_code(), 201);

    let body: Value = res.json();
    assert!(body.get("errors").is_none());
    assert_eq!(body["data"]["name"], "Mouse Testing");
    assert_eq!(body["data"]["price"], 50.0);
    // availability defaults to true when omitted
    assert_eq!(body["data"]["availability"], true);
    assert!(body["data"]["id"].is_i64());
}

#[test_log::test(tokio::test)]
async fn create_caps_the_name_at_100_characters() {
    let server = spawn_server().await;

    let res = server
        .post("/api/products")
        .json(&json!({ "name": "x".repeat(150), "price": 10 }))
        .await;
    res.assert_status_bad_request();

    let body: Value = res.json();
    let errors = body["errors"].as_array().expect("an errors list");
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0]["message"],
        "El nombre no puede exceder los 100 caracteres"
    );
}

#[test_log::test(tokio::test)]
async fn list_sorts_by_price_descending() {
    let server = spawn_server().await;

    for (name, price) in [("Teclado", 80), ("Monitor Curvo", 300), ("Mouse", 120)] {
        let res = server
            .post("/api/products")
            .json(&json!({ "name": name, "price": price }))
            .await;
        assert_eq!(res.status_code(), 201);
    }

    let res = server.get("/api/products").await;
    res.assert_status_ok();

    let body: Value = res.json();
    let prices: Vec<f64> = body["data"]
        .as_array()
        .expect("a data list")
        .iter()
        .map(|p| p["price"].as_f64().unwrap())
        .collect();
    assert_eq!(prices, vec![300.0, 120.0, 80.0]);
}

#[test_log::test(tokio::test)]
async fn non_integer_ids_are_rejected_before_lookup() {
    let server = spawn_server().await;

    let res = server.get("/api/products/not-a-number").await;
    res.assert_status_bad_request();

    let body: Value = res.json();
    assert_eq!(body["errors"][0]["message"], "ID no válido");
}

#[test_log::test(tokio::test)]
async fn unknown_ids_answer_not_found() {
    let server = spawn_server().await;
    let not_found = json!({ "error": "Producto no encontrado" });

    let res = server.get("/api/products/999").await;
    res.assert_status_not_found();
    res.assert_json(&not_found);

    let res = server
        .put("/api/products/999")
        .json(&json!({ "name": "Mouse", "price": 10, "availability": true }))
        .await;
    res.assert_status_not_found();
    res.assert_json(&not_found);

    let res = server.patch("/api/products/999").await;
    res.assert_status_not_found();
    res.assert_json(&not_found);

    let res = server.delete("/api/products/999").await;
    res.assert_status_not_found();
    res.assert_json(&not_found);
}

#[test_log::test(tokio::test)]
async fn update_replaces_every_field() {
    let server = spawn_server().await;

    let created: Value = server
        .post("/api/products")
        .json(&json!({ "name": "Mouse", "price": 120 }))
        .await
        .json();
    let id = created["data"]["id"].as_i64().unwrap();

    let res = server
        .put(&format!("/api/products/{id}"))
        .json(&json!({ "name": "Mouse Gamer", "price": 150, "availability": false }))
        .await;
    res.assert_status_ok();

    let body: Value = res.json();
    assert_eq!(body["data"]["name"], "Mouse Gamer");
    assert_eq!(body["data"]["price"], 150.0);
    assert_eq!(body["data"]["availability"], false);

    // the replacement is visible on a fresh read
    let res = server.get(&format!("/api/products/{id}")).await;
    res.assert_status_ok();
    let fetched: Value = res.json();
    assert_eq!(fetched["data"], body["data"]);
}

#[test_log::test(tokio::test)]
async fn update_requires_a_boolean_availability() {
    let server = spawn_server().await;

    let created: Value = server
        .post("/api/products")
        .json(&json!({ "name": "Mouse", "price": 120 }))
        .await
        .json();
    let id = created["data"]["id"].as_i64().unwrap();

    let res = server
        .put(&format!("/api/products/{id}"))
        .json(&json!({ "name": "Mouse", "price": 120, "availability": "si" }))
        .await;
    res.assert_status_bad_request();

    let body: Value = res.json();
    let errors = body["errors"].as_array().expect("an errors list");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["message"], "Valor para disponibilidad no válido");
}

#[test_log::test(tokio::test)]
async fn update_accumulates_path_and_body_failures() {
    let server = spawn_server().await;

    let res = server
        .put("/api/products/not-a-number")
        .json(&json!({}))
        .await;
    res.assert_status_bad_request();

    let body: Value = res.json();
    let errors = body["errors"].as_array().expect("an errors list");
    // bad id + missing name + three price failures + missing availability
    assert_eq!(errors.len(), 6);
    assert_eq!(errors[0]["message"], "ID no válido");
}

#[test_log::test(tokio::test)]
async fn toggling_twice_restores_availability() {
    let server = spawn_server().await;

    let created: Value = server
        .post("/api/products")
        .json(&json!({ "name": "Audifonos", "price": 50 }))
        .await
        .json();
    let id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["availability"], true);

    let once: Value = server.patch(&format!("/api/products/{id}")).await.json();
    assert_eq!(once["data"]["availability"], false);

    let twice: Value = server.patch(&format!("/api/products/{id}")).await.json();
    assert_eq!(twice["data"]["availability"], true);
    assert_eq!(twice["data"], created["data"]);
}

#[test_log::test(tokio::test)]
async fn delete_confirms_and_removes() {
    let server = spawn_server().await;

    let created: Value = server
        .post("/api/products")
        .json(&json!({ "name": "Webcam", "price": 45 }))
        .await
        .json();
    let id = created["data"]["id"].as_i64().unwrap();

    let res = server.delete(&format!("/api/products/{id}")).await;
    res.assert_status_ok();
    res.assert_json(&json!({ "data": "Producto Eliminado" }));

    let res = server.get(&format!("/api/products/{id}")).await;
    res.assert_status_not_found();
}

#[test_log::test(tokio::test)]
async fn degraded_mode_answers_500_instead_of_hanging() {
    let server = TestServer::new(router(TestApp(None), AxumConfig::default()).unwrap()).unwrap();

    let res = server.get("/api/products").await;
    assert_eq!(res.status_code(), 500);
    res.assert_json(&json!({ "error": "Hubo un error" }));

    // the process keeps serving: store-free endpoints still work
    let res = server.get("/api").await;
    res.assert_status_ok();
}

#[test_log::test(tokio::test)]
async fn cors_echoes_only_the_configured_origin() {
    let db = Db::open(&SqliteConfig::default()).await.unwrap();
    let config = AxumConfig {
        allowed_origin: Some("http://localhost:5173".to_string()),
        ..Default::default()
    };
    let server = TestServer::new(router(TestApp(Some(db)), config).unwrap()).unwrap();

    let res = server
        .get("/api")
        .add_header(
            axum::http::header::ORIGIN,
            axum::http::HeaderValue::from_static("http://localhost:5173"),
        )
        .await;
    assert_eq!(
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );

    let res = server
        .get("/api")
        .add_header(
            axum::http::header::ORIGIN,
            axum::http::HeaderValue::from_static("http://otra-parte.example"),
        )
        .await;
    assert!(res.headers().get("access-control-allow-origin").is_none());
}

#[test_log::test(tokio::test)]
async fn malformed_allowed_origin_is_an_error_not_a_panic() {
    let db = Db::open(&SqliteConfig::default()).await.unwrap();
    let config = AxumConfig {
        allowed_origin: Some("http://localhost:5173\n".to_string()),
        ..Default::default()
    };
    assert!(router(TestApp(Some(db)), config).is_err());
}

#[test_log::test(tokio::test)]
async fn docs_serve_the_generated_openapi() {
    let server = spawn_server().await;

    let res = server.get("/docs/api.json").await;
    res.assert_status_ok();
    let body: Value = res.json();
    assert!(body.get("openapi").is_some());
    assert_eq!(body["info"]["title"], "REST API Products");

    let res = server.get("/docs").await;
    res.assert_status_ok();
}

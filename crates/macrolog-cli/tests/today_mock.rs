use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn profile_json() -> serde_json::Value {
    json!({
        "id": 1,
        "name": "Ana",
        "age": 28,
        "height_cm": 165.0,
        "weight_kg": 60.0,
        "sex": "female",
        "goal": "build_muscle",
        "calorie_target": 2400.0,
        "protein_target": 140.0
    })
}

async fn run_today(server: &MockServer) -> assert_cmd::assert::Assert {
    let dir = tempdir().unwrap();
    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        cargo_bin_cmd!("macrolog")
            .env("MACROLOG_HOME", dir.path())
            .env_remove("MACROLOG_API_URL")
            .args(["--api-url", &uri, "today"])
            .assert()
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn test_today_prints_totals_and_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/log/today"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "logs": [{
                "id": 3, "food_id": 7, "grams": 150.0, "name": "Oats",
                "calories": 375.0, "protein": 15.0, "datetime": "2025-03-01T08:00:00"
            }],
            "totals": {"calories": 375.0, "protein": 15.0, "carbs": 60.0, "fat": 7.5}
        })))
        .mount(&server)
        .await;

    run_today(&server)
        .await
        .success()
        .stdout(predicate::str::contains("Ana"))
        .stdout(predicate::str::contains("build muscle"))
        .stdout(predicate::str::contains("Oats"))
        .stdout(predicate::str::contains("2400 kcal"));
}

#[tokio::test]
async fn test_today_without_profile_points_to_setup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::Value::Null))
        .mount(&server)
        .await;

    run_today(&server)
        .await
        .failure()
        .stderr(predicate::str::contains("No profile yet"));
}

#[tokio::test]
async fn test_today_reports_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    run_today(&server)
        .await
        .failure()
        .stderr(predicate::str::contains("fetch profile"))
        .stderr(predicate::str::contains("503"));
}

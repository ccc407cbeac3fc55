#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use pathwise_backend::config::Config;

pub const PHYSICS_QUIZ: &str = r#"{
  "questions": [
    {"question": "Rate of change of position?", "options": ["Velocity", "Mass"], "answer": "Velocity", "concept": "Kinematics"},
    {"question": "Rate of change of velocity?", "options": ["Acceleration", "Force"], "answer": "Acceleration", "concept": "Kinematics"},
    {"question": "What bends light in a lens?", "options": ["Refraction", "Reflection"], "answer": "Refraction", "concept": "Optics"}
  ]
}"#;

pub const QA_FILE: &str = r#"{
  "Physics": [
    {"question": "What is Newton's second law?", "answer": "F = ma"},
    {"question": "What is the speed of light?", "answer": "About 3e8 m/s"}
  ]
}"#;

/// Router plus the quiz directory backing it
pub struct TestApp {
    pub router: Router,
    _dir: TempDir,
}

pub fn create_test_app() -> TestApp {
    create_test_app_with(true)
}

pub fn create_test_app_with(with_qa_file: bool) -> TestApp {
    build_app(with_qa_file, None)
}

/// App backed by a reference data file instead of the built-in dataset
pub fn create_test_app_with_reference(reference_json: &str) -> TestApp {
    build_app(true, Some(reference_json))
}

fn build_app(with_qa_file: bool, reference_json: Option<&str>) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("quiz_physics.json"), PHYSICS_QUIZ).unwrap();
    if with_qa_file {
        std::fs::write(dir.path().join("questions.json"), QA_FILE).unwrap();
    }
    let reference_data_path = reference_json.map(|json| {
        let path = dir.path().join("reference.json");
        std::fs::write(&path, json).unwrap();
        path
    });

    let config = Config {
        quiz_dir: dir.path().to_path_buf(),
        reference_data_path,
        recommender_seed: Some(7),
        ..Config::default()
    };
    let router = pathwise_backend::create_app(&config).unwrap();
    TestApp { router, _dir: dir }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, headers, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, _, body) = self.send(request).await;
        (status, body)
    }

    pub async fn send_json(&self, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let (status, _, body) = self.send(request).await;
        (status, body)
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use ap_gui_exporter::{AppState, Config, DETAIL_ATTEMPTS, INVENTORY_ATTEMPTS, create_router};
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower::ServiceExt;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// `admin:password`
const BASIC_AUTH: &str = "Basic YWRtaW46cGFzc3dvcmQ=";

fn make_state(controller_vip: &str) -> Arc<AppState> {
    make_state_with_timeout(controller_vip, 5)
}

fn make_state_with_timeout(controller_vip: &str, timeout_secs: u64) -> Arc<AppState> {
    let vip = controller_vip.to_string();
    let config = Config::from_vars(|key| match key {
        "VIRTUAL_CONTROLLER_VIP" => Some(vip.clone()),
        "VIRTUAL_CONTROLLER_GUI_USER" => Some("admin".to_string()),
        "VIRTUAL_CONTROLLER_GUI_PASS" => Some("password".to_string()),
        "FETCH_TIMEOUT_SECONDS" => Some(timeout_secs.to_string()),
        _ => None,
    })
    .unwrap();
    Arc::new(AppState::new(config).unwrap())
}

fn ap_record(hostname: &str, ip: &str) -> String {
    format!(r#"["_","_","_","_","_","_","_","{hostname}","_","_","_","_","_","{ip}"]"#)
}

fn controller_page(records: &[String]) -> String {
    format!(
        "<html><head><title>Virtual Controller</title>\n<script>\nvar apListData=[{},];\n</script>\n</head><body></body></html>",
        records.join(",")
    )
}

fn ap_page(count_2g: u32, count_5g: u32) -> String {
    format!(
        r#"<html><body><table>
<tr id="2G_connect_count_form"><td>2.4GHz</td><td>:</td><td></td><td>{count_2g}</td></tr>
<tr id="5G1_connect_count_form"><td>5GHz</td><td>:</td><td></td><td>{count_5g}</td></tr>
</table></body></html>"#
    )
}

async fn start_controller(records: &[String]) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/top-virtual-controller.html"))
        .and(header("authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_string(controller_page(records)))
        .mount(&server)
        .await;
    server
}

async fn start_ap(body: String) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/manage-system.html"))
        .and(header("authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;
    server
}

async fn get(state: Arc<AppState>, uri: &str) -> (StatusCode, Option<String>, String) {
    let resp = create_router(state)
        .oneshot(Request::get(uri).body(String::new()).unwrap())
        .await
        .unwrap();

    let status = resp.status();
    let content_type = resp
        .headers()
        .get("content-type")
        .map(|ct| ct.to_str().unwrap().to_string());
    let body = String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();

    (status, content_type, body)
}

// --- /metrics endpoint ---

#[tokio::test]
async fn metrics_reports_both_bands_for_every_ap() {
    let ap1 = start_ap(ap_page(10, 13)).await;
    let ap2 = start_ap(ap_page(10, 13)).await;
    let controller = start_controller(&[
        ap_record("ap-01", &ap1.address().to_string()),
        ap_record("ap-02", &ap2.address().to_string()),
    ])
    .await;

    let (status, content_type, body) =
        get(make_state(&controller.address().to_string()), "/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/plain"));
    assert_eq!(
        body,
        "ap_active_connections{hostname=\"ap-01\",frequency=\"2.4GHz\"} 10\n\
         ap_active_connections{hostname=\"ap-01\",frequency=\"5GHz\"} 13\n\
         ap_active_connections{hostname=\"ap-02\",frequency=\"2.4GHz\"} 10\n\
         ap_active_connections{hostname=\"ap-02\",frequency=\"5GHz\"} 13\n"
    );
}

#[tokio::test]
async fn metrics_omits_ap_whose_page_is_broken() {
    let healthy = start_ap(ap_page(4, 2)).await;

    let broken = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/manage-system.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>busy</body></html>"))
        .expect(DETAIL_ATTEMPTS as u64)
        .mount(&broken)
        .await;

    let controller = start_controller(&[
        ap_record("ap-ok", &healthy.address().to_string()),
        ap_record("ap-broken", &broken.address().to_string()),
    ])
    .await;

    let (status, _, body) = get(make_state(&controller.address().to_string()), "/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.lines().count(), 2);
    assert!(body.contains("hostname=\"ap-ok\",frequency=\"2.4GHz\"} 4"));
    assert!(!body.contains("ap-broken"));
}

#[tokio::test]
async fn metrics_drops_ap_that_exceeds_fetch_timeout() {
    let healthy = start_ap(ap_page(6, 1)).await;

    let hung = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/manage-system.html"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(ap_page(99, 99))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&hung)
        .await;

    let controller = start_controller(&[
        ap_record("ap-ok", &healthy.address().to_string()),
        ap_record("ap-hung", &hung.address().to_string()),
    ])
    .await;

    let started = Instant::now();
    let (status, _, body) = get(
        make_state_with_timeout(&controller.address().to_string(), 1),
        "/metrics",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.lines().count(), 2);
    assert!(body.contains("hostname=\"ap-ok\",frequency=\"2.4GHz\"} 6"));
    assert!(!body.contains("ap-hung"));
    // Every attempt on the hung AP times out instead of waiting 30s
    assert!(started.elapsed() < Duration::from_secs(25));
}

#[tokio::test]
async fn metrics_parses_bodies_of_error_responses() {
    let ap = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/manage-system.html"))
        .respond_with(ResponseTemplate::new(503).set_body_string(ap_page(2, 5)))
        .mount(&ap)
        .await;

    let controller = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/top-virtual-controller.html"))
        .respond_with(ResponseTemplate::new(401).set_body_string(controller_page(&[
            ap_record("ap-01", &ap.address().to_string()),
        ])))
        .mount(&controller)
        .await;

    let (status, _, body) = get(make_state(&controller.address().to_string()), "/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        "ap_active_connections{hostname=\"ap-01\",frequency=\"2.4GHz\"} 2\n\
         ap_active_connections{hostname=\"ap-01\",frequency=\"5GHz\"} 5\n"
    );
}

#[tokio::test]
async fn metrics_returns_500_when_inventory_script_missing() {
    let controller = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/top-virtual-controller.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>login</body></html>"))
        .expect(INVENTORY_ATTEMPTS as u64)
        .mount(&controller)
        .await;

    let (status, _, body) = get(make_state(&controller.address().to_string()), "/metrics").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "could not find script node with apListData");
}

#[tokio::test]
async fn metrics_returns_500_when_controller_unreachable() {
    // Bind and drop to get a port nobody listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (status, _, body) = get(make_state(&addr.to_string()), "/metrics").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("failed to fetch"), "unexpected body: {body}");
}

// --- /aplist endpoint ---

#[tokio::test]
async fn aplist_returns_joined_json() {
    let ap1 = start_ap(ap_page(3, 9)).await;
    let ap1_addr = ap1.address().to_string();
    let controller = start_controller(&[ap_record("lobby", &ap1_addr)]).await;

    let (status, content_type, body) =
        get(make_state(&controller.address().to_string()), "/aplist").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));

    let aps: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        aps,
        serde_json::json!([{
            "hostname": "lobby",
            "ip_address": ap1_addr,
            "active_2_4ghz_connections": 3,
            "active_5ghz_connections": 9,
        }])
    );
}

#[tokio::test]
async fn aplist_is_empty_for_empty_inventory() {
    let controller = start_controller(&[]).await;

    let (status, _, body) = get(make_state(&controller.address().to_string()), "/aplist").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn aplist_returns_500_for_malformed_inventory() {
    let controller = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/top-virtual-controller.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<script>var apListData=[["_","_","_","_","_","_","_",7,"_","_","_","_","_","10.0.0.1"]];</script>"#,
        ))
        .mount(&controller)
        .await;

    let (status, content_type, body) =
        get(make_state(&controller.address().to_string()), "/aplist").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(content_type.unwrap().starts_with("text/plain"));
    assert!(body.contains("field 7"), "unexpected body: {body}");
}

// --- /health endpoint ---

#[tokio::test]
async fn health_returns_ok_without_contacting_devices() {
    let (status, _, body) = get(make_state("127.0.0.1:1"), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let health: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "ok");
}

// --- 404 for unknown routes ---

#[tokio::test]
async fn unknown_route_returns_404() {
    let (status, _, _) = get(make_state("127.0.0.1:1"), "/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::fixtures::{TestDomains, UPSTREAM_ANSWER_IP};
use common::test_server::{query_a, spawn_fake_upstream, TestServer};
use http_body_util::BodyExt;
use palisade_dns_api::{create_api_routes, AppState};
use palisade_dns_application::{GetLogsUseCase, GetStatsUseCase, UpdateListUseCase};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tower::ServiceExt;

const SINKHOLE_IP: Ipv4Addr = Ipv4Addr::new(0, 0, 0, 0);

#[tokio::test]
async fn stats_and_logs_reflect_a_real_resolved_query() {
    let upstream = spawn_fake_upstream(UPSTREAM_ANSWER_IP).await;
    let server = TestServer::start(upstream, SINKHOLE_IP).await;
    query_a(server.dns_addr, TestDomains::clean()).await;

    let api_state = AppState {
        get_stats: Arc::new(GetStatsUseCase::new(server.list_store.clone(), server.stats_log.clone())),
        get_logs: Arc::new(GetLogsUseCase::new(server.stats_log.clone())),
        update_list: Arc::new(UpdateListUseCase::new(server.list_store.clone())),
    };
    let app = create_api_routes(api_state);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/api/stats").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["total_queries"], 1);
    assert_eq!(json["blocked_queries"], 0);

    let response = app
        .oneshot(Request::builder().uri("/api/logs").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let logs = json["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 2, "arrival line and outcome line are both logged");
    assert!(logs[0].as_str().unwrap().contains("FORWARDED"));
    assert!(logs[1].as_str().unwrap().contains("Query from"));
}

#[tokio::test]
async fn denylist_written_via_api_takes_effect_on_next_query() {
    let upstream = spawn_fake_upstream(UPSTREAM_ANSWER_IP).await;
    let server = TestServer::start(upstream, SINKHOLE_IP).await;

    let api_state = AppState {
        get_stats: Arc::new(GetStatsUseCase::new(server.list_store.clone(), server.stats_log.clone())),
        get_logs: Arc::new(GetLogsUseCase::new(server.stats_log.clone())),
        update_list: Arc::new(UpdateListUseCase::new(server.list_store.clone())),
    };
    let app = create_api_routes(api_state);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/denylist")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"domains":["corp.example"]}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let dns_response = query_a(server.dns_addr, TestDomains::denied_but_allowlisted()).await;
    match dns_response.answers()[0].data() {
        hickory_proto::rr::RData::A(a) => assert_eq!(a.0, SINKHOLE_IP),
        other => panic!("expected an A record, got {other:?}"),
    }
}

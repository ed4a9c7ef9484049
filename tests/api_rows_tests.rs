// SPDX-License-Identifier: MIT

//! Row endpoints: activity counts and weekday distance rows.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

mod common;

async fn get_json(app: axum::Router, uri: &str) -> serde_json::Value {
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    common::body_json(response).await
}

#[tokio::test]
async fn test_activity_counts_ranked() {
    let (app, _state) = common::create_test_app();
    let body = get_json(app, "/api/activities").await;

    let activities = body["activities"].as_array().unwrap();
    assert_eq!(activities.len(), 3);
    assert_eq!(activities[0]["activity"], "run");
    assert_eq!(activities[0]["count"], 3);
    assert_eq!(activities[1]["activity"], "bike");
    assert_eq!(activities[1]["count"], 1);
    assert_eq!(activities[2]["activity"], "walk");
}

#[tokio::test]
async fn test_distance_rows_and_per_day_means() {
    let (app, _state) = common::create_test_app();
    let body = get_json(app, "/api/distances").await;

    // All five completed events carry a positive distance.
    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["weekday"], "Mon");
    assert_eq!(rows[0]["activity"], "run");

    let per_day = body["per_day"].as_array().unwrap();
    assert_eq!(per_day.len(), 7);
    assert_eq!(per_day[0]["weekday"], "Sun");
    assert_eq!(per_day[6]["weekday"], "Sat");

    // Saturday: (5 + 20) / 2 = 12.5 km, the highest mean.
    assert!((per_day[6]["mean"].as_f64().unwrap() - 12.5).abs() < 1e-9);
    assert_eq!(body["longest_day"], "Sat");
    assert_eq!(body["longest_on_weekend"], true);
}

#[tokio::test]
async fn test_health_reports_record_count() {
    let (app, state) = common::create_test_app();
    let body = get_json(app, "/health").await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["records"], state.collection.len());
}

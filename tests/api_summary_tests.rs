// SPDX-License-Identifier: MIT

//! Summary endpoint tests: top-3 slots, N/A fill, weekend answer.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use paceline::models::RawPost;
use tower::ServiceExt;

mod common;

async fn get_summary(app: axum::Router) -> serde_json::Value {
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/summary")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    common::body_json(response).await
}

#[tokio::test]
async fn test_summary_over_fixture() {
    let (app, _state) = common::create_test_app();
    let summary = get_summary(app).await;

    assert_eq!(summary["number_activities"], 3);
    assert_eq!(summary["first_most"], "run");
    assert_eq!(summary["second_most"], "bike");
    assert_eq!(summary["third_most"], "walk");

    // bike has the single 20 km ride; walk only the 2.5 km stroll.
    assert_eq!(summary["longest_activity_type"], "bike");
    assert_eq!(summary["shortest_activity_type"], "walk");

    // The two Saturday efforts dominate the per-day means.
    assert_eq!(summary["weekday_or_weekend"], "the weekend");
}

#[tokio::test]
async fn test_summary_fills_missing_slots_with_na() {
    let posts = vec![
        RawPost {
            text: "Just completed a 5.00 km run".to_string(),
            created_at: "Mon Jan 01 08:00:00 +0000 2024".to_string(),
        },
        RawPost {
            text: "Just completed a 2.00 km walk".to_string(),
            created_at: "Tue Jan 02 08:00:00 +0000 2024".to_string(),
        },
    ];
    let (app, _state) = common::create_test_app_with(posts);
    let summary = get_summary(app).await;

    assert_eq!(summary["number_activities"], 2);
    assert_eq!(summary["first_most"], "run");
    assert_eq!(summary["second_most"], "walk");
    assert_eq!(summary["third_most"], "N/A");
}

#[tokio::test]
async fn test_summary_over_empty_dataset() {
    let (app, _state) = common::create_test_app_with(vec![]);
    let summary = get_summary(app).await;

    assert_eq!(summary["number_activities"], 0);
    assert_eq!(summary["first_most"], "N/A");
    assert_eq!(summary["second_most"], "N/A");
    assert_eq!(summary["third_most"], "N/A");
    assert_eq!(summary["longest_activity_type"], "N/A");
    assert_eq!(summary["shortest_activity_type"], "N/A");
    // Every weekday mean is 0, so Sunday wins the tie and Sunday is a
    // weekend day.
    assert_eq!(summary["weekday_or_weekend"], "the weekend");
}

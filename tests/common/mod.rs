// SPDX-License-Identifier: MIT

use paceline::config::Config;
use paceline::models::RawPost;
use paceline::routes::create_router;
use paceline::services::RecordCollection;
use paceline::AppState;
use std::sync::Arc;

/// Fixture posts covering every category plus written commentary.
#[allow(dead_code)]
pub fn sample_posts() -> Vec<RawPost> {
    let post = |text: &str, created_at: &str| RawPost {
        text: text.to_string(),
        created_at: created_at.to_string(),
    };

    vec![
        post(
            "Just completed a 10.00 km run with Runkeeper. #Runkeeper https://rnkpr.com/a1",
            "Mon Jan 01 08:00:00 +0000 2024",
        ),
        post(
            "Just completed a 5.00 km run - great 5k today! https://rnkpr.com/a2 #Runkeeper",
            "Sat Jan 06 09:15:00 +0000 2024",
        ),
        post(
            "Just completed a 20.00 km bike ride - windy out there",
            "Sat Jan 06 10:00:00 +0000 2024",
        ),
        post(
            "Just completed a 2.50 km walk with Runkeeper.",
            "Tue Jan 02 18:30:00 +0000 2024",
        ),
        post(
            "Just completed a 3.10 mi run - easy 3.1 miles before work",
            "Wed Jan 03 07:00:00 +0000 2024",
        ),
        post("Watch my run live right now #RKLive", "Thu Jan 04 07:00:00 +0000 2024"),
        post(
            "I just set a goal to run 100 km in January",
            "Fri Jan 05 07:00:00 +0000 2024",
        ),
        post("Nothing to do with running", "Sun Jan 07 12:00:00 +0000 2024"),
    ]
}

/// Create a test app over the fixture posts.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with(sample_posts())
}

/// Create a test app over a caller-supplied dataset.
#[allow(dead_code)]
pub fn create_test_app_with(posts: Vec<RawPost>) -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let collection = RecordCollection::from_raw(posts);
    let state = Arc::new(AppState { config, collection });
    (create_router(state.clone()), state)
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

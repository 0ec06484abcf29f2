//! HTTP-level tests for the dashboard home summary and categories.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, ids, patch};

#[tokio::test]
async fn summary_over_seed_data() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/dashboard/summary").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];

    assert_eq!(data["stats"]["total_projects"], 6);
    assert_eq!(data["stats"]["featured_projects"], 3);
    assert_eq!(data["stats"]["active_categories"], 5);
    assert_eq!(data["stats"]["total_students"], 6);

    let web = &data["category_distribution"][0];
    assert_eq!(web["slug"], "Web");
    assert_eq!(web["count"], 2);
    assert_eq!(web["percentage"], 33);
    assert_eq!(data["category_distribution"].as_array().unwrap().len(), 5);

    assert_eq!(data["featured_split"]["featured"]["percentage"], 50);
    assert_eq!(data["featured_split"]["normal"]["count"], 3);

    assert_eq!(ids(&data["recent_projects"]), vec![1, 2, 3]);
}

#[tokio::test]
async fn summary_follows_dashboard_mutations() {
    let app = common::build_test_app();
    patch(app.clone(), "/api/v1/admin/projects/3/featured").await;
    delete(app.clone(), "/api/v1/admin/projects/1").await;

    let json = body_json(get(app, "/api/v1/dashboard/summary").await).await;
    let data = &json["data"];

    assert_eq!(data["stats"]["total_projects"], 5);
    assert_eq!(data["featured_split"]["featured"]["count"], 3);
    assert_eq!(data["featured_split"]["featured"]["percentage"], 60);
    assert_eq!(data["category_distribution"][0]["percentage"], 20);
}

#[tokio::test]
async fn summary_with_no_projects_reports_zero_percentages() {
    let app = common::build_test_app();
    for id in 1..=6 {
        delete(app.clone(), &format!("/api/v1/admin/projects/{id}")).await;
    }

    let json = body_json(get(app, "/api/v1/dashboard/summary").await).await;
    let data = &json["data"];

    assert_eq!(data["stats"]["total_projects"], 0);
    assert!(data["category_distribution"]
        .as_array()
        .unwrap()
        .iter()
        .all(|c| c["percentage"] == 0));
    assert_eq!(data["featured_split"]["normal"]["percentage"], 0);
    assert!(data["recent_projects"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn categories_list_sentinel_first_without_icons() {
    let app = common::build_test_app();
    let json = body_json(get(app, "/api/v1/categories").await).await;

    let categories = json["data"].as_array().unwrap();
    assert_eq!(categories[0]["slug"], "all");
    assert_eq!(categories[0]["name"], "Semua");
    assert!(categories.iter().all(|c| c["icon"].is_null()));
}

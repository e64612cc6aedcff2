//! Integration tests for project briefs, listing and stats.

mod common;

use axum::http::StatusCode;
use common::{add_member, body_json, create_agency, get_as, post_json_as, valid_brief};
use sqlx::PgPool;

const OWNER: i64 = 1;
const CLIENT: i64 = 3;
const OUTSIDER: i64 = 99;

#[sqlx::test(migrations = "../../db/migrations")]
async fn submitted_brief_becomes_requested_proposal(pool: PgPool) {
    let agency_id = create_agency(&pool, OWNER, "Northwind").await;
    add_member(&pool, agency_id, CLIENT, "client", "viewer").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_as(app, "/api/v1/projects", CLIENT, valid_brief(agency_id)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let project = &json["data"];
    assert_eq!(project["status"], "proposal");
    assert_eq!(project["proposal_status"], "requested");
    assert_eq!(project["created_by"], CLIENT);
    assert_eq!(project["budget_range"], "$10,000 - $25,000");
    assert!(project["completion_date"]
        .as_str()
        .unwrap()
        .starts_with("2026-12-01"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_brief_is_rejected(pool: PgPool) {
    let agency_id = create_agency(&pool, OWNER, "Northwind").await;

    let mut brief = valid_brief(agency_id);
    brief["description"] = "Too short".into();

    let app = common::build_test_app(pool.clone());
    let response = post_json_as(app, "/api/v1/projects", OWNER, brief).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("more detailed description"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn brief_requires_approved_membership(pool: PgPool) {
    let agency_id = create_agency(&pool, OWNER, "Northwind").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_as(app, "/api/v1/projects", OUTSIDER, valid_brief(agency_id)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let response = post_json_as(app, "/api/v1/projects", OWNER, valid_brief(4242)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_and_stats_cover_visible_projects(pool: PgPool) {
    let mine = create_agency(&pool, OWNER, "Northwind").await;
    let other = create_agency(&pool, OUTSIDER, "Elsewhere").await;

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = post_json_as(app, "/api/v1/projects", OWNER, valid_brief(mine)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    let app = common::build_test_app(pool.clone());
    let response = post_json_as(app, "/api/v1/projects", OUTSIDER, valid_brief(other)).await;
    let hidden_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    sqlx::query(
        "UPDATE projects SET status = 'finished'
         WHERE id = (SELECT MIN(id) FROM projects WHERE agency_id = $1)",
    )
    .bind(mine)
    .execute(&pool)
    .await
    .unwrap();

    let app = common::build_test_app(pool.clone());
    let json = body_json(get_as(app, "/api/v1/projects", OWNER).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get_as(app, "/api/v1/projects/stats", OWNER).await).await;
    assert_eq!(json["data"]["total"], 2);
    assert_eq!(json["data"]["proposals"], 1);
    assert_eq!(json["data"]["finished"], 1);
    assert_eq!(json["data"]["ongoing"], 0);

    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/projects?agency_id={other}");
    let json = body_json(get_as(app, &uri, OWNER).await).await;
    assert!(json["data"].as_array().unwrap().is_empty());

    let app = common::build_test_app(pool.clone());
    let response = get_as(app, &format!("/api/v1/projects/{hidden_id}"), OWNER).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

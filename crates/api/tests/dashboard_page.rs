//! Integration tests for the HTML dashboard at `/`.
//!
//! Each test drives the full router against a real database, so the fixed
//! query, rendering and error mapping are exercised together.

mod common;

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use common::{body_json, body_text, get};
use sqlx::PgPool;

/// Extract the `<tbody>` section so assertions ignore header cells.
fn table_body(html: &str) -> &str {
    let start = html.find("<tbody>").expect("page has a <tbody>");
    let end = html.find("</tbody>").expect("page closes <tbody>");
    &html[start..end]
}

// ---------------------------------------------------------------------------
// Test: the three seeded rows render exactly, in store order
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("passengers"))]
async fn page_renders_all_rows_in_store_order(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers().contains_key("x-request-id"),
        "dashboard responses carry the request id"
    );
    let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"), "got {content_type}");

    let html = body_text(response).await;
    assert!(html.contains(&format!("<h1>{}</h1>", common::TEST_TITLE)));
    assert!(html.contains(common::TEST_CAPTION));
    assert!(html.contains("<th>id</th><th>name</th><th>location</th>"));

    assert_eq!(
        table_body(&html),
        "<tbody>\n\
         <tr><td>1</td><td>Tarak</td><td>Pathankot</td></tr>\n\
         <tr><td>2</td><td>Aryan</td><td>Jind</td></tr>\n\
         <tr><td>3</td><td>Coach Saab</td><td>Atta</td></tr>\n"
    );
}

// ---------------------------------------------------------------------------
// Test: an empty table renders an empty table, not an error
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_table_renders_empty_body(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert_eq!(table_body(&html), "<tbody>\n");
}

// ---------------------------------------------------------------------------
// Test: repeated loads are identical and do not touch the store
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("passengers"))]
async fn repeated_loads_are_identical(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let first = body_text(get(app.clone(), "/").await).await;
    let second = body_text(get(app, "/").await).await;

    assert_eq!(first, second);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM passengers")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 3);
}

// ---------------------------------------------------------------------------
// Test: every load re-runs the query
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("passengers"))]
async fn page_reflects_rows_added_between_loads(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let before = body_text(get(app.clone(), "/").await).await;
    assert!(!before.contains("Meera"));

    sqlx::query("INSERT INTO passengers (name, location) VALUES ('Meera', 'Ludhiana')")
        .execute(&pool)
        .await
        .unwrap();

    let after = body_text(get(app, "/").await).await;
    assert!(after.contains("<td>Meera</td><td>Ludhiana</td>"));
}

// ---------------------------------------------------------------------------
// Test: stored text is escaped before it reaches the page
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn stored_markup_is_escaped(pool: PgPool) {
    sqlx::query("INSERT INTO passengers (name, location) VALUES ($1, $2)")
        .bind("<b>Bold</b>")
        .bind("A & B")
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let html = body_text(get(app, "/").await).await;

    assert!(html.contains("<td>&lt;b&gt;Bold&lt;/b&gt;</td><td>A &amp; B</td>"));
    assert!(!html.contains("<b>Bold</b>"));
}

// ---------------------------------------------------------------------------
// Test: configured title and caption are used
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn configured_title_and_caption_are_rendered(pool: PgPool) {
    let mut config = common::test_config();
    config.dashboard.title = "Coach Manifest".to_string();
    config.dashboard.caption = "Everyone on board".to_string();

    let app = common::build_test_app_with(pool, config);
    let html = body_text(get(app, "/").await).await;

    assert!(html.contains("<title>Coach Manifest</title>"));
    assert!(html.contains("Everyone on board"));
}

// ---------------------------------------------------------------------------
// Test: a missing table fails the request with a 500
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_table_returns_internal_error(pool: PgPool) {
    sqlx::query("DROP TABLE passengers")
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

// ---------------------------------------------------------------------------
// Test: a closed pool fails the request instead of rendering nothing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("passengers"))]
async fn closed_pool_returns_internal_error(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    pool.close().await;

    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

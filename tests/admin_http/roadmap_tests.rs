//! Roadmap routes.

use super::helpers::{TestApp, app, assert_redirect, body_text};
use axum::http::StatusCode;
use eyre::ensure;
use folio::roadmap::domain::{TodoId, TodoStatus};
use folio::roadmap::services::CreateTodoRequest;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_is_pending_and_listed(app: TestApp) -> eyre::Result<()> {
    let cookie = app.admin_cookie();

    let response = app
        .post_form(
            "/admin/roadmap",
            "description=Write+design+doc&category=Planning",
            Some(&cookie),
        )
        .await;
    assert_redirect(&response, "/admin/roadmap");
    let page = app.follow(&response, Some(&cookie)).await;

    let dashboard = app.state.roadmap().dashboard().await?;
    ensure!(dashboard.pending.len() == 1);
    ensure!(dashboard.active.is_empty());
    ensure!(page.contains("Task added to Planning."));
    ensure!(page.contains("Write design doc"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_description_is_flashed(app: TestApp) -> eyre::Result<()> {
    let cookie = app.admin_cookie();

    let response = app
        .post_form("/admin/roadmap", "description=+++", Some(&cookie))
        .await;
    assert_redirect(&response, "/admin/roadmap");
    let page = app.follow(&response, Some(&cookie)).await;

    ensure!(page.contains("task description must not be empty"));
    ensure!(app.state.roadmap().dashboard().await?.pending.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn complete_promotes_next_pending_task(app: TestApp) -> eyre::Result<()> {
    let cookie = app.admin_cookie();
    let roadmap = app.state.roadmap();
    let first = roadmap.create(CreateTodoRequest::new("T1")).await?;
    let second = roadmap.create(CreateTodoRequest::new("T2")).await?;
    roadmap.activate(first.id()).await?;

    let response = app
        .post_form(&format!("/admin/roadmap/{}/complete", first.id()), "", Some(&cookie))
        .await;
    assert_redirect(&response, "/admin/roadmap");
    let page = app.follow(&response, Some(&cookie)).await;

    ensure!(roadmap.find(first.id()).await?.status() == TodoStatus::Done);
    ensure!(roadmap.find(second.id()).await?.status() == TodoStatus::Active);
    ensure!(page.contains("Next up: T2"));
    Ok(())
}

#[rstest]
#[case("activate")]
#[case("pause")]
#[case("complete")]
#[case("delete")]
#[tokio::test(flavor = "multi_thread")]
async fn transitions_on_missing_task_are_not_found(app: TestApp, #[case] action: &str) {
    let cookie = app.admin_cookie();

    let response = app
        .post_form(&format!("/admin/roadmap/404/{action}"), "", Some(&cookie))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edit_form_shows_the_task(app: TestApp) -> eyre::Result<()> {
    let cookie = app.admin_cookie();
    let todo = app
        .state
        .roadmap()
        .create(CreateTodoRequest::new("Review <PR>").with_category("Code"))
        .await?;

    let response = app
        .get(&format!("/admin/roadmap/{}/edit", todo.id()), Some(&cookie))
        .await;
    ensure!(response.status() == StatusCode::OK);
    let page = body_text(response).await;

    ensure!(page.contains("Review &lt;PR&gt;"));
    ensure!(page.contains(r#"<option value="pending" selected>"#));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn override_writes_status_without_adjusting_others(app: TestApp) -> eyre::Result<()> {
    let cookie = app.admin_cookie();
    let roadmap = app.state.roadmap();
    let first = roadmap.create(CreateTodoRequest::new("A")).await?;
    let second = roadmap.create(CreateTodoRequest::new("B")).await?;
    roadmap.activate(first.id()).await?;

    let response = app
        .post_form(
            &format!("/admin/roadmap/{}/edit", second.id()),
            "description=B+renamed&category=&status=Active",
            Some(&cookie),
        )
        .await;
    assert_redirect(&response, "/admin/roadmap");

    let edited = roadmap.find(second.id()).await?;
    ensure!(edited.description() == "B renamed");
    ensure!(edited.category() == "General");
    ensure!(roadmap.dashboard().await?.active.len() == 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn override_with_unknown_status_returns_to_the_form(app: TestApp) -> eyre::Result<()> {
    let cookie = app.admin_cookie();
    let todo = app
        .state
        .roadmap()
        .create(CreateTodoRequest::new("A"))
        .await?;
    let edit_path = format!("/admin/roadmap/{}/edit", todo.id());

    let response = app
        .post_form(&edit_path, "description=A&status=archived", Some(&cookie))
        .await;
    assert_redirect(&response, &edit_path);
    let page = app.follow(&response, Some(&cookie)).await;

    ensure!(page.contains("unknown task status: archived"));
    ensure!(app.state.roadmap().find(todo.id()).await?.status() == TodoStatus::Pending);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edit_of_missing_task_is_not_found(app: TestApp) {
    let cookie = app.admin_cookie();
    let missing = TodoId::new(77);

    let form = app
        .get(&format!("/admin/roadmap/{missing}/edit"), Some(&cookie))
        .await;
    let submit = app
        .post_form(
            &format!("/admin/roadmap/{missing}/edit"),
            "description=&status=bogus",
            Some(&cookie),
        )
        .await;

    assert_eq!(form.status(), StatusCode::NOT_FOUND);
    assert_eq!(submit.status(), StatusCode::NOT_FOUND);
}

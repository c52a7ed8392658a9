//! Catalogue routes.

use super::helpers::{TestApp, app, assert_redirect, body_text};
use axum::http::StatusCode;
use eyre::ensure;
use folio::portfolio::domain::{
    CatalogEntry, Certificate, CertificateDraft, Project, Skill, SkillDraft,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_form_adds_a_project(app: TestApp) -> eyre::Result<()> {
    let cookie = app.admin_cookie();

    let response = app
        .post_form(
            "/admin/projects",
            "title=Folio&role=Author&tech=Rust%2C+axum&description=This+site&image=",
            Some(&cookie),
        )
        .await;
    assert_redirect(&response, "/admin#projects");
    let page = app.follow(&response, Some(&cookie)).await;

    let projects = app.state.portfolio().list::<Project>().await?;
    ensure!(projects.len() == 1);
    ensure!(projects.first().and_then(Project::image).is_none());
    ensure!(page.contains("Project added: Folio"));
    ensure!(page.contains("1 projects"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_required_field_is_flashed(app: TestApp) -> eyre::Result<()> {
    let cookie = app.admin_cookie();

    let response = app
        .post_form("/admin/certificates", "title=Rust&provider=", Some(&cookie))
        .await;
    assert_redirect(&response, "/admin#certificates");
    let page = app.follow(&response, Some(&cookie)).await;

    ensure!(page.contains("provider must not be empty"));
    ensure!(app.state.portfolio().list::<Certificate>().await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_kind_is_not_found(app: TestApp) {
    let cookie = app.admin_cookie();

    let response = app
        .post_form("/admin/awards", "title=Nope", Some(&cookie))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn skill_edit_overwrites_every_field(app: TestApp) -> eyre::Result<()> {
    let cookie = app.admin_cookie();
    let skill = app
        .state
        .portfolio()
        .add::<Skill>(SkillDraft::new("Languages", "Rust")?.with_svg(Some("<svg/>".to_owned())))
        .await?;

    let response = app
        .post_form(
            &format!("/admin/skills/{}/edit", skill.id()),
            "category=Tools&name=Cargo",
            Some(&cookie),
        )
        .await;
    assert_redirect(&response, "/admin#skills");

    let stored = app
        .state
        .portfolio()
        .find::<Skill>(skill.id())
        .await?
        .ok_or_else(|| eyre::eyre!("skill disappeared"))?;
    ensure!(stored.category() == "Tools");
    ensure!(stored.name() == "Cargo");
    ensure!(stored.svg().is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edit_form_renders_current_values(app: TestApp) -> eyre::Result<()> {
    let cookie = app.admin_cookie();
    let certificate = app
        .state
        .portfolio()
        .add::<Certificate>(CertificateDraft::new("Async Rust", "Ferrous")?)
        .await?;

    let response = app
        .get(
            &format!("/admin/certificates/{}/edit", certificate.id()),
            Some(&cookie),
        )
        .await;
    ensure!(response.status() == StatusCode::OK);
    let page = body_text(response).await;

    ensure!(page.contains(r#"value="Async Rust""#));
    ensure!(page.contains(r#"value="Ferrous""#));
    Ok(())
}

#[rstest]
#[case("/admin/projects/9/edit")]
#[case("/admin/certificates/9/edit")]
#[case("/admin/skills/9/edit")]
#[tokio::test(flavor = "multi_thread")]
async fn editing_missing_entries_is_not_found(app: TestApp, #[case] path: &str) {
    let cookie = app.admin_cookie();

    let response = app.get(path, Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_entry(app: TestApp) -> eyre::Result<()> {
    let cookie = app.admin_cookie();
    let skill = app
        .state
        .portfolio()
        .add::<Skill>(SkillDraft::new("Tools", "Git")?)
        .await?;

    let response = app
        .post_form(&format!("/admin/skills/{}/delete", skill.id()), "", Some(&cookie))
        .await;
    assert_redirect(&response, "/admin#skills");
    let missing = app
        .post_form(&format!("/admin/skills/{}/delete", skill.id()), "", Some(&cookie))
        .await;

    ensure!(app.state.portfolio().list::<Skill>().await?.is_empty());
    ensure!(missing.status() == StatusCode::NOT_FOUND);
    Ok(())
}

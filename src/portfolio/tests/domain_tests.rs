//! Domain validation tests for catalogue entries.

use crate::portfolio::domain::{
    CatalogEntry, CertificateDraft, EntryId, EntryKind, PortfolioDomainError, Project,
    ProjectDraft, Skill, SkillDraft, group_by_category,
};
use rstest::rstest;

#[rstest]
#[case("", "Lead", "Built it", "title")]
#[case("Folio", "  ", "Built it", "role")]
#[case("Folio", "Lead", "\n", "description")]
fn project_draft_rejects_blank_required_fields(
    #[case] title: &str,
    #[case] role: &str,
    #[case] description: &str,
    #[case] field: &str,
) {
    let result = ProjectDraft::new(title, role, description);
    assert!(matches!(result, Err(PortfolioDomainError::MissingField(name)) if name == field));
}

#[rstest]
fn blank_optional_fields_are_dropped() {
    let draft = ProjectDraft::new(" Folio ", "Lead", "Built it")
        .expect("valid draft")
        .with_tech(Some("   ".to_owned()))
        .with_image(Some(" img/folio.png ".to_owned()));
    let project = Project::from_draft(EntryId::new(1), draft);

    assert_eq!(project.title(), "Folio");
    assert_eq!(project.tech(), None);
    assert_eq!(project.image(), Some("img/folio.png"));
}

#[rstest]
fn tech_list_splits_on_commas() {
    let draft = ProjectDraft::new("Folio", "Lead", "Built it")
        .expect("valid draft")
        .with_tech(Some("Rust, axum,, Diesel ".to_owned()));
    let project = Project::from_draft(EntryId::new(1), draft);

    assert_eq!(project.tech_list(), vec!["Rust", "axum", "Diesel"]);
}

#[rstest]
fn certificate_draft_requires_provider() {
    let result = CertificateDraft::new("Rust Fundamentals", "");
    assert_eq!(result, Err(PortfolioDomainError::MissingField("provider")));
}

#[rstest]
fn apply_keeps_identifier() {
    let mut skill = Skill::from_draft(
        EntryId::new(7),
        SkillDraft::new("Languages", "Rust").expect("valid draft"),
    );
    skill.apply(SkillDraft::new("Tools", "Cargo").expect("valid draft"));

    assert_eq!(skill.id(), EntryId::new(7));
    assert_eq!(skill.category(), "Tools");
    assert_eq!(skill.name(), "Cargo");
}

#[rstest]
fn skills_group_in_first_appearance_order() {
    let skills = [("Tools", "Git"), ("Languages", "Rust"), ("Tools", "Docker")]
        .into_iter()
        .enumerate()
        .map(|(index, (category, name))| {
            let id = i64::try_from(index).expect("small index") + 1;
            Skill::from_draft(
                EntryId::new(id),
                SkillDraft::new(category, name).expect("valid draft"),
            )
        })
        .collect();

    let groups = group_by_category(skills);
    let shape: Vec<(&str, Vec<&str>)> = groups
        .iter()
        .map(|group| {
            (
                group.category.as_str(),
                group.skills.iter().map(Skill::name).collect(),
            )
        })
        .collect();

    assert_eq!(
        shape,
        vec![("Tools", vec!["Git", "Docker"]), ("Languages", vec!["Rust"])]
    );
}

#[rstest]
#[case("projects", EntryKind::Project)]
#[case("Certificate", EntryKind::Certificate)]
#[case(" skills ", EntryKind::Skill)]
fn entry_kind_parses_route_segments(#[case] raw: &str, #[case] expected: EntryKind) {
    assert_eq!(EntryKind::try_from(raw), Ok(expected));
}

#[rstest]
fn entry_kind_rejects_unknown_segments() {
    assert!(EntryKind::try_from("awards").is_err());
}

//! Diesel row models for catalogue persistence.

use super::schema::{certificates, projects, skills};
use diesel::prelude::*;

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    pub id: i64,
    pub title: String,
    pub role: String,
    pub tech: Option<String>,
    pub description: String,
    pub image: Option<String>,
}

/// Insert and update model for project records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = projects)]
#[diesel(treat_none_as_null = true)]
pub struct ProjectValues {
    pub title: String,
    pub role: String,
    pub tech: Option<String>,
    pub description: String,
    pub image: Option<String>,
}

/// Query result row for certificate records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = certificates)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CertificateRow {
    pub id: i64,
    pub title: String,
    pub provider: String,
    pub icon: Option<String>,
}

/// Insert and update model for certificate records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = certificates)]
#[diesel(treat_none_as_null = true)]
pub struct CertificateValues {
    pub title: String,
    pub provider: String,
    pub icon: Option<String>,
}

/// Query result row for skill records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = skills)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SkillRow {
    pub id: i64,
    pub category: String,
    pub name: String,
    pub svg: Option<String>,
}

/// Insert and update model for skill records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = skills)]
#[diesel(treat_none_as_null = true)]
pub struct SkillValues {
    pub category: String,
    pub name: String,
    pub svg: Option<String>,
}

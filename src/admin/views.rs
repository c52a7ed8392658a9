//! Template environment for admin pages.

use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

use super::error::AdminError;

const TEMPLATES: &[(&str, &str)] = &[
    (
        "admin/base.html",
        include_str!("../../templates/admin/base.html"),
    ),
    (
        "admin/login.html",
        include_str!("../../templates/admin/login.html"),
    ),
    (
        "admin/dashboard.html",
        include_str!("../../templates/admin/dashboard.html"),
    ),
    (
        "admin/roadmap.html",
        include_str!("../../templates/admin/roadmap.html"),
    ),
    (
        "admin/edit_todo.html",
        include_str!("../../templates/admin/edit_todo.html"),
    ),
    (
        "admin/edit_project.html",
        include_str!("../../templates/admin/edit_project.html"),
    ),
    (
        "admin/edit_certificate.html",
        include_str!("../../templates/admin/edit_certificate.html"),
    ),
    (
        "admin/edit_skill.html",
        include_str!("../../templates/admin/edit_skill.html"),
    ),
];

/// Compiled admin templates. HTML output is auto-escaped.
#[derive(Debug)]
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    /// Loads the embedded templates.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when a template fails to parse.
    pub fn load() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Renders `name` with `context`.
    pub(crate) fn render(
        &self,
        name: &str,
        context: impl Serialize,
    ) -> Result<Html<String>, AdminError> {
        let template = self.env.get_template(name)?;
        Ok(Html(template.render(context)?))
    }
}

#[cfg(test)]
mod tests {
    use super::Views;
    use minijinja::context;
    use rstest::rstest;

    #[rstest]
    fn every_template_parses() {
        assert!(Views::load().is_ok());
    }

    #[rstest]
    fn markup_in_values_is_escaped() {
        let views = Views::load().expect("templates load");
        let html = views
            .render(
                "admin/login.html",
                context! { flashes => vec![context! { level => "danger", message => "<b>bad</b>" }] },
            )
            .expect("render");

        assert!(html.0.contains("&lt;b&gt;bad&lt;&#x2f;b&gt;"));
        assert!(!html.0.contains("<b>bad</b>"));
    }
}

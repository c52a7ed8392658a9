//! Admin HTTP surface tests over the in-memory backend.
//!
//! Tests are organized into modules by functionality:
//! - `auth_tests`: Login, logout and the session guard
//! - `roadmap_tests`: Roadmap routes and flash messages
//! - `portfolio_tests`: Catalogue routes
//! - `resume_tests`: Resume download

mod admin_http {
    pub mod helpers;

    mod auth_tests;
    mod portfolio_tests;
    mod resume_tests;
    mod roadmap_tests;
}

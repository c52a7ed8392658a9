//! Unit tests for the portfolio catalogue.

mod domain_tests;

//! Integration tests for formguard-validator.

mod file_type;
mod min_age;
mod model;

//! UI Components
//!
//! Leptos components for the signup codes page.

mod signup_code_table;
mod loading_form;

pub use signup_code_table::SignupCodeTable;
pub use loading_form::LoadingForm;

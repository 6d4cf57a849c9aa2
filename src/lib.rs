//! MediCare Signup
//!
//! Validation, password-strength feedback, phone formatting and the
//! submission flow behind the patient signup form. The checks here are
//! advisory; the backend receiving the registration must re-validate it.

pub mod config;
pub mod form;
pub mod password;
pub mod registration;
pub mod submission;
pub mod types;

// Re-export commonly used types and functions
pub use registration::{validate, FormValidator, RegistrationInput, ValidRegistration, ValidationError};
pub use types::{ConfigError, SignupConfig};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SERVICE_NAME: &str = "medicare-signup";

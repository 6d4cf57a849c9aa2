//! Registration form input, validation rules and phone helpers.

pub mod clock;
pub mod dto;
pub mod error;
pub mod phone;
pub mod validator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dto::{InsuranceInfo, RegistrationInput, ValidRegistration};
pub use error::{RequiredField, ValidationError};
pub use validator::{validate, FormValidator};

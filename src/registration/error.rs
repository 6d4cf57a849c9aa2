//! Registration validation errors

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Required form fields, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RequiredField {
    FirstName,
    LastName,
    Email,
    Phone,
    DateOfBirth,
    Gender,
    EmergencyContact,
    Address,
    City,
    Zip,
    Password,
    ConfirmPassword,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequiredField::FirstName => "first name",
            RequiredField::LastName => "last name",
            RequiredField::Email => "email",
            RequiredField::Phone => "phone",
            RequiredField::DateOfBirth => "date of birth",
            RequiredField::Gender => "gender",
            RequiredField::EmergencyContact => "emergency contact",
            RequiredField::Address => "address",
            RequiredField::City => "city",
            RequiredField::Zip => "zip code",
            RequiredField::Password => "password",
            RequiredField::ConfirmPassword => "confirm password",
        };
        f.write_str(name)
    }
}

/// Reasons a registration is rejected, one per rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields marked with *")]
    MissingRequiredField(RequiredField),

    #[error("First and last name must be at least 2 characters")]
    NameTooShort,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid 10-digit phone number")]
    InvalidPhone,

    #[error("Please enter a valid emergency contact number")]
    InvalidEmergencyContact,

    #[error("Please enter a valid date of birth")]
    InvalidDateOfBirth,

    #[error("You must be at least 13 years old to register")]
    UnderageRegistration,

    #[error("Please enter a valid zip code")]
    InvalidZip,

    #[error("Password must be at least 10 characters long")]
    PasswordTooShort,

    #[error("Password must contain at least one uppercase letter")]
    PasswordMissingUppercase,

    #[error("Password must contain at least one lowercase letter")]
    PasswordMissingLowercase,

    #[error("Password must contain at least one number")]
    PasswordMissingNumber,

    #[error("Password must contain at least one special character (!@#$%^&*)")]
    PasswordMissingSpecial,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("You must accept the Terms of Service and Privacy Policy")]
    TermsNotAccepted,
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingRequiredField(_) => "MISSING_REQUIRED_FIELD",
            ValidationError::NameTooShort => "NAME_TOO_SHORT",
            ValidationError::InvalidEmail => "INVALID_EMAIL",
            ValidationError::InvalidPhone => "INVALID_PHONE",
            ValidationError::InvalidEmergencyContact => "INVALID_EMERGENCY_CONTACT",
            ValidationError::InvalidDateOfBirth => "INVALID_DATE_OF_BIRTH",
            ValidationError::UnderageRegistration => "UNDERAGE_REGISTRATION",
            ValidationError::InvalidZip => "INVALID_ZIP",
            ValidationError::PasswordTooShort => "PASSWORD_TOO_SHORT",
            ValidationError::PasswordMissingUppercase => "PASSWORD_MISSING_UPPERCASE",
            ValidationError::PasswordMissingLowercase => "PASSWORD_MISSING_LOWERCASE",
            ValidationError::PasswordMissingNumber => "PASSWORD_MISSING_NUMBER",
            ValidationError::PasswordMissingSpecial => "PASSWORD_MISSING_SPECIAL",
            ValidationError::PasswordMismatch => "PASSWORD_MISMATCH",
            ValidationError::TermsNotAccepted => "TERMS_NOT_ACCEPTED",
        }
    }

    /// Whether this error concerns the password fields
    pub fn is_password_error(&self) -> bool {
        matches!(
            self,
            ValidationError::PasswordTooShort
                | ValidationError::PasswordMissingUppercase
                | ValidationError::PasswordMissingLowercase
                | ValidationError::PasswordMissingNumber
                | ValidationError::PasswordMissingSpecial
                | ValidationError::PasswordMismatch
        )
    }
}

//! Registration Data Transfer Objects
//!
//! Raw form input as collected by the UI layer, and the normalized record
//! handed to the submission gateway once validation passes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw values of the signup form, one per field
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistrationInput {
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName")]
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(alias = "dateOfBirth", alias = "date_of_birth")]
    pub dob: String,
    pub gender: String,
    #[serde(alias = "bloodGroup")]
    pub blood_group: Option<String>,
    #[serde(alias = "emergency", alias = "emergencyContact")]
    pub emergency_contact: String,
    pub address: String,
    pub city: String,
    #[serde(alias = "zipCode", alias = "zip_code")]
    pub zip: String,
    #[serde(alias = "insuranceProvider")]
    pub insurance_provider: Option<String>,
    #[serde(alias = "policyNumber")]
    pub policy_number: Option<String>,
    pub password: String,
    #[serde(alias = "confirmPassword")]
    pub confirm_password: String,
    #[serde(alias = "terms", alias = "termsAccepted")]
    pub terms_accepted: bool,
}

/// Insurance details, both parts optional on the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceInfo {
    pub provider: String,
    pub policy_number: String,
}

/// A registration that passed every validation rule
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub dob: NaiveDate,
    pub gender: String,
    pub blood_group: String,
    pub emergency_contact: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub insurance: InsuranceInfo,
    pub password: String,
    pub terms_accepted: bool,
    pub registration_date: DateTime<Utc>,
}

impl fmt::Debug for ValidRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidRegistration")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("dob", &self.dob)
            .field("gender", &self.gender)
            .field("blood_group", &self.blood_group)
            .field("emergency_contact", &self.emergency_contact)
            .field("address", &self.address)
            .field("city", &self.city)
            .field("zip_code", &self.zip_code)
            .field("insurance", &self.insurance)
            .field("password", &"<redacted>")
            .field("terms_accepted", &self.terms_accepted)
            .field("registration_date", &self.registration_date)
            .finish()
    }
}

/// Trim an optional field, mapping absent values to empty
pub(crate) fn trimmed_or_empty(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}

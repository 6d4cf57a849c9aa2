//! Registration form validation.
//!
//! Rules run in a fixed order and the first failing rule is the one
//! reported; later rules are never evaluated. Nothing is mutated, so a
//! rejected attempt can simply be corrected and resubmitted.

use crate::password::criteria;
use crate::registration::clock::{Clock, SystemClock};
use crate::registration::dto::{trimmed_or_empty, InsuranceInfo, RegistrationInput, ValidRegistration};
use crate::registration::error::{RequiredField, ValidationError};
use crate::registration::phone::is_valid_phone;
use chrono::{Datelike, NaiveDate};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_AGE_YEARS: i32 = 13;
pub const MIN_ZIP_LENGTH: usize = 5;
/// Format produced by date inputs
pub const DOB_FORMAT: &str = "%Y-%m-%d";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Age in whole years on `today`
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

/// Validate a registration using the system clock
pub fn validate(input: &RegistrationInput) -> Result<ValidRegistration, ValidationError> {
    FormValidator::default().validate(input)
}

/// Stateless validator for the signup form
#[derive(Clone)]
pub struct FormValidator {
    clock: Arc<dyn Clock>,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl FormValidator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
        }
    }

    /// Run every rule in order and build the normalized record
    pub fn validate(&self, input: &RegistrationInput) -> Result<ValidRegistration, ValidationError> {
        let result = self.check(input);
        if let Err(ref error) = result {
            debug!("Registration rejected: {}", error.error_code());
        }
        result
    }

    fn check(&self, input: &RegistrationInput) -> Result<ValidRegistration, ValidationError> {
        // 1. Required fields
        check_required(input)?;

        let first_name = input.first_name.trim();
        let last_name = input.last_name.trim();
        let email = input.email.trim();
        let phone = input.phone.trim();
        let emergency_contact = input.emergency_contact.trim();
        let zip = input.zip.trim();

        // 2. Names
        if first_name.chars().count() < MIN_NAME_LENGTH
            || last_name.chars().count() < MIN_NAME_LENGTH
        {
            return Err(ValidationError::NameTooShort);
        }

        // 3. Email
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        // 4-5. Phone numbers
        if !is_valid_phone(phone) {
            return Err(ValidationError::InvalidPhone);
        }
        if !is_valid_phone(emergency_contact) {
            return Err(ValidationError::InvalidEmergencyContact);
        }

        // 6. Age
        let dob = NaiveDate::parse_from_str(input.dob.trim(), DOB_FORMAT)
            .map_err(|_| ValidationError::InvalidDateOfBirth)?;
        if age_on(dob, self.clock.today()) < MIN_AGE_YEARS {
            return Err(ValidationError::UnderageRegistration);
        }

        // 7. Zip code
        if zip.chars().count() < MIN_ZIP_LENGTH {
            return Err(ValidationError::InvalidZip);
        }

        // 8-13. Password
        check_password(&input.password, &input.confirm_password)?;

        // 14. Terms
        if !input.terms_accepted {
            return Err(ValidationError::TermsNotAccepted);
        }

        Ok(ValidRegistration {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            dob,
            gender: input.gender.trim().to_string(),
            blood_group: trimmed_or_empty(&input.blood_group),
            emergency_contact: emergency_contact.to_string(),
            address: input.address.trim().to_string(),
            city: input.city.trim().to_string(),
            zip_code: zip.to_string(),
            insurance: InsuranceInfo {
                provider: trimmed_or_empty(&input.insurance_provider),
                policy_number: trimmed_or_empty(&input.policy_number),
            },
            password: input.password.clone(),
            terms_accepted: true,
            registration_date: self.clock.now(),
        })
    }
}

fn check_required(input: &RegistrationInput) -> Result<(), ValidationError> {
    let fields = [
        (RequiredField::FirstName, &input.first_name),
        (RequiredField::LastName, &input.last_name),
        (RequiredField::Email, &input.email),
        (RequiredField::Phone, &input.phone),
        (RequiredField::DateOfBirth, &input.dob),
        (RequiredField::Gender, &input.gender),
        (RequiredField::EmergencyContact, &input.emergency_contact),
        (RequiredField::Address, &input.address),
        (RequiredField::City, &input.city),
        (RequiredField::Zip, &input.zip),
        (RequiredField::Password, &input.password),
        (RequiredField::ConfirmPassword, &input.confirm_password),
    ];

    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((field, _)) => Err(ValidationError::MissingRequiredField(*field)),
        None => Ok(()),
    }
}

/// Hard password gate; every criterion must hold regardless of strength score
pub fn check_password(password: &str, confirm_password: &str) -> Result<(), ValidationError> {
    if !criteria::meets_length(password) {
        return Err(ValidationError::PasswordTooShort);
    }
    if !criteria::has_uppercase(password) {
        return Err(ValidationError::PasswordMissingUppercase);
    }
    if !criteria::has_lowercase(password) {
        return Err(ValidationError::PasswordMissingLowercase);
    }
    if !criteria::has_digit(password) {
        return Err(ValidationError::PasswordMissingNumber);
    }
    if !criteria::has_special(password) {
        return Err(ValidationError::PasswordMissingSpecial);
    }
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::clock::FixedClock;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn validator() -> FormValidator {
        FormValidator::new(Arc::new(FixedClock::on(today())))
    }

    fn valid_input() -> RegistrationInput {
        RegistrationInput {
            first_name: "  Ada ".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "(123) 456-7890".into(),
            dob: "1990-12-10".into(),
            gender: "female".into(),
            blood_group: Some("O+".into()),
            emergency_contact: "123-456-7891".into(),
            address: "1 Analytical Way".into(),
            city: "London".into(),
            zip: "12345".into(),
            insurance_provider: Some(" Aetna ".into()),
            policy_number: None,
            password: "Abcdef123!".into(),
            confirm_password: "Abcdef123!".into(),
            terms_accepted: true,
        }
    }

    #[test]
    fn test_valid_registration_is_normalized() {
        let record = validator().validate(&valid_input()).unwrap();
        assert_eq!(record.first_name, "Ada");
        assert_eq!(record.blood_group, "O+");
        assert_eq!(record.insurance.provider, "Aetna");
        assert_eq!(record.insurance.policy_number, "");
        assert_eq!(record.dob, NaiveDate::from_ymd_opt(1990, 12, 10).unwrap());
        assert_eq!(record.registration_date.date_naive(), today());
        assert!(record.terms_accepted);
    }

    #[test]
    fn test_password_is_kept_verbatim() {
        let mut input = valid_input();
        input.password = " Abcdef123!".into();
        input.confirm_password = " Abcdef123!".into();
        let record = validator().validate(&input).unwrap();
        assert_eq!(record.password, " Abcdef123!");
    }

    #[test]
    fn test_missing_field_wins_over_everything() {
        let input = RegistrationInput {
            city: "   ".into(),
            email: "not-an-email".into(),
            password: "x".into(),
            terms_accepted: false,
            ..valid_input()
        };
        assert_eq!(
            validator().validate(&input),
            Err(ValidationError::MissingRequiredField(RequiredField::City))
        );
    }

    #[test]
    fn test_first_missing_field_is_reported() {
        let input = RegistrationInput::default();
        assert_eq!(
            validator().validate(&input),
            Err(ValidationError::MissingRequiredField(RequiredField::FirstName))
        );
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let input = RegistrationInput {
            blood_group: None,
            insurance_provider: Some("   ".into()),
            policy_number: None,
            ..valid_input()
        };
        assert!(validator().validate(&input).is_ok());
    }

    #[test]
    fn test_name_too_short() {
        let input = RegistrationInput {
            last_name: " L ".into(),
            ..valid_input()
        };
        assert_eq!(validator().validate(&input), Err(ValidationError::NameTooShort));
    }

    #[test]
    fn test_email_rules() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@c.de"));

        let input = RegistrationInput {
            email: "ada@example".into(),
            ..valid_input()
        };
        assert_eq!(validator().validate(&input), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_phone_before_emergency_contact() {
        let input = RegistrationInput {
            phone: "123-abc-4567".into(),
            emergency_contact: "nope".into(),
            ..valid_input()
        };
        assert_eq!(validator().validate(&input), Err(ValidationError::InvalidPhone));

        let input = RegistrationInput {
            emergency_contact: "555-1234".into(),
            ..valid_input()
        };
        assert_eq!(validator().validate(&input), Err(ValidationError::InvalidEmergencyContact));
    }

    #[test]
    fn test_age_boundary() {
        // 13th birthday is today
        let input = RegistrationInput {
            dob: "2011-06-15".into(),
            ..valid_input()
        };
        assert!(validator().validate(&input).is_ok());

        // 13th birthday is tomorrow
        let input = RegistrationInput {
            dob: "2011-06-16".into(),
            ..valid_input()
        };
        assert_eq!(validator().validate(&input), Err(ValidationError::UnderageRegistration));
    }

    #[test]
    fn test_age_on() {
        let dob = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
        assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2013, 2, 28).unwrap()), 12);
        assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2013, 3, 1).unwrap()), 13);
        assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(1999, 1, 1).unwrap()), -2);
    }

    #[test]
    fn test_future_birth_date_is_underage() {
        let input = RegistrationInput {
            dob: "2030-01-01".into(),
            ..valid_input()
        };
        assert_eq!(validator().validate(&input), Err(ValidationError::UnderageRegistration));
    }

    #[test]
    fn test_unparseable_birth_date() {
        let input = RegistrationInput {
            dob: "15/06/1990".into(),
            ..valid_input()
        };
        assert_eq!(validator().validate(&input), Err(ValidationError::InvalidDateOfBirth));
    }

    #[test]
    fn test_zip_length_only() {
        let input = RegistrationInput {
            zip: "1234".into(),
            ..valid_input()
        };
        assert_eq!(validator().validate(&input), Err(ValidationError::InvalidZip));

        let input = RegistrationInput {
            zip: "SW1A 1AA".into(),
            ..valid_input()
        };
        assert!(validator().validate(&input).is_ok());
    }

    #[test]
    fn test_password_rules_in_order() {
        let cases = [
            ("short1A!", ValidationError::PasswordTooShort),
            ("abcdefgh1!", ValidationError::PasswordMissingUppercase),
            ("ABCDEFGH1!", ValidationError::PasswordMissingLowercase),
            ("Abcdefghi!", ValidationError::PasswordMissingNumber),
            ("Abcdefghi1", ValidationError::PasswordMissingSpecial),
        ];

        for (password, expected) in cases {
            let input = RegistrationInput {
                password: password.into(),
                confirm_password: password.into(),
                ..valid_input()
            };
            assert_eq!(validator().validate(&input), Err(expected), "password {password}");
        }
    }

    #[test]
    fn test_password_mismatch() {
        let input = RegistrationInput {
            confirm_password: "Abcdef123?".into(),
            ..valid_input()
        };
        assert_eq!(validator().validate(&input), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_terms_checked_last() {
        let input = RegistrationInput {
            terms_accepted: false,
            ..valid_input()
        };
        assert_eq!(validator().validate(&input), Err(ValidationError::TermsNotAccepted));
    }
}

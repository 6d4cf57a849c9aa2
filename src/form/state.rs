//! Signup form state.
//!
//! The UI layer owns a `FormState` and feeds it events. Every transition
//! takes the current state and returns the next one; the presentation layer
//! only renders what it gets back.

use crate::form::notification::Notification;
use crate::password::{self, StrengthReport};
use crate::registration::phone;
use crate::registration::{FormValidator, RegistrationInput, ValidRegistration};
use crate::submission::{Redirect, SubmissionError, SubmissionReceipt};
use crate::types::SignupConfig;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::time::Duration;

pub const SUBMIT_LABEL: &str = "Complete Registration";
pub const SUBMITTING_LABEL: &str = "Creating Your Account...";

/// The submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: &'static str,
    pub disabled: bool,
}

impl SubmitControl {
    fn ready() -> Self {
        Self {
            label: SUBMIT_LABEL,
            disabled: false,
        }
    }

    fn busy() -> Self {
        Self {
            label: SUBMITTING_LABEL,
            disabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    /// Live strength indicator for the password field
    pub strength: StrengthReport,
    /// Formatted phone field value
    pub phone: String,
    /// Formatted emergency contact field value
    pub emergency_contact: String,
    pub submit: SubmitControl,
    pub notification: Option<Notification>,
    /// Set once the registration succeeded
    pub redirect: Option<Redirect>,
    error_dismiss_after: Duration,
}

impl FormState {
    pub fn new(config: &SignupConfig) -> Self {
        Self {
            strength: StrengthReport::default(),
            phone: String::new(),
            emergency_contact: String::new(),
            submit: SubmitControl::ready(),
            notification: None,
            redirect: None,
            error_dismiss_after: config.error_dismiss_after,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submit.disabled
    }

    pub fn on_password_input(self, value: &str) -> Self {
        Self {
            strength: password::score(value),
            ..self
        }
    }

    pub fn on_phone_input(self, raw: &str) -> Self {
        Self {
            phone: phone::format(raw),
            ..self
        }
    }

    pub fn on_emergency_input(self, raw: &str) -> Self {
        Self {
            emergency_contact: phone::format(raw),
            ..self
        }
    }

    /// Validate the form and, if it passes, lock the submit control.
    ///
    /// Returns the record to hand to the submission service, or `None` when
    /// validation failed or a submission is already pending.
    pub fn begin_submission(
        self,
        validator: &FormValidator,
        input: &RegistrationInput,
        now: DateTime<Utc>,
    ) -> (Self, Option<ValidRegistration>) {
        if self.is_submitting() {
            warn!("Submit ignored: a registration is already pending");
            return (self, None);
        }

        match validator.validate(input) {
            Ok(registration) => {
                debug!("Form valid, submitting");
                let state = Self {
                    submit: SubmitControl::busy(),
                    notification: None,
                    ..self
                };
                (state, Some(registration))
            },
            Err(e) => {
                let notification = Notification::error(e.to_string(), now, self.error_dismiss_after);
                let state = Self {
                    notification: Some(notification),
                    ..self
                };
                (state, None)
            },
        }
    }

    /// Apply the gateway's answer
    pub fn finish_submission(
        self,
        result: &Result<SubmissionReceipt, SubmissionError>,
        now: DateTime<Utc>,
    ) -> Self {
        match result {
            Ok(receipt) => Self {
                submit: SubmitControl::ready(),
                notification: Some(Notification::success(receipt.welcome_message.clone())),
                redirect: Some(receipt.redirect.clone()),
                ..self
            },
            // Another submission still owns the control
            Err(e) if !e.is_resubmittable() => self,
            Err(e) => {
                let notification = Notification::error(e.to_string(), now, self.error_dismiss_after);
                Self {
                    submit: SubmitControl::ready(),
                    notification: Some(notification),
                    ..self
                }
            },
        }
    }

    /// Drop error banners whose display time has passed
    pub fn expire_notifications(self, now: DateTime<Utc>) -> Self {
        let expired = self.notification.as_ref().is_some_and(|n| n.is_expired(now));
        if expired {
            Self {
                notification: None,
                ..self
            }
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::StrengthLabel;
    use crate::registration::FixedClock;
    use chrono::{NaiveDate, TimeDelta, TimeZone};
    use std::sync::Arc;
    use uuid::Uuid;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap()
    }

    fn validator() -> FormValidator {
        FormValidator::new(Arc::new(FixedClock::new(now())))
    }

    fn state() -> FormState {
        FormState::new(&SignupConfig::default())
    }

    fn input() -> RegistrationInput {
        RegistrationInput {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "grace@example.com".into(),
            phone: "(123) 456-7890".into(),
            dob: "1980-12-09".into(),
            gender: "female".into(),
            emergency_contact: "(123) 456-7891".into(),
            address: "1 Harbor Rd".into(),
            city: "Arlington".into(),
            zip: "22201".into(),
            password: "Abcdef123!".into(),
            confirm_password: "Abcdef123!".into(),
            terms_accepted: true,
            ..RegistrationInput::default()
        }
    }

    fn receipt() -> SubmissionReceipt {
        SubmissionReceipt {
            submission_id: Uuid::new_v4(),
            first_name: "Grace".into(),
            registered_at: now(),
            welcome_message: "Welcome to MediCare, Grace!".into(),
            redirect: Redirect {
                target: "login.html".into(),
                after: Duration::from_secs(2),
            },
        }
    }

    #[test]
    fn test_live_inputs() {
        let state = state()
            .on_password_input("Abcdefghij1!")
            .on_phone_input("1234567890")
            .on_emergency_input("12345");

        assert_eq!(state.strength.label, Some(StrengthLabel::Strong));
        assert_eq!(state.phone, "(123) 456-7890");
        assert_eq!(state.emergency_contact, "(123) 45");

        let state = state.on_password_input("");
        assert_eq!(state.strength.label_text(), "");
    }

    #[test]
    fn test_valid_submission_locks_control() {
        let (state, record) = state().begin_submission(&validator(), &input(), now());

        assert!(record.is_some());
        assert!(state.is_submitting());
        assert_eq!(state.submit.label, SUBMITTING_LABEL);
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_second_submit_ignored_while_pending() {
        let (state, _) = state().begin_submission(&validator(), &input(), now());
        let (state, record) = state.begin_submission(&validator(), &input(), now());

        assert!(record.is_none());
        assert!(state.is_submitting());
    }

    #[test]
    fn test_invalid_submission_shows_error() {
        let bad = RegistrationInput {
            terms_accepted: false,
            ..input()
        };
        let (state, record) = state().begin_submission(&validator(), &bad, now());

        assert!(record.is_none());
        assert!(!state.is_submitting());
        let notification = state.notification.clone().unwrap();
        assert!(notification.is_error());
        assert_eq!(
            notification.message,
            "You must accept the Terms of Service and Privacy Policy"
        );

        let state = state.expire_notifications(now() + TimeDelta::seconds(5));
        assert!(state.notification.is_some());
        let state = state.expire_notifications(now() + TimeDelta::seconds(6));
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_success_persists_and_redirects() {
        let (state, _) = state().begin_submission(&validator(), &input(), now());
        let state = state.finish_submission(&Ok(receipt()), now());

        assert!(!state.is_submitting());
        assert_eq!(state.submit.label, SUBMIT_LABEL);
        assert_eq!(state.redirect.as_ref().map(|r| r.target.as_str()), Some("login.html"));

        let state = state.expire_notifications(now() + TimeDelta::hours(1));
        assert_eq!(
            state.notification.map(|n| n.display_text()),
            Some("✅ Welcome to MediCare, Grace!".to_string())
        );
    }

    #[test]
    fn test_rejection_reenables_control() {
        let (state, _) = state().begin_submission(&validator(), &input(), now());
        let state = state
            .finish_submission(&Err(SubmissionError::Rejected("Email already registered".into())), now());

        assert!(!state.is_submitting());
        assert!(state.redirect.is_none());
        assert_eq!(
            state.notification.map(|n| n.display_text()),
            Some("❌ Email already registered".to_string())
        );
    }

    #[test]
    fn test_in_flight_refusal_keeps_control_locked() {
        let (state, _) = state().begin_submission(&validator(), &input(), now());
        let state = state.finish_submission(&Err(SubmissionError::AlreadyInFlight), now());

        assert!(state.is_submitting());
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_underage_birth_date() {
        let young = RegistrationInput {
            dob: NaiveDate::from_ymd_opt(2011, 6, 16).unwrap().format("%Y-%m-%d").to_string(),
            ..input()
        };
        let (state, record) = state().begin_submission(&validator(), &young, now());

        assert!(record.is_none());
        assert_eq!(
            state.notification.map(|n| n.message),
            Some("You must be at least 13 years old to register".to_string())
        );
    }
}

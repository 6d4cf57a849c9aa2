//! Submission Service Module
//!
//! Runs one registration submission at a time as its own tokio task. Each
//! task races the gateway against a cancellation token, and a second
//! submission is refused while one is still pending.

use crate::registration::ValidRegistration;
use crate::submission::error::{SubmissionError, DEFAULT_FAILURE_MESSAGE};
use crate::submission::gateway::RegistrationGateway;
use crate::types::SignupConfig;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Where the UI should navigate after a successful registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub target: String,
    pub after: Duration,
}

/// Result of an accepted registration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionReceipt {
    pub submission_id: Uuid,
    pub first_name: String,
    /// Gateway-supplied when available, otherwise the client stamp
    pub registered_at: DateTime<Utc>,
    pub welcome_message: String,
    pub redirect: Redirect,
}

type InFlightSlot = Arc<Mutex<Option<Uuid>>>;

fn lock(slot: &Mutex<Option<Uuid>>) -> MutexGuard<'_, Option<Uuid>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Releases the in-flight slot when the submission task ends or is dropped
struct InFlightGuard {
    slot: InFlightSlot,
    id: Uuid,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut slot = lock(&self.slot);
        if *slot == Some(self.id) {
            *slot = None;
        }
    }
}

/// A pending submission
pub struct SubmissionHandle {
    id: Uuid,
    cancel: CancellationToken,
    handle: JoinHandle<Result<SubmissionReceipt, SubmissionError>>,
}

impl SubmissionHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Abandon the submission; `outcome` then resolves to `Cancelled`
    /// unless the gateway already answered
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Wait for the gateway's answer
    pub async fn outcome(self) -> Result<SubmissionReceipt, SubmissionError> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) => Err(SubmissionError::TaskFailed(e.to_string())),
        }
    }
}

/// Service forwarding validated registrations to a gateway
pub struct SubmissionService {
    gateway: Arc<dyn RegistrationGateway>,
    clinic_name: String,
    redirect: Redirect,
    in_flight: InFlightSlot,
}

impl SubmissionService {
    pub fn new(gateway: Arc<dyn RegistrationGateway>, config: &SignupConfig) -> Self {
        Self {
            gateway,
            clinic_name: config.clinic_name.clone(),
            redirect: Redirect {
                target: config.login_url.clone(),
                after: config.redirect_delay,
            },
            in_flight: Arc::new(Mutex::new(None)),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        lock(&self.in_flight).is_some()
    }

    /// Start submitting a registration in the background.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(
        &self,
        registration: ValidRegistration,
    ) -> Result<SubmissionHandle, SubmissionError> {
        let id = Uuid::new_v4();
        {
            let mut slot = lock(&self.in_flight);
            if let Some(pending) = *slot {
                warn!("Submission refused: {} is still in flight", pending);
                return Err(SubmissionError::AlreadyInFlight);
            }
            *slot = Some(id);
        }

        let guard = InFlightGuard {
            slot: Arc::clone(&self.in_flight),
            id,
        };
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();
        let gateway = Arc::clone(&self.gateway);
        let clinic_name = self.clinic_name.clone();
        let redirect = self.redirect.clone();

        debug!("Submission {} started for {}", id, registration.email);

        let handle = tokio::spawn(async move {
            let result = tokio::select! {
                biased;
                _ = task_cancel.cancelled() => Err(SubmissionError::Cancelled),
                response = gateway.submit(&registration) => response,
            };

            let outcome = match result {
                Ok(response) if response.success => {
                    info!("Submission {} accepted", id);
                    Ok(SubmissionReceipt {
                        submission_id: id,
                        first_name: registration.first_name.clone(),
                        registered_at: response
                            .registered_at
                            .unwrap_or(registration.registration_date),
                        welcome_message: welcome_message(&clinic_name, &registration.first_name),
                        redirect,
                    })
                },
                Ok(response) => {
                    let message =
                        response.message.unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
                    warn!("Submission {} rejected: {}", id, message);
                    Err(SubmissionError::Rejected(message))
                },
                Err(SubmissionError::Cancelled) => {
                    info!("Submission {} cancelled", id);
                    Err(SubmissionError::Cancelled)
                },
                Err(e) => {
                    warn!("Submission {} failed: {:?}", id, e);
                    Err(e)
                },
            };

            drop(guard);
            outcome
        });

        Ok(SubmissionHandle {
            id,
            cancel,
            handle,
        })
    }
}

/// Message shown once the account exists
pub fn welcome_message(clinic_name: &str, first_name: &str) -> String {
    format!(
        "Welcome to {}, {}! Your patient account has been created successfully. \
         You can now book appointments and access our healthcare services.",
        clinic_name, first_name
    )
}

//! # Registration gateway
//!
//! The external system that accepts a finalized registration. The real
//! backend lives elsewhere; this crate ships a simulated gateway that
//! stands in for the network round-trip with a fixed delay.

use crate::registration::ValidRegistration;
use crate::submission::error::SubmissionError;
use crate::types::SignupConfig;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Answer from the gateway: `{success: true}` or `{success: false, message}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Server-side registration time, when the backend supplies one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<DateTime<Utc>>,
}

impl GatewayResponse {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: None,
            registered_at: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            registered_at: None,
        }
    }
}

#[async_trait]
pub trait RegistrationGateway: Send + Sync {
    /// Hand a registration to the backend and wait for its answer
    async fn submit(
        &self,
        registration: &ValidRegistration,
    ) -> Result<GatewayResponse, SubmissionError>;
}

/// Gateway that accepts everything after an artificial delay
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
        }
    }

    pub fn from_config(config: &SignupConfig) -> Self {
        Self::new(config.submit_delay)
    }
}

#[async_trait]
impl RegistrationGateway for SimulatedGateway {
    async fn submit(
        &self,
        registration: &ValidRegistration,
    ) -> Result<GatewayResponse, SubmissionError> {
        tokio::time::sleep(self.delay).await;
        info!("Patient data: {:?}", registration);
        Ok(GatewayResponse::accepted())
    }
}

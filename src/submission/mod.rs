//! Forwarding validated registrations to the external gateway.

pub mod error;
pub mod gateway;
pub mod service;

pub use error::SubmissionError;
pub use gateway::{GatewayResponse, RegistrationGateway, SimulatedGateway};
pub use service::{Redirect, SubmissionHandle, SubmissionReceipt, SubmissionService};

use chrono::Utc;
use log::info;
use medicare_signup::form::FormState;
use medicare_signup::password::criteria::indicator;
use medicare_signup::registration::{FormValidator, RegistrationInput};
use medicare_signup::submission::{SimulatedGateway, SubmissionService};
use medicare_signup::{config, SERVICE_NAME, VERSION};
use std::error::Error;
use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;

/// Reads a registration JSON document from the path given as first
/// argument, or from stdin, and runs it through the signup flow.
#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = config::load_config()?;
    info!("{} v{} starting", SERVICE_NAME, VERSION);

    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        },
    };
    let input: RegistrationInput = serde_json::from_str(&raw)?;

    let state = FormState::new(&config)
        .on_password_input(&input.password)
        .on_phone_input(&input.phone)
        .on_emergency_input(&input.emergency_contact);

    let strength = &state.strength;
    println!("Password strength: {} ({}%)", strength.label_text(), strength.score);
    let criteria = strength.criteria;
    for (met, description) in [
        (criteria.meets_length, "At least 10 characters"),
        (criteria.has_uppercase, "One uppercase letter"),
        (criteria.has_lowercase, "One lowercase letter"),
        (criteria.has_digit, "One number"),
        (criteria.has_special, "One special character"),
    ] {
        println!("  {} {}", indicator(met), description);
    }
    println!("Phone: {}", state.phone);
    println!("Emergency contact: {}", state.emergency_contact);

    let validator = FormValidator::default();
    let (state, registration) = state.begin_submission(&validator, &input, Utc::now());
    let Some(registration) = registration else {
        if let Some(notification) = &state.notification {
            eprintln!("{}", notification.display_text());
        }
        return Ok(ExitCode::FAILURE);
    };
    println!("{}", state.submit.label);

    let service = SubmissionService::new(Arc::new(SimulatedGateway::from_config(&config)), &config);
    let result = service.start(registration)?.outcome().await;
    let failed = result.is_err();
    let state = state.finish_submission(&result, Utc::now());

    if let Some(notification) = &state.notification {
        println!("{}", notification.display_text());
    }
    if let Some(redirect) = &state.redirect {
        println!("Redirecting to {} in {}s", redirect.target, redirect.after.as_secs());
    }

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

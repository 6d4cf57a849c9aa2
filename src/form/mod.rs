//! UI-facing form state and notifications.

pub mod notification;
pub mod state;

pub use notification::{Notification, NotificationKind};
pub use state::{FormState, SubmitControl, SUBMIT_LABEL, SUBMITTING_LABEL};

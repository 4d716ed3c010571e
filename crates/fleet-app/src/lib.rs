//! Application service layer - session, config, notifications, logging

pub mod config;
pub mod logging;
pub mod notifier;
pub mod session;

pub use config::Config;
pub use notifier::{LogNotifier, Notifier};
pub use session::FleetSession;

//! User-facing alerts

use tracing::warn;

/// Something that can show a message to the user
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Sends alerts to the log only
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        warn!(target: "fleet_app::alert", "{}", message);
    }
}

impl<F: Fn(&str)> Notifier for F {
    fn notify(&self, message: &str) {
        self(message)
    }
}

use business::domain::cart_mutation::notifier::Notifier;
use tracing::{error, info};

/// Notifier for headless frontends: toasts end up in the log stream under
/// their own target so they can be filtered apart from diagnostics.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_error(&self, message: &str) {
        error!(target: "Toast -- ", "{}", message);
    }
    fn notify_success(&self, message: &str) {
        info!(target: "Toast -- ", "{}", message);
    }
}

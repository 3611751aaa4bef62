/// Surfaces outcomes of cart actions to the shopper (toasts, status lines).
pub trait Notifier: Send + Sync {
    fn notify_error(&self, message: &str);
    fn notify_success(&self, message: &str);
}

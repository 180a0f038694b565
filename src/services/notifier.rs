use crate::models::Notice;

/// Delivers modal alerts with a single dismissal action
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

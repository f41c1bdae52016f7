// logwindow - app/notify.rs
//
// Notification trigger contract. The dashboard's toast mechanism is an
// external collaborator; only the trigger matters here.

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// Receives user-facing informational and error signals from the
/// controller: empty pages, unchanged merges, validation failures, and
/// fetch failures.
pub trait NotificationSink {
    fn notify(&self, kind: NotificationKind, message: &str);
}

/// Default sink that routes notifications to the tracing pipeline, for
/// embedders that have not wired a toast mechanism yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Info => tracing::info!(target: "logwindow::notify", "{message}"),
            NotificationKind::Error => tracing::error!(target: "logwindow::notify", "{message}"),
        }
    }
}

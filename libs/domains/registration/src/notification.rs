//! User-facing notifications.

use std::io::{self, Stdout, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::warn;

/// Blocking, alert-style message delivery.
///
/// `notify` returns once the message has been presented.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str);
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Writes each notification as one line to a writer
pub struct WriterNotifier<W> {
    out: Mutex<W>,
}

/// Notifier for interactive terminal use
pub type TerminalNotifier = WriterNotifier<Stdout>;

impl TerminalNotifier {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> WriterNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> NotificationSink for WriterNotifier<W> {
    fn notify(&self, message: &str) {
        let mut out = lock(&self.out);
        if let Err(e) = writeln!(out, "{}", message).and_then(|_| out.flush()) {
            warn!(error = %e, "Failed to write notification");
        }
    }
}

/// Captures notifications in memory; clones share the same log
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        lock(&self.messages).clone()
    }

    pub fn count(&self) -> usize {
        lock(&self.messages).len()
    }

    pub fn last(&self) -> Option<String> {
        lock(&self.messages).last().cloned()
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify(&self, message: &str) {
        lock(&self.messages).push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_notifier_writes_one_line_per_message() {
        let notifier = WriterNotifier::new(Vec::new());
        notifier.notify("Please complete all fields");
        notifier.notify("Passwords do not match");

        let written = String::from_utf8(notifier.into_inner()).unwrap();
        assert_eq!(written, "Please complete all fields\nPasswords do not match\n");
    }

    #[test]
    fn test_recording_notifier_shares_log_between_clones() {
        let notifier = RecordingNotifier::new();
        let handle = notifier.clone();

        notifier.notify("first");
        notifier.notify("second");

        assert_eq!(handle.count(), 2);
        assert_eq!(handle.messages(), vec!["first", "second"]);
        assert_eq!(handle.last().as_deref(), Some("second"));
    }
}

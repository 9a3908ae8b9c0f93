use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

impl Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NotificationKind::Success => "success",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        };
        write!(f, "{s}")
    }
}

/// user-facing messages (toasts in a graphical shell).
pub trait Notifier {
    fn notify(&mut self, message: &str, kind: NotificationKind);
}

/// sends notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str, kind: NotificationKind) {
        match kind {
            NotificationKind::Success | NotificationKind::Info => log::info!("{message}"),
            NotificationKind::Warning => log::warn!("{message}"),
            NotificationKind::Error => log::error!("{message}"),
        }
    }
}

/// keeps every notification, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Vec<(NotificationKind, String)>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> &[(NotificationKind, String)] {
        &self.messages
    }

    pub fn last(&self) -> Option<&(NotificationKind, String)> {
        self.messages.last()
    }

    pub fn count(&self, kind: NotificationKind) -> usize {
        self.messages.iter().filter(|(k, _)| *k == kind).count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str, kind: NotificationKind) {
        self.messages.push((kind, message.to_string()));
    }
}

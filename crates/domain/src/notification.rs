use std::rc::Rc;

/// Fire-and-forget channel for messages shown to the user.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    #[must_use]
    pub fn success(title: &str, description: &str) -> Self {
        Self::new(NotificationKind::Success, title, description)
    }

    #[must_use]
    pub fn warning(title: &str, description: &str) -> Self {
        Self::new(NotificationKind::Warning, title, description)
    }

    #[must_use]
    pub fn error(title: &str, description: &str) -> Self {
        Self::new(NotificationKind::Error, title, description)
    }

    fn new(kind: NotificationKind, title: &str, description: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

use std::cell::RefCell;

use fitai_domain::{Notification, NotificationKind, Notifier};
use log::{debug, error, info, warn};

const MAX_VISIBLE: usize = 3;

/// Toast queue shown in the corner of the page.
///
/// The newest toast comes first. Older toasts are dropped once more than
/// three are visible.
#[derive(Debug, Default)]
pub struct Toasts {
    visible: RefCell<Vec<Notification>>,
}

impl Toasts {
    #[must_use]
    pub fn visible(&self) -> Vec<Notification> {
        self.visible.borrow().clone()
    }

    pub fn dismiss(&self, index: usize) {
        let mut visible = self.visible.borrow_mut();
        if index < visible.len() {
            let toast = visible.remove(index);
            debug!("dismissed notification \"{}\"", toast.title);
        }
    }

    pub fn clear(&self) {
        self.visible.borrow_mut().clear();
    }
}

impl Notifier for Toasts {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => info!("{}", notification.description),
            NotificationKind::Warning => warn!("{}", notification.description),
            NotificationKind::Error => error!("{}", notification.description),
        }
        let mut visible = self.visible.borrow_mut();
        visible.insert(0, notification);
        visible.truncate(MAX_VISIBLE);
    }
}

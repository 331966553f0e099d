//! Non-fatal decode events.
//!
//! A DXF file routinely holds entities this codec has no feature for
//! (CIRCLE, HATCH, INSERT ...), tables it does not model, and entities whose
//! coordinates are incomplete. None of these abort a decode; each one is
//! recorded on the [`Document`] so the caller can tell how much of the file
//! made it into the feature list.
//!
//! [`Document`]: crate::document::Document

use std::fmt;

/// What happened to the part of the file a notification refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// Entity keyword, table kind or section skipped without decoding
    NotSupported,
    /// Entity dropped because an X or Y was missing or not finite
    IncompleteGeometry,
    /// Decode stopped early, e.g. on cancellation
    Warning,
}

impl NotificationType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotSupported => "NotSupported",
            Self::IncompleteGeometry => "IncompleteGeometry",
            Self::Warning => "Warning",
        }
    }

    /// Whether content of the file is missing from the decoded document
    pub fn is_data_loss(&self) -> bool {
        matches!(self, Self::NotSupported | Self::IncompleteGeometry)
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One decode event and its message
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub notification_type: NotificationType,
    /// e.g. "2 CIRCLE entities skipped in ENTITIES"
    pub message: String,
}

impl Notification {
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.notification_type, self.message)
    }
}

/// Events of one decode, in the order they happened
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record an event; it is also logged at debug level
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        let notification = Notification::new(notification_type, message);
        log::debug!("{}", notification);
        self.items.push(notification);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Events of one type
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.notification_type == nt).collect()
    }

    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }

    /// Number of events that left file content out of the document
    pub fn data_loss_count(&self) -> usize {
        self.items
            .iter()
            .filter(|n| n.notification_type.is_data_loss())
            .count()
    }

    /// One line per type that occurred, e.g. "NotSupported: 2"
    pub fn summary(&self) -> String {
        [
            NotificationType::NotSupported,
            NotificationType::IncompleteGeometry,
            NotificationType::Warning,
        ]
        .into_iter()
        .filter_map(|nt| {
            let count = self.items.iter().filter(|n| n.notification_type == nt).count();
            (count > 0).then(|| format!("{}: {}", nt, count))
        })
        .collect::<Vec<_>>()
        .join(", ")
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

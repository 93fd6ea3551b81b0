//! Notification feed datasets

use serde::Serialize;

/// One notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Row id
    pub id: u32,
    /// Icon identifier
    pub icon: &'static str,
    /// Headline
    pub title: &'static str,
    /// Detail line
    pub description: &'static str,
    /// Relative time label
    pub time: &'static str,
    /// Whether the notification is unseen
    pub unread: bool,
}

/// The notification feed, newest first
pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            icon: "heroicons:plus-circle",
            title: "New project created",
            description: "Alice created Marketing Site",
            time: "2h ago",
            unread: true,
        },
        Notification {
            id: 2,
            icon: "heroicons:pencil-square",
            title: "Homepage updated",
            description: "Bob edited homepage content",
            time: "3h ago",
            unread: true,
        },
        Notification {
            id: 3,
            icon: "heroicons:credit-card",
            title: "Payment received",
            description: "Invoice INV-00124 paid",
            time: "1d ago",
            unread: false,
        },
        Notification {
            id: 4,
            icon: "heroicons:lock-closed",
            title: "Password policy updated",
            description: "Admin changed minimum length to 12",
            time: "2d ago",
            unread: false,
        },
        Notification {
            id: 5,
            icon: "heroicons:arrow-right-on-rectangle",
            title: "New login detected",
            description: "Login from Jakarta, ID",
            time: "2d ago",
            unread: false,
        },
        Notification {
            id: 6,
            icon: "heroicons:trash",
            title: "Post deleted",
            description: "David removed \u{201c}Old announcement\u{201d}",
            time: "3d ago",
            unread: false,
        },
    ]
}

/// Count of unseen notifications, for the bell badge
pub fn unread_count() -> usize {
    notifications().iter().filter(|n| n.unread).count()
}

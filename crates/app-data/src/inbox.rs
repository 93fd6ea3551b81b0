//! Inbox datasets

use serde::Serialize;

/// One inbox message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InboxMessage {
    /// Row id
    pub id: u32,
    /// Sender label
    pub from: &'static str,
    /// Subject line
    pub subject: &'static str,
    /// Body preview
    pub preview: &'static str,
    /// Relative time label
    pub time: &'static str,
    /// Whether the message is unread
    pub unread: bool,
}

/// The inbox, newest first
pub fn messages() -> Vec<InboxMessage> {
    vec![
        InboxMessage {
            id: 1,
            from: "Support",
            subject: "Welcome to Lumo",
            preview: "Thanks for joining! Here are a few tips to get started...",
            time: "2h ago",
            unread: true,
        },
        InboxMessage {
            id: 2,
            from: "Billing",
            subject: "Invoice INV-00124",
            preview: "Your October invoice is available for download.",
            time: "1d ago",
            unread: true,
        },
        InboxMessage {
            id: 3,
            from: "Mentor Team",
            subject: "Session Reminder",
            preview: "Your mentorship session is scheduled for tomorrow at 10 AM.",
            time: "2d ago",
            unread: false,
        },
        InboxMessage {
            id: 4,
            from: "Security",
            subject: "New login from Chrome on Windows",
            preview: "We detected a new sign-in. If this was not you...",
            time: "3d ago",
            unread: false,
        },
        InboxMessage {
            id: 5,
            from: "Product",
            subject: "New features launched",
            preview: "Explore analytics funnels and ARPU insights in the dashboard.",
            time: "4d ago",
            unread: false,
        },
    ]
}

/// Count of unread messages, for the sidebar badge
pub fn unread_count() -> usize {
    messages().iter().filter(|m| m.unread).count()
}

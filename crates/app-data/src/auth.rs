//! Login-page showcase datasets
//!
//! The sign-in screen renders a miniature product preview next to the form;
//! these are its numbers. None of this feeds real authentication.

use serde::Serialize;

/// A headline stat tile on the login preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatTile {
    /// Formatted value
    pub value: &'static str,
    /// Secondary text: a delta or a label
    pub detail: &'static str,
}

/// Stat tiles for the login preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoginPreviewStats {
    /// Monthly recurring revenue
    pub mrr: StatTile,
    /// Live active users
    pub active_users: StatTile,
    /// Open support tickets
    pub tickets: StatTile,
    /// Trial conversion rate
    pub conversion: StatTile,
    /// Net promoter score
    pub nps: StatTile,
    /// Revenue with forecast
    pub revenue: StatTile,
}

/// Login preview stats
pub fn login_preview_stats() -> LoginPreviewStats {
    LoginPreviewStats {
        mrr: StatTile { value: "$18,930", detail: "+8%" },
        active_users: StatTile { value: "2,184", detail: "Live" },
        tickets: StatTile { value: "37", detail: "Open" },
        conversion: StatTile { value: "4.8%", detail: "Rate" },
        nps: StatTile { value: "54", detail: "+3" },
        revenue: StatTile { value: "$42.1k", detail: "+6%" },
    }
}

/// One row in the login preview activity feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreviewActivity {
    /// What happened
    pub action: &'static str,
    /// Who or what it concerns
    pub detail: &'static str,
    /// Amount or actor label
    pub amount: &'static str,
    /// Activity category
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Activity feed rows for the login preview
pub fn preview_activity() -> Vec<PreviewActivity> {
    vec![
        PreviewActivity {
            action: "Invoice paid",
            detail: "Acme Inc.",
            amount: "+$320",
            kind: "invoice",
        },
        PreviewActivity { action: "New signup", detail: "Pro plan", amount: "User", kind: "signup" },
    ]
}

/// One row in the login preview transaction list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreviewTransaction {
    /// Provider and invoice label
    pub label: &'static str,
    /// Relative time label
    pub time: &'static str,
    /// Amount, formatted
    pub amount: &'static str,
    /// Settlement label
    pub status: &'static str,
}

/// Transaction rows for the login preview
pub fn preview_transactions() -> Vec<PreviewTransaction> {
    vec![
        PreviewTransaction {
            label: "Stripe • INV-1201",
            time: "2 min ago",
            amount: "$129",
            status: "Paid",
        },
        PreviewTransaction {
            label: "PayPal • INV-1200",
            time: "8 min ago",
            amount: "$59",
            status: "Pending",
        },
    ]
}

/// Signup-flow preview card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPreview {
    /// Wizard step label
    pub step: &'static str,
    /// Completion percent
    pub progress: u8,
    /// Included storage
    pub storage: &'static str,
    /// Price label
    pub price: &'static str,
    /// Plan name
    pub plan_name: &'static str,
    /// Setup checklist score
    pub setup_score: u8,
}

/// Signup-flow preview card values
pub fn register_preview() -> RegisterPreview {
    RegisterPreview {
        step: "Step 2/4",
        progress: 50,
        storage: "2GB",
        price: "$0",
        plan_name: "Starter Plan",
        setup_score: 78,
    }
}

/// Feature bullets on the register page
pub fn features() -> Vec<&'static str> {
    vec!["Team workspace & roles", "Realtime activity feed", "Secure authentication"]
}

/// A recent signup row on the register preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecentSignup {
    /// Signup email
    pub email: &'static str,
    /// Chosen plan label
    pub plan: &'static str,
    /// Verification state label
    pub status: &'static str,
}

/// Recent signups for the register preview
pub fn recent_signups() -> Vec<RecentSignup> {
    vec![
        RecentSignup { email: "jane@acme.com", plan: "Pro trial", status: "Verified" },
        RecentSignup { email: "mike@studio.io", plan: "Starter", status: "Pending" },
        RecentSignup { email: "sara@labs.co", plan: "Team", status: "Invited" },
    ]
}

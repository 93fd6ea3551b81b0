//! Static datasets for Lumo's presentational pages
//!
//! Every page in the shell renders from a typed, in-repo dataset; there is no
//! network or database behind them. Each module mirrors one page family:
//!
//! - [`dashboard`] - overview stats, revenue series, recent activity
//! - [`analytics`] - revenue, usage, and active-user analytics
//! - [`billing`] - invoices, payment methods, spend
//! - [`subscriptions`] - plans, per-user subscriptions, usage limits
//! - [`users`] - directory, roles, activity log, growth
//! - [`inbox`] - inbox messages
//! - [`notifications`] - notification feed
//! - [`settings`] - profile, organization, preference, and security settings
//! - [`auth`] - login-page showcase stats

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analytics;
pub mod auth;
pub mod billing;
pub mod dashboard;
pub mod inbox;
pub mod notifications;
pub mod settings;
pub mod subscriptions;
pub mod users;

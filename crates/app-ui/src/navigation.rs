//! Navigation system for Lumo
//!
//! This module provides the declarative page-routing table:
//! - Route definitions with per-route metadata (title, auth flag)
//! - Path rendering and resolution, including the redirect table
//! - Navigation state for the current route
//!
//! Authentication is not implemented; the route guard exists as a seam and
//! always allows navigation.

use serde::{Deserialize, Serialize};

// =============================================================================
// Route Definitions
// =============================================================================

/// All pages in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    /// Sign-in page
    Login,

    /// Dashboard overview
    Home,

    // Analytics
    /// Revenue analytics
    AnalyticsRevenue,
    /// Usage analytics
    AnalyticsUsage,
    /// Active-user analytics
    AnalyticsActiveUsers,

    // Subscriptions
    /// Available plans
    SubscriptionPlans,
    /// Per-user subscriptions
    UserSubscriptions,
    /// Usage limits
    UsageLimits,

    // Billing
    /// Billing overview
    BillingOverview,
    /// Invoice history
    Invoices,
    /// Payment methods
    PaymentMethods,

    // Users
    /// User directory
    AllUsers,
    /// Role management
    Roles,
    /// Activity log
    ActivityLog,

    // Settings
    /// Profile settings
    SettingsProfile,
    /// Organization settings
    SettingsOrganization,
    /// Preference settings (theme customization lives here)
    SettingsPreferences,
    /// Security settings
    SettingsSecurity,

    /// Inbox
    Inbox,
    /// Notification feed
    Notifications,
}

impl Route {
    /// Every route, in sidebar order
    pub const ALL: [Route; 20] = [
        Route::Login,
        Route::Home,
        Route::AnalyticsRevenue,
        Route::AnalyticsUsage,
        Route::AnalyticsActiveUsers,
        Route::SubscriptionPlans,
        Route::UserSubscriptions,
        Route::UsageLimits,
        Route::BillingOverview,
        Route::Invoices,
        Route::PaymentMethods,
        Route::AllUsers,
        Route::Roles,
        Route::ActivityLog,
        Route::SettingsProfile,
        Route::SettingsOrganization,
        Route::SettingsPreferences,
        Route::SettingsSecurity,
        Route::Inbox,
        Route::Notifications,
    ];

    /// The path this route renders at
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/auth/login",
            Route::Home => "/dashboard/home",
            Route::AnalyticsRevenue => "/dashboard/analytics/revenue",
            Route::AnalyticsUsage => "/dashboard/analytics/usage",
            Route::AnalyticsActiveUsers => "/dashboard/analytics/active-users",
            Route::SubscriptionPlans => "/dashboard/subscriptions/plans",
            Route::UserSubscriptions => "/dashboard/subscriptions/user-subscriptions",
            Route::UsageLimits => "/dashboard/subscriptions/usage-limits",
            Route::BillingOverview => "/dashboard/billing/overview",
            Route::Invoices => "/dashboard/billing/invoices",
            Route::PaymentMethods => "/dashboard/billing/payment-methods",
            Route::AllUsers => "/dashboard/users/all",
            Route::Roles => "/dashboard/users/roles",
            Route::ActivityLog => "/dashboard/users/activity-log",
            Route::SettingsProfile => "/dashboard/settings/profile",
            Route::SettingsOrganization => "/dashboard/settings/organization",
            Route::SettingsPreferences => "/dashboard/settings/preferences",
            Route::SettingsSecurity => "/dashboard/settings/security",
            Route::Inbox => "/dashboard/inbox",
            Route::Notifications => "/dashboard/notifications",
        }
    }

    /// Page title shown in the header and document title
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Home => "Dashboard",
            Route::AnalyticsRevenue => "Revenue",
            Route::AnalyticsUsage => "Usage",
            Route::AnalyticsActiveUsers => "Active Users",
            Route::SubscriptionPlans => "Plans",
            Route::UserSubscriptions => "User Subscriptions",
            Route::UsageLimits => "Usage Limits",
            Route::BillingOverview => "Billing Overview",
            Route::Invoices => "Invoices",
            Route::PaymentMethods => "Payment Methods",
            Route::AllUsers => "All Users",
            Route::Roles => "Roles",
            Route::ActivityLog => "Activity Log",
            Route::SettingsProfile => "Profile",
            Route::SettingsOrganization => "Organization",
            Route::SettingsPreferences => "Preferences",
            Route::SettingsSecurity => "Security",
            Route::Inbox => "Inbox",
            Route::Notifications => "Notifications",
        }
    }

    /// Whether the route sits behind the (placeholder) auth gate
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

// =============================================================================
// Router
// =============================================================================

/// Redirect table applied before route resolution
pub const REDIRECTS: [(&str, &str); 3] = [
    ("/", "/dashboard/home"),
    ("/dashboard", "/dashboard/home"),
    ("/login", "/auth/login"),
];

/// Resolves paths to routes and gates navigation
#[derive(Debug, Clone, Copy, Default)]
pub struct Router;

impl Router {
    /// Create a router
    pub fn new() -> Self {
        Self
    }

    /// Resolve a path to a route, following redirects
    pub fn resolve(&self, path: &str) -> Option<Route> {
        let path = REDIRECTS
            .iter()
            .find(|(from, _)| *from == path)
            .map(|(_, to)| *to)
            .unwrap_or(path);

        Route::ALL.iter().copied().find(|route| route.path() == path)
    }

    /// Route guard, evaluated before every navigation
    ///
    /// Authentication is out of scope; the guard always allows.
    pub fn allows(&self, _route: Route) -> bool {
        true
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// The current navigation position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    current: Route,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self { current: Route::Home }
    }
}

impl NavigationState {
    /// Start at the dashboard home page
    pub fn new() -> Self {
        Self::default()
    }

    /// The current route
    pub fn current(&self) -> Route {
        self.current
    }

    /// Navigate to a path; returns the new route, or `None` if the path does
    /// not resolve or the guard denies it
    pub fn navigate(&mut self, router: &Router, path: &str) -> Option<Route> {
        let route = router.resolve(path)?;
        if !router.allows(route) {
            return None;
        }
        self.current = route;
        Some(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_unique() {
        let paths: std::collections::HashSet<_> = Route::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(paths.len(), Route::ALL.len());
    }

    #[test]
    fn test_resolve_exact_paths() {
        let router = Router::new();

        for route in Route::ALL {
            assert_eq!(router.resolve(route.path()), Some(route));
        }
    }

    #[test]
    fn test_resolve_redirects() {
        let router = Router::new();

        assert_eq!(router.resolve("/"), Some(Route::Home));
        assert_eq!(router.resolve("/dashboard"), Some(Route::Home));
        assert_eq!(router.resolve("/login"), Some(Route::Login));
    }

    #[test]
    fn test_resolve_unknown_path() {
        let router = Router::new();

        assert_eq!(router.resolve("/dashboard/unknown"), None);
        assert_eq!(router.resolve(""), None);
    }

    #[test]
    fn test_only_login_is_public() {
        assert!(!Route::Login.requires_auth());
        let gated = Route::ALL.iter().filter(|r| r.requires_auth()).count();
        assert_eq!(gated, Route::ALL.len() - 1);
    }

    #[test]
    fn test_guard_allows_everything() {
        let router = Router::new();
        for route in Route::ALL {
            assert!(router.allows(route));
        }
    }

    #[test]
    fn test_navigation_state() {
        let router = Router::new();
        let mut nav = NavigationState::new();
        assert_eq!(nav.current(), Route::Home);

        let route = nav.navigate(&router, "/dashboard/billing/invoices");
        assert_eq!(route, Some(Route::Invoices));
        assert_eq!(nav.current(), Route::Invoices);

        // Failed navigation leaves the current route untouched
        assert_eq!(nav.navigate(&router, "/nowhere"), None);
        assert_eq!(nav.current(), Route::Invoices);
    }

    #[test]
    fn test_route_serialization() {
        let json = serde_json::to_string(&Route::AnalyticsActiveUsers).unwrap();
        assert_eq!(json, "\"analytics-active-users\"");

        let route: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(route, Route::AnalyticsActiveUsers);
    }

    #[test]
    fn test_titles_are_nonempty() {
        for route in Route::ALL {
            assert!(!route.title().is_empty());
        }
    }
}

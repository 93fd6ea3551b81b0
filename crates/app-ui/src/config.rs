//! Application configuration
//!
//! Static identity and chrome for the shell: name, logo, theme options, and
//! the sidebar navigation menu.

use crate::navigation::Route;
use serde::Serialize;

/// Logo asset variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Logo {
    /// Alt text
    pub alt: &'static str,
    /// Asset for light backgrounds
    pub light: &'static str,
    /// Asset for dark backgrounds
    pub dark: &'static str,
}

/// Theme customization options surfaced in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeOptions {
    /// Whether the theme picker is shown
    pub customizable: bool,
    /// Brand color pre-selected for new installs
    pub default_color: &'static str,
}

/// Application identity and chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    /// Product name
    pub name: &'static str,
    /// Tagline shown under the name
    pub subtitle: &'static str,
    /// Icon identifier for the shell
    pub icon: &'static str,
    /// Logo variants
    pub logo: Logo,
    /// Theme options
    pub theme: ThemeOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "Lumo",
            subtitle: "Insights at a Glance",
            icon: "duo-icons:dashboard",
            logo: Logo {
                alt: "Lumo Logo",
                light: "/logo-light.svg",
                dark: "/logo-dark.svg",
            },
            theme: ThemeOptions { customizable: true, default_color: "green" },
        }
    }
}

/// One entry in the sidebar navigation menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Display label
    pub label: &'static str,
    /// Icon identifier
    pub icon: &'static str,
    /// Route for leaf items; `None` for group headers
    pub route: Option<Route>,
    /// Child entries for group headers
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    fn leaf(label: &'static str, icon: &'static str, route: Route) -> Self {
        Self { label, icon, route: Some(route), children: Vec::new() }
    }

    fn group(label: &'static str, icon: &'static str, children: Vec<MenuItem>) -> Self {
        Self { label, icon, route: None, children }
    }
}

/// The sidebar navigation menu, in display order
pub fn navigation_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::leaf("Dashboard", "heroicons:squares-2x2", Route::Home),
        MenuItem::group(
            "Analytics",
            "heroicons:chart-bar",
            vec![
                MenuItem::leaf("Revenue", "heroicons:banknotes", Route::AnalyticsRevenue),
                MenuItem::leaf("Usage", "heroicons:chart-bar", Route::AnalyticsUsage),
                MenuItem::leaf(
                    "Active Users",
                    "heroicons:user-group",
                    Route::AnalyticsActiveUsers,
                ),
            ],
        ),
        MenuItem::group(
            "Subscriptions",
            "heroicons:credit-card",
            vec![
                MenuItem::leaf("Plans", "heroicons:rectangle-stack", Route::SubscriptionPlans),
                MenuItem::leaf(
                    "User Subscriptions",
                    "heroicons:user-group",
                    Route::UserSubscriptions,
                ),
                MenuItem::leaf("Usage Limits", "heroicons:chart-pie", Route::UsageLimits),
            ],
        ),
        MenuItem::group(
            "Billing",
            "heroicons:banknotes",
            vec![
                MenuItem::leaf("Overview", "heroicons:document-chart-bar", Route::BillingOverview),
                MenuItem::leaf("Invoices", "heroicons:document-text", Route::Invoices),
                MenuItem::leaf("Payment Methods", "heroicons:credit-card", Route::PaymentMethods),
            ],
        ),
        MenuItem::group(
            "Users",
            "heroicons:users",
            vec![
                MenuItem::leaf("All Users", "heroicons:users", Route::AllUsers),
                MenuItem::leaf("Roles", "heroicons:shield-check", Route::Roles),
                MenuItem::leaf("Activity Log", "heroicons:clock", Route::ActivityLog),
            ],
        ),
        MenuItem::group(
            "Settings",
            "heroicons:cog-6-tooth",
            vec![
                MenuItem::leaf("Profile", "heroicons:user-circle", Route::SettingsProfile),
                MenuItem::leaf(
                    "Organization",
                    "heroicons:building-office",
                    Route::SettingsOrganization,
                ),
                MenuItem::leaf(
                    "Preferences",
                    "heroicons:adjustments-horizontal",
                    Route::SettingsPreferences,
                ),
                MenuItem::leaf("Security", "heroicons:lock-closed", Route::SettingsSecurity),
            ],
        ),
    ]
}

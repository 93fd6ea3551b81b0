//! Subscription page datasets

use serde::Serialize;

/// A sellable plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    /// Row id
    pub id: u32,
    /// Plan name
    pub name: &'static str,
    /// Price, formatted
    pub price: &'static str,
    /// Billing interval
    pub interval: &'static str,
    /// Marketing feature list
    pub features: Vec<&'static str>,
    /// Highlighted in the picker
    pub popular: bool,
    /// Accent color name
    pub color: &'static str,
}

/// All sellable plans
pub fn plans() -> Vec<Plan> {
    vec![
        Plan {
            id: 1,
            name: "Starter",
            price: "$29",
            interval: "month",
            features: vec!["5 Projects", "10GB Storage", "Basic Support", "Community Access"],
            popular: false,
            color: "gray",
        },
        Plan {
            id: 2,
            name: "Pro",
            price: "$79",
            interval: "month",
            features: vec![
                "Unlimited Projects",
                "100GB Storage",
                "Priority Support",
                "API Access",
                "Custom Domain",
            ],
            popular: true,
            color: "blue",
        },
        Plan {
            id: 3,
            name: "Enterprise",
            price: "$299",
            interval: "month",
            features: vec![
                "Unlimited Everything",
                "1TB Storage",
                "24/7 Dedicated Support",
                "SLA",
                "SSO",
                "Audit Logs",
            ],
            popular: false,
            color: "gray",
        },
    ]
}

/// Lifecycle state of a user's subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SubscriptionStatus {
    /// Billing normally
    Active,
    /// Terminated by the user
    Canceled,
    /// Payment overdue
    PastDue,
}

impl SubscriptionStatus {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "Active",
            SubscriptionStatus::Canceled => "Canceled",
            SubscriptionStatus::PastDue => "Past Due",
        }
    }
}

/// One user's subscription row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSubscription {
    /// Row id
    pub id: u32,
    /// Subscriber name
    pub user: &'static str,
    /// Subscriber email
    pub email: &'static str,
    /// Plan name
    pub plan: &'static str,
    /// Lifecycle state
    pub status: SubscriptionStatus,
    /// Next billing date, ISO, or "-" when not billing
    pub next_billing: &'static str,
}

/// Per-user subscriptions
pub fn user_subscriptions() -> Vec<UserSubscription> {
    vec![
        UserSubscription {
            id: 1,
            user: "John Doe",
            email: "john@example.com",
            plan: "Pro",
            status: SubscriptionStatus::Active,
            next_billing: "2025-11-15",
        },
        UserSubscription {
            id: 2,
            user: "Jane Smith",
            email: "jane@example.com",
            plan: "Starter",
            status: SubscriptionStatus::Active,
            next_billing: "2025-11-18",
        },
        UserSubscription {
            id: 3,
            user: "Robert Johnson",
            email: "robert@example.com",
            plan: "Enterprise",
            status: SubscriptionStatus::Active,
            next_billing: "2025-11-20",
        },
        UserSubscription {
            id: 4,
            user: "Emily Davis",
            email: "emily@example.com",
            plan: "Pro",
            status: SubscriptionStatus::Canceled,
            next_billing: "-",
        },
        UserSubscription {
            id: 5,
            user: "Michael Wilson",
            email: "michael@example.com",
            plan: "Starter",
            status: SubscriptionStatus::PastDue,
            next_billing: "2025-11-12",
        },
    ]
}

/// Consumption against a plan limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsageLimit {
    /// Resource name
    pub resource: &'static str,
    /// Amount consumed
    pub used: u64,
    /// Plan limit
    pub total: u64,
    /// Unit label
    pub unit: &'static str,
    /// Consumed percentage, rounded down
    pub percentage: u8,
    /// Meter color name
    pub color: &'static str,
}

/// Usage against plan limits
pub fn usage_limits() -> Vec<UsageLimit> {
    vec![
        UsageLimit {
            resource: "Storage",
            used: 450,
            total: 1000,
            unit: "GB",
            percentage: 45,
            color: "blue",
        },
        UsageLimit {
            resource: "API Calls",
            used: 850_000,
            total: 1_000_000,
            unit: "reqs",
            percentage: 85,
            color: "yellow",
        },
        UsageLimit {
            resource: "Projects",
            used: 12,
            total: 50,
            unit: "projects",
            percentage: 24,
            color: "green",
        },
        UsageLimit {
            resource: "Members",
            used: 8,
            total: 10,
            unit: "users",
            percentage: 80,
            color: "orange",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_popular_plan() {
        let popular = plans().iter().filter(|p| p.popular).count();
        assert_eq!(popular, 1);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(SubscriptionStatus::Active.label(), "Active");
        assert_eq!(SubscriptionStatus::PastDue.label(), "Past Due");
    }

    #[test]
    fn test_canceled_subscriptions_have_no_billing_date() {
        for sub in user_subscriptions() {
            if sub.status == SubscriptionStatus::Canceled {
                assert_eq!(sub.next_billing, "-");
            } else {
                assert!(sub.next_billing.starts_with("2025-"));
            }
        }
    }

    #[test]
    fn test_usage_percentage_matches_counts() {
        for limit in usage_limits() {
            let expected = (limit.used * 100 / limit.total) as u8;
            assert_eq!(limit.percentage, expected, "resource {}", limit.resource);
            assert!(limit.used <= limit.total);
        }
    }
}

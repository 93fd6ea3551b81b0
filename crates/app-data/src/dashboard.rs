//! Dashboard overview datasets

use serde::Serialize;

/// Headline SaaS metrics for the overview page
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Monthly recurring revenue, in dollars
    pub mrr: u32,
    /// MRR growth, percent month-over-month
    pub mrr_growth: f64,
    /// Annual recurring revenue, in dollars
    pub arr: u32,
    /// ARR growth, percent year-over-year
    pub arr_growth: f64,
    /// Customers with an active subscription
    pub active_customers: u32,
    /// Customers gained this month
    pub new_customers_this_month: u32,
    /// Monthly churn, percent
    pub churn_rate: f64,
    /// Churn change vs. last month, percentage points
    pub churn_rate_change: f64,
    /// Customer lifetime value, in dollars
    pub ltv: u32,
    /// Customer acquisition cost, in dollars
    pub cac: u32,
    /// Net revenue retention, percent
    pub nrr: u32,
    /// Average revenue per user, in dollars
    pub arpu: f64,
    /// Trial-to-paid conversion, percent
    pub trial_conversion_rate: f64,
}

/// Headline metrics
pub fn stats() -> DashboardStats {
    DashboardStats {
        mrr: 124_500,
        mrr_growth: 5.3,
        arr: 1_494_000,
        arr_growth: 12.5,
        active_customers: 3420,
        new_customers_this_month: 127,
        churn_rate: 2.3,
        churn_rate_change: -0.5,
        ltv: 12_500,
        cac: 850,
        nrr: 108,
        arpu: 156.25,
        trial_conversion_rate: 24.5,
    }
}

/// One month of MRR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MrrPoint {
    /// Month label
    pub month: &'static str,
    /// MRR in dollars
    pub mrr: u32,
}

/// MRR trend for the last six months
pub fn mrr_series() -> Vec<MrrPoint> {
    vec![
        MrrPoint { month: "Jan", mrr: 82_000 },
        MrrPoint { month: "Feb", mrr: 89_000 },
        MrrPoint { month: "Mar", mrr: 92_000 },
        MrrPoint { month: "Apr", mrr: 101_000 },
        MrrPoint { month: "May", mrr: 112_000 },
        MrrPoint { month: "Jun", mrr: 124_500 },
    ]
}

/// One month of revenue vs. expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevenueExpensePoint {
    /// Month label
    pub month: &'static str,
    /// Revenue in dollars
    pub revenue: u32,
    /// Expenses in dollars
    pub expenses: u32,
}

/// Revenue and expenses for the last six months
pub fn revenue_expense_series() -> Vec<RevenueExpensePoint> {
    vec![
        RevenueExpensePoint { month: "Jan", revenue: 125_000, expenses: 95_000 },
        RevenueExpensePoint { month: "Feb", revenue: 142_000, expenses: 102_000 },
        RevenueExpensePoint { month: "Mar", revenue: 138_000, expenses: 98_000 },
        RevenueExpensePoint { month: "Apr", revenue: 169_000, expenses: 115_000 },
        RevenueExpensePoint { month: "May", revenue: 182_000, expenses: 125_000 },
        RevenueExpensePoint { month: "Jun", revenue: 195_000, expenses: 132_000 },
    ]
}

/// One month of customer movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CustomerGrowthPoint {
    /// Month label
    pub month: &'static str,
    /// Customers gained
    pub new: u32,
    /// Customers lost
    pub churned: u32,
}

/// Customer growth for the last six months
pub fn customer_growth_series() -> Vec<CustomerGrowthPoint> {
    vec![
        CustomerGrowthPoint { month: "Jan", new: 85, churned: 12 },
        CustomerGrowthPoint { month: "Feb", new: 92, churned: 15 },
        CustomerGrowthPoint { month: "Mar", new: 105, churned: 18 },
        CustomerGrowthPoint { month: "Apr", new: 118, churned: 20 },
        CustomerGrowthPoint { month: "May", new: 127, churned: 22 },
        CustomerGrowthPoint { month: "Jun", new: 135, churned: 25 },
    ]
}

/// Customers and revenue per plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanDistribution {
    /// Plan name
    pub plan: &'static str,
    /// Customer count on this plan
    pub customers: u32,
    /// Monthly revenue from this plan, in dollars
    pub revenue: u32,
}

/// Distribution of customers across plans
pub fn plan_distribution() -> Vec<PlanDistribution> {
    vec![
        PlanDistribution { plan: "Starter", customers: 1205, revenue: 24_100 },
        PlanDistribution { plan: "Professional", customers: 198, revenue: 29_700 },
        PlanDistribution { plan: "Enterprise", customers: 342, revenue: 51_300 },
    ]
}

/// Revenue attributed to an acquisition source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevenueSource {
    /// Source label
    pub source: &'static str,
    /// Revenue in dollars
    pub revenue: u32,
}

/// Revenue by acquisition source
pub fn revenue_sources() -> Vec<RevenueSource> {
    vec![
        RevenueSource { source: "Organic", revenue: 45_000 },
        RevenueSource { source: "Paid Ads", revenue: 38_000 },
        RevenueSource { source: "Referrals", revenue: 28_000 },
        RevenueSource { source: "Partnerships", revenue: 13_500 },
    ]
}

/// A high-value customer row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopCustomer {
    /// Row id
    pub id: u32,
    /// Company name
    pub name: &'static str,
    /// Plan name
    pub plan: &'static str,
    /// Seats in use
    pub users: u32,
    /// MRR contribution in dollars
    pub mrr: u32,
    /// Subscription status label
    pub status: &'static str,
}

/// Top customers by MRR
pub fn top_customers() -> Vec<TopCustomer> {
    vec![
        TopCustomer {
            id: 1,
            name: "Acme Corporation",
            plan: "Enterprise",
            users: 250,
            mrr: 12_500,
            status: "Active",
        },
        TopCustomer {
            id: 2,
            name: "Tech Solutions Inc",
            plan: "Enterprise",
            users: 180,
            mrr: 9000,
            status: "Active",
        },
        TopCustomer {
            id: 3,
            name: "Global Industries",
            plan: "Professional",
            users: 95,
            mrr: 4750,
            status: "Active",
        },
        TopCustomer {
            id: 4,
            name: "Innovation Labs",
            plan: "Enterprise",
            users: 120,
            mrr: 6000,
            status: "Active",
        },
        TopCustomer {
            id: 5,
            name: "Digital Ventures",
            plan: "Professional",
            users: 75,
            mrr: 3750,
            status: "Active",
        },
    ]
}

/// Outcome of a payment transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransactionStatus {
    /// Settled
    Completed,
    /// Awaiting settlement
    Pending,
    /// Payment failed
    Failed,
}

/// A recent payment transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Transaction id
    pub id: &'static str,
    /// Customer name
    pub customer: &'static str,
    /// Amount in dollars
    pub amount: u32,
    /// Settlement status
    pub status: TransactionStatus,
    /// Relative time label
    pub date: &'static str,
}

/// Recent transactions feed
pub fn recent_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "TXN-001",
            customer: "Acme Corp",
            amount: 12_500,
            status: TransactionStatus::Completed,
            date: "2 hours ago",
        },
        Transaction {
            id: "TXN-002",
            customer: "Tech Solutions",
            amount: 9000,
            status: TransactionStatus::Completed,
            date: "5 hours ago",
        },
        Transaction {
            id: "TXN-003",
            customer: "Global Industries",
            amount: 4750,
            status: TransactionStatus::Pending,
            date: "1 day ago",
        },
        Transaction {
            id: "TXN-004",
            customer: "Innovation Labs",
            amount: 6000,
            status: TransactionStatus::Completed,
            date: "1 day ago",
        },
        Transaction {
            id: "TXN-005",
            customer: "Digital Ventures",
            amount: 3750,
            status: TransactionStatus::Failed,
            date: "2 days ago",
        },
    ]
}

/// A recent account activity entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Activity {
    /// Row id
    pub id: u32,
    /// Acting user
    pub user: &'static str,
    /// What happened
    pub action: &'static str,
    /// Activity category
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Relative time label
    pub time: &'static str,
}

/// Recent activity feed
pub fn recent_activities() -> Vec<Activity> {
    vec![
        Activity {
            id: 1,
            user: "John Doe",
            action: "upgraded to Enterprise plan",
            kind: "upgrade",
            time: "5 minutes ago",
        },
        Activity {
            id: 2,
            user: "Jane Smith",
            action: "completed payment",
            kind: "payment",
            time: "15 minutes ago",
        },
        Activity {
            id: 3,
            user: "Bob Johnson",
            action: "started free trial",
            kind: "trial",
            time: "1 hour ago",
        },
        Activity {
            id: 4,
            user: "Alice Williams",
            action: "cancelled subscription",
            kind: "cancel",
            time: "2 hours ago",
        },
        Activity {
            id: 5,
            user: "Charlie Brown",
            action: "added 10 team members",
            kind: "team",
            time: "3 hours ago",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arr_is_annualized_mrr() {
        let stats = stats();
        assert_eq!(stats.arr, stats.mrr * 12);
    }

    #[test]
    fn test_mrr_series_ends_at_current_mrr() {
        let series = mrr_series();
        assert_eq!(series.len(), 6);
        assert_eq!(series.last().unwrap().mrr, stats().mrr);
    }

    #[test]
    fn test_revenue_always_exceeds_expenses() {
        for point in revenue_expense_series() {
            assert!(point.revenue > point.expenses, "{} runs at a loss", point.month);
        }
    }

    #[test]
    fn test_top_customers_lead_with_largest() {
        let customers = top_customers();
        let max = customers.iter().map(|c| c.mrr).max().unwrap();
        assert_eq!(customers[0].mrr, max);
        assert!(customers.iter().all(|c| c.status == "Active"));
    }

    #[test]
    fn test_transaction_ids_unique() {
        let txns = recent_transactions();
        let ids: std::collections::HashSet<_> = txns.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), txns.len());
    }
}

//! Analytics page datasets

use serde::Serialize;

/// Headline analytics figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsStats {
    /// Total revenue, formatted
    pub total_revenue: &'static str,
    /// Revenue growth, formatted
    pub revenue_growth: &'static str,
    /// Total API requests, formatted
    pub total_requests: &'static str,
    /// Request growth, formatted
    pub requests_growth: &'static str,
    /// Users active right now
    pub active_users_now: u32,
    /// Active-user growth, formatted
    pub active_users_growth: &'static str,
}

/// Headline figures
pub fn stats() -> AnalyticsStats {
    AnalyticsStats {
        total_revenue: "$812,000",
        revenue_growth: "+12.5%",
        total_requests: "4.2M",
        requests_growth: "+8.2%",
        active_users_now: 89,
        active_users_growth: "+3.1%",
    }
}

/// One month of revenue, expenses, and profit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevenuePoint {
    /// Month label
    pub month: &'static str,
    /// Revenue in dollars
    pub revenue: u32,
    /// Expenses in dollars
    pub expenses: u32,
    /// Profit in dollars
    pub profit: u32,
}

/// Twelve months of revenue
pub fn revenue_series() -> Vec<RevenuePoint> {
    vec![
        RevenuePoint { month: "Jan", revenue: 45_000, expenses: 32_000, profit: 13_000 },
        RevenuePoint { month: "Feb", revenue: 52_000, expenses: 35_000, profit: 17_000 },
        RevenuePoint { month: "Mar", revenue: 48_000, expenses: 34_000, profit: 14_000 },
        RevenuePoint { month: "Apr", revenue: 61_000, expenses: 45_000, profit: 16_000 },
        RevenuePoint { month: "May", revenue: 55_000, expenses: 40_000, profit: 15_000 },
        RevenuePoint { month: "Jun", revenue: 67_000, expenses: 48_000, profit: 19_000 },
        RevenuePoint { month: "Jul", revenue: 72_000, expenses: 50_000, profit: 22_000 },
        RevenuePoint { month: "Aug", revenue: 69_000, expenses: 49_000, profit: 20_000 },
        RevenuePoint { month: "Sep", revenue: 78_000, expenses: 53_000, profit: 25_000 },
        RevenuePoint { month: "Oct", revenue: 85_000, expenses: 58_000, profit: 27_000 },
        RevenuePoint { month: "Nov", revenue: 92_000, expenses: 62_000, profit: 30_000 },
        RevenuePoint { month: "Dec", revenue: 98_000, expenses: 65_000, profit: 33_000 },
    ]
}

/// One day of platform usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsagePoint {
    /// ISO date label
    pub date: &'static str,
    /// API requests served
    pub requests: u32,
    /// Bandwidth consumed, formatted
    pub bandwidth: &'static str,
}

/// One week of usage
pub fn usage_series() -> Vec<UsagePoint> {
    vec![
        UsagePoint { date: "2025-10-01", requests: 12_000, bandwidth: "450GB" },
        UsagePoint { date: "2025-10-02", requests: 13_500, bandwidth: "480GB" },
        UsagePoint { date: "2025-10-03", requests: 11_000, bandwidth: "410GB" },
        UsagePoint { date: "2025-10-04", requests: 14_200, bandwidth: "520GB" },
        UsagePoint { date: "2025-10-05", requests: 15_800, bandwidth: "590GB" },
        UsagePoint { date: "2025-10-06", requests: 14_900, bandwidth: "550GB" },
        UsagePoint { date: "2025-10-07", requests: 16_200, bandwidth: "610GB" },
    ]
}

/// Concurrent users at a time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveUsersPoint {
    /// Time-of-day label
    pub time: &'static str,
    /// Concurrent users
    pub users: u32,
}

/// Active users over one day
pub fn active_users_series() -> Vec<ActiveUsersPoint> {
    vec![
        ActiveUsersPoint { time: "00:00", users: 320 },
        ActiveUsersPoint { time: "04:00", users: 150 },
        ActiveUsersPoint { time: "08:00", users: 890 },
        ActiveUsersPoint { time: "12:00", users: 1450 },
        ActiveUsersPoint { time: "16:00", users: 1320 },
        ActiveUsersPoint { time: "20:00", users: 980 },
        ActiveUsersPoint { time: "23:59", users: 450 },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revenue_series_is_a_full_year() {
        assert_eq!(revenue_series().len(), 12);
    }

    #[test]
    fn test_profit_is_revenue_minus_expenses() {
        for point in revenue_series() {
            assert_eq!(point.profit, point.revenue - point.expenses, "month {}", point.month);
        }
    }

    #[test]
    fn test_usage_series_is_a_week() {
        assert_eq!(usage_series().len(), 7);
    }

    #[test]
    fn test_active_users_peak_at_midday() {
        let series = active_users_series();
        let peak = series.iter().max_by_key(|p| p.users).unwrap();
        assert_eq!(peak.time, "12:00");
    }
}

//! User management datasets

use serde::Serialize;

/// Account state of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UserStatus {
    /// Can sign in
    Active,
    /// Disabled
    Inactive,
}

/// One user in the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct User {
    /// Row id
    pub id: u32,
    /// Display name
    pub name: &'static str,
    /// Email address
    pub email: &'static str,
    /// Role name
    pub role: &'static str,
    /// Account state
    pub status: UserStatus,
    /// Avatar URL
    pub avatar: &'static str,
}

/// The user directory
pub fn users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Alice Johnson",
            email: "alice@example.com",
            role: "Admin",
            status: UserStatus::Active,
            avatar: "https://i.pravatar.cc/150?u=1",
        },
        User {
            id: 2,
            name: "Bob Smith",
            email: "bob@example.com",
            role: "Editor",
            status: UserStatus::Active,
            avatar: "https://i.pravatar.cc/150?u=2",
        },
        User {
            id: 3,
            name: "Charlie Brown",
            email: "charlie@example.com",
            role: "Viewer",
            status: UserStatus::Inactive,
            avatar: "https://i.pravatar.cc/150?u=3",
        },
        User {
            id: 4,
            name: "David Lee",
            email: "david@example.com",
            role: "Editor",
            status: UserStatus::Active,
            avatar: "https://i.pravatar.cc/150?u=4",
        },
        User {
            id: 5,
            name: "Eva Green",
            email: "eva@example.com",
            role: "Viewer",
            status: UserStatus::Active,
            avatar: "https://i.pravatar.cc/150?u=5",
        },
    ]
}

/// A role and its grants
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Role {
    /// Row id
    pub id: u32,
    /// Role name
    pub name: &'static str,
    /// Users holding this role
    pub users: u32,
    /// Permission labels
    pub permissions: Vec<&'static str>,
}

/// All roles
pub fn roles() -> Vec<Role> {
    vec![
        Role { id: 1, name: "Admin", users: 3, permissions: vec!["All Access"] },
        Role {
            id: 2,
            name: "Editor",
            users: 12,
            permissions: vec!["Create Content", "Edit Content", "Publish Content"],
        },
        Role { id: 3, name: "Viewer", users: 45, permissions: vec!["View Content"] },
        Role {
            id: 4,
            name: "Billing",
            users: 2,
            permissions: vec!["Manage Billing", "View Invoices"],
        },
    ]
}

/// One entry in the activity log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    /// Row id
    pub id: u32,
    /// Acting user
    pub user: &'static str,
    /// What happened
    pub action: &'static str,
    /// Relative time label
    pub time: &'static str,
    /// Icon identifier
    pub icon: &'static str,
}

/// Recent audit-log entries
pub fn activity_log() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            id: 1,
            user: "Alice Johnson",
            action: "Created new project",
            time: "2 hours ago",
            icon: "heroicons:plus-circle",
        },
        ActivityEntry {
            id: 2,
            user: "Bob Smith",
            action: "Edited homepage",
            time: "3 hours ago",
            icon: "heroicons:pencil-square",
        },
        ActivityEntry {
            id: 3,
            user: "Charlie Brown",
            action: "Log in",
            time: "5 hours ago",
            icon: "heroicons:arrow-right-on-rectangle",
        },
        ActivityEntry {
            id: 4,
            user: "David Lee",
            action: "Deleted post",
            time: "1 day ago",
            icon: "heroicons:trash",
        },
        ActivityEntry {
            id: 5,
            user: "Alice Johnson",
            action: "Updated settings",
            time: "2 days ago",
            icon: "heroicons:cog-6-tooth",
        },
    ]
}

/// One month of user growth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPoint {
    /// Month label
    pub month: &'static str,
    /// Users gained this month
    pub new_users: u32,
    /// Cumulative user count
    pub total_users: u32,
}

/// Monthly signup growth
pub fn growth_series() -> Vec<GrowthPoint> {
    vec![
        GrowthPoint { month: "Jun", new_users: 320, total_users: 1280 },
        GrowthPoint { month: "Jul", new_users: 410, total_users: 1690 },
        GrowthPoint { month: "Aug", new_users: 520, total_users: 2210 },
        GrowthPoint { month: "Sep", new_users: 480, total_users: 2690 },
        GrowthPoint { month: "Oct", new_users: 560, total_users: 3250 },
    ]
}

/// Users in a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GeoPoint {
    /// Region label
    pub region: &'static str,
    /// Users in the region
    pub users: u32,
}

/// User distribution by region
pub fn geo_distribution() -> Vec<GeoPoint> {
    vec![
        GeoPoint { region: "US", users: 980 },
        GeoPoint { region: "EU", users: 620 },
        GeoPoint { region: "APAC", users: 420 },
        GeoPoint { region: "Other", users: 230 },
    ]
}

/// Actions performed on a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityPoint {
    /// ISO date label
    pub date: &'static str,
    /// Actions performed
    pub actions: u32,
}

/// Daily activity volume
pub fn activity_over_time() -> Vec<ActivityPoint> {
    vec![
        ActivityPoint { date: "2025-10-01", actions: 120 },
        ActivityPoint { date: "2025-10-02", actions: 150 },
        ActivityPoint { date: "2025-10-03", actions: 98 },
        ActivityPoint { date: "2025-10-04", actions: 176 },
        ActivityPoint { date: "2025-10-05", actions: 189 },
    ]
}

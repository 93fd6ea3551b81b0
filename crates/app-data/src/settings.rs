//! Settings page datasets

use serde::Serialize;

/// Profile settings form values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileSettings {
    /// Display name
    pub name: &'static str,
    /// Email address
    pub email: &'static str,
    /// Short bio
    pub bio: &'static str,
    /// Avatar URL
    pub avatar: &'static str,
}

/// Profile settings
pub fn profile() -> ProfileSettings {
    ProfileSettings {
        name: "Jun Z",
        email: "junz@example.com",
        bio: "Full Stack Developer",
        avatar: "https://i.pravatar.cc/150?u=junz",
    }
}

/// Organization settings form values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrganizationSettings {
    /// Organization name
    pub name: &'static str,
    /// Primary domain
    pub domain: &'static str,
    /// Member count
    pub members: u32,
    /// Logo URL
    pub logo: &'static str,
}

/// Organization settings
pub fn organization() -> OrganizationSettings {
    OrganizationSettings {
        name: "Acme Corp",
        domain: "acme.com",
        members: 15,
        logo: "https://via.placeholder.com/150",
    }
}

/// Per-channel notification toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NotificationChannels {
    /// Email notifications
    pub email: bool,
    /// Push notifications
    pub push: bool,
    /// Desktop notifications
    pub desktop: bool,
}

/// General preference form values
///
/// The theme entries here are display defaults for the form; the live values
/// come from the theming engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preferences {
    /// Color scheme label
    pub theme: &'static str,
    /// Interface language
    pub language: &'static str,
    /// Notification toggles
    pub notifications: NotificationChannels,
}

/// General preferences
pub fn preferences() -> Preferences {
    Preferences {
        theme: "System",
        language: "English",
        notifications: NotificationChannels { email: true, push: false, desktop: true },
    }
}

/// Security settings summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    /// Whether multi-factor auth is enabled
    pub mfa_enabled: bool,
    /// Last sign-in, formatted
    pub last_login: &'static str,
    /// Concurrent session count
    pub active_sessions: u32,
}

/// Security settings
pub fn security() -> SecuritySettings {
    SecuritySettings {
        mfa_enabled: true,
        last_login: "2025-10-27 12:30:00",
        active_sessions: 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_has_contact_details() {
        let profile = profile();
        assert!(profile.email.contains('@'));
        assert!(!profile.name.is_empty());
    }

    #[test]
    fn test_preferences_serialize() {
        let json = serde_json::to_string(&preferences()).unwrap();
        assert!(json.contains("\"email\":true"));
        assert!(json.contains("\"push\":false"));
    }

    #[test]
    fn test_security_defaults() {
        let security = security();
        assert!(security.mfa_enabled);
        assert_eq!(security.active_sessions, 2);
    }
}

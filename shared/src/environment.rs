//! Host environment description
//!
//! The host reports which surface is running the widget (through the
//! Teams SDK when one is present) and whether the bundle is served from a
//! local development origin. The pair selects a fixed label.

use serde::{Deserialize, Serialize};

pub const APP_LOCAL_ENVIRONMENT_SHAREPOINT: &str =
    "The app is running on your local environment as SharePoint web part";
pub const APP_LOCAL_ENVIRONMENT_TEAMS: &str =
    "The app is running on your local environment as Microsoft Teams app";
pub const APP_LOCAL_ENVIRONMENT_OFFICE: &str =
    "The app is running on your local environment in office.com";
pub const APP_LOCAL_ENVIRONMENT_OUTLOOK: &str =
    "The app is running on your local environment in Outlook";
pub const APP_SHAREPOINT_ENVIRONMENT: &str = "The app is running on SharePoint page";
pub const APP_TEAMS_TAB_ENVIRONMENT: &str = "The app is running in Microsoft Teams";
pub const APP_OFFICE_ENVIRONMENT: &str = "The app is running in office.com";
pub const APP_OUTLOOK_ENVIRONMENT: &str = "The app is running in Outlook";
pub const UNKNOWN_ENVIRONMENT: &str = "The app is running in an unknown environment";

/// What the host tells us about where the widget runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentDescriptor {
    /// Host name reported by the Teams SDK; `None` when the SDK is absent
    #[serde(default)]
    pub host: Option<String>,

    /// Served from a local development origin
    #[serde(default)]
    pub is_local: bool,
}

impl EnvironmentDescriptor {
    pub fn new(host: Option<&str>, is_local: bool) -> Self {
        Self {
            host: host.map(str::to_string),
            is_local,
        }
    }

    pub fn surface(&self) -> HostSurface {
        HostSurface::from_host(self.host.as_deref())
    }
}

/// Host surfaces with a dedicated label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSurface {
    SharePoint,
    Office,
    Outlook,
    Teams,
    Unknown,
}

impl HostSurface {
    pub fn from_host(host: Option<&str>) -> Self {
        match host {
            None => HostSurface::SharePoint,
            Some("Office") => HostSurface::Office,
            Some("Outlook") => HostSurface::Outlook,
            Some("Teams") | Some("TeamsModern") => HostSurface::Teams,
            Some(_) => HostSurface::Unknown,
        }
    }

    /// Label for this surface, `(local, hosted)`
    fn labels(&self) -> (&'static str, &'static str) {
        match self {
            HostSurface::SharePoint => {
                (APP_LOCAL_ENVIRONMENT_SHAREPOINT, APP_SHAREPOINT_ENVIRONMENT)
            }
            HostSurface::Office => (APP_LOCAL_ENVIRONMENT_OFFICE, APP_OFFICE_ENVIRONMENT),
            HostSurface::Outlook => (APP_LOCAL_ENVIRONMENT_OUTLOOK, APP_OUTLOOK_ENVIRONMENT),
            HostSurface::Teams => (APP_LOCAL_ENVIRONMENT_TEAMS, APP_TEAMS_TAB_ENVIRONMENT),
            HostSurface::Unknown => (UNKNOWN_ENVIRONMENT, UNKNOWN_ENVIRONMENT),
        }
    }
}

/// Human-readable label for the widget's environment
pub fn describe_environment(descriptor: &EnvironmentDescriptor) -> &'static str {
    let (local, hosted) = descriptor.surface().labels();
    if descriptor.is_local {
        local
    } else {
        hosted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_teams() {
        let env = EnvironmentDescriptor::new(Some("Teams"), true);
        assert_eq!(describe_environment(&env), APP_LOCAL_ENVIRONMENT_TEAMS);
    }

    #[test]
    fn test_unknown_host() {
        for is_local in [true, false] {
            let env = EnvironmentDescriptor::new(Some("UnknownHost"), is_local);
            assert_eq!(describe_environment(&env), UNKNOWN_ENVIRONMENT);
        }
    }

    #[test]
    fn test_label_table() {
        let cases = [
            (None, false, APP_SHAREPOINT_ENVIRONMENT),
            (None, true, APP_LOCAL_ENVIRONMENT_SHAREPOINT),
            (Some("Office"), false, APP_OFFICE_ENVIRONMENT),
            (Some("Office"), true, APP_LOCAL_ENVIRONMENT_OFFICE),
            (Some("Outlook"), false, APP_OUTLOOK_ENVIRONMENT),
            (Some("Outlook"), true, APP_LOCAL_ENVIRONMENT_OUTLOOK),
            (Some("TeamsModern"), false, APP_TEAMS_TAB_ENVIRONMENT),
            (Some("teams"), false, UNKNOWN_ENVIRONMENT),
        ];

        for (host, is_local, expected) in cases {
            let env = EnvironmentDescriptor::new(host, is_local);
            assert_eq!(describe_environment(&env), expected, "{host:?} local={is_local}");
        }
    }

    #[test]
    fn test_descriptor_from_json() {
        let env: EnvironmentDescriptor =
            serde_json::from_str(r#"{"host": "Outlook", "isLocal": true}"#).unwrap();
        assert_eq!(env.surface(), HostSurface::Outlook);
        assert!(env.is_local);

        let empty: EnvironmentDescriptor = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, EnvironmentDescriptor::default());
    }
}

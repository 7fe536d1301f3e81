//! Role-based navigation and route access for the placement dashboards.
//!
//! Static lookup tables only; authentication happens upstream.

pub mod handlers;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Faculty,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role '{0}' (expected student, faculty or admin)")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "faculty" => Ok(Role::Faculty),
            "admin" => Ok(Role::Admin),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

const fn nav(label: &'static str, path: &'static str) -> NavItem {
    NavItem { label, path }
}

const STUDENT_NAV: &[NavItem] = &[
    nav("Dashboard", "/student/dashboard"),
    nav("Resume Builder", "/student/resume"),
    nav("ATS Checker", "/student/ats"),
    nav("Coding Practice", "/student/coding"),
    nav("Mock Interviews", "/student/mock-interviews"),
    nav("Jobs", "/student/jobs"),
    nav("Certificates", "/student/certificates"),
    nav("Attendance", "/student/attendance"),
];

const FACULTY_NAV: &[NavItem] = &[
    nav("Dashboard", "/faculty/dashboard"),
    nav("Students", "/faculty/students"),
    nav("Certificate Reviews", "/faculty/certificates"),
    nav("Attendance", "/faculty/attendance"),
    nav("Analytics", "/faculty/analytics"),
];

const ADMIN_NAV: &[NavItem] = &[
    nav("Dashboard", "/admin/dashboard"),
    nav("Users", "/admin/users"),
    nav("Bulk Upload", "/admin/bulk-upload"),
    nav("Jobs", "/admin/jobs"),
    nav("Analytics", "/admin/analytics"),
    nav("Settings", "/admin/settings"),
];

/// Reachable by every signed-in role.
const PUBLIC_PATHS: &[&str] = &["/", "/login", "/profile"];

const ROLE_SUBTREES: &[(Role, &str)] = &[
    (Role::Student, "/student"),
    (Role::Faculty, "/faculty"),
    (Role::Admin, "/admin"),
];

pub fn navigation_for(role: Role) -> &'static [NavItem] {
    match role {
        Role::Student => STUDENT_NAV,
        Role::Faculty => FACULTY_NAV,
        Role::Admin => ADMIN_NAV,
    }
}

/// Landing page after login.
pub fn dashboard_path(role: Role) -> &'static str {
    navigation_for(role)[0].path
}

/// Whether `role` may open `path`. Admins reach every role's subtree.
pub fn can_access(role: Role, path: &str) -> bool {
    let path = normalize_path(path);
    if PUBLIC_PATHS.contains(&path) {
        return true;
    }

    ROLE_SUBTREES
        .iter()
        .filter(|(owner, _)| *owner == role || role == Role::Admin)
        .any(|(_, prefix)| in_subtree(path, prefix))
}

fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

fn in_subtree(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!("student".parse::<Role>(), Ok(Role::Student));
        assert_eq!(" Faculty ".parse::<Role>(), Ok(Role::Faculty));
        assert_eq!("ADMIN".parse::<Role>(), Ok(Role::Admin));
        assert!("recruiter".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Faculty).unwrap(), "\"faculty\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_dashboards() {
        assert_eq!(dashboard_path(Role::Student), "/student/dashboard");
        assert_eq!(dashboard_path(Role::Faculty), "/faculty/dashboard");
        assert_eq!(dashboard_path(Role::Admin), "/admin/dashboard");
    }

    #[test]
    fn test_every_nav_item_is_accessible_to_its_role() {
        for role in [Role::Student, Role::Faculty, Role::Admin] {
            for item in navigation_for(role) {
                assert!(can_access(role, item.path), "{role} -> {}", item.path);
            }
        }
    }

    #[test]
    fn test_students_cannot_reach_other_subtrees() {
        assert!(!can_access(Role::Student, "/admin/users"));
        assert!(!can_access(Role::Student, "/faculty/certificates"));
        assert!(!can_access(Role::Faculty, "/admin/bulk-upload"));
    }

    #[test]
    fn test_admin_reaches_everything() {
        assert!(can_access(Role::Admin, "/student/ats"));
        assert!(can_access(Role::Admin, "/faculty/analytics"));
    }

    #[test]
    fn test_public_paths_and_normalisation() {
        assert!(can_access(Role::Student, "/login"));
        assert!(can_access(Role::Faculty, "/profile/"));
        assert!(can_access(Role::Student, "/student/jobs?page=2"));
        assert!(!can_access(Role::Student, "/studentship"));
        assert!(!can_access(Role::Student, "/unknown"));
    }
}

//! Route access table, navbar selection and post-login landing pages.
//!
//! The router layout evaluates [`evaluate`] once per navigation. Pages
//! rendered behind it do not check roles again.

use shared_types::Role;

use crate::session::Session;

pub const LOGIN_PATH: &str = "/login";

/// Paths rendered without any navbar.
pub const HIDE_NAVBAR_PATHS: &[&str] = &[LOGIN_PATH];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone, signed in or not.
    Public,
    /// Any stored session.
    Authenticated,
    /// A session carrying exactly this role.
    Only(Role),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarVariant {
    Admin,
    Institution,
    Public,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
}

/// Path patterns (with `:param` segments) and who may open them.
pub const ROUTE_ACCESS: &[(&str, Access)] = &[
    ("/", Access::Public),
    (LOGIN_PATH, Access::Public),
    ("/statistics", Access::Public),
    ("/submit-report", Access::Public),
    ("/dashboard", Access::Authenticated),
    ("/reports", Access::Authenticated),
    ("/cases/:caseId", Access::Authenticated),
    ("/admin-welcome", Access::Only(Role::Admin)),
    ("/admin/cases", Access::Only(Role::Admin)),
    ("/admin/cases/create", Access::Only(Role::Admin)),
    ("/admin/cases/:caseId/edit", Access::Only(Role::Admin)),
    ("/admin-reports", Access::Only(Role::Admin)),
    ("/admin/case-types", Access::Only(Role::Admin)),
    ("/institution-welcome", Access::Only(Role::Institution)),
    ("/institution-dashboard", Access::Only(Role::Institution)),
    ("/cases", Access::Only(Role::Institution)),
    ("/institution-create-report/:caseId", Access::Only(Role::Institution)),
    ("/institution-create-case", Access::Only(Role::Institution)),
    ("/institution-reports", Access::Only(Role::Institution)),
    ("/institution-profile", Access::Only(Role::Institution)),
    ("/investigator-welcome", Access::Only(Role::Investigator)),
];

/// Drop any query string or fragment and a trailing slash.
fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// True when `path` fits `pattern`; `:name` segments match any non-empty segment.
pub fn match_pattern(pattern: &str, path: &str) -> bool {
    let path = normalize_path(path);
    let mut expected = pattern.split('/');
    let mut actual = path.split('/');
    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return true,
            (Some(p), Some(a)) => {
                let fits = if p.starts_with(':') { !a.is_empty() } else { p == a };
                if !fits {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

/// Requirement for `path`, or `None` for paths outside the table.
pub fn access_for(path: &str) -> Option<Access> {
    ROUTE_ACCESS
        .iter()
        .find(|(pattern, _)| match_pattern(pattern, path))
        .map(|(_, access)| *access)
}

/// Decide whether `session` may open `path`. Unknown paths are allowed
/// through so the not-found page can render.
pub fn evaluate(path: &str, session: Option<&Session>) -> GuardDecision {
    let allowed = match access_for(path) {
        None | Some(Access::Public) => true,
        Some(Access::Authenticated) => session.is_some(),
        Some(Access::Only(role)) => session.is_some_and(|s| s.role == role),
    };
    if allowed {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectToLogin
    }
}

/// Which navbar to draw, or `None` on paths that hide it.
pub fn navbar_for(path: &str, role: Role) -> Option<NavbarVariant> {
    let path = normalize_path(path);
    if HIDE_NAVBAR_PATHS.contains(&path) {
        return None;
    }
    Some(match role {
        Role::Admin => NavbarVariant::Admin,
        Role::Institution => NavbarVariant::Institution,
        Role::Investigator | Role::Public => NavbarVariant::Public,
    })
}

/// First page after a successful login.
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin-welcome",
        Role::Institution => "/institution-welcome",
        Role::Investigator => "/investigator-welcome",
        Role::Public => LOGIN_PATH,
    }
}

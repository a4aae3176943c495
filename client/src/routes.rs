//! Route table: which paths exist and who may see them.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const HOME_PATH: &str = "/";
pub const PROFILE_PATH: &str = "/profile";
pub const QUESTIONNAIRE_PATH: &str = "/questionnaire";
pub const MENOCYCLE_PATH: &str = "/menocycle";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Signed-out visitors only; signed-in users are sent home.
    Public,
    /// Signed-in users only.
    Protected,
    /// Anything not in the table.
    CatchAll,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Register,
    Home,
    Profile,
    Unknown,
}

impl AppRoute {
    /// Exact match on the path. A single trailing slash is ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = if path.len() > 1 { path.strip_suffix('/').unwrap_or(path) } else { path };
        match path {
            LOGIN_PATH => Self::Login,
            REGISTER_PATH => Self::Register,
            HOME_PATH | "" => Self::Home,
            PROFILE_PATH => Self::Profile,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn path(self) -> Option<&'static str> {
        match self {
            Self::Login => Some(LOGIN_PATH),
            Self::Register => Some(REGISTER_PATH),
            Self::Home => Some(HOME_PATH),
            Self::Profile => Some(PROFILE_PATH),
            Self::Unknown => None,
        }
    }

    #[must_use]
    pub fn access(self) -> RouteAccess {
        match self {
            Self::Login | Self::Register => RouteAccess::Public,
            Self::Home | Self::Profile => RouteAccess::Protected,
            Self::Unknown => RouteAccess::CatchAll,
        }
    }
}

/// One of the two fixed access levels of the admin surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Editor,
}

impl Role {
    /// Convert enum → stored string
    pub fn to_store_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Editor => "EDITOR",
        }
    }

    /// Convert stored string → enum
    pub fn from_store_str(s: &str) -> Option<Self> {
        match s {
            "ADMIN" => Some(Role::Admin),
            "EDITOR" => Some(Role::Editor),
            _ => None,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Role::Admin => "administrator",
            Role::Editor => "editor",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// The persisted authenticated/role state for the current data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    pub role: Option<Role>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            role: None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.authenticated && self.role.is_some_and(|r| r.is_admin())
    }
}

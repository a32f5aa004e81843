//! Session identity and persistence

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Branch sentinel with elevated, read-only visibility (case-insensitive).
pub const HEAD_OFFICE_BRANCH: &str = "head office";

/// Identity created on successful login, held for the app lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Login email.
    pub email: String,
    /// Display name.
    #[serde(rename = "nama")]
    pub name: String,
    /// Job role (e.g. BRANCH BUILDING SUPPORT).
    #[serde(rename = "jabatan", default)]
    pub role: String,
    /// Owning branch; stamped onto every document this session saves.
    #[serde(rename = "cabang")]
    pub branch: String,
}

impl Session {
    /// Whether this session belongs to the head-office branch.
    #[must_use]
    pub fn is_head_office(&self) -> bool {
        self.branch.trim().eq_ignore_ascii_case(HEAD_OFFICE_BRANCH)
    }

    /// Whether this session has the administrative role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.trim().eq_ignore_ascii_case("admin")
    }

    /// Admin and head office see every branch's documents.
    #[must_use]
    pub fn sees_all_branches(&self) -> bool {
        self.is_admin() || self.is_head_office()
    }

    /// Head office gets a read-only projection: no create, no edit.
    ///
    /// Display gating only; the server enforces authorization on its own.
    #[must_use]
    pub fn can_edit(&self) -> bool {
        !self.is_head_office()
    }
}

/// Storage for the session record across app restarts.
///
/// Absence of a stored session is equivalent to logged-out.
pub trait SessionPersistence: Clone + Send + Sync + 'static {
    fn load(&self) -> Result<Option<Session>>;
    fn save(&self, session: &Session) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

//! Session identifier carried by every session event.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque session identifier.
///
/// Generated ids are UUID v4 rendered as 32 lowercase hex digits with no
/// dashes. Ids supplied by callers are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh, dash-free identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    /// Get the underlying identifier string.
    pub fn id(&self) -> &str {
        &self.0
    }

    /// Consume the id, returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_dash_free_hex() {
        let id = SessionId::generate();
        assert_eq!(id.id().len(), 32);
        assert!(
            id.id()
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        );
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(SessionId::generate(), SessionId::default());
    }

    #[test]
    fn supplied_ids_are_kept_verbatim() {
        let id = SessionId::from("Sess-1 ");
        assert_eq!(id.to_string(), "Sess-1 ");
        assert_eq!(id.into_inner(), "Sess-1 ");
    }
}

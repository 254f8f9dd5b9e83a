//! Identifiers for action slots.

use std::sync::Arc;

use uuid::Uuid;

/// Token naming a logical action slot.
///
/// Actions that share an identifier are mutually exclusive: while one of
/// them runs, the others show as loading. Cloning is cheap.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ActionId(Arc<str>);

impl ActionId {
    /// Create an identifier from a name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Create an identifier no other action shares.
    pub fn unique() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ActionId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ActionId {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

use serde::{Deserialize, Serialize};

/// Singleton station identity, created during first-time setup.
/// Re-registration replaces the row; there is never more than one.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SchoolInfo {
    pub id: String,
    pub name: String,
}

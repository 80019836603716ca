use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub dept: String,
    pub is_approved: bool,
}

/// One record of a roster CSV. Headers must match the staff columns
/// (`id,name,dept[,is_approved]`); a missing approval column defaults
/// to pending.
#[derive(Debug, Clone, Deserialize)]
pub struct StaffRow {
    pub id: String,
    pub name: String,
    pub dept: String,
    #[serde(default, deserialize_with = "flag_from_csv")]
    pub is_approved: bool,
}

/// The staff table stores the flag as 0/1; accept that and the spelled-out
/// forms, treating an empty cell as pending.
fn flag_from_csv<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim() {
        "" | "0" | "false" => Ok(false),
        "1" | "true" => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "invalid is_approved value '{other}'"
        ))),
    }
}

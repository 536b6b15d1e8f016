use serde::{Deserialize, Serialize};

/// An admin-tunable key/value pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    pub id: i64,
    pub key: String,
    pub value: String,
    pub updated_at: String,
}

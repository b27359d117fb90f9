use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub time: DateTime<Utc>,
    pub name: String, // Derived from `ip`
    pub content: String,
    pub ip: String,
}

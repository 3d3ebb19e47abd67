//! Frontend Models
//!
//! Data structures matching the server's JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Signup code row (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupCode {
    pub code: String,
    pub uses: i64,
    pub created_at: DateTime<Utc>,
}

impl SignupCode {
    /// Date shown in the table
    pub fn created_label(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }
}

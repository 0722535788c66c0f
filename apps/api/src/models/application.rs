use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Pipeline stage of an application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    #[default]
    Interested,
    Applied,
    Interviewing,
    Offer,
    Rejected,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Interested,
        Stage::Applied,
        Stage::Interviewing,
        Stage::Offer,
        Stage::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Interested => "Interested",
            Stage::Applied => "Applied",
            Stage::Interviewing => "Interviewing",
            Stage::Offer => "Offer",
            Stage::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStage(pub String);

impl fmt::Display for InvalidStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let allowed: Vec<&str> = Stage::ALL.iter().map(Stage::as_str).collect();
        write!(
            f,
            "Invalid stage '{}'. Must be one of: {}",
            self.0,
            allowed.join(", ")
        )
    }
}

impl FromStr for Stage {
    type Err = InvalidStage;

    /// Exact, case-sensitive match on the stage name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| InvalidStage(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationRow {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub url: Option<String>,
    pub stage: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

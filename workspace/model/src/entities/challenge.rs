use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeStatus {
    Active,
    Upcoming,
    Completed,
}

impl ChallengeStatus {
    pub const ALL: [ChallengeStatus; 3] = [
        ChallengeStatus::Active,
        ChallengeStatus::Upcoming,
        ChallengeStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChallengeStatus::Active => "Active",
            ChallengeStatus::Upcoming => "Upcoming",
            ChallengeStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ChallengeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A time-boxed community cooking competition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub status: ChallengeStatus,
    pub start_date: String,
    pub end_date: String,
    pub participants: u32,
    /// Percent of the challenge window elapsed, 0..=100.
    pub progress: u8,
    pub prize: String,
    pub entries: u32,
    pub likes: u32,
    pub comments: u32,
}

impl Challenge {
    pub fn entries_label(&self) -> String {
        if self.entries == 1 {
            "1 entry".to_string()
        } else {
            format!("{} entries", self.entries)
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::author::Author;
use crate::error::ModelError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownValue {
                field: "difficulty",
                value: s.to_string(),
            })
    }
}

/// Durations offered when creating a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlanDuration {
    OneWeek,
    TwoWeeks,
    ThreeWeeks,
    FourWeeks,
    Custom,
}

impl PlanDuration {
    pub const ALL: [PlanDuration; 5] = [
        PlanDuration::OneWeek,
        PlanDuration::TwoWeeks,
        PlanDuration::ThreeWeeks,
        PlanDuration::FourWeeks,
        PlanDuration::Custom,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            PlanDuration::OneWeek => "1-week",
            PlanDuration::TwoWeeks => "2-weeks",
            PlanDuration::ThreeWeeks => "3-weeks",
            PlanDuration::FourWeeks => "4-weeks",
            PlanDuration::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlanDuration::OneWeek => "1 week",
            PlanDuration::TwoWeeks => "2 weeks",
            PlanDuration::ThreeWeeks => "3 weeks",
            PlanDuration::FourWeeks => "4 weeks",
            PlanDuration::Custom => "Custom",
        }
    }
}

impl FromStr for PlanDuration {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.value() == s.trim())
            .ok_or_else(|| ModelError::UnknownValue {
                field: "duration",
                value: s.to_string(),
            })
    }
}

/// A structured multi-step skill-building guide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LearningPlan {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub author: Author,
    /// Display text, e.g. "4 weeks".
    pub duration: String,
    pub difficulty: Difficulty,
    pub participants: u32,
    pub likes: u32,
    pub comments: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("Beginner".parse::<Difficulty>().unwrap(), Difficulty::Beginner);
        assert_eq!("advanced".parse::<Difficulty>().unwrap(), Difficulty::Advanced);
        assert!("Expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_duration_parse() {
        assert_eq!("2-weeks".parse::<PlanDuration>().unwrap(), PlanDuration::TwoWeeks);
        assert_eq!("custom".parse::<PlanDuration>().unwrap(), PlanDuration::Custom);
        assert!("".parse::<PlanDuration>().is_err());
    }
}

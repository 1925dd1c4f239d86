use std::fmt;

use model::entities::prelude::{Difficulty, LearningPlan};

/// Tabs of the learning plans page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyTab {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyTab {
    pub const ALL: [DifficultyTab; 4] = [
        DifficultyTab::All,
        DifficultyTab::Only(Difficulty::Beginner),
        DifficultyTab::Only(Difficulty::Intermediate),
        DifficultyTab::Only(Difficulty::Advanced),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DifficultyTab::All => "All Plans",
            DifficultyTab::Only(d) => d.label(),
        }
    }

    pub fn matches(&self, plan: &LearningPlan) -> bool {
        match self {
            DifficultyTab::All => true,
            DifficultyTab::Only(d) => plan.difficulty == *d,
        }
    }

    pub fn apply(&self, plans: &[LearningPlan]) -> Vec<LearningPlan> {
        plans.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

impl fmt::Display for DifficultyTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{CookbookStore, MockStore};

    #[test]
    fn test_tabs_filter_by_difficulty() {
        let plans = MockStore::new().learning_plans();
        assert_eq!(DifficultyTab::All.apply(&plans).len(), 3);

        let beginner = DifficultyTab::Only(Difficulty::Beginner).apply(&plans);
        assert_eq!(beginner.len(), 1);
        assert_eq!(beginner[0].title, "Baking Fundamentals");

        assert_eq!(DifficultyTab::Only(Difficulty::Intermediate).apply(&plans).len(), 2);
        assert!(DifficultyTab::Only(Difficulty::Advanced).apply(&plans).is_empty());
    }
}

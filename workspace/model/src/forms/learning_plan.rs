use common::CreateLearningPlanRequest;
use tracing::{debug, instrument};

use super::{is_blank, missing};
use crate::entities::learning_plan::{Difficulty, PlanDuration};
use crate::error::{ModelError, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LearningPlanDraft {
    pub title: String,
    pub description: String,
    pub duration: Option<PlanDuration>,
    pub difficulty: Option<Difficulty>,
    /// Optional cover image URL; blank means none.
    pub image_url: String,
}

impl LearningPlanDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing([
            ("title", !is_blank(&self.title)),
            ("description", !is_blank(&self.description)),
            ("duration", self.duration.is_some()),
            ("difficulty", self.difficulty.is_some()),
        ])
    }

    #[instrument(skip(self), fields(title = %self.title))]
    pub fn submit(&self) -> Result<CreateLearningPlanRequest> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            debug!(?missing, "Learning plan form has blank required fields");
            return Err(ModelError::MissingFields(missing));
        }

        let (Some(duration), Some(difficulty)) = (self.duration, self.difficulty) else {
            return Err(ModelError::MissingFields(vec!["duration", "difficulty"]));
        };

        Ok(CreateLearningPlanRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            duration: duration.value().to_string(),
            difficulty: difficulty.label().to_string(),
            image_url: Some(self.image_url.trim().to_string()).filter(|url| !url.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_requires_all_four_fields() {
        let mut draft = LearningPlanDraft::new();
        assert_eq!(
            draft.submit().unwrap_err(),
            ModelError::MissingFields(vec!["title", "description", "duration", "difficulty"])
        );

        draft.title = "Knife Skills".into();
        draft.description = "Two weeks of chopping".into();
        draft.duration = Some(PlanDuration::TwoWeeks);
        assert_eq!(
            draft.submit().unwrap_err(),
            ModelError::MissingFields(vec!["difficulty"])
        );

        draft.difficulty = Some(Difficulty::Beginner);
        let request = draft.submit().unwrap();
        assert_eq!(request.duration, "2-weeks");
        assert_eq!(request.difficulty, "Beginner");
        assert_eq!(request.image_url, None);
    }

    #[test]
    fn test_image_url_is_trimmed() {
        let draft = LearningPlanDraft {
            title: "t".into(),
            description: "d".into(),
            duration: Some(PlanDuration::Custom),
            difficulty: Some(Difficulty::Advanced),
            image_url: "  https://example.com/a.jpg ".into(),
        };
        assert_eq!(
            draft.submit().unwrap().image_url.as_deref(),
            Some("https://example.com/a.jpg")
        );
    }
}

pub mod learning_plan_card;

pub use learning_plan_card::LearningPlanCard;

pub mod challenge_card;

pub use challenge_card::ChallengeCard;

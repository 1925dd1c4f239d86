use serde::{Deserialize, Serialize};

/// A liked flag and its counter, kept together so they can only move in
/// step: every toggle flips the flag and moves the count by exactly one.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LikeState {
    #[serde(rename = "isLiked")]
    pub liked: bool,
    #[serde(rename = "likes")]
    pub count: u32,
}

/// Which way a toggle went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeChange {
    Liked,
    Unliked,
}

impl LikeChange {
    /// Notification text, e.g. "You liked this challenge".
    pub fn message(&self, subject: &str) -> String {
        match self {
            LikeChange::Liked => format!("You liked this {}", subject),
            LikeChange::Unliked => format!("You unliked this {}", subject),
        }
    }
}

impl LikeState {
    pub fn new(liked: bool, count: u32) -> Self {
        Self { liked, count }
    }

    pub fn toggle(&mut self) -> LikeChange {
        if self.liked {
            self.liked = false;
            self.count = self.count.saturating_sub(1);
            LikeChange::Unliked
        } else {
            self.liked = true;
            self.count += 1;
            LikeChange::Liked
        }
    }

    /// Non-mutating variant for state handles that are replaced wholesale.
    pub fn toggled(mut self) -> (Self, LikeChange) {
        let change = self.toggle();
        (self, change)
    }
}

/// Records that carry a [`LikeState`].
pub trait Likeable {
    fn like_state(&self) -> &LikeState;
    fn like_state_mut(&mut self) -> &mut LikeState;

    fn toggle_like(&mut self) -> LikeChange {
        self.like_state_mut().toggle()
    }
}

impl Likeable for crate::entities::recipe::Recipe {
    fn like_state(&self) -> &LikeState {
        &self.likes
    }

    fn like_state_mut(&mut self) -> &mut LikeState {
        &mut self.likes
    }
}

impl Likeable for crate::entities::comment::Comment {
    fn like_state(&self) -> &LikeState {
        &self.likes
    }

    fn like_state_mut(&mut self) -> &mut LikeState {
        &mut self.likes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_then_unlike_restores_state() {
        for (liked, count) in [(false, 0), (false, 5), (true, 3), (true, 1)] {
            let original = LikeState::new(liked, count);
            let mut state = original;
            state.toggle();
            state.toggle();
            assert_eq!(state, original);
        }
    }

    #[test]
    fn test_toggle_moves_count_by_one() {
        let mut state = LikeState::new(false, 5);
        assert_eq!(state.toggle(), LikeChange::Liked);
        assert_eq!(state, LikeState::new(true, 6));
        assert_eq!(state.toggle(), LikeChange::Unliked);
        assert_eq!(state, LikeState::new(false, 5));
    }

    #[test]
    fn test_toggled_leaves_original_untouched() {
        let state = LikeState::new(true, 10);
        let (next, change) = state.toggled();
        assert_eq!(change, LikeChange::Unliked);
        assert_eq!(next.count, 9);
        assert_eq!(state.count, 10);
    }

    #[test]
    fn test_change_message() {
        assert_eq!(LikeChange::Liked.message("challenge"), "You liked this challenge");
        assert_eq!(
            LikeChange::Unliked.message("learning plan"),
            "You unliked this learning plan"
        );
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(LikeState::new(true, 3)).unwrap();
        assert_eq!(json, serde_json::json!({ "isLiked": true, "likes": 3 }));
    }
}

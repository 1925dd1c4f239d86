use serde::{Deserialize, Serialize};

/// The user shown as the author of a recipe, comment or learning plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
}

impl Author {
    /// Builds an author whose id is the profile slug of `name`.
    pub fn from_name(name: &str) -> Self {
        Self {
            id: profile_slug(name),
            name: name.to_string(),
            avatar: None,
        }
    }

    /// First character of the name, used as the avatar fallback.
    pub fn initial(&self) -> String {
        initial_of(&self.name)
    }
}

/// Maps a display name onto its profile path segment:
/// lower-cased, whitespace runs collapsed to `-`.
pub fn profile_slug(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

pub fn initial_of(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_slug() {
        assert_eq!(profile_slug("Emma Wilson"), "emma-wilson");
        assert_eq!(profile_slug("  Marco   Rossi "), "marco-rossi");
        assert_eq!(profile_slug("Chef"), "chef");
        assert_eq!(profile_slug(""), "");
    }

    #[test]
    fn test_initial() {
        assert_eq!(Author::from_name("Jane Smith").initial(), "J");
        assert_eq!(initial_of(""), "");
    }
}

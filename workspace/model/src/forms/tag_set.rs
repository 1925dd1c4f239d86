use serde::{Deserialize, Serialize};

/// Insertion-ordered set of trimmed, non-blank tags.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tags(tags: impl IntoIterator<Item = String>) -> Self {
        let mut set = Self::new();
        for tag in tags {
            set.add(&tag);
        }
        set
    }

    /// Returns false when the input was blank or already present.
    pub fn add(&mut self, input: &str) -> bool {
        let tag = input.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_string());
        true
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        self.0.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_ignores_blank_or_duplicate() {
        let mut tags = TagSet::new();
        assert!(tags.add("  pasta "));
        assert!(!tags.add("pasta"));
        assert!(!tags.add("   "));
        assert!(tags.add("quick"));
        assert_eq!(tags.to_vec(), vec!["pasta".to_string(), "quick".to_string()]);
    }

    #[test]
    fn test_remove() {
        let mut tags = TagSet::from_tags(vec!["a".into(), "b".into(), "a".into()]);
        assert_eq!(tags.len(), 2);
        assert!(tags.remove("a"));
        assert!(!tags.remove("a"));
        assert_eq!(tags.to_vec(), vec!["b".to_string()]);
    }
}

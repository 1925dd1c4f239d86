use crate::error::{ModelError, Result};

/// Ordered list of free-text entries (ingredients or steps).
///
/// Never empty: it starts with one blank entry and refuses to remove the
/// last one.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryList {
    kind: &'static str,
    entries: Vec<String>,
}

impl EntryList {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            entries: vec![String::new()],
        }
    }

    /// Prefills from existing entries; an empty input still yields one blank row.
    pub fn from_entries(kind: &'static str, entries: Vec<String>) -> Self {
        if entries.is_empty() {
            Self::new(kind)
        } else {
            Self { kind, entries }
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_remove(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn set(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        let kind = self.kind;
        let slot = self
            .entries
            .get_mut(index)
            .ok_or(ModelError::IndexOutOfRange { kind, index })?;
        *slot = value.into();
        Ok(())
    }

    pub fn push_blank(&mut self) {
        self.entries.push(String::new());
    }

    pub fn remove(&mut self, index: usize) -> Result<String> {
        if index >= self.entries.len() {
            return Err(ModelError::IndexOutOfRange {
                kind: self.kind,
                index,
            });
        }
        if !self.can_remove() {
            return Err(ModelError::LastEntry(self.kind));
        }
        Ok(self.entries.remove(index))
    }

    /// Entries with content, in order.
    pub fn filled(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| !super::is_blank(e))
            .cloned()
            .collect()
    }

    pub fn has_filled(&self) -> bool {
        self.entries.iter().any(|e| !super::is_blank(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_one_blank_entry() {
        let list = EntryList::new("ingredient");
        assert_eq!(list.entries(), &[String::new()]);
        assert!(!list.can_remove());
        assert!(!list.has_filled());
    }

    #[test]
    fn test_last_entry_cannot_be_removed() {
        let mut list = EntryList::new("step");
        assert_eq!(list.remove(0), Err(ModelError::LastEntry("step")));
        assert_eq!(list.len(), 1);

        list.push_blank();
        list.set(1, "Boil water").unwrap();
        assert_eq!(list.remove(0).unwrap(), "");
        assert_eq!(list.entries(), &["Boil water".to_string()]);
        assert!(list.remove(0).is_err());
    }

    #[test]
    fn test_out_of_range() {
        let mut list = EntryList::new("ingredient");
        assert_eq!(
            list.set(3, "salt"),
            Err(ModelError::IndexOutOfRange { kind: "ingredient", index: 3 })
        );
        list.push_blank();
        assert!(matches!(list.remove(5), Err(ModelError::IndexOutOfRange { .. })));
    }

    #[test]
    fn test_filled_skips_blank_rows() {
        let mut list = EntryList::from_entries(
            "ingredient",
            vec!["2 eggs".into(), "   ".into(), "".into(), "salt".into()],
        );
        assert_eq!(list.filled(), vec!["2 eggs".to_string(), "salt".to_string()]);
        list.set(0, " ").unwrap();
        list.set(3, "").unwrap();
        assert!(!list.has_filled());
    }

    #[test]
    fn test_from_empty_entries() {
        let list = EntryList::from_entries("step", Vec::new());
        assert_eq!(list.len(), 1);
    }
}

//! The ordered, position-addressable list of elements.
//!
//! Positions are dense (0..len). Each element carries an [`ElementId`] that
//! follows it through shifts, so a display can correlate the same entry
//! across renders. The id counter lives here and never rewinds.

use std::fmt;

/// Opaque identity of an element, independent of its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    pub value: String,
}

/// Ordered list of elements plus the id allocator.
#[derive(Debug, Clone)]
pub struct Sequence {
    elements: Vec<Element>,
    next_id: u64,
}

impl Sequence {
    /// Empty sequence. The first allocated id is 1.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Current values in order (handy for assertions and logging).
    pub fn values(&self) -> Vec<&str> {
        self.elements.iter().map(|e| e.value.as_str()).collect()
    }

    /// Position of the element with `id`, if it is still present.
    pub fn position_of_id(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    /// First (lowest-index) element whose value equals `value` exactly.
    pub fn find(&self, value: &str) -> Option<(usize, &Element)> {
        self.elements
            .iter()
            .enumerate()
            .find(|(_, e)| e.value == value)
    }

    /// Insert at `index` (0..=len), shifting later elements up.
    ///
    /// Returns `None` without touching anything when `index > len`.
    pub fn insert(&mut self, index: usize, value: impl Into<String>) -> Option<ElementId> {
        if index > self.elements.len() {
            return None;
        }
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(
            index,
            Element {
                id,
                value: value.into(),
            },
        );
        Some(id)
    }

    /// Remove and return the element at `index` (0..len).
    pub fn remove(&mut self, index: usize) -> Option<Element> {
        if index >= self.elements.len() {
            return None;
        }
        Some(self.elements.remove(index))
    }

    /// Replace the value at `index` in place. The id is kept.
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> Option<ElementId> {
        let element = self.elements.get_mut(index)?;
        element.value = value.into();
        Some(element.id)
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(seq: &Sequence) -> Vec<u64> {
        seq.iter().map(|e| e.id.get()).collect()
    }

    #[test]
    fn new_is_empty() {
        let seq = Sequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert!(seq.get(0).is_none());
    }

    #[test]
    fn insert_shifts_later_elements() {
        let mut seq = Sequence::new();
        seq.insert(0, "a");
        seq.insert(1, "c");
        seq.insert(1, "b");
        assert_eq!(seq.values(), vec!["a", "b", "c"]);
        assert_eq!(ids(&seq), vec![1, 3, 2]);
    }

    #[test]
    fn insert_at_len_appends() {
        let mut seq = Sequence::new();
        seq.insert(0, "a");
        seq.insert(1, "b");
        assert_eq!(seq.values(), vec!["a", "b"]);
    }

    #[test]
    fn insert_past_len_is_rejected() {
        let mut seq = Sequence::new();
        assert!(seq.insert(1, "a").is_none());
        assert!(seq.is_empty());
        // rejected insert does not burn an id
        assert_eq!(seq.insert(0, "a").map(ElementId::get), Some(1));
    }

    #[test]
    fn remove_keeps_other_ids() {
        let mut seq = Sequence::new();
        seq.insert(0, "a");
        seq.insert(1, "b");
        seq.insert(2, "c");
        let removed = seq.remove(1).unwrap();
        assert_eq!(removed.value, "b");
        assert_eq!(ids(&seq), vec![1, 3]);
        assert!(seq.remove(2).is_none());
    }

    #[test]
    fn ids_are_never_reused() {
        let mut seq = Sequence::new();
        seq.insert(0, "a");
        seq.remove(0);
        let id = seq.insert(0, "b").unwrap();
        assert_eq!(id.get(), 2);
    }

    #[test]
    fn set_keeps_id() {
        let mut seq = Sequence::new();
        let id = seq.insert(0, "a").unwrap();
        assert_eq!(seq.set(0, "z"), Some(id));
        assert_eq!(seq.values(), vec!["z"]);
        assert!(seq.set(1, "y").is_none());
    }

    #[test]
    fn find_returns_first_match() {
        let mut seq = Sequence::new();
        seq.insert(0, "x");
        seq.insert(1, "y");
        seq.insert(2, "x");
        let (index, element) = seq.find("x").unwrap();
        assert_eq!(index, 0);
        assert_eq!(element.id.get(), 1);
        assert!(seq.find("X").is_none());
    }

    #[test]
    fn position_of_id_tracks_shifts() {
        let mut seq = Sequence::new();
        let a = seq.insert(0, "a").unwrap();
        seq.insert(0, "b");
        assert_eq!(seq.position_of_id(a), Some(1));
        seq.remove(1);
        assert_eq!(seq.position_of_id(a), None);
    }
}

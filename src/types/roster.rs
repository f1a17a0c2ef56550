use std::collections::HashSet;

/// An ordered set of resolved nation reference names.
///
/// Insertion order is preserved and later duplicates of an already-present
/// name are dropped. Membership is by name only; the filter and recipient
/// kinds of the tokens a name came from never affect set identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a name unless it is already present. Returns whether the name
    /// was newly added.
    pub fn insert(&mut self, name: String) -> bool {
        if self.seen.contains(&name) {
            return false;
        }
        self.seen.insert(name.clone());
        self.order.push(name);
        true
    }

    /// Keep only the names for which the predicate holds, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.order.retain(|name| {
            let keeping = keep(name);
            if !keeping {
                self.seen.remove(name);
            }
            keeping
        });
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// The names in first-seen order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Consume the roster, yielding the names in first-seen order.
    #[must_use]
    pub fn into_names(self) -> Vec<String> {
        self.order
    }
}

impl Extend<String> for Roster {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

impl FromIterator<String> for Roster {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut roster = Roster::new();
        roster.extend(iter);
        roster
    }
}

impl IntoIterator for Roster {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

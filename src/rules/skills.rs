use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Case-normalized, deduplicated skill tokens.
///
/// Skills are trimmed and lower-cased on insertion; blank entries are ignored. Iteration order
/// is sorted, which keeps explanations stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a skill; returns `false` if it was blank or already present.
    pub fn insert(&mut self, skill: &str) -> bool {
        let normalized = skill.trim().to_lowercase();
        if normalized.is_empty() {
            return false;
        }
        self.0.insert(normalized)
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(&skill.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    /// Jaccard similarity. Two empty sets are identical (`1.0`); one empty set scores `0.0`.
    pub fn jaccard(&self, other: &SkillSet) -> f64 {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => return 1.0,
            (true, false) | (false, true) => return 0.0,
            (false, false) => {}
        }

        let intersection = self.0.intersection(&other.0).count();
        let union = self.0.union(&other.0).count();
        intersection as f64 / union as f64
    }

    /// Skills present in both sets, sorted.
    pub fn matching(&self, other: &SkillSet) -> Vec<String> {
        self.0.intersection(&other.0).cloned().collect()
    }

    /// Skills in `self` that `other` lacks, sorted.
    pub fn missing_from(&self, other: &SkillSet) -> Vec<String> {
        self.0.difference(&other.0).cloned().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for skill in iter {
            set.insert(skill.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for SkillSet {
    fn from(skills: Vec<String>) -> Self {
        skills.into_iter().collect()
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(skills: SkillSet) -> Self {
        skills.0.into_iter().collect()
    }
}

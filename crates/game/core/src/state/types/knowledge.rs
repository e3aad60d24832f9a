//! Append-only knowledge archive carried across loops.

use std::fmt;

/// Identifier allocated by [`KnowledgeArchive`]; never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnowledgeId(pub u32);

impl fmt::Display for KnowledgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "knowledge-{}", self.0)
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum KnowledgeCategory {
    EnemyPattern,
    NpcMemory,
    ItemLocation,
    Event,
}

/// A single discovery. Immutable once recorded.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knowledge {
    pub id: KnowledgeId,
    pub description: String,
    pub loop_discovered: u32,
    pub category: KnowledgeCategory,
}

/// Ordered archive of discoveries. Insertion order is discovery order.
///
/// The archive only grows: there is no API to remove or edit an entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnowledgeArchive {
    entries: Vec<Knowledge>,
    next_id: u32,
}

impl KnowledgeArchive {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a new entry and returns its id.
    pub fn record(
        &mut self,
        description: impl Into<String>,
        loop_discovered: u32,
        category: KnowledgeCategory,
    ) -> KnowledgeId {
        let id = KnowledgeId(self.next_id);
        self.next_id += 1;
        self.entries.push(Knowledge {
            id,
            description: description.into(),
            loop_discovered,
            category,
        });
        id
    }

    pub fn entries(&self) -> &[Knowledge] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Knowledge> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: KnowledgeId) -> Option<&Knowledge> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn by_category(&self, category: KnowledgeCategory) -> impl Iterator<Item = &Knowledge> {
        self.entries
            .iter()
            .filter(move |entry| entry.category == category)
    }
}

impl Default for KnowledgeArchive {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a KnowledgeArchive {
    type Item = &'a Knowledge;
    type IntoIter = std::slice::Iter<'a, Knowledge>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_order_is_preserved() {
        let mut archive = KnowledgeArchive::new();
        let first = archive.record("first", 1, KnowledgeCategory::EnemyPattern);
        let second = archive.record("second", 2, KnowledgeCategory::Event);

        assert_eq!(first.to_string(), "knowledge-1");
        assert_eq!(second, KnowledgeId(2));
        let descriptions: Vec<_> = archive.iter().map(|k| k.description.as_str()).collect();
        assert_eq!(descriptions, ["first", "second"]);
        assert_eq!(archive.by_category(KnowledgeCategory::Event).count(), 1);
    }

    #[test]
    fn categories_use_wire_names() {
        assert_eq!(KnowledgeCategory::EnemyPattern.to_string(), "enemy_pattern");
        assert_eq!(
            "item_location".parse::<KnowledgeCategory>().unwrap(),
            KnowledgeCategory::ItemLocation
        );
    }
}

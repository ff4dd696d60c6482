//! Ordered per-category moderation scores.

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

/// Per-category moderation scores, keyed by category name.
///
/// Categories keep first-seen order (the order the classifier reported them)
/// so downstream ranking is deterministic when two categories tie.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryScores(Vec<(String, f64)>);

impl CategoryScores {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The score for a category, if present.
    pub fn get(&self, category: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, score)| *score)
    }

    /// Iterates categories in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, score)| (name.as_str(), *score))
    }

    /// Adds another score set into this one.
    ///
    /// Existing categories are summed, new categories appended, so the
    /// first-seen order is preserved across merges.
    pub fn merge(&mut self, other: &CategoryScores) {
        for (name, score) in other.iter() {
            match self.0.iter_mut().find(|(existing, _)| existing == name) {
                Some((_, total)) => *total += score,
                None => self.0.push((name.to_string(), score)),
            }
        }
    }

    /// Elementwise sum over any number of score sets.
    ///
    /// Missing categories count as zero, so the result covers the union of
    /// all category names. Summation is commutative and associative up to
    /// floating-point rounding; category order is first-seen.
    pub fn sum<'a, I>(sets: I) -> CategoryScores
    where
        I: IntoIterator<Item = &'a CategoryScores>,
    {
        let mut total = CategoryScores::new();
        for set in sets {
            total.merge(set);
        }
        total
    }
}

impl FromIterator<(String, f64)> for CategoryScores {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for CategoryScores {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScoresVisitor;

        impl<'de> Visitor<'de> for ScoresVisitor {
            type Value = CategoryScores;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category names to scores")
            }

            // Map entries arrive in document order, which is the order kept.
            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut scores = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, score)) = map.next_entry::<String, f64>()? {
                    scores.push((name, score));
                }
                Ok(CategoryScores(scores))
            }
        }

        deserializer.deserialize_map(ScoresVisitor)
    }
}

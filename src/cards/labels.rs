//! Label sets for card tags and domains.
//!
//! Upstream card data is inconsistent about how `tags` and `domain` arrive:
//! - A comma-joined string (`"Noxus, Ionia"`)
//! - A list of strings (`["Noxus", "Ionia"]`)
//! - A list of objects with a `name` or `label` field
//! - Missing or null
//!
//! All shapes are parsed once, here, into a `LabelSet`. Nothing downstream
//! re-parses labels.

use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

/// Canonical set of labels attached to a card.
///
/// Labels are trimmed, empty fragments are dropped, and duplicates collapse
/// to the first occurrence. Iteration order is first-seen order, so a
/// Legend's tags are reported back in the order the catalog lists them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LabelSet(SmallVec<[String; 4]>);

impl LabelSet {
    /// Create an empty label set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-joined label string.
    ///
    /// ```
    /// use riftforge::cards::LabelSet;
    ///
    /// let tags = LabelSet::parse(" Noxus ,Ionia,, Noxus");
    /// assert_eq!(tags.len(), 2);
    /// assert!(tags.contains("Ionia"));
    /// ```
    #[must_use]
    pub fn parse(joined: &str) -> Self {
        let mut set = Self::new();
        set.extend_joined(joined);
        set
    }

    /// Add a single label. Returns false if it was empty or already present.
    pub fn insert(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() || self.contains(label) {
            return false;
        }
        self.0.push(label.to_string());
        true
    }

    fn extend_joined(&mut self, joined: &str) {
        for fragment in joined.split(',') {
            self.insert(fragment);
        }
    }

    /// Check whether a label is present.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|l| l == label)
    }

    /// True if the two sets share at least one label.
    ///
    /// An empty set intersects nothing.
    #[must_use]
    pub fn intersects(&self, other: &LabelSet) -> bool {
        self.0.iter().any(|l| other.contains(l))
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate labels in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Copy the labels into a plain list.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.0.to_vec()
    }
}

impl<S: AsRef<str>> FromIterator<S> for LabelSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for label in iter {
            set.extend_joined(label.as_ref());
        }
        set
    }
}

impl From<&str> for LabelSet {
    fn from(joined: &str) -> Self {
        Self::parse(joined)
    }
}

/// One element of a pre-split label list.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLabel {
    Text(String),
    Named { name: String },
    Labelled { label: String },
}

/// Any of the accepted wire shapes for a label field.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLabels {
    Joined(String),
    List(Vec<RawLabel>),
}

impl From<RawLabels> for LabelSet {
    fn from(raw: RawLabels) -> Self {
        match raw {
            RawLabels::Joined(s) => Self::parse(&s),
            RawLabels::List(items) => items
                .into_iter()
                .map(|item| match item {
                    RawLabel::Text(s) | RawLabel::Named { name: s } | RawLabel::Labelled { label: s } => s,
                })
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for LabelSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<RawLabels>::deserialize(deserializer)?;
        Ok(raw.map(LabelSet::from).unwrap_or_default())
    }
}

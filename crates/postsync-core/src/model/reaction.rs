// ── Reaction counters ──

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// The closed set of reactions a post can receive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ReactionKind {
    ThumbsUp,
    Wow,
    Heart,
    Rocket,
    Coffee,
}

impl ReactionKind {
    pub fn emoji(self) -> &'static str {
        match self {
            Self::ThumbsUp => "👍",
            Self::Wow => "😮",
            Self::Heart => "❤️",
            Self::Rocket => "🚀",
            Self::Coffee => "☕",
        }
    }

    /// Look up a kind by its wire name (`thumbsUp`, `heart`, ...).
    /// Unknown names yield `None`.
    pub fn lookup(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}

/// Per-post reaction counts, one slot per [`ReactionKind`].
///
/// Serialized as `{"thumbsUp":0,"wow":0,"heart":0,"rocket":0,"coffee":0}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reactions {
    pub thumbs_up: u32,
    pub wow: u32,
    pub heart: u32,
    pub rocket: u32,
    pub coffee: u32,
}

impl Reactions {
    /// All counters at zero.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: ReactionKind) -> u32 {
        match kind {
            ReactionKind::ThumbsUp => self.thumbs_up,
            ReactionKind::Wow => self.wow,
            ReactionKind::Heart => self.heart,
            ReactionKind::Rocket => self.rocket,
            ReactionKind::Coffee => self.coffee,
        }
    }

    pub fn increment(&mut self, kind: ReactionKind) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(1);
    }

    pub fn total(&self) -> u64 {
        self.iter().map(|(_, n)| u64::from(n)).sum()
    }

    /// Counts in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ReactionKind, u32)> + '_ {
        ReactionKind::iter().map(move |k| (k, self.get(k)))
    }

    fn slot_mut(&mut self, kind: ReactionKind) -> &mut u32 {
        match kind {
            ReactionKind::ThumbsUp => &mut self.thumbs_up,
            ReactionKind::Wow => &mut self.wow,
            ReactionKind::Heart => &mut self.heart,
            ReactionKind::Rocket => &mut self.rocket,
            ReactionKind::Coffee => &mut self.coffee,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_camel_case() {
        assert_eq!(ReactionKind::ThumbsUp.to_string(), "thumbsUp");
        assert_eq!(ReactionKind::lookup("thumbsUp"), Some(ReactionKind::ThumbsUp));
        assert_eq!(ReactionKind::lookup("heart"), Some(ReactionKind::Heart));
    }

    #[test]
    fn unknown_kind_misses() {
        assert_eq!(ReactionKind::lookup("angry"), None);
    }

    #[test]
    fn increment_touches_one_slot() {
        let mut r = Reactions::zero();
        r.increment(ReactionKind::Rocket);
        r.increment(ReactionKind::Rocket);
        assert_eq!(r.get(ReactionKind::Rocket), 2);
        assert_eq!(r.total(), 2);
        assert!(
            r.iter()
                .filter(|(k, _)| *k != ReactionKind::Rocket)
                .all(|(_, n)| n == 0)
        );
    }

    #[test]
    fn increment_saturates() {
        let mut r = Reactions {
            coffee: u32::MAX,
            ..Reactions::zero()
        };
        r.increment(ReactionKind::Coffee);
        assert_eq!(r.coffee, u32::MAX);
    }

    #[test]
    fn serializes_as_map_of_all_kinds() {
        let json = serde_json::to_value(Reactions::zero()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"thumbsUp": 0, "wow": 0, "heart": 0, "rocket": 0, "coffee": 0})
        );
    }
}

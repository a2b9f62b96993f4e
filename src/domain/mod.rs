//! Identity newtypes for seasons and episodes.
//!
//! Seasons and episodes are both keyed by plain integers upstream, so the
//! wrappers here keep the two from being mixed up at call sites.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a followed season, owned by the persistence layer.
///
/// # Examples
///
/// ```rust
/// use seasonarr::domain::SeasonId;
///
/// let id = SeasonId::new(42);
/// assert_eq!(id.value(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SeasonId(i32);

impl SeasonId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SeasonId> for i32 {
    fn from(id: SeasonId) -> Self {
        id.0
    }
}

impl From<i32> for SeasonId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

impl Serialize for SeasonId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.0)
    }
}

impl<'de> Deserialize<'de> for SeasonId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = i32::deserialize(deserializer)?;
        Ok(Self::new(id))
    }
}

/// 1-based position of an episode within its season.
///
/// Catalog data is not trusted to be well formed, so zero or negative numbers
/// are representable; they simply never match the premiere or finale slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EpisodeNumber(i32);

impl EpisodeNumber {
    pub const PREMIERE: Self = Self(1);

    #[must_use]
    pub const fn new(num: i32) -> Self {
        Self(num)
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }

    /// Returns true for the first episode of the season.
    #[must_use]
    pub const fn is_premiere(&self) -> bool {
        self.0 == Self::PREMIERE.0
    }
}

impl fmt::Display for EpisodeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for EpisodeNumber {
    fn from(num: i32) -> Self {
        Self::new(num)
    }
}

impl From<EpisodeNumber> for i32 {
    fn from(num: EpisodeNumber) -> Self {
        num.0
    }
}

impl Serialize for EpisodeNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.0)
    }
}

impl<'de> Deserialize<'de> for EpisodeNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let num = i32::deserialize(deserializer)?;
        Ok(Self::new(num))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_id_conversions() {
        let id = SeasonId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(i32::from(id), 42);
        assert_eq!(SeasonId::from(42), id);
    }

    #[test]
    fn episode_number_premiere_detection() {
        assert!(EpisodeNumber::new(1).is_premiere());
        assert!(!EpisodeNumber::new(2).is_premiere());
        assert!(!EpisodeNumber::new(0).is_premiere());
        assert_eq!(EpisodeNumber::PREMIERE.value(), 1);
    }

    #[test]
    fn episode_number_ordering() {
        let mut numbers = vec![EpisodeNumber::new(3), EpisodeNumber::new(1)];
        numbers.sort();
        assert_eq!(numbers, vec![EpisodeNumber::new(1), EpisodeNumber::new(3)]);
    }

    #[test]
    fn ids_serialize_as_bare_integers() {
        let json = serde_json::to_string(&SeasonId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: SeasonId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SeasonId::new(7));

        let num: EpisodeNumber = serde_json::from_str("12").unwrap();
        assert_eq!(num, EpisodeNumber::new(12));
    }
}

use std::ops::Index;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::CoreError;

use super::item::ScoreItem;
use super::request::coerce_integer;

/// Clamped NIHSS item scores, indexed by [`ScoreItem`].
///
/// Every stored value lies in `[0, item.max()]`. Out-of-range input is
/// corrected silently on entry, so no other code needs to re-check ranges.
///
/// Serializes as a JSON object in item order. Deserializing coerces known
/// keys the same way as request payloads (integers or integer strings, then
/// clamped), drops unknown keys whatever their value, and leaves missing or
/// null keys at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct ScoreSet {
    values: [u8; ScoreItem::COUNT],
}

impl ScoreSet {
    /// All items at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(key, raw value)` pairs.
    pub fn from_raw<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        let mut set = Self::new();
        for (key, raw) in entries {
            if let Ok(item) = key.parse::<ScoreItem>() {
                set.set(item, raw);
            }
        }
        set
    }

    /// Store a raw value for `item`, clamped into its range.
    pub fn set(&mut self, item: ScoreItem, raw: i64) {
        self.values[item.index()] = item.clamp(raw);
    }

    /// Builder-style [`ScoreSet::set`].
    pub fn with(mut self, item: ScoreItem, raw: i64) -> Self {
        self.set(item, raw);
        self
    }

    pub fn get(&self, item: ScoreItem) -> u8 {
        self.values[item.index()]
    }

    /// Items and their values, in clinical exam order.
    pub fn iter(&self) -> impl Iterator<Item = (ScoreItem, u8)> + '_ {
        ScoreItem::ALL.into_iter().map(|item| (item, self.get(item)))
    }

    /// Items with a nonzero score, in clinical exam order.
    pub fn affected(&self) -> impl Iterator<Item = (ScoreItem, u8)> + '_ {
        self.iter().filter(|(_, value)| *value > 0)
    }

    /// Sum over all 15 items, `0..=42`.
    pub fn total(&self) -> u8 {
        self.values.iter().sum()
    }

    /// Sum of the four limb-motor items, `0..=16`.
    pub fn motor_total(&self) -> u8 {
        ScoreItem::MOTOR.iter().map(|item| self.get(*item)).sum()
    }
}

impl Index<ScoreItem> for ScoreSet {
    type Output = u8;

    fn index(&self, item: ScoreItem) -> &u8 {
        &self.values[item.index()]
    }
}

impl TryFrom<Map<String, Value>> for ScoreSet {
    type Error = CoreError;

    fn try_from(raw: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut set = Self::new();
        for item in ScoreItem::ALL {
            match raw.get(item.key()) {
                None | Some(Value::Null) => {}
                Some(value) => set.set(item, coerce_integer(item.key(), value)?),
            }
        }
        Ok(set)
    }
}

impl Serialize for ScoreSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ScoreItem::COUNT))?;
        for (item, value) in self.iter() {
            map.serialize_entry(item.key(), &value)?;
        }
        map.end()
    }
}

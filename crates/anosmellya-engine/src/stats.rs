//! Population and field summaries.

use std::fmt;

use serde::Serialize;

use crate::animal::Animal;

/// A snapshot of a world's population and smell fields.
///
/// Serializes to a flat JSON object keyed by field name; the averaged
/// animals carry only their genetic traits.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Statistics {
    /// Columns in the world.
    pub world_width: u32,
    /// Rows in the world.
    pub world_height: u32,
    /// Ticks simulated so far.
    pub tick: u64,
    /// Mean genetics of living herbivores (all zero when there are none).
    pub herb_avg: Animal,
    /// Living herbivores.
    pub herb_count: u32,
    /// Mean genetics of living carnivores (all zero when there are none).
    pub carn_avg: Animal,
    /// Living carnivores.
    pub carn_count: u32,
    /// Sum of the plant field.
    pub plant_total: f64,
    /// Sum of the herb field.
    pub herb_total: f64,
    /// Sum of the carn field.
    pub carn_total: f64,
    /// Sum of the baby field.
    pub baby_total: f64,
}

impl Statistics {
    /// The snapshot as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Living animals of both species.
    pub fn population(&self) -> u32 {
        self.herb_count + self.carn_count
    }
}

/// Compact single-line JSON.
impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

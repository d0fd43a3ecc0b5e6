//! A single profiled statement.

use datamapper_core::Scalar;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileRecord {
    /// Normalized SQL as sent to the driver.
    pub sql: String,
    /// Normalized binds as sent to the driver.
    #[serde(serialize_with = "binds_as_map")]
    pub binds: Vec<(String, Scalar)>,
    pub started_at: f64,
    pub finished_at: Option<f64>,
}

impl ProfileRecord {
    pub fn new(sql: impl Into<String>, binds: Vec<(String, Scalar)>, started_at: f64) -> Self {
        Self {
            sql: sql.into(),
            binds,
            started_at,
            finished_at: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    /// Seconds between start and finish, rounded to 4 decimals.
    /// `None` until the record is finished.
    pub fn elapsed_seconds(&self) -> Option<f64> {
        self.finished_at
            .map(|finished| round_seconds(finished - self.started_at))
    }
}

fn binds_as_map<S: Serializer>(binds: &[(String, Scalar)], serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(binds.len()))?;
    for (key, value) in binds {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

/// Round to 4 decimal places.
pub fn round_seconds(seconds: f64) -> f64 {
    (seconds * 10_000.0).round() / 10_000.0
}

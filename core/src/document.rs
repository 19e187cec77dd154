use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::DecodeError;
use crate::point::Point;
use crate::recover::PointSet;

/// One parsed share document.
///
/// The `keys` record carries the point count and threshold; every other
/// top-level field is a share keyed by its decimal x-coordinate:
///
/// ```json
/// {
///     "keys": { "n": 4, "k": 3 },
///     "1": { "base": "10", "value": "6" },
///     "2": { "base": "2", "value": "1011" }
/// }
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct ShareDocument {
    pub keys: Keys,
    #[serde(flatten)]
    pub shares: BTreeMap<String, ShareRecord>,
}

/// Declared problem size: n points supplied, k required.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Keys {
    pub n: usize,
    pub k: usize,
}

/// A share as it appears on the wire, before numeric decoding.
#[derive(Clone, Debug, Deserialize)]
pub struct ShareRecord {
    pub base: String,
    pub value: String,
}

impl ShareDocument {
    /// Decode every share record into a point.
    ///
    /// The decoded point count is authoritative; the declared `n` is kept
    /// only as metadata.
    pub fn decode(&self) -> Result<PointSet, DecodeError> {
        let points = self
            .shares
            .iter()
            .map(|(key, record)| {
                Point::decode(key, &record.base, &record.value)
            })
            .collect::<Result<Vec<Point>, DecodeError>>()?;

        Ok(PointSet::new(points, self.keys.k))
    }
}

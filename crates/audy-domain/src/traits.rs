//! Trait definitions shared by source records

use crate::Lane;

/// A source record with an identity key used for deduplication
///
/// Two records of the same lane with equal keys describe the same citation;
/// only the first one seen is kept.
pub trait Identified {
    /// Lane the record belongs to
    const LANE: Lane;

    /// Deduplication key for the record
    fn identity(&self) -> &str;
}

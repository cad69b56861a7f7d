//! Layout matchers and per-lane union
//!
//! The backend's log format drifted over time, so each lane knows several
//! record layouts. Every layout scans the whole corpus on its own; the lane
//! unions their output and keeps the first record per identity key.

use crate::config::ExtractorConfig;
use audy_domain::Identified;
use std::collections::HashSet;
use tracing::{debug, trace};

/// A record recognized at a byte offset of the corpus
#[derive(Debug, Clone, PartialEq)]
pub struct Located<T> {
    /// Offset of the record's introducer
    pub offset: usize,
    /// The recognized record
    pub record: T,
}

impl<T> Located<T> {
    /// Pair a record with its offset
    pub fn new(offset: usize, record: T) -> Self {
        Self { offset, record }
    }
}

/// One known textual layout of a source record
pub trait Layout: Send + Sync {
    /// Record type produced by this layout
    type Record: Identified;

    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Every record of this layout in `text`, in corpus order
    fn scan(&self, text: &str, config: &ExtractorConfig) -> Vec<Located<Self::Record>>;
}

/// Run `layouts` in order and union their records
///
/// A key claimed by several layouts keeps the record of the earliest layout;
/// within one layout the first occurrence wins. Survivors are returned in
/// corpus order.
pub fn union_layouts<T: Identified>(
    text: &str,
    config: &ExtractorConfig,
    layouts: &[&dyn Layout<Record = T>],
) -> Vec<T> {
    let lane = T::LANE;
    let mut seen: HashSet<String> = HashSet::new();
    let mut kept: Vec<Located<T>> = Vec::new();

    for layout in layouts {
        let found = layout.scan(text, config);
        debug!(
            lane = %lane,
            layout = layout.name(),
            matches = found.len(),
            "Layout scanned"
        );
        for located in found {
            if seen.insert(located.record.identity().to_string()) {
                kept.push(located);
            } else {
                trace!(
                    lane = %lane,
                    layout = layout.name(),
                    key = located.record.identity(),
                    "Duplicate source discarded"
                );
            }
        }
    }

    kept.sort_by_key(|located| located.offset);
    kept.into_iter().map(|located| located.record).collect()
}

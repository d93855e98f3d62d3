//! Diff Engine
//!
//! Matches regions of two revisions by identity and classifies them as
//! added, removed or modified. Regions sharing an identity (overloads) are
//! matched by occurrence: the n-th in `previous` pairs with the n-th in
//! `current`.

use std::collections::HashMap;

use crate::domain::entities::{AnnotatedRegion, ChangeReport, RegionChange, RegionKey};
use crate::domain::services::differ::Differ;

/// Identity plus occurrence index among equal identities
type OccurrenceKey = (RegionKey, usize);

/// Builds change reports from region lists
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeBuilder {
    differ: Differ,
}

impl ChangeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare two revisions of one logical file
    pub fn diff(&self, previous: &[AnnotatedRegion], current: &[AnnotatedRegion]) -> ChangeReport {
        let previous_keys = occurrence_keys(previous);
        let current_keys = occurrence_keys(current);

        let previous_index: HashMap<&OccurrenceKey, &AnnotatedRegion> =
            previous_keys.iter().zip(previous).collect();
        let current_index: HashMap<&OccurrenceKey, &AnnotatedRegion> =
            current_keys.iter().zip(current).collect();

        let mut report = ChangeReport::default();

        for (key, region) in current_keys.iter().zip(current) {
            match previous_index.get(key) {
                None => report.added.push(region.clone()),
                Some(old) if old.content() != region.content() => {
                    report.modified.push(RegionChange {
                        previous: (*old).clone(),
                        current: region.clone(),
                        diff: self.differ.diff_regions(old, region),
                    });
                }
                Some(_) => {}
            }
        }

        for (key, region) in previous_keys.iter().zip(previous) {
            if !current_index.contains_key(key) {
                report.removed.push(region.clone());
            }
        }

        report
    }

    /// Every region reported as added
    pub fn build_inserted(&self, regions: &[AnnotatedRegion]) -> ChangeReport {
        ChangeReport {
            added: regions.to_vec(),
            ..Default::default()
        }
    }

    /// Every region reported as removed
    pub fn build_deleted(&self, regions: &[AnnotatedRegion]) -> ChangeReport {
        ChangeReport {
            removed: regions.to_vec(),
            ..Default::default()
        }
    }
}

fn occurrence_keys(regions: &[AnnotatedRegion]) -> Vec<OccurrenceKey> {
    let mut seen: HashMap<RegionKey, usize> = HashMap::new();
    regions
        .iter()
        .map(|region| {
            let key = region.identity();
            let count = seen.entry(key.clone()).or_insert(0);
            let occurrence = *count;
            *count += 1;
            (key, occurrence)
        })
        .collect()
}

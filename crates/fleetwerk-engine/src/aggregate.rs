// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fleet aggregation: display order plus per-label counts.

use std::collections::BTreeSet;

use serde::Serialize;

use fleetwerk_core::types::NormalizedPrinter;

use crate::classify::{SeverityColor, classify};

/// Number of printers showing one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateCount {
    pub label: &'static str,
    pub color: SeverityColor,
    pub count: usize,
}

/// Per-label counts in first-seen order.  Only labels that occur are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StateCounts {
    entries: Vec<StateCount>,
}

impl StateCounts {
    fn increment(&mut self, label: &'static str, color: SeverityColor) {
        match self.entries.iter_mut().find(|e| e.label == label) {
            Some(entry) => entry.count += 1,
            None => self.entries.push(StateCount {
                label,
                color,
                count: 1,
            }),
        }
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StateCount> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }
}

/// Printers in display order with their label tally.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetSummary {
    pub printers: Vec<NormalizedPrinter>,
    pub state_counts: StateCounts,
}

/// Order printers for display and count them per classified label.
///
/// Connected printers come first, disconnected ones last; each group is in
/// ascending byte order of `key`.
pub fn aggregate(mut printers: Vec<NormalizedPrinter>) -> FleetSummary {
    printers.sort_by(|a, b| {
        a.is_disconnected()
            .cmp(&b.is_disconnected())
            .then_with(|| a.key.cmp(&b.key))
    });

    let mut state_counts = StateCounts::default();
    for printer in &printers {
        let info = classify(printer);
        state_counts.increment(info.label, info.color);
    }

    FleetSummary {
        printers,
        state_counts,
    }
}

/// Keys that occur more than once, each listed once in byte order.
pub fn duplicate_keys(printers: &[NormalizedPrinter]) -> Vec<&str> {
    let mut seen = BTreeSet::new();
    let duplicates: BTreeSet<&str> = printers
        .iter()
        .map(|p| p.key.as_str())
        .filter(|key| !seen.insert(*key))
        .collect();
    duplicates.into_iter().collect()
}

//! Resource collection and deduplication.

use std::collections::HashSet;

use crate::models::{PlannedStage, Resource};

/// Collect stage resources into one list, deduplicated by URL.
///
/// Traversal is stage order then within-stage order, and the first
/// occurrence of a URL wins, so a resource repeated by a later stage keeps
/// the earlier stage's title and description. Resources are attached at
/// the stage level and included wholesale whenever their stage is; there
/// is no per-resource profile filtering.
pub fn collect_resources(stages: &[PlannedStage]) -> Vec<Resource> {
    let mut seen = HashSet::new();
    let mut collected = Vec::new();

    for stage in stages {
        for resource in &stage.resources {
            if seen.insert(resource.url) {
                collected.push(*resource);
            }
        }
    }

    collected
}

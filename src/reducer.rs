//! Suffix-subsumption reducer.
//!
//! Sorting by labels read from the top-level label down places every domain
//! directly after its ancestors, with each subtree contiguous. One linear pass
//! that compares against the last kept domain then removes every descendant.

use std::cmp::Ordering;

use tracing::debug;

use crate::types::{Domain, DomainSet};

/// Compare two domains by their label sequence, most significant label first.
///
/// `com < example.com < a.example.com < b.example.com < net`
pub fn compare_reversed_labels(a: &Domain, b: &Domain) -> Ordering {
    a.labels().rev().cmp(b.labels().rev())
}

/// Remove every domain that is a strict subdomain of another domain in the set.
pub fn reduce(domains: DomainSet) -> DomainSet {
    let total = domains.len();
    let mut sorted: Vec<Domain> = domains.into_iter().collect();
    sorted.sort_unstable_by(compare_reversed_labels);

    let mut kept: Vec<Domain> = Vec::with_capacity(sorted.len());
    for domain in sorted {
        match kept.last() {
            Some(last) if domain.is_subdomain_of(last) => continue,
            _ => kept.push(domain),
        }
    }

    debug!(total, kept = kept.len(), "reduced subsumed domains");
    kept.into_iter().collect()
}

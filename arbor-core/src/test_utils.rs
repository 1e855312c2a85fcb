//! Shared test utilities for `arbor-core`.

use arbor_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::graph::WeightedEdge;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// Keeps every property suite aligned on the same `PROGTEST_CASES` and
/// `ARBOR_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds integer-labelled edges with sequence numbers matching their position.
#[must_use]
pub(crate) fn numbered_edges(edges: &[(usize, usize, f64)]) -> Vec<WeightedEdge<usize>> {
    edges
        .iter()
        .zip(0_u64..)
        .map(|(&(left, right, weight), sequence)| {
            WeightedEdge::new(left, right, weight, sequence)
        })
        .collect()
}

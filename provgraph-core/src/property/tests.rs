//! Property runners for the graph engine.
//!
//! Hosts proptest runners for every property plus rstest cases pinning each
//! topology to fixed seeds.

use proptest::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};

use crate::test_utils::suite_proptest_config;

use super::analysis::{run_components_property, run_cycle_property, run_summary_property};
use super::bfs::{run_multi_source_property, run_tree_property};
use super::generator::run_generator_property;
use super::metadata::run_round_trip_property;
use super::strategies::{MISSING_ROOT, generate_fixture, graph_fixture_strategy};
use super::types::Topology;

/// Generates an rstest-parameterised test running `$runner` over every
/// topology at two fixed seeds.
macro_rules! parameterised_property_test {
    ($test_name:ident, $runner:path, $expectation:expr) => {
        #[rstest::rstest]
        #[case::sparse_7(Topology::Sparse, 7)]
        #[case::sparse_42(Topology::Sparse, 42)]
        #[case::dense_7(Topology::Dense, 7)]
        #[case::dense_42(Topology::Dense, 42)]
        #[case::forest_7(Topology::Forest, 7)]
        #[case::forest_42(Topology::Forest, 42)]
        #[case::disconnected_7(Topology::Disconnected, 7)]
        #[case::disconnected_42(Topology::Disconnected, 42)]
        #[case::edgeless_7(Topology::Edgeless, 7)]
        fn $test_name(#[case] topology: Topology, #[case] seed: u64) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let fixture = generate_fixture(topology, &mut rng);
            $runner(&fixture).expect($expectation);
        }
    };
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn multi_source_bfs_matches_oracle(fixture in graph_fixture_strategy()) {
        run_multi_source_property(&fixture)?;
    }

    #[test]
    fn shortest_path_trees_match_oracle(fixture in graph_fixture_strategy()) {
        run_tree_property(&fixture)?;
    }

    #[test]
    fn components_match_reachability(fixture in graph_fixture_strategy()) {
        run_components_property(&fixture)?;
    }

    #[test]
    fn cycles_match_edge_counts(fixture in graph_fixture_strategy()) {
        run_cycle_property(&fixture)?;
    }

    #[test]
    fn summary_matches_oracle(fixture in graph_fixture_strategy()) {
        run_summary_property(&fixture)?;
    }

    #[test]
    fn metadata_round_trips(fixture in graph_fixture_strategy()) {
        run_round_trip_property(&fixture)?;
    }

    #[test]
    fn generator_output_is_simple_and_reproducible(
        node_count in 2_usize..48,
        coefficient in 0.0_f64..6.0,
        seed in any::<u64>(),
    ) {
        run_generator_property(node_count, coefficient, seed)?;
    }
}

parameterised_property_test!(
    multi_source_rstest,
    run_multi_source_property,
    "multi-source bfs must match the oracle"
);

parameterised_property_test!(
    trees_rstest,
    run_tree_property,
    "shortest-path trees must match the oracle"
);

parameterised_property_test!(
    components_rstest,
    run_components_property,
    "components must match reachability"
);

parameterised_property_test!(
    cycles_rstest,
    run_cycle_property,
    "cycle detection must match edge counts"
);

parameterised_property_test!(
    summary_rstest,
    run_summary_property,
    "summary must match the oracle"
);

parameterised_property_test!(
    round_trip_rstest,
    run_round_trip_property,
    "metadata must round-trip"
);

#[test]
fn fixtures_never_contain_the_missing_root() {
    for seed in 0..32 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fixture = generate_fixture(Topology::Sparse, &mut rng);
        assert!(!fixture.graph.contains(MISSING_ROOT));
    }
}

#[test]
fn disconnected_fixtures_have_several_components() {
    for seed in 0..32 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fixture = generate_fixture(Topology::Disconnected, &mut rng);
        assert!(crate::components(&fixture.graph).count() >= 2);
    }
}

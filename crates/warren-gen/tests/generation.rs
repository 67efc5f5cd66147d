//! End-to-end generation runs over fully populated grids.

use proptest::prelude::*;
use warren_core::{CellRole, GeneratePhase, GenerateError, GridCoord, NodeId};
use warren_gen::{LayoutGenerator, SeedStrategy};
use warren_grid::{Edge, Graph};
use warren_test_utils::{full_grid, RecordingObserver, ScriptedRng};

fn roles(graph: &Graph) -> Vec<(GridCoord, CellRole)> {
    graph.nodes().map(|n| (n.coord(), n.role())).collect()
}

fn edges(graph: &Graph) -> Vec<Edge> {
    graph.edges().collect()
}

fn count(graph: &Graph, role: CellRole) -> usize {
    graph.find_all(|n| n.role() == role).len()
}

#[test]
fn five_by_five_run_produces_the_expected_role_census() {
    for seed in 0..16 {
        let mut graph = full_grid(5, 5);
        let layout = LayoutGenerator::from_seed(seed)
            .generate(&mut graph)
            .unwrap();

        // One start, one room, two cycle segments, two edges. Empty:
        // three remaining corners plus the centre pair.
        assert_eq!(count(&graph, CellRole::Path), 1, "seed {seed}");
        assert_eq!(count(&graph, CellRole::Room), 1, "seed {seed}");
        assert_eq!(count(&graph, CellRole::Cycle), 2, "seed {seed}");
        assert_eq!(count(&graph, CellRole::Empty), 5, "seed {seed}");
        assert_eq!(count(&graph, CellRole::End), 0, "seed {seed}");
        assert_eq!(graph.edge_count(), 2, "seed {seed}");

        // The phase record agrees with the graph.
        assert_eq!(graph.role(layout.start), Some(CellRole::Path));
        assert_eq!(graph.role(layout.room), Some(CellRole::Room));
        assert_eq!(graph.role(layout.cycle_head), Some(CellRole::Cycle));
        assert_eq!(graph.role(layout.cycle_tail), Some(CellRole::Cycle));
        assert_eq!(graph.role(layout.center), Some(CellRole::Empty));
    }
}

#[test]
fn room_neighbours_start_and_corridor_extends_straight() {
    for seed in 0..16 {
        let mut graph = full_grid(5, 5);
        let layout = LayoutGenerator::from_seed(seed)
            .generate(&mut graph)
            .unwrap();

        let to_room = graph.direction_to(layout.start, layout.room).unwrap();
        let onward = graph.direction_to(layout.room, layout.cycle_head).unwrap();
        assert_eq!(to_room, onward, "seed {seed}: corridor bent");

        assert!(graph.has_edge(layout.room, layout.cycle_head));
        assert!(graph.has_edge(layout.cycle_head, layout.cycle_tail));
    }
}

#[test]
fn identical_seeds_reproduce_the_layout_exactly() {
    for seed in [0u64, 1, 42, u64::MAX] {
        let mut a = full_grid(5, 5);
        let mut b = full_grid(5, 5);
        let la = LayoutGenerator::from_seed(seed).generate(&mut a).unwrap();
        let lb = LayoutGenerator::from_seed(seed).generate(&mut b).unwrap();
        assert_eq!(la, lb);
        assert_eq!(roles(&a), roles(&b));
        assert_eq!(edges(&a), edges(&b));
    }
}

#[test]
fn injected_fixed_sequence_sources_reproduce_the_layout_exactly() {
    let script = [3u64, 11, 0, 7, 5];
    let mut a = full_grid(5, 5);
    let mut b = full_grid(5, 5);
    let la = LayoutGenerator::with_rng(ScriptedRng::new(script))
        .generate(&mut a)
        .unwrap();
    let lb = LayoutGenerator::with_rng(ScriptedRng::new(script))
        .generate(&mut b)
        .unwrap();
    assert_eq!(la, lb);
    assert_eq!(roles(&a), roles(&b));
    assert_eq!(edges(&a), edges(&b));
}

#[test]
fn border_line_seeding_runs_end_to_end() {
    // Scripted zeros make every uniform pick take the first
    // candidate, so the whole run is pinned down.
    let mut graph = full_grid(5, 5);
    let layout = LayoutGenerator::with_rng(ScriptedRng::new([0u64]))
        .seed_strategy(SeedStrategy::BorderLines)
        .generate(&mut graph)
        .unwrap();
    // Left column plus bottom row is 9 cells on a 5x5.
    assert_eq!(layout.anchors.len(), 9);
    let at = |x, y| graph.require(GridCoord::new(x, y)).unwrap();
    // First frontier candidate in row-major order is (1, 0); growth
    // proceeds straight up from it.
    assert_eq!(layout.start, at(1, 0));
    assert_eq!(layout.room, at(1, 1));
    assert_eq!(layout.cycle_head, at(1, 2));
    assert_eq!(layout.center, at(2, 2));
    assert_eq!(layout.cycle_tail, at(1, 3));
    assert_eq!(graph.role(layout.start), Some(CellRole::Path));
}

#[test]
fn observer_hears_every_mutation_of_a_run() {
    let observer = RecordingObserver::new();
    let log = observer.handle();
    let mut graph = full_grid(5, 5);
    graph.set_observer(Box::new(observer));

    LayoutGenerator::from_seed(4).generate(&mut graph).unwrap();

    let log = log.borrow();
    // 4 anchors + start + room + cycle head + centre pair + cycle tail.
    assert_eq!(log.roles.len(), 10);
    assert_eq!(log.edges.len(), 2);
    // Notifications arrive in phase order: anchors first, tail last.
    assert!(log.roles[..4]
        .iter()
        .all(|(_, _, role)| *role == CellRole::Empty));
    assert_eq!(log.roles[4].2, CellRole::Path);
    assert_eq!(log.roles[9].2, CellRole::Cycle);
}

#[test]
fn failed_runs_keep_their_interim_mutations() {
    // 2x2: corners cover the whole grid, so start selection has no
    // empty cell with an unassigned neighbour left to choose.
    let mut graph = full_grid(2, 2);
    let err = LayoutGenerator::from_seed(0)
        .generate(&mut graph)
        .unwrap_err();
    assert_eq!(
        err,
        GenerateError::NoCandidate {
            phase: GeneratePhase::StartSelection
        }
    );
    // The seed phase's anchors remain; the graph is interim state to
    // be discarded, not repaired.
    assert_eq!(count(&graph, CellRole::Empty), 4);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn one_graph_per_run_keeps_runs_independent() {
    let mut a = full_grid(5, 5);
    let mut b = full_grid(5, 5);
    let la = LayoutGenerator::from_seed(1).generate(&mut a).unwrap();
    let lb = LayoutGenerator::from_seed(2).generate(&mut b).unwrap();
    // Different seeds may or may not diverge in the pick, but the two
    // graphs share no state: each carries exactly its own run.
    assert_eq!(a.edge_count(), 2);
    assert_eq!(b.edge_count(), 2);
    let _ = (la, lb);
}

#[test]
fn start_was_empty_and_on_the_frontier_at_selection_time() {
    for seed in 0..16 {
        let mut graph = full_grid(5, 5);
        let layout = LayoutGenerator::from_seed(seed)
            .generate(&mut graph)
            .unwrap();
        // All corner anchors start empty; the start must be one of
        // them and never the top-right corner, whose up and right
        // slots are both boundaries.
        assert!(layout.anchors.contains(&layout.start), "seed {seed}");
        let top_right = graph.require(GridCoord::new(4, 4)).unwrap();
        assert_ne!(layout.start, top_right, "seed {seed}");
    }
}

#[test]
fn room_was_unassigned_before_promotion() {
    for seed in 0..16 {
        let mut graph = full_grid(5, 5);
        let layout = LayoutGenerator::from_seed(seed)
            .generate(&mut graph)
            .unwrap();
        // The room neighbours the start and is never an anchor: it
        // was unassigned when promoted.
        assert!(graph.direction_to(layout.start, layout.room).is_some());
        assert!(!layout.anchors.contains(&layout.room), "seed {seed}");
    }
}

proptest! {
    // Any corner-seeded 5x5 run succeeds, and its census is fixed:
    // randomness moves the layout around without changing its shape.
    #[test]
    fn corner_seeded_runs_succeed_for_every_seed(seed in any::<u64>()) {
        let mut graph = full_grid(5, 5);
        let layout = LayoutGenerator::from_seed(seed)
            .generate(&mut graph)
            .unwrap();
        prop_assert_eq!(count(&graph, CellRole::Path), 1);
        prop_assert_eq!(count(&graph, CellRole::Cycle), 2);
        prop_assert_eq!(graph.edge_count(), 2);
        prop_assert!(graph.has_edge(layout.room, layout.cycle_head));
    }
}

#[test]
fn layout_node_ids_are_valid_in_their_graph() {
    let mut graph = full_grid(5, 5);
    let layout = LayoutGenerator::from_seed(12)
        .generate(&mut graph)
        .unwrap();
    let all: Vec<NodeId> = graph.nodes().map(|n| n.id()).collect();
    for id in [
        layout.start,
        layout.room,
        layout.cycle_head,
        layout.center,
        layout.center_side,
        layout.cycle_tail,
    ] {
        assert!(all.contains(&id));
    }
}

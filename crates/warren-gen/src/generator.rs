//! The phase-ordered layout generator.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;
use warren_core::{CellRole, GenerateError, GeneratePhase, GridCoord, GridError, NodeId};
use warren_grid::{Graph, Pattern};

use crate::config::SeedStrategy;
use crate::layout::Layout;

// ── LayoutGenerator ─────────────────────────────────────────────

/// Runs the constrained procedural-growth algorithm over one graph.
///
/// Executes a fixed ordered sequence of phases, mutating node roles
/// and creating edges through the graph's primitives: seed anchors →
/// start selection → room placement → corridor step → centre seeding →
/// cycle continuation. Randomness breaks ties among otherwise-equal
/// candidates; everything else is deterministic given the random
/// choices.
///
/// The first failing phase aborts the run. Mutations already applied
/// are **not** rolled back: the graph is left in an interim state and
/// must be discarded. Retry on a fresh graph, typically with a
/// different seed.
///
/// # Examples
///
/// ```
/// use warren_core::{CellRole, GridCoord};
/// use warren_gen::LayoutGenerator;
/// use warren_grid::Graph;
///
/// let mut graph = Graph::new(5, 5).unwrap();
/// let coords = (0..5).flat_map(|y| (0..5).map(move |x| GridCoord::new(x, y)));
/// graph.populate(coords).unwrap();
///
/// let layout = LayoutGenerator::from_seed(7).generate(&mut graph).unwrap();
/// assert_eq!(graph.role(layout.start), Some(CellRole::Path));
/// assert!(graph.has_edge(layout.room, layout.cycle_head));
/// ```
#[derive(Debug)]
pub struct LayoutGenerator<R: Rng = ChaCha8Rng> {
    rng: R,
    strategy: SeedStrategy,
}

impl LayoutGenerator<ChaCha8Rng> {
    /// A generator with the default deterministic RNG seeded from
    /// `seed`. Identical seeds over structurally identical graphs
    /// produce identical layouts.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> LayoutGenerator<R> {
    /// A generator drawing tie-breaks from an injected source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            strategy: SeedStrategy::default(),
        }
    }

    /// Select which anchor set the seed phase marks empty.
    pub fn seed_strategy(mut self, strategy: SeedStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Run the full phase sequence over `graph`.
    ///
    /// The graph must be populated. On success the graph holds the
    /// generated layout and the returned [`Layout`] records the nodes
    /// each phase chose; on failure the graph holds the interim
    /// mutations of the phases that ran before the reported one.
    pub fn generate(&mut self, graph: &mut Graph) -> Result<Layout, GenerateError> {
        let anchors = self.seed_anchors(graph)?;
        let start = self.select_start(graph)?;
        let room = place_room(graph, start)?;
        let cycle_head = carve_corridor(graph, start, room)?;
        let (center, center_side) = self.seed_center(graph)?;
        let cycle_tail = continue_cycle(graph, cycle_head)?;
        Ok(Layout {
            anchors,
            start,
            room,
            cycle_head,
            center,
            center_side,
            cycle_tail,
        })
    }

    /// Phase 1: mark the anchor set empty.
    fn seed_anchors(&mut self, graph: &mut Graph) -> Result<Vec<NodeId>, GenerateError> {
        const PHASE: GeneratePhase = GeneratePhase::SeedAnchors;
        let anchors = match self.strategy {
            SeedStrategy::Corners => {
                let (w, h) = (graph.width() as i32, graph.height() as i32);
                let corners = [
                    GridCoord::new(0, 0),
                    GridCoord::new(w - 1, 0),
                    GridCoord::new(0, h - 1),
                    GridCoord::new(w - 1, h - 1),
                ];
                let mut ids = Vec::with_capacity(4);
                for coord in corners {
                    ids.push(graph.require(coord).map_err(grid_err(PHASE))?);
                }
                ids
            }
            SeedStrategy::BorderLines => {
                let ids = graph.find_all(|n| n.coord().x == 0 || n.coord().y == 0);
                if ids.is_empty() {
                    return Err(GenerateError::NoCandidate { phase: PHASE });
                }
                ids
            }
        };
        for &id in &anchors {
            graph.set_role(id, CellRole::Empty).map_err(grid_err(PHASE))?;
        }
        Ok(anchors)
    }

    /// Phase 2: promote one empty growth-frontier cell to the start.
    ///
    /// Candidates are empty cells with an unassigned neighbour above
    /// or to the right; the pick among them is uniform.
    fn select_start(&mut self, graph: &mut Graph) -> Result<NodeId, GenerateError> {
        const PHASE: GeneratePhase = GeneratePhase::StartSelection;
        let up = Pattern::new().up(CellRole::Unassigned);
        let right = Pattern::new().right(CellRole::Unassigned);
        let candidates = {
            let g = &*graph;
            g.find_all(|n| {
                n.role() == CellRole::Empty
                    && (g.matches(n.id(), &up) || g.matches(n.id(), &right))
            })
        };
        let start = self
            .pick(&candidates)
            .ok_or(GenerateError::NoCandidate { phase: PHASE })?;
        graph
            .set_role(start, CellRole::Path)
            .map_err(grid_err(PHASE))?;
        Ok(start)
    }

    /// Phase 5: seed extra pattern-matchable anchors around the grid
    /// centre for subsequent growth.
    fn seed_center(&mut self, graph: &mut Graph) -> Result<(NodeId, NodeId), GenerateError> {
        const PHASE: GeneratePhase = GeneratePhase::CenterSeeding;
        let mid = GridCoord::new((graph.width() / 2) as i32, (graph.height() / 2) as i32);
        let center = graph.require(mid).map_err(grid_err(PHASE))?;
        graph
            .set_role(center, CellRole::Empty)
            .map_err(grid_err(PHASE))?;

        let sides: SmallVec<[NodeId; 4]> = match graph.node(center) {
            Some(node) => node.neighbours().into_iter().flatten().collect(),
            None => SmallVec::new(),
        };
        let side = self
            .pick(&sides)
            .ok_or(GenerateError::NoCandidate { phase: PHASE })?;
        graph
            .set_role(side, CellRole::Empty)
            .map_err(grid_err(PHASE))?;
        Ok((center, side))
    }

    /// Uniform pick over a candidate set, `None` when it is empty.
    fn pick(&mut self, candidates: &[NodeId]) -> Option<NodeId> {
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[self.rng.random_range(0..candidates.len())])
    }
}

// ── Deterministic phases ────────────────────────────────────────

/// Phase 3: promote the first unassigned neighbour of the start to a
/// room.
fn place_room(graph: &mut Graph, start: NodeId) -> Result<NodeId, GenerateError> {
    const PHASE: GeneratePhase = GeneratePhase::RoomPlacement;
    let room = graph
        .find_neighbour(start, |n| n.role() == CellRole::Unassigned)
        .ok_or(GenerateError::NoCandidate { phase: PHASE })?;
    graph
        .set_role(room, CellRole::Room)
        .map_err(grid_err(PHASE))?;
    Ok(room)
}

/// Phase 4: extend the start→room direction one further step, wire
/// the room to that cell, and promote it to the first cycle segment.
///
/// The continuation is a straight-line extension of the start→room
/// direction. Deriving it from whichever direction first scans as
/// out-of-bounds would be scan-order-dependent and ill-defined at
/// corners, where two directions are out-of-bounds at once.
fn carve_corridor(graph: &mut Graph, start: NodeId, room: NodeId) -> Result<NodeId, GenerateError> {
    const PHASE: GeneratePhase = GeneratePhase::CorridorStep;
    let direction = graph
        .direction_to(start, room)
        .ok_or(GenerateError::NoCandidate { phase: PHASE })?;
    let next = graph
        .node(room)
        .and_then(|n| n.neighbour(direction))
        .ok_or(GenerateError::NoCandidate { phase: PHASE })?;
    graph.add_edge(room, next).map_err(grid_err(PHASE))?;
    graph
        .set_role(next, CellRole::Cycle)
        .map_err(grid_err(PHASE))?;
    Ok(next)
}

/// Phase 6: grow the cycle by one cell: an unassigned neighbour of the
/// head that itself borders empty space.
fn continue_cycle(graph: &mut Graph, head: NodeId) -> Result<NodeId, GenerateError> {
    const PHASE: GeneratePhase = GeneratePhase::CycleContinuation;
    let tail = {
        let g = &*graph;
        g.find_neighbour(head, |n| {
            n.role() == CellRole::Unassigned
                && g.has_neighbour(n.id(), |m| m.role() == CellRole::Empty)
        })
    }
    .ok_or(GenerateError::NoCandidate { phase: PHASE })?;
    graph.add_edge(head, tail).map_err(grid_err(PHASE))?;
    graph
        .set_role(tail, CellRole::Cycle)
        .map_err(grid_err(PHASE))?;
    Ok(tail)
}

fn grid_err(phase: GeneratePhase) -> impl FnOnce(GridError) -> GenerateError {
    move |source| GenerateError::Grid { phase, source }
}

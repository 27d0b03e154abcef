//! A* search over walkable cells.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use crate::rules::PathContext;

/// One cell of a path, the agent's feet position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PathNode {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl PathNode {
    /// Creates a node at `(x, y, z)`.
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// The four horizontal move directions.
const HORIZONTAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Vertical components tried for every horizontal direction: level first,
/// then step-up, then step-down.
const VERTICAL: [i32; 3] = [0, 1, -1];

/// An entry in the open list.
///
/// Ordered so the binary heap pops the lowest f-score first, breaking ties
/// toward higher g (deeper nodes), which reaches the goal sooner on the
/// large plateaus a voxel floor produces.
#[derive(Clone, Copy, Debug)]
struct OpenEntry {
    f: i32,
    g: i32,
    node: PathNode,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.g == other.g
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| self.g.cmp(&other.g))
    }
}

/// Per-node bookkeeping: best known cost and the node it was reached from.
#[derive(Clone, Copy)]
struct NodeRecord {
    g: i32,
    parent: Option<PathNode>,
    closed: bool,
}

fn heuristic(a: PathNode, b: PathNode) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs() + (a.z - b.z).abs()
}

/// Finds a path from `from` to `to` and writes it into `out`, returning the
/// node count (endpoints included).
///
/// Neighbors are the four horizontal directions crossed with a level,
/// step-up, or step-down move, each admitted by
/// [`PathContext::can_step_at`]. Level moves cost 1, moves that change y
/// cost 2; the heuristic is the Manhattan distance. Returns 0 — no path —
/// when either endpoint is out of bounds, the goal is unreachable, or the
/// search expands more than `max_visited` nodes.
pub fn find_path(
    ctx: &PathContext<'_>,
    from: PathNode,
    to: PathNode,
    out: &mut Vec<PathNode>,
) -> usize {
    out.clear();
    if ctx.volume.index(from.x, from.y, from.z).is_none()
        || ctx.volume.index(to.x, to.y, to.z).is_none()
    {
        return 0;
    }

    let mut open = BinaryHeap::new();
    let mut records: FxHashMap<PathNode, NodeRecord> = FxHashMap::default();
    records.insert(
        from,
        NodeRecord {
            g: 0,
            parent: None,
            closed: false,
        },
    );
    open.push(OpenEntry {
        f: heuristic(from, to),
        g: 0,
        node: from,
    });

    let mut visited = 0usize;
    while let Some(entry) = open.pop() {
        let record = records[&entry.node];
        if record.closed || entry.g > record.g {
            // Stale heap entry superseded by a cheaper route.
            continue;
        }
        records.get_mut(&entry.node).expect("record exists").closed = true;

        visited += 1;
        if visited > ctx.max_visited {
            return 0;
        }
        if entry.node == to {
            let mut cursor = Some(to);
            while let Some(node) = cursor {
                out.push(node);
                cursor = records[&node].parent;
            }
            out.reverse();
            return out.len();
        }

        for (dx, dz) in HORIZONTAL {
            for dy in VERTICAL {
                let next = PathNode::new(entry.node.x + dx, entry.node.y + dy, entry.node.z + dz);
                if !ctx.can_step_at(next.x, next.y, next.z) {
                    continue;
                }
                let g = entry.g + if dy == 0 { 1 } else { 2 };
                let better = match records.get(&next) {
                    Some(existing) => !existing.closed && g < existing.g,
                    None => true,
                };
                if better {
                    records.insert(
                        next,
                        NodeRecord {
                            g,
                            parent: Some(entry.node),
                            closed: false,
                        },
                    );
                    open.push(OpenEntry {
                        f: g + heuristic(next, to),
                        g,
                        node: next,
                    });
                }
            }
        }
    }

    0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Compact tree layout with a fixed node size.
//!
//! Walker's algorithm in linear time (Buchheim, Jünger, Leipert):
//!   1. First walk, post-order: preliminary cross-axis offset `z` and
//!      modifier `m` per node, pushing subtrees apart along their contours.
//!   2. Second walk, pre-order: accumulate modifiers into final offsets.
//!   3. Scale: cross axis by `dx`, depth by `dy`.
//!
//! Siblings are separated by one unit, cousins by two. Sibling order is
//! the hierarchy's insertion order.

use petgraph::graph::NodeIndex;

use super::hierarchy::Hierarchy;
use super::types::{Point, TreeLayout};

// ─── Working tree ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
struct TidyNode {
    /// `None` for the virtual parent above the root.
    node: Option<NodeIndex>,
    parent: Option<usize>,
    children: Vec<usize>,
    depth: usize,
    /// Position among siblings.
    i: usize,
    /// Ancestor pointer used when moving subtrees.
    a: usize,
    /// Default ancestor for the next child's apportion step.
    default_ancestor: Option<usize>,
    z: f64,
    m: f64,
    c: f64,
    s: f64,
    /// Contour thread.
    t: Option<usize>,
    x: f64,
}

/// Arena of [`TidyNode`]s. Slot 0 is the virtual parent, slot 1 the root;
/// slots are filled breadth-first so parents precede children.
struct Arena {
    nodes: Vec<TidyNode>,
}

impl Arena {
    const ROOT: usize = 1;

    fn build(tree: &Hierarchy) -> Self {
        let mut nodes = vec![
            TidyNode {
                children: vec![Self::ROOT],
                ..TidyNode::default()
            },
            TidyNode {
                node: Some(tree.root),
                parent: Some(0),
                a: Self::ROOT,
                ..TidyNode::default()
            },
        ];
        let mut cursor = Self::ROOT;
        while cursor < nodes.len() {
            if let Some(idx) = nodes[cursor].node {
                for (i, child) in tree.children(idx).into_iter().enumerate() {
                    let slot = nodes.len();
                    nodes.push(TidyNode {
                        node: Some(child),
                        parent: Some(cursor),
                        depth: nodes[cursor].depth + 1,
                        i,
                        a: slot,
                        ..TidyNode::default()
                    });
                    nodes[cursor].children.push(slot);
                }
            }
            cursor += 1;
        }
        Self { nodes }
    }

    /// Post-order from the root, children left to right.
    fn post_order(&self) -> Vec<usize> {
        let mut stack = vec![Self::ROOT];
        let mut out = Vec::with_capacity(self.nodes.len());
        while let Some(v) = stack.pop() {
            out.push(v);
            stack.extend(self.nodes[v].children.iter().copied());
        }
        out.reverse();
        out
    }

    fn separation(&self, a: usize, b: usize) -> f64 {
        if self.nodes[a].parent == self.nodes[b].parent {
            1.0
        } else {
            2.0
        }
    }

    fn next_left(&self, v: usize) -> Option<usize> {
        self.nodes[v].children.first().copied().or(self.nodes[v].t)
    }

    fn next_right(&self, v: usize) -> Option<usize> {
        self.nodes[v].children.last().copied().or(self.nodes[v].t)
    }

    fn next_ancestor(&self, vim: usize, v: usize, ancestor: usize) -> usize {
        let candidate = self.nodes[vim].a;
        if self.nodes[candidate].parent == self.nodes[v].parent {
            candidate
        } else {
            ancestor
        }
    }

    fn move_subtree(&mut self, wm: usize, wp: usize, shift: f64) {
        let change = shift / (self.nodes[wp].i as f64 - self.nodes[wm].i as f64);
        self.nodes[wp].c -= change;
        self.nodes[wp].s += shift;
        self.nodes[wm].c += change;
        self.nodes[wp].z += shift;
        self.nodes[wp].m += shift;
    }

    fn execute_shifts(&mut self, v: usize) {
        let mut shift = 0.0;
        let mut change = 0.0;
        let children = self.nodes[v].children.clone();
        for &w in children.iter().rev() {
            let node = &mut self.nodes[w];
            node.z += shift;
            node.m += shift;
            change += node.c;
            shift += node.s + change;
        }
    }

    fn first_walk(&mut self, v: usize) {
        let Some(parent) = self.nodes[v].parent else {
            return;
        };
        let i = self.nodes[v].i;
        let w = (i > 0).then(|| self.nodes[parent].children[i - 1]);

        let children = self.nodes[v].children.clone();
        if let (Some(&first), Some(&last)) = (children.first(), children.last()) {
            self.execute_shifts(v);
            let midpoint = (self.nodes[first].z + self.nodes[last].z) / 2.0;
            match w {
                Some(w) => {
                    self.nodes[v].z = self.nodes[w].z + self.separation(v, w);
                    self.nodes[v].m = self.nodes[v].z - midpoint;
                }
                None => self.nodes[v].z = midpoint,
            }
        } else if let Some(w) = w {
            self.nodes[v].z = self.nodes[w].z + self.separation(v, w);
        }

        let default_ancestor = self.nodes[parent]
            .default_ancestor
            .unwrap_or(self.nodes[parent].children[0]);
        let ancestor = self.apportion(v, w, default_ancestor);
        self.nodes[parent].default_ancestor = Some(ancestor);
    }

    /// Push `v`'s subtree right until it clears every left sibling subtree.
    fn apportion(&mut self, v: usize, w: Option<usize>, mut ancestor: usize) -> usize {
        let Some(w) = w else {
            return ancestor;
        };
        let Some(parent) = self.nodes[v].parent else {
            return ancestor;
        };

        // Inner/outer contours on the right (p) and left (m) side.
        let mut vop = v;
        let mut vom = self.nodes[parent].children[0];
        let mut sip = self.nodes[v].m;
        let mut sop = self.nodes[v].m;
        let mut sim = self.nodes[w].m;
        let mut som = self.nodes[vom].m;

        let mut next_im = self.next_right(w);
        let mut next_ip = self.next_left(v);
        while let (Some(vim), Some(vip)) = (next_im, next_ip) {
            let (Some(om), Some(op)) = (self.next_left(vom), self.next_right(vop)) else {
                break;
            };
            vom = om;
            vop = op;
            self.nodes[vop].a = v;

            let shift = self.nodes[vim].z + sim - self.nodes[vip].z - sip + self.separation(vim, vip);
            if shift > 0.0 {
                let wm = self.next_ancestor(vim, v, ancestor);
                self.move_subtree(wm, v, shift);
                sip += shift;
                sop += shift;
            }
            sim += self.nodes[vim].m;
            sip += self.nodes[vip].m;
            som += self.nodes[vom].m;
            sop += self.nodes[vop].m;

            next_im = self.next_right(vim);
            next_ip = self.next_left(vip);
        }

        if let Some(vim) = next_im {
            if self.next_right(vop).is_none() {
                self.nodes[vop].t = Some(vim);
                self.nodes[vop].m += sim - sop;
            }
        }
        if let Some(vip) = next_ip {
            if self.next_left(vom).is_none() {
                self.nodes[vom].t = Some(vip);
                self.nodes[vom].m += sip - som;
                ancestor = v;
            }
        }
        ancestor
    }

    fn second_walk(&mut self, v: usize) {
        let Some(parent) = self.nodes[v].parent else {
            return;
        };
        let parent_m = self.nodes[parent].m;
        let node = &mut self.nodes[v];
        node.x = node.z + parent_m;
        node.m += parent_m;
    }
}

// ─── Public API ──────────────────────────────────────────────────────────────

/// Lay out `tree` with sibling spacing `dx` and depth spacing `dy`.
///
/// The root lands at `(0, 0)`; depth grows along `y`.
pub fn tidy_layout(tree: &Hierarchy, dx: f64, dy: f64) -> TreeLayout {
    let mut arena = Arena::build(tree);

    for v in arena.post_order() {
        arena.first_walk(v);
    }
    arena.nodes[0].m = -arena.nodes[Arena::ROOT].z;
    for v in Arena::ROOT..arena.nodes.len() {
        arena.second_walk(v);
    }

    let mut positions = vec![Point::default(); tree.node_count()];
    for node in &arena.nodes {
        if let Some(idx) = node.node {
            positions[idx.index()] = Point::new(node.x * dx, node.depth as f64 * dy);
        }
    }
    TreeLayout { positions }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_tidy.rs"]
mod tests;

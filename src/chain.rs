use std::num::NonZeroUsize;

use crate::ornament::{draw_ornament, OrnamentStyle};
use crate::progress::ProgressState;
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    Forward,
    Backward,
}

impl Traversal {
    pub fn flipped(self) -> Self {
        match self {
            Traversal::Forward => Traversal::Backward,
            Traversal::Backward => Traversal::Forward,
        }
    }
}

/// What a step of the current node did to the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The current node is still moving.
    Animating,
    /// The node settled and the neighbour at `to` became current.
    Advanced { to: usize },
    /// The node at `at` settled on a chain end; the traversal turned around.
    Reversed { at: usize },
}

impl Step {
    pub fn is_finished(&self) -> bool {
        !matches!(self, Step::Animating)
    }
}

#[derive(Clone, Debug)]
pub struct ChainNode {
    index: usize,
    progress: ProgressState,
}

impl ChainNode {
    fn new(index: usize) -> Self {
        ChainNode {
            index,
            progress: ProgressState::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    pub fn draw<S: Surface>(&self, surface: &mut S, style: &OrnamentStyle, count: usize) {
        draw_ornament(surface, style, self.index, count, self.progress.scale());
    }

    pub fn update(&mut self, tick: f64) -> Option<f64> {
        self.progress.step(tick)
    }

    pub fn try_activate(&mut self) -> bool {
        self.progress.begin_advancing()
    }

    /// Index of the next node along `traversal`, if the chain continues.
    pub fn neighbour(&self, traversal: Traversal, count: usize) -> Option<usize> {
        match traversal {
            Traversal::Forward => Some(self.index + 1).filter(|next| *next < count),
            Traversal::Backward => self.index.checked_sub(1),
        }
    }
}

/// Fixed-length chain of ornaments driven one node at a time in ping-pong
/// order.
#[derive(Clone, Debug)]
pub struct Chain {
    nodes: Vec<ChainNode>,
    current: usize,
    traversal: Traversal,
}

impl Chain {
    pub fn new(count: NonZeroUsize) -> Self {
        Chain {
            nodes: (0..count.get()).map(ChainNode::new).collect(),
            current: 0,
            traversal: Traversal::Forward,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    pub fn nodes(&self) -> &[ChainNode] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&ChainNode> {
        self.nodes.get(index)
    }

    pub fn draw_all<S: Surface>(&self, surface: &mut S, style: &OrnamentStyle) {
        let count = self.len();
        for node in &self.nodes {
            node.draw(surface, style, count);
        }
    }

    pub fn step_current(&mut self, tick: f64) -> Step {
        let count = self.len();
        let node = &mut self.nodes[self.current];
        if node.update(tick).is_none() {
            return Step::Animating;
        }

        match node.neighbour(self.traversal, count) {
            Some(next) => {
                log::debug!("node {} settled, handing off to {}", self.current, next);
                self.current = next;
                Step::Advanced { to: next }
            }
            None => {
                self.traversal = self.traversal.flipped();
                log::debug!(
                    "node {} settled at the chain end, now going {:?}",
                    self.current,
                    self.traversal
                );
                Step::Reversed { at: self.current }
            }
        }
    }

    /// Starts the current node. `false` if it is already moving.
    pub fn activate(&mut self) -> bool {
        self.nodes[self.current].try_activate()
    }
}

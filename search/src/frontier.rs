//! Tree-search frontier: FIFO for breadth-first, block-LIFO for depth-first.
//!
//! The frontier holds node ids only; the nodes themselves live in the
//! [`crate::node::SearchTree`] arena. There is no visited set: the same state
//! reached by two different paths is queued twice.

use std::collections::VecDeque;

use crate::node::NodeId;

/// How newly generated children enter the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierDiscipline {
    /// Children are appended to the tail (breadth-first).
    Fifo,
    /// Children are inserted at the head as one block, keeping generation
    /// order inside the block (depth-first). The first generated child is
    /// popped next.
    BlockLifo,
}

/// Frontier manager for one traversal.
#[derive(Debug)]
pub struct TreeFrontier {
    queue: VecDeque<NodeId>,
    discipline: FrontierDiscipline,
    high_water: u64,
}

impl TreeFrontier {
    /// Create a frontier holding only `root`.
    #[must_use]
    pub fn new(discipline: FrontierDiscipline, root: NodeId) -> Self {
        Self {
            queue: VecDeque::from([root]),
            discipline,
            high_water: 1,
        }
    }

    /// Remove the next node to visit. Always from the head.
    pub fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    /// Insert one expansion's children according to the discipline.
    pub fn insert_children(&mut self, children: impl IntoIterator<Item = NodeId>) {
        match self.discipline {
            FrontierDiscipline::Fifo => self.queue.extend(children),
            FrontierDiscipline::BlockLifo => {
                let block: Vec<NodeId> = children.into_iter().collect();
                for id in block.into_iter().rev() {
                    self.queue.push_front(id);
                }
            }
        }
        let size = self.queue.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    #[must_use]
    pub fn discipline(&self) -> FrontierDiscipline {
        self.discipline
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

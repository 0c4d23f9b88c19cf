//! Search-tree nodes and the arena that owns them.
//!
//! Every node lives in a [`SearchTree`] and is addressed by [`NodeId`]. A node
//! points upward to its parent by id; nothing points downward. The tree is
//! therefore acyclic by construction and children can be dropped from the
//! frontier without touching their ancestors.

use crate::contract::SearchWorld;

/// Index of a node inside its [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position in the arena (also the creation order).
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// An immutable node in the search tree.
#[derive(Debug, Clone)]
pub struct SearchNodeV1<S, A> {
    pub node_id: NodeId,
    /// Parent node (`None` only for the root).
    pub parent_id: Option<NodeId>,
    pub state: S,
    /// The action that produced this node from its parent (`None` only for the root).
    pub producing_action: Option<A>,
    /// Tree depth (root = 0).
    pub depth: u32,
}

/// Arena of search nodes for one traversal.
///
/// Nodes are never removed; a fresh tree is built for every traversal
/// (iterative deepening builds one per cutoff).
#[derive(Debug, Clone)]
pub struct SearchTree<S, A> {
    nodes: Vec<SearchNodeV1<S, A>>,
}

impl<S: Clone, A: Clone> SearchTree<S, A> {
    /// Create a tree holding only the root node.
    #[must_use]
    pub fn new(root_state: S) -> Self {
        Self {
            nodes: vec![SearchNodeV1 {
                node_id: NodeId(0),
                parent_id: None,
                state: root_state,
                producing_action: None,
                depth: 0,
            }],
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Look up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` came from a different tree and is out of range.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNodeV1<S, A> {
        &self.nodes[id.0]
    }

    /// Number of nodes allocated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Lazily expand `parent` into child nodes.
    ///
    /// Each successor reported by `world` is allocated as a child with depth
    /// `parent.depth + 1`, in the world's generation order. Children are only
    /// allocated as the returned iterator is consumed.
    pub fn expand<'t, W>(
        &'t mut self,
        world: &'t W,
        parent: NodeId,
    ) -> impl Iterator<Item = NodeId> + 't
    where
        W: SearchWorld<State = S, Action = A>,
    {
        let origin = self.get(parent);
        let state = origin.state.clone();
        let depth = origin.depth + 1;
        world.successors(state).map(move |(action, child)| {
            let node_id = NodeId(self.nodes.len());
            self.nodes.push(SearchNodeV1 {
                node_id,
                parent_id: Some(parent),
                state: child,
                producing_action: Some(action),
                depth,
            });
            node_id
        })
    }

    /// Actions from the root to `id`, in root-to-goal order.
    ///
    /// The root's (absent) action is never included, so the root yields an
    /// empty vector.
    #[must_use]
    pub fn extract_solution(&self, id: NodeId) -> Vec<A> {
        let mut actions = Vec::with_capacity(self.get(id).depth as usize);
        let mut cursor = self.get(id);
        while let Some(parent_id) = cursor.parent_id {
            if let Some(action) = &cursor.producing_action {
                actions.push(action.clone());
            }
            cursor = self.get(parent_id);
        }
        actions.reverse();
        actions
    }
}

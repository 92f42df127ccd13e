//! The multi-valued decision policy produced by a solve.
//!
//! Each node maps to the ordered set of *all* successors that achieve its
//! optimal aggregate. Set order is discovery order: the first entry is the
//! successor that triggered the last strict improvement, and later entries
//! tied with it. The goal maps to an empty set.

use indexmap::{IndexMap, IndexSet};

/// Node -> ordered set of equally optimal successors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Policy {
    choices: IndexMap<String, IndexSet<String>>,
}

impl Policy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the tied-successor set for a node, replacing any prior entry.
    pub(crate) fn record(&mut self, node: impl Into<String>, successors: IndexSet<String>) {
        self.choices.insert(node.into(), successors);
    }

    /// The tied successors of `node`, in discovery order. `None` when the
    /// solve never assigned the node a value.
    pub fn successors(&self, node: &str) -> Option<&IndexSet<String>> {
        self.choices.get(node)
    }

    /// The representative choice at `node`: the first tied successor.
    /// `None` for the goal (empty set) and for unassigned nodes.
    pub fn first_choice(&self, node: &str) -> Option<&str> {
        self.choices.get(node)?.first().map(String::as_str)
    }

    /// Nodes with a recorded decision, in the order they were assigned.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.choices.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
        self.choices.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

//! Selection path state.
//!
//! [`PathState`] tracks the ids selected from the root down, the cached
//! labels for those ids, and the level (tab) that currently receives input.

use serde::{Deserialize, Serialize};

use crate::navigator::find_option;
use crate::option::OptionNode;

/// Separator used when joining selected names for display.
pub const LABEL_SEPARATOR: &str = " / ";

/// Id and display name of one selected node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionLabel<K> {
    pub id: K,
    pub name: String,
}

impl<K: Clone> SelectionLabel<K> {
    fn of(node: &OptionNode<K>) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
        }
    }
}

/// Result of a [`PathState::select`] transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOutcome<K> {
    /// True when a leaf was selected and the selection is complete.
    pub terminal: bool,
    /// Path after the transition.
    pub path: Vec<K>,
    /// Labels after the transition.
    pub labels: Vec<SelectionLabel<K>>,
}

/// Selection path, cached labels, and active level.
///
/// `path` and `labels` always have the same length and every `path[k]` is a
/// child of the node reached by `path[..k]` at the time it was selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathState<K> {
    path: Vec<K>,
    labels: Vec<SelectionLabel<K>>,
    active_level: usize,
}

impl<K> Default for PathState<K> {
    fn default() -> Self {
        Self {
            path: Vec::new(),
            labels: Vec::new(),
            active_level: 1,
        }
    }
}

impl<K: Clone + PartialEq + std::fmt::Debug> PathState<K> {
    /// Create an empty path state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `initial` against `tree`, one id per level.
    ///
    /// The walk stops at the first id that cannot be resolved (or once a leaf
    /// is reached); whatever was resolved up to that point is kept. An empty
    /// tree or value yields the empty state.
    pub fn resolve(tree: &[OptionNode<K>], initial: &[K]) -> Self {
        let mut state = Self::default();
        let mut options = tree;

        for id in initial {
            let Some(node) = find_option(options, id) else {
                log::warn!(
                    "initial value {:?} not found at level {}, keeping {} resolved level(s)",
                    id,
                    state.path.len() + 1,
                    state.path.len()
                );
                break;
            };
            if options.iter().filter(|n| &n.id == id).count() > 1 {
                log::warn!("duplicate sibling id {:?}, using first match", id);
            }

            state.path.push(node.id.clone());
            state.labels.push(SelectionLabel::of(node));

            if !node.has_children() {
                if state.path.len() < initial.len() {
                    log::warn!(
                        "initial value continues past leaf {:?}, ignoring {} id(s)",
                        id,
                        initial.len() - state.path.len()
                    );
                }
                break;
            }
            options = node.children();
        }

        state
    }

    /// Select `node` on `level` (1-based).
    ///
    /// Everything from `level` down is replaced by `node`. A node with
    /// children advances the active level; a leaf completes the selection and
    /// leaves the active level unchanged. Closing the popover and notifying
    /// the host is left to the caller.
    pub fn select(&mut self, node: &OptionNode<K>, level: usize) -> SelectOutcome<K> {
        let keep = level.saturating_sub(1).min(self.path.len());
        self.path.truncate(keep);
        self.labels.truncate(keep);

        self.path.push(node.id.clone());
        self.labels.push(SelectionLabel::of(node));

        let terminal = !node.has_children();
        if !terminal {
            self.active_level = keep + 2;
        }

        log::debug!(
            "PathState::select level={} id={:?} terminal={} depth={}",
            level,
            node.id,
            terminal,
            self.path.len()
        );

        SelectOutcome {
            terminal,
            path: self.path.clone(),
            labels: self.labels.clone(),
        }
    }

    /// Clear the selection and return to the first level.
    pub fn reset(&mut self) {
        self.path.clear();
        self.labels.clear();
        self.active_level = 1;
    }

    /// Selected names joined with `" / "`, or `placeholder` when empty.
    pub fn current_label(&self, placeholder: &str) -> String {
        if self.labels.is_empty() {
            return placeholder.to_string();
        }
        self.labels
            .iter()
            .map(|label| label.name.as_str())
            .collect::<Vec<_>>()
            .join(LABEL_SEPARATOR)
    }

    pub fn path(&self) -> &[K] {
        &self.path
    }

    pub fn labels(&self) -> &[SelectionLabel<K>] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// 1-based level currently focused for input.
    pub fn active_level(&self) -> usize {
        self.active_level
    }

    /// Focus another level. Levels start at 1.
    pub fn set_active_level(&mut self, level: usize) {
        self.active_level = level.max(1);
    }
}

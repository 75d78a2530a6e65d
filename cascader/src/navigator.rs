//! Per-level option lookup.
//!
//! Stateless functions that resolve which option list is shown on each level
//! for a given selection path. Lookups are a linear scan by id; fanout is
//! expected to be small.

use crate::option::OptionNode;

/// The options shown on one level (tab) of the cascader.
#[derive(Debug)]
pub struct Panel<'a, K> {
    /// 1-based level index.
    pub level: usize,
    /// Selectable options on this level.
    pub options: &'a [OptionNode<K>],
}

impl<K> Clone for Panel<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Panel<'_, K> {}

/// Find an option by id. The first match wins when siblings share an id.
pub fn find_option<'a, K: PartialEq>(
    options: &'a [OptionNode<K>],
    id: &K,
) -> Option<&'a OptionNode<K>> {
    options.iter().find(|node| &node.id == id)
}

/// Compute the panels to render for `path`.
///
/// Level 1 is always the root list. Each id in `path` that resolves to a node
/// with children adds the next level. The walk stops at the first id that is
/// not found or resolves to a leaf, so a stale path renders fewer levels
/// instead of failing.
pub fn panels_for<'a, K: PartialEq>(tree: &'a [OptionNode<K>], path: &[K]) -> Vec<Panel<'a, K>> {
    let mut panels = vec![Panel {
        level: 1,
        options: tree,
    }];

    let mut options = tree;
    for (index, id) in path.iter().enumerate() {
        let Some(node) = find_option(options, id) else {
            break;
        };
        if !node.has_children() {
            break;
        }
        options = node.children();
        panels.push(Panel {
            level: index + 2,
            options,
        });
    }

    panels
}

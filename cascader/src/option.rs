//! Option tree types.
//!
//! The option tree is supplied by the host and never mutated by the widget.
//! Each node is either a [`OptionKind::Leaf`] (selecting it completes the
//! selection) or a [`OptionKind::Branch`] (selecting it drills one level down).

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CascaderError;

// =============================================================================
// OptionId
// =============================================================================

/// Opaque identifier of an option.
///
/// Ids only need to be unique among siblings. JSON trees commonly use either
/// numbers or strings, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionId {
    Int(i64),
    Str(String),
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionId::Int(n) => write!(f, "{}", n),
            OptionId::Str(s) => f.write_str(s),
        }
    }
}

impl OptionId {
    /// Integers parse as [`OptionId::Int`], anything else as [`OptionId::Str`].
    pub fn parse(s: &str) -> Self {
        s.parse::<i64>()
            .map(OptionId::Int)
            .unwrap_or_else(|_| OptionId::Str(s.to_string()))
    }
}

impl FromStr for OptionId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(OptionId::parse(s))
    }
}

impl From<i32> for OptionId {
    fn from(value: i32) -> Self {
        OptionId::Int(value.into())
    }
}

impl From<i64> for OptionId {
    fn from(value: i64) -> Self {
        OptionId::Int(value)
    }
}

impl From<&str> for OptionId {
    fn from(value: &str) -> Self {
        OptionId::Str(value.to_string())
    }
}

impl From<String> for OptionId {
    fn from(value: String) -> Self {
        OptionId::Str(value)
    }
}

// =============================================================================
// OptionNode
// =============================================================================

/// Whether selecting a node ends the selection or drills further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind<K> {
    /// No children. Selecting it completes the selection.
    Leaf,
    /// Non-empty list of children shown on the next level.
    Branch(Vec<OptionNode<K>>),
}

/// A node of the option tree.
///
/// # Example
///
/// ```
/// use cascader::{OptionId, OptionNode};
///
/// let tree: Vec<OptionNode<OptionId>> = vec![OptionNode::branch(
///     1,
///     "Zhejiang",
///     vec![OptionNode::leaf(11, "Hangzhou")],
/// )];
/// assert!(tree[0].has_children());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "RawOptionNode<K>",
    into = "RawOptionNode<K>",
    bound(
        serialize = "K: Clone + Serialize",
        deserialize = "K: Deserialize<'de>"
    )
)]
pub struct OptionNode<K> {
    pub id: K,
    pub name: String,
    pub kind: OptionKind<K>,
}

impl<K> OptionNode<K> {
    /// Create a leaf node.
    pub fn leaf(id: impl Into<K>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: OptionKind::Leaf,
        }
    }

    /// Create a node with children. An empty `children` list yields a leaf.
    pub fn branch(id: impl Into<K>, name: impl Into<String>, children: Vec<OptionNode<K>>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: OptionKind::from_children(children),
        }
    }

    /// Children of this node; empty for leaves.
    pub fn children(&self) -> &[OptionNode<K>] {
        match &self.kind {
            OptionKind::Leaf => &[],
            OptionKind::Branch(children) => children,
        }
    }

    /// Check if this node has children.
    pub fn has_children(&self) -> bool {
        matches!(self.kind, OptionKind::Branch(_))
    }
}

impl<K> OptionKind<K> {
    fn from_children(children: Vec<OptionNode<K>>) -> Self {
        if children.is_empty() {
            OptionKind::Leaf
        } else {
            OptionKind::Branch(children)
        }
    }
}

/// Wire shape of a node: `{"id": .., "name": "..", "children": [..]}`.
#[derive(Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Clone + Serialize",
    deserialize = "K: Deserialize<'de>"
))]
struct RawOptionNode<K> {
    id: K,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<OptionNode<K>>>,
}

impl<K> From<RawOptionNode<K>> for OptionNode<K> {
    fn from(raw: RawOptionNode<K>) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            kind: OptionKind::from_children(raw.children.unwrap_or_default()),
        }
    }
}

impl<K> From<OptionNode<K>> for RawOptionNode<K> {
    fn from(node: OptionNode<K>) -> Self {
        let children = match node.kind {
            OptionKind::Leaf => None,
            OptionKind::Branch(children) => Some(children),
        };
        Self {
            id: node.id,
            name: node.name,
            children,
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Parse an option tree (a JSON array of root nodes).
pub fn from_json_str<K>(json: &str) -> Result<Vec<OptionNode<K>>, CascaderError>
where
    K: DeserializeOwned,
{
    Ok(serde_json::from_str(json)?)
}

/// Read and parse an option tree from a JSON file.
pub fn from_json_file<K>(path: impl AsRef<Path>) -> Result<Vec<OptionNode<K>>, CascaderError>
where
    K: DeserializeOwned,
{
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| CascaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tree = from_json_str(&contents)?;
    log::debug!("loaded option tree from {}", path.display());
    Ok(tree)
}

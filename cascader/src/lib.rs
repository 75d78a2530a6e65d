//! Cascading multi-level selector.
//!
//! A user picks a value by drilling through a hierarchy of options
//! (province, city, district), one tab per level inside a popover. This crate
//! holds the rendering-independent core: the selection path state machine,
//! the per-level panel lookup, and a [`Cascader`] controller that drives a
//! host-supplied [`CascaderRenderer`].

pub mod cascader;
pub mod config;
pub mod error;
pub mod navigator;
pub mod option;
pub mod path;
pub mod popover;
pub mod render;

pub use cascader::{Cascader, ChangeHandler};
pub use config::CascaderConfig;
pub use error::CascaderError;
pub use navigator::{Panel, find_option, panels_for};
pub use option::{OptionId, OptionKind, OptionNode};
pub use path::{LABEL_SEPARATOR, PathState, SelectOutcome, SelectionLabel};
pub use popover::PopoverState;
pub use render::{CascaderRenderer, PanelItem, PanelView, TextRenderer};

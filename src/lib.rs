//! A headless sticky section-header layout engine for scrolling lists.
//!
//! Given the default geometry of a sectioned, vertically scrolling list and
//! the current scroll offset, [`StickyHeaderPositioner`] produces layout
//! attributes where each section header stays pinned at the top of the
//! viewport while its section scrolls beneath it, then releases once the
//! section's last item has passed.
//!
//! The crate is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a [`LayoutSource`] describing the base (un-stuck) layout
//! - the current scroll offset and query rect per layout pass
//!
//! [`FlowLayout`] is a ready-made vertical [`LayoutSource`] for the common
//! header-plus-stacked-items case; any engine exposing per-element default
//! attributes and rect queries can be decorated instead.
//!
//! Every pass is recomputed synchronously from its inputs: no caching, no
//! background work, no state carried between passes.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod flow;
mod options;
mod positioner;
mod source;
mod state;
mod types;


pub use flow::{FlowLayout, FlowOptions, FlowSection};
pub use options::PositionerOptions;
pub use positioner::StickyHeaderPositioner;
pub use source::LayoutSource;
pub use state::{FrameState, ScrollState, ViewportState};
pub use types::{DEFAULT_HEADER_Z_INDEX, ElementKind, IndexPath, LayoutAttributes, Rect};

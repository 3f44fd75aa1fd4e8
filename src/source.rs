use alloc::vec::Vec;

use crate::{IndexPath, LayoutAttributes, Rect};

/// The base layout engine boundary.
///
/// Implementors supply the *default* (un-stuck) geometry of a sectioned,
/// vertically scrolling list: per-element attributes and rect queries. The
/// [`crate::StickyHeaderPositioner`] decorates any implementor, so the sticky
/// behavior composes with an arbitrary concrete engine instead of inheriting
/// from one.
///
/// Contract:
/// - Sections are zero-based and contiguous; items are ordered within their
///   section.
/// - A non-empty section has at most one header, and
///   [`header_attributes`](Self::header_attributes) returns `None` for empty
///   or headerless sections.
/// - [`for_each_in_rect`](Self::for_each_in_rect) emits every element whose
///   frame intersects the rect, in document order (sections ascending, a
///   section's header before its cells).
pub trait LayoutSource {
    fn section_count(&self) -> usize;

    /// Number of items in `section`; 0 for out-of-range sections.
    fn item_count(&self, section: usize) -> usize;

    /// Default attributes of the cell at `index_path`.
    fn item_attributes(&self, index_path: IndexPath) -> Option<LayoutAttributes>;

    /// Default attributes of the header of `section`.
    fn header_attributes(&self, section: usize) -> Option<LayoutAttributes>;

    /// Emits the default attributes of every element intersecting `rect`.
    fn for_each_in_rect(&self, rect: Rect, f: &mut dyn FnMut(LayoutAttributes));

    /// Collects the rect query into `out` (clears `out` first).
    fn collect_in_rect(&self, rect: Rect, out: &mut Vec<LayoutAttributes>) {
        out.clear();
        self.for_each_in_rect(rect, &mut |attrs| out.push(attrs));
    }

    /// Default frame of the cell at `index_path`.
    fn item_frame(&self, index_path: IndexPath) -> Option<Rect> {
        self.item_attributes(index_path).map(|attrs| attrs.frame)
    }
}

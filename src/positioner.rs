use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::{FrameState, IndexPath, LayoutAttributes, LayoutSource, PositionerOptions, Rect};

/// A decorator that keeps section headers pinned while their section scrolls.
///
/// Given a base [`LayoutSource`] and the current scroll offset, each query
/// returns the base result with every section header's y-origin clamped so
/// that the header:
/// - never rises more than one header height above its section's first item
///   (its natural resting position),
/// - never sinks below one header height above its section's last item's
///   bottom edge (so it cannot overrun the section),
/// - and otherwise tracks the scroll offset exactly, which pins it to the top
///   of the viewport while its section spans the viewport.
///
/// Non-header attributes pass through unchanged. The positioner is stateless
/// across passes: every result is recomputed from the current geometry, and
/// nothing is cached.
#[derive(Clone, Debug)]
pub struct StickyHeaderPositioner<S> {
    source: S,
    options: PositionerOptions,
}

impl<S: LayoutSource> StickyHeaderPositioner<S> {
    /// Wraps `source` with default options.
    pub fn new(source: S) -> Self {
        Self::with_options(source, PositionerOptions::default())
    }

    pub fn with_options(source: S, options: PositionerOptions) -> Self {
        Self { source, options }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    pub fn options(&self) -> &PositionerOptions {
        &self.options
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.options.enabled = enabled;
    }

    pub fn set_header_z_index(&mut self, header_z_index: i32) {
        self.options.header_z_index = header_z_index;
    }

    /// Computes the layout attributes for `rect` at `scroll_offset`.
    ///
    /// Convenience wrapper around
    /// [`collect_attributes_in_rect`](Self::collect_attributes_in_rect); for
    /// per-frame use, prefer the collecting form and reuse the buffer.
    pub fn layout_attributes_in_rect(
        &self,
        rect: Rect,
        scroll_offset: i64,
    ) -> Vec<LayoutAttributes> {
        let mut out = Vec::new();
        self.collect_attributes_in_rect(rect, scroll_offset, &mut out);
        out
    }

    /// Computes the layout attributes for `rect` at `scroll_offset` into
    /// `out` (clears `out` first).
    ///
    /// The result is the base query for `rect` with:
    /// - a header appended for every section that has a cell in the result
    ///   but whose header the base query did not include (a visible cell
    ///   implies its section's header must be considered, even when the
    ///   header's default frame falls outside `rect`),
    /// - every header's y-origin replaced by the sticky clamp and its z-index
    ///   raised to [`PositionerOptions::header_z_index`].
    ///
    /// A header whose section has no items, or whose first/last item lookup
    /// fails, is left untouched rather than failing the pass.
    pub fn collect_attributes_in_rect(
        &self,
        rect: Rect,
        scroll_offset: i64,
        out: &mut Vec<LayoutAttributes>,
    ) {
        self.source.collect_in_rect(rect, out);
        if !self.options.enabled {
            return;
        }

        // Sections with a visible cell need their header on screen.
        let mut headers_needing_layout = BTreeSet::new();
        for attrs in out.iter() {
            if attrs.is_cell() {
                headers_needing_layout.insert(attrs.index_path.section);
            }
        }
        // The base query already produced some of those headers.
        for attrs in out.iter() {
            if attrs.is_header() {
                headers_needing_layout.remove(&attrs.index_path.section);
            }
        }

        let mut forced = 0usize;
        for &section in &headers_needing_layout {
            if self.source.item_count(section) == 0 {
                continue;
            }
            if let Some(attrs) = self.source.header_attributes(section) {
                out.push(attrs);
                forced += 1;
            }
        }

        for attrs in out.iter_mut() {
            if !attrs.is_header() {
                continue;
            }
            let section = attrs.index_path.section;
            let Some((min_y, max_y)) = self.header_pin_range(section) else {
                lwarn!(section, "header without a resolvable pin range, leaving as-is");
                continue;
            };
            let y = scroll_offset.max(min_y).min(max_y);
            ltrace!(section, scroll_offset, min_y, max_y, y, "pin header");
            *attrs = LayoutAttributes {
                frame: attrs.frame.with_y(y),
                z_index: self.options.header_z_index,
                ..*attrs
            };
        }

        ldebug!(
            total = out.len(),
            forced_headers = forced,
            scroll_offset,
            "sticky layout pass"
        );
    }

    /// Computes the attributes for one pass described by a viewport/scroll
    /// snapshot. The query rect is the viewport's visible content rect.
    pub fn layout_pass(&self, frame: FrameState) -> Vec<LayoutAttributes> {
        self.layout_attributes_in_rect(frame.visible_rect(), frame.scroll.offset)
    }

    /// The `[min_y, max_y]` interval the header of `section` is clamped to.
    ///
    /// `min_y` is one header height above the section's first item and
    /// `max_y` one header height above the section's last item's bottom edge.
    /// Returns `None` when the section is empty, has no header, or a default
    /// frame lookup fails.
    pub fn header_pin_range(&self, section: usize) -> Option<(i64, i64)> {
        let count = self.source.item_count(section);
        if count == 0 {
            return None;
        }
        let header = self.source.header_attributes(section)?;
        let first = self.source.item_frame(IndexPath::new(section, 0))?;
        let last = self.source.item_frame(IndexPath::new(section, count - 1))?;
        let height = header.frame.height as i64;
        Some((first.min_y() - height, last.max_y() - height))
    }

    /// Whether a viewport bounds change invalidates previously computed
    /// positions.
    ///
    /// Always `true`: header positions are a pure function of the current
    /// scroll offset, so every scroll tick must trigger a fresh pass.
    pub fn should_invalidate_for_bounds_change(&self, _new_bounds: Rect) -> bool {
        true
    }
}

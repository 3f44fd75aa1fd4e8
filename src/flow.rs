use alloc::vec::Vec;

use crate::{IndexPath, LayoutAttributes, LayoutSource, Rect};

/// Stacking order `FlowLayout` gives headers at rest, above sibling cells
/// (which sit at 0) but below anything the positioner pins.
const RESTING_HEADER_Z_INDEX: i32 = 1;

/// Configuration for [`FlowLayout`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowOptions {
    /// Content width; every element spans the full width.
    pub width: u32,
    /// Space between consecutive items of a section.
    pub item_gap: u32,
    /// Space between consecutive sections.
    pub section_gap: u32,
}

impl FlowOptions {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn with_item_gap(mut self, item_gap: u32) -> Self {
        self.item_gap = item_gap;
        self
    }

    pub fn with_section_gap(mut self, section_gap: u32) -> Self {
        self.section_gap = section_gap;
        self
    }
}

/// Declarative description of one section fed to [`FlowLayout::new`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowSection {
    /// Height of the section header, or `None` for a headerless section.
    pub header_height: Option<u32>,
    /// Heights of the section's items, in order.
    pub item_heights: Vec<u32>,
}

impl FlowSection {
    pub fn new(header_height: Option<u32>, item_heights: Vec<u32>) -> Self {
        Self {
            header_height,
            item_heights,
        }
    }
}

/// Precomputed geometry of one section.
#[derive(Clone, Debug)]
struct SectionGeometry {
    header: Option<Rect>,
    items: Vec<Rect>,
    /// Top of the section's first element.
    start_y: i64,
    /// Bottom of the section's last element.
    end_y: i64,
}

/// A minimal vertical flow layout: sections stacked top to bottom, each an
/// optional header followed by full-width items.
///
/// This is the crate's reference [`LayoutSource`]: it supplies the default
/// (un-stuck) geometry a [`crate::StickyHeaderPositioner`] decorates. All
/// frames are computed once at construction; queries binary-search the
/// precomputed offsets.
///
/// An empty section never produces a header, even when `header_height` is
/// set.
#[derive(Clone, Debug)]
pub struct FlowLayout {
    options: FlowOptions,
    sections: Vec<SectionGeometry>,
    content_height: i64,
}

impl FlowLayout {
    pub fn new(options: FlowOptions, sections: impl IntoIterator<Item = FlowSection>) -> Self {
        let width = options.width;
        let item_gap = options.item_gap as i64;
        let mut geometry = Vec::new();
        let mut y = 0i64;
        let mut first = true;

        for spec in sections {
            if !first {
                y += options.section_gap as i64;
            }
            first = false;

            let start_y = y;
            let header = match spec.header_height {
                Some(h) if !spec.item_heights.is_empty() => {
                    let frame = Rect::new(0, y, width, h);
                    y += h as i64;
                    Some(frame)
                }
                _ => None,
            };

            let mut items = Vec::with_capacity(spec.item_heights.len());
            for (i, &h) in spec.item_heights.iter().enumerate() {
                if i > 0 {
                    y += item_gap;
                }
                items.push(Rect::new(0, y, width, h));
                y += h as i64;
            }

            geometry.push(SectionGeometry {
                header,
                items,
                start_y,
                end_y: y,
            });
        }

        ldebug!(
            sections = geometry.len(),
            content_height = y,
            "FlowLayout::new"
        );
        Self {
            options,
            sections: geometry,
            content_height: y,
        }
    }

    pub fn options(&self) -> &FlowOptions {
        &self.options
    }

    /// Total height of the laid-out content.
    pub fn content_height(&self) -> i64 {
        self.content_height
    }

    /// Content size as `(width, height)`.
    pub fn content_size(&self) -> (u32, i64) {
        (self.options.width, self.content_height)
    }

    /// The largest scroll offset that still shows a full viewport of content.
    pub fn max_scroll_offset(&self, viewport_height: u32) -> i64 {
        (self.content_height - viewport_height as i64).max(0)
    }

    /// Index of the first section whose bottom edge is below `y`.
    fn first_section_at(&self, y: i64) -> usize {
        self.sections.partition_point(|s| s.end_y <= y)
    }
}

impl LayoutSource for FlowLayout {
    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, |s| s.items.len())
    }

    fn item_attributes(&self, index_path: IndexPath) -> Option<LayoutAttributes> {
        let frame = *self
            .sections
            .get(index_path.section)?
            .items
            .get(index_path.item)?;
        Some(LayoutAttributes::cell(index_path, frame))
    }

    fn header_attributes(&self, section: usize) -> Option<LayoutAttributes> {
        let frame = self.sections.get(section)?.header?;
        Some(LayoutAttributes::header(
            section,
            frame,
            RESTING_HEADER_Z_INDEX,
        ))
    }

    fn for_each_in_rect(&self, rect: Rect, f: &mut dyn FnMut(LayoutAttributes)) {
        if rect.is_empty() {
            return;
        }

        for section in self.first_section_at(rect.min_y())..self.sections.len() {
            let geometry = &self.sections[section];
            if geometry.start_y >= rect.max_y() {
                break;
            }

            if let Some(frame) = geometry.header {
                if frame.intersects(&rect) {
                    f(LayoutAttributes::header(
                        section,
                        frame,
                        RESTING_HEADER_Z_INDEX,
                    ));
                }
            }

            let first = geometry.items.partition_point(|r| r.max_y() <= rect.min_y());
            for (item, frame) in geometry.items.iter().enumerate().skip(first) {
                if frame.min_y() >= rect.max_y() {
                    break;
                }
                if frame.intersects(&rect) {
                    f(LayoutAttributes::cell(
                        IndexPath::new(section, item),
                        *frame,
                    ));
                }
            }
        }
    }
}

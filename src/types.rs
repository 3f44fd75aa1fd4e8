/// Default stacking order assigned to sticky headers.
///
/// Ordinary cells sit at (or near) zero, so any positive value works; 99 keeps
/// headers above cells even when a source hands out small positive z-indexes
/// of its own.
pub const DEFAULT_HEADER_Z_INDEX: i32 = 99;

/// An axis-aligned rectangle in content coordinates.
///
/// Origins are signed: the sticky clamp range extends one header height above
/// the first item of a section, and scroll offsets go negative during
/// overscroll. Extents are unsigned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top edge.
    pub const fn min_y(&self) -> i64 {
        self.y
    }

    /// Bottom edge (exclusive).
    pub const fn max_y(&self) -> i64 {
        self.y + self.height as i64
    }

    pub const fn min_x(&self) -> i64 {
        self.x
    }

    pub const fn max_x(&self) -> i64 {
        self.x + self.width as i64
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the two rectangles overlap in both axes.
    ///
    /// Empty rectangles intersect nothing.
    pub const fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }

    /// Returns a copy with the y-origin replaced.
    pub const fn with_y(mut self, y: i64) -> Self {
        self.y = y;
        self
    }
}

/// Identifies one element inside a sectioned list.
///
/// Sections are zero-based and contiguous. Headers use `item == 0` by
/// convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexPath {
    pub section: usize,
    pub item: usize,
}

impl IndexPath {
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }

    /// The index path a section header is addressed by.
    pub const fn header(section: usize) -> Self {
        Self { section, item: 0 }
    }
}

/// The category of a laid-out element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    /// An ordinary item cell.
    Cell,
    /// A section header.
    Header,
}

/// Layout attributes for one element: where it sits and how it stacks.
///
/// This is an immutable value type. The positioner returns newly built
/// records instead of mutating shared instances, so attributes handed out by
/// a [`crate::LayoutSource`] are never aliased or written through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutAttributes {
    pub index_path: IndexPath,
    pub kind: ElementKind,
    pub frame: Rect,
    pub z_index: i32,
}

impl LayoutAttributes {
    /// Attributes for a cell at its default position.
    pub const fn cell(index_path: IndexPath, frame: Rect) -> Self {
        Self {
            index_path,
            kind: ElementKind::Cell,
            frame,
            z_index: 0,
        }
    }

    /// Attributes for a section header at its default (resting) position.
    pub const fn header(section: usize, frame: Rect, z_index: i32) -> Self {
        Self {
            index_path: IndexPath::header(section),
            kind: ElementKind::Header,
            frame,
            z_index,
        }
    }

    pub const fn is_header(&self) -> bool {
        matches!(self.kind, ElementKind::Header)
    }

    pub const fn is_cell(&self) -> bool {
        matches!(self.kind, ElementKind::Cell)
    }
}

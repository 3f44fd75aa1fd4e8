use crate::Rect;

/// A lightweight, serializable snapshot of the viewport geometry.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub width: u32,
    pub height: u32,
}

/// A lightweight, serializable snapshot of the scroll state.
///
/// `offset` is the content-space y-coordinate of the viewport's top edge. It
/// can be negative while the host is overscrolled above the content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: i64,
}

/// A combined snapshot of viewport + scroll state: everything one layout pass
/// consumes besides the base geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub viewport: ViewportState,
    pub scroll: ScrollState,
}

impl FrameState {
    pub const fn new(width: u32, height: u32, offset: i64) -> Self {
        Self {
            viewport: ViewportState { width, height },
            scroll: ScrollState { offset },
        }
    }

    /// The content rect currently covered by the viewport, i.e. the query
    /// rect for this pass.
    pub const fn visible_rect(&self) -> Rect {
        Rect::new(
            0,
            self.scroll.offset,
            self.viewport.width,
            self.viewport.height,
        )
    }
}

use crate::types::DEFAULT_HEADER_Z_INDEX;

/// Configuration for [`crate::StickyHeaderPositioner`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionerOptions {
    /// Enables/disables sticky positioning. When disabled, queries pass the
    /// base layout result through unchanged.
    pub enabled: bool,

    /// Stacking order assigned to every header the positioner touches.
    ///
    /// Must exceed the z-index of any ordinary cell so headers render above
    /// the cells scrolling beneath them.
    pub header_z_index: i32,
}

impl Default for PositionerOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            header_z_index: DEFAULT_HEADER_Z_INDEX,
        }
    }
}

impl PositionerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_header_z_index(mut self, header_z_index: i32) -> Self {
        self.header_z_index = header_z_index;
        self
    }
}

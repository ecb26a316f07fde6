/// Controls how [`crate::render`] draws a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Characters per grid column, including the link to the east neighbor.
    pub cell_width: usize,
    /// Text lines per grid row. Lines after the first carry south links.
    pub cell_height: usize,
    /// Prefix for the label of the highlighted room.
    pub marker: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_width: 6,
            cell_height: 2,
            marker: '@',
        }
    }
}

impl RenderConfig {
    /// Set the column width. Values below 2 are raised to 2.
    pub fn with_cell_width(mut self, width: usize) -> Self {
        self.cell_width = width.max(2);
        self
    }

    /// Set the row height. Values below 1 are raised to 1.
    pub fn with_cell_height(mut self, height: usize) -> Self {
        self.cell_height = height.max(1);
        self
    }

    /// Set the highlight marker.
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }
}

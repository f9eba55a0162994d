//! Inline CSS for the schedule table cells.

/// Style parameters interpolated into the `style` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    pub date_column_width: String,
    pub content_column_width: String,
    pub cell_padding: String,
    pub border_color: String,
    pub header_bg_color: String,
    pub border_style: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            date_column_width: "25%".to_string(),
            content_column_width: "75%".to_string(),
            cell_padding: "15px".to_string(),
            border_color: "#E0E0E0".to_string(),
            header_bg_color: "#B8C5D9".to_string(),
            border_style: "1px solid".to_string(),
        }
    }
}

impl StyleConfig {
    /// Style for the `<th>` date cell.
    pub fn date_cell_style(&self) -> String {
        format!(
            "width: {};\n    text-align: left;\n    background-color: {};\n    padding: {};\n    border: {} {}",
            self.date_column_width,
            self.header_bg_color,
            self.cell_padding,
            self.border_style,
            self.border_color,
        )
    }

    /// Style for the `<td>` content cell.
    pub fn content_cell_style(&self) -> String {
        format!(
            "width: {};\n    padding: {};\n    border: {} {}",
            self.content_column_width, self.cell_padding, self.border_style, self.border_color,
        )
    }
}

//! Shared print-sheet specification models.

////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Cell format specification for tag text lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecTagCellFormat {
    /// Font family name.
    pub font_name: Option<String>,
    /// Font size in points.
    pub font_size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,
    /// Italic style.
    pub italic: Option<bool>,

    /// Horizontal alignment.
    pub align: Option<String>,
    /// Vertical alignment.
    pub valign: Option<String>,
    /// Border style for all sides.
    pub border: Option<i64>,
    /// Text wrap.
    pub text_wrap: Option<bool>,

    /// Top border override.
    pub top: Option<i64>,
    /// Bottom border override.
    pub bottom: Option<i64>,
    /// Left border override.
    pub left: Option<i64>,
    /// Right border override.
    pub right: Option<i64>,

    /// Background fill color.
    pub bg_color: Option<String>,
    /// Font color.
    pub font_color: Option<String>,
}

impl SpecTagCellFormat {
    /// Return a new format by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecTagCellFormat) -> SpecTagCellFormat {
        self.merge(&patch)
    }

    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecTagCellFormat) -> SpecTagCellFormat {
        SpecTagCellFormat {
            font_name: other.font_name.clone().or_else(|| self.font_name.clone()),
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            italic: other.italic.or(self.italic),
            align: other.align.clone().or_else(|| self.align.clone()),
            valign: other.valign.clone().or_else(|| self.valign.clone()),
            border: other.border.or(self.border),
            text_wrap: other.text_wrap.or(self.text_wrap),
            top: other.top.or(self.top),
            bottom: other.bottom.or(self.bottom),
            left: other.left.or(self.left),
            right: other.right.or(self.right),
            bg_color: other.bg_color.clone().or_else(|| self.bg_color.clone()),
            font_color: other.font_color.clone().or_else(|| self.font_color.clone()),
        }
    }
}

/// Border tuple for top/bottom/left/right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecCellBorder {
    /// Top border style.
    pub top: i64,
    /// Bottom border style.
    pub bottom: i64,
    /// Left border style.
    pub left: i64,
    /// Right border style.
    pub right: i64,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetLayoutSpecification

/// Tag grid geometry for one printed sheet.
///
/// A tag block spans one worksheet column and
/// [`crate::conf::N_LINES_PER_TAG`] worksheet rows; spacer rows and gutter
/// columns separate neighboring blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecSheetLayout {
    /// Tag blocks per grid row.
    pub n_tag_cols: usize,
    /// Tag block rows per sheet.
    pub n_tag_rows: usize,
    /// Blank worksheet rows between vertically adjacent blocks.
    pub n_rows_spacer: usize,
    /// Blank worksheet columns between horizontally adjacent blocks.
    pub n_cols_gutter: usize,
    /// Width of a tag column in character units.
    pub width_col_tag: f64,
    /// Width of a gutter column in character units.
    pub width_col_gutter: f64,
    /// Height of the name line in points.
    pub height_row_name: f64,
    /// Height of a detail line in points.
    pub height_row_detail: f64,
}

impl Default for SpecSheetLayout {
    fn default() -> Self {
        Self {
            n_tag_cols: 2,
            n_tag_rows: 3,
            n_rows_spacer: 1,
            n_cols_gutter: 1,
            width_col_tag: 42.0,
            width_col_gutter: 4.0,
            height_row_name: 34.0,
            height_row_detail: 20.0,
        }
    }
}

impl SpecSheetLayout {
    /// Tag slots available on one sheet.
    pub fn capacity(&self) -> usize {
        self.n_tag_cols * self.n_tag_rows
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Per-write call report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecRenderReport {
    /// Actual worksheet names produced by the write call, in page order.
    pub sheets: Vec<String>,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecRenderReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }

    /// Number of worksheets produced.
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_merge_prefers_right_side_values() {
        let fmt_base = SpecTagCellFormat {
            font_name: Some("Arial".to_string()),
            font_size: Some(11),
            bold: Some(false),
            ..Default::default()
        };
        let fmt_merged = fmt_base.with_(SpecTagCellFormat {
            font_size: Some(18),
            bold: Some(true),
            top: Some(1),
            ..Default::default()
        });

        assert_eq!(fmt_merged.font_name.as_deref(), Some("Arial"));
        assert_eq!(fmt_merged.font_size, Some(18));
        assert_eq!(fmt_merged.bold, Some(true));
        assert_eq!(fmt_merged.top, Some(1));
        assert_eq!(fmt_merged.bottom, None);
    }

    #[test]
    fn default_layout_capacity_is_six() {
        assert_eq!(SpecSheetLayout::default().capacity(), 6);
    }
}

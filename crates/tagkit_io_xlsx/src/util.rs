//! Stateless helpers for grid geometry, tag text, and sheet naming.

use tagkit_core::spec::SpecNameTag;

use crate::conf::{N_LEN_EXCEL_SHEET_NAME_MAX, N_LINES_PER_TAG, TUP_EXCEL_ILLEGAL};
use crate::spec::{SpecCellBorder, SpecSheetLayout};

////////////////////////////////////////////////////////////////////////////////
// #region TagContent

/// Derive the fixed text lines of one tag block, top to bottom.
pub fn derive_tag_lines(tag: &SpecNameTag) -> [String; N_LINES_PER_TAG] {
    [
        tag.name.clone(),
        tag.activity.clone(),
        format!("Room #{}", tag.activity_room),
        format!("Homeroom: {}", tag.homeroom),
        format!("Grade: {}  Room #{}", tag.grade, tag.class_room),
    ]
}

/// Plan per-line border overrides so a block reads as one outlined tag.
pub fn plan_tag_line_borders(n_lines: usize) -> Vec<SpecCellBorder> {
    (0..n_lines)
        .map(|n_idx_line| SpecCellBorder {
            top: if n_idx_line == 0 { 1 } else { 0 },
            bottom: if n_idx_line + 1 == n_lines { 1 } else { 0 },
            left: 1,
            right: 1,
        })
        .collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region GridGeometry

/// Validate layout dimensions before any worksheet is touched.
pub fn validate_sheet_layout(layout: &SpecSheetLayout) -> Result<(), String> {
    if layout.n_tag_cols == 0 {
        return Err("layout.n_tag_cols must be >= 1.".to_string());
    }
    if layout.n_tag_rows == 0 {
        return Err("layout.n_tag_rows must be >= 1.".to_string());
    }
    if layout.width_col_tag <= 0.0 {
        return Err("layout.width_col_tag must be > 0.".to_string());
    }
    if layout.width_col_gutter < 0.0 {
        return Err("layout.width_col_gutter must be >= 0.".to_string());
    }
    if layout.height_row_name <= 0.0 || layout.height_row_detail <= 0.0 {
        return Err("layout row heights must be > 0.".to_string());
    }
    Ok(())
}

/// Worksheet `(row, col)` anchor of slot `n_idx_slot` (its name line).
///
/// Slots fill left-to-right, then top-to-bottom.
pub fn derive_tag_anchor(n_idx_slot: usize, layout: &SpecSheetLayout) -> (usize, usize) {
    let n_idx_grid_row = n_idx_slot / layout.n_tag_cols;
    let n_idx_grid_col = n_idx_slot % layout.n_tag_cols;

    let n_row_anchor = n_idx_grid_row * (N_LINES_PER_TAG + layout.n_rows_spacer);
    let n_col_anchor = n_idx_grid_col * (1 + layout.n_cols_gutter);
    (n_row_anchor, n_col_anchor)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars and trim to a valid Excel sheet name.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

/// Create suffixed sheet name (`base_1`, `base_2`, ...), respecting length cap.
pub fn create_sheet_identifier(base_name: &str, part_idx_1based: usize) -> String {
    let c_sheet_name_suffix = format!("_{part_idx_1based}");
    let n_len_base_name_max = N_LEN_EXCEL_SHEET_NAME_MAX.saturating_sub(c_sheet_name_suffix.len());

    let c_sheet_name_base: String = base_name
        .chars()
        .take(usize::max(1, n_len_base_name_max))
        .collect();

    format!("{c_sheet_name_base}{c_sheet_name_suffix}")
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

//! `tagkit_io_xlsx` v1:
//! Rust-side print-sheet writer kernel for name-tag pages.
//!
//! Architecture:
//! - `conf`   : constants and default presets
//! - `spec`   : format/layout/report models
//! - `util`   : pure grid and naming helpers
//! - `writer` : workbook writer kernel
pub mod conf;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    C_SHEET_NAME_BASE_DEFAULT, N_LEN_EXCEL_SHEET_NAME_MAX, N_LINES_PER_TAG, N_PAPER_SIZE_A4,
    TUP_EXCEL_ILLEGAL, derive_default_sheet_layout, derive_default_tag_formats,
};
pub use spec::{SpecCellBorder, SpecRenderReport, SpecSheetLayout, SpecTagCellFormat};
pub use util::{
    create_sheet_identifier, derive_tag_anchor, derive_tag_lines, plan_tag_line_borders,
    sanitize_sheet_name, validate_sheet_layout,
};
pub use writer::TagSheetWriter;

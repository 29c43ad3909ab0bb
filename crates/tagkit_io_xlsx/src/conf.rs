//! Sheet constants and default preset factories.

use std::collections::BTreeMap;

use crate::spec::{SpecSheetLayout, SpecTagCellFormat};

/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];

/// Text lines rendered per tag block, top to bottom.
pub const N_LINES_PER_TAG: usize = 5;
/// Paper size code for A4 in the workbook page setup.
pub const N_PAPER_SIZE_A4: u8 = 9;
/// Base worksheet name before per-page suffixing.
pub const C_SHEET_NAME_BASE_DEFAULT: &str = "Tags";

/// Build default named cell formats used by [`crate::writer::TagSheetWriter`].
///
/// `name` is the headline line of a tag block; `detail` covers the four
/// descriptive lines below it.
pub fn derive_default_tag_formats() -> BTreeMap<String, SpecTagCellFormat> {
    let cfg_base_fmt_spec = SpecTagCellFormat {
        font_name: Some("Arial".to_string()),
        font_size: Some(11),
        align: Some("center".to_string()),
        valign: Some("vcenter".to_string()),
        ..Default::default()
    };

    let mut dict_fmt = BTreeMap::new();
    dict_fmt.insert(
        "name".to_string(),
        cfg_base_fmt_spec.with_(SpecTagCellFormat {
            font_size: Some(18),
            bold: Some(true),
            ..Default::default()
        }),
    );
    dict_fmt.insert("detail".to_string(), cfg_base_fmt_spec);

    dict_fmt
}

/// Build the default 2x3 tag grid layout.
pub fn derive_default_sheet_layout() -> SpecSheetLayout {
    SpecSheetLayout::default()
}

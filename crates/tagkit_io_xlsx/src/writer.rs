//! Workbook writer kernel that renders tag pages into print-ready sheets.

use std::collections::BTreeSet;
use std::path::PathBuf;

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use tagkit_core::spec::SpecTagPage;

use crate::conf::{N_LEN_EXCEL_SHEET_NAME_MAX, N_LINES_PER_TAG, N_PAPER_SIZE_A4};
use crate::spec::{SpecRenderReport, SpecSheetLayout, SpecTagCellFormat};
use crate::util::{
    create_sheet_identifier, derive_tag_anchor, derive_tag_lines, plan_tag_line_borders,
    sanitize_sheet_name, validate_sheet_layout,
};

/// Stateful workbook writer.
///
/// One worksheet is emitted per tag page; the workbook is buffered in
/// memory until [`Self::close`] is called.
pub struct TagSheetWriter {
    path_file_out: PathBuf,
    workbook: Workbook,
    fmt_name: SpecTagCellFormat,
    fmt_detail: SpecTagCellFormat,
    layout: SpecSheetLayout,
    set_sheet_names_existing: BTreeSet<String>,
    l_reports: Vec<SpecRenderReport>,
    if_closed: bool,
}

impl TagSheetWriter {
    /// Create writer bound to output path, line formats, and grid layout.
    pub fn new(
        path_file_out: PathBuf,
        fmt_name: SpecTagCellFormat,
        fmt_detail: SpecTagCellFormat,
        layout: SpecSheetLayout,
    ) -> Self {
        Self {
            path_file_out,
            workbook: Workbook::new(),
            fmt_name,
            fmt_detail,
            layout,
            set_sheet_names_existing: BTreeSet::new(),
            l_reports: Vec::new(),
            if_closed: false,
        }
    }

    /// Return output file path as string.
    pub fn file_out(&self) -> String {
        self.path_file_out.to_string_lossy().to_string()
    }

    /// Return immutable snapshot of per-call write reports.
    pub fn report(&self) -> Vec<SpecRenderReport> {
        self.l_reports.clone()
    }

    /// Flush workbook to disk. Idempotent.
    pub fn close(&mut self) -> Result<(), String> {
        if self.if_closed {
            return Ok(());
        }
        self.workbook
            .save(&self.path_file_out)
            .map_err(derive_xlsx_error_text)?;
        self.if_closed = true;
        Ok(())
    }

    /// Write one worksheet per page, each a bordered grid of tag blocks.
    ///
    /// Slots beyond a page's record count render as blank outlined blocks.
    pub fn write_pages(
        &mut self,
        l_pages: &[SpecTagPage],
        sheet_name_base: &str,
    ) -> Result<(), String> {
        if self.if_closed {
            return Err("Cannot write after close().".to_string());
        }
        validate_sheet_layout(&self.layout)?;

        let layout = self.layout.clone();
        let n_capacity = layout.capacity();
        for (n_idx_page, page) in l_pages.iter().enumerate() {
            if page.tag_count() > n_capacity {
                return Err(format!(
                    "Page {} holds {} tags, layout capacity is {n_capacity}.",
                    n_idx_page + 1,
                    page.tag_count()
                ));
            }
        }

        let mut report = SpecRenderReport::default();
        if l_pages.is_empty() {
            report.warn("No pages to render; workbook receives no tag sheets.");
            self.l_reports.push(report);
            return Ok(());
        }

        // One pre-built format per tag line, border overlays applied.
        let l_fmt_lines: Vec<Format> = plan_tag_line_borders(N_LINES_PER_TAG)
            .iter()
            .enumerate()
            .map(|(n_idx_line, border)| {
                let fmt_base = if n_idx_line == 0 {
                    &self.fmt_name
                } else {
                    &self.fmt_detail
                };
                derive_rust_xlsx_format(&fmt_base.merge(&SpecTagCellFormat {
                    top: Some(border.top),
                    bottom: Some(border.bottom),
                    left: Some(border.left),
                    right: Some(border.right),
                    ..Default::default()
                }))
            })
            .collect();

        let c_sheet_name_base = sanitize_sheet_name(sheet_name_base, "_");
        let n_pages_total = l_pages.len();

        for (n_idx_page, page) in l_pages.iter().enumerate() {
            let c_sheet_name_page = if n_pages_total == 1 {
                c_sheet_name_base.clone()
            } else {
                create_sheet_identifier(&c_sheet_name_base, n_idx_page + 1)
            };
            let c_sheet_name_unique = self.derive_unique_sheet_name(&c_sheet_name_page);

            let worksheet = self.workbook.add_worksheet();
            worksheet
                .set_name(&c_sheet_name_unique)
                .map_err(derive_xlsx_error_text)?;
            worksheet.set_paper_size(N_PAPER_SIZE_A4);
            worksheet.set_portrait();
            worksheet.set_footer(format!("&CPage {} of {n_pages_total}", n_idx_page + 1));

            let n_ncols_span = layout.n_tag_cols + (layout.n_tag_cols - 1) * layout.n_cols_gutter;
            for n_idx_col in 0..n_ncols_span {
                let if_is_tag_col = n_idx_col % (1 + layout.n_cols_gutter) == 0;
                let n_width = if if_is_tag_col {
                    layout.width_col_tag
                } else {
                    layout.width_col_gutter
                };
                worksheet
                    .set_column_width(cast_col_num(n_idx_col)?, n_width)
                    .map_err(derive_xlsx_error_text)?;
            }

            for n_idx_grid_row in 0..layout.n_tag_rows {
                let n_row_anchor = n_idx_grid_row * (N_LINES_PER_TAG + layout.n_rows_spacer);
                worksheet
                    .set_row_height(cast_row_num(n_row_anchor)?, layout.height_row_name)
                    .map_err(derive_xlsx_error_text)?;
                for n_idx_line in 1..N_LINES_PER_TAG {
                    worksheet
                        .set_row_height(
                            cast_row_num(n_row_anchor + n_idx_line)?,
                            layout.height_row_detail,
                        )
                        .map_err(derive_xlsx_error_text)?;
                }
            }

            for n_idx_slot in 0..n_capacity {
                let (n_row_anchor, n_col_anchor) = derive_tag_anchor(n_idx_slot, &layout);

                match page.slot(n_idx_slot) {
                    Some(tag) => {
                        let l_lines = derive_tag_lines(tag);
                        for (n_idx_line, c_line) in l_lines.iter().enumerate() {
                            worksheet
                                .write_string_with_format(
                                    cast_row_num(n_row_anchor + n_idx_line)?,
                                    cast_col_num(n_col_anchor)?,
                                    c_line.as_str(),
                                    &l_fmt_lines[n_idx_line],
                                )
                                .map_err(derive_xlsx_error_text)?;
                        }
                    }
                    None => {
                        for n_idx_line in 0..N_LINES_PER_TAG {
                            worksheet
                                .write_blank(
                                    cast_row_num(n_row_anchor + n_idx_line)?,
                                    cast_col_num(n_col_anchor)?,
                                    &l_fmt_lines[n_idx_line],
                                )
                                .map_err(derive_xlsx_error_text)?;
                        }
                    }
                }
            }

            report.sheets.push(c_sheet_name_unique);
        }

        self.l_reports.push(report);
        Ok(())
    }

    fn derive_unique_sheet_name(&mut self, name: &str) -> String {
        if !self.set_sheet_names_existing.contains(name) {
            self.set_sheet_names_existing.insert(name.to_string());
            return name.to_string();
        }

        let base_name: String = name
            .chars()
            .take(usize::max(1, N_LEN_EXCEL_SHEET_NAME_MAX - 3))
            .collect();

        let mut n_idx = 2usize;
        loop {
            let candidate: String = format!("{base_name}__{n_idx}")
                .chars()
                .take(N_LEN_EXCEL_SHEET_NAME_MAX)
                .collect();
            if !self.set_sheet_names_existing.contains(&candidate) {
                self.set_sheet_names_existing.insert(candidate.clone());
                return candidate;
            }
            n_idx += 1;
        }
    }
}

fn derive_rust_xlsx_format(spec: &SpecTagCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = &spec.font_name {
        format = format.set_font_name(val.clone());
    }
    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }
    if spec.italic.unwrap_or(false) {
        format = format.set_italic();
    }

    if let Some(val) = &spec.align
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }
    if let Some(val) = &spec.valign
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }

    if let Some(val) = &spec.bg_color {
        format = format.set_background_color(val.as_str());
    }
    if let Some(val) = &spec.font_color {
        format = format.set_font_color(val.as_str());
    }

    if let Some(val) = spec.border {
        format = format.set_border(derive_format_border(val));
    }
    if let Some(val) = spec.top {
        format = format.set_border_top(derive_format_border(val));
    }
    if let Some(val) = spec.bottom {
        format = format.set_border_bottom(derive_format_border(val));
    }
    if let Some(val) = spec.left {
        format = format.set_border_left(derive_format_border(val));
    }
    if let Some(val) = spec.right {
        format = format.set_border_right(derive_format_border(val));
    }

    if spec.text_wrap.unwrap_or(false) {
        format = format.set_text_wrap();
    }

    format
}

fn derive_format_border(border: i64) -> FormatBorder {
    match border {
        1 => FormatBorder::Thin,
        2 => FormatBorder::Medium,
        _ => FormatBorder::None,
    }
}

fn derive_format_align(align: &str) -> Option<FormatAlign> {
    let value = align.trim().to_ascii_lowercase();
    match value.as_str() {
        "general" => Some(FormatAlign::General),
        "left" => Some(FormatAlign::Left),
        "center" => Some(FormatAlign::Center),
        "right" => Some(FormatAlign::Right),
        "top" => Some(FormatAlign::Top),
        "bottom" => Some(FormatAlign::Bottom),
        "vcenter" | "vertical_center" => Some(FormatAlign::VerticalCenter),
        _ => None,
    }
}

fn cast_row_num(value: usize) -> Result<u32, String> {
    u32::try_from(value).map_err(|_| format!("row index overflow: {value}"))
}

fn cast_col_num(value: usize) -> Result<u16, String> {
    u16::try_from(value).map_err(|_| format!("column index overflow: {value}"))
}

fn derive_xlsx_error_text(err: XlsxError) -> String {
    format!("xlsx write error: {err}")
}

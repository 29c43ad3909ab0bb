//! Pure parse and pagination routines for tab-separated name-tag data.

use crate::conf::{
    N_IDX_COL_ACTIVITY, N_IDX_COL_ACTIVITY_ROOM, N_IDX_COL_CLASS_ROOM, N_IDX_COL_FIRST_NAME,
    N_IDX_COL_GRADE, N_IDX_COL_HOMEROOM, N_IDX_COL_LAST_NAME, TUP_TSV_COLUMNS,
};
use crate::spec::{SpecNameTag, SpecParseReport, SpecTagPage};

////////////////////////////////////////////////////////////////////////////////
// #region ColumnMap

/// Minimum column count a fully-populated row carries (highest mapped index + 1).
pub fn calculate_required_column_count() -> usize {
    TUP_TSV_COLUMNS
        .iter()
        .map(|(_, n_idx)| n_idx + 1)
        .max()
        .unwrap_or(0)
}

fn _read_trimmed_column<'a>(l_cols: &[&'a str], n_idx: usize) -> &'a str {
    l_cols.get(n_idx).map(|c_col| c_col.trim()).unwrap_or("")
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region RecordParser

/// Join trimmed first/last name with a single space, then trim the result.
pub fn compose_tag_name(c_first_name: &str, c_last_name: &str) -> String {
    format!("{} {}", c_first_name.trim(), c_last_name.trim())
        .trim()
        .to_string()
}

/// Parse tab-separated input into ordered name-tag records.
///
/// The first non-blank line is discarded as a header. A row yields a record
/// iff its composed name is non-empty; every other defect degrades to a
/// warning or a recorded rejection in `report`. Never fails.
pub fn parse_name_tags(c_raw: &str, report: &mut SpecParseReport) -> Vec<SpecNameTag> {
    if c_raw.trim().is_empty() {
        return vec![];
    }

    let l_lines: Vec<&str> = c_raw
        .trim()
        .split('\n')
        .filter(|c_line| !c_line.trim().is_empty())
        .collect();

    if l_lines.len() < 2 {
        report.warn("Input must contain at least a header row and one data row.");
        log::warn!("tab-separated input rejected: header row and one data row required");
        return vec![];
    }

    let n_ncols_required = calculate_required_column_count();

    let mut l_tags = Vec::with_capacity(l_lines.len() - 1);
    for (n_idx_data, c_line) in l_lines[1..].iter().enumerate() {
        // Display numbering counts non-blank lines; the header is line 1.
        let n_line_display = n_idx_data + 2;

        let l_cols: Vec<&str> = c_line.split('\t').collect();
        if l_cols.len() < n_ncols_required {
            report.warn(format!(
                "Line {n_line_display}: insufficient columns (expected at least {n_ncols_required}, got {}).",
                l_cols.len()
            ));
        }

        let c_name = compose_tag_name(
            _read_trimmed_column(&l_cols, N_IDX_COL_FIRST_NAME),
            _read_trimmed_column(&l_cols, N_IDX_COL_LAST_NAME),
        );
        if c_name.is_empty() {
            report.reject(n_line_display, "Row has no usable name.");
            continue;
        }

        l_tags.push(SpecNameTag {
            name: c_name,
            grade: _read_trimmed_column(&l_cols, N_IDX_COL_GRADE).to_string(),
            class_room: _read_trimmed_column(&l_cols, N_IDX_COL_CLASS_ROOM).to_string(),
            homeroom: _read_trimmed_column(&l_cols, N_IDX_COL_HOMEROOM).to_string(),
            activity: _read_trimmed_column(&l_cols, N_IDX_COL_ACTIVITY).to_string(),
            activity_room: _read_trimmed_column(&l_cols, N_IDX_COL_ACTIVITY_ROOM).to_string(),
        });
    }

    if l_tags.is_empty() {
        report.warn("No valid name tag data found in input.");
        log::warn!("tab-separated input produced no records");
    }

    l_tags
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Paginator

/// Split records into consecutive pages of at most `n_tags_per_page` each.
///
/// Preserves input order; the last page may be short and is never padded
/// here. Empty input yields zero pages.
pub fn paginate_name_tags(
    tags: &[SpecNameTag],
    n_tags_per_page: usize,
) -> Result<Vec<SpecTagPage>, String> {
    if n_tags_per_page == 0 {
        return Err("n_tags_per_page must be >= 1.".to_string());
    }

    let mut l_pages = Vec::new();
    let mut n_cursor = 0;
    while n_cursor < tags.len() {
        let n_tags_this_page = usize::min(n_tags_per_page, tags.len() - n_cursor);
        l_pages.push(SpecTagPage {
            tags: tags[n_cursor..n_cursor + n_tags_this_page].to_vec(),
        });
        n_cursor += n_tags_this_page;
    }

    Ok(l_pages)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::{C_SAMPLE_TSV, N_TAGS_PER_PAGE_DEFAULT};

    fn _make_tags(n_count: usize) -> Vec<SpecNameTag> {
        (0..n_count)
            .map(|n_idx| SpecNameTag {
                name: format!("Person {n_idx}"),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn required_column_count_covers_highest_mapped_index() {
        assert_eq!(calculate_required_column_count(), 9);
    }

    #[test]
    fn column_map_matches_export_contract() {
        assert_eq!(
            TUP_TSV_COLUMNS,
            [
                ("first_name", 2),
                ("last_name", 3),
                ("grade", 4),
                ("class_room", 5),
                ("homeroom", 6),
                ("activity", 7),
                ("activity_room", 8),
            ]
        );
    }

    #[test]
    fn parse_degenerate_inputs_yield_no_records() {
        for c_raw in ["", "   ", "\n\n\n", " \t \n  ", "only one line"] {
            let mut report = SpecParseReport::default();
            assert_eq!(parse_name_tags(c_raw, &mut report), vec![]);
        }
    }

    #[test]
    fn parse_single_line_warns_about_missing_data_row() {
        let mut report = SpecParseReport::default();
        let l_tags = parse_name_tags("A\tB\tC\tD\tE\tF\tG\tH\tI", &mut report);

        assert!(l_tags.is_empty());
        assert_eq!(report.warning_count(), 1);
        assert!(report.warnings[0].contains("header row and one data row"));
    }

    #[test]
    fn parse_skips_header_and_keeps_row_order() {
        let c_raw = "h0\th1\th2\th3\th4\th5\th6\th7\th8\n\
                     1\t\tAda\tLovelace\t5\t21\tMs. A\tMath\t1\n\
                     2\t\tAlan\tTuring\t4\t15\tMr. B\tChess\t2\n\
                     3\t\tGrace\tHopper\t3\t12\tMs. C\tNavy\t3";
        let mut report = SpecParseReport::default();
        let l_tags = parse_name_tags(c_raw, &mut report);

        assert_eq!(l_tags.len(), 3);
        assert_eq!(l_tags[0].name, "Ada Lovelace");
        assert_eq!(l_tags[1].name, "Alan Turing");
        assert_eq!(l_tags[2].name, "Grace Hopper");
        assert_eq!(report.warning_count(), 0);
        assert_eq!(report.rejection_count(), 0);
    }

    #[test]
    fn parse_tolerates_blank_lines_and_crlf() {
        let c_raw = "h0\th1\th2\th3\th4\th5\th6\th7\th8\r\n\
                     \r\n\
                     1\t\tAda\tLovelace\t5\t21\tMs. A\tMath\t1\r\n\
                     \n";
        let mut report = SpecParseReport::default();
        let l_tags = parse_name_tags(c_raw, &mut report);

        assert_eq!(l_tags.len(), 1);
        assert_eq!(l_tags[0].name, "Ada Lovelace");
        assert_eq!(l_tags[0].activity_room, "1");
    }

    #[test]
    fn compose_tag_name_joins_and_trims() {
        assert_eq!(compose_tag_name("John", "Doe"), "John Doe");
        assert_eq!(compose_tag_name("  John  ", ""), "John");
        assert_eq!(compose_tag_name("", "  Doe "), "Doe");
        assert_eq!(compose_tag_name("", ""), "");
        assert_eq!(compose_tag_name("  ", "\t"), "");
    }

    #[test]
    fn parse_rejects_nameless_row_without_shifting_neighbors() {
        let c_raw = "h0\th1\th2\th3\th4\th5\th6\th7\th8\n\
                     1\t\tAda\tLovelace\t5\t21\tMs. A\tMath\t1\n\
                     2\t\t\t\t4\t15\tMr. B\tChess\t2\n\
                     3\t\tGrace\tHopper\t3\t12\tMs. C\tNavy\t3";
        let mut report = SpecParseReport::default();
        let l_tags = parse_name_tags(c_raw, &mut report);

        assert_eq!(l_tags.len(), 2);
        assert_eq!(l_tags[0].name, "Ada Lovelace");
        assert_eq!(l_tags[1].name, "Grace Hopper");
        assert_eq!(report.rejection_count(), 1);
        assert_eq!(report.rejections[0].num_line, 3);
    }

    #[test]
    fn parse_defaults_missing_trailing_columns_to_empty() {
        let c_raw = "h0\th1\th2\th3\n1\t\tJohn\tDoe";
        let mut report = SpecParseReport::default();
        let l_tags = parse_name_tags(c_raw, &mut report);

        assert_eq!(l_tags.len(), 1);
        let tag = &l_tags[0];
        assert_eq!(tag.name, "John Doe");
        assert_eq!(tag.grade, "");
        assert_eq!(tag.class_room, "");
        assert_eq!(tag.homeroom, "");
        assert_eq!(tag.activity, "");
        assert_eq!(tag.activity_room, "");

        // Short rows warn but are never rejected for width alone.
        assert_eq!(report.warning_count(), 1);
        assert!(report.warnings[0].contains("insufficient columns"));
        assert_eq!(report.rejection_count(), 0);
    }

    #[test]
    fn parse_full_row_end_to_end() {
        let c_raw = "A\tB\tC\tD\tE\tF\tG\tH\tI\n1\t\tJohn\tDoe\t5\t21\tMs. Smith\tArt\t3";
        let mut report = SpecParseReport::default();
        let l_tags = parse_name_tags(c_raw, &mut report);

        assert_eq!(
            l_tags,
            vec![SpecNameTag {
                name: "John Doe".to_string(),
                grade: "5".to_string(),
                class_room: "21".to_string(),
                homeroom: "Ms. Smith".to_string(),
                activity: "Art".to_string(),
                activity_room: "3".to_string(),
            }]
        );

        let l_pages = paginate_name_tags(&l_tags, 6).unwrap();
        assert_eq!(l_pages.len(), 1);
        assert_eq!(l_pages[0].tags, l_tags);
    }

    #[test]
    fn parse_is_idempotent() {
        let c_raw = "h0\th1\th2\th3\th4\th5\th6\th7\th8\n\
                     1\t\tAda\tLovelace\t5\t21\tMs. A\tMath\t1\n\
                     2\t\t\t\t4\t15\tMr. B\tChess\t2";
        let mut report_first = SpecParseReport::default();
        let mut report_second = SpecParseReport::default();

        assert_eq!(
            parse_name_tags(c_raw, &mut report_first),
            parse_name_tags(c_raw, &mut report_second)
        );
        assert_eq!(report_first, report_second);
    }

    #[test]
    fn parse_sample_data_yields_seven_records() {
        let mut report = SpecParseReport::default();
        let l_tags = parse_name_tags(C_SAMPLE_TSV, &mut report);

        assert_eq!(l_tags.len(), 7);
        assert_eq!(l_tags[0].name, "Zachary M.");
        assert_eq!(l_tags[0].homeroom, "Ms. Starks");
        assert_eq!(l_tags[6].name, "Sophia L.");
        assert_eq!(report.warning_count(), 0);

        let l_pages = paginate_name_tags(&l_tags, N_TAGS_PER_PAGE_DEFAULT).unwrap();
        assert_eq!(l_pages.len(), 2);
        assert_eq!(l_pages[0].tag_count(), 6);
        assert_eq!(l_pages[1].tag_count(), 1);
    }

    #[test]
    fn paginate_chunks_preserve_order() {
        let l_tags = _make_tags(13);
        let l_pages = paginate_name_tags(&l_tags, 6).unwrap();

        assert_eq!(
            l_pages.iter().map(SpecTagPage::tag_count).collect::<Vec<_>>(),
            vec![6, 6, 1]
        );
        let l_names_flat: Vec<&str> = l_pages
            .iter()
            .flat_map(|page| page.tags.iter().map(|tag| tag.name.as_str()))
            .collect();
        let l_names_input: Vec<&str> = l_tags.iter().map(|tag| tag.name.as_str()).collect();
        assert_eq!(l_names_flat, l_names_input);
    }

    #[test]
    fn paginate_empty_input_yields_zero_pages() {
        assert_eq!(paginate_name_tags(&[], 6).unwrap(), vec![]);
    }

    #[test]
    fn paginate_rejects_zero_page_size() {
        assert!(paginate_name_tags(&_make_tags(3), 0).is_err());
    }

    #[test]
    fn paginate_exact_multiple_has_no_trailing_empty_page() {
        let l_pages = paginate_name_tags(&_make_tags(12), 6).unwrap();
        assert_eq!(l_pages.len(), 2);
        assert_eq!(l_pages[1].tag_count(), 6);
    }
}

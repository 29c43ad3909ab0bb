//! Column map constants and bundled sample data.

/// Name tags laid out per printed page (2 columns x 3 rows).
pub const N_TAGS_PER_PAGE_DEFAULT: usize = 6;

/// Zero-based column holding the first name (spreadsheet column C).
pub const N_IDX_COL_FIRST_NAME: usize = 2;
/// Zero-based column holding the last name (spreadsheet column D).
pub const N_IDX_COL_LAST_NAME: usize = 3;
/// Zero-based column holding the grade level (spreadsheet column E).
pub const N_IDX_COL_GRADE: usize = 4;
/// Zero-based column holding the class room (spreadsheet column F).
pub const N_IDX_COL_CLASS_ROOM: usize = 5;
/// Zero-based column holding the homeroom teacher (spreadsheet column G).
pub const N_IDX_COL_HOMEROOM: usize = 6;
/// Zero-based column holding the activity name (spreadsheet column H).
pub const N_IDX_COL_ACTIVITY: usize = 7;
/// Zero-based column holding the activity room (spreadsheet column I).
pub const N_IDX_COL_ACTIVITY_ROOM: usize = 8;

/// Declarative field-name -> column-index map for the tab-separated contract.
///
/// Positions are fixed by the source export format and are never inferred
/// from the header row.
pub const TUP_TSV_COLUMNS: [(&str, usize); 7] = [
    ("first_name", N_IDX_COL_FIRST_NAME),
    ("last_name", N_IDX_COL_LAST_NAME),
    ("grade", N_IDX_COL_GRADE),
    ("class_room", N_IDX_COL_CLASS_ROOM),
    ("homeroom", N_IDX_COL_HOMEROOM),
    ("activity", N_IDX_COL_ACTIVITY),
    ("activity_room", N_IDX_COL_ACTIVITY_ROOM),
];

/// Sample tab-separated input for demonstration runs.
pub const C_SAMPLE_TSV: &str = "A\tB\tC\tD\tE\tF\tG\tH\tI\n\
1\t\tZachary\tM.\t5\t21\tMs. Starks\tSewing\t6\n\
2\t\tEmma\tS.\t4\t15\tMr. Johnson\tDrawing & Painting\t3\n\
3\t\tLiam\tW.\t3\t12\tMs. Chen\tCeramics\t8\n\
4\t\tOlivia\tR.\t5\t21\tMs. Starks\tPhotography\t5\n\
5\t\tNoah\tT.\t4\t18\tMrs. Davis\tWoodworking\t7\n\
6\t\tAva\tK.\t3\t10\tMr. Wilson\tDrawing & Painting\t3\n\
7\t\tSophia\tL.\t5\t22\tMs. Brown\tSewing\t6";

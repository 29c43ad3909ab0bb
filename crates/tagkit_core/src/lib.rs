//! `tagkit_core` v1:
//! Rust-side name-tag parsing kernel.
//!
//! Architecture:
//! - `conf` : column map constants and bundled sample data
//! - `spec` : record/page/report models
//! - `util` : pure parse and pagination functions
pub mod conf;
pub mod spec;
pub mod util;

pub use conf::{
    C_SAMPLE_TSV, N_IDX_COL_ACTIVITY, N_IDX_COL_ACTIVITY_ROOM, N_IDX_COL_CLASS_ROOM,
    N_IDX_COL_FIRST_NAME, N_IDX_COL_GRADE, N_IDX_COL_HOMEROOM, N_IDX_COL_LAST_NAME,
    N_TAGS_PER_PAGE_DEFAULT, TUP_TSV_COLUMNS,
};
pub use spec::{SpecNameTag, SpecParseReport, SpecRowRejection, SpecTagPage};
pub use util::{
    calculate_required_column_count, compose_tag_name, parse_name_tags, paginate_name_tags,
};

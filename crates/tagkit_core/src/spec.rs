//! Shared name-tag record, page, and report models.

use std::fmt;

////////////////////////////////////////////////////////////////////////////////
// #region RecordSpecification

/// One parsed person's printable name-tag data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecNameTag {
    /// Full display name; non-empty for every constructed record.
    pub name: String,
    /// Grade level.
    pub grade: String,
    /// Class room number.
    pub class_room: String,
    /// Homeroom teacher name.
    pub homeroom: String,
    /// Activity name.
    pub activity: String,
    /// Activity room number.
    pub activity_room: String,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region PageSpecification

/// Ordered group of records for one printed sheet.
///
/// Holds only the records that exist; padding the visual grid with empty
/// slots is the renderer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecTagPage {
    /// Records on this page, in original input order.
    pub tags: Vec<SpecNameTag>,
}

impl SpecTagPage {
    /// Record at slot `n_idx_slot`, `None` for an empty slot.
    pub fn slot(&self, n_idx_slot: usize) -> Option<&SpecNameTag> {
        self.tags.get(n_idx_slot)
    }

    /// Number of records on this page.
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// One rejected input row with its display line number and reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRowRejection {
    /// 1-based line number among non-blank lines (header is line 1).
    pub num_line: usize,
    /// User-facing rejection text.
    pub reason: String,
}

/// Per-parse-call diagnostics.
///
/// The record sequence is the primary result; nothing in this report ever
/// blocks or reorders it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecParseReport {
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
    /// Rows dropped without producing a record.
    pub rejections: Vec<SpecRowRejection>,
}

impl SpecParseReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }

    /// Record one dropped row.
    pub fn reject(&mut self, num_line: usize, reason: impl AsRef<str>) {
        self.rejections.push(SpecRowRejection {
            num_line,
            reason: reason.as_ref().to_string(),
        });
    }

    /// Number of collected warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Number of dropped rows.
    pub fn rejection_count(&self) -> usize {
        self.rejections.len()
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} warnings={} rejected={}",
            self.warning_count(),
            self.rejection_count()
        )
    }
}

impl fmt::Display for SpecParseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[PARSE]"))
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

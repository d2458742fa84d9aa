//! Pure view derivation. Referentially transparent, no side effects —
//! safe to re-run on every render or to memoize on inputs.

use std::borrow::Cow;

use chrono::{Local, NaiveDate};
use unicode_segmentation::UnicodeSegmentation;

use crate::model::task::TaskStatus;

/// Default description preview length in the task table
pub const DESCRIPTION_PREVIEW_LEN: usize = 50;

/// Fixed presentation tokens for a status value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub color_class: &'static str,
    pub icon: &'static str,
}

/// Badge tokens for each status. Total over the enum: an out-of-range
/// value is unrepresentable, not a runtime error.
pub fn status_badge(status: TaskStatus) -> StatusBadge {
    match status {
        TaskStatus::ToDo => StatusBadge {
            color_class: "bg-gray-100 text-gray-800",
            icon: "circle",
        },
        TaskStatus::InProgress => StatusBadge {
            color_class: "bg-blue-100 text-blue-800",
            icon: "clock",
        },
        TaskStatus::Done => StatusBadge {
            color_class: "bg-green-100 text-green-800",
            icon: "check-circle-2",
        },
    }
}

/// True iff the deadline (day granularity) is strictly before `today` and
/// the task isn't done. No deadline means never overdue.
pub fn is_overdue(deadline: Option<NaiveDate>, status: TaskStatus, today: NaiveDate) -> bool {
    match deadline {
        Some(deadline) => deadline < today && status != TaskStatus::Done,
        None => false,
    }
}

/// [`is_overdue`] against the local calendar date
pub fn is_overdue_now(deadline: Option<NaiveDate>, status: TaskStatus) -> bool {
    is_overdue(deadline, status, Local::now().date_naive())
}

/// First `max_len` graphemes plus "..." when the text is longer; the text
/// itself otherwise.
pub fn truncate(text: &str, max_len: usize) -> Cow<'_, str> {
    let mut graphemes = text.grapheme_indices(true);
    match graphemes.nth(max_len) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

/// "Sep 15, 2025" style date, as the task table renders deadlines
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

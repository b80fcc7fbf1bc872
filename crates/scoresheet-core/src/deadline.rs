//! Per-enrollment deadline formatting.

use scoresheet_model::ExamEnrollment;

use crate::locale::Localizer;
use crate::store::RecordStore;

/// Formatted submission deadline for one exam enrollment.
///
/// Anything but ENROLLED blanks the deadline regardless of any record
/// present. An enrolled student without a deadline record also yields an
/// empty string: the sheet shows the same blank as for not-enrolled rows
/// instead of failing the whole document over one missing record.
pub fn deadline_for(
    store: &impl RecordStore,
    locale: &impl Localizer,
    enrollment: &ExamEnrollment,
) -> String {
    if !store.enrollment_state(enrollment.id).is_enrolled() {
        return String::new();
    }
    match store.deadline(enrollment.id, enrollment.session) {
        Some(record) => record.effective().format(locale.date_format()).to_string(),
        None => String::new(),
    }
}

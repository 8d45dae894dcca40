//! Guard section validation (status markers).

use crate::schema::BuryConfig;

use super::helpers::validate_non_empty;

pub(crate) fn validate_guard(errors: &mut Vec<String>, config: &BuryConfig) {
    // An empty success marker would match every status; an empty warning
    // marker would match every buffer.
    validate_non_empty(errors, "guard.success_marker", &config.guard.success_marker);
    validate_non_empty(errors, "guard.warning_marker", &config.guard.warning_marker);

    if config.guard.success_marker == config.guard.warning_marker {
        errors.push(format!(
            "guard.success_marker and guard.warning_marker are both '{}'",
            config.guard.success_marker
        ));
    }
}

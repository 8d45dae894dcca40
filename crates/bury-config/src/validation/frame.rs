//! Frame section validation.

use crate::schema::BuryConfig;

use super::helpers::validate_range;

pub(crate) fn validate_frame(errors: &mut Vec<String>, config: &BuryConfig) {
    validate_range(
        errors,
        "frame.max_registers",
        config.frame.max_registers,
        1,
        256,
    );
    validate_range(errors, "frame.gap", config.frame.gap, 0, 20);
    validate_range(errors, "frame.columns", config.frame.columns, 20, 1000);
    validate_range(errors, "frame.lines", config.frame.lines, 5, 500);
}

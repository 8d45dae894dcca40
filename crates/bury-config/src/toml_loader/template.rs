//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Bury Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[guard]
# Master toggle. When off, compilation output is left alone.
enabled = true
# Record the window layout when the next compilation starts.
# save_windows_on_next_start = true
# A build counts as successful when its status contains this text...
# success_marker = "finished"
# ...and this text is not found in the output.
# warning_marker = "warning"
# "from_point" searches forward from point, "whole_buffer" searches everything.
# warning_scan = "from_point"
# notify_message = "Compilation successful."

[frame]
# max_registers = 16     # 1-256
# gap = 0                # 0-20
# columns = 160          # 20-1000
# lines = 48             # 5-500

[logging]
# level = "INFO"         # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}

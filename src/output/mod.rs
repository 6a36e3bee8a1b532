mod formatter;

pub use formatter::{format_report, format_rules, should_use_colors};

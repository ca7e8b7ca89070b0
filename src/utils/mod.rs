pub mod formatting;

pub use formatting::{count_label, escape_html, truncate_status};

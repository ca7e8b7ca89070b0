pub mod file_tab;
pub mod report_panel;
pub mod status_bar;
pub mod text_tab;

pub use file_tab::file_tab;
pub use report_panel::{loading_indicator, report_panel};
pub use status_bar::status_bar;
pub use text_tab::text_tab;

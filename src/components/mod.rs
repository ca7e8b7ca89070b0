pub mod segmented_toggle;

pub use segmented_toggle::tab_toggle;

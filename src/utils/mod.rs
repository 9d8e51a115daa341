// Utility functions
// Helper types for rendering listings

pub mod data_state;
pub mod format;

pub use data_state::DataState;
pub use format::{display_dir_name, format_size};

// UI Components
// This module contains all reusable UI components

pub mod breadcrumbs;
pub mod copy_link_button;
pub mod file_picker;
pub mod icons;
pub mod search_input;
pub mod upload_button;

pub use breadcrumbs::Breadcrumbs;
pub use copy_link_button::CopyLinkButton;
pub use file_picker::FilePicker;
pub use search_input::SearchInput;
pub use upload_button::UploadButton;

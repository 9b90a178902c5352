//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod document_picker;
mod flash_banner;
mod log_panel;
mod project_card;
mod project_modal;
mod selectors;
mod task_modal;
mod task_note_panel;
mod task_row;
mod user_search;

pub use delete_confirm_button::DeleteConfirmButton;
pub use document_picker::DocumentPicker;
pub use flash_banner::FlashBanner;
pub use log_panel::LogPanel;
pub use project_card::ProjectCard;
pub use project_modal::ProjectModal;
pub use selectors::{PrioritySelect, TaskStatusSelect};
pub use task_modal::TaskModal;
pub use task_note_panel::TaskNotePanel;
pub use task_row::{row_key, TaskRow};
pub use user_search::UserSearch;

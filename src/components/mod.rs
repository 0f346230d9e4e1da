//! UI Components
//!
//! Screens and reusable Leptos components.

mod comment_thread;
mod dashboard;
mod delete_confirm_button;
mod kanban_column;
mod org_switcher;
mod project_card;
mod project_detail;
mod project_form;
mod task_card;
mod task_form;

pub use comment_thread::CommentThread;
pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use kanban_column::KanbanColumn;
pub use org_switcher::OrgSwitcher;
pub use project_card::ProjectCard;
pub use project_detail::ProjectDetail;
pub use project_form::ProjectForm;
pub use task_card::TaskCard;
pub use task_form::TaskForm;

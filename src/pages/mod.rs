//! Pages
//!
//! One component per route.

mod dashboard;
mod login;
mod project_detail;
mod projects;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use project_detail::ProjectDetailPage;
pub use projects::ProjectsPage;

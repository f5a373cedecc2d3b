//! Page components for the portfolio.

mod admin_dashboard;
mod admin_login;
mod gallery;
mod project_form;

pub use admin_dashboard::AdminDashboard;
pub use admin_login::AdminLogin;
pub use gallery::Gallery;
pub use project_form::{EditProject, NewProject};

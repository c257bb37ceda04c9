pub mod auth;

pub mod users;

pub mod subjects;

pub mod calendar;

pub mod files;

pub mod forum;

pub mod helps;

pub mod system;

pub mod frontend;

pub use auth::configure_auth_routes;
pub use calendar::configure_calendar_routes;
pub use files::configure_file_routes;
pub use forum::configure_forum_routes;
pub use frontend::configure_frontend_routes;
pub use helps::configure_help_routes;
pub use subjects::configure_subject_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;

pub mod app;
pub mod header;
pub mod login_view;
pub mod plan_panel;
pub mod profile_editor;
pub mod register_view;
pub mod require_auth;

pub use app::App;
pub use header::Header;
pub use login_view::LoginView;
pub use plan_panel::PlanPanel;
pub use profile_editor::ProfileEditor;
pub use register_view::RegisterView;
pub use require_auth::RequireAuth;

//! UI Components
//!
//! Each component owns its presentation state (focus, scroll) and turns keys
//! into Actions. Portfolio data and the contact form live in the App and are
//! borrowed at draw time.

pub mod about;
pub mod contact;
pub mod help_dialog;
pub mod hero;
pub mod layout;
pub mod page;
pub mod preview_dialog;
pub mod projects;
pub mod quit_dialog;
pub mod splash;
pub mod toast;

pub use about::AboutComponent;
pub use contact::ContactComponent;
pub use help_dialog::HelpDialog;
pub use hero::HeroComponent;
pub use layout::centered_popup;
pub use page::{draw_page, PageComponent, PageRenderContext};
pub use preview_dialog::PreviewDialog;
pub use projects::ProjectsComponent;
pub use quit_dialog::QuitDialog;
pub use splash::SplashComponent;
pub use toast::draw_toasts;

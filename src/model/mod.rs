//! Model layer - centralized state management
//!
//! - `DomainState` - content plus the contact form and preview controllers
//! - `Section` / `AppMode` - presentation state
//! - `ModalStack` - modal overlay management

pub mod contact;
pub mod content;
pub mod domain;
pub mod modal;
pub mod notification;
pub mod preview;
pub mod ui;

pub use contact::{ContactForm, FormField};
pub use content::{LinkTarget, PortfolioContent};
pub use notification::{Notification, NotificationCenter};
pub use ui::{AppMode, Section};

pub mod display;
pub mod fallback;
pub mod links;
pub mod loader;
pub mod site;
pub mod submission;

pub use crate::domain::model::{ContactForm, Notification, Query};
pub use crate::domain::ports::{ConfigProvider, ContentSource, Notifier};
pub use crate::utils::error::Result;

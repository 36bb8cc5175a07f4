pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{console::ConsoleNotifier, rest::RestContentSource};
pub use config::SiteConfig;
pub use core::{
    display::{CardOrigin, DisplayCard},
    loader::{ContentLoader, LoadState, Resolved, SectionSlot},
    site::SitePage,
    submission::{Submission, SubmissionHandler, SubmissionMessages},
};
pub use utils::error::{Result, SiteError};

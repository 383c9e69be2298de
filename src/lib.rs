pub mod adapters;
pub mod config;
pub mod content;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{EmailJsRelay, LocalStorage};
pub use crate::config::SiteConfig;
pub use crate::core::contact::{ContactFlow, ContactTemplates, SubmitOutcome};
pub use crate::core::filter::{filter_items, PortfolioFilter};
pub use crate::core::visibility::{SectionVisibility, VisibilityLatch};
pub use crate::domain::model::{ActiveCategory, Category, ContactForm, PortfolioItem, Toast};
pub use crate::render::Page;
pub use crate::utils::error::{Result, SiteError};


pub mod contact;
pub mod filter;
pub mod section;
pub mod visibility;

pub use crate::domain::model::{ActiveCategory, ContactForm, PortfolioItem, Toast};
pub use crate::domain::ports::{EmailRelay, Storage};
pub use crate::utils::error::Result;

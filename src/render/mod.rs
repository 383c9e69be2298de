// Server-side rendering of the page with leptos components.

pub mod page;
mod sections;

pub use page::Page;

// Build-time content. Everything here is immutable.

pub mod registry;

// Adapters layer: concrete implementations of the domain ports (relay, storage).

pub mod emailjs;
pub mod storage;

pub use emailjs::EmailJsRelay;
pub use storage::LocalStorage;

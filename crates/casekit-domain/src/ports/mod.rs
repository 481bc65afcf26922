//! Ports implemented by outer layers

mod catalog;

pub use catalog::FixtureCatalog;

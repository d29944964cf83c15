pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod keywords;
pub mod loader;
pub mod manifest;
pub mod navigation;
pub mod url;
pub mod view;

pub use gallery::{Action, Gallery};

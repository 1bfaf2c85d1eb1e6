//! zpad - a multi-file scratch editor
//!
//! Modules:
//! - models: virtual files, the file collection, the text buffer
//! - kernel: editor binding contract and the file/editor sync controller
//! - settings: JSON settings under the user cache directory
//! - app: terminal shell (file list + shared editor pane)
//! - tui: terminal setup/teardown

pub mod kernel;
pub mod models;
pub mod settings;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;

//! Headless editor core: file/editor synchronization behind an action API.

pub mod action;
pub mod binding;
pub mod language;
pub mod samples;
pub mod surface;
pub mod sync;

pub use action::{Action, DispatchResult, SyncEvent};
pub use binding::{ChangeHandler, EditorBinding, EditorOptions};
pub use language::SyntaxMode;
pub use surface::TextSurface;
pub use sync::SyncController;

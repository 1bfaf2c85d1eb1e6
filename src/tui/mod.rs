//! Terminal integration (crossterm).
//!
//! Kept apart from `kernel`/`models` so the core builds without terminal crates.

pub mod terminal_guard;

pub use terminal_guard::{TerminalGuard, TerminalRestorer, TerminationSignal};

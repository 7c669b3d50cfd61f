//! # TUI Module
//!
//! Terminal form for asking an expert persona a question.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Collapsible help panel and answer scrolling
//! - 1.0.0: Initial TUI implementation with persona selector, text area and answer panel

pub mod app;
pub mod event;
pub mod ui;

pub use app::{App, InputMode, Output, Submission};
pub use event::{Event, EventHandler};

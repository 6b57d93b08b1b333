//! Presentation layer.
//!
//! Presenters turn domain state into serializable view models; views render
//! those either as console text or as ratatui widgets; renderers decide
//! where the output goes.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiController, TuiRenderer};

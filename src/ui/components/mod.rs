//! UI components for the TUI.
//!
//! Each component draws one region from controller state or a report view.

pub mod benchmark;
pub mod body;
pub mod input;
pub mod panels;
pub mod score;
pub mod sidebar;

//! Message types for inter-layer communication in the actor-based architecture.
//!
//! This module defines all messages that flow between the UI, App, and image loader layers.

pub mod image;
pub mod render;
pub mod ui_events;

pub use image::{ImageCommand, ImageEvent};
pub use render::{LabelView, RenderState};
pub use ui_events::UiEvent;

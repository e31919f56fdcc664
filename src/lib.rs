//! # Greetings TUI
//!
//! A terminal rendition of the Sample List demo.
//!
//! ## Features
//! - 101 selectable greetings, rendered lazily with separators
//! - Click counter that turns green past five clicks
//! - Image list with animated scroll-to-top / scroll-to-end
//! - Remote avatar image fetched once, shown with its load status
//! - Layouts codelab screen with a photographer card
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (single owner of every state cell, frame-driven animations)
//! - Image Layer (Tokio runtime)

pub mod animation;
pub mod app;
pub mod components;
pub mod config;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use animation::{Animated, Interpolate};
pub use app::{AppActor, AppState, SampleListScreen};
pub use components::{NameList, ScrollController, SelectableLabel};
pub use config::Config;
pub use messages::{ImageCommand, ImageEvent, RenderState, UiEvent};
pub use models::{DisplayItem, ImageStatus, Rgba};
pub use network::ImageLoader;

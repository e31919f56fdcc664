//! App layer - central state management and command processing
//!
//! The App actor receives UI events, animation frames and image events,
//! updates state, and emits image commands and render state.

pub mod state;
pub mod actor;
pub mod commands;

pub use state::{AppState, SampleListScreen};
pub use actor::AppActor;

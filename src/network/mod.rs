//! Network layer - the image loader
//!
//! The loader receives fetch commands and reports image status back. The
//! rest of the app treats it as an opaque collaborator.

pub mod actor;
pub mod client;

pub use actor::ImageLoader;

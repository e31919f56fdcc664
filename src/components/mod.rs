//! Components - leaf and composite pieces of the screens
//!
//! Components never own shared state. Each receives the state it reads
//! and, where it reacts to input, mutates only the cell it was handed.

pub mod codelab;
pub mod counter;
pub mod image_row;
pub mod label;
pub mod list;
pub mod scroll;

pub use label::SelectableLabel;
pub use list::NameList;
pub use scroll::ScrollController;

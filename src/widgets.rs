//! Per-section UI state and decoration. Each widget is created with its
//! section, mutated only by user input within it, and dropped on unmount.

pub mod carousel;
pub mod contact;
pub mod flip;
pub mod nav;
pub mod particles;

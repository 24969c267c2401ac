#![forbid(unsafe_code)]

//! Display helpers shared by the label verification tools.

pub mod format;

pub use format::format_file_size;

pub mod config;
pub mod logger;
pub mod markup;
pub mod panel;

pub use markup::{Status, format, format_error, format_test};
pub use panel::{Entry, OutputPanel, parse_line};

//! Output generation for extracted items.

mod render;
mod writer;

pub use render::{render, to_json, to_json_with, to_yaml, OutputFormat, SerializeOptions};
pub use writer::save_output;

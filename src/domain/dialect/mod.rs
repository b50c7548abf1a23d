//! The projects config dialect: a fixed-shape, YAML-like text format.

mod parser;
mod writer;

pub use parser::parse_projects;
pub use writer::write_projects;

// Resource path templating - compile once, format and match many times

pub mod names;
pub mod parser;
pub mod template;

pub use parser::PatternParser;
pub use template::{PathTemplate, Segment};

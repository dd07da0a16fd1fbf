mod render;
mod report;

pub use render::*;
pub use report::*;

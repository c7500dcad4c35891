pub mod formatter;
pub mod render;

pub use formatter::Summary;
pub use render::{RenderOptions, render_servers};

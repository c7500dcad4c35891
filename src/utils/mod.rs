pub mod number;
pub mod text;

pub use number::{format_multiplier, group_thousands};
pub use text::{sanitize_name, truncate};

pub mod text;

pub use text::{format_number, format_ratio, render_table, truncate};

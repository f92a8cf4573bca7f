mod colors;
mod table;

pub use colors::{default_kind_color, KindStyle};
pub use table::{format_check_header, format_step, format_summary};

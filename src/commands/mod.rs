mod check;

pub use check::{run_check, CheckStatus, OutputFormat};

// crates/cli/src/lib.rs
pub mod args;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

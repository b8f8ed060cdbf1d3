//! Commands module - CLI subcommand implementations.

mod init;
mod scan;
mod window;

pub use init::{run_init, run_init_in};
pub use scan::{run_scan, ScanOptions};
pub use window::{parse_target, run_window, WindowOptions};

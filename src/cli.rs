use clap::Parser;
use std::ffi::OsString;

/// The only file ever read, relative to the working directory
pub const INPUT_PATH: &str = "test.txt";

/// Print ./test.txt trimmed and uppercased
#[derive(Parser, Debug)]
#[command(name = "upshout", version, about)]
pub struct Cli {
    /// Extra arguments are accepted and ignored
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<OsString>,
}

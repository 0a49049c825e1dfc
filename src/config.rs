use std::path::PathBuf;

use clap::Parser;

/// Interactive sorting and searching benchmarks.
///
/// Log verbosity is controlled with `RUST_LOG`, e.g. `RUST_LOG=debug` prints every timed
/// invocation.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(version, about)]
pub struct Config {
    /// Employee record file, one `name | department | years` record per line.
    #[arg(long, default_value = "Employee.txt")]
    pub employees: PathBuf,

    /// Length of the sequence generated for the search benchmarks.
    #[arg(long, default_value_t = 100_000)]
    pub search_size: usize,

    /// Generated sequences up to this length are printed before sorting.
    #[arg(long, default_value_t = 100_000)]
    pub print_limit: usize,

    /// Seed for the random generator, for reproducible sequences.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            employees: PathBuf::from("Employee.txt"),
            search_size: 100_000,
            print_limit: 100_000,
            seed: None,
        }
    }
}

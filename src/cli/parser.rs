use clap::{Parser, Subcommand};

/// Command-line interface definition for rDriverStats
/// CLI application to summarise driver timesheets
#[derive(Parser, Debug)]
#[command(
    name = "rdriverstats",
    version = env!("CARGO_PKG_VERSION"),
    about = "Summarise driver timesheets into a CSV table and chart the top drivers by miles",
    long_about = None
)]
pub struct Cli {
    /// Directory holding drivers.csv and timesheet.csv (default: files/input)
    #[arg(global = true, long = "input", value_name = "DIR")]
    pub input: Option<String>,

    /// Directory receiving summary.csv (default: files/output)
    #[arg(global = true, long = "output", value_name = "DIR")]
    pub output: Option<String>,

    /// Directory receiving top10_drivers.png (default: files/plots)
    #[arg(global = true, long = "plots", value_name = "DIR")]
    pub plots: Option<String>,

    /// Use this configuration file instead of the standard one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Print diagnostic logging to stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build summary.csv and the top-10 chart from the input tables
    Generate,

    /// Print the per-driver summary without writing any file
    Show {
        /// Show only the drivers that would appear on the chart
        #[arg(long = "top", help = "Show only the top 10 drivers by total miles")]
        top: bool,
    },

    /// Inspect or create the configuration file
    Config {
        /// Print the effective configuration
        #[arg(long = "print", help = "Print the effective configuration as YAML")]
        print_config: bool,

        /// Write a configuration file with the default directories
        #[arg(long = "init", help = "Write the default configuration file")]
        init: bool,

        /// Overwrite an existing configuration file (with --init)
        #[arg(long, short = 'f', requires = "init")]
        force: bool,
    },
}

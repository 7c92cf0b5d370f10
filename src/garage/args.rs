use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "garage")]
#[command(about = "Command-line manager for your personal car list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new car
    #[command(alias = "a")]
    Add {
        /// Brand (e.g. Toyota)
        brand: String,

        /// Model (e.g. Corolla)
        model: String,

        /// Model year
        year: i32,

        /// Asking price
        price: f64,
    },

    /// List cars
    #[command(alias = "ls")]
    List {
        /// Only show brands containing this text (case-insensitive)
        #[arg(short, long)]
        brand: Option<String>,
    },

    /// Show one car in detail
    #[command(alias = "v")]
    Show {
        /// Id of the car
        id: u64,
    },

    /// Edit an existing car
    #[command(alias = "e")]
    Edit {
        /// Id of the car
        id: u64,

        /// Brand (e.g. Toyota)
        brand: String,

        /// Model (e.g. Corolla)
        model: String,

        /// Model year
        year: i32,

        /// Asking price
        price: f64,
    },

    /// Delete a car
    #[command(alias = "rm")]
    Delete {
        /// Id of the car
        id: u64,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., currency)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

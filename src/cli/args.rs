use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chan_patterns")]
#[command(about = "Bounded queue pipeline and fan-in merge demos")]
#[command(version)]
pub struct Cli {
    /// Scenario to run (both when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON scenario configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress progress lines
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Producers -> bounded queue -> consumer pool
    Queue {
        /// Queue capacity (0 = rendezvous)
        #[arg(long)]
        capacity: Option<usize>,

        /// Number of consumers
        #[arg(long)]
        consumers: Option<usize>,

        /// Items per producer
        #[arg(long)]
        items: Option<usize>,
    },

    /// Workers -> fan-in merge -> receive with timeout
    FanIn {
        /// Number of workers
        #[arg(long)]
        workers: Option<usize>,

        /// Per-receive timeout in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Upper bound of the worker delay in milliseconds
        #[arg(long)]
        max_delay_ms: Option<u64>,

        /// Number of receive attempts
        #[arg(long)]
        receives: Option<usize>,
    },
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelfz")]
#[command(version = env!("SHELFZ_BUILD_INFO"))]
#[command(about = "Browse a product catalog from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the catalog file (overrides discovery)
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products, applying any active filters
    #[command(alias = "ls")]
    List {
        /// Only show products owned by this user ("All" disables the filter)
        #[arg(short, long)]
        owner: Option<String>,

        /// Case-insensitive substring match on product names
        #[arg(short, long)]
        search: Option<String>,

        /// Restrict to these categories (repeat to select several)
        #[arg(short = 'C', long = "category")]
        categories: Vec<String>,
    },

    /// List catalog owners
    Owners,

    /// List categories
    #[command(alias = "cats")]
    Categories,

    /// Write the bundled sample catalog to .shelfz/catalog.json
    Init,

    /// Get or set configuration
    Config {
        /// Configuration key (catalog-file, show-icons)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

//! CLI for the Relikt storefront backend client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use relikt_core::config;
use relikt_core::url_resolver::UrlResolver;

use commands::{
    run_category, run_completions, run_get, run_product, run_products, run_related, run_resolve,
    run_size,
};

/// Top-level CLI for the Relikt storefront backend client.
#[derive(Debug, Parser)]
#[command(name = "relikt")]
#[command(about = "Client for the ReliktArte storefront backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a path fragment to an absolute backend URL (no request made).
    Resolve {
        /// API path fragment or static-asset path.
        fragment: String,
    },

    /// GET a path fragment and pretty-print the JSON response.
    Get {
        /// API path fragment, e.g. `product/5`.
        fragment: String,
        /// Query parameter as key=value; repeatable.
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },

    /// Fetch one product by id.
    Product {
        /// Product identifier.
        id: i64,
    },

    /// Fetch the filtered product listing.
    Products {
        /// Filter parameter as key=value; repeatable.
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },

    /// Fetch one category by id.
    Category {
        /// Category identifier.
        id: i64,
        /// Also resolve the sizes offered for this category.
        #[arg(long)]
        sizes: bool,
    },

    /// Fetch one product size by id.
    Size {
        /// Size identifier.
        id: i64,
    },

    /// Fetch a related list (colors, glass colors).
    Related {
        /// Kind: product_color | product_glass_color (short: color, glass_color).
        kind: String,
    },

    /// Generate shell completions to stdout.
    Completions {
        /// Shell to generate for.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let resolver = UrlResolver::new(&cfg.effective_origin(), config::DEFAULT_ORIGIN);

        match cli.command {
            CliCommand::Resolve { fragment } => run_resolve(&resolver, &fragment),
            CliCommand::Get { fragment, params } => run_get(&resolver, &cfg, &fragment, &params)?,
            CliCommand::Product { id } => run_product(&resolver, id)?,
            CliCommand::Products { params } => run_products(&resolver, &params)?,
            CliCommand::Category { id, sizes } => run_category(&resolver, id, sizes)?,
            CliCommand::Size { id } => run_size(&resolver, id)?,
            CliCommand::Related { kind } => run_related(&resolver, &kind)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

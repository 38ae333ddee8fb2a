//! One file per subcommand.

mod catalog;
mod completions;
mod get;
mod resolve;

pub use catalog::{run_category, run_product, run_products, run_related, run_size};
pub use completions::run_completions;
pub use get::run_get;
pub use resolve::run_resolve;

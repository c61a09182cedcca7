//! RESPIMG CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: run the fixed site job
//! list and exit with appropriate status. For programmatic use, prefer
//! the library API (`respimg::api`).

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::run()
}

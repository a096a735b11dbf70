//! Plinth - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `plinth inspect [--json] [--application]` | Binding table of the composed contexts |
//! | `plinth probe` | Capability implementations selected for the environment |
//! | `plinth boot` | Compose the platform and application, report readiness |

use clap::Parser;
use plinth::cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(&cli)
}

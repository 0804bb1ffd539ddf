//! Decomment command-line tool.
//!
//! Reads each input file, removes the selected comment categories, and
//! writes the result in place or into an output directory.

mod args;
mod error;
mod run;

pub use args::{Args, CategoryArg};
pub use error::CliError;
pub use run::{load_options, run, BLOCK_SIZE};

/// Install the stderr log subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`, so missing input
/// files are reported without extra configuration. Calling this twice is a
/// no-op.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .try_init();
}

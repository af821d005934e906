//! Demo entry point.
//!
//! Runs `add_three` from the combined capability set on an optional value
//! and prints the result to standard output. Logs go to standard error,
//! filtered through `RUST_LOG`.

use optikon::capability::app;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "optikon=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    let input = Some(1);
    tracing::debug!(?input, "running add_three");

    let result = app(|app| app.add_three(input));
    tracing::info!(?input, ?result, "add_three finished");

    println!("{result:?}");
    Ok(())
}

use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spelbee::{
    config,
    puzzle::{Dictionary, Solver},
    session::Session,
};

fn main() -> miette::Result<()> {
    // Logs go to stderr so they never mix with session output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spelbee=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting Spel B");

    let config = config::load_config()?;

    // Nothing can be solved without a dictionary, so any failure here is fatal
    let dictionary = Dictionary::load(&config.dictionary_path)?;
    dictionary.ensure_usable()?;

    let mut session = Session::new(Solver::new(&dictionary), config.output_format);

    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout.lock())?;

    Ok(())
}

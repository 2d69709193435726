use std::io;
use std::path::Path;

use lexi_core::Vocabulary;
use tracing_subscriber::EnvFilter;

pub mod profile;
pub mod session;


use self::session::Session;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = profile::load_config(Path::new(profile::CONFIG_FILE))?;
    let vocabulary = Vocabulary::load(&config.vocabulary.path)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(vocabulary, &config, stdin.lock(), stdout.lock());
    session.run()?;

    tracing::info!("Session ended with {} entries", session.vocabulary().len());
    Ok(())
}

/// Logs go to stderr so they never mix with the prompts on stdout
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

use crate::config::Config;
use crate::console::StdConsole;
use crate::game::{Corpus, Game};
use anyhow::Context;

mod config;
mod console;
mod error;
mod game;

fn main() {
    dotenv::dotenv().ok();
    env_logger::try_init().ok();

    if let Err(err) = run() {
        log::error!("{:#}", err);
        eprintln!("Errore: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;

    let corpus = Corpus::load(&config.words_file).context("could not load the word corpus")?;
    log::info!("Loaded {} words from {}", corpus.entries().len(), config.words_file);

    let seed = config.seed.unwrap_or_else(rand::random);
    log::debug!("Using seed {}", seed);

    let mut game = Game::new(&config.players, seed)?;
    let mut console = StdConsole::stdio(config.pacing);
    game.play(&corpus, &mut console)?;
    Ok(())
}

//! Interactive anagram game on the terminal.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rust_anagrams::{
    FileStore, GameConfig, GameSession, LoadOutcome, SubmitError, WordList, WordSet,
};

#[derive(Debug, Parser)]
#[command(name = "anagrams", about = "Find words hidden in a base word")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, default_value = "anagrams.toml")]
    config: PathBuf,

    /// Newline-separated base words. Uses the bundled list if omitted.
    #[arg(long)]
    words: Option<PathBuf>,

    /// Newline-separated dictionary of recognized words.
    #[arg(long, default_value = "/usr/share/dict/words")]
    dictionary: PathBuf,

    /// Directory for the saved game.
    #[arg(long, default_value = ".anagrams")]
    save_dir: PathBuf,

    /// Log debug output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    let dictionary = WordSet::load(config.language.clone(), &cli.dictionary)
        .context("loading dictionary")?;
    let words = match &cli.words {
        Some(path) => WordList::load_or_default(path, &config.default_word),
        None => WordList::bundled(),
    };

    let mut game = GameSession::builder(dictionary, FileStore::new(&cli.save_dir))
        .config(config)
        .words(words)
        .build();

    if game.resume() == LoadOutcome::Discarded {
        println!("Your saved game could not be read, so a new one was started.");
    }
    print_board(&game);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "" => {}
            ":quit" | ":q" => break,
            ":new" => {
                game.start_new_game();
                print_board(&game);
            }
            ":list" => print_board(&game),
            answer => match game.submit(answer) {
                Ok(accepted) => {
                    println!("+ {}", accepted.word);
                    if !accepted.persisted {
                        println!("  (could not save, progress is kept until you quit)");
                    }
                }
                Err(SubmitError::Rejected(reason)) => {
                    let base = game.base_word().unwrap_or_default();
                    println!("{}: {}", reason.title(), reason.message(base));
                }
                Err(SubmitError::NotStarted) => {
                    game.start_new_game();
                    print_board(&game);
                }
            },
        }
    }

    Ok(())
}

fn print_board<D, S, C>(game: &GameSession<D, S, C>)
where
    D: rust_anagrams::Dictionary,
    S: rust_anagrams::KeyValueStore,
    C: rust_anagrams::WordChooser,
{
    let Some(state) = game.state() else {
        return;
    };
    println!("== {} ==", state.base_word);
    for word in &state.used_words {
        println!("  {word}");
    }
    println!("(:new for a new word, :list to show found words, :quit to leave)");
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

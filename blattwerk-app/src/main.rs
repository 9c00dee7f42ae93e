use crate::ui::Command;
use blattwerk_data::source::{DataError, PostSource};
use blattwerk_view::{catalog::Catalog, state::ViewState};
use serde::Deserialize;
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod ui;

#[derive(Debug, Error)]
enum InitError {
    #[error("Error parsing .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
    #[error("Error parsing environment: {0}")]
    Envy(#[from] envy::Error),
    #[error("Error loading the post collection: {0}")]
    Data(#[from] DataError),
    #[error("Error talking to the terminal: {0}")]
    Terminal(io::Error),
}

#[derive(Clone, Eq, PartialEq, Debug, Deserialize)]
struct Env {
    #[serde(default = "default_posts_path")]
    posts_path: PathBuf,
}

fn default_posts_path() -> PathBuf {
    PathBuf::from("posts.json")
}

fn install_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blattwerk_app=debug,blattwerk_data=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn get_env() -> Result<Env, InitError> {
    if let Err(e) = dotenvy::dotenv() {
        if e.not_found() {
            debug!("No .dotenv file found");
        } else {
            return Err(e.into());
        }
    }

    envy::from_env().map_err(InitError::from)
}

fn main() -> Result<(), InitError> {
    install_tracing();
    let env = get_env()?;

    let source = PostSource::new(env.posts_path);
    let posts = source.load()?;
    debug!(
        count = posts.len(),
        path = %source.path().display(),
        "Loaded post collection"
    );

    let catalog = Catalog::new(posts);
    let mut state = ViewState::new();

    run(&catalog, &mut state)
}

fn run(catalog: &Catalog, state: &mut ViewState) -> Result<(), InitError> {
    let options = catalog.author_options();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    println!("Commands: author <n> | page <n> | quit");

    loop {
        let view = state.view(catalog);
        println!("{}", ui::render_screen(&options, &view, state.current_page()));

        print!("> ");
        out.flush().map_err(InitError::Terminal)?;

        let mut line = String::new();
        if input.read_line(&mut line).map_err(InitError::Terminal)? == 0 {
            return Ok(());
        }

        match ui::parse_command(&line) {
            Ok(Command::Author(number)) => {
                // The author menu is the selection widget: only known
                // option numbers may reach the view state.
                if let Some(option) = number.checked_sub(1).and_then(|index| options.get(index)) {
                    debug!(label = %option.label, "Author selected");
                    state.select_author(Some(&option.value));
                } else {
                    println!("No author option {number}.");
                }
            }
            Ok(Command::Page(number)) => {
                // Likewise for the pager: only pages in [1, page_count].
                if (1..=view.page_count).contains(&number) {
                    debug!(page = number, "Page selected");
                    state.select_page(number - 1);
                } else {
                    println!("No page {number}.");
                }
            }
            Ok(Command::Quit) => return Ok(()),
            Err(error) => {
                println!("{error}");
                println!("Commands: author <n> | page <n> | quit");
            }
        }
    }
}

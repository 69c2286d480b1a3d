//! Catalog inspection commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use watchlist_core::config::AppConfig;
use watchlist_core::error::AppError;
use watchlist_database::repositories::MovieRepository;
use watchlist_entity::movie::Movie;

use crate::output::{self, OutputFormat};

/// Arguments for movie commands
#[derive(Debug, Args)]
pub struct MovieArgs {
    /// Movie subcommand
    #[command(subcommand)]
    pub command: MovieCommand,
}

/// Movie subcommands
#[derive(Debug, Subcommand)]
pub enum MovieCommand {
    /// List the catalog in insertion order
    List,
}

#[derive(Serialize, Tabled)]
struct MovieRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Year")]
    year: String,
}

impl From<Movie> for MovieRow {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id.get(),
            title: movie.title,
            year: movie.year,
        }
    }
}

/// Execute movie commands
pub async fn execute(
    args: &MovieArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let db = super::connect(config).await?;
    let movies = MovieRepository::new(db.into_pool());

    match args.command {
        MovieCommand::List => {
            let rows: Vec<MovieRow> = movies
                .list_all()
                .await?
                .into_iter()
                .map(MovieRow::from)
                .collect();
            output::print_list(&rows, format);
        }
    }
    Ok(())
}

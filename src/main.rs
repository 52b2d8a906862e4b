// Movie Vault CLI binary

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rusqlite::Connection;

use movievault::db::{default_db_path, open_db, schema};
use movievault::movie::Movie;
use movievault::scoring;

#[derive(Parser)]
#[command(name = "movievault")]
#[command(about = "Movie Vault - a personal movie catalog", long_about = None)]
#[command(version)]
struct Cli {
    /// Catalog database path (defaults to ~/.movievault/movievault.db)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a movie to the catalog
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        director: String,
        /// Rating on the 0-10 scale
        #[arg(long)]
        rating: f64,
        /// Runtime in minutes
        #[arg(long)]
        runtime: i32,
        #[arg(long, default_value_t = 0)]
        votes: i64,
        /// Mark the movie as watched
        #[arg(long)]
        watched: bool,
    },

    /// List all movies
    List {
        /// Emit records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show movie details and scariness breakdown
    Show {
        /// Movie ID
        id: i64,
    },

    /// Edit an existing movie (unspecified fields keep their value)
    Edit {
        /// Movie ID
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        director: Option<String>,
        #[arg(long)]
        rating: Option<f64>,
        #[arg(long)]
        runtime: Option<i32>,
        #[arg(long)]
        votes: Option<i64>,
        #[arg(long)]
        watched: Option<bool>,
    },

    /// Delete a movie from the catalog
    Delete {
        /// Movie ID
        id: i64,
    },

    /// Show the scariness score for a movie
    Scariness {
        /// Movie ID
        id: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let db_path = match cli.catalog {
        Some(path) => path,
        None => default_db_path()?,
    };

    // One connection for the process lifetime; every command is a
    // synchronous round-trip on it.
    let conn = open_db(&db_path)?;

    match cli.command {
        Commands::Add {
            title,
            year,
            director,
            rating,
            runtime,
            votes,
            watched,
        } => cmd_add(&conn, title, year, director, rating, runtime, votes, watched),
        Commands::List { json } => cmd_list(&conn, json),
        Commands::Show { id } => cmd_show(&conn, id),
        Commands::Edit {
            id,
            title,
            year,
            director,
            rating,
            runtime,
            votes,
            watched,
        } => cmd_edit(&conn, id, title, year, director, rating, runtime, votes, watched),
        Commands::Delete { id } => cmd_delete(&conn, id),
        Commands::Scariness { id } => cmd_scariness(&conn, id),
    }
}

fn cmd_add(
    conn: &Connection,
    title: String,
    year: i32,
    director: String,
    rating: f64,
    runtime: i32,
    votes: i64,
    watched: bool,
) -> Result<()> {
    let movie = Movie::new(title, year, director, rating, runtime, votes, watched);
    movie.validate()?;

    let id = schema::insert_movie(conn, &movie)?;
    println!("Added \"{}\" with id {}", movie.title, id);

    Ok(())
}

fn cmd_list(conn: &Connection, json: bool) -> Result<()> {
    let movies = schema::list_movies(conn)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&movies)?);
        return Ok(());
    }

    if movies.is_empty() {
        println!("No movies found. Use 'movievault add' to catalog one.");
        return Ok(());
    }

    println!(
        "{:>5}  {:<30}  {:>6}  {:<22}  {:>6}  {:>7}  {:>9}  {}",
        "ID", "Title", "Year", "Director", "Rating", "Runtime", "Votes", "Watched"
    );
    println!("{}", "-".repeat(104));

    for movie in &movies {
        println!(
            "{:>5}  {:<30}  {:>6}  {:<22}  {:>6.1}  {:>7}  {:>9}  {}",
            movie.id,
            truncate(&movie.title, 30),
            movie.year,
            truncate(&movie.director, 22),
            movie.rating,
            movie.runtime_minutes,
            movie.votes,
            if movie.watched { "yes" } else { "no" },
        );
    }

    println!();
    println!("{} movies in catalog", movies.len());

    Ok(())
}

fn cmd_show(conn: &Connection, id: i64) -> Result<()> {
    let movie = schema::get_movie(conn, id)?
        .ok_or_else(|| anyhow::anyhow!("Movie {} not found", id))?;

    let breakdown = scoring::score(&movie);

    println!("Movie #{}", movie.id);
    println!();
    println!("Title:       {}", movie.title);
    println!("Year:        {}", movie.year);
    println!("Director:    {}", movie.director);
    println!("Rating:      {:.1}", movie.rating);
    println!("Runtime:     {} min", movie.runtime_minutes);
    println!("Votes:       {}", movie.votes);
    println!("Watched:     {}", if movie.watched { "yes" } else { "no" });
    println!();
    println!("Scariness:   {:.1} / 10", breakdown.overall);
    println!("  rating     {:.2}", breakdown.rating_component);
    println!("  votes      {:.2}", breakdown.votes_component);
    println!("  runtime    {:.2}", breakdown.runtime_component);
    println!("  watched    {:.2}", breakdown.watched_component);

    Ok(())
}

fn cmd_edit(
    conn: &Connection,
    id: i64,
    title: Option<String>,
    year: Option<i32>,
    director: Option<String>,
    rating: Option<f64>,
    runtime: Option<i32>,
    votes: Option<i64>,
    watched: Option<bool>,
) -> Result<()> {
    let mut movie = schema::get_movie(conn, id)?
        .ok_or_else(|| anyhow::anyhow!("Movie {} not found", id))?;

    if let Some(title) = title {
        movie.title = title;
    }
    if let Some(year) = year {
        movie.year = year;
    }
    if let Some(director) = director {
        movie.director = director;
    }
    if let Some(rating) = rating {
        movie.rating = rating;
    }
    if let Some(runtime) = runtime {
        movie.runtime_minutes = runtime;
    }
    if let Some(votes) = votes {
        movie.votes = votes;
    }
    if let Some(watched) = watched {
        movie.watched = watched;
    }

    movie.validate()?;
    schema::update_movie(conn, &movie)?;

    println!("Updated \"{}\" (id {})", movie.title, movie.id);

    Ok(())
}

fn cmd_delete(conn: &Connection, id: i64) -> Result<()> {
    let movie = schema::get_movie(conn, id)?
        .ok_or_else(|| anyhow::anyhow!("Movie {} not found", id))?;

    schema::delete_movie(conn, id)?;
    println!("Deleted \"{}\" (id {})", movie.title, id);

    Ok(())
}

fn cmd_scariness(conn: &Connection, id: i64) -> Result<()> {
    let movie = schema::get_movie(conn, id)?
        .ok_or_else(|| anyhow::anyhow!("Movie {} not found", id))?;

    println!(
        "Scariness Score for \"{}\": {:.1} / 10",
        movie.title,
        movie.scariness()
    );

    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

use clap::Parser;
use recommend::{sample::sample_ratings, Recommender};
use recommend_cli::{load_ratings, render_json, render_text};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// User to recommend items for
    #[arg(long, env = "RECOMMEND_USER", default_value = "alice")]
    user: String,
    /// Maximum number of recommendations; negative values yield none
    #[arg(long, env = "RECOMMEND_TOP_N", default_value_t = 5, allow_hyphen_values = true)]
    top: i64,
    /// JSON file of `{user: {item: rating}}`; the built-in sample is used when absent
    #[arg(long, env = "RECOMMEND_RATINGS")]
    ratings: Option<PathBuf>,
    /// Print recommendations as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let cli = Cli::parse();

    let ratings = match &cli.ratings {
        Some(path) => load_ratings(path)?,
        None => sample_ratings(),
    };
    let recs = Recommender::new().recommend(&ratings, &cli.user, cli.top)?;

    if cli.json {
        println!("{}", render_json(&recs)?);
    } else {
        print!("{}", render_text(&cli.user, &recs));
    }
    Ok(())
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate an ELO rating chart from pool game JSON data")]
pub struct Cli {
    /// Path to the input JSON file
    pub input: PathBuf,

    /// Path to save the output PNG image
    #[arg(long, default_value = "elo_rating_chart.png")]
    pub output_image: PathBuf,

    /// Path to save the output CSV file with ELO history
    #[arg(long, default_value = "elo_history.csv")]
    pub output_csv: PathBuf,
}

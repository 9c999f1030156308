//! curvelab CLI - render and inspect the sun-angle curvature diagram.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use curvelab::diagram;
use curvelab::{compute_parameters, observations};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "curvelab")]
#[command(about = "Sun-angle curvature diagram renderer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the diagram to an SVG file
    Render {
        /// Curvature control in [-1, 1]: 1 globe, 0 flat, -1 hollow
        #[arg(short, long, default_value_t = 1.0)]
        control: f64,
        /// Output SVG file
        #[arg(short, long)]
        out: PathBuf,
        /// Number of outline samples
        #[arg(short, long, default_value_t = 181)]
        samples: usize,
    },
    /// Print surface samples for a control value
    Samples {
        /// Curvature control in [-1, 1]
        #[arg(short, long, default_value_t = 1.0)]
        control: f64,
        /// Number of latitude samples
        #[arg(short = 'n', long, default_value_t = 19)]
        count: usize,
    },
    /// Print the observation table as JSON
    Observations,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            control,
            out,
            samples,
        } => render(control, &out, samples),
        Commands::Samples { control, count } => print_samples(control, count),
        Commands::Observations => print_observations(),
    }
}

fn render(control: f64, out: &std::path::Path, samples: usize) -> Result<()> {
    let params = compute_parameters(control);
    log::info!(
        "rendering control={} with {} samples to {}",
        control,
        samples,
        out.display()
    );
    let svg = diagram::render_svg(&params, &observations(), samples);
    std::fs::write(out, svg).with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

fn print_samples(control: f64, count: usize) -> Result<()> {
    let params = compute_parameters(control);
    let count = count.max(2);
    println!("{:>9} {:>22} {:>22}", "latitude", "point", "normal");
    for i in 0..count {
        let latitude = -90.0 + 180.0 * (i as f64) / ((count - 1) as f64);
        let s = params.surface_at(latitude);
        println!(
            "{:>9.2} ({:>9.5}, {:>9.5}) ({:>9.5}, {:>9.5})",
            latitude, s.point.x, s.point.y, s.normal.x, s.normal.y
        );
    }
    Ok(())
}

fn print_observations() -> Result<()> {
    let obs = observations();
    println!("{}", serde_json::to_string_pretty(&obs)?);
    Ok(())
}

//! Lobule CLI - equipotential surface triangulation tool.
//!
//! Usage: lobule discretize <DELTA> <MAX_TRIANGLES> <POTENTIAL> [PARAMS]...
//!
//! Run `lobule --help` for available commands.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lobule::error::{DiscretizeError, Result};
use lobule::march::{discretize_potential_with_progress, MarchOptions, Progress};
use lobule::potential::{AnyPotential, REGISTRY};
use lobule::io;

#[derive(Parser)]
#[command(name = "lobule")]
#[command(author, version, about = "Equipotential surface triangulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Discretize a potential into a triangle mesh
    ///
    /// Positional arguments mirror the classic calling convention:
    /// delta, max_triangles (<= 0 for unbounded), potential name, then the
    /// potential's parameters.
    Discretize {
        /// delta, max_triangles, potential name, parameters...
        #[arg(value_name = "ARG", num_args = 0..)]
        args: Vec<String>,

        /// Output file (.csv for the facet table, .stl for the soup);
        /// prints a summary when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show a live step counter on stderr
        #[arg(long)]
        progress: bool,
    },

    /// List the available potentials and their parameters
    Potentials,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> std::result::Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Discretize {
            args,
            output,
            progress,
        } => {
            cmd_discretize(&args, output.as_deref(), progress)?;
        }

        Commands::Potentials => {
            for (name, params) in REGISTRY {
                println!("{name}: {params}");
            }
        }
    }

    Ok(())
}

/// The parsed positional invocation.
#[derive(Debug)]
struct Invocation {
    delta: f64,
    max_triangles: i32,
    potential: String,
    params: Vec<f64>,
}

/// Parse the raw positional arguments: delta, max_triangles, potential
/// name, then the parameter tail.
fn parse_invocation(args: &[String]) -> Result<Invocation> {
    if args.len() < 3 {
        return Err(DiscretizeError::NotEnoughParameters { got: args.len() });
    }

    let delta: f64 = args[0]
        .parse()
        .map_err(|_| DiscretizeError::invalid_param("delta", &args[0], "not a number"))?;
    let max_triangles: i32 = args[1].parse().map_err(|_| {
        DiscretizeError::invalid_param("max_triangles", &args[1], "not an integer")
    })?;
    let potential = args[2].clone();

    let params = args[3..]
        .iter()
        .map(|a| {
            a.parse()
                .map_err(|_| DiscretizeError::invalid_param("potential parameter", a, "not a number"))
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(Invocation {
        delta,
        max_triangles,
        potential,
        params,
    })
}

/// Create a progress reporter that keeps a live counter on the terminal.
fn create_progress() -> Progress {
    Progress::new(|step, triangles, front| {
        eprint!("\rstep {step}: {triangles} triangles, front {front}  ");
        let _ = std::io::stderr().flush();
    })
}

fn cmd_discretize(
    args: &[String],
    output: Option<&std::path::Path>,
    show_progress: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let invocation = parse_invocation(args)?;

    let potential = AnyPotential::parse(&invocation.potential, &invocation.params)?;
    let mut options = MarchOptions::new(invocation.delta);
    if invocation.max_triangles > 0 {
        options = options.with_max_triangles(invocation.max_triangles as usize);
    }

    let progress = if show_progress {
        create_progress()
    } else {
        Progress::none()
    };

    println!(
        "Discretizing {} at delta {}...",
        potential.name(),
        invocation.delta
    );

    let start = Instant::now();
    let table = discretize_potential_with_progress(&potential, &options, &progress)?;
    let elapsed = start.elapsed();

    if show_progress {
        eprintln!();
    }

    match output {
        Some(path) => {
            io::save(&table, path)?;
            println!(
                "Saved: {} ({} facets, {:.2?})",
                path.display(),
                table.len(),
                elapsed
            );
        }
        None => {
            println!("Facets: {}", table.len());
            println!("Surface area: {:.6}", table.total_area());
            if let Some((min, max)) = table.bounding_box() {
                println!(
                    "Bounding box: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
                    min.x, min.y, min.z, max.x, max.y, max.z
                );
                let diag = max - min;
                println!(
                    "Dimensions: {:.3} x {:.3} x {:.3}",
                    diag.x, diag.y, diag.z
                );
            }
            println!("Elapsed: {:.2?}", elapsed);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn invocation_needs_three_leading_arguments() {
        for args in [vec![], strings(&["0.1"]), strings(&["0.1", "0"])] {
            let err = parse_invocation(&args).unwrap_err();
            assert!(matches!(err, DiscretizeError::NotEnoughParameters { .. }));
        }
    }

    #[test]
    fn invocation_parses_the_parameter_tail() {
        let inv = parse_invocation(&strings(&["0.05", "0", "BinaryRoche", "0.5", "0.3", "1.0", "3.5"]))
            .unwrap();
        assert_eq!(inv.delta, 0.05);
        assert_eq!(inv.max_triangles, 0);
        assert_eq!(inv.potential, "BinaryRoche");
        assert_eq!(inv.params, vec![0.5, 0.3, 1.0, 3.5]);
    }

    #[test]
    fn invocation_rejects_non_numeric_values() {
        let err = parse_invocation(&strings(&["small", "0", "Sphere", "1.0"])).unwrap_err();
        assert!(matches!(err, DiscretizeError::InvalidParameter { .. }));

        let err = parse_invocation(&strings(&["0.1", "0", "Sphere", "big"])).unwrap_err();
        assert!(matches!(err, DiscretizeError::InvalidParameter { .. }));
    }
}

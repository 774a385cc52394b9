//! Divide & Conquer CLI
//!
//! Run the step-traced algorithms from the command line.
//!
//! Usage:
//!     divide-conquer closest-pair --file points.txt --trace
//!     divide-conquer multiply --file1 a.txt --file2 b.txt --mode karatsuba
//!     divide-conquer gen-points --out closest_inputs

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use rand::Rng;
use tracing_subscriber::EnvFilter;

use divide_conquer::adapters::console::{
    render_closest_pair, render_multiplication, ClosestPairReport, ConsoleTrace,
    MultiplicationReport,
};
use divide_conquer::adapters::ingest::{read_integers, read_points};
use divide_conquer::core::{closest_pair, closest_pair_traced, multiply_traced, MultMode};
use divide_conquer::ports::NoopSink;

/// Divide & Conquer - step-traced classic algorithms
#[derive(Parser)]
#[command(name = "divide-conquer")]
#[command(version)]
#[command(about = "Closest pair of points and Karatsuba multiplication, step by step", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the closest pair of points in a file
    ClosestPair {
        /// Input file: optional count line, then "x y" per line
        #[arg(short, long)]
        file: PathBuf,

        /// Narrate every divide/conquer/combine step
        #[arg(long)]
        trace: bool,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Multiply two integer lists pairwise
    Multiply {
        /// First input file: one integer per line
        #[arg(long)]
        file1: PathBuf,

        /// Second input file: one integer per line
        #[arg(long)]
        file2: PathBuf,

        /// Which decomposition to use
        #[arg(short, long, value_enum, default_value = "karatsuba")]
        mode: ModeArg,

        /// Narrate every recursion step
        #[arg(long)]
        trace: bool,

        /// Emit the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate random point input files
    GenPoints {
        /// Output directory
        #[arg(short, long, default_value = "closest_inputs")]
        out: PathBuf,

        /// Number of files to generate
        #[arg(long, default_value = "10")]
        files: usize,

        /// Minimum points per file
        #[arg(long, default_value = "100")]
        min_count: usize,

        /// Maximum points per file
        #[arg(long, default_value = "300")]
        max_count: usize,

        /// Coordinates are drawn from 0..=max
        #[arg(long, default_value = "1000")]
        coord_max: u64,
    },

    /// Generate random integer input files
    GenIntegers {
        /// Output directory
        #[arg(short, long, default_value = "mult_inputs")]
        out: PathBuf,

        /// Number of files to generate
        #[arg(long, default_value = "10")]
        files: usize,

        /// Minimum integers per file
        #[arg(long, default_value = "100")]
        min_count: usize,

        /// Maximum integers per file
        #[arg(long, default_value = "300")]
        max_count: usize,

        /// Values are drawn from 0..=max
        #[arg(long, default_value = "1000000")]
        value_max: u64,
    },
}

/// Multiplication mode flag
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    /// Divide-and-conquer (three-way recursion)
    Karatsuba,
    /// Schoolbook long multiplication
    Manual,
}

impl From<ModeArg> for MultMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Karatsuba => MultMode::Karatsuba,
            ModeArg::Manual => MultMode::Manual,
        }
    }
}

fn cmd_closest_pair(file: &PathBuf, trace: bool, json: bool) -> Result<(), Box<dyn Error>> {
    let points = read_points(file)?;

    let start = Instant::now();
    let result = if trace {
        let mut sink = ConsoleTrace;
        closest_pair_traced(&points, &mut sink)?
    } else {
        closest_pair(&points)?
    };
    let elapsed = start.elapsed();

    if json {
        let report = ClosestPairReport {
            points: points.len(),
            distance: result.distance,
            pair: result.pair,
            elapsed_secs: elapsed.as_secs_f64(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_closest_pair(&result, points.len(), elapsed));
    }
    Ok(())
}

fn cmd_multiply(
    file1: &PathBuf,
    file2: &PathBuf,
    mode: MultMode,
    trace: bool,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let nums1 = read_integers(file1)?;
    let nums2 = read_integers(file2)?;

    if nums1.len() != nums2.len() {
        tracing::warn!(
            "Files have different lengths ({} vs {}); multiplying up to the shorter",
            nums1.len(),
            nums2.len()
        );
    }

    let mut reports = Vec::new();
    let start = Instant::now();
    for (a, b) in nums1.iter().zip(nums2.iter()) {
        let result = if trace {
            let mut sink = ConsoleTrace;
            multiply_traced(a, b, mode, &mut sink)?
        } else {
            let mut sink = NoopSink;
            multiply_traced(a, b, mode, &mut sink)?
        };

        if json {
            reports.push(MultiplicationReport::new(a, b, &result));
        } else {
            println!("{}", render_multiplication(a, b, &result));
            println!();
        }
    }
    let elapsed = start.elapsed();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        println!("Total time: {:.6}s", elapsed.as_secs_f64());
    }
    Ok(())
}

fn cmd_gen_points(
    out: &PathBuf,
    files: usize,
    min_count: usize,
    max_count: usize,
    coord_max: u64,
) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(out)?;
    let mut rng = rand::rng();

    for i in 1..=files {
        let path = out.join(format!("closest_input_{}.txt", i));
        let n = rng.random_range(min_count..=max_count);

        let mut contents = format!("{}\n", n);
        for _ in 0..n {
            let x = rng.random_range(0..=coord_max);
            let y = rng.random_range(0..=coord_max);
            contents.push_str(&format!("{} {}\n", x, y));
        }
        fs::write(&path, contents)?;
        println!("Created {} with {} points", path.display(), n);
    }
    Ok(())
}

fn cmd_gen_integers(
    out: &PathBuf,
    files: usize,
    min_count: usize,
    max_count: usize,
    value_max: u64,
) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(out)?;
    let mut rng = rand::rng();

    for i in 1..=files {
        let path = out.join(format!("mult_input_{}.txt", i));
        let n = rng.random_range(min_count..=max_count);

        let mut contents = format!("{}\n", n);
        for _ in 0..n {
            contents.push_str(&format!("{}\n", rng.random_range(0..=value_max)));
        }
        fs::write(&path, contents)?;
        println!("Created {} with {} integers", path.display(), n);
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::ClosestPair { file, trace, json } => cmd_closest_pair(&file, trace, json),
        Commands::Multiply {
            file1,
            file2,
            mode,
            trace,
            json,
        } => cmd_multiply(&file1, &file2, mode.into(), trace, json),
        Commands::GenPoints {
            out,
            files,
            min_count,
            max_count,
            coord_max,
        } => cmd_gen_points(&out, files, min_count, max_count, coord_max),
        Commands::GenIntegers {
            out,
            files,
            min_count,
            max_count,
            value_max,
        } => cmd_gen_integers(&out, files, min_count, max_count, value_max),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

//! Compare versions and verify capability manifests.
//!
//! Usage:
//!   capver compare 1.2.0 1.3
//!   capver check --provided 1.2.0 --provided 2.1.0 --minimum 1.1
//!   capver verify --file manifest.json
//!   capver verify < manifest.json

use anyhow::{Context, Result, bail};
use capver::manifest::{self, Manifest};
use capver::{Version, satisfies};
use clap::{Parser, Subcommand};
use std::cmp::Ordering;
use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "capver")]
#[command(about = "Compare component versions and verify capability manifests")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print how two dotted-decimal versions compare.
    Compare {
        left: Version,
        right: Version,
    },
    /// Check provided versions against a minimum requirement.
    Check {
        /// Version the subject provides; repeatable.
        #[arg(long = "provided", required = true)]
        provided: Vec<Version>,
        /// Minimum required version (same major family).
        #[arg(long)]
        minimum: Version,
    },
    /// Verify every requirement in a capability manifest.
    Verify {
        /// Optional manifest path; reads stdin when omitted.
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Compare { left, right } => run_compare(left, right),
        Command::Check { provided, minimum } => run_check(&provided, minimum),
        Command::Verify { file } => run_verify(file),
    }
}

fn run_compare(left: Version, right: Version) -> Result<()> {
    let relation = match left.cmp(&right) {
        Ordering::Less => "<",
        Ordering::Equal => "==",
        Ordering::Greater => ">",
    };
    println!("{left} {relation} {right}");
    Ok(())
}

fn run_check(provided: &[Version], minimum: Version) -> Result<()> {
    match provided.iter().find(|v| satisfies(**v, minimum)) {
        Some(version) => {
            println!("check: PASS ({version} satisfies {minimum})");
            Ok(())
        }
        None => {
            eprintln!("check: FAIL");
            for version in provided {
                eprintln!("  - {version} does not satisfy {minimum}");
            }
            bail!("no provided version satisfies {minimum}");
        }
    }
}

fn run_verify(file: Option<PathBuf>) -> Result<()> {
    let text = read_input(file)?;
    let manifest = Manifest::from_json(&text).context("loading capability manifest")?;
    let failures = manifest::verify(&manifest);

    if failures.is_empty() {
        println!(
            "verify: PASS ({} requirements)",
            manifest.requirements.len()
        );
        return Ok(());
    }

    eprintln!("verify: FAIL");
    for failure in &failures {
        eprintln!("  - {failure}");
    }
    bail!(
        "{} of {} requirements failed",
        failures.len(),
        manifest.requirements.len()
    );
}

fn read_input(file: Option<PathBuf>) -> Result<String> {
    let mut buf = String::new();
    if let Some(path) = file {
        File::open(&path)
            .with_context(|| format!("opening manifest {}", path.display()))?
            .read_to_string(&mut buf)
            .with_context(|| format!("reading manifest {}", path.display()))?;
    } else {
        stdin()
            .read_to_string(&mut buf)
            .context("reading stdin for manifest JSON")?;
    }
    Ok(buf)
}

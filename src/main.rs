//! Nodal - linear network analysis from the command line
//!
//! Reads a netlist, prints the admittance matrix, the current vector and the
//! node voltages.
//!
//! # Usage
//!
//! ```bash
//! nodal divider.net
//! RUST_LOG=debug nodal --mode ac --ground 0 filter.net
//! ```

use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use nodal_core::{
    circuit::NodalSystem,
    error::Result,
    netlist::{self, AnalysisMode, NetlistConfig},
    solver::{self, AnalysisScalar},
    Polar, GROUND_NODE,
};

/// Nodal analysis of linear electrical networks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the netlist file
    #[arg(value_name = "NETLIST")]
    netlist: PathBuf,

    /// Analysis to run
    #[arg(short, long, value_enum, default_value_t = AnalysisMode::Dc)]
    mode: AnalysisMode,

    /// Name of the reference node
    #[arg(short, long, default_value = GROUND_NODE)]
    ground: String,

    /// Print only the node voltages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let result = match args.mode {
        AnalysisMode::Dc => run::<f64>(&args),
        AnalysisMode::Ac => run::<Polar>(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run<T: AnalysisScalar>(args: &Args) -> Result<()> {
    let config = NetlistConfig::new().with_ground_name(args.ground.as_str());
    let system: NodalSystem<T> = netlist::parse_file(&args.netlist, &config)?;

    if !args.quiet {
        if let Some(frequency) = system.frequency {
            println!("Frequency: {} Hz", frequency);
        }
        println!("Admittance matrix:");
        println!("{}", system.matrix);
        println!("Current vector:");
        println!("{}", system.currents);
        println!("Node voltages:");
    }

    let voltages = solver::solve(&system)?;
    print_voltages(&voltages);
    Ok(())
}

fn print_voltages<T: Display>(voltages: &[(String, T)]) {
    let width = voltages.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, voltage) in voltages {
        println!("{:<width$} = {}", name, voltage, width = width);
    }
}

use anyhow::{Context, Result};
use clap::Parser;
use day3::{CLIArgs, Error};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let (wire0, wire1) = day3::read_wires(&args.input_path).with_context(|| {
        format!(
            "Failed to read two wires from given input file({}).",
            args.input_path.display()
        )
    })?;

    let min_mht_dist = wire0
        .crossings(&wire1)
        .iter()
        .map(|p| p.mht_dist())
        .min()
        .ok_or(Error::NoIntersection)?;
    println!(
        "The Manhattan distance from the origin to the closest crossing of the two given wires is {}.",
        min_mht_dist
    );

    Ok(())
}

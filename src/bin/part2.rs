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

    let min_steps_sum = wire0
        .crossing_steps(&wire1)
        .into_iter()
        .min()
        .ok_or(Error::NoIntersection)?;
    println!(
        "The fewest combined steps both given wires take to reach a crossing is {}.",
        min_steps_sum
    );

    Ok(())
}

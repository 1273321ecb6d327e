use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{Context, Result};
use clap::Parser;

use crate::wire::Wire;

pub mod wire;

#[derive(Debug)]
pub enum Error {
    InvalidMoveText(String),
    WireCount(usize),
    NoIntersection,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidMoveText(s) => write!(f, "Invalid text({}) for one move of a wire.", s),
            Error::WireCount(n) => write!(f, "Expect exactly 2 wires in input, but found {}.", n),
            Error::NoIntersection => {
                write!(f, "Two given wires don't cross anywhere except the origin.")
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub fn read_wires<P: AsRef<Path>>(path: P) -> Result<(Wire, Wire)> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut wires = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let s = line.with_context(|| {
            format!(
                "Failed to read line #{} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if s.trim().is_empty() {
            continue;
        }

        wires.push(
            Wire::from_str(&s)
                .with_context(|| format!("Failed to parse line #{} as a wire.", ind + 1))?,
        );
    }

    match <[Wire; 2]>::try_from(wires) {
        Ok([wire0, wire1]) => Ok((wire0, wire1)),
        Err(wires) => Err(Error::WireCount(wires.len()).into()),
    }
}

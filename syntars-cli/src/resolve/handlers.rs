use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use rayon::prelude::*;

use syntars_core::models::Match;
use syntars_core::utils::read_lines;
use syntars_matches::MatchSet;

use crate::records::{read_matches, write_matches};

pub fn run_resolve(matches: &ArgMatches) -> Result<()> {
    let tolerance = *matches.get_one::<u64>("tolerance").unwrap_or(&0);

    if let Some(batch) = matches.get_one::<String>("batch") {
        return run_batch(Path::new(batch), tolerance);
    }

    let input = matches
        .get_one::<String>("matches")
        .context("either -m <matches> or --batch is required")?;

    let resolved = resolve_file(Path::new(input), tolerance)?;

    match matches.get_one::<String>("output") {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            write_matches(&mut out, &resolved)?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_matches(&mut out, &resolved)?;
        }
    }
    Ok(())
}

/// Read, resolve, and purge one genome pair's match file.
pub fn resolve_file(path: &Path, tolerance: u64) -> Result<Vec<Match>> {
    let raw = read_matches(path)?;
    let mut set = MatchSet::new(raw);
    set.resolve_overlaps(tolerance)
        .with_context(|| format!("resolving {}", path.display()))?;
    set.purge_null_intervals();
    Ok(set.into_matches())
}

/// Resolve many pairs listed in a batch file. Each pair is independent, so
/// this is a plain data-parallel fan-out with no shared state.
fn run_batch(list: &Path, tolerance: u64) -> Result<()> {
    let paths: Vec<PathBuf> = read_lines(list)?.into_iter().map(PathBuf::from).collect();

    paths.par_iter().try_for_each(|path| -> Result<()> {
        let resolved = resolve_file(path, tolerance)?;
        let out_path = path.with_extension("resolved.tsv");
        let mut out = BufWriter::new(File::create(&out_path)?);
        write_matches(&mut out, &resolved)?;
        Ok(())
    })
}

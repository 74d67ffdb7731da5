use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use syntars_blocks::{assign_blocks, unimog_record};
use syntars_core::models::{GenomeSpace, Match};

use crate::resolve::handlers::resolve_file;

pub fn run_unimog(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("matches")
        .expect("A path to a match file is required.");
    let ref_name = matches
        .get_one::<String>("refname")
        .expect("A reference genome name is required.");
    let qry_name = matches
        .get_one::<String>("qryname")
        .expect("A query genome name is required.");

    let tolerance = *matches.get_one::<u64>("tolerance").unwrap_or(&0);
    let min_len = *matches.get_one::<u64>("minlen").unwrap_or(&200);

    let resolved = resolve_file(Path::new(input), tolerance)?;

    let ref_len = matches
        .get_one::<u64>("reflen")
        .copied()
        .unwrap_or_else(|| covered_end(&resolved, GenomeSpace::Reference));
    let qry_len = matches
        .get_one::<u64>("qrylen")
        .copied()
        .unwrap_or_else(|| covered_end(&resolved, GenomeSpace::Query));

    let record = build_record(&resolved, min_len, ref_name, qry_name, ref_len, qry_len);

    match matches.get_one::<String>("output") {
        Some(path) => File::create(path)?.write_all(record.as_bytes())?,
        None => io::stdout().write_all(record.as_bytes())?,
    }
    Ok(())
}

fn build_record(
    resolved: &[Match],
    min_len: u64,
    ref_name: &str,
    qry_name: &str,
    ref_len: u64,
    qry_len: u64,
) -> String {
    let mut assignment = assign_blocks(resolved, min_len);
    let next = assignment.next_id;
    let next = assignment.reference.fill_unmatched(ref_len, min_len, next);
    assignment.query.fill_unmatched(qry_len, min_len, next);

    let pair = format!("{ref_name}~{qry_name}");
    unimog_record(
        &pair,
        ref_name,
        qry_name,
        &assignment.reference,
        &assignment.query,
    )
}

fn covered_end(matches: &[Match], space: GenomeSpace) -> u64 {
    matches.iter().map(|m| m.span(space).end).max().unwrap_or(0)
}

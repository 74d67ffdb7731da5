//! TSV parsing and writing for raw match records.
//!
//! One record per line: `ref_start  ref_end  qry_start  qry_end  strand`
//! plus an optional sixth column of `;`-separated indels, each
//! `KIND,ref_start,qry_start,len` with `KIND` one of `INS`/`DEL`.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use syntars_core::models::{Coord, Indel, IndelKind, Match, Strand};
use syntars_core::utils::read_lines;

pub fn read_matches(path: &Path) -> Result<Vec<Match>> {
    let mut matches = Vec::new();
    for (lineno, line) in read_lines(path)?.iter().enumerate() {
        let m = parse_match(line)
            .with_context(|| format!("bad match record at {}:{}", path.display(), lineno + 1))?;
        matches.push(m);
    }
    Ok(matches)
}

pub fn parse_match(line: &str) -> Result<Match> {
    let mut fields = line.split('\t');

    let ref_start = next_coord(&mut fields, "ref_start")?;
    let ref_end = next_coord(&mut fields, "ref_end")?;
    let qry_start = next_coord(&mut fields, "qry_start")?;
    let qry_end = next_coord(&mut fields, "qry_end")?;
    let strand: Strand = fields
        .next()
        .ok_or_else(|| anyhow!("missing strand field"))?
        .parse()?;
    let indels = match fields.next() {
        Some(spec) if !spec.is_empty() && spec != "." => parse_indels(spec)?,
        _ => Vec::new(),
    };

    Ok(Match::from_coords(
        ref_start, ref_end, qry_start, qry_end, strand, indels,
    )?)
}

fn next_coord<'a>(fields: &mut impl Iterator<Item = &'a str>, name: &str) -> Result<Coord> {
    let field = fields
        .next()
        .ok_or_else(|| anyhow!("missing {name} field"))?;
    field
        .parse()
        .with_context(|| format!("invalid {name}: {field}"))
}

fn parse_indels(spec: &str) -> Result<Vec<Indel>> {
    let mut indels = Vec::new();
    for part in spec.split(';') {
        let mut fields = part.split(',');
        let kind: IndelKind = fields
            .next()
            .ok_or_else(|| anyhow!("missing indel kind"))?
            .parse()?;
        let ref_start = next_coord(&mut fields, "indel ref_start")?;
        let qry_start = next_coord(&mut fields, "indel qry_start")?;
        let len = next_coord(&mut fields, "indel len")?;
        if fields.next().is_some() {
            return Err(anyhow!("trailing fields in indel: {part}"));
        }
        indels.push(Indel::new(kind, ref_start, qry_start, len));
    }
    Ok(indels)
}

pub fn write_matches<W: Write>(out: &mut W, matches: &[Match]) -> Result<()> {
    for m in matches {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            m.ref_span.start, m.ref_span.end, m.qry_span.start, m.qry_span.end, m.strand
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use syntars_core::models::Span;

    #[rstest]
    fn test_parse_plain_record() {
        let m = parse_match("100\t200\t500\t600\t1").unwrap();
        assert_eq!(m.ref_span, Span::new(100, 200).unwrap());
        assert_eq!(m.qry_span, Span::new(500, 600).unwrap());
        assert_eq!(m.strand, Strand::Forward);
        assert_eq!(m.indels.is_empty(), true);
    }

    #[rstest]
    fn test_parse_record_with_indels() {
        let m = parse_match("100\t200\t500\t610\t-1\tINS,120,520,10").unwrap();
        assert_eq!(m.strand, Strand::Reverse);
        assert_eq!(m.indels, vec![Indel::new(IndelKind::Insertion, 120, 520, 10)]);
    }

    #[rstest]
    fn test_parse_rejects_inverted_span() {
        assert_eq!(parse_match("200\t100\t500\t600\t1").is_err(), true);
    }

    #[rstest]
    fn test_parse_rejects_bad_strand() {
        assert_eq!(parse_match("100\t200\t500\t600\t2").is_err(), true);
    }

    #[rstest]
    fn test_round_trip_through_writer() {
        let m = parse_match("100\t200\t500\t600\t-1").unwrap();
        let mut buf = Vec::new();
        write_matches(&mut buf, &[m]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "100\t200\t500\t600\t-1\n");
    }

    #[rstest]
    fn test_read_matches_reports_line_numbers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matches.tsv");
        std::fs::write(&path, "100\t200\t500\t600\t1\nnot\ta\trecord\n").unwrap();

        let err = read_matches(&path).unwrap_err();
        assert_eq!(format!("{err}").contains(":2"), true);
    }
}

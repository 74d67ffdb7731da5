use clap::{Command, arg, value_parser};

pub const RESOLVE_CMD: &str = "resolve";

pub fn create_resolve_cli() -> Command {
    Command::new(RESOLVE_CMD)
        .author("Databio")
        .about("Resolve match overlaps into a disjoint set of synteny blocks")
        .arg_required_else_help(true)
        .arg(
            arg!(-m <matches> "TSV of match records (ref_start ref_end qry_start qry_end strand [indels])")
                .required(false),
        )
        .arg(
            arg!(-t <tolerance> "Overlap length (bases) to leave unresolved")
                .required(false)
                .value_parser(value_parser!(u64))
                .default_value("0"),
        )
        .arg(arg!(-o <output> "Output path (stdout when omitted)").required(false))
        .arg(
            arg!(--batch <batch> "File listing many match TSVs; each is resolved in parallel to <name>.resolved.tsv")
                .required(false)
                .conflicts_with("matches"),
        )
}

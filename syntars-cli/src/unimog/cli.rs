use clap::{Command, arg, value_parser};

pub const UNIMOG_CMD: &str = "unimog";

pub fn create_unimog_cli() -> Command {
    Command::new(UNIMOG_CMD)
        .author("Databio")
        .about("Resolve a genome pair and emit its unimog gene-order record")
        .arg_required_else_help(true)
        .arg(arg!(-m <matches> "TSV of match records for the pair").required(true))
        .arg(
            arg!(-t <tolerance> "Overlap length (bases) to leave unresolved")
                .required(false)
                .value_parser(value_parser!(u64))
                .default_value("0"),
        )
        .arg(
            arg!(-l <minlen> "Minimum block length in bases")
                .required(false)
                .value_parser(value_parser!(u64))
                .default_value("200"),
        )
        .arg(arg!(--refname <refname> "Name of the reference genome").required(true))
        .arg(arg!(--qryname <qryname> "Name of the query genome").required(true))
        .arg(
            arg!(--reflen <reflen> "Reference genome length (defaults to the last covered base)")
                .required(false)
                .value_parser(value_parser!(u64)),
        )
        .arg(
            arg!(--qrylen <qrylen> "Query genome length (defaults to the last covered base)")
                .required(false)
                .value_parser(value_parser!(u64)),
        )
        .arg(arg!(-o <output> "Output path (stdout when omitted)").required(false))
}

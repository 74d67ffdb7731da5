mod records;
mod resolve;
mod unimog;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "syntars";
    pub const BIN_NAME: &str = "syntars";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Reconcile pairwise genome alignment matches into a disjoint set of synteny blocks for rearrangement-distance analysis.")
        .subcommand_required(true)
        .subcommand(resolve::cli::create_resolve_cli())
        .subcommand(unimog::cli::create_unimog_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // RESOLVE
        //
        Some((resolve::cli::RESOLVE_CMD, matches)) => {
            resolve::handlers::run_resolve(matches)?;
        }

        //
        // UNIMOG
        //
        Some((unimog::cli::UNIMOG_CMD, matches)) => {
            unimog::handlers::run_unimog(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

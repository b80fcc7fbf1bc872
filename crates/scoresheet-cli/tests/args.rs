//! Argument parsing tests for the `scoresheet` binary.

use std::path::Path;

use chrono::NaiveDate;
use clap::{CommandFactory, Parser};

use scoresheet_cli::cli::{Cli, Command};

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn build_accepts_snapshot_and_options() {
    let cli = Cli::parse_from([
        "scoresheet",
        "build",
        "records.json",
        "--output",
        "sheet.json",
        "--as-of",
        "2017-01-15",
    ]);
    let Command::Build(args) = cli.command else {
        panic!("expected build command");
    };
    assert_eq!(args.snapshot, Path::new("records.json"));
    assert_eq!(args.output.as_deref(), Some(Path::new("sheet.json")));
    assert_eq!(
        args.as_of,
        Some(NaiveDate::from_ymd_opt(2017, 1, 15).expect("valid date"))
    );
    assert!(args.locale.is_none());
}

#[test]
fn addresses_accepts_snapshot() {
    let cli = Cli::parse_from(["scoresheet", "addresses", "records.json"]);
    let Command::Addresses(args) = cli.command else {
        panic!("expected addresses command");
    };
    assert_eq!(args.snapshot, Path::new("records.json"));
    assert!(args.as_of.is_none());
}

#[test]
fn malformed_as_of_date_is_rejected() {
    let result =
        Cli::try_parse_from(["scoresheet", "build", "records.json", "--as-of", "15/01/2017"]);
    assert!(result.is_err());
}

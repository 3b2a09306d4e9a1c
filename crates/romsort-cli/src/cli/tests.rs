use super::*;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_run() {
    match parse(&["romsort", "run"]) {
        CliCommand::Run => {}
        _ => panic!("expected Run"),
    }
}

#[test]
fn cli_parse_scan() {
    match parse(&["romsort", "scan"]) {
        CliCommand::Scan => {}
        _ => panic!("expected Scan"),
    }
}

#[test]
fn cli_parse_lookup() {
    match parse(&["romsort", "lookup", "12345"]) {
        CliCommand::Lookup { id } => assert_eq!(id, "12345"),
        _ => panic!("expected Lookup"),
    }
}

#[test]
fn cli_parse_sanitize() {
    match parse(&["romsort", "sanitize", "Test: Game/Name"]) {
        CliCommand::Sanitize { name } => assert_eq!(name, "Test: Game/Name"),
        _ => panic!("expected Sanitize"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["romsort", "frobnicate"]).is_err());
}

#[test]
fn cli_lookup_requires_an_identifier() {
    assert!(Cli::try_parse_from(["romsort", "lookup"]).is_err());
}

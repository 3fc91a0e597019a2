use super::*;
use clap::CommandFactory;
use std::io::Cursor;
use tempfile::NamedTempFile;

fn verdict(candidate: &str, matched: bool) -> CandidateVerdict {
    CandidateVerdict {
        candidate: candidate.to_string(),
        matched,
    }
}

fn parse_check(argv: &[&str]) -> CheckArgs {
    let cli = Cli::try_parse_from(argv).expect("parse cli");
    let Command::Check(args) = cli.command;
    args
}

#[test]
fn parses_check_args() {
    let args = parse_check(&[
        "namevar",
        "check",
        "Mrinal Vinay Sinha",
        "M. V. Sinha",
        "Sinha Mrinal",
        "--json",
        "--jobs",
        "2",
    ]);

    assert_eq!(args.name, "Mrinal Vinay Sinha");
    assert_eq!(args.candidates, vec!["M. V. Sinha", "Sinha Mrinal"]);
    assert_eq!(args.jobs, Some(2));
    assert_eq!(output_format(&args), OutputFormat::Json);
}

#[test]
fn verbose_flag_is_global_and_counts() {
    let cli = Cli::try_parse_from(["namevar", "check", "-vv", "Sinha"]).expect("parse cli");
    assert_eq!(cli.verbose, 2);
}

#[test]
fn json_and_ndjson_conflict() {
    let parse = Cli::try_parse_from(["namevar", "check", "--json", "--ndjson", "Sinha"]);
    assert!(parse.is_err());
}

#[test]
fn name_is_required() {
    let parse = Cli::try_parse_from(["namevar", "check"]);
    assert!(parse.is_err());
}

#[test]
fn checks_candidates_in_input_order() {
    let name = CanonicalName::parse("Mrinal Vinay Sinha").expect("name");
    let candidates = vec![
        "Totally Different Name".to_string(),
        "M.V. Sinha".to_string(),
        "sinha vinay m".to_string(),
    ];

    let verdicts = check_candidates(&name, candidates, Some(2)).expect("check");

    assert_eq!(
        verdicts,
        vec![
            verdict("Totally Different Name", false),
            verdict("M.V. Sinha", true),
            verdict("sinha vinay m", true),
        ]
    );
}

#[test]
fn gathers_candidates_from_stdin_when_flagged() {
    let mut stdin = Cursor::new(b"M. Sinha\n\n  Sinha Mrinal  \n".to_vec());
    let candidates = gather_candidates(&[], true, None, &mut stdin).expect("candidates");

    assert_eq!(candidates, vec!["M. Sinha", "Sinha Mrinal"]);
}

#[test]
fn dash_placeholder_reads_stdin_and_merges_other_candidates() {
    let mut stdin = Cursor::new(b"M. Sinha\n".to_vec());
    let candidates = gather_candidates(
        &["-".to_string(), "Sinha M".to_string()],
        false,
        None,
        &mut stdin,
    )
    .expect("candidates");

    assert_eq!(candidates, vec!["M. Sinha", "Sinha M"]);
}

#[test]
fn gathers_candidates_from_file() {
    let mut file = NamedTempFile::new().expect("tempfile");
    writeln!(file, "Sinha. M").expect("write");
    writeln!(file, "   ").expect("write");
    writeln!(file, "Mrinal").expect("write");

    let candidates = gather_candidates(
        &["extra".to_string()],
        false,
        Some(file.path()),
        Cursor::new(Vec::new()),
    )
    .expect("candidates");

    assert_eq!(candidates, vec!["Sinha. M", "Mrinal", "extra"]);
}

#[test]
fn missing_candidates_file_is_reported() {
    let err = gather_candidates(
        &[],
        false,
        Some(Path::new("/definitely/not/here.txt")),
        Cursor::new(Vec::new()),
    )
    .expect_err("missing file");

    assert!(err.to_string().contains("opening candidates file"));
}

#[test]
fn no_candidates_gathered_means_enumeration() {
    let candidates =
        gather_candidates(&[], true, None, Cursor::new(b"\n\n".to_vec())).expect("candidates");
    assert!(candidates.is_empty());
}

#[test]
fn writes_plain_verdicts() {
    let verdicts = vec![verdict("M. Sinha", true), verdict("Nobody", false)];

    let mut buf = Cursor::new(Vec::new());
    write_plain(&verdicts, &mut buf, false).expect("write");

    let output = String::from_utf8(buf.into_inner()).expect("utf8");
    assert_eq!(output, "M. Sinha\ttrue\nNobody\tfalse\n");
}

#[test]
fn columns_align_verdicts() {
    let verdicts = vec![verdict("Sinha Mrinal", true), verdict("M", false)];

    let mut buf = Cursor::new(Vec::new());
    write_columns(&verdicts, &mut buf, false).expect("write");

    let output = String::from_utf8(buf.into_inner()).expect("utf8");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0].find("true").expect("true"),
        lines[1].find("false").expect("false")
    );
}

#[test]
fn writes_variants_one_per_line() {
    let name = CanonicalName::parse("Mrinal Sinha").expect("name");
    let variants = name.variants();

    let mut buf = Cursor::new(Vec::new());
    write_variants(&name, &variants, OutputFormat::Plain, &mut buf, false).expect("write");

    let output = String::from_utf8(buf.into_inner()).expect("utf8");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines.contains(&"sinha. m"));
}

#[test]
fn writes_variant_report_as_json() {
    let name = CanonicalName::parse("Sinha").expect("name");
    let variants = name.variants();

    let mut buf = Cursor::new(Vec::new());
    write_variants(&name, &variants, OutputFormat::Json, &mut buf, false).expect("write");

    let parsed: serde_json::Value =
        serde_json::from_slice(&buf.into_inner()).expect("json document");
    assert_eq!(parsed["name"], "sinha");
    assert_eq!(parsed["variants"], serde_json::json!(["sinha"]));
}

#[test]
fn color_choice_is_applied() {
    let verdicts = vec![verdict("M. Sinha", true)];

    let mut buf = Cursor::new(Vec::new());
    write_plain(&verdicts, &mut buf, true).expect("write");

    let output = String::from_utf8(buf.into_inner()).expect("utf8");
    assert!(output.contains("\u{1b}[32mtrue"));
}

#[test]
fn verbosity_maps_to_levels() {
    use tracing::Level;

    assert_eq!(logging::level_for(0), Level::WARN);
    assert_eq!(logging::level_for(1), Level::INFO);
    assert_eq!(logging::level_for(2), Level::DEBUG);
    assert_eq!(logging::level_for(9), Level::TRACE);
}

#[test]
fn help_output_lists_input_flags() {
    let mut root = Cli::command();
    let check = root
        .find_subcommand_mut("check")
        .expect("check command present");
    let help = check.render_long_help().to_string();
    assert!(help.contains("--stdin"));
    assert!(help.contains("--candidates-file <CANDIDATES_FILE>"));
    assert!(help.contains("--color <COLOR>"));
}

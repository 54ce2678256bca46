// nmlreader/tests/parser_test.rs

//! Integration tests for structural parsing: block layout, comments,
//! quoting, error positions, and the strict and lenient loading paths.

use nmlreader::{reads, NamelistReader, NmlError, Parser};
use tempfile::TempDir;

#[test]
fn test_single_line_block_parses() -> Result<(), NmlError> {
    let mut reader = NamelistReader::parse("&N P=1 /")?;
    reader.select_namelist("N")?;
    assert_eq!(reader.get::<i32>("P", 0)?, 1);
    Ok(())
}

#[test]
fn test_two_blocks_are_independent() -> Result<(), NmlError> {
    let document = reads("&N P=1 /\n&OTHER Q=2 /\n")?;
    assert_eq!(document.len(), 2);

    let n = document.find("N").expect("first block by name");
    let other = document.find("OTHER").expect("second block by name");
    assert!(n.find("Q").is_none(), "Q belongs to the later block");
    assert_eq!(other.find("Q").expect("Q present").values(), ["2"]);
    Ok(())
}

#[test]
fn test_block_spanning_lines_with_comments() -> Result<(), NmlError> {
    let text = "\
! run description at the top
&time_control          ! block opener
  nsteps = 8640        ! four hour run
  dt = 2.5             ! seconds
/
";
    let document = reads(text)?;
    let nl = document.find("time_control").expect("block parsed");
    assert_eq!(nl.find("nsteps").expect("nsteps").values(), ["8640"]);
    assert_eq!(nl.find("dt").expect("dt").values(), ["2.5"]);
    Ok(())
}

#[test]
fn test_comment_marker_inside_quotes_is_data() -> Result<(), NmlError> {
    let document = reads("&s msg = 'stop! now' /\n")?;
    let values = document.find("s").unwrap().find("msg").unwrap().values();
    assert_eq!(values, ["'stop! now'"]);
    Ok(())
}

#[test]
fn test_opposite_quotes_swallowed_literally() -> Result<(), NmlError> {
    let document = reads("&s\n  a = \"don't\"\n  b = 'say \"hi\"'\n/\n")?;
    let nl = document.find("s").unwrap();
    assert_eq!(nl.find("a").unwrap().values(), ["\"don't\""]);
    assert_eq!(nl.find("b").unwrap().values(), ["'say \"hi\"'"]);
    Ok(())
}

#[test]
fn test_namelist_name_then_comment() -> Result<(), NmlError> {
    let document = reads("&N ! comment\n/\n")?;
    assert!(document.find("N").is_some());
    Ok(())
}

#[test]
fn test_bare_comment_and_blank_lines_are_noops() -> Result<(), NmlError> {
    let document = reads("! just a note\n\n   \n&n x = 1 /\n")?;
    assert_eq!(document.len(), 1);
    Ok(())
}

#[test]
fn test_missing_name_reports_line() {
    let err = reads("! header\n&\n").unwrap_err();
    assert_eq!(
        err,
        NmlError::parse("<input>", 2, "failed to find namelist name")
    );
}

#[test]
fn test_missing_equals_reports_line() {
    let err = reads("&n\n  x 5\n/\n").unwrap_err();
    assert_eq!(
        err,
        NmlError::parse("<input>", 2, "expected parameter assignment")
    );
}

#[test]
fn test_missing_value_reports_line() {
    let err = reads("&n\n  x = ! eaten by the comment\n/\n").unwrap_err();
    assert_eq!(
        err,
        NmlError::parse("<input>", 2, "couldn't parse value assignment")
    );
}

#[test]
fn test_unterminated_block_is_rejected() {
    let err = reads("&open\n  x = 1\n").unwrap_err();
    assert_eq!(
        err,
        NmlError::parse("<input>", 2, "unterminated namelist 'open'")
    );
}

#[test]
fn test_unquoted_path_value_survives_slashes() -> Result<(), NmlError> {
    let document = reads("&io outdir = /scratch/run01  'log.txt' /\n")?;
    let outdir = document.find("io").unwrap().find("outdir").unwrap();
    assert_eq!(outdir.values(), ["/scratch/run01", "'log.txt'"]);
    Ok(())
}

#[test]
fn test_from_path_reads_a_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("run.nml");
    fs_err::write(&path, "&core rnday = 30 /\n")?;

    let mut reader = NamelistReader::from_path(&path)?;
    reader.select_namelist("core")?;
    assert_eq!(reader.get::<i32>("rnday", 0)?, 30);
    Ok(())
}

#[test]
fn test_from_path_error_names_the_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("broken.nml");
    fs_err::write(&path, "&core\n  rnday\n/\n")?;

    let err = NamelistReader::from_path(&path).unwrap_err();
    match err {
        NmlError::Parse { file, line, message } => {
            assert!(file.ends_with("broken.nml"), "label was {file}");
            assert_eq!(line, 2);
            assert_eq!(message, "expected parameter assignment");
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_lenient_load_keeps_partial_document() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("partial.nml");
    fs_err::write(
        &path,
        "&good\n  x = 1\n/\n&bad\n  y\n/\n&never_reached\n  z = 3\n/\n",
    )?;

    let mut reader = NamelistReader::from_path_lenient(&path)?;
    assert_eq!(reader.document().len(), 2, "parsing stopped inside &bad");
    assert!(reader.document().find("never_reached").is_none());

    reader.select_namelist("good")?;
    assert_eq!(reader.get::<i32>("x", 0)?, 1);
    Ok(())
}

#[test]
fn test_lenient_load_tolerates_unterminated_tail() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("tail.nml");
    fs_err::write(&path, "&tail\n  x = 1\n")?;

    let mut reader = NamelistReader::from_path_lenient(&path)?;
    reader.select_namelist("tail")?;
    assert_eq!(reader.get::<i32>("x", 0)?, 1);
    Ok(())
}

#[test]
fn test_lenient_load_still_reports_missing_file() {
    let err = NamelistReader::from_path_lenient("no/such/dir/a.nml").unwrap_err();
    assert!(matches!(err, NmlError::Io(_)));
}

#[test]
fn test_streaming_feed_line_api() -> Result<(), NmlError> {
    let mut parser = Parser::with_source("inline");
    for line in ["&wind", "  u10 = 12.5", "  v10 = -3.25", "/"] {
        parser.feed_line(line)?;
    }
    let document = parser.finish()?;
    let nl = document.find("wind").expect("wind block");
    assert_eq!(nl.find("u10").expect("u10").values(), ["12.5"]);
    assert_eq!(nl.find("v10").expect("v10").values(), ["-3.25"]);
    Ok(())
}

#[test]
fn test_values_continue_until_slash_on_same_line() -> Result<(), NmlError> {
    let document = reads("&n X = 1 2 3 /")?;
    let x = document.find("n").unwrap().find("X").unwrap();
    assert_eq!(x.values(), ["1", "2", "3"], "the closing slash is not a value");
    Ok(())
}

#[test]
fn test_second_assignment_on_a_line_extends_the_value_list() -> Result<(), NmlError> {
    // after a parameter's first value, everything on the line short of a
    // bare closing slash is consumed as further values
    let document = reads("&n x = 1 y = 2 /")?;
    let nl = document.find("n").unwrap();
    assert_eq!(nl.find("x").unwrap().values(), ["1", "y", "=", "2"]);
    assert!(nl.find("y").is_none(), "a new parameter needs its own line");
    Ok(())
}

#[test]
fn test_empty_block_is_legal() -> Result<(), NmlError> {
    let document = reads("&placeholder /\n")?;
    assert!(document.find("placeholder").unwrap().is_empty());
    Ok(())
}

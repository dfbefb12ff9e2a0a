use std::path::PathBuf;

use gridstat::config::{CellDeleteMode, ConfigFlags, load_config_flags, parse_flag_tokens};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".gridstatrc");
    let content = r#"
# comment
--rows 8

--cell-delete remove
   
--debug-log=events.log
"#;
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert_eq!(flags.rows, Some(8));
    assert_eq!(flags.cell_delete, Some(CellDeleteMode::Remove));
    assert_eq!(flags.debug_log, Some(PathBuf::from("events.log")));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".gridstatrc");
    let content = "--rows 8\n--cols 3 --seed 42\n--debug-log file.log\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "gridstat".to_string(),
        "--cols".to_string(),
        "9".to_string(),
        "--perf".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert_eq!(effective.rows, Some(8), "file flags should remain");
    assert_eq!(effective.cols, Some(9), "cli should override cols");
    assert_eq!(effective.seed, Some(42));
    assert!(effective.perf, "cli flags should be applied");
    assert_eq!(
        effective.debug_log,
        Some(PathBuf::from("file.log")),
        "file config should be preserved when CLI does not override"
    );
}

#[test]
fn test_parse_flag_tokens_handles_equals_syntax() {
    let args = vec![
        "gridstat".to_string(),
        "--neighbors=3".to_string(),
        "--cell-delete=zero".to_string(),
    ];
    let flags = parse_flag_tokens(&args);
    assert_eq!(flags.neighbors, Some(3));
    assert_eq!(flags.cell_delete, Some(CellDeleteMode::Zero));
}

#[test]
fn test_config_union_merges_booleans() {
    let file = ConfigFlags {
        perf: true,
        ..ConfigFlags::default()
    };
    let cli = ConfigFlags {
        seed: Some(1),
        ..ConfigFlags::default()
    };
    let merged = file.union(&cli);
    assert!(merged.perf);
    assert_eq!(merged.seed, Some(1));
}

#[test]
fn test_local_file_overrides_global_file() {
    let dir = tempfile::tempdir().unwrap();
    let global = dir.path().join("config");
    let local = dir.path().join(".gridstatrc");
    std::fs::write(&global, "--rows 4\n--neighbors 2\n").unwrap();
    std::fs::write(&local, "--neighbors 7\n").unwrap();

    let merged = load_config_flags(&global)
        .unwrap()
        .union(&load_config_flags(&local).unwrap());
    assert_eq!(merged.rows, Some(4));
    assert_eq!(merged.neighbors, Some(7));
}

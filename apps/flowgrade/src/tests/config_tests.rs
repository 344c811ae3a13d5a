use super::*;
use std::io::Write;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("tempfile");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn file_values_override_defaults() {
    let file = config_file("server_url = \"http://analysis.internal:8080\"\n");

    let settings = load_settings(Some(file.path())).expect("settings");
    assert_eq!(settings.server_url, "http://analysis.internal:8080");
    assert_eq!(settings.log_filter, Settings::default().log_filter);
}

#[test]
fn partial_file_keeps_remaining_defaults() {
    let file = config_file("log_filter = \"debug,client_core=trace\"\n");

    let settings = load_settings(Some(file.path())).expect("settings");
    assert_eq!(settings.server_url, DEFAULT_SERVER_URL);
    assert_eq!(settings.log_filter, "debug,client_core=trace");
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("absent.toml");

    assert!(load_settings(Some(missing.as_path())).is_err());
}

#[test]
fn malformed_file_is_an_error() {
    let file = config_file("server_url = [1, 2\n");

    assert!(load_settings(Some(file.path())).is_err());
}

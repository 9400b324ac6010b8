//! 설정 파일 로드 테스트.
use emi_calculator::config::{self, ConfigError, RangeSet};
use std::io::Write;

#[test]
fn loads_ranges_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(
        file,
        r#"
language = "en-in"
debounce_ms = 250

[ranges.principal]
min = 100000.0
max = 5000000.0
step = 10000.0
default_value = 500000.0
"#
    )
    .expect("write");
    let cfg = config::load_from_path(file.path()).expect("load");
    assert_eq!(cfg.debounce_ms, 250);
    assert_eq!(cfg.ranges.principal.max, 5_000_000.0);
    assert_eq!(cfg.ranges.tenure, RangeSet::default().tenure);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = config::load_from_path(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn default_outside_range_is_rejected() {
    let err = config::parse_config(
        r#"
[ranges.tenure]
min = 0.0
max = 10.0
step = 1.0
default_value = 12.0
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidRange { .. }));
}

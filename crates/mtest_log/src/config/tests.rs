#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use tempfile::tempdir;

fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| {
        vars.iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| (*value).to_string())
    }
}

#[test]
fn test_config_defaults() {
    let config = LogConfig::from_lookup(lookup(&[]));
    assert_eq!(config, LogConfig::default());
    assert_eq!(config.color, ColorMode::Auto);
    assert!(config.file.is_none());
}

#[test]
fn test_config_reads_variables() {
    let config = LogConfig::from_lookup(lookup(&[
        ("MTEST_COLOR", "never"),
        ("MTEST_LOG_FILE", "out/run.log"),
    ]));
    assert_eq!(config.color, ColorMode::Never);
    assert_eq!(config.file, Some(PathBuf::from("out/run.log")));
}

#[test]
fn test_config_ignores_bad_values() {
    let config = LogConfig::from_lookup(lookup(&[
        ("MTEST_COLOR", "sometimes"),
        ("MTEST_LOG_FILE", "  "),
    ]));
    assert_eq!(config, LogConfig::default());
}

#[test]
fn test_config_build_attaches_file_sink() {
    let dir = tempdir().unwrap();
    let config = LogConfig {
        color: ColorMode::Never,
        file: Some(dir.path().join("run.log")),
    };

    let log = config.build(false).unwrap();
    assert_eq!(log.sink_count(), 2);

    let console_only = LogConfig::default().build(false).unwrap();
    assert_eq!(console_only.sink_count(), 1);
}

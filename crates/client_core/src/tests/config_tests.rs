use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn defaults_match_local_collector_and_four_second_toast() {
    let settings = Settings::default();
    assert_eq!(settings.collector_url, "http://localhost:8081");
    assert_eq!(settings.notification_ttl, Duration::from_secs(4));
    assert_eq!(settings.request_timeout, None);
}

#[test]
fn file_overrides_apply_only_present_keys() {
    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, "request_timeout_ms = 2500\n").expect("parse");
    assert_eq!(settings.collector_url, DEFAULT_COLLECTOR_URL);
    assert_eq!(settings.request_timeout, Some(Duration::from_millis(2500)));

    apply_file_overrides(
        &mut settings,
        "collector_url = \"http://collector:9000\"\nnotification_ttl_ms = 1500\n",
    )
    .expect("parse");
    assert_eq!(settings.collector_url, "http://collector:9000");
    assert_eq!(settings.notification_ttl, Duration::from_millis(1500));
}

#[test]
fn app_prefixed_env_wins_over_plain_env() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        env_of(&[
            ("COURSE_COLLECTOR_URL", "http://plain:1"),
            ("APP__COLLECTOR_URL", "http://prefixed:2"),
            ("APP__NOTIFICATION_TTL_MS", "250"),
        ]),
    );
    assert_eq!(settings.collector_url, "http://prefixed:2");
    assert_eq!(settings.notification_ttl, Duration::from_millis(250));
}

#[test]
fn unparseable_numeric_env_is_ignored() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        env_of(&[
            ("APP__NOTIFICATION_TTL_MS", "soon"),
            ("APP__REQUEST_TIMEOUT_MS", "-5"),
        ]),
    );
    assert_eq!(settings.notification_ttl, DEFAULT_NOTIFICATION_TTL);
    assert_eq!(settings.request_timeout, None);
}

#[test]
fn missing_file_yields_defaults() {
    let path = env::temp_dir().join("course_client_missing_config_does_not_exist.toml");
    let settings = load_settings(&path).expect("settings");
    assert_eq!(settings.notification_ttl, DEFAULT_NOTIFICATION_TTL);
}

#[test]
fn malformed_file_reports_path() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("course_client_bad_config_{suffix}.toml"));
    fs::write(&path, "notification_ttl_ms = \"four\"\n").expect("write config");

    let err = load_settings(&path).expect_err("must fail");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(&path.display().to_string()));

    fs::remove_file(path).expect("cleanup");
}

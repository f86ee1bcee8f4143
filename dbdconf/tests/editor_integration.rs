//! Integration tests for the configuration editor.
//!
//! These exercise the full load/mutate/dump lifecycle against real files,
//! including the round-trip and failure-atomicity guarantees.

use std::fs;

use dbdconf::conf::token::{DEBUG_FLAGS, PRIVATE_DATA};
use dbdconf::{ConfEditor, ConfigToken, Endpoint, Value};
use tempfile::TempDir;

/// Build a fully populated editor the way the orchestration glue would.
fn populate(editor: &mut ConfEditor) {
    editor.set(ConfigToken::ArchiveEvents, true).unwrap();
    editor.set(ConfigToken::ArchiveJobs, true).unwrap();
    editor.set(ConfigToken::ArchiveResvs, true).unwrap();
    editor.set(ConfigToken::ArchiveSteps, false).unwrap();
    editor.set(ConfigToken::ArchiveTXN, "no").unwrap();
    editor.set(ConfigToken::ArchiveUsage, false).unwrap();
    editor
        .set(ConfigToken::ArchiveScript, "/usr/sbin/slurm.dbd.archive")
        .unwrap();
    editor
        .set(ConfigToken::AuthInfo, "/var/run/munge/munge.socket.2")
        .unwrap();
    editor.set(ConfigToken::AuthType, "auth/munge").unwrap();
    editor.set(ConfigToken::AuthAltTypes, "auth/jwt").unwrap();
    editor
        .set(
            ConfigToken::AuthAltParameters,
            Value::Pairs(vec![("jwt_key".to_string(), "16549684561684@".to_string())]),
        )
        .unwrap();
    editor.set(ConfigToken::DbdHost, "slurmdbd-0").unwrap();
    editor.set(ConfigToken::DbdBackupHost, "slurmdbd-1").unwrap();
    editor.set(ConfigToken::DebugLevel, "info").unwrap();
    editor
        .set(ConfigToken::PluginDir, "/all/these/cool/plugins")
        .unwrap();
    editor.set(ConfigToken::PurgeEventAfter, "1month").unwrap();
    editor.set(ConfigToken::PurgeJobAfter, "12month").unwrap();
    editor.set(ConfigToken::PurgeResvAfter, "1month").unwrap();
    editor.set(ConfigToken::PurgeStepAfter, "1month").unwrap();
    editor.set(ConfigToken::PurgeSuspendAfter, "1month").unwrap();
    editor.set(ConfigToken::PurgeTXNAfter, "12month").unwrap();
    editor.set(ConfigToken::PurgeUsageAfter, "24month").unwrap();
    editor
        .set(ConfigToken::LogFile, "/var/log/slurmdbd.log")
        .unwrap();
    editor
        .set(ConfigToken::PidFile, "/var/run/slurmdbd.pid")
        .unwrap();
    editor.set(ConfigToken::SlurmUser, "slurm").unwrap();
    editor
        .set(ConfigToken::StoragePass, "supersecretpasswd")
        .unwrap();
    editor
        .set(ConfigToken::StorageType, "accounting_storage/mysql")
        .unwrap();
    editor.set(ConfigToken::StorageUser, "slurm").unwrap();
    editor.set(ConfigToken::StorageHost, "127.0.0.1").unwrap();
    editor.set(ConfigToken::StoragePort, 3306_u64).unwrap();
    editor.set(ConfigToken::StorageLoc, "slurm_acct_db").unwrap();
}

#[test]
fn test_full_lifecycle_create_read_remove() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("slurmdbd.conf");

    // Create and persist a full configuration.
    let mut editor = ConfEditor::open(&path).unwrap();
    populate(&mut editor);
    editor.dump().unwrap();

    // A fresh load sees semantically equal values.
    let mut editor = ConfEditor::open(&path).unwrap();
    assert_eq!(editor.get_bool(ConfigToken::ArchiveEvents), Some(true));
    assert_eq!(editor.get_bool(ConfigToken::ArchiveSteps), Some(false));
    assert_eq!(editor.get_bool(ConfigToken::ArchiveTXN), Some(false));
    assert_eq!(
        editor.get_raw(ConfigToken::ArchiveScript),
        Some("/usr/sbin/slurm.dbd.archive")
    );
    assert_eq!(editor.get_raw(ConfigToken::AuthType), Some("auth/munge"));
    assert_eq!(
        editor.get_list(ConfigToken::AuthAltTypes),
        Some(vec!["auth/jwt".to_string()])
    );
    assert_eq!(
        editor.get_pairs(ConfigToken::AuthAltParameters),
        Some(vec![("jwt_key".to_string(), "16549684561684@".to_string())])
    );
    assert_eq!(
        editor.get_list(ConfigToken::PluginDir),
        Some(vec!["/all/these/cool/plugins".to_string()])
    );
    assert_eq!(editor.get_raw(ConfigToken::PurgeUsageAfter), Some("24month"));
    assert_eq!(
        editor.get_number(ConfigToken::StoragePort).unwrap(),
        Some(3306)
    );
    assert_eq!(editor.get_raw(ConfigToken::StorageLoc), Some("slurm_acct_db"));

    // Strict removal of everything that was set.
    let present: Vec<ConfigToken> = editor.entries().map(|(token, _)| token).collect();
    for token in present {
        editor.unset(token).unwrap();
    }
    assert!(editor.is_empty());
    editor.dump().unwrap();

    let reloaded = ConfEditor::open(&path).unwrap();
    assert!(reloaded.is_empty());
}

#[test]
fn test_comment_drop_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("slurmdbd.conf");
    fs::write(
        &path,
        "# hand-written note\nDbdHost=slurmdbd-0\n# another note\nDbdPort=6819\n",
    )
    .unwrap();

    let editor = ConfEditor::open(&path).unwrap();
    editor.dump().unwrap();

    let first = fs::read_to_string(&path).unwrap();
    let comment_lines: Vec<&str> = first.lines().filter(|l| l.starts_with('#')).collect();
    // Only the three banner lines survive.
    assert_eq!(comment_lines.len(), 3);
    assert!(!first.contains("hand-written note"));

    // Re-loading the output is stable: a second dump differs only in the
    // banner timestamp line.
    let editor = ConfEditor::open(&path).unwrap();
    editor.dump().unwrap();
    let second = fs::read_to_string(&path).unwrap();

    let first_lines: Vec<&str> = first.lines().collect();
    let second_lines: Vec<&str> = second.lines().collect();
    assert_eq!(first_lines.len(), second_lines.len());
    for (index, (a, b)) in first_lines.iter().zip(&second_lines).enumerate() {
        if index == 1 {
            assert!(a.contains("generated at"));
            assert!(b.contains("generated at"));
        } else {
            assert_eq!(a, b);
        }
    }
}

#[test]
fn test_unrecognized_key_aborts_load_without_partial_population() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("slurmdbd.conf");
    fs::write(&path, "DbdHost=ok\nNotARealKey=foo\nDbdPort=6819\n").unwrap();

    let err = ConfEditor::open(&path).unwrap_err();
    assert!(err.is_parse());

    // A live editor keeps its pre-load document when a reload fails.
    fs::write(&path, "DbdHost=ok\n").unwrap();
    let mut editor = ConfEditor::open(&path).unwrap();
    fs::write(&path, "NotARealKey=foo\n").unwrap();
    assert!(editor.load().is_err());
    assert_eq!(editor.get_raw(ConfigToken::DbdHost), Some("ok"));
    assert_eq!(editor.len(), 1);
}

#[test]
fn test_validator_rejections_leave_prior_values() {
    let dir = TempDir::new().unwrap();
    let mut editor = ConfEditor::open(dir.path().join("slurmdbd.conf")).unwrap();

    editor.set(ConfigToken::StoragePort, 3306_u64).unwrap();
    assert!(editor.set_raw(ConfigToken::StoragePort, "99999999").is_err());
    assert_eq!(
        editor.get_number(ConfigToken::StoragePort).unwrap(),
        Some(3306)
    );

    assert!(editor.set(ConfigToken::DebugLevel, "nonsense").is_err());
    assert_eq!(editor.get_raw(ConfigToken::DebugLevel), None);

    editor.set(ConfigToken::StoragePass, "goodpass").unwrap();
    assert!(editor.set(ConfigToken::StoragePass, "bad#pass").is_err());
    assert_eq!(editor.get_raw(ConfigToken::StoragePass), Some("goodpass"));
}

#[test]
fn test_list_elements_validate_individually() {
    let dir = TempDir::new().unwrap();
    let mut editor = ConfEditor::open(dir.path().join("slurmdbd.conf")).unwrap();

    let flags: Vec<String> = DEBUG_FLAGS.iter().take(3).map(|s| (*s).to_string()).collect();
    editor.set(ConfigToken::DebugFlags, flags.clone()).unwrap();
    assert_eq!(editor.get_list(ConfigToken::DebugFlags), Some(flags));

    let mut bad: Vec<String> = PRIVATE_DATA.iter().take(2).map(|s| (*s).to_string()).collect();
    bad.push("everything".to_string());
    assert!(editor.set(ConfigToken::PrivateData, bad).is_err());
    assert!(!editor.contains(ConfigToken::PrivateData));
}

#[test]
fn test_ipv6_endpoint_values_feed_storage_setters() {
    let dir = TempDir::new().unwrap();
    let mut editor = ConfEditor::open(dir.path().join("slurmdbd.conf")).unwrap();

    let Endpoint::Tcp { host, port } = Endpoint::parse("[::1]:1234").unwrap() else {
        panic!("expected a tcp endpoint");
    };
    assert_eq!(host, "::1");
    assert_eq!(port, "1234");

    // Bracket-stripped host and digit-string port pass the setters as-is.
    editor.set(ConfigToken::StorageHost, host.as_str()).unwrap();
    editor.set_raw(ConfigToken::StoragePort, port).unwrap();
    assert_eq!(editor.get_raw(ConfigToken::StorageHost), Some("::1"));
    assert_eq!(
        editor.get_number(ConfigToken::StoragePort).unwrap(),
        Some(1234)
    );
}

#[test]
fn test_apply_parameters_then_dump_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("slurmdbd.conf");
    let mut editor = ConfEditor::open(&path).unwrap();

    editor
        .apply_parameters([
            ("DbdHost", "slurmdbd-0"),
            ("DbdPort", "6819"),
            ("StorageHost", "10.0.0.5"),
            ("StoragePort", "3306"),
            ("StorageUser", "slurm"),
            ("StoragePass", "supersecret"),
            ("SlurmUser", ""),
        ])
        .unwrap();
    editor.dump().unwrap();

    let reloaded = ConfEditor::open(&path).unwrap();
    assert_eq!(reloaded.len(), 6);
    assert!(!reloaded.contains(ConfigToken::SlurmUser));
    assert_eq!(reloaded.get_raw(ConfigToken::StoragePass), Some("supersecret"));
}

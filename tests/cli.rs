//! End-to-end tests of the `zoom-notify` binary driven by environment variables.
//!
//! Each test starts from an empty environment and runs in dry-run mode, so
//! nothing leaves the machine.

use std::io::Write;
use std::process::{Command, Output};

const NEW_URL: &str = "https://new.example.com/hook";
const OLD_URL: &str = "https://old.example.com/hook";
const FILE_URL: &str = "https://file.example.com/hook";

fn zoom_notify(vars: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_zoom-notify"));
    command
        .env_clear()
        .env("NO_COLOR", "1")
        .env("PLUGIN_DRY_RUN", "true")
        .env("DRONE_COMMIT_SHA", "abcdef1234567890");
    for (key, value) in vars {
        command.env(key, value);
    }
    command.output().expect("binary should start")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

mod precedence {
    use super::*;

    #[test]
    fn plugin_webhook_wins_over_legacy_variable() {
        let output = zoom_notify(&[
            ("PLUGIN_WEBHOOK", NEW_URL),
            ("ZOOM_WEBHOOK", OLD_URL),
            ("PLUGIN_TOKEN", "secret"),
        ]);

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        let out = stdout(&output);
        assert!(out.contains(&format!("[dry-run] Would post to {NEW_URL}")));
        assert!(!out.contains("old.example.com"));
    }

    #[test]
    fn legacy_variables_are_used_when_alone() {
        let output = zoom_notify(&[("ZOOM_WEBHOOK", OLD_URL), ("ZOOM_TOKEN", "legacy")]);

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert!(stdout(&output).contains(&format!("[dry-run] Would post to {OLD_URL}")));
    }

    #[test]
    fn legacy_variable_wins_over_config_file() {
        let file = config_file(&format!("[webhook]\nurl = \"{FILE_URL}\"\ntoken = \"file\"\n"));
        let path = file.path().to_string_lossy().into_owned();

        let output = zoom_notify(&[("ZOOM_WEBHOOK", OLD_URL), ("PLUGIN_CONFIG", &path)]);

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        let out = stdout(&output);
        assert!(out.contains(&format!("[dry-run] Would post to {OLD_URL}")));
        assert!(!out.contains("file.example.com"));
    }

    #[test]
    fn config_file_is_used_without_variables() {
        let file = config_file(&format!("[webhook]\nurl = \"{FILE_URL}\"\ntoken = \"file\"\n"));
        let path = file.path().to_string_lossy().into_owned();

        let output = zoom_notify(&[("PLUGIN_CONFIG", &path)]);

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert!(stdout(&output).contains(&format!("[dry-run] Would post to {FILE_URL}")));
    }

    #[test]
    fn token_never_reaches_the_log() {
        let output = zoom_notify(&[
            ("PLUGIN_WEBHOOK", NEW_URL),
            ("PLUGIN_TOKEN", "do-not-print-me"),
        ]);

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert!(!stdout(&output).contains("do-not-print-me"));
        assert!(!stderr(&output).contains("do-not-print-me"));
    }
}

mod build_metadata {
    use super::*;

    #[test]
    fn drone_variables_reach_the_summary() {
        let output = zoom_notify(&[
            ("PLUGIN_WEBHOOK", NEW_URL),
            ("PLUGIN_TOKEN", "secret"),
            ("DRONE_REPO_OWNER", "acme"),
            ("DRONE_REPO_NAME", "widget"),
            ("DRONE_COMMIT_BRANCH", "main"),
            ("DRONE_COMMIT_AUTHOR", "alice"),
            ("DRONE_BUILD_STATUS", "success"),
            ("DRONE_BUILD_LINK", "http://ci/1"),
        ]);

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert!(
            stdout(&output)
                .contains("Summary: *success* [http://ci/1|acme/widget#abcdef12] (main) by alice")
        );
    }

    #[test]
    fn commit_message_is_logged_when_verbose() {
        let output = zoom_notify(&[
            ("PLUGIN_WEBHOOK", NEW_URL),
            ("PLUGIN_TOKEN", "secret"),
            ("PLUGIN_VERBOSE", "true"),
            ("DRONE_COMMIT_AUTHOR", "alice"),
            ("DRONE_COMMIT_MESSAGE", "Fix flaky upload"),
        ]);

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        let out = stdout(&output);
        assert!(out.contains(r#"message: "Fix flaky upload""#));
        assert!(out.contains("author: alice"));
    }
}

mod exit_codes {
    use super::*;

    #[test]
    fn missing_token_is_a_configuration_error() {
        let output = zoom_notify(&[("PLUGIN_WEBHOOK", NEW_URL)]);

        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("Webhook token is missing"));
    }

    #[test]
    fn missing_webhook_is_a_configuration_error() {
        let output = zoom_notify(&[("PLUGIN_TOKEN", "secret")]);

        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("Missing required field: webhook"));
    }

    #[test]
    fn short_commit_is_a_runtime_error() {
        let output = zoom_notify(&[
            ("PLUGIN_WEBHOOK", NEW_URL),
            ("PLUGIN_TOKEN", "secret"),
            ("DRONE_COMMIT_SHA", "abc"),
        ]);

        assert_eq!(output.status.code(), Some(2));
        assert!(stdout(&output).contains("too short"));
    }
}

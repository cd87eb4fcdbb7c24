#![cfg(unix)]

#[path = "common/mod.rs"]
mod common;

use common::{UnitTree, init_tracing};
use predicates::prelude::*;
use unitctl::{
    ActiveState, CommandRunner, Config, ExecFailure, OutputMatching, Subcommand, Systemctl,
    SystemctlRunner, UnitError, UnitLocator,
};

/// Stand-in for systemctl: `$1` is the verb, `$2` the unit.
const FAKE_SYSTEMCTL: &str = r#"
case "$1" in
    is-active) echo active ;;
    is-enabled) echo disabled; exit 1 ;;
    start) exit 0 ;;
    stop) echo "Failed to stop $2: Access denied" >&2; exit 4 ;;
    reload) echo "reloading $2"; echo "warning: slow" >&2 ;;
    *) echo "unknown verb $1" >&2; exit 2 ;;
esac
"#;

fn fake_runner() -> SystemctlRunner {
    SystemctlRunner::new("/bin/sh").with_args(["-c", FAKE_SYSTEMCTL, "systemctl"])
}

#[test]
fn runner_passes_subcommand_then_unit() {
    init_tracing();
    let output = fake_runner()
        .run(Subcommand::IsActive, "demo.service")
        .unwrap();

    assert!(output.success);
    assert_eq!(output.exit_code, Some(0));
    assert_eq!(output.combined, "active\n");
}

#[test]
fn runner_combines_stdout_and_stderr() {
    init_tracing();
    let output = fake_runner()
        .run(Subcommand::Reload, "demo.service")
        .unwrap();

    assert!(output.success);
    assert_eq!(output.combined, "reloading demo.service\nwarning: slow\n");
}

#[test]
fn runner_reports_exit_code() {
    init_tracing();
    let output = fake_runner().run(Subcommand::Stop, "demo.service").unwrap();

    assert!(!output.success);
    assert_eq!(output.exit_code, Some(4));
    assert_eq!(output.combined, "Failed to stop demo.service: Access denied\n");
}

#[test]
fn client_drives_real_process() {
    init_tracing();
    let tree = UnitTree::new();
    tree.install("/etc/systemd/system/", "demo.service");
    let ctl = Systemctl::new(tree.locator(), fake_runner());

    let demo = ctl.unit("demo.service").unwrap();
    assert!(demo.is_active().unwrap());
    demo.start().unwrap();

    // systemctl exits non-zero for a disabled unit.
    assert!(matches!(
        demo.is_enabled(),
        Err(UnitError::CommandExecution {
            source: ExecFailure::Exit(Some(1)),
            ..
        })
    ));

    let err = demo.stop().unwrap_err();
    let message = err.to_string();
    assert!(predicate::str::contains("Access denied").eval(&message));
    assert!(predicate::str::contains("exit status 4").eval(&message));

    assert!(matches!(
        demo.restart(),
        Err(UnitError::CommandExecution { .. })
    ));
}

#[test]
fn stopped_unit_is_started_through_active_state() {
    init_tracing();
    let tree = UnitTree::new();
    tree.install("/etc/systemd/system/", "nginx.service");
    let runner = SystemctlRunner::new("/bin/sh").with_args([
        "-c",
        r#"case "$1" in is-active) echo inactive; exit 3 ;; start) exit 0 ;; esac"#,
        "systemctl",
    ]);
    let ctl = Systemctl::new(tree.locator(), runner);
    let nginx = ctl.unit("nginx.service").unwrap();

    match nginx.is_active() {
        Err(UnitError::CommandExecution {
            output,
            source: ExecFailure::Exit(Some(3)),
            ..
        }) => assert_eq!(output, "inactive\n"),
        other => panic!("expected exit status 3, got {other:?}"),
    }

    let state = nginx.active_state().unwrap();
    assert_eq!(state, ActiveState::Inactive);
    assert!(!state.is_running());
    nginx.start().unwrap();
}

#[test]
fn client_from_config_uses_configured_command() {
    init_tracing();
    let tree = UnitTree::new();
    tree.install("/run/systemd/transient/", "scope.service");

    let config = Config {
        systemctl_path: "/bin/sh".into(),
        systemctl_args: vec![
            "-c".to_string(),
            "printf 'active\\r\\n'".to_string(),
            "systemctl".to_string(),
        ],
        unit_paths: tree.locator().search_paths().to_vec(),
        output_matching: OutputMatching::TrimTrailingWhitespace,
    };
    let ctl = Systemctl::from_config(&config);

    let scope = ctl.unit("scope.service").unwrap();
    assert!(scope.is_active().unwrap());

    let strict = Systemctl::new(
        UnitLocator::from_config(&config),
        SystemctlRunner::from_config(&config),
    );
    assert!(matches!(
        strict.is_active("scope.service"),
        Err(UnitError::UnexpectedOutput { .. })
    ));
}

#[test]
fn missing_control_command_is_execution_error() {
    init_tracing();
    let tree = UnitTree::new();
    tree.install("/etc/systemd/system/", "demo.service");
    let ctl = Systemctl::new(
        tree.locator(),
        SystemctlRunner::new(tree.root().join("no-such-systemctl")),
    );

    match ctl.start_service("demo.service") {
        Err(UnitError::CommandExecution {
            source: ExecFailure::Spawn(err),
            ..
        }) => assert_eq!(err.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected spawn failure, got {other:?}"),
    }
}

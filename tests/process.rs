//! Process-level behavior of the binary: startup failures and signals.

use std::io::{BufRead, BufReader};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

fn command() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_redirect-responder"));
    command
        .env_remove("STATUS_CODE")
        .env_remove("METRICS_ADDRESS")
        .env("LISTEN_ADDRESS", "127.0.0.1:0")
        .env("LOG_FORMAT", "json")
        .env("RUST_LOG", "redirect_responder=info");
    command
}

/// Wait for the child to exit, polling so a hung process fails the test.
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> std::process::ExitStatus {
    let deadline = std::time::Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait().unwrap() {
            return status;
        }
        if std::time::Instant::now() > deadline {
            let _ = child.kill();
            panic!("process did not exit within {timeout:?}");
        }
        thread::sleep(Duration::from_millis(20));
    }
}

/// Spawn the server and return once it logs that it is serving.
/// The returned receiver yields the remaining log lines.
fn spawn_serving() -> (Child, mpsc::Receiver<String>) {
    let mut child = command().stdout(Stdio::piped()).spawn().unwrap();
    let stdout = child.stdout.take().unwrap();

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in BufReader::new(stdout).lines().map_while(Result::ok) {
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    loop {
        let line = rx
            .recv_timeout(Duration::from_secs(10))
            .expect("server did not start");
        if line.contains("HTTP server starting") {
            return (child, rx);
        }
    }
}

#[test]
fn invalid_status_code_fails_before_binding() {
    let output = command().env("STATUS_CODE", "abc").output().unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("STATUS_CODE"), "{stdout}");
    assert!(stdout.contains("abc"), "{stdout}");
    assert!(!stdout.contains("Listener bound"), "{stdout}");
}

#[test]
fn bind_failure_is_fatal() {
    let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = taken.local_addr().unwrap().to_string();

    let output = command().env("LISTEN_ADDRESS", &address).output().unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&address), "{stdout}");
}

#[cfg(unix)]
fn send_signal(child: &Child, signal: &str) {
    let status = Command::new("kill")
        .arg(format!("-{signal}"))
        .arg(child.id().to_string())
        .status()
        .unwrap();
    assert!(status.success());
}

#[cfg(unix)]
#[test]
fn each_termination_signal_exits_cleanly() {
    for signal in ["INT", "TERM", "QUIT"] {
        let (mut child, _logs) = spawn_serving();
        send_signal(&child, signal);

        let status = wait_with_timeout(&mut child, Duration::from_secs(10));
        assert!(status.success(), "SIG{signal}: {status:?}");
    }
}

#[cfg(unix)]
#[test]
fn second_signal_does_not_restart_shutdown() {
    let (mut child, logs) = spawn_serving();
    send_signal(&child, "TERM");
    send_signal(&child, "INT");

    let status = wait_with_timeout(&mut child, Duration::from_secs(10));
    assert!(status.success(), "{status:?}");

    let shutdowns = logs
        .try_iter()
        .filter(|line| line.contains("Termination signal received"))
        .count();
    assert!(shutdowns <= 1, "shutdown started {shutdowns} times");
}

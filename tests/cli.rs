mod common;

use assert_cmd::Command;
use common::OneShotServer;
use predicates::prelude::*;

fn github_activity() -> Command {
    let mut cmd = Command::cargo_bin("github-activity").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn report_against(server: &OneShotServer, username: &str) -> assert_cmd::assert::Assert {
    github_activity()
        .args(["--api-base", &server.base_url, username])
        .assert()
}

#[test]
fn help_prints_banner_and_succeeds() {
    github_activity()
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub User Activity CLI"));
}

#[test]
fn no_arguments_prints_banner_and_fails() {
    github_activity()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No command provided. Showing help menu."))
        .stdout(predicate::str::contains("GitHub User Activity CLI"));
}

#[test]
fn watch_event_line() {
    let server = OneShotServer::start(
        "200 OK",
        r#"[{"type":"WatchEvent","repo":{"name":"x/y"},"payload":{"action":"started"},"public":true,"org":{"login":"acme"}}]"#,
    );

    report_against(&server, "octocat")
        .success()
        .stdout("- WatchEvent: started public x/y by acme\n");

    let request = server.request();
    assert!(request.starts_with("GET /users/octocat/events "), "{request}");
    assert!(
        request.to_lowercase().contains("user-agent: github-activity/"),
        "{request}"
    );
}

#[test]
fn push_events_collapse_to_last_actor() {
    let server = OneShotServer::start(
        "200 OK",
        r#"[
            {"type":"PushEvent","actor":{"login":"u1"},"repo":{"name":"a/b"}},
            {"type":"PushEvent","actor":{"login":"u2"},"repo":{"name":"a/b"}}
        ]"#,
    );

    report_against(&server, "octocat")
        .success()
        .stdout("- PushEvent: 2 commits to a/b by u2\n");
    server.request();
}

#[test]
fn mixed_feed_keeps_first_seen_type_order() {
    let server = OneShotServer::start(
        "200 OK",
        r#"[
            {"type":"CreateEvent","actor":{"login":"me"},"repo":{"name":"me/new"},"public":true,
             "payload":{"master_branch":"main","description":"Fresh start"}},
            {"type":"IssuesEvent","repo":{"name":"me/new"}},
            {"type":"PushEvent","actor":{"login":"me"},"repo":{"name":"me/new"}},
            {"type":"CreateEvent","actor":{"login":"me"},"repo":{"name":"me/new"},"public":true,
             "payload":{"master_branch":"main"}}
        ]"#,
    );

    report_against(&server, "me").success().stdout(
        "- CreateEvent: Public repo me/new created in branch main by me with description: Fresh start\n\
         - PushEvent: 1 commits to me/new by me\n",
    );
    server.request();
}

#[test]
fn empty_activity_succeeds_with_message() {
    let server = OneShotServer::start("200 OK", "[]");

    report_against(&server, "quiet")
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No activity found for this user."));
    server.request();
}

#[test]
fn non_array_payload_is_treated_as_empty() {
    let server = OneShotServer::start("200 OK", r#"{"message":"unexpected"}"#);

    report_against(&server, "quiet")
        .success()
        .stderr(predicate::str::contains("No activity found for this user."));
    server.request();
}

#[test]
fn non_200_status_is_user_not_found() {
    let server = OneShotServer::start("404 Not Found", r#"{"message":"Not Found"}"#);

    report_against(&server, "nobody-here")
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "User not found by username. Please check the username and try again.",
        ));
    server.request();
}

#[test]
fn any_non_200_status_is_user_not_found() {
    let server = OneShotServer::start("500 Internal Server Error", r#"{"message":"boom"}"#);

    report_against(&server, "octocat")
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "User not found by username. Please check the username and try again.",
        ));
    server.request();
}

#[test]
fn undecodable_body_reports_fetch_error() {
    let server = OneShotServer::start("200 OK", "<html>oops</html>");

    report_against(&server, "octocat")
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Error fetching user activity:"));
    server.request();
}

#[test]
fn connection_failure_reports_fetch_error() {
    // Bind then drop to get a loopback port with nothing listening.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    github_activity()
        .args(["--api-base", &format!("http://127.0.0.1:{port}"), "octocat"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error fetching user activity:"));
}

#[test]
fn invalid_api_base_fails() {
    github_activity()
        .args(["--api-base", "not a url", "octocat"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid API base URL"));
}

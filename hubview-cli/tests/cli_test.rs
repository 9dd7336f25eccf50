use std::process::Output;

use assert_cmd::Command;
use assert_cmd::assert::OutputAssertExt;
use hubview_test_utils::CliEnvGuard;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn hubview(env: &CliEnvGuard) -> Command {
  let mut cmd = Command::cargo_bin("hubview").expect("Failed to find hubview binary");
  cmd.envs(env.vars()).args(["--colors", "never"]);
  cmd
}

/// Run the binary off the async runtime so the mock server keeps serving
async fn run(mut cmd: Command) -> Output {
  tokio::task::spawn_blocking(move || cmd.output().expect("Failed to execute hubview"))
    .await
    .expect("Command task panicked")
}

fn user(id: u64, login: &str) -> Value {
  json!({
      "login": login,
      "id": id,
      "avatar_url": format!("https://avatars.githubusercontent.com/u/{id}?v=4"),
      "url": format!("https://api.github.com/users/{login}"),
      "type": "User",
      "site_admin": false
  })
}

#[test]
fn test_help_command() {
  let env = CliEnvGuard::new();

  hubview(&env)
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("users"))
    .stdout(predicate::str::contains("profile"))
    .stdout(predicate::str::contains("init"));
}

#[test]
fn test_missing_subcommand_fails() {
  let env = CliEnvGuard::new();

  hubview(&env).assert().failure();
}

#[test]
fn test_init_writes_default_config() {
  let env = CliEnvGuard::new();

  hubview(&env)
    .arg("init")
    .assert()
    .success()
    .stdout(predicate::str::contains("config.toml"));

  let content = std::fs::read_to_string(env.config_path()).unwrap();
  assert!(content.contains("page_size = 30"));
}

#[test]
fn test_init_keeps_existing_config() {
  let env = CliEnvGuard::new();
  env.write_config("page_size = 7\n");

  hubview(&env).arg("init").assert().success();

  assert_eq!(std::fs::read_to_string(env.config_path()).unwrap(), "page_size = 7\n");
}

#[test]
fn test_users_rejects_zero_pages() {
  let env = CliEnvGuard::new();

  hubview(&env)
    .args(["users", "--pages", "0"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("--pages"));
}

#[test]
fn test_profile_requires_login() {
  let env = CliEnvGuard::new();

  hubview(&env).arg("profile").assert().failure();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_users_pages_until_exhausted() {
  let server = MockServer::start().await;
  let env = CliEnvGuard::new().with_api_url(server.uri());

  Mock::given(method("GET"))
    .and(path("/users"))
    .and(query_param("since", "2"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([user(3, "pjhyett")])))
    .with_priority(1)
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/users"))
    .and(query_param("per_page", "2"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([user(1, "mojombo"), user(2, "defunkt")])))
    .expect(1)
    .mount(&server)
    .await;

  let mut cmd = hubview(&env);
  cmd.args(["users", "--pages", "5", "--page-size", "2"]);
  let output = run(cmd).await;

  output
    .assert()
    .success()
    .stdout(predicate::str::contains("mojombo"))
    .stdout(predicate::str::contains("defunkt"))
    .stdout(predicate::str::contains("pjhyett"))
    .stdout(predicate::str::contains("done"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_users_uses_configured_page_size() {
  let server = MockServer::start().await;
  let env = CliEnvGuard::new().with_api_url(server.uri());
  env.write_config("page_size = 1\n");

  Mock::given(method("GET"))
    .and(path("/users"))
    .and(query_param("per_page", "1"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([user(1, "mojombo")])))
    .expect(1)
    .mount(&server)
    .await;

  let mut cmd = hubview(&env);
  cmd.arg("users");
  let output = run(cmd).await;

  output
    .assert()
    .success()
    .stdout(predicate::str::contains("mojombo"))
    .stdout(predicate::str::contains("More users are available after ID 1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_users_failure_exits_with_error() {
  let server = MockServer::start().await;
  let env = CliEnvGuard::new().with_api_url(server.uri());

  Mock::given(method("GET"))
    .and(path("/users"))
    .respond_with(ResponseTemplate::new(502).set_body_json(json!({"message": "Server Error"})))
    .mount(&server)
    .await;

  let mut cmd = hubview(&env);
  cmd.arg("users");
  let output = run(cmd).await;

  output
    .assert()
    .failure()
    .stdout(predicate::str::contains("No users found"))
    .stderr(predicate::str::contains("Failed to load users"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_token_is_sent_as_bearer() {
  let server = MockServer::start().await;
  let env = CliEnvGuard::new().with_api_url(server.uri()).with_token("ghp_test");

  Mock::given(method("GET"))
    .and(path("/users"))
    .and(wiremock::matchers::header("authorization", "Bearer ghp_test"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
    .expect(1)
    .mount(&server)
    .await;

  let mut cmd = hubview(&env);
  cmd.arg("users");
  let output = run(cmd).await;

  output.assert().success().stdout(predicate::str::contains("No users found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_profile_shows_user_and_activity() {
  let server = MockServer::start().await;
  let env = CliEnvGuard::new().with_api_url(server.uri());

  Mock::given(method("GET"))
    .and(path("/users/octocat"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "login": "octocat",
        "id": 583231,
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "name": "The Octocat",
        "bio": null,
        "company": "@github",
        "location": "San Francisco",
        "blog": "",
        "twitter_username": null,
        "email": null,
        "followers": 9000,
        "following": 9,
        "public_repos": 8
    })))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/users/octocat/events/public"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
        "id": "22249084947",
        "type": "WatchEvent",
        "actor": user(583231, "octocat"),
        "repo": {
            "id": 3,
            "name": "octocat/Hello-World",
            "url": "https://api.github.com/repos/octocat/Hello-World"
        },
        "public": true,
        "created_at": "2022-06-09T12:47:28Z"
    }])))
    .mount(&server)
    .await;

  let mut cmd = hubview(&env);
  cmd.args(["profile", "octocat"]);
  let output = run(cmd).await;

  output
    .assert()
    .success()
    .stdout(predicate::str::contains("The Octocat"))
    .stdout(predicate::str::contains("San Francisco"))
    .stdout(predicate::str::contains("9000"))
    .stdout(predicate::str::contains("repositories"))
    .stdout(predicate::str::contains("starred"))
    .stdout(predicate::str::contains("octocat/Hello-World"))
    .stdout(predicate::str::contains("Blog").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_profile_shows_activity_when_user_fails() {
  let server = MockServer::start().await;
  let env = CliEnvGuard::new().with_api_url(server.uri());

  Mock::given(method("GET"))
    .and(path("/users/octocat"))
    .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "Internal Server Error"})))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/users/octocat/events/public"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
    .mount(&server)
    .await;

  let mut cmd = hubview(&env);
  cmd.args(["profile", "octocat"]);
  let output = run(cmd).await;

  output
    .assert()
    .failure()
    .stdout(predicate::str::contains("No public activity"))
    .stderr(predicate::str::contains("Failed to load profile for 'octocat'"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_profile_unknown_user() {
  let server = MockServer::start().await;
  let env = CliEnvGuard::new().with_api_url(server.uri());

  Mock::given(method("GET"))
    .and(path("/users/ghost-account"))
    .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/users/ghost-account/events/public"))
    .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
    .mount(&server)
    .await;

  let mut cmd = hubview(&env);
  cmd.args(["profile", "ghost-account"]);
  let output = run(cmd).await;

  output
    .assert()
    .failure()
    .stderr(predicate::str::contains("not found"))
    .stderr(predicate::str::contains("Failed to load activity"));
}

use anyhow::Result;
use httpmock::prelude::*;
use orgrepos::config::GithubConfig;
use orgrepos::{GithubOrgClient, HttpJsonSource, OrgReposError};
use serde_json::{json, Value};

struct Fixture {
    org_payload: Value,
    repos_payload: Value,
    expected_repos: Vec<&'static str>,
    apache2_repos: Vec<&'static str>,
}

fn fixtures(server: &MockServer) -> Vec<Fixture> {
    vec![
        Fixture {
            org_payload: json!({
                "login": "testorg",
                "repos_url": server.url("/orgs/testorg/repos"),
            }),
            repos_payload: json!([
                {"name": "repo1", "license": {"key": "apache-2.0"}},
                {"name": "repo2", "license": {"key": "other-license"}},
            ]),
            expected_repos: vec!["repo1", "repo2"],
            apache2_repos: vec!["repo1"],
        },
        Fixture {
            org_payload: json!({
                "login": "google",
                "repos_url": server.url("/orgs/google/repos"),
            }),
            repos_payload: json!([
                {"id": 1, "name": "repo1", "license": {"key": "apache-2.0"}},
                {"id": 2, "name": "repo2", "license": {"key": "mit"}},
                {"id": 3, "name": "repo3", "license": {"key": "apache-2.0"}},
            ]),
            expected_repos: vec!["repo1", "repo2", "repo3"],
            apache2_repos: vec!["repo1", "repo3"],
        },
    ]
}

fn http_source() -> HttpJsonSource {
    HttpJsonSource::from_config(&GithubConfig::default()).expect("client builds")
}

#[tokio::test]
async fn test_public_repos_against_mock_github() -> Result<()> {
    let server = MockServer::start();

    for fixture in fixtures(&server) {
        let login = fixture.org_payload["login"].as_str().unwrap_or_default().to_string();

        let org_mock = server.mock(|when, then| {
            when.method(GET).path(format!("/orgs/{}", login));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(fixture.org_payload.clone());
        });
        let repos_mock = server.mock(|when, then| {
            when.method(GET).path(format!("/orgs/{}/repos", login));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(fixture.repos_payload.clone());
        });

        let client = GithubOrgClient::new(login.as_str(), http_source())
            .with_org_url(server.url("/orgs/{}"))?;

        assert_eq!(client.public_repos(None).await?, fixture.expected_repos);
        assert_eq!(
            client.public_repos(Some("apache-2.0")).await?,
            fixture.apache2_repos
        );

        // Both payloads are memoized: one hit each despite two listings.
        org_mock.assert_hits(1);
        repos_mock.assert_hits(1);
    }

    Ok(())
}

#[tokio::test]
async fn test_fresh_client_fetches_again() -> Result<()> {
    let server = MockServer::start();
    let org_mock = server.mock(|when, then| {
        when.method(GET).path("/orgs/acme");
        then.status(200)
            .json_body(json!({"repos_url": server.url("/orgs/acme/repos")}));
    });

    for _ in 0..2 {
        let client =
            GithubOrgClient::new("acme", http_source()).with_org_url(server.url("/orgs/{}"))?;
        client.org().await?;
        client.org().await?;
    }

    org_mock.assert_hits(2);
    Ok(())
}

#[tokio::test]
async fn test_unknown_org_surfaces_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/orgs/ghost");
        then.status(404).json_body(json!({"message": "Not Found"}));
    });

    let client = GithubOrgClient::new("ghost", http_source())
        .with_org_url(server.url("/orgs/{}"))
        .expect("template has one placeholder");

    match client.public_repos(None).await {
        Err(OrgReposError::HttpStatus { status, url }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/orgs/ghost"));
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
}

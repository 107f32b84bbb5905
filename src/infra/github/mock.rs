//! wiremock-based GitHub mock server for testing.
//!
//! Provides `GitHubMockServer` for HTTP-level mocking of the user endpoints.
//!
//! # Usage
//!
//! ```ignore
//! let mock = GitHubMockServer::start().await;
//!
//! // Profile operations
//! mock.user("octocat").get().await;
//! mock.user("Torvalds").login("torvalds").get().await;
//! mock.user("ghost").get_not_found().await;
//!
//! // Repository listings
//! mock.repos("octocat", &["hello-world", "spoon-knife"]).await;
//! mock.repos_status("octocat", 500).await;
//!
//! let client = mock.client();
//! ```

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client::ReqwestClient;

/// Create a mock user JSON object as returned by `GET /users/{username}`.
pub fn mock_user_json(login: &str, name: Option<&str>, bio: Option<&str>) -> serde_json::Value {
    json!({
        "login": login,
        "id": 1,
        "node_id": "U_test",
        "avatar_url": "https://avatars.githubusercontent.com/u/1",
        "html_url": format!("https://github.com/{}", login),
        "type": "User",
        "site_admin": false,
        "name": name,
        "company": null,
        "blog": "",
        "location": null,
        "bio": bio,
        "public_repos": 2,
        "followers": 10,
        "following": 1
    })
}

/// Create a mock repository JSON object for a listing entry.
pub fn mock_repo_json(owner: &str, name: &str) -> serde_json::Value {
    json!({
        "id": 1,
        "node_id": "R_test",
        "name": name,
        "full_name": format!("{}/{}", owner, name),
        "private": false,
        "html_url": format!("https://github.com/{}/{}", owner, name),
        "description": format!("{} description", name),
        "fork": false,
        "stargazers_count": 5,
        "watchers_count": 5,
        "forks_count": 2,
        "language": "Rust"
    })
}

/// Mock GitHub API server.
pub struct GitHubMockServer {
    server: MockServer,
}

impl GitHubMockServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Client pointed at this server with a generous timeout.
    pub fn client(&self) -> ReqwestClient {
        self.client_with_timeout(Duration::from_secs(5))
    }

    pub fn client_with_timeout(&self, timeout: Duration) -> ReqwestClient {
        ReqwestClient::new(&self.uri(), timeout).expect("mock client should build")
    }

    /// Start building a mock for `GET /users/{username}`.
    pub fn user<'a>(&'a self, username: &'a str) -> UserMockBuilder<'a> {
        UserMockBuilder {
            server: &self.server,
            username,
            login: None,
            name: None,
            bio: None,
            delay: None,
        }
    }

    /// Mock `GET /users/{login}/repos?per_page=100` returning repos in the given order.
    pub async fn repos(&self, login: &str, names: &[&str]) {
        let body: Vec<_> = names.iter().map(|n| mock_repo_json(login, n)).collect();
        Mock::given(method("GET"))
            .and(path(format!("/users/{login}/repos")))
            .and(query_param("per_page", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock the repository listing with a bare status code.
    pub async fn repos_status(&self, login: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/users/{login}/repos")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }
}

/// Builder for user profile mocks.
pub struct UserMockBuilder<'a> {
    server: &'a MockServer,
    username: &'a str,
    login: Option<&'a str>,
    name: Option<&'a str>,
    bio: Option<&'a str>,
    delay: Option<Duration>,
}

impl<'a> UserMockBuilder<'a> {
    /// Login echoed back in the body (defaults to the requested username).
    pub fn login(mut self, login: &'a str) -> Self {
        self.login = Some(login);
        self
    }

    pub fn name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn bio(mut self, bio: &'a str) -> Self {
        self.bio = Some(bio);
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Mount a 200 response with a user object.
    pub async fn get(self) {
        let body = mock_user_json(self.login.unwrap_or(self.username), self.name, self.bio);
        let mut template = ResponseTemplate::new(200).set_body_json(body);
        if let Some(delay) = self.delay {
            template = template.set_delay(delay);
        }
        self.mount(template).await;
    }

    /// Mount a 404 response as GitHub returns for unknown users.
    pub async fn get_not_found(self) {
        let template = ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest/users/users#get-a-user"
        }));
        self.mount(template).await;
    }

    /// Mount a 200 response with an arbitrary raw body.
    pub async fn get_raw_body(self, body: &str) {
        let template = ResponseTemplate::new(200).set_body_raw(body, "application/json");
        self.mount(template).await;
    }

    async fn mount(self, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("/users/{}", self.username)))
            .respond_with(template)
            .mount(self.server)
            .await;
    }
}

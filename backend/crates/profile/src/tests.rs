//! Router-level tests for the profiles API

#[cfg(test)]
mod support {
    use std::collections::HashMap;
    use std::sync::Arc;

    use auth::application::session_token;
    use auth::domain::value_object::{
        email::Email,
        user_name::UserName,
        user_password::{RawPassword, UserPassword},
    };
    use auth::{AuthConfig, MemoryUserRepository, SessionGate, User, UserRepository};
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, Response, header};
    use chrono::{TimeZone, Utc};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::domain::entity::repo::RepoSummary;
    use crate::infra::memory::{MemoryProfileRepository, StaticRepoDirectory};
    use crate::presentation::router::profiles_router;

    pub struct Harness {
        pub app: Router,
        pub users: MemoryUserRepository,
        pub profiles: MemoryProfileRepository,
        pub config: Arc<AuthConfig>,
    }

    fn repo(id: u64, name: &str, year: i32) -> RepoSummary {
        RepoSummary {
            id,
            name: name.to_string(),
            full_name: format!("octocat/{name}"),
            html_url: format!("https://github.com/octocat/{name}"),
            description: None,
            language: Some("Rust".into()),
            stargazers_count: 0,
            watchers_count: 0,
            forks_count: 0,
            created_at: Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    impl Harness {
        pub fn new() -> Self {
            let users = MemoryUserRepository::new();
            let profiles = MemoryProfileRepository::new();
            let config = Arc::new(AuthConfig::development());

            let repos = (0..7)
                .rev()
                .map(|i| repo(i as u64, &format!("repo-{i}"), 2010 + i))
                .collect();
            let directory = StaticRepoDirectory::new(HashMap::from([("octocat".to_string(), repos)]));

            let app = profiles_router(
                profiles.clone(),
                users.clone(),
                directory,
                SessionGate::new(config.clone()),
            );
            Self {
                app,
                users,
                profiles,
                config,
            }
        }

        /// Create an account directly in the store and return its cookie
        pub async fn account(&self, name: &str, email: &str) -> (String, User) {
            let raw = RawPassword::new("secret1".to_string()).unwrap();
            let user = User::new(
                UserName::new(name).unwrap(),
                Email::new(email).unwrap(),
                UserPassword::from_raw(&raw, None).unwrap(),
            );
            self.users.create(&user).await.unwrap();
            let token = session_token::issue(&self.config, user.user_id).unwrap();
            (format!("token={token}"), user)
        }

        pub async fn send(&self, request: Request<Body>) -> Response<Body> {
            self.app.clone().oneshot(request).await.unwrap()
        }

        pub async fn call(
            &self,
            method: &str,
            uri: &str,
            cookie: Option<&str>,
            body: Option<Value>,
        ) -> (u16, Value) {
            let mut builder = Request::builder().method(method).uri(uri);
            if let Some(cookie) = cookie {
                builder = builder.header(header::COOKIE, cookie);
            }
            let request = match body {
                Some(json) => builder
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json.to_string()))
                    .unwrap(),
                None => builder.body(Body::empty()).unwrap(),
            };

            let res = self.send(request).await;
            let status = res.status().as_u16();
            let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
            let json = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).unwrap()
            };
            (status, json)
        }
    }
}

#[cfg(test)]
mod profile_tests {
    use super::support::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_own_profile_requires_session() {
        let h = Harness::new();
        let (status, body) = h.call("GET", "/me", None, None).await;
        assert_eq!(status, 401);
        assert_eq!(body["code"], "NO_COOKIES");
    }

    #[tokio::test]
    async fn test_own_profile_missing_is_404() {
        let h = Harness::new();
        let (cookie, _) = h.account("Ann", "ann@x.io").await;
        let (status, _) = h.call("GET", "/me", Some(&cookie), None).await;
        assert_eq!(status, 404);
    }

    #[tokio::test]
    async fn test_create_requires_status_and_skills() {
        let h = Harness::new();
        let (cookie, _) = h.account("Ann", "ann@x.io").await;

        let (status, body) = h
            .call("POST", "/", Some(&cookie), Some(json!({ "company": "Acme" })))
            .await;

        assert_eq!(status, 400);
        assert_eq!(body["errors"][0]["message"], "Status is required");
        assert_eq!(body["errors"][1]["message"], "Skills is required");
        assert_eq!(h.profiles.len().await, 0);
    }

    #[tokio::test]
    async fn test_create_then_update() {
        let h = Harness::new();
        let (cookie, user) = h.account("Ann", "ann@x.io").await;

        let (status, created) = h
            .call(
                "POST",
                "/",
                Some(&cookie),
                Some(json!({
                    "status": "Developer",
                    "skills": "Rust, SQL",
                    "company": "Acme",
                    "twitter": "https://twitter.com/ann"
                })),
            )
            .await;
        assert_eq!(status, 200);
        assert_eq!(created["skills"], json!(["Rust", "SQL"]));
        assert_eq!(created["user"]["name"], "Ann");
        assert_eq!(created["user"]["id"], user.user_id.to_string());
        assert_eq!(created["social"]["twitter"], "https://twitter.com/ann");

        let (status, updated) = h
            .call(
                "POST",
                "/",
                Some(&cookie),
                Some(json!({ "status": "Senior", "skills": ["Go"], "bio": "hi" })),
            )
            .await;
        assert_eq!(status, 200);
        assert_eq!(updated["id"], created["id"]);
        assert_eq!(updated["status"], "Senior");
        assert_eq!(updated["skills"], json!(["Go"]));
        assert_eq!(updated["company"], "Acme");
        assert_eq!(updated["bio"], "hi");
        assert!(updated["social"]["twitter"].is_null());
        assert_eq!(h.profiles.len().await, 1);
    }

    #[tokio::test]
    async fn test_public_listing_and_lookup() {
        let h = Harness::new();
        let (ann, ann_user) = h.account("Ann", "ann@x.io").await;
        let (bob, _) = h.account("Bob", "bob@x.io").await;
        for cookie in [&ann, &bob] {
            h.call(
                "POST",
                "/",
                Some(cookie),
                Some(json!({ "status": "Dev", "skills": "Rust" })),
            )
            .await;
        }

        let (status, all) = h.call("GET", "/", None, None).await;
        assert_eq!(status, 200);
        assert_eq!(all.as_array().unwrap().len(), 2);

        let (status, one) = h
            .call("GET", &format!("/user/{}", ann_user.user_id), None, None)
            .await;
        assert_eq!(status, 200);
        assert_eq!(one["user"]["name"], "Ann");
    }

    #[tokio::test]
    async fn test_lookup_unknown_or_malformed_user_is_404() {
        let h = Harness::new();
        let (status, _) = h.call("GET", "/user/not-an-id", None, None).await;
        assert_eq!(status, 404);

        let (status, body) = h
            .call("GET", &format!("/user/{}", kernel::id::UserId::new()), None, None)
            .await;
        assert_eq!(status, 404);
        assert_eq!(body["code"], "PROFILE_NOT_FOUND");
    }
}

#[cfg(test)]
mod entry_tests {
    use super::support::*;
    use serde_json::{Value, json};

    async fn with_profile(h: &Harness) -> String {
        let (cookie, _) = h.account("Ann", "ann@x.io").await;
        h.call(
            "POST",
            "/",
            Some(&cookie),
            Some(json!({ "status": "Dev", "skills": "Rust" })),
        )
        .await;
        cookie
    }

    fn titles(profile: &Value) -> Vec<String> {
        profile["experience"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["title"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_experience_requires_fields() {
        let h = Harness::new();
        let cookie = with_profile(&h).await;

        let (status, body) = h
            .call("PUT", "/experience", Some(&cookie), Some(json!({ "title": "Dev" })))
            .await;

        assert_eq!(status, 400);
        let fields: Vec<_> = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, ["company", "from"]);
    }

    #[tokio::test]
    async fn test_experience_with_wrong_type_is_validation_error() {
        let h = Harness::new();
        let cookie = with_profile(&h).await;

        let (status, body) = h
            .call(
                "PUT",
                "/experience",
                Some(&cookie),
                Some(json!({ "title": "Dev", "company": "Acme", "from": "2020-01-01", "current": "yes" })),
            )
            .await;

        assert_eq!(status, 400);
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert_eq!(body["errors"][0]["field"], "current");
    }

    #[tokio::test]
    async fn test_add_experience_without_profile_is_404() {
        let h = Harness::new();
        let (cookie, _) = h.account("Ann", "ann@x.io").await;

        let (status, _) = h
            .call(
                "PUT",
                "/experience",
                Some(&cookie),
                Some(json!({ "title": "Dev", "company": "Acme", "from": "2020-01-01" })),
            )
            .await;
        assert_eq!(status, 404);
    }

    #[tokio::test]
    async fn test_experience_add_and_remove_by_id() {
        let h = Harness::new();
        let cookie = with_profile(&h).await;

        for title in ["first", "second", "third"] {
            let (status, _) = h
                .call(
                    "PUT",
                    "/experience",
                    Some(&cookie),
                    Some(json!({ "title": title, "company": "Acme", "from": "2020-01-01" })),
                )
                .await;
            assert_eq!(status, 200);
        }

        let (_, profile) = h.call("GET", "/me", Some(&cookie), None).await;
        assert_eq!(titles(&profile), ["third", "second", "first"]);

        let middle = profile["experience"][1]["id"].as_str().unwrap().to_string();
        let (status, after) = h
            .call("DELETE", &format!("/experience/{middle}"), Some(&cookie), None)
            .await;
        assert_eq!(status, 200);
        assert_eq!(titles(&after), ["third", "first"]);

        // Unknown id leaves every entry alone
        let (status, body) = h
            .call("DELETE", &format!("/experience/{middle}"), Some(&cookie), None)
            .await;
        assert_eq!(status, 404);
        assert_eq!(body["code"], "EXPERIENCE_NOT_FOUND");
        let (_, profile) = h.call("GET", "/me", Some(&cookie), None).await;
        assert_eq!(titles(&profile), ["third", "first"]);
    }

    #[tokio::test]
    async fn test_education_round() {
        let h = Harness::new();
        let cookie = with_profile(&h).await;

        let (status, body) = h
            .call(
                "PUT",
                "/education",
                Some(&cookie),
                Some(json!({
                    "school": "MIT",
                    "degree": "BSc",
                    "fieldofstudy": "CS",
                    "from": "2012-09-01T00:00:00.000Z",
                    "current": true
                })),
            )
            .await;
        assert_eq!(status, 200);
        assert_eq!(body["education"][0]["fieldofstudy"], "CS");
        assert_eq!(body["education"][0]["from"], "2012-09-01");

        let id = body["education"][0]["id"].as_str().unwrap().to_string();
        let (status, body) = h
            .call("DELETE", &format!("/education/{id}"), Some(&cookie), None)
            .await;
        assert_eq!(status, 200);
        assert!(body["education"].as_array().unwrap().is_empty());

        let (status, _) = h
            .call("DELETE", "/education/garbage", Some(&cookie), None)
            .await;
        assert_eq!(status, 404);
    }
}

#[cfg(test)]
mod github_tests {
    use super::support::*;

    #[tokio::test]
    async fn test_five_oldest_repos() {
        let h = Harness::new();
        let (status, body) = h.call("GET", "/github/octocat", None, None).await;

        assert_eq!(status, 200);
        let names: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["repo-0", "repo-1", "repo-2", "repo-3", "repo-4"]);
    }

    #[tokio::test]
    async fn test_unknown_account_is_404() {
        let h = Harness::new();
        let (status, body) = h.call("GET", "/github/nobody", None, None).await;
        assert_eq!(status, 404);
        assert_eq!(body["code"], "GITHUB_NOT_FOUND");

        let (status, _) = h.call("GET", "/github/-bad-", None, None).await;
        assert_eq!(status, 404);
    }
}

//! Router-level tests for the posts API

#[cfg(test)]
mod support {
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
    use axum::http::{Request, header};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::infra::memory::MemoryPostRepository;
    use crate::presentation::router::posts_router;

    pub struct Harness {
        pub app: Router,
        pub users: MemoryUserRepository,
        pub posts: MemoryPostRepository,
        config: Arc<AuthConfig>,
    }

    impl Harness {
        pub fn new() -> Self {
            let users = MemoryUserRepository::new();
            let posts = MemoryPostRepository::new();
            let config = Arc::new(AuthConfig::development());
            let app = posts_router(posts.clone(), users.clone(), SessionGate::new(config.clone()));
            Self {
                app,
                users,
                posts,
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

            let res = self.app.clone().oneshot(request).await.unwrap();
            let status = res.status().as_u16();
            let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
            let json = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).unwrap()
            };
            (status, json)
        }

        /// Publish a post and return its id
        pub async fn publish(&self, cookie: &str, text: &str) -> String {
            let (status, body) = self
                .call("POST", "/", Some(cookie), Some(serde_json::json!({ "text": text })))
                .await;
            assert_eq!(status, 200);
            body["id"].as_str().unwrap().to_string()
        }
    }
}

#[cfg(test)]
mod post_tests {
    use super::support::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_every_route_is_gated() {
        let h = Harness::new();
        let id = kernel::id::PostId::new();
        for (method, uri) in [
            ("GET", "/".to_string()),
            ("POST", "/".to_string()),
            ("GET", format!("/{id}")),
            ("DELETE", format!("/{id}")),
            ("PUT", format!("/like/{id}")),
            ("PUT", format!("/unlike/{id}")),
            ("POST", format!("/comment/{id}")),
            ("DELETE", format!("/comment/{id}/{id}")),
        ] {
            let (status, body) = h.call(method, &uri, None, None).await;
            assert_eq!(status, 401, "{method} {uri}");
            assert_eq!(body["code"], "NO_COOKIES");
        }
    }

    #[tokio::test]
    async fn test_create_copies_author() {
        let h = Harness::new();
        let (cookie, user) = h.account("Ann", "ann@x.io").await;

        let (status, body) = h
            .call("POST", "/", Some(&cookie), Some(json!({ "text": " Hello " })))
            .await;

        assert_eq!(status, 200);
        assert_eq!(body["text"], "Hello");
        assert_eq!(body["name"], "Ann");
        assert_eq!(body["user"], user.user_id.to_string());
        assert_eq!(body["avatar"], user.avatar.clone().unwrap());
        assert_eq!(body["likes"], json!([]));
    }

    #[tokio::test]
    async fn test_create_requires_text() {
        let h = Harness::new();
        let (cookie, _) = h.account("Ann", "ann@x.io").await;

        let (status, body) = h.call("POST", "/", Some(&cookie), Some(json!({}))).await;

        assert_eq!(status, 400);
        assert_eq!(body["errors"][0]["field"], "text");
        assert_eq!(body["errors"][0]["message"], "Text is required");
        assert_eq!(h.posts.len().await, 0);
    }

    #[tokio::test]
    async fn test_non_string_text_is_validation_error() {
        let h = Harness::new();
        let (cookie, _) = h.account("Ann", "ann@x.io").await;

        let (status, body) = h
            .call("POST", "/", Some(&cookie), Some(json!({ "text": ["Hello"] })))
            .await;

        assert_eq!(status, 400);
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert_eq!(body["errors"][0]["field"], "text");
        assert_eq!(h.posts.len().await, 0);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let h = Harness::new();
        let (cookie, _) = h.account("Ann", "ann@x.io").await;
        for text in ["one", "two", "three"] {
            h.publish(&cookie, text).await;
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }

        let (status, body) = h.call("GET", "/", Some(&cookie), None).await;

        assert_eq!(status, 200);
        let texts: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["text"].as_str().unwrap())
            .collect();
        assert_eq!(texts, ["three", "two", "one"]);
    }

    #[tokio::test]
    async fn test_get_unknown_or_malformed_is_404() {
        let h = Harness::new();
        let (cookie, _) = h.account("Ann", "ann@x.io").await;

        let (status, _) = h.call("GET", "/nope", Some(&cookie), None).await;
        assert_eq!(status, 404);

        let (status, body) = h
            .call("GET", &format!("/{}", kernel::id::PostId::new()), Some(&cookie), None)
            .await;
        assert_eq!(status, 404);
        assert_eq!(body["detail"], "Post not found");
    }

    #[tokio::test]
    async fn test_only_author_deletes() {
        let h = Harness::new();
        let (ann, _) = h.account("Ann", "ann@x.io").await;
        let (bob, _) = h.account("Bob", "bob@x.io").await;
        let id = h.publish(&ann, "mine").await;

        let (status, body) = h.call("DELETE", &format!("/{id}"), Some(&bob), None).await;
        assert_eq!(status, 401);
        assert_eq!(body["code"], "NOT_AUTHORIZED");
        assert_eq!(h.posts.len().await, 1);

        let (status, body) = h.call("DELETE", &format!("/{id}"), Some(&ann), None).await;
        assert_eq!(status, 200);
        assert_eq!(body["msg"], "Post deleted");

        let (status, _) = h.call("GET", &format!("/{id}"), Some(&ann), None).await;
        assert_eq!(status, 404);
    }
}

#[cfg(test)]
mod like_tests {
    use super::support::*;

    #[tokio::test]
    async fn test_like_then_unlike() {
        let h = Harness::new();
        let (ann, ann_user) = h.account("Ann", "ann@x.io").await;
        let (bob, bob_user) = h.account("Bob", "bob@x.io").await;
        let id = h.publish(&ann, "hello").await;

        let (status, _) = h.call("PUT", &format!("/like/{id}"), Some(&ann), None).await;
        assert_eq!(status, 200);
        let (status, likes) = h.call("PUT", &format!("/like/{id}"), Some(&bob), None).await;
        assert_eq!(status, 200);
        assert_eq!(likes[0]["user"], bob_user.user_id.to_string());
        assert_eq!(likes[1]["user"], ann_user.user_id.to_string());

        let (status, likes) = h.call("PUT", &format!("/unlike/{id}"), Some(&ann), None).await;
        assert_eq!(status, 200);
        assert_eq!(likes.as_array().unwrap().len(), 1);
        assert_eq!(likes[0]["user"], bob_user.user_id.to_string());
    }

    #[tokio::test]
    async fn test_double_like_is_rejected() {
        let h = Harness::new();
        let (ann, _) = h.account("Ann", "ann@x.io").await;
        let id = h.publish(&ann, "hello").await;

        h.call("PUT", &format!("/like/{id}"), Some(&ann), None).await;
        let (status, body) = h.call("PUT", &format!("/like/{id}"), Some(&ann), None).await;

        assert_eq!(status, 400);
        assert_eq!(body["detail"], "Post already liked");
    }

    #[tokio::test]
    async fn test_unlike_without_like_is_rejected() {
        let h = Harness::new();
        let (ann, _) = h.account("Ann", "ann@x.io").await;
        let id = h.publish(&ann, "hello").await;

        let (status, body) = h.call("PUT", &format!("/unlike/{id}"), Some(&ann), None).await;

        assert_eq!(status, 400);
        assert_eq!(body["detail"], "Post has not yet been liked");
    }

    #[tokio::test]
    async fn test_like_unknown_post_is_404() {
        let h = Harness::new();
        let (ann, _) = h.account("Ann", "ann@x.io").await;

        let (status, _) = h
            .call("PUT", &format!("/like/{}", kernel::id::PostId::new()), Some(&ann), None)
            .await;
        assert_eq!(status, 404);
    }
}

#[cfg(test)]
mod comment_tests {
    use super::support::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_comment_flow() {
        let h = Harness::new();
        let (ann, _) = h.account("Ann", "ann@x.io").await;
        let (bob, _) = h.account("Bob", "bob@x.io").await;
        let id = h.publish(&ann, "hello").await;

        let (status, _) = h
            .call("POST", &format!("/comment/{id}"), Some(&bob), Some(json!({ "text": "first" })))
            .await;
        assert_eq!(status, 200);
        let (status, comments) = h
            .call("POST", &format!("/comment/{id}"), Some(&bob), Some(json!({ "text": "second" })))
            .await;
        assert_eq!(status, 200);
        assert_eq!(comments[0]["text"], "second");
        assert_eq!(comments[0]["name"], "Bob");

        // Bob removes his older comment; the newer one stays
        let older = comments[1]["id"].as_str().unwrap().to_string();
        let (status, comments) = h
            .call("DELETE", &format!("/comment/{id}/{older}"), Some(&bob), None)
            .await;
        assert_eq!(status, 200);
        assert_eq!(comments.as_array().unwrap().len(), 1);
        assert_eq!(comments[0]["text"], "second");
    }

    #[tokio::test]
    async fn test_comment_requires_text() {
        let h = Harness::new();
        let (ann, _) = h.account("Ann", "ann@x.io").await;
        let id = h.publish(&ann, "hello").await;

        let (status, body) = h
            .call("POST", &format!("/comment/{id}"), Some(&ann), Some(json!({ "text": "" })))
            .await;
        assert_eq!(status, 400);
        assert_eq!(body["errors"][0]["field"], "text");
    }

    #[tokio::test]
    async fn test_remove_comment_checks() {
        let h = Harness::new();
        let (ann, _) = h.account("Ann", "ann@x.io").await;
        let (bob, _) = h.account("Bob", "bob@x.io").await;
        let id = h.publish(&ann, "hello").await;
        let (_, comments) = h
            .call("POST", &format!("/comment/{id}"), Some(&bob), Some(json!({ "text": "hi" })))
            .await;
        let comment_id = comments[0]["id"].as_str().unwrap().to_string();

        // The post author is not the comment author
        let (status, body) = h
            .call("DELETE", &format!("/comment/{id}/{comment_id}"), Some(&ann), None)
            .await;
        assert_eq!(status, 401);
        assert_eq!(body["code"], "NOT_AUTHORIZED");

        let (status, body) = h
            .call(
                "DELETE",
                &format!("/comment/{id}/{}", kernel::id::CommentId::new()),
                Some(&bob),
                None,
            )
            .await;
        assert_eq!(status, 404);
        assert_eq!(body["detail"], "Comment does not exist");
    }
}

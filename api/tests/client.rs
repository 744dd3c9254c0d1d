//! Integration tests for [`api::ApiClient`] against a mock HTTP server.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use api::{ApiClient, ApiError, LoginRequest, NewUser, UserUpdate};
use store::{Session, SessionStore};

fn user_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "username": name.to_lowercase(),
        "email": format!("{}@example.com", name.to_lowercase()),
        "telephone": "0123456789",
        "location": "Lagos",
        "isAdmin": false,
    })
}

#[tokio::test]
async fn list_users_sends_page_and_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("_page", "2"))
        .and(query_param("_limit", "10"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([user_json(11, "Ada"), user_json(12, "Femi")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let users = client.list_users(2, 10).await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, 11);
    assert_eq!(users[1].name, "Femi");
}

#[tokio::test]
async fn search_users_sends_q_alongside_paging() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("q", "ada"))
        .and(query_param("_page", "1"))
        .and(query_param("_limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([user_json(11, "Ada")])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let users = client.search_users("ada", 1, 10).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Ada");
}

#[tokio::test]
async fn create_user_attaches_bearer_token() {
    let server = MockServer::start().await;
    let new_user = NewUser {
        name: "Mick".to_string(),
        username: "mick".to_string(),
        email: "mick@example.com".to_string(),
        telephone: "0123456789".to_string(),
        location: "Lagos".to_string(),
        password: "secret1".to_string(),
        is_admin: false,
    };

    Mock::given(method("POST"))
        .and(path("/users"))
        .and(header("authorization", "Bearer t1"))
        .and(body_json(&new_user))
        .respond_with(ResponseTemplate::new(201).set_body_json(user_json(99, "Mick")))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).with_token(Some("t1".to_string()));
    let created = client.create_user(&new_user).await.unwrap();
    assert_eq!(created.id, 99);
}

#[tokio::test]
async fn update_user_puts_full_replacement_to_id_route() {
    let server = MockServer::start().await;
    let update = UserUpdate {
        id: 7,
        name: "Ada".to_string(),
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        telephone: "0123456789".to_string(),
        location: "Accra".to_string(),
        is_admin: true,
    };

    Mock::given(method("PUT"))
        .and(path("/users/7"))
        .and(body_json(&update))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(7, "Ada")))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let updated = client.update_user(&update).await.unwrap();
    assert_eq!(updated.id, 7);
}

#[tokio::test]
async fn delete_failure_surfaces_as_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/3"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client.delete_user(3).await.unwrap_err();
    match err {
        ApiError::Status(status) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn delete_success_has_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    client.delete_user(3).await.unwrap();
}

#[tokio::test]
async fn login_persists_token_and_profile_to_the_session_store() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "a@b.com", "password": "secret1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "t1",
            "user": {
                "id": 1,
                "name": "Mick",
                "username": "mick",
                "email": "a@b.com",
                "telephone": "0123456789",
                "location": "Lagos",
                "isAdmin": true,
            },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let auth = client
        .login(&LoginRequest {
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(auth.token, "t1");
    assert!(auth.user.is_admin);

    // The controller persists the pair; a later cold start sees it again.
    let session_store = store::MemoryStore::new();
    session_store.save(&Session {
        token: auth.token,
        user: auth.user,
    });
    let loaded = session_store.load().unwrap();
    assert_eq!(loaded.token, "t1");
    assert_eq!(loaded.user.id, 1);

    session_store.clear();
    assert!(session_store.load().is_none());
}

#[tokio::test]
async fn failed_login_is_a_status_error_not_a_panic() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client
        .login(&LoginRequest {
            email: "a@b.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Status(s) if s.as_u16() == 401));
}

#[tokio::test]
async fn locally_invalid_form_never_reaches_the_server() {
    // No mock mounted: any request would 404 and the expect(0) below would
    // fail verification on drop.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let form = api::UserForm {
        name: "Mick".to_string(),
        username: "mick".to_string(),
        email: "mick@example.com".to_string(),
        telephone: "12345".to_string(),
        location: "Lagos".to_string(),
        password: "secret1".to_string(),
    };
    let errors = form.validate().unwrap_err();
    assert!(errors.contains_key("telephone"));
    // Validation failed, so create_user is never called.
}

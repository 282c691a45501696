use buyit_storefront::{
    dto::auth::LoginRequest,
    error::AppError,
    services::auth_service::{
        ADMIN_FLAG, INVALID_CREDENTIALS, credentials_match, is_admin, login_admin, logout_admin,
    },
    storage::SessionStore,
};

fn request(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

fn token_of(bearer: &str) -> &str {
    bearer.trim_start_matches("Bearer ")
}

#[test]
fn only_the_demo_credentials_match() {
    assert!(credentials_match("admin", "admin"));
    assert!(!credentials_match("admin", "Admin"));
    assert!(!credentials_match("root", "admin"));
    assert!(!credentials_match("", ""));
}

#[test]
fn wrong_credentials_leave_no_session() {
    let sessions = SessionStore::new();

    let result = login_admin(&sessions, request("admin", "hunter2"));

    match result {
        Err(AppError::Unauthorized(message)) => assert_eq!(message, INVALID_CREDENTIALS),
        other => panic!("expected rejection, got {other:?}"),
    }
    assert!(sessions.is_empty());
}

#[test]
fn login_sets_flag_and_logout_clears_it() {
    let sessions = SessionStore::new();

    let resp = login_admin(&sessions, request("admin", "admin")).unwrap();
    let bearer = resp.data.expect("login data").token;
    assert!(bearer.starts_with("Bearer "));
    let token = token_of(&bearer);

    let session = sessions.get(token).expect("session stored");
    assert_eq!(session.get_item(ADMIN_FLAG), Some("true"));
    assert!(is_admin(&sessions, token));

    logout_admin(&sessions, token).unwrap();
    assert!(!is_admin(&sessions, token));
    assert!(sessions.get(token).is_none());
}

#[test]
fn unknown_token_is_not_admin() {
    let sessions = SessionStore::new();
    login_admin(&sessions, request("admin", "admin")).unwrap();

    assert!(!is_admin(&sessions, "not-a-session"));
}

#[test]
fn session_without_flag_is_not_admin() {
    let sessions = SessionStore::new();
    let mut session = sessions.open();
    session.set_item("theme", "dark");
    let id = session.id().to_string();
    sessions.put(session);

    assert!(!is_admin(&sessions, &id));

    let mut session = sessions.get(&id).unwrap();
    session.set_item(ADMIN_FLAG, "true");
    sessions.put(session);
    assert!(is_admin(&sessions, &id));

    let mut session = sessions.get(&id).unwrap();
    session.remove_item(ADMIN_FLAG);
    sessions.put(session);
    assert!(!is_admin(&sessions, &id));
}

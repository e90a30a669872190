use eratos::config::AccountPolicyConfig;
use eratos::db::{HISTORY_WINDOW, Store};
use eratos::services::{AccountError, AccountService};

async fn in_memory_store() -> Store {
    Store::with_pool_options("sqlite::memory:", 1, 1)
        .await
        .expect("Failed to create in-memory store")
}

fn service(store: Store) -> AccountService {
    AccountService::new(store, AccountPolicyConfig::default())
}

#[tokio::test]
async fn test_connected_store_answers_ping() {
    let store = in_memory_store().await;
    store.ping().await.unwrap();
}

#[tokio::test]
async fn test_register_then_authenticate() {
    let store = in_memory_store().await;
    let accounts = service(store.clone());

    let account = accounts.register("alice", "secret").await.unwrap();
    assert_eq!(account.username, "alice");
    assert!(store.username_exists("alice").await.unwrap());

    let username = accounts.authenticate("alice", "secret").await.unwrap();
    assert_eq!(username, "alice");

    let err = accounts.authenticate("alice", "wrong").await.unwrap_err();
    assert!(matches!(err, AccountError::InvalidCredentials));
}

#[tokio::test]
async fn test_unknown_user_fails_like_wrong_password() {
    let store = in_memory_store().await;
    let accounts = service(store);

    let err = accounts.authenticate("ghost", "secret").await.unwrap_err();
    assert!(matches!(err, AccountError::InvalidCredentials));
}

#[tokio::test]
async fn test_duplicate_registration_rejected() {
    let store = in_memory_store().await;
    let accounts = service(store);

    accounts.register("bob", "secret").await.unwrap();

    let err = accounts.register("bob", "other").await.unwrap_err();
    assert!(matches!(err, AccountError::DuplicateUsername));
}

#[tokio::test]
async fn test_username_is_case_sensitive_as_stored() {
    let store = in_memory_store().await;
    let accounts = service(store.clone());

    accounts.register("Carol", "secret").await.unwrap();

    assert!(store.username_exists("Carol").await.unwrap());
    assert!(!store.username_exists("carol").await.unwrap());
}

#[tokio::test]
async fn test_blank_and_short_passwords_rejected_before_store() {
    let store = in_memory_store().await;
    let accounts = service(store.clone());

    let err = accounts.register("  ", "secret").await.unwrap_err();
    assert!(matches!(err, AccountError::InvalidInput(_)));

    let err = accounts.register("dave", "  ").await.unwrap_err();
    assert!(matches!(err, AccountError::InvalidInput(_)));

    let err = accounts.register("dave", "ab").await.unwrap_err();
    assert!(matches!(err, AccountError::InvalidInput(_)));

    assert!(!store.username_exists("dave").await.unwrap());
}

#[tokio::test]
async fn test_minimum_length_is_configurable() {
    let store = in_memory_store().await;
    let accounts = AccountService::new(
        store,
        AccountPolicyConfig {
            minimum_password_length: 1,
        },
    );

    // The lenient variant only requires a non-blank password.
    accounts.register("erin", "x").await.unwrap();
    accounts.authenticate("erin", "x").await.unwrap();
}

#[tokio::test]
async fn test_append_and_recent_ordering() {
    let store = in_memory_store().await;

    store
        .append_action("alice", "Register", Some("User registered".to_string()))
        .await
        .unwrap();
    store.append_action("alice", "Login", None).await.unwrap();
    store
        .append_action("mallory", "Login", None)
        .await
        .unwrap();

    let entries = store
        .recent_actions_for_user("alice", HISTORY_WINDOW)
        .await
        .unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].action_type, "Login");
    assert_eq!(entries[1].action_type, "Register");
    assert!(entries[0].id > entries[1].id);

    // Absent details are stored as the empty string.
    assert_eq!(entries[0].details.as_deref(), Some(""));
    assert_eq!(entries[1].details.as_deref(), Some("User registered"));
}

#[tokio::test]
async fn test_recent_respects_max_count() {
    let store = in_memory_store().await;

    for i in 0..5 {
        store
            .append_action("alice", "GetPrimes", Some(format!("limit={i}")))
            .await
            .unwrap();
    }

    let entries = store.recent_actions_for_user("alice", 3).await.unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].details.as_deref(), Some("limit=4"));
    assert_eq!(entries[2].details.as_deref(), Some("limit=2"));
}

#[tokio::test]
async fn test_timestamps_are_sortable_utc() {
    let store = in_memory_store().await;

    store.append_action("alice", "Login", None).await.unwrap();

    let entries = store.recent_actions_for_user("alice", 1).await.unwrap();
    let parsed = chrono::DateTime::parse_from_rfc3339(&entries[0].timestamp);
    assert!(parsed.is_ok());
}

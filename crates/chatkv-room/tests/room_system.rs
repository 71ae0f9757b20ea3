//! Integration tests for the room system over the in-memory store.

use std::sync::Arc;

use chatkv_room::{Room, RoomDirectory, RoomError};
use chatkv_store::{Database, MemoryStore, Namespace};

// =========================================================================
// Helpers
// =========================================================================

fn directory() -> RoomDirectory<MemoryStore> {
    RoomDirectory::new(Arc::new(MemoryStore::new()))
}

async fn sorted_members(room: &Room<MemoryStore>) -> Vec<String> {
    let mut members = room.members().await.unwrap();
    members.sort();
    members
}

// =========================================================================
// Membership
// =========================================================================

#[tokio::test]
async fn test_join_then_leave_toggles_membership() {
    let room = directory().room("r").unwrap();
    for nick in ["alice", "bob", "carol with spaces", "ünïcødé"] {
        room.join(nick).await.unwrap();
        assert!(room.is_member(nick).await.unwrap(), "{nick} should be a member");
        room.leave(nick).await.unwrap();
        assert!(!room.is_member(nick).await.unwrap(), "{nick} should be gone");
    }
}

#[tokio::test]
async fn test_join_is_idempotent() {
    let room = directory().room("r").unwrap();
    room.join("alice").await.unwrap();
    room.join("alice").await.unwrap();

    let members = room.members().await.unwrap();
    assert_eq!(members.iter().filter(|m| *m == "alice").count(), 1);
}

#[tokio::test]
async fn test_leave_absent_member_is_noop() {
    let room = directory().room("r").unwrap();
    room.join("alice").await.unwrap();
    room.leave("nobody").await.unwrap();
    assert_eq!(sorted_members(&room).await, vec!["alice"]);
}

// =========================================================================
// Posting
// =========================================================================

#[tokio::test]
async fn test_say_by_non_member_fails_without_append() {
    let room = directory().room("r").unwrap();
    room.join("alice").await.unwrap();
    room.say("alice", "first").await.unwrap();

    let before = room.messages().len().await.unwrap();
    let result = room.say("mallory", "sneaky").await;
    assert!(matches!(result, Err(RoomError::UserNotFound { .. })));
    assert_eq!(room.messages().len().await.unwrap(), before);
}

#[tokio::test]
async fn test_messages_handle_is_live() {
    let room = directory().room("r").unwrap();
    room.join("alice").await.unwrap();

    let log = room.messages();
    assert_eq!(log.len().await.unwrap(), 0);
    room.say("alice", "one").await.unwrap();
    room.say("alice", "two").await.unwrap();
    assert_eq!(log.len().await.unwrap(), 2);
}

#[tokio::test]
async fn test_full_range_is_append_order() {
    let room = directory().room("r").unwrap();
    room.join("alice").await.unwrap();
    room.join("bob").await.unwrap();

    let script = [("alice", "a"), ("bob", "b"), ("alice", "c"), ("bob", "d")];
    for (nick, text) in script {
        room.say(nick, text).await.unwrap();
    }

    let all = room.messages().range(0, -1).await.unwrap();
    assert_eq!(all.len(), room.messages().len().await.unwrap());
    let seen: Vec<(&str, &str)> = all
        .iter()
        .map(|m| (m.nickname.as_str(), m.text.as_str()))
        .collect();
    assert_eq!(seen, script);
}

#[tokio::test]
async fn test_clear_then_len_is_zero() {
    let room = directory().room("r").unwrap();
    room.join("alice").await.unwrap();
    room.say("alice", "bye").await.unwrap();

    room.messages().clear().await.unwrap();
    assert_eq!(room.messages().len().await.unwrap(), 0);
    assert!(room.is_member("alice").await.unwrap(), "clear leaves members alone");
}

// =========================================================================
// Namespacing and persistence
// =========================================================================

#[tokio::test]
async fn test_rooms_do_not_share_state() {
    let dir = directory();
    let one = dir.room("one").unwrap();
    let two = dir.room("two").unwrap();

    one.join("alice").await.unwrap();
    one.say("alice", "only in one").await.unwrap();

    assert!(two.members().await.unwrap().is_empty());
    assert_eq!(two.messages().len().await.unwrap(), 0);
}

#[tokio::test]
async fn test_room_state_outlives_handle() {
    let dir = directory();
    {
        let room = dir.room("persist").unwrap();
        room.join("alice").await.unwrap();
        room.say("alice", "still here").await.unwrap();
    }

    let room = dir.room("persist").unwrap();
    assert_eq!(sorted_members(&room).await, vec!["alice"]);
    let texts: Vec<String> = room.messages().iter().await.unwrap().map(|m| m.text).collect();
    assert_eq!(texts, vec!["still here"]);
}

#[tokio::test]
async fn test_keys_follow_prefix_namespace_key_layout() {
    let store = Arc::new(MemoryStore::new());
    let room = RoomDirectory::new(Arc::clone(&store)).room("layout").unwrap();
    room.join("alice").await.unwrap();
    room.say("alice", "hi").await.unwrap();

    let raw = Database::new(Arc::clone(&store), Namespace::new("layout").unwrap());
    assert_eq!(raw.namespace_key("members"), "Chat:layout:members");
    assert!(raw.set_is_member("members", "alice").await.unwrap());

    let stored = raw.list_index("messages", 0).await.unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&stored).unwrap();
    assert_eq!(json["type"], "Message");
    assert_eq!(json["data"][0], "alice");
    assert_eq!(json["data"][1], "hi");
}

// =========================================================================
// End-to-end scenario
// =========================================================================

#[tokio::test]
async fn test_two_member_scenario() {
    let room = directory().room("test2").unwrap();
    room.messages().clear().await.unwrap();
    assert!(room.members().await.unwrap().is_empty());

    room.join("alice").await.unwrap();
    room.join("bob").await.unwrap();
    assert_eq!(sorted_members(&room).await, vec!["alice", "bob"]);
    assert!(room.is_member("alice").await.unwrap());
    assert!(room.is_member("bob").await.unwrap());

    room.leave("bob").await.unwrap();
    assert_eq!(sorted_members(&room).await, vec!["alice"]);

    assert_eq!(room.messages().len().await.unwrap(), 0);
    let result = room.say("bob", "hi").await;
    assert!(matches!(result, Err(RoomError::UserNotFound { .. })));

    room.say("alice", "ho").await.unwrap();
    let len = room.messages().len().await.unwrap();
    let last = room.messages().at(len as isize - 1).await.unwrap().unwrap();
    assert_eq!(last.text, "ho");
    assert_eq!(last.nickname, "alice");
}

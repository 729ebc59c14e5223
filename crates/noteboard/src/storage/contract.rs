//! Behavior every [`NoteRepository`] backend must share.
//!
//! Each backend's tests call [`run_all`] on an empty store.

use std::time::Duration;

use noteboard_core::note::NewNote;
use noteboard_core::storage::NoteRepository;

pub async fn run_all(repo: &dyn NoteRepository) {
    create_assigns_id_and_timestamps(repo).await;
    get_missing_is_none(repo).await;
    update_refreshes_updated_at(repo).await;
    update_missing_is_none(repo).await;
    list_filters_by_type_and_orders_by_recency(repo).await;
    delete_is_idempotent(repo).await;
}

async fn create_assigns_id_and_timestamps(repo: &dyn NoteRepository) {
    let first = repo
        .create_note(&NewNote::new("First", "<p>one</p>"))
        .await
        .unwrap();
    let second = repo
        .create_note(&NewNote::new("Second", "<p>two</p>").with_type("hash"))
        .await
        .unwrap();

    assert!(first.id > 0);
    assert!(second.id > first.id);
    assert_eq!(first.note_type, "main");
    assert_eq!(second.note_type, "hash");
    assert_eq!(first.created_at, first.updated_at);

    let fetched = repo.get_note(first.id).await.unwrap().unwrap();
    assert_eq!(fetched, first);

    repo.delete_note(first.id).await.unwrap();
    repo.delete_note(second.id).await.unwrap();
}

async fn get_missing_is_none(repo: &dyn NoteRepository) {
    assert!(repo.get_note(999_999).await.unwrap().is_none());
}

async fn update_refreshes_updated_at(repo: &dyn NoteRepository) {
    let note = repo
        .create_note(&NewNote::new("Draft", "<p>v1</p>").with_type("idea"))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;

    let updated = repo
        .update_note(note.id, "Final", "<p>v2</p>")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, note.id);
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.content, "<p>v2</p>");
    assert_eq!(updated.note_type, "idea");
    assert_eq!(updated.created_at, note.created_at);
    assert!(updated.updated_at > note.updated_at);
    assert!(updated.is_edited());

    repo.delete_note(note.id).await.unwrap();
}

async fn update_missing_is_none(repo: &dyn NoteRepository) {
    let result = repo.update_note(999_999, "t", "c").await.unwrap();
    assert!(result.is_none());
}

async fn list_filters_by_type_and_orders_by_recency(repo: &dyn NoteRepository) {
    let older = repo
        .create_note(&NewNote::new("Older", "<p>a</p>"))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    let newer = repo
        .create_note(&NewNote::new("Newer", "<p>b</p>"))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    let other = repo
        .create_note(&NewNote::new("Other", "<p>c</p>").with_type("hash"))
        .await
        .unwrap();

    let main: Vec<i64> = repo
        .list_notes(Some("main"))
        .await
        .unwrap()
        .iter()
        .map(|n| n.id)
        .collect();
    assert_eq!(main, vec![newer.id, older.id]);

    let hash = repo.list_notes(Some("hash")).await.unwrap();
    assert_eq!(hash.len(), 1);
    assert_eq!(hash[0].id, other.id);

    let all: Vec<i64> = repo
        .list_notes(None)
        .await
        .unwrap()
        .iter()
        .map(|n| n.id)
        .collect();
    assert_eq!(all, vec![other.id, newer.id, older.id]);

    // Editing moves a note to the front.
    tokio::time::sleep(Duration::from_millis(5)).await;
    repo.update_note(older.id, "Older", "<p>edited</p>")
        .await
        .unwrap();
    let main = repo.list_notes(Some("main")).await.unwrap();
    assert_eq!(main[0].id, older.id);

    assert!(repo.list_notes(Some("unused")).await.unwrap().is_empty());

    for id in [older.id, newer.id, other.id] {
        repo.delete_note(id).await.unwrap();
    }
}

async fn delete_is_idempotent(repo: &dyn NoteRepository) {
    let note = repo
        .create_note(&NewNote::new("Doomed", "<p>bye</p>"))
        .await
        .unwrap();

    repo.delete_note(note.id).await.unwrap();
    assert!(repo.get_note(note.id).await.unwrap().is_none());

    repo.delete_note(note.id).await.unwrap();
    assert!(repo.list_notes(None).await.unwrap().is_empty());
}

//! Tests for gallery import and listing.

use std::sync::Arc;
use tempfile::TempDir;
use thirdbrain_gallery::ContentGallery;
use thirdbrain_storage::{FileSystemVault, Vault};
use thirdbrain_store::{ArtifactStore, MemoryStore};

async fn seeded_vault(temp_dir: &TempDir) -> Arc<FileSystemVault> {
    let vault = FileSystemVault::new(temp_dir.path()).unwrap();

    vault
        .upload(
            "books/Atomic Habits by James Clear/Atomic Habits by James Clear.txt",
            b"Tiny changes, remarkable results.",
        )
        .await
        .unwrap();
    vault
        .upload(
            "books/Atomic Habits by James Clear/Atomic Habits by James Clear_dalle_0.png",
            b"png-a",
        )
        .await
        .unwrap();
    vault
        .upload(
            "books/Atomic Habits by James Clear/Atomic Habits by James Clear_stability_0.png",
            b"png-b",
        )
        .await
        .unwrap();

    vault
        .upload(
            "books/Deep Work by Cal Newport/Deep Work by Cal Newport.txt",
            b"Focus without distraction.",
        )
        .await
        .unwrap();
    vault
        .upload(
            "books/Deep Work by Cal Newport/Deep Work by Cal Newport_dalle_0.png",
            b"png-c",
        )
        .await
        .unwrap();

    Arc::new(vault)
}

#[tokio::test]
async fn import_copies_titles_into_the_store() {
    let temp_dir = TempDir::new().unwrap();
    let vault = seeded_vault(&temp_dir).await;
    let store = Arc::new(MemoryStore::new());
    let gallery = ContentGallery::new(vault, store.clone());

    let imported = gallery.import("books", "books", None).await.unwrap();
    assert_eq!(imported.len(), 2);

    let record = store
        .get("books", "Atomic Habits by James Clear")
        .await
        .unwrap();
    assert_eq!(
        record.text("content"),
        Some("Tiny changes, remarkable results.")
    );
    assert_eq!(record.text("author"), Some("James Clear"));

    // Image links in file-enumeration order: dalle before stability.
    let urls = record.list("img_url").unwrap();
    assert_eq!(urls.len(), 2);
    assert!(urls[0].ends_with("Atomic Habits by James Clear_dalle_0.png"));
    assert!(urls[1].ends_with("Atomic Habits by James Clear_stability_0.png"));
}

#[tokio::test]
async fn import_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let vault = seeded_vault(&temp_dir).await;
    let store = Arc::new(MemoryStore::new());
    let gallery = ContentGallery::new(vault, store.clone());

    gallery.import("books", "books", None).await.unwrap();
    let first = store.get("books", "Deep Work by Cal Newport").await.unwrap();

    // A second pass converges on the same record and reuses the links.
    gallery.import("books", "books", None).await.unwrap();
    let second = store.get("books", "Deep Work by Cal Newport").await.unwrap();

    assert_eq!(first.fields, second.fields);
    assert_eq!(store.fetch_all("books").await.unwrap().len(), 2);
}

#[tokio::test]
async fn limit_caps_titles_newest_first() {
    let temp_dir = TempDir::new().unwrap();
    let vault = seeded_vault(&temp_dir).await;
    let store = Arc::new(MemoryStore::new());
    let gallery = ContentGallery::new(vault, store.clone());

    // Reverse enumeration order puts the lexicographically last folder first.
    let imported = gallery.import("books", "books", Some(1)).await.unwrap();
    assert_eq!(imported, vec!["Deep Work by Cal Newport"]);
    assert_eq!(store.fetch_all("books").await.unwrap().len(), 1);
}

#[tokio::test]
async fn list_is_read_only_and_newest_first() {
    let temp_dir = TempDir::new().unwrap();
    let vault = seeded_vault(&temp_dir).await;
    let store = Arc::new(MemoryStore::new());
    let gallery = ContentGallery::new(vault, store.clone());

    gallery.import("books", "books", None).await.unwrap();
    let before = store.fetch_all("books").await.unwrap();

    let entries = gallery.list("books").await.unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().any(|e| e.title == "Deep Work by Cal Newport"));
    assert!(
        entries
            .iter()
            .all(|e| !e.body.is_empty() && !e.image_urls.is_empty())
    );

    // Listing writes nothing.
    let after = store.fetch_all("books").await.unwrap();
    assert_eq!(before.len(), after.len());
}

#[tokio::test]
async fn underscored_folders_read_back_with_spaces() {
    let temp_dir = TempDir::new().unwrap();
    let vault = Arc::new(FileSystemVault::new(temp_dir.path()).unwrap());
    vault
        .upload("images/Neon_Alley/Neon_Alley.txt", b"Image prompt: neon")
        .await
        .unwrap();

    let store = Arc::new(MemoryStore::new());
    let gallery = ContentGallery::new(vault, store.clone());
    let imported = gallery.import("images", "art", None).await.unwrap();

    assert_eq!(imported, vec!["Neon Alley"]);
    assert!(store.get("art", "Neon Alley").await.is_ok());
}

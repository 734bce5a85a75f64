//! Tests for the filesystem vault backend.

use tempfile::TempDir;
use thirdbrain_storage::{EntryKind, FileSystemVault, Vault};

#[tokio::test]
async fn upload_and_download() {
    let temp_dir = TempDir::new().unwrap();
    let vault = FileSystemVault::new(temp_dir.path()).unwrap();

    let data = b"Introduction: a brief overview...";
    vault
        .upload("books/Deep Work by Cal Newport/Deep Work by Cal Newport.txt", data)
        .await
        .unwrap();

    let retrieved = vault
        .download("books/Deep Work by Cal Newport/Deep Work by Cal Newport.txt")
        .await
        .unwrap();
    assert_eq!(retrieved, data);
}

#[tokio::test]
async fn existing_folder_is_success() {
    let temp_dir = TempDir::new().unwrap();
    let vault = FileSystemVault::new(temp_dir.path()).unwrap();

    vault.create_folder("books/Some Title").await.unwrap();
    // Creating the same folder again must not error.
    vault.create_folder("books/Some Title").await.unwrap();
    assert!(vault.exists("books/Some Title").await.unwrap());
}

#[tokio::test]
async fn download_missing_blob_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let vault = FileSystemVault::new(temp_dir.path()).unwrap();

    let result = vault.download("books/missing.txt").await;
    let err = result.unwrap_err();
    match err.kind() {
        thirdbrain_error::ThirdBrainErrorKind::Vault(e) => {
            assert!(matches!(e.kind, thirdbrain_error::VaultErrorKind::NotFound(_)));
        }
        other => panic!("expected vault error, got {other:?}"),
    }
}

#[tokio::test]
async fn traversal_segments_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let vault = FileSystemVault::new(temp_dir.path()).unwrap();

    let result = vault.upload("books/../../etc/passwd", b"nope").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn listing_is_sorted_and_recursive() {
    let temp_dir = TempDir::new().unwrap();
    let vault = FileSystemVault::new(temp_dir.path()).unwrap();

    vault.upload("books/B Title/B Title.txt", b"b").await.unwrap();
    vault.upload("books/A Title/A Title.txt", b"a").await.unwrap();
    vault
        .upload("books/A Title/A Title_dalle_0.png", b"png")
        .await
        .unwrap();

    let entries = vault.list_folder("books", true).await.unwrap();
    let paths: Vec<_> = entries.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(
        paths,
        [
            "books/A Title",
            "books/A Title/A Title.txt",
            "books/A Title/A Title_dalle_0.png",
            "books/B Title",
            "books/B Title/B Title.txt",
        ]
    );

    let folders: Vec<_> = entries
        .iter()
        .filter(|e| e.kind == EntryKind::Folder)
        .map(|e| e.name())
        .collect();
    assert_eq!(folders, ["A Title", "B Title"]);

    // Non-recursive listing stops at the first level.
    let shallow = vault.list_folder("books", false).await.unwrap();
    assert_eq!(shallow.len(), 2);
    assert!(shallow.iter().all(|e| e.kind == EntryKind::Folder));
}

#[tokio::test]
async fn link_resolution_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let vault = FileSystemVault::new(temp_dir.path()).unwrap();

    vault
        .upload("images/Lighthouse/Lighthouse_dalle_0.png", b"png")
        .await
        .unwrap();

    // Calling resolve twice must not error and must return equal links.
    let first = vault
        .resolve_link("images/Lighthouse/Lighthouse_dalle_0.png")
        .await
        .unwrap();
    let second = vault
        .resolve_link("images/Lighthouse/Lighthouse_dalle_0.png")
        .await
        .unwrap();
    assert_eq!(first, second);
    assert!(first.ends_with("Lighthouse_dalle_0.png"));

    let links = vault
        .list_links("images/Lighthouse/Lighthouse_dalle_0.png")
        .await
        .unwrap();
    assert_eq!(links, vec![first]);
}

#[tokio::test]
async fn links_survive_reopening_the_vault() {
    let temp_dir = TempDir::new().unwrap();

    let first = {
        let vault = FileSystemVault::new(temp_dir.path()).unwrap();
        vault.upload("images/A/A_dalle_0.png", b"png").await.unwrap();
        vault.resolve_link("images/A/A_dalle_0.png").await.unwrap()
    };

    let reopened = FileSystemVault::new(temp_dir.path()).unwrap();
    let second = reopened.resolve_link("images/A/A_dalle_0.png").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn linking_a_missing_blob_fails() {
    let temp_dir = TempDir::new().unwrap();
    let vault = FileSystemVault::new(temp_dir.path()).unwrap();

    assert!(vault.resolve_link("images/ghost.png").await.is_err());
}

#[tokio::test]
async fn delete_removes_folder_and_links() {
    let temp_dir = TempDir::new().unwrap();
    let vault = FileSystemVault::new(temp_dir.path()).unwrap();

    vault.upload("images/A/A_dalle_0.png", b"png").await.unwrap();
    vault.resolve_link("images/A/A_dalle_0.png").await.unwrap();

    vault.delete("images/A").await.unwrap();
    assert!(!vault.exists("images/A").await.unwrap());
    let links = vault.list_links("images/A/A_dalle_0.png").await.unwrap();
    assert!(links.is_empty());
}

//! End-to-end tests for the playlist pipeline.

mod support;

use std::sync::Arc;
use support::{FakeImages, FakeMusic, MemoryVault, ScriptedText};
use thirdbrain_interface::NullSink;
use thirdbrain_pipeline::{PipelineContext, PlaylistMixer};
use thirdbrain_store::MemoryStore;

fn mixer_with(responses: Vec<&str>, music: Arc<FakeMusic>) -> PlaylistMixer {
    let ctx = PipelineContext::new(
        Arc::new(ScriptedText::new(responses)),
        Arc::new(FakeImages::new("dalle", 1)),
        Arc::new(FakeImages::new("stability", 2)),
        Arc::new(MemoryVault::new()),
        Arc::new(MemoryStore::new()),
    )
    .with_sink(Arc::new(NullSink));
    PlaylistMixer::new(Arc::new(ctx), music)
}

const PLAYLIST_JSON: &str = r#"[
    {"song": "Everybody Hurts", "artist": "R.E.M."},
    {"song": "Obscure B-Side", "artist": "Nobody"}
]"#;

#[tokio::test]
async fn acceptable_hits_are_added_and_misses_skipped() {
    // First song: advanced query hits with enough popularity.
    // Second song: both queries return nothing acceptable.
    let music = Arc::new(FakeMusic::new(vec![
        vec![FakeMusic::hit("t1", "Everybody Hurts", "R.E.M.", 85)],
        vec![],
        vec![FakeMusic::hit("t2", "Obscure B-Side", "Nobody", 3)],
    ]));
    let mixer = mixer_with(vec![PLAYLIST_JSON], music.clone());

    let summary = mixer.run("sad songs", 2, "Rainy Day", 30).await.unwrap();

    assert_eq!(summary.added.len(), 1);
    assert_eq!(summary.added[0].id, "t1");
    assert_eq!(summary.skipped, vec!["Obscure B-Side by Nobody"]);

    // The playlist name carries the caller's name plus a timestamp.
    let created = music.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    assert!(created[0].starts_with("Rainy Day ("));

    let added = music.added.lock().unwrap();
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].1, vec!["t1".to_string()]);
}

#[tokio::test]
async fn low_popularity_advanced_hit_falls_back_to_basic_query() {
    let music = Arc::new(FakeMusic::new(vec![
        // Advanced query: popular enough? No.
        vec![FakeMusic::hit("t1", "Everybody Hurts", "R.E.M.", 10)],
        // Basic query: yes.
        vec![FakeMusic::hit("t2", "Everybody Hurts", "R.E.M.", 90)],
    ]));
    let mixer = mixer_with(
        vec![r#"[{"song": "Everybody Hurts", "artist": "R.E.M."}]"#],
        music,
    );

    let summary = mixer.run("sad songs", 1, "Mix", 30).await.unwrap();
    assert_eq!(summary.added.len(), 1);
    assert_eq!(summary.added[0].id, "t2");
    assert!(summary.skipped.is_empty());
}

#[tokio::test]
async fn unparseable_completion_is_a_playlist_error() {
    let music = Arc::new(FakeMusic::new(vec![]));
    let mixer = mixer_with(vec!["I would rather not."], music);

    let err = mixer.run("anything", 3, "Mix", 30).await.unwrap_err();
    match err.kind() {
        thirdbrain_error::ThirdBrainErrorKind::Pipeline(e) => {
            assert!(matches!(
                e.kind,
                thirdbrain_error::PipelineErrorKind::PlaylistParse(_)
            ));
        }
        other => panic!("expected pipeline error, got {other:?}"),
    }
}

#[tokio::test]
async fn recommendations_seed_from_the_first_hit() {
    let music = Arc::new(FakeMusic::new(vec![vec![FakeMusic::hit(
        "seed", "Yesterday", "The Beatles", 95,
    )]]));
    let mixer = mixer_with(vec![], music);

    let recs = mixer.recommendations("Yesterday").await.unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].id, "rec-1");
}

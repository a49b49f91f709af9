use dhwani_backend::upload::TempAudioFile;
use uuid::Uuid;

fn scratch_dir() -> String {
    let dir = std::env::temp_dir().join(format!("dhwani-upload-test-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.to_string_lossy().to_string()
}

#[tokio::test]
async fn given_two_uploads_in_the_same_instant_then_paths_are_distinct() {
    let dir = scratch_dir();

    let (first, second) = tokio::join!(
        TempAudioFile::store(&dir, "clip.webm", b"pehla"),
        TempAudioFile::store(&dir, "clip.webm", b"doosra"),
    );
    let first = first.unwrap();
    let second = second.unwrap();

    assert_ne!(first.path(), second.path());
    assert!(first.path().exists());
    assert!(second.path().exists());

    first.cleanup().await;
    second.cleanup().await;
    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn given_cleanup_runs_twice_then_second_run_is_a_no_op() {
    let dir = scratch_dir();

    let audio = TempAudioFile::store(&dir, "clip.webm", b"awaaz").await.unwrap();
    assert!(audio.path().exists());

    audio.cleanup().await;
    assert!(!audio.path().exists());

    // Absence of the file is not an error
    audio.cleanup().await;

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn given_original_filename_with_extension_then_stored_path_keeps_it() {
    let dir = scratch_dir();

    let audio = TempAudioFile::store(&dir, "recording.mp3", b"awaaz").await.unwrap();

    assert_eq!(
        audio.path().extension().and_then(|ext| ext.to_str()),
        Some("mp3")
    );
    assert_eq!(audio.original_name(), "recording.mp3");

    audio.cleanup().await;
    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn given_original_filename_without_extension_then_stored_path_has_none() {
    let dir = scratch_dir();

    let audio = TempAudioFile::store(&dir, "audio", b"awaaz").await.unwrap();

    assert_eq!(audio.path().extension(), None);

    audio.cleanup().await;
    std::fs::remove_dir_all(&dir).unwrap();
}

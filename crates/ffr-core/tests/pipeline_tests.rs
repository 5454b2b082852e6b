//! End-to-end tests for chart acquisition.
//!
//! The remote service is replaced by an in-memory fake so batching, retry and
//! merge behaviour can be observed without network access. Time is paused, so
//! back-off and cool-down delays advance instantly.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use ffr_core::retry::FixedDelay;
use ffr_core::{
    Chart, Config, Endpoints, Error, FetchBytes, FetchSettings, Note, NoteDirection, Result,
    SongInfo, acquire_charts, fetch_charts, fetch_note_sequences, load_charts,
};
use tempfile::tempdir;

const SONGLIST_URL: &str = "https://ffr.test/songlist.csv";
const BEATBOX_URL: &str = "https://ffr.test/beatbox?level=";

enum Reply {
    Body { bytes: Vec<u8>, delay: Duration },
    Fail,
}

/// In-memory stand-in for the remote service.
#[derive(Default)]
struct FakeService {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<String>>,
    completed: Mutex<Vec<String>>,
}

impl FakeService {
    fn with_body(mut self, url: &str, body: &str) -> Self {
        self.replies.insert(
            url.to_string(),
            Reply::Body {
                bytes: body.as_bytes().to_vec(),
                delay: Duration::ZERO,
            },
        );
        self
    }

    fn with_delayed_body(mut self, url: &str, body: &str, delay: Duration) -> Self {
        self.replies.insert(
            url.to_string(),
            Reply::Body {
                bytes: body.as_bytes().to_vec(),
                delay,
            },
        );
        self
    }

    fn with_failure(mut self, url: &str) -> Self {
        self.replies.insert(url.to_string(), Reply::Fail);
        self
    }

    fn calls_to(&self, url: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|u| *u == url).count()
    }

    fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl FetchBytes for FakeService {
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.calls.lock().unwrap().push(url.to_string());

        match self.replies.get(url) {
            Some(Reply::Body { bytes, delay }) => {
                tokio::time::sleep(*delay).await;
                self.completed.lock().unwrap().push(url.to_string());
                Ok(bytes.clone())
            }
            Some(Reply::Fail) => Err(Error::Network(format!("HTTP 500 error: {}", url))),
            None => Err(Error::Network(format!("HTTP 404 error: {}", url))),
        }
    }
}

fn endpoints() -> Endpoints {
    Endpoints::new(Some(SONGLIST_URL.into()), Some(BEATBOX_URL.into())).unwrap()
}

fn beatbox_url(level: u32) -> String {
    format!("{}{}", BEATBOX_URL, level)
}

fn test_settings(batch_size: usize) -> FetchSettings {
    FetchSettings::new(
        batch_size,
        Duration::from_secs(5),
        FixedDelay::new(3, Duration::from_secs(1)),
    )
}

const SONG_LIST: &str = "\
level,genre,name,author,difficulty
1,1,First Song,Someone,10
2,1,\"Second, Song\",Someone,20
3,2,Third Song,Other,0
";

fn service_with_songs() -> FakeService {
    FakeService::default()
        .with_body(SONGLIST_URL, SONG_LIST)
        .with_body(&beatbox_url(1), r#"[["L",0],["D",10]]"#)
        .with_body(&beatbox_url(2), r#"[["U",5],["X",6],["R",7]]"#)
        .with_body(&beatbox_url(3), r#"[]"#)
}

mod fetch_pipeline {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fetch_charts_merges_by_position() {
        let service = service_with_songs();
        let charts = fetch_charts(&service, &endpoints(), &test_settings(50))
            .await
            .unwrap();

        assert_eq!(
            charts,
            vec![
                Chart::new(
                    SongInfo::new(1, "First Song", 10),
                    vec![
                        Note::new(NoteDirection::Left, 0),
                        Note::new(NoteDirection::Down, 10),
                    ],
                ),
                Chart::new(
                    SongInfo::new(2, "Second, Song", 20),
                    vec![
                        Note::new(NoteDirection::Up, 5),
                        Note::new(NoteDirection::Right, 7),
                    ],
                ),
                Chart::new(SongInfo::new(3, "Third Song", 0), Vec::new()),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_batch_results_follow_input_order() {
        let levels: Vec<u32> = (1..=10).collect();
        let mut service = FakeService::default();
        for &level in &levels {
            // Later levels answer first
            let delay = Duration::from_millis(u64::from(20 - level) * 10);
            service = service.with_delayed_body(&beatbox_url(level), &level.to_string(), delay);
        }

        let payloads =
            fetch_note_sequences(&service, &endpoints(), &levels, &test_settings(4)).await;

        let bodies: Vec<String> = payloads
            .into_iter()
            .map(|p| String::from_utf8(p.unwrap()).unwrap())
            .collect();
        let expected: Vec<String> = levels.iter().map(u32::to_string).collect();
        assert_eq!(bodies, expected);

        // Completion order really was shuffled within each batch
        let completed = service.completed.lock().unwrap().clone();
        assert_eq!(completed[0], beatbox_url(4));
        assert_ne!(completed, levels.iter().map(|&l| beatbox_url(l)).collect::<Vec<_>>());
    }

    #[tokio::test(start_paused = true)]
    async fn test_batches_are_sequential() {
        let levels: Vec<u32> = (1..=6).collect();
        let mut service = FakeService::default();
        for &level in &levels {
            let delay = if level == 1 {
                Duration::from_secs(60)
            } else {
                Duration::ZERO
            };
            service = service.with_delayed_body(&beatbox_url(level), "[]", delay);
        }

        fetch_note_sequences(&service, &endpoints(), &levels, &test_settings(3)).await;

        // The slow request in batch one holds back all of batch two
        let completed = service.completed.lock().unwrap().clone();
        let slow = completed.iter().position(|u| *u == beatbox_url(1)).unwrap();
        for level in 4..=6 {
            let pos = completed
                .iter()
                .position(|u| *u == beatbox_url(level))
                .unwrap();
            assert!(pos > slow, "level {} finished before batch one", level);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausted_retries_degrade_single_entry() {
        let service = FakeService::default()
            .with_body(SONGLIST_URL, SONG_LIST)
            .with_body(&beatbox_url(1), r#"[["L",0]]"#)
            .with_failure(&beatbox_url(2))
            .with_body(&beatbox_url(3), r#"[["R",3]]"#);

        let charts = fetch_charts(&service, &endpoints(), &test_settings(50))
            .await
            .unwrap();

        assert_eq!(service.calls_to(&beatbox_url(2)), 3);
        assert_eq!(service.calls_to(&beatbox_url(1)), 1);
        assert_eq!(charts.len(), 3);
        assert_eq!(charts[0].notes, vec![Note::new(NoteDirection::Left, 0)]);
        assert!(charts[1].notes.is_empty());
        assert_eq!(charts[2].notes, vec![Note::new(NoteDirection::Right, 3)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unreachable_song_list_is_fatal() {
        let service = FakeService::default().with_failure(SONGLIST_URL);

        let result = fetch_charts(&service, &endpoints(), &test_settings(50)).await;

        assert!(matches!(result, Err(Error::Network(_))));
        assert_eq!(service.calls_to(SONGLIST_URL), 3);
        assert_eq!(service.total_calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_malformed_song_list_is_fatal() {
        let service = FakeService::default().with_body(
            SONGLIST_URL,
            "level,genre,name,author,difficulty\n1,1,Song,Someone,ten\n",
        );

        let result = fetch_charts(&service, &endpoints(), &test_settings(50)).await;

        assert!(matches!(result, Err(Error::Parse(_))));
        // No beatbox was requested
        assert_eq!(service.total_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_array_beatbox_is_fatal() {
        let service = service_with_songs().with_body(&beatbox_url(2), "<html>oops</html>");

        let result = fetch_charts(&service, &endpoints(), &test_settings(50)).await;

        match result {
            Err(Error::Parse(msg)) => assert!(msg.contains("Level 2"), "{}", msg),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}

mod run_modes {
    use super::*;

    #[test]
    fn test_save_without_download_fails_before_io() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("charts.txt");

        let result = Config::from_flags(
            false,
            true,
            Some(SONGLIST_URL.into()),
            Some(BEATBOX_URL.into()),
            &path,
        );

        assert!(matches!(result, Err(Error::Configuration(_))));
        assert!(!path.exists());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_and_persist_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("charts.txt");
        let service = service_with_songs();

        let config = Config::from_flags(
            true,
            true,
            Some(SONGLIST_URL.into()),
            Some(BEATBOX_URL.into()),
            &path,
        )
        .unwrap()
        .with_fetch_settings(test_settings(50));

        let fetched = acquire_charts(&config, &service).await.unwrap();
        assert!(path.exists());

        let load_config = Config::from_flags(false, false, None, None, &path).unwrap();
        let offline = FakeService::default();
        let loaded = acquire_charts(&load_config, &offline).await.unwrap();

        assert_eq!(loaded, fetched);
        assert_eq!(offline.total_calls(), 0);
        assert_eq!(load_charts(&path).unwrap(), fetched);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_without_persist_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("charts.txt");

        let config = Config::from_flags(
            true,
            false,
            Some(SONGLIST_URL.into()),
            Some(BEATBOX_URL.into()),
            &path,
        )
        .unwrap()
        .with_fetch_settings(test_settings(50));

        let charts = acquire_charts(&config, &service_with_songs()).await.unwrap();

        assert_eq!(charts.len(), 3);
        assert!(!path.exists());
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("charts.txt");
        let config = Config::from_flags(false, false, None, None, &path).unwrap();

        let result = acquire_charts(&config, &FakeService::default()).await;

        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}

//! Corpus Module Tests
//!
//! ## Test Scopes
//! - **Collection**: Insert/member/delete semantics and the no-mutation-on-failure guarantees.
//! - **Snapshots**: JSON layout, round trips, and atomic failure on malformed input.
//! - **Files**: Save and load through the filesystem.

#[cfg(test)]
mod tests {
    use crate::corpus::memory::Corpus;
    use crate::error::Error;
    use crate::source::types::Comic;
    use crate::testing::sample_comic;
    use std::sync::Arc;

    fn corpus_with(ids: &[i64]) -> Corpus {
        let corpus = Corpus::new();
        for &id in ids {
            corpus.insert(id, sample_comic(id)).unwrap();
        }
        corpus
    }

    // ============================================================
    // COLLECTION TESTS
    // ============================================================

    #[test]
    fn test_new_corpus_is_empty() {
        let corpus = Corpus::new();

        assert!(corpus.is_empty());
        assert!(!corpus.member_of(0));
    }

    #[test]
    fn test_insert_then_member() {
        let corpus = Corpus::new();

        corpus.insert(1, Comic::default()).unwrap();

        assert!(corpus.member_of(1));
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn test_insert_duplicate_keeps_prior_value() {
        let corpus = corpus_with(&[5]);

        let mut replacement = sample_comic(5);
        replacement.title = "Impostor".to_string();
        let result = corpus.insert(5, replacement);

        assert!(matches!(result, Err(Error::DuplicateKey { id: 5 })));
        assert_eq!(corpus.get(5).unwrap().title, "Stub 5");
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn test_delete_then_not_member() {
        let corpus = corpus_with(&[1, 2]);

        let removed = corpus.delete(1).unwrap();

        assert_eq!(removed.num, 1);
        assert!(!corpus.member_of(1));
        assert!(corpus.member_of(2));
    }

    #[test]
    fn test_delete_missing_leaves_corpus_unchanged() {
        let corpus = corpus_with(&[1, 2, 3]);

        let result = corpus.delete(0);

        assert!(matches!(result, Err(Error::MissingKey { id: 0 })));
        assert_eq!(
            result.unwrap_err().to_string(),
            "id 0 not present in corpus"
        );
        assert_eq!(corpus.ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_ids_sorted_and_clear() {
        let corpus = corpus_with(&[9, 2, 40, 1]);

        assert_eq!(corpus.ids(), vec![1, 2, 9, 40]);

        corpus.clear();
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_concurrent_disjoint_inserts() {
        let corpus = Arc::new(Corpus::new());

        let handles: Vec<_> = (0..4i64)
            .map(|worker| {
                let corpus = corpus.clone();
                std::thread::spawn(move || {
                    for id in (worker * 250 + 1)..=((worker + 1) * 250) {
                        corpus.insert(id, sample_comic(id)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(corpus.len(), 1000);
        assert_eq!(corpus.ids(), (1..=1000).collect::<Vec<i64>>());
    }

    // ============================================================
    // SNAPSHOT TESTS
    // ============================================================

    #[test]
    fn test_serialize_layout() {
        let corpus = corpus_with(&[10, 2]);

        let encoded = corpus.serialize().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&encoded).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["2"]["num"], 2);
        assert_eq!(object["10"]["title"], "Stub 10");
        assert_eq!(object["10"]["year"], "2006");
        for key in ["num", "day", "month", "year", "transcript", "img", "title"] {
            assert!(object["2"].get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn test_serialize_empty_corpus() {
        let corpus = Corpus::new();
        assert_eq!(corpus.serialize().unwrap(), b"{}");
    }

    #[test]
    fn test_round_trip_preserves_records() {
        let original = corpus_with(&[1, 2, 3, 404, 1000]);

        let restored = Corpus::new();
        let count = restored.deserialize(&original.serialize().unwrap()).unwrap();

        assert_eq!(count, 5);
        assert_eq!(restored.ids(), original.ids());
        for id in original.ids() {
            assert_eq!(restored.get(id), original.get(id));
        }
    }

    #[test]
    fn test_deserialize_merges_into_existing() {
        let corpus = corpus_with(&[1, 2]);

        let mut newer = sample_comic(2);
        newer.title = "Revised".to_string();
        let incoming = serde_json::json!({ "2": newer, "3": sample_comic(3) });
        corpus
            .deserialize(incoming.to_string().as_bytes())
            .unwrap();

        assert_eq!(corpus.ids(), vec![1, 2, 3]);
        assert_eq!(corpus.get(2).unwrap().title, "Revised");
    }

    #[test]
    fn test_deserialize_malformed_leaves_corpus_unchanged() {
        let corpus = corpus_with(&[1]);

        // The first entry is valid; the second is not a comic.
        let malformed = br#"{"2": {"num": 2, "title": "ok"}, "3": {"num": "three"}}"#;
        let result = corpus.deserialize(malformed);

        assert!(matches!(result, Err(Error::SnapshotDecode(_))));
        assert_eq!(corpus.ids(), vec![1]);
    }

    #[test]
    fn test_deserialize_rejects_non_numeric_keys() {
        let corpus = Corpus::new();

        let result = corpus.deserialize(br#"{"one": {"num": 1}}"#);

        assert!(matches!(result, Err(Error::SnapshotDecode(_))));
        assert!(corpus.is_empty());
    }

    // ============================================================
    // FILE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.json");
        let original = corpus_with(&[1, 2, 3]);

        original.save_to_file(&path).await.unwrap();

        let restored = Corpus::new();
        let count = restored.load_from_file(&path).await.unwrap();

        assert_eq!(count, 3);
        assert_eq!(restored.get(3), Some(sample_comic(3)));
        assert!(!dir.path().join("corpus.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.json");

        corpus_with(&[1, 2, 3]).save_to_file(&path).await.unwrap();
        corpus_with(&[7]).save_to_file(&path).await.unwrap();

        let restored = Corpus::new();
        restored.load_from_file(&path).await.unwrap();
        assert_eq!(restored.ids(), vec![7]);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = Corpus::new();

        let result = corpus.load_from_file(dir.path().join("absent.json")).await;

        assert!(matches!(result, Err(Error::Io { .. })));
        assert!(corpus.is_empty());
    }

    #[tokio::test]
    async fn test_load_corrupt_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.json");
        tokio::fs::write(&path, b"{\"1\": {\"num\": 1},").await.unwrap();

        let corpus = Corpus::new();
        let result = corpus.load_from_file(&path).await;

        assert!(matches!(result, Err(Error::SnapshotDecode(_))));
        assert!(corpus.is_empty());
    }
}

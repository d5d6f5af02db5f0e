#[cfg(test)]
mod tests {

    use streamlog::{
        MAX_STREAM_ID, MIN_STREAM_ID, ReadOptions, StreamEngine, StreamError, StreamId,
        fields_from_pairs,
        traits::{StreamReader, StreamWriter},
    };

    fn ids(entries: &[streamlog::Entry]) -> Vec<StreamId> {
        entries.iter().map(|entry| entry.id()).collect()
    }

    #[test]
    fn test_append_assigns_sequential_ids_per_stream() {
        let engine = StreamEngine::new();

        assert_eq!(engine.append("a", fields_from_pairs([("k", "1")])).unwrap(), 0);
        assert_eq!(engine.append("a", fields_from_pairs([("k", "2")])).unwrap(), 1);
        assert_eq!(engine.append("b", fields_from_pairs([("k", "3")])).unwrap(), 0);
        assert_eq!(engine.append("a", Vec::new()).unwrap(), 2);

        assert_eq!(engine.length("a").unwrap(), 3);
        assert_eq!(engine.length("b").unwrap(), 1);
        assert_eq!(engine.last_id("a").unwrap(), Some(2));
    }

    #[test]
    fn test_fields_round_trip_in_order_with_duplicates() {
        let engine = StreamEngine::new();
        let fields = fields_from_pairs([("x", "1"), ("y", ""), ("x", "2")]);

        let id = engine.append("s", fields.clone()).unwrap();
        let entries = engine.range("s", id, id, None).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].fields(), fields.as_slice());
        assert_eq!(entries[0].get("x"), Some("1"));
    }

    #[test]
    fn test_read_returns_entries_at_or_after_id() {
        let engine = StreamEngine::new();
        for i in 0..3 {
            engine
                .append("s", fields_from_pairs([("i", i.to_string())]))
                .unwrap();
        }

        let result = engine.read(&["s"], &[1], &ReadOptions::new()).unwrap();
        assert_eq!(ids(&result["s"]), vec![1, 2]);

        let result = engine.read(&["s"], &[3], &ReadOptions::new()).unwrap();
        assert!(result["s"].is_empty());
    }

    #[test]
    fn test_read_multiple_streams_with_count() {
        let engine = StreamEngine::new();
        for _ in 0..5 {
            engine.append("a", Vec::new()).unwrap();
            engine.append("b", Vec::new()).unwrap();
        }

        let result = engine
            .read(&["a", "b"], &[0, 3], &ReadOptions::new().count(2))
            .unwrap();

        assert_eq!(ids(&result["a"]), vec![0, 1]);
        assert_eq!(ids(&result["b"]), vec![3, 4]);

        let result = engine
            .read(&["a"], &[0], &ReadOptions::new().count(0))
            .unwrap();
        assert!(result["a"].is_empty());
    }

    #[test]
    fn test_read_with_duplicate_names_uses_last_pair() {
        let engine = StreamEngine::new();
        for _ in 0..3 {
            engine.append("s", Vec::new()).unwrap();
        }

        let result = engine
            .read(&["s", "s"], &[0, 2], &ReadOptions::new())
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(ids(&result["s"]), vec![2]);
    }

    #[test]
    fn test_read_rejects_mismatched_lists() {
        let engine = StreamEngine::new();

        let err = engine
            .read(&["a", "b"], &[0], &ReadOptions::new())
            .unwrap_err();
        assert!(matches!(err, StreamError::InvalidArgument(_)));

        // No state was touched.
        assert!(!engine.contains_stream("a").unwrap());
        assert_eq!(engine.stream_count().unwrap(), 0);
    }

    #[test]
    fn test_read_with_no_streams_is_empty() {
        let engine = StreamEngine::new();
        let names: [&str; 0] = [];

        let result = engine.read(&names, &[], &ReadOptions::new()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_range_bounds() {
        let engine = StreamEngine::new();
        for _ in 0..5 {
            engine.append("s", Vec::new()).unwrap();
        }

        assert_eq!(ids(&engine.range("s", 1, 3, None).unwrap()), vec![1, 2, 3]);
        assert_eq!(
            ids(&engine.range("s", MIN_STREAM_ID, MAX_STREAM_ID, Some(2)).unwrap()),
            vec![0, 1]
        );
        assert!(engine.range("s", 3, 1, None).unwrap().is_empty());
        assert!(engine.range("s", -5, -1, None).unwrap().is_empty());
    }

    #[test]
    fn test_delete_counts_only_live_ids() {
        let engine = StreamEngine::new();
        for _ in 0..3 {
            engine.append("s", Vec::new()).unwrap();
        }

        assert_eq!(engine.delete("s", &[1, 1, 42]).unwrap(), 1);
        assert_eq!(engine.delete("s", &[1]).unwrap(), 0);
        assert_eq!(ids(&engine.range("s", 0, 10, None).unwrap()), vec![0, 2]);

        // Deleted ids are never handed out again.
        assert_eq!(engine.append("s", Vec::new()).unwrap(), 3);
    }

    #[test]
    fn test_delete_everything_keeps_id_counter() {
        let engine = StreamEngine::new();
        engine.append("s", Vec::new()).unwrap();
        engine.append("s", Vec::new()).unwrap();

        assert_eq!(engine.delete("s", &[0, 1]).unwrap(), 2);
        assert!(engine.is_empty("s").unwrap());
        assert_eq!(engine.last_id("s").unwrap(), Some(1));
        assert_eq!(engine.append("s", Vec::new()).unwrap(), 2);
    }

    #[test]
    fn test_unknown_streams_behave_as_empty_and_are_created() {
        let engine = StreamEngine::new();

        assert_eq!(engine.length("l").unwrap(), 0);
        assert!(engine.range("r", MIN_STREAM_ID, MAX_STREAM_ID, None).unwrap().is_empty());
        assert_eq!(engine.delete("d", &[0]).unwrap(), 0);
        let result = engine.read(&["x"], &[0], &ReadOptions::new()).unwrap();
        assert!(result["x"].is_empty());

        for name in ["l", "r", "d", "x"] {
            assert!(engine.contains_stream(name).unwrap(), "{name} should exist");
        }
        assert_eq!(engine.stream_count().unwrap(), 4);
    }

    #[test]
    fn test_inspection_does_not_create() {
        let engine = StreamEngine::new();

        assert_eq!(engine.last_id("ghost").unwrap(), None);
        assert!(!engine.contains_stream("ghost").unwrap());
        assert_eq!(engine.stream_count().unwrap(), 0);
    }

    #[test]
    fn test_empty_stream_name_is_valid() {
        let engine = StreamEngine::new();

        assert_eq!(engine.append("", fields_from_pairs([("a", "b")])).unwrap(), 0);
        assert_eq!(engine.length("").unwrap(), 1);
        assert_eq!(engine.length(" ").unwrap(), 0);
    }

    #[test]
    fn test_returned_entries_survive_delete() {
        let engine = StreamEngine::new();
        let id = engine
            .append("s", fields_from_pairs([("keep", "me")]))
            .unwrap();

        let snapshot = engine.range("s", id, id, None).unwrap();
        engine.delete("s", &[id]).unwrap();

        assert_eq!(snapshot[0].get("keep"), Some("me"));
        assert!(engine.range("s", id, id, None).unwrap().is_empty());
    }

    #[test]
    fn test_engines_are_independent() {
        let first = StreamEngine::new();
        let second = StreamEngine::default();

        first.append("s", Vec::new()).unwrap();
        first.append("s", Vec::new()).unwrap();

        assert_eq!(second.append("s", Vec::new()).unwrap(), 0);
        assert_eq!(first.length("s").unwrap(), 2);
    }
}

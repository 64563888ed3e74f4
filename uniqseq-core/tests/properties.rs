use proptest::prelude::*;
use uniqseq_core::{build_index, filter_unique, SequenceIndex};
use uniqseq_types::ExtractorConfig;

fn config(length: usize) -> ExtractorConfig {
    ExtractorConfig::with_length(length).expect("valid length")
}

/// Mostly short letter words over a small alphabet, so sequences collide,
/// with some mixed-case and some ineligible lines thrown in.
fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => "[a-f]{0,9}",
        2 => "[a-fA-F]{1,8}",
        1 => "[a-f0-9' -]{1,8}",
        1 => "[ \t]{0,3}[a-f]{2,7}[ \t]{0,3}",
    ]
}

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word(), 0..40)
}

proptest! {
    #[test]
    fn keys_have_length_l(words in words(), length in 1usize..6) {
        let index = build_index(&words, config(length));
        for unique in filter_unique(&index).iter() {
            prop_assert_eq!(unique.sequence.len(), length);
            prop_assert!(unique.sequence.bytes().all(|b| b.is_ascii_lowercase()));
        }
    }

    #[test]
    fn word_contains_its_sequence(words in words(), length in 1usize..6) {
        let index = build_index(&words, config(length));
        for unique in filter_unique(&index).iter() {
            prop_assert!(words.iter().any(|w| w.trim() == unique.word));
            prop_assert!(unique.word.to_ascii_lowercase().contains(unique.sequence));
        }
    }

    #[test]
    fn filtering_is_idempotent(words in words(), length in 1usize..6) {
        let first = build_index(&words, config(length));
        let second = build_index(&words, config(length));
        prop_assert_eq!(filter_unique(&first), filter_unique(&second));
        prop_assert_eq!(filter_unique(&first), filter_unique(&first));
    }

    #[test]
    fn output_is_strictly_ascending(words in words(), length in 1usize..6) {
        let index = build_index(&words, config(length));
        let emission = filter_unique(&index).emit();
        prop_assert_eq!(emission.sequences.len(), emission.words.len());
        for pair in emission.sequences.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn shared_sequences_are_excluded(words in words(), length in 1usize..6) {
        let index = build_index(&words, config(length));
        let unique = filter_unique(&index);
        for entry in unique.iter() {
            let producers: std::collections::HashSet<&str> = words
                .iter()
                .map(|w| w.trim())
                .filter(|w| w.bytes().all(|b| b.is_ascii_alphabetic()))
                .filter(|w| w.to_ascii_lowercase().contains(entry.sequence))
                .collect();
            prop_assert_eq!(producers.len(), 1);
        }
    }

    #[test]
    fn ineligible_words_never_appear(words in words(), length in 1usize..6) {
        let index = build_index(&words, config(length));
        for unique in filter_unique(&index).iter() {
            prop_assert!(unique.word.bytes().all(|b| b.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn short_words_contribute_nothing(words in prop::collection::vec("[a-z]{0,3}", 0..30)) {
        let index = build_index(&words, config(4));
        prop_assert!(index.is_empty());
        prop_assert!(filter_unique(&index).is_empty());
    }

    #[test]
    fn order_does_not_change_membership(words in words(), length in 1usize..5) {
        let forward = build_index(&words, config(length));
        let backward = build_index(words.iter().rev(), config(length));
        let a: Vec<_> = filter_unique(&forward).iter().map(|u| u.sequence).collect();
        let b: Vec<_> = filter_unique(&backward).iter().map(|u| u.sequence).collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn merged_partitions_match_single_pass(
        words in words(),
        split in 0usize..40,
        length in 1usize..5
    ) {
        let split = split.min(words.len());
        let whole = build_index(&words, config(length));

        let mut left = build_index(&words[..split], config(length));
        let right = build_index(&words[split..], config(length));
        left.merge(right).expect("same length");

        prop_assert_eq!(filter_unique(&left), filter_unique(&whole));
    }

    #[test]
    fn streaming_matches_iterator(words in words(), length in 1usize..5) {
        let joined = words.join("\n");
        let mut streamed = SequenceIndex::new(config(length));
        streamed
            .ingest_reader(joined.as_bytes(), "memory")
            .expect("in-memory read");
        let mut buffered = SequenceIndex::new(config(length));
        buffered.ingest_bytes(joined.as_bytes());
        let direct = build_index(&words, config(length));

        prop_assert_eq!(filter_unique(&streamed), filter_unique(&direct));
        prop_assert_eq!(filter_unique(&buffered), filter_unique(&direct));
    }
}

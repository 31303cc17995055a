//! Chunking property tests.

use modiff_core::chunk::{chunk_text, DEFAULT_CHUNK_LIMIT};
use proptest::prelude::*;
use std::num::NonZeroUsize;

#[test]
fn test_report_of_5000_chars_splits_1900_1900_1200() {
    let text: String = "abcdefghij".repeat(500);
    let limit = NonZeroUsize::new(DEFAULT_CHUNK_LIMIT).unwrap();

    let chunks = chunk_text(&text, limit);

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].chars().count(), 1900);
    assert_eq!(chunks[1].chars().count(), 1900);
    assert_eq!(chunks[2].chars().count(), 1200);
    assert_eq!(chunks.concat(), text);
}

proptest! {
    #[test]
    fn prop_chunk_count_sizes_and_concatenation(
        text in "\\PC{0,300}",
        limit in 1usize..64,
    ) {
        let chunks = chunk_text(&text, NonZeroUsize::new(limit).unwrap());
        let len = text.chars().count();

        prop_assert_eq!(chunks.len(), len.div_ceil(limit));
        for chunk in &chunks {
            let n = chunk.chars().count();
            prop_assert!(n >= 1 && n <= limit);
        }
        prop_assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn prop_all_but_last_chunk_are_full(text in "[a-zé→🎉 ]{1,200}", limit in 1usize..32) {
        let chunks = chunk_text(&text, NonZeroUsize::new(limit).unwrap());
        if let Some((_, full)) = chunks.split_last() {
            for chunk in full {
                prop_assert_eq!(chunk.chars().count(), limit);
            }
        }
    }
}

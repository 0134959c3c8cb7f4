//! Fuzz testing for tombstone compaction.
//!
//! This fuzz target runs the scan over arbitrary buffers and row lengths
//! to ensure it terminates without panicking, leaves no pattern behind,
//! and never touches a buffer with nothing to remove.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use ffbtab::tombstone::{compact_tombstones, tombstone_pattern};

#[derive(Debug, Arbitrary)]
struct CompactInput {
    row_bytes: u8,
    data: Vec<u8>,
}

fuzz_target!(|input: CompactInput| {
    if input.data.len() > 1 << 16 {
        return;
    }

    let row_bytes = input.row_bytes as usize;
    let mut data = input.data;
    let before = data.len();

    match compact_tombstones(&mut data, row_bytes) {
        Ok(removed) => {
            assert!(data.len() <= before);
            if removed == 0 {
                assert_eq!(data.len(), before);
            }
            let pattern = tombstone_pattern(row_bytes);
            assert!(
                data.windows(pattern.len()).all(|w| w != pattern),
                "no tombstone may survive compaction"
            );
        }
        Err(_) => assert!(row_bytes < 5, "only narrow rows are rejected"),
    }
});

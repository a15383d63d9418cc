#![no_main]

use libfuzzer_sys::fuzz_target;
use strmatch::{Algorithm, SuffixArray};

fuzz_target!(|data: &[u8]| {
    // First byte picks the pattern length, the rest is the text
    let Some((&len, text)) = data.split_first() else {
        return;
    };
    let sa = SuffixArray::new(text);
    let pattern = &text[..(len as usize % 8).min(text.len())];

    let from_index = sa.lookup_all(pattern);
    let from_scan = Algorithm::Kmp.find_all(pattern, text);
    assert_eq!(from_index, from_scan);
});

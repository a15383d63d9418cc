#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use strmatch::{Algorithm, FuzzyMode};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    pattern: &'a [u8],
    text: &'a [u8],
    max_errors: u8,
}

fuzz_target!(|input: Input<'_>| {
    // Every exact algorithm must report the same set, and none may panic
    let reference = Algorithm::Naive.find_all(input.pattern, input.text);
    for algo in Algorithm::ALL {
        let got = algo.find_all(input.pattern, input.text);
        if algo == Algorithm::ShiftOr && input.pattern.len() > 64 {
            assert!(got.is_err());
        } else {
            assert_eq!(got, reference, "{}", algo);
        }
    }

    let k = (input.max_errors % 4) as usize;
    let _ = FuzzyMode::Hamming.find_all(input.pattern, input.text, k);
    let _ = FuzzyMode::Edit.find_all(input.pattern, input.text, k);
});

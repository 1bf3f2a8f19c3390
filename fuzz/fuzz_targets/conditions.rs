#![no_main]

use libfuzzer_sys::fuzz_target;
use rand::{rngs::StdRng, SeedableRng};
use synthtools::snippets::{variables::distinct_set, Complexity, Condition};

fuzz_target!(|data: &[u8]| {
    // Use the fuzzer input as a seed for deterministic randomness
    if data.len() < 9 {
        return;
    }

    let seed = u64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    let count = 1 + data[8] as usize % 12;

    let mut rng = StdRng::seed_from_u64(seed);
    let variables = distinct_set(&mut rng, count).expect("count is below the name pool size");

    for complexity in Complexity::ALL {
        for expected in [true, false] {
            let condition = Condition::random(&mut rng, &variables, complexity, expected)
                .expect("variables are not empty");

            assert!(
                condition.holds(&variables).expect("condition only names known variables"),
                "`{condition}` does not evaluate to {expected}"
            );
        }
    }
});

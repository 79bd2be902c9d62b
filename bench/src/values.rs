//! The value lists we feed to the harness

/// The `DECLENUM_TEST_VALUES` for an enum with `n` values
///
/// `E0, E1, E2, ...`; or, with `explicit`,
/// `E0, E1 = 1, E2 = 2, ...`.
pub fn test_values(n: usize, explicit: bool) -> String {
    (0..n)
        .map(|i| {
            if explicit && i > 0 {
                format!("E{} = {}", i, i)
            } else {
                format!("E{}", i)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// The sizes to measure: `step, 2*step, ... samples*step`
///
/// Stops early rather than overflow.
pub fn sizes(samples: usize, step: usize) -> impl Iterator<Item = usize> {
    (1..=samples).map_while(move |k| k.checked_mul(step))
}

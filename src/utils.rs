use itertools::Itertools;

/// Implements `std::fmt::Display` for a type using a format string.
macro_rules! impl_display {
    ( for $typename:ty, $( $fmt_arg:expr ),+ $(,)? ) => {
        impl std::fmt::Display for $typename {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, $( $fmt_arg ),+)
            }
        }
    };
}

/// Returns a human-friendly list of things, joined at the end by the given
/// conjuction.
pub fn join_with_conjunction(conjunction: &str, items: &[impl std::fmt::Display]) -> String {
    match items {
        [] => "(none)".to_owned(),
        [a] => format!("{}", a),
        [a, b] => format!("{} {} {}", a, conjunction, b),
        [all_but_last @ .., z] => {
            let mut ret = all_but_last.iter().map(|x| format!("{}, ", x)).join("");
            ret.push_str(conjunction);
            ret.push_str(&format!(" {}", z));
            ret
        }
    }
}

#[test]
fn test_join_with_conjunction() {
    let strs = &["X", "Y", "Z"];
    assert_eq!(join_with_conjunction("or", &strs[..0]), "(none)");
    assert_eq!(join_with_conjunction("or", &strs[..1]), "X");
    assert_eq!(join_with_conjunction("or", &strs[..2]), "X or Y");
    // Oxford comma!
    assert_eq!(join_with_conjunction("or", &strs[..3]), "X, Y, or Z");
}

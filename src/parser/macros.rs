/// Parses the first matching syntax rule using `try_parse()` or returns an
/// error if none match. Without an `else` clause, the error lists all of them.
macro_rules! parse_one_of {
    ( $p:expr, [ $( $rule:expr ),+ $(,)? ] else $expected:expr $(,)? ) => {
        None
            $( .or_else(|| $p.try_parse(&$rule)) )+
            .unwrap_or_else(|| $p.expected($expected))
    };
    ( $p:expr, [ $( $rule:expr ),+ $(,)? ] $(,)? ) => {
        parse_one_of!(
            $p,
            [ $( $rule ),+ ]
            else crate::utils::join_with_conjunction("or", &[ $( $rule.to_string() ),+ ])
        )
    };
}

use proptest::prelude::*;

use super::{assert_parse_error, parse_ok, ErrorKind, ErrorMsg, RuleSyntax};
use crate::ast::{RULE_A_NUMBER, RULE_B_NUMBER};
use crate::resolve_rule_number;

/// Returns the `U` rule text for a rule number.
fn rule_u_text(number: u8) -> String {
    let mut ret = "U".to_owned();
    for i in 0..8 {
        ret.push_str(if number >> i & 1 != 0 { " 1" } else { " 0" });
    }
    ret
}

#[test]
fn test_resolve_shorthands() {
    assert_eq!(122, RULE_A_NUMBER);
    assert_eq!(86, RULE_B_NUMBER);
    assert_eq!(122, resolve_rule_number(&RuleSyntax::A));
    assert_eq!(86, resolve_rule_number(&RuleSyntax::B));
    assert_eq!(122, parse_ok("A 3 1 init_start init_end").rule.number());
    assert_eq!(86, parse_ok("B 3 1 init_start init_end").rule.number());
}

#[test]
fn test_resolve_u_bit_order() {
    // The first bit is the least significant.
    let mut bits = [false; 8];
    bits[0] = true;
    assert_eq!(1, resolve_rule_number(&RuleSyntax::U { bits }));
    let mut bits = [false; 8];
    bits[7] = true;
    assert_eq!(128, resolve_rule_number(&RuleSyntax::U { bits }));
    assert_eq!(
        255,
        resolve_rule_number(&RuleSyntax::U { bits: [true; 8] }),
    );
}

#[test]
fn test_every_rule_number() {
    for n in 0..=255_u8 {
        let r = parse_ok(&format!("R {} 3 1 init_start 2 init_end", n));
        assert_eq!(n, r.rule.number());

        // `U` and `R` agree.
        let u = parse_ok(&format!("{} 3 1 init_start 2 init_end", rule_u_text(n)));
        assert_eq!(n, u.rule.number());
        assert_eq!(r.size, u.size);
        assert_eq!(r.init, u.init);
    }
}

#[test]
fn test_rule_number_range() {
    for n in &[256, 300, 999] {
        assert_parse_error(
            &format!("R {} 3 1 init_start init_end", n),
            ErrorKind::OutOfRange,
            2,
            ErrorMsg::RuleNumberOutOfRange(*n),
        );
    }
    // A byte has at most three digits.
    assert_parse_error(
        "R 1000 3 1 init_start init_end",
        ErrorKind::Syntax,
        2,
        ErrorMsg::Expected("byte: integer from 0 to 255".into()),
    );
    assert_parse_error(
        "R -1 3 1 init_start init_end",
        ErrorKind::Syntax,
        2,
        ErrorMsg::Expected("byte: integer from 0 to 255".into()),
    );
}

proptest! {
    #[test]
    fn proptest_resolve_u(bits in prop::array::uniform8(any::<bool>())) {
        let expected: u32 = bits
            .iter()
            .enumerate()
            .map(|(i, &bit)| (bit as u32) << i)
            .sum();
        prop_assert_eq!(expected, resolve_rule_number(&RuleSyntax::U { bits }) as u32);
    }

    #[test]
    fn proptest_resolve_r(number in any::<u8>()) {
        prop_assert_eq!(number, resolve_rule_number(&RuleSyntax::R { number }));
    }
}

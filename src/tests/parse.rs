use super::{parse_ok, Init, RuleSyntax, Size};
use crate::parse;

#[test]
fn test_parse_rule_a() {
    let input = parse_ok("A 11 10 init_start 6 init_end");
    assert_eq!(122, input.rule.number());
    assert_eq!(RuleSyntax::A, input.rule.syntax());
    assert_eq!(
        Size {
            width: 11,
            generations: 10,
        },
        input.size,
    );
    assert_eq!(vec![6], input.init.cells);
}

#[test]
fn test_parse_rule_b() {
    let input = parse_ok("B 61 20 init_start 20 40 init_end");
    assert_eq!(86, input.rule.number());
    assert_eq!(61, input.size.width);
    assert_eq!(20, input.size.generations);
    assert_eq!(vec![20, 40], input.init.cells);
}

#[test]
fn test_parse_rule_u() {
    let input = parse_ok("U 0 1 1 1 1 0 0 0 81 64 init_start 40 init_end");
    assert_eq!(30, input.rule.number());
    assert_eq!(
        RuleSyntax::U {
            bits: [false, true, true, true, true, false, false, false],
        },
        input.rule.syntax(),
    );
    assert_eq!(81, input.size.width);
    assert_eq!(64, input.size.generations);
    assert_eq!(vec![40], input.init.cells);

    // Words work too, and can be mixed with digits.
    let input = parse_ok("U false true 1 true 1 0 false 0 81 64 init_start 40 init_end");
    assert_eq!(30, input.rule.number());
}

#[test]
fn test_parse_rule_r() {
    let input = parse_ok("R 30 81 64 init_start 30  60 init_end");
    assert_eq!(30, input.rule.number());
    assert_eq!(RuleSyntax::R { number: 30 }, input.rule.syntax());
    assert_eq!(81, input.size.width);
    assert_eq!(64, input.size.generations);
    assert_eq!(vec![30, 60], input.init.cells);
}

#[test]
fn test_parse_whitespace() {
    let expected = parse_ok("A 11 10 init_start 6 init_end");
    for src in &[
        "A\t11\t10\tinit_start\t6\tinit_end",
        "A\n11 10\r\ninit_start\n6\ninit_end\n",
        "  \n A 11 10 init_start 6 init_end  \r\n",
        "A\r11\r10\rinit_start\r6\rinit_end",
    ] {
        assert_eq!(expected, parse_ok(src), "\n\nInput: {:?}\n", src);
    }
}

#[test]
fn test_parse_init_list() {
    assert_eq!(Init::default(), parse_ok("A 5 3 init_start init_end").init);
    // Order and duplicates are preserved.
    assert_eq!(
        vec![5, 1, 3, 1],
        parse_ok("A 5 3 init_start 5 1 3 1 init_end").init.cells,
    );
    // Leading zeros are fine.
    assert_eq!(vec![4], parse_ok("A 05 3 init_start 004 init_end").init.cells);
}

#[test]
fn test_parse_zero_generations() {
    let input = parse_ok("R 0 1 0 init_start init_end");
    assert_eq!(0, input.rule.number());
    assert_eq!(1, input.size.width);
    assert_eq!(0, input.size.generations);
}

#[test]
fn test_display_round_trip() {
    for src in &[
        "A 11 10 init_start 6 init_end",
        "B 61 20 init_start 20 40 init_end",
        "U 0 1 1 1 1 0 0 0 81 64 init_start 40 init_end",
        "R 255 3 1 init_start init_end",
    ] {
        let input = parse_ok(src);
        assert_eq!(*src, input.to_string());
        assert_eq!(Ok(input.clone()), parse(&input.to_string()));
    }
}

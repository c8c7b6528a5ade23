use ferrocalc::evaluate;
use proptest::prelude::*;

proptest! {
    #[test]
    fn literals_evaluate_to_their_float_value(literal in r"[0-9]{1,12}(\.[0-9]{0,8})?|\.[0-9]{1,8}") {
        let expected: f64 = literal.parse().unwrap();
        prop_assert_eq!(evaluate(&literal).unwrap(), expected);
    }

    #[test]
    fn evaluation_is_idempotent(a in 0u32..1000, b in 1u32..1000, c in 0u32..20) {
        let source = format!("({a} - {b}) * {c} / {b} % 7 + -{c}");
        let first = evaluate(&source).unwrap();
        for _ in 0..3 {
            prop_assert_eq!(evaluate(&source).unwrap().to_bits(), first.to_bits());
        }
    }

    #[test]
    fn whitespace_does_not_change_the_result(a in 0u32..1000,
                                             b in 1u32..1000,
                                             gap in "[ \t]{0,3}") {
        let tight = format!("{a}+{b}*{a}^2/{b}");
        let spaced = format!("{gap}{a}{gap}+{gap}{b}{gap}*{gap}{a}{gap}^{gap}2{gap}/{gap}{b}{gap}");
        prop_assert_eq!(evaluate(&tight).unwrap(), evaluate(&spaced).unwrap());
    }

    #[test]
    fn subtraction_chains_group_left(a in 0u32..1000, b in 0u32..1000, c in 0u32..1000) {
        let expected = (f64::from(a) - f64::from(b)) - f64::from(c);
        prop_assert_eq!(evaluate(&format!("{a}-{b}-{c}")).unwrap(), expected);
    }

    #[test]
    fn malformed_text_never_panics(source in r"[0-9 .+\-*/%^()a]{0,24}") {
        let _ = evaluate(&source);
    }
}

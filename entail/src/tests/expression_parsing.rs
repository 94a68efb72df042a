use crate::parser::{parse, parse_canonical};
use crate::{Expression, LogicError, ResourceLimits};

fn canonical(text: &str) -> String {
    parse(text).unwrap().canonical().to_string()
}

fn read_back(text: &str) -> Expression {
    parse_canonical(text, &ResourceLimits::default()).unwrap()
}

#[test]
fn test_canonical_rendering() {
    insta::assert_snapshot!(canonical("p"), @"p");
    insta::assert_snapshot!(canonical("(not p)"), @"(not p)");
    insta::assert_snapshot!(canonical("(if p q)"), @"(p impl q)");
    insta::assert_snapshot!(canonical("(iff p q)"), @"(p iff q)");
    insta::assert_snapshot!(canonical("(and a b c)"), @"(a and b and c)");
    insta::assert_snapshot!(canonical("(or a b)"), @"(a or b)");
    insta::assert_snapshot!(canonical("(xor a b c)"), @"(a xor b xor c)");
}

#[test]
fn test_canonical_rendering_nested() {
    insta::assert_snapshot!(
        canonical("(if (and a b) (not (or c d)))"),
        @"((a and b) impl (not (c or d)))"
    );
}

#[test]
fn test_canonical_single_operand() {
    assert_eq!(canonical("(or a)"), "(a)");
}

#[test]
fn test_prefix_display_reparses() {
    let text = "(IF (and a b)   (not (Or c d)))";
    let expr = parse(text).unwrap();
    assert_eq!(expr.to_string(), "(if (and a b) (not (or c d)))");
    assert_eq!(parse(&expr.to_string()).unwrap(), expr);
}

#[test]
fn test_canonical_round_trip() {
    let samples = [
        "p",
        "(not p)",
        "(if p q)",
        "(iff (not p) q)",
        "(and a b c)",
        "(or (xor a b) (and c (not d)) e)",
        "(if (iff a b) (if c (or d e)))",
    ];
    for sample in samples {
        let expr = parse(sample).unwrap();
        let rendered = expr.canonical().to_string();
        assert_eq!(read_back(&rendered), expr, "round trip of {}", sample);
    }
}

#[test]
fn test_canonical_single_operand_reads_back_as_conjunction() {
    assert_eq!(read_back("(a)"), Expression::and(vec![Expression::atom("a")]));
}

#[test]
fn test_single_operand_or_and_xor_come_back_as_and() {
    for text in ["(or a)", "(xor a)"] {
        let expr = parse(text).unwrap();
        let rendered = expr.canonical().to_string();
        assert_eq!(rendered, "(a)");

        let reread = read_back(&rendered);
        assert_ne!(reread, expr, "{} is not expected to round trip", text);
        assert_eq!(reread, Expression::and(vec![Expression::atom("a")]));
    }
}

#[test]
fn test_canonical_rejects_chained_binary_connectives() {
    for text in ["(a impl b impl c)", "(a iff b iff c)"] {
        match parse_canonical(text, &ResourceLimits::default()) {
            Err(LogicError::Parse(details)) => {
                assert!(
                    details.message.contains("takes exactly 2 operands"),
                    "unexpected message for {}: {}",
                    text,
                    details.message
                );
                let word = &details.source_text[details.span.start..details.span.end];
                assert!(word == "impl" || word == "iff");
            }
            other => panic!("Expected parse error for {}, got {:?}", text, other),
        }
    }

    assert_eq!(
        read_back("((a impl b) impl c)"),
        Expression::implies(
            Expression::implies(Expression::atom("a"), Expression::atom("b")),
            Expression::atom("c")
        )
    );
}

#[test]
fn test_canonical_accepts_any_case() {
    assert_eq!(
        read_back("(p IMPL (NOT q))"),
        Expression::implies(Expression::atom("p"), Expression::not(Expression::atom("q")))
    );
}

#[test]
fn test_canonical_rejects_mixed_connectives() {
    match parse_canonical("(a and b or c)", &ResourceLimits::default()) {
        Err(LogicError::Parse(details)) => {
            assert!(details.message.contains("Mixed connectives"));
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_canonical_rejects_trailing_input() {
    match parse_canonical("(a and b) c", &ResourceLimits::default()) {
        Err(LogicError::Parse(details)) => {
            assert!(details.message.contains("trailing input"));
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_canonical_rejects_unknown_connective() {
    assert!(matches!(
        parse_canonical("(a nand b)", &ResourceLimits::default()),
        Err(LogicError::Parse(_))
    ));
}

#[test]
fn test_canonical_unterminated_group() {
    assert!(matches!(
        parse_canonical("(a and b", &ResourceLimits::default()),
        Err(LogicError::Parse(_))
    ));
}

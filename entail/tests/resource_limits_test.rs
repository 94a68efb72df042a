use entail::{Engine, LogicError, ResourceLimits, Verdict};

#[test]
fn test_file_size_limit() {
    let limits = ResourceLimits {
        max_file_size_bytes: 100,
        ..ResourceLimits::default()
    };

    let mut engine = Engine::with_limits(limits);

    let large_source = "(or rain snow)\n".repeat(10);

    match engine.add_source(&large_source, "rules.txt") {
        Err(LogicError::ResourceLimitExceeded { limit_name, .. }) => {
            assert_eq!(limit_name, "max_file_size_bytes");
        }
        _ => panic!("Expected ResourceLimitExceeded error"),
    }
}

#[test]
fn test_file_size_just_under_limit() {
    let limits = ResourceLimits {
        max_file_size_bytes: 1000,
        ..ResourceLimits::default()
    };

    let mut engine = Engine::with_limits(limits);
    let result = engine.add_source("(if rain wet)\nrain\n", "rules.txt");
    assert!(result.is_ok(), "Small file should be accepted");
}

#[test]
fn test_expression_depth_limit() {
    let limits = ResourceLimits {
        max_expression_depth: 5,
        ..ResourceLimits::default()
    };
    let mut engine = Engine::with_limits(limits);

    let mut deep = String::from("p");
    for _ in 0..6 {
        deep = format!("(not {})", deep);
    }

    match engine.add_source(&deep, "rules.txt") {
        Err(LogicError::ResourceLimitExceeded {
            limit_name,
            limit_value,
            actual_value,
            ..
        }) => {
            assert_eq!(limit_name, "max_expression_depth");
            assert_eq!(limit_value, "5");
            assert_eq!(actual_value, "6");
        }
        other => panic!("Expected depth limit error, got: {:?}", other),
    }
}

#[test]
fn test_default_depth_accepts_deep_nesting() {
    let mut engine = Engine::new();

    let mut deep = String::from("p");
    for _ in 0..100 {
        deep = format!("(not {})", deep);
    }
    assert!(engine.add_source(&deep, "rules.txt").is_ok());
}

#[test]
fn test_free_symbol_limit() {
    let limits = ResourceLimits {
        max_free_symbols: Some(4),
        ..ResourceLimits::default()
    };
    let mut engine = Engine::with_limits(limits);
    engine
        .add_source("(or a b c)\n(xor d e)\nseeded\n", "rules.txt")
        .unwrap();

    match engine.check("seeded", "statement.txt") {
        Err(LogicError::ResourceLimitExceeded {
            limit_name,
            limit_value,
            actual_value,
            suggestion,
        }) => {
            assert_eq!(limit_name, "max_free_symbols");
            assert_eq!(limit_value, "4");
            assert_eq!(actual_value, "5");
            assert!(suggestion.contains("2^5"));
        }
        other => panic!("Expected free symbol limit error, got: {:?}", other),
    }
}

#[test]
fn test_free_symbols_are_unbounded_by_default() {
    let mut engine = Engine::new();
    let symbols: Vec<String> = (0..25).map(|i| format!("s{}", i)).collect();
    engine
        .add_source(&format!("(or {})\n", symbols.join(" ")), "rules.txt")
        .unwrap();

    let result = engine.check("s0", "statement.txt").unwrap();
    assert_eq!(result.verdict, Verdict::Undetermined);
    assert_eq!(result.free_symbols.len(), 25);
    assert_eq!(result.counts.assignments, 1 << 25);
    assert_eq!(result.counts.models, (1 << 25) - 1);
}

#[test]
fn test_default_limits() {
    let limits = ResourceLimits::default();
    assert_eq!(limits.max_file_size_bytes, 5 * 1024 * 1024);
    assert_eq!(limits.max_expression_depth, 100);
    assert_eq!(limits.max_free_symbols, None);
}

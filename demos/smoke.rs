//! Smoke test walking every operator end to end.

use thompson::{compile, CompileError, Nfa};

fn main() {
    println!("Running thompson smoke tests...\n");

    test_literal();
    test_concat();
    test_alternate();
    test_zero_or_one();
    test_zero_or_more();
    test_one_or_more();
    test_construction_errors();
    test_rendering();

    println!("\nAll smoke tests passed.");
}

fn check(nfa: &Nfa, input: &str, expected: bool) {
    assert_eq!(
        nfa.is_match(input),
        expected,
        "input {:?}: expected {}",
        input,
        expected
    );
}

fn test_literal() {
    println!("literal: a");
    let nfa = compile("a").unwrap();
    check(&nfa, "a", true);
    check(&nfa, "", false);
    check(&nfa, "b", false);
}

fn test_concat() {
    println!("concat: ab.");
    let nfa = compile("ab.").unwrap();
    check(&nfa, "ab", true);
    check(&nfa, "a", false);
    check(&nfa, "abc", false);
}

fn test_alternate() {
    println!("alternate: ab|");
    let nfa = compile("ab|").unwrap();
    check(&nfa, "a", true);
    check(&nfa, "b", true);
    check(&nfa, "ab", false);
}

fn test_zero_or_one() {
    println!("zero-or-one: a?b.");
    let nfa = compile("a?b.").unwrap();
    check(&nfa, "b", true);
    check(&nfa, "ab", true);
    check(&nfa, "aab", false);
}

fn test_zero_or_more() {
    println!("zero-or-more: a*");
    let nfa = compile("a*").unwrap();
    check(&nfa, "", true);
    check(&nfa, "aaaa", true);
    check(&nfa, "aab", false);
}

fn test_one_or_more() {
    println!("one-or-more: a+b.");
    let nfa = compile("a+b.").unwrap();
    check(&nfa, "ab", true);
    check(&nfa, "aaaaaab", true);
    check(&nfa, "b", false);
}

fn test_construction_errors() {
    println!("construction errors");
    assert_eq!(compile("").unwrap_err(), CompileError::EmptyExpression);
    assert_eq!(
        compile("ab").unwrap_err(),
        CompileError::MalformedExpression { fragments: 2 }
    );
    assert_eq!(
        compile("*").unwrap_err(),
        CompileError::StackUnderflow {
            operator: '*',
            offset: 0
        }
    );
}

fn test_rendering() {
    println!("rendering: a+b.");
    let nfa = compile("a+b.").unwrap();
    println!("{}", nfa);
}

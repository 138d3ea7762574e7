//! thompson: backtracking-free matching of postfix regular expressions.
//!
//! A postfix expression is compiled into a nondeterministic finite
//! automaton with one state per token (Thompson's construction), then
//! simulated with every live state advanced in parallel. Per-character work
//! is bounded by the state count, so patterns that wreck backtracking
//! engines match in linear time here.
//!
//! ```
//! // "ab.c|" is postfix for `ab|c`
//! let nfa = thompson::compile("ab.c|").unwrap();
//!
//! assert!(nfa.is_match("ab"));
//! assert!(nfa.is_match("c"));
//! assert!(!nfa.is_match("a"));
//! ```
//!
//! The automaton is immutable after compilation and can be shared freely;
//! each match call keeps its active-state sets to itself:
//!
//! ```
//! use std::sync::Arc;
//!
//! let nfa = Arc::new(thompson::compile("ab|+").unwrap());
//! let shared = Arc::clone(&nfa);
//! assert!(shared.is_match("abba"));
//! ```
//!
//! Supported operators: `.` concat, `|` alternate, `?`, `*`, `+`. Anything
//! else is a literal. Parsing conventional regex syntax into postfix is out
//! of scope, as are character classes, anchors, and capture groups.

mod automaton;
mod postfix;

pub use automaton::{Nfa, NfaBuffers, StateId};
pub use postfix::{compile, CompileError};

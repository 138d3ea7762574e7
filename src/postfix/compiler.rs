//! Postfix-to-NFA compilation.
//!
//! One composition rule per token kind, driven by an explicit stack of
//! [`Fragment`]s. A fragment is a partial automaton: an entry state plus
//! the dangling output slots still waiting for a target. Operators pop
//! fragments, wire dangling slots, and push the composed result; when the
//! token stream ends, exactly one fragment must survive, and its dangling
//! slots are wired to a freshly created terminal match state.
//!
//! Bookkeeping dangling outputs directly, instead of a separate epsilon
//! table, keeps the construction at one state per token.

use crate::automaton::{Nfa, State, StateArena, StateId};

/// Errors raised while compiling a postfix expression.
///
/// Compilation either fully succeeds or fails with one of these; no
/// partially wired automaton is ever returned. Matching itself never
/// errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The operand stack was empty after the full token stream.
    EmptyExpression,
    /// More than one fragment remained: operands without operators.
    MalformedExpression { fragments: usize },
    /// An operator appeared before its operands were on the stack.
    StackUnderflow { operator: char, offset: usize },
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::EmptyExpression => write!(f, "empty postfix expression"),
            CompileError::MalformedExpression { fragments } => {
                write!(
                    f,
                    "malformed postfix expression: {} fragments left unconsumed",
                    fragments
                )
            }
            CompileError::StackUnderflow { operator, offset } => {
                write!(
                    f,
                    "operator '{}' at offset {} has too few operands",
                    operator, offset
                )
            }
        }
    }
}

impl std::error::Error for CompileError {}

/// A dangling output slot: which state, which slot.
#[derive(Clone, Copy, Debug)]
struct OutputRef {
    state: StateId,
    slot: usize,
}

/// A partial automaton under construction.
struct Fragment {
    /// Entry state of the partial graph.
    entry: StateId,
    /// Output slots not yet wired to a target.
    dangling: Vec<OutputRef>,
}

impl Fragment {
    /// Fragment for a freshly allocated state with one dangling slot.
    fn single(entry: StateId, slot: usize) -> Self {
        Fragment {
            entry,
            dangling: vec![OutputRef { state: entry, slot }],
        }
    }

    /// Wire every dangling slot of this fragment to `target`.
    fn connect(&self, arena: &mut StateArena, target: StateId) {
        for out in &self.dangling {
            arena[out.state].output_mut(out.slot).set(target);
        }
    }
}

/// Compile a postfix expression into an [`Nfa`].
///
/// Operators: `.` concat, `|` alternate (both binary), `?` `*` `+` (unary
/// postfix quantifiers). Every other symbol is a literal matched exactly.
///
/// ```
/// let nfa = thompson::compile("ab.c|").unwrap();
/// assert!(nfa.is_match("ab"));
/// assert!(nfa.is_match("c"));
/// assert!(!nfa.is_match("abc"));
/// ```
pub fn compile(postfix: &str) -> Result<Nfa, CompileError> {
    // One state per token plus the terminal.
    let mut arena = StateArena::with_capacity(postfix.chars().count() + 1);
    let mut stack: Vec<Fragment> = Vec::new();

    for (offset, token) in postfix.chars().enumerate() {
        match token {
            '.' => {
                let f2 = pop(&mut stack, token, offset)?;
                let f1 = pop(&mut stack, token, offset)?;
                f1.connect(&mut arena, f2.entry);
                stack.push(Fragment {
                    entry: f1.entry,
                    dangling: f2.dangling,
                });
            }
            '|' => {
                let f2 = pop(&mut stack, token, offset)?;
                let f1 = pop(&mut stack, token, offset)?;
                let fork = arena.alloc(State::branch(Some(f1.entry), Some(f2.entry)));
                let mut dangling = f1.dangling;
                dangling.extend(f2.dangling);
                stack.push(Fragment {
                    entry: fork,
                    dangling,
                });
            }
            '?' => {
                let f = pop(&mut stack, token, offset)?;
                let skip = arena.alloc(State::branch(Some(f.entry), None));
                let mut dangling = f.dangling;
                dangling.push(OutputRef {
                    state: skip,
                    slot: 1,
                });
                stack.push(Fragment {
                    entry: skip,
                    dangling,
                });
            }
            '*' => {
                let f = pop(&mut stack, token, offset)?;
                let repeat = arena.alloc(State::branch(Some(f.entry), None));
                // Loop the body back into the control state; only the
                // control state's second slot stays dangling.
                f.connect(&mut arena, repeat);
                stack.push(Fragment::single(repeat, 1));
            }
            '+' => {
                let f = pop(&mut stack, token, offset)?;
                let repeat = arena.alloc(State::branch(Some(f.entry), None));
                f.connect(&mut arena, repeat);
                // Entering through the body forces at least one match.
                stack.push(Fragment {
                    entry: f.entry,
                    dangling: vec![OutputRef {
                        state: repeat,
                        slot: 1,
                    }],
                });
            }
            literal => {
                let state = arena.alloc(State::literal(literal));
                stack.push(Fragment::single(state, 0));
            }
        }
    }

    if stack.len() > 1 {
        return Err(CompileError::MalformedExpression {
            fragments: stack.len(),
        });
    }
    let survivor = stack.pop().ok_or(CompileError::EmptyExpression)?;

    let terminal = arena.alloc(State::terminal());
    survivor.connect(&mut arena, terminal);
    Ok(Nfa::new(arena, survivor.entry, terminal))
}

fn pop(stack: &mut Vec<Fragment>, operator: char, offset: usize) -> Result<Fragment, CompileError> {
    stack
        .pop()
        .ok_or(CompileError::StackUnderflow { operator, offset })
}

//! The compiled automaton and its simulation.
//!
//! Matching advances every live state in parallel, one input character at a
//! time. Per character the work is bounded by the number of states in the
//! automaton, so there is no backtracking and no exponential blowup on
//! patterns that stack quantifiers.
//!
//! The automaton is read-only after construction; the active-state sets are
//! local to each match call, so one `Nfa` can serve any number of
//! concurrent matchers.

use super::arena::{StateArena, StateId};
use super::sparse_set::SparseSet;

/// A compiled, immutable automaton rooted at a single entry state.
///
/// Built by [`compile`](crate::compile) from a postfix expression. Matching
/// requires the whole input to be consumed, not merely a prefix.
///
/// ```
/// let nfa = thompson::compile("ab|c.").unwrap();
/// assert!(nfa.is_match("ac"));
/// assert!(nfa.is_match("bc"));
/// assert!(!nfa.is_match("a"));
/// ```
#[derive(Clone, Debug)]
pub struct Nfa {
    arena: StateArena,
    start: StateId,
    terminal: StateId,
}

/// Scratch buffers for matching, reusable across calls and automatons.
///
/// [`Nfa::is_match`] allocates a fresh set per call; when matching many
/// inputs against the same automaton, allocate one of these and use
/// [`Nfa::is_match_with`] to keep the hot path allocation-free.
#[derive(Clone, Debug)]
pub struct NfaBuffers {
    /// Currently active states.
    current: SparseSet,
    /// Active states after the current character.
    next: SparseSet,
    /// Seen markers for epsilon closure.
    closure_seen: SparseSet,
    /// Work stack for epsilon closure.
    closure_stack: Vec<StateId>,
    /// Closure output: reachable trigger-bearing or terminal states.
    closure: Vec<StateId>,
}

impl Default for NfaBuffers {
    fn default() -> Self {
        Self::new()
    }
}

impl NfaBuffers {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(state_capacity: usize) -> Self {
        NfaBuffers {
            current: SparseSet::new(state_capacity),
            next: SparseSet::new(state_capacity),
            closure_seen: SparseSet::new(state_capacity),
            closure_stack: Vec::with_capacity(16),
            closure: Vec::with_capacity(16),
        }
    }

    /// Clear everything and make sure the sets can hold `state_count` ids.
    fn reset(&mut self, state_count: usize) {
        if self.current.capacity() < state_count {
            self.current.resize(state_count);
            self.next.resize(state_count);
            self.closure_seen.resize(state_count);
        } else {
            self.current.clear();
            self.next.clear();
            self.closure_seen.clear();
        }
        self.closure_stack.clear();
        self.closure.clear();
    }
}

impl Nfa {
    pub(crate) fn new(arena: StateArena, start: StateId, terminal: StateId) -> Self {
        Nfa {
            arena,
            start,
            terminal,
        }
    }

    /// Compile a postfix expression. Alias for [`compile`](crate::compile).
    pub fn from_postfix(postfix: &str) -> Result<Self, crate::CompileError> {
        crate::postfix::compile(postfix)
    }

    /// Number of states in the automaton, terminal included.
    pub fn state_count(&self) -> usize {
        self.arena.len()
    }

    pub(crate) fn arena(&self) -> &StateArena {
        &self.arena
    }

    pub(crate) fn start(&self) -> StateId {
        self.start
    }

    /// Decide whether the automaton accepts `input` in its entirety.
    ///
    /// Never fails: a symbol outside the automaton's alphabet satisfies no
    /// trigger and simply leads to rejection.
    pub fn is_match(&self, input: &str) -> bool {
        let mut bufs = NfaBuffers::with_capacity(self.arena.len());
        self.is_match_with(input, &mut bufs)
    }

    /// [`is_match`](Self::is_match) with caller-owned scratch buffers.
    pub fn is_match_with(&self, input: &str, bufs: &mut NfaBuffers) -> bool {
        bufs.reset(self.arena.len());

        let NfaBuffers {
            current,
            next,
            closure_seen,
            closure_stack,
            closure,
        } = bufs;

        current.insert(self.start);

        for ch in input.chars() {
            if current.is_empty() {
                // No live state can ever come back; the input is longer
                // than any accepted string along every path.
                return false;
            }

            next.clear();
            for id in current.iter() {
                self.epsilon_closure(id, closure_seen, closure_stack, closure);
                for &reached in closure.iter() {
                    let state = &self.arena[reached];
                    if state.trigger() != Some(ch) {
                        continue;
                    }
                    // A triggered state with no outputs accepts on its
                    // symbol, whatever input remains.
                    if state.outputs().is_empty() {
                        return true;
                    }
                    for out in state.outputs() {
                        if let Some(target) = out.target() {
                            next.insert(target);
                        }
                    }
                }
            }
            std::mem::swap(current, next);
        }

        // Input exhausted; accept iff the terminal state is reachable over
        // epsilon edges alone from some surviving state.
        for id in current.iter() {
            self.epsilon_closure(id, closure_seen, closure_stack, closure);
            if closure.iter().any(|&reached| reached == self.terminal) {
                return true;
            }
        }
        false
    }

    /// Collect the epsilon closure of `id` into `closure`: every reachable
    /// state that bears a trigger or is the terminal, following control
    /// states without consuming input. A state that already has a trigger
    /// is its own singleton closure.
    fn epsilon_closure(
        &self,
        id: StateId,
        seen: &mut SparseSet,
        stack: &mut Vec<StateId>,
        closure: &mut Vec<StateId>,
    ) {
        seen.clear();
        stack.clear();
        closure.clear();

        seen.insert(id);
        stack.push(id);

        while let Some(current) = stack.pop() {
            let state = &self.arena[current];
            if state.trigger().is_some() || state.is_terminal() {
                closure.push(current);
                continue;
            }
            for out in state.outputs() {
                if let Some(target) = out.target() {
                    if seen.insert(target) {
                        stack.push(target);
                    }
                }
            }
        }
    }
}

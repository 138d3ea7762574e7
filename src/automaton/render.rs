//! Text-tree rendering of the automaton graph.
//!
//! Diagnostic only; matching never goes through here. The output is
//! deterministic, so it doubles as a golden-output target in tests.
//!
//! Format: nodes are numbered in traversal order starting at 1. A node with
//! a trigger renders the symbol in parentheses, a pure control node renders
//! empty parentheses, the terminal match state renders as `M`. A
//! single-output node continues inline with ` --> `; a two-output node
//! opens one `|--> ` line per branch, indented four spaces per branch
//! level. A node already rendered gets a `*` suffix and its children are
//! not re-expanded, which keeps the output finite on cyclic graphs.

use std::fmt;

use rustc_hash::FxHashMap;

use super::arena::StateId;
use super::nfa::Nfa;

const BRANCH_INDENT: usize = 4;

impl fmt::Display for Nfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Nfa {
    /// Render the graph as a deterministic text tree.
    pub fn render(&self) -> String {
        let mut renderer = Renderer {
            nfa: self,
            numbers: FxHashMap::default(),
            next_number: 0,
            out: String::new(),
        };
        renderer.walk(self.start(), 0);
        renderer.out
    }
}

/// Traversal state: assigned node numbers and the accumulated output.
struct Renderer<'a> {
    nfa: &'a Nfa,
    /// First-visit number per state. The terminal is tracked here too but
    /// renders as `M`, so it never consumes a number.
    numbers: FxHashMap<StateId, usize>,
    next_number: usize,
    out: String,
}

impl Renderer<'_> {
    fn walk(&mut self, id: StateId, indent: usize) {
        let nfa = self.nfa;
        let state = &nfa.arena()[id];
        let revisit = self.numbers.contains_key(&id);

        if !revisit && !state.is_terminal() {
            self.next_number += 1;
        }
        let number = *self.numbers.entry(id).or_insert(self.next_number);

        if state.is_terminal() {
            self.out.push('M');
        } else {
            match state.trigger() {
                Some(symbol) => {
                    self.out.push_str(&format!("{}({})", number, symbol));
                }
                None => {
                    self.out.push_str(&format!("{}()", number));
                }
            }
        }

        if revisit {
            self.out.push('*');
            return;
        }

        match state.outputs() {
            [] => {}
            [single] => {
                self.out.push_str(" --> ");
                self.walk_target(single.target(), indent);
            }
            outputs => {
                for out in outputs {
                    self.out.push('\n');
                    for _ in 0..indent + BRANCH_INDENT {
                        self.out.push(' ');
                    }
                    self.out.push_str("|--> ");
                    self.walk_target(out.target(), indent + BRANCH_INDENT);
                }
            }
        }
    }

    fn walk_target(&mut self, target: Option<StateId>, indent: usize) {
        match target {
            Some(id) => self.walk(id, indent),
            // Unreachable on a compiled automaton; kept total for the
            // renderer's own sake.
            None => self.out.push('?'),
        }
    }
}

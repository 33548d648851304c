//! Pruned and exhaustive search must agree everywhere
//!
//! Alpha-beta pruning is allowed to change the work done, never the answer.
//! These tests enumerate every position reachable from a set of small
//! starting configurations and compare both engines move for move.

use std::collections::HashSet;

use nim::{ModeKind, PileState, SearchEngine, SearchStrategy};

/// All positions reachable from `initial` by legal play, including itself.
fn reachable_states(initial: &PileState) -> Vec<PileState> {
    let mut seen = HashSet::new();
    let mut queue = vec![initial.clone()];
    seen.insert(initial.clone());

    while let Some(state) = queue.pop() {
        for mv in state.legal_moves() {
            let next = state.apply(mv).expect("enumerated moves are always legal");
            if seen.insert(next.clone()) {
                queue.push(next);
            }
        }
    }

    let mut states: Vec<PileState> = seen.into_iter().collect();
    states.sort_by(|a, b| a.sizes().cmp(b.sizes()));
    states
}

fn assert_engines_agree(kind: ModeKind, initial: PileState) {
    assert!(
        initial.total_objects() <= 8,
        "equivalence sweep stays tractable only for a handful of objects"
    );

    let mut exhaustive = SearchEngine::new(kind.build(), SearchStrategy::Exhaustive);
    let mut pruned = SearchEngine::new(kind.build(), SearchStrategy::AlphaBeta);

    for state in reachable_states(&initial) {
        for maximizing in [true, false] {
            let expected = exhaustive.best_move(&state, maximizing);
            let actual = pruned.best_move(&state, maximizing);
            assert_eq!(
                expected, actual,
                "engines disagree on {state} (maximizing: {maximizing}, mode: {kind})"
            );
        }
    }
}

#[test]
fn classic_two_piles() {
    assert_engines_agree(ModeKind::Classic, PileState::new(vec![3, 5]));
}

#[test]
fn classic_three_piles() {
    assert_engines_agree(ModeKind::Classic, PileState::new(vec![2, 3, 3]));
}

#[test]
fn classic_four_piles() {
    assert_engines_agree(ModeKind::Classic, PileState::new(vec![2, 2, 2, 2]));
}

#[test]
fn misere_two_piles() {
    assert_engines_agree(ModeKind::Misere, PileState::new(vec![4, 4]));
}

#[test]
fn misere_three_piles() {
    assert_engines_agree(ModeKind::Misere, PileState::new(vec![3, 2, 3]));
}

#[test]
fn misere_four_piles() {
    assert_engines_agree(ModeKind::Misere, PileState::new(vec![1, 2, 2, 3]));
}

#[test]
fn memoized_engine_answers_repeat_queries_without_new_work() {
    let mut engine = SearchEngine::new(ModeKind::Misere.build(), SearchStrategy::Exhaustive);
    let states = reachable_states(&PileState::new(vec![2, 3, 3]));

    for state in &states {
        engine.best_move(state, true);
    }
    let expanded = engine.nodes_expanded();

    for state in &states {
        engine.best_move(state, true);
    }
    assert_eq!(engine.nodes_expanded(), expanded);
}

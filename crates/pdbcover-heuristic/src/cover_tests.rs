//! Tests for the greedy cover solver.

use pdbcover_config::{DecrementMode, OrderPolicy};
use pdbcover_core::PdbCoverError;

use super::*;
use crate::test_utils::{build_set, seeded_rng, solver_for};

fn original() -> OrderingPolicy {
    OrderingPolicy::default()
}

fn random_both() -> OrderingPolicy {
    OrderingPolicy::new(OrderPolicy::Random, OrderPolicy::Random)
}

// ============================================================================
// Worked examples
// ============================================================================

#[test]
fn test_single_restriction_iterative() {
    let mut set = build_set(&[1, 2, 3], &[&[0, 1, 2]], original());
    let mut solver = solver_for(&set, DecrementMode::Iterative, original());
    let mut rng = seeded_rng(0);

    let value = solver.run_trial(&mut set, &[4], &[], &mut rng).unwrap();

    assert_eq!(solver.usage(), &[1, 1, 1]);
    assert_eq!(solver.bounds(), &[-2]);
    assert_eq!(value, 6);
}

#[test]
fn test_zero_bounds_choose_nothing() {
    let mut set = build_set(&[1, 2, 3], &[&[0, 1], &[1, 2]], original());
    for decrement in [DecrementMode::Iterative, DecrementMode::Before] {
        let mut solver = solver_for(&set, decrement, original());
        let value = solver
            .run_trial(&mut set, &[0, 0], &[], &mut seeded_rng(1))
            .unwrap();
        assert_eq!(value, 0);
        assert_eq!(solver.usage(), &[0, 0, 0]);
    }
}

#[test]
fn test_zero_cost_operators_fail_fast() {
    let mut set = build_set(&[0, 0], &[&[0, 1]], original());
    for decrement in [DecrementMode::Iterative, DecrementMode::Before] {
        let mut solver = solver_for(&set, decrement, original());
        let err = solver
            .run_trial(&mut set, &[5], &[], &mut seeded_rng(0))
            .unwrap_err();
        assert_eq!(
            err,
            PdbCoverError::UncoverableRestriction {
                restriction: 0,
                bound: 5
            }
        );
    }
}

#[test]
fn test_empty_restriction_with_positive_bound_fails_fast() {
    let mut set = build_set(&[1], &[&[0], &[]], original());
    let mut solver = solver_for(&set, DecrementMode::Iterative, original());
    let err = solver
        .run_trial(&mut set, &[1, 3], &[], &mut seeded_rng(0))
        .unwrap_err();
    assert_eq!(
        err,
        PdbCoverError::UncoverableRestriction {
            restriction: 1,
            bound: 3
        }
    );
}

#[test]
fn test_empty_restriction_with_zero_bound_is_fine() {
    let mut set = build_set(&[1], &[&[]], original());
    let mut solver = solver_for(&set, DecrementMode::Iterative, original());
    assert_eq!(solver.run_trial(&mut set, &[0], &[], &mut seeded_rng(0)), Ok(0));
}

#[test]
fn test_zero_cost_operator_is_skipped_over() {
    let mut set = build_set(&[0, 2], &[&[0, 1]], original());
    let mut solver = solver_for(&set, DecrementMode::Iterative, original());
    let value = solver.run_trial(&mut set, &[3], &[], &mut seeded_rng(0)).unwrap();

    // op0, op1, op0, op1: the free operator is counted but covers nothing
    assert_eq!(solver.usage(), &[2, 2]);
    assert_eq!(value, 4);
}

// ============================================================================
// Decrement modes
// ============================================================================

#[test]
fn test_iterative_propagates_to_other_restrictions() {
    let mut set = build_set(&[1, 1, 1], &[&[0, 1], &[1, 2]], original());
    let mut solver = solver_for(&set, DecrementMode::Iterative, original());
    let value = solver
        .run_trial(&mut set, &[2, 1], &[], &mut seeded_rng(0))
        .unwrap();

    // op1 covers the second restriction while covering the first
    assert_eq!(solver.usage(), &[1, 1, 0]);
    assert_eq!(solver.bounds(), &[0, 0]);
    assert_eq!(value, 2);
}

#[test]
fn test_before_reconciles_earlier_choices() {
    let mut set = build_set(&[2, 3], &[&[0], &[0, 1]], original());
    let mut solver = solver_for(&set, DecrementMode::Before, original());
    let value = solver
        .run_trial(&mut set, &[4, 5], &[], &mut seeded_rng(0))
        .unwrap();

    // first restriction takes op0 twice; the second starts from 5 - 2*2 = 1
    assert_eq!(solver.usage(), &[3, 0]);
    assert_eq!(solver.bounds(), &[0, -1]);
    assert_eq!(value, 6);
}

#[test]
fn test_before_leaves_unvisited_bounds_alone() {
    let mut set = build_set(&[1, 1, 1], &[&[0, 1], &[1, 2]], original());
    let mut solver = solver_for(&set, DecrementMode::Before, original());
    let value = solver
        .run_trial(&mut set, &[2, 1], &[], &mut seeded_rng(0))
        .unwrap();

    // the second restriction is reconciled when visited, not while scanning
    assert_eq!(solver.usage(), &[1, 1, 0]);
    assert_eq!(solver.bounds(), &[0, 0]);
    assert_eq!(value, 2);
}

#[test]
fn test_modes_agree_without_advisory_on_disjoint_restrictions() {
    let costs = [3, 1, 2, 5];
    let lists: [&[usize]; 2] = [&[0, 1], &[2, 3]];
    let mut iterative_set = build_set(&costs, &lists, original());
    let mut before_set = iterative_set.clone();
    let mut iterative = solver_for(&iterative_set, DecrementMode::Iterative, original());
    let mut before = solver_for(&before_set, DecrementMode::Before, original());

    let a = iterative
        .run_trial(&mut iterative_set, &[7, 9], &[], &mut seeded_rng(3))
        .unwrap();
    let b = before
        .run_trial(&mut before_set, &[7, 9], &[], &mut seeded_rng(3))
        .unwrap();

    assert_eq!(a, b);
    assert_eq!(iterative.usage(), before.usage());
}

// ============================================================================
// Advisory seeding
// ============================================================================

#[test]
fn test_advisory_operators_seed_the_cover() {
    let mut set = build_set(&[1, 2, 3], &[&[0, 1, 2]], original());
    let mut solver = solver_for(&set, DecrementMode::Iterative, original());
    let value = solver
        .run_trial(&mut set, &[4], &[2], &mut seeded_rng(0))
        .unwrap();

    assert_eq!(solver.usage(), &[1, 0, 1]);
    assert_eq!(value, 4);
}

#[test]
fn test_advisory_seed_lowers_every_containing_restriction() {
    let mut set = build_set(&[2, 1], &[&[0], &[0, 1], &[1]], original());
    let mut solver = solver_for(&set, DecrementMode::Iterative, original());
    let value = solver
        .run_trial(&mut set, &[2, 2, 0], &[0], &mut seeded_rng(0))
        .unwrap();

    assert_eq!(solver.usage(), &[1, 0]);
    assert_eq!(value, 2);
}

#[test]
fn test_before_counts_advisory_twice() {
    // Seeding lowers every bound and the reconciliation folds the seeded
    // use in again, so before mode needs one use fewer than iterative.
    let mut set = build_set(&[1], &[&[0]], original());

    let mut iterative = solver_for(&set, DecrementMode::Iterative, original());
    let a = iterative
        .run_trial(&mut set, &[3], &[0], &mut seeded_rng(0))
        .unwrap();
    assert_eq!(a, 3);

    let mut before = solver_for(&set, DecrementMode::Before, original());
    let b = before
        .run_trial(&mut set, &[3], &[0], &mut seeded_rng(0))
        .unwrap();
    assert_eq!(b, 2);
}

#[test]
fn test_advisory_out_of_range() {
    let mut set = build_set(&[1], &[&[0]], original());
    let mut solver = solver_for(&set, DecrementMode::Iterative, original());
    let err = solver
        .run_trial(&mut set, &[1], &[7], &mut seeded_rng(0))
        .unwrap_err();
    assert!(matches!(err, PdbCoverError::InvalidModel(_)));
}

#[test]
fn test_wrong_bound_count() {
    let mut set = build_set(&[1], &[&[0]], original());
    let mut solver = solver_for(&set, DecrementMode::Iterative, original());
    let err = solver
        .run_trial(&mut set, &[1, 1], &[], &mut seeded_rng(0))
        .unwrap_err();
    assert!(matches!(err, PdbCoverError::InvalidModel(_)));
}

#[test]
fn test_wrong_operator_count() {
    let small = build_set(&[1, 1], &[&[1]], original());
    let mut solver = solver_for(&small, DecrementMode::Iterative, original());

    let mut larger = build_set(&[1, 1, 1], &[&[2]], original());
    let err = solver
        .run_trial(&mut larger, &[1], &[], &mut seeded_rng(0))
        .unwrap_err();
    assert!(matches!(err, PdbCoverError::InvalidModel(_)));

    let mut smaller = build_set(&[1], &[&[0]], original());
    let err = solver
        .run_trial(&mut smaller, &[1], &[], &mut seeded_rng(0))
        .unwrap_err();
    assert!(matches!(err, PdbCoverError::InvalidModel(_)));
}

#[test]
fn test_wrong_restriction_count() {
    let set = build_set(&[1, 1], &[&[0]], original());
    let mut solver = solver_for(&set, DecrementMode::Before, original());

    let mut wider = build_set(&[1, 1], &[&[0], &[1]], original());
    let err = solver
        .run_trial(&mut wider, &[1], &[], &mut seeded_rng(0))
        .unwrap_err();
    assert!(matches!(err, PdbCoverError::InvalidModel(_)));
}

// ============================================================================
// Trial state and randomness
// ============================================================================

#[test]
fn test_trials_start_from_fresh_state() {
    let mut set = build_set(&[1, 2], &[&[0, 1], &[1]], original());
    let mut solver = solver_for(&set, DecrementMode::Iterative, original());
    let mut rng = seeded_rng(0);

    let first = solver.run_trial(&mut set, &[3, 4], &[], &mut rng).unwrap();
    let first_usage = solver.usage().to_vec();
    let second = solver.run_trial(&mut set, &[3, 4], &[], &mut rng).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_usage, solver.usage());
}

#[test]
fn test_value_is_weighted_usage() {
    let costs = [4, 1, 3, 2, 6];
    let lists: [&[usize]; 3] = [&[0, 1, 2], &[1, 3], &[2, 3, 4]];
    for decrement in [DecrementMode::Iterative, DecrementMode::Before] {
        let mut set = build_set(&costs, &lists, random_both());
        let mut solver = solver_for(&set, decrement, random_both());
        let mut rng = seeded_rng(11);
        for _ in 0..20 {
            let value = solver
                .run_trial(&mut set, &[9, 5, 13], &[3], &mut rng)
                .unwrap();
            assert_eq!(value, weighted_usage(solver.usage(), &costs));
            assert!(solver.bounds().iter().all(|&b| b <= 0));
        }
    }
}

#[test]
fn test_same_seed_same_trials() {
    let costs = [1, 2, 3, 4];
    let lists: [&[usize]; 3] = [&[0, 1, 2], &[1, 2, 3], &[0, 3]];
    let run = |seed: u64| -> Vec<(u64, Vec<u64>)> {
        let mut set = build_set(&costs, &lists, random_both());
        let mut solver = solver_for(&set, DecrementMode::Iterative, random_both());
        let mut rng = seeded_rng(seed);
        (0..10)
            .map(|_| {
                let value = solver.run_trial(&mut set, &[5, 6, 4], &[], &mut rng).unwrap();
                (value, solver.usage().to_vec())
            })
            .collect()
    };

    assert_eq!(run(42), run(42));
}

#[test]
fn test_random_orders_stay_permutations() {
    let costs = [1, 1, 1, 1, 1];
    let lists: [&[usize]; 3] = [&[0, 1, 2], &[2, 3, 4], &[0, 4]];
    let mut set = build_set(&costs, &lists, random_both());
    let mut solver = solver_for(&set, DecrementMode::Before, random_both());
    let mut rng = seeded_rng(5);

    for _ in 0..10 {
        solver.run_trial(&mut set, &[2, 2, 1], &[], &mut rng).unwrap();

        let mut order = set.order().to_vec();
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2]);
        for (r, expected) in lists.iter().enumerate() {
            let mut ops = set.operators(r).to_vec();
            ops.sort_unstable();
            assert_eq!(&ops, expected);
        }
    }
}

#[test]
fn test_original_order_never_reshuffles() {
    let mut set = build_set(&[1, 1, 1], &[&[0, 1, 2], &[1, 2]], original());
    let snapshot = set.clone();
    let mut solver = solver_for(&set, DecrementMode::Iterative, original());
    let mut rng = seeded_rng(9);
    for _ in 0..5 {
        solver.run_trial(&mut set, &[2, 2], &[], &mut rng).unwrap();
    }
    assert_eq!(set, snapshot);
}

#[test]
fn test_weighted_usage() {
    assert_eq!(weighted_usage(&[2, 0, 3], &[5, 7, 1]), 13);
    assert_eq!(weighted_usage(&[], &[]), 0);
}

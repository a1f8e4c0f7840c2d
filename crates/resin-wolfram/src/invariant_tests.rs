// ============================================================================
// Invariant tests - mathematical properties that must hold
// ============================================================================

use std::collections::HashSet;

use proptest::prelude::*;

use super::*;

/// Straight loop over the row, for checking [`step`] against.
fn reference_step<R: CellRule>(rule: &R, row: &[u8], boundary: Boundary) -> Vec<u8> {
    let mut next = Vec::with_capacity(row.len());
    for i in 0..row.len() {
        next.push(rule.next_state(neighborhood(row, i, boundary)));
    }
    next
}

fn boundaries() -> impl Strategy<Value = Boundary> {
    prop_oneof![
        Just(Boundary::Reflect),
        Just(Boundary::Wrap),
        (0u8..2).prop_map(Boundary::Constant),
    ]
}

// ------------------------------------------------------------------------
// Rule table invariants
// ------------------------------------------------------------------------

#[test]
fn test_elementary_tables_are_total() {
    for rule in 0..=255u8 {
        let table = ElementaryRule::new(rule);
        let entries = table.entries();
        assert_eq!(entries.len(), 8);

        let keys: HashSet<Neighborhood> = entries.iter().map(|&(n, _)| n).collect();
        assert_eq!(keys.len(), 8, "rule {rule} must cover every neighborhood");
        assert!(entries.iter().all(|&(_, out)| out < 2));
    }
}

#[test]
fn test_elementary_tables_are_distinct() {
    let tables: HashSet<[(Neighborhood, u8); 8]> =
        (0..=255u8).map(|r| ElementaryRule::new(r).entries()).collect();
    assert_eq!(tables.len(), 256);
}

#[test]
fn test_totalistic_tables_are_total() {
    for code in 0..=TotalisticRule::MAX_CODE {
        let table = TotalisticRule::new(code).unwrap();
        let entries = table.entries();
        assert_eq!(entries.len(), 7);

        let sums: HashSet<u8> = entries.iter().map(|e| e.sum).collect();
        assert_eq!(sums, (0..=6).collect::<HashSet<u8>>(), "code {code} must cover every sum");
        assert!(entries.iter().all(|e| e.output < 3));
    }
}

#[test]
fn test_totalistic_digits_recompose_code() {
    for code in 0..=TotalisticRule::MAX_CODE {
        let table = TotalisticRule::new(code).unwrap();
        let recomposed = table
            .entries()
            .iter()
            .fold(0u32, |acc, e| acc * 3 + e.output as u32);
        assert_eq!(recomposed, code);
    }
}

#[test]
fn test_totalistic_rule_ignores_arrangement() {
    let table = TotalisticRule::new(1599).unwrap();
    for l in 0..3 {
        for c in 0..3 {
            for r in 0..3 {
                let expected = table.output_for_sum(l + c + r);
                assert_eq!(Some(table.next_state(Neighborhood::new(l, c, r))), expected);
                assert_eq!(
                    table.next_state(Neighborhood::new(r, l, c)),
                    table.next_state(Neighborhood::new(l, c, r))
                );
            }
        }
    }
}

// ------------------------------------------------------------------------
// Evolution invariants
// ------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_step_matches_reference(
        rule in any::<u8>(),
        row in prop::collection::vec(0u8..2, 0..64),
        boundary in boundaries(),
    ) {
        let rule = ElementaryRule::new(rule);
        prop_assert_eq!(step(&rule, &row, boundary), Ok(reference_step(&rule, &row, boundary)));
    }

    #[test]
    fn prop_history_shape(
        code in 0..=TotalisticRule::MAX_CODE,
        row in prop::collection::vec(0u8..3, 1..48),
        iterations in 0usize..32,
        boundary in boundaries(),
    ) {
        let sim = Simulation::new(TotalisticRule::new(code).unwrap()).with_boundary(boundary);
        let width = row.len();
        let history = sim.run(row, iterations).unwrap();
        prop_assert_eq!(history.len(), iterations + 1);
        prop_assert!(history.iter().all(|r| r.len() == width));
        prop_assert!(history.iter().flatten().all(|&c| c < 3));
    }

    #[test]
    fn prop_runs_are_deterministic(
        rule in any::<u8>(),
        row in prop::collection::vec(0u8..2, 1..48),
        iterations in 0usize..32,
    ) {
        let config = RunConfig::new(iterations).with_initial_row(row);
        prop_assert_eq!(elementary_1d(rule, &config), elementary_1d(rule, &config));
    }

    #[test]
    fn prop_each_row_is_one_step_of_the_previous(
        rule in any::<u8>(),
        row in prop::collection::vec(0u8..2, 1..48),
        boundary in boundaries(),
    ) {
        let sim = Simulation::new(ElementaryRule::new(rule)).with_boundary(boundary);
        let history = sim.run(row, 8).unwrap();
        for pair in history.rows().windows(2) {
            prop_assert_eq!(&sim.step(&pair[0]).unwrap(), &pair[1]);
        }
    }

    #[test]
    fn prop_wrap_is_shift_invariant(
        rule in any::<u8>(),
        row in prop::collection::vec(0u8..2, 1..48),
        shift in 0usize..48,
    ) {
        let rule = ElementaryRule::new(rule);
        let shift = shift % row.len();
        let mut rotated = row.clone();
        rotated.rotate_left(shift);

        let mut expected = step(&rule, &row, Boundary::Wrap).unwrap();
        expected.rotate_left(shift);
        prop_assert_eq!(step(&rule, &rotated, Boundary::Wrap), Ok(expected));
    }

    #[test]
    fn prop_step_rejects_any_out_of_alphabet_cell(
        code in 0..=TotalisticRule::MAX_CODE,
        mut row in prop::collection::vec(0u8..3, 1..48),
        bad in 3u8..,
        at in any::<prop::sample::Index>(),
        boundary in boundaries(),
    ) {
        let index = at.index(row.len());
        row[index] = bad;
        let rule = TotalisticRule::new(code).unwrap();
        prop_assert_eq!(
            step(&rule, &row, boundary),
            Err(AutomatonError::InvalidCell { index, value: bad, states: 3 })
        );
    }
}

//! Property tests for view derivation.

use proptest::prelude::*;
use std::cmp::Ordering;

use super::*;
use crate::employee::Employee;

fn employee_strategy() -> impl Strategy<Value = Employee> {
    (
        "[A-Za-zÀÉÖàéöŠšđ]{1,8}",
        "[A-Za-zÉé]{1,6}",
        "[A-Za-z ]{0,10}",
    )
        .prop_map(|(name, department, role)| Employee::new(name, department, role))
}

fn roster_strategy() -> impl Strategy<Value = Vec<Employee>> {
    prop::collection::vec(employee_strategy(), 0..12)
}

proptest! {
    #[test]
    fn test_search_is_sound_complete_and_ordered(
        employees in roster_strategy(),
        needle in "[A-Za-z]{0,3}",
    ) {
        let found = search_by_name(&employees, &needle);
        let expected: Vec<&Employee> = employees
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&needle.to_lowercase()))
            .collect();

        // Same records, same relative order, no duplicates.
        prop_assert_eq!(found.len(), expected.len());
        for (got, want) in found.iter().zip(expected.iter()) {
            prop_assert!(std::ptr::eq(*got, *want));
        }
    }

    #[test]
    fn test_filter_matches_department_only(
        employees in roster_strategy(),
        needle in "[A-Za-z]{1,3}",
    ) {
        for employee in filter_by_department(&employees, &needle) {
            prop_assert!(contains_folded(&employee.department, &needle));
        }
    }

    #[test]
    fn test_sort_is_ordered_permutation(employees in roster_strategy()) {
        let sorted = sort_by_name(&employees);
        prop_assert_eq!(sorted.len(), employees.len());

        for pair in sorted.windows(2) {
            prop_assert_ne!(locale_compare(&pair[0].name, &pair[1].name), Ordering::Greater);
        }

        let mut original: Vec<&Employee> = employees.iter().collect();
        let mut permuted = sorted.clone();
        original.sort_by(|a, b| (&a.name, &a.department, &a.role).cmp(&(&b.name, &b.department, &b.role)));
        permuted.sort_by(|a, b| (&a.name, &a.department, &a.role).cmp(&(&b.name, &b.department, &b.role)));
        prop_assert_eq!(original, permuted);
    }

    #[test]
    fn test_accented_initial_sorts_between_neighbouring_letters(tail in "[a-z]{0,6}") {
        let accented = format!("é{tail}");
        prop_assert_eq!(locale_compare(&format!("d{tail}"), &accented), Ordering::Less);
        prop_assert_eq!(locale_compare(&accented, &format!("f{tail}")), Ordering::Less);
    }

    #[test]
    fn test_sort_is_idempotent(employees in roster_strategy()) {
        let once: Vec<Employee> = sort_by_name(&employees).into_iter().cloned().collect();
        let twice: Vec<Employee> = sort_by_name(&once).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_needle_matches_everything(haystack in "\\PC{0,12}") {
        prop_assert!(contains_folded(&haystack, ""));
    }

    #[test]
    fn test_rows_never_mix_sentinels_and_records(
        employees in roster_strategy(),
        needle in "[A-Za-z]{1,3}",
        search in any::<bool>(),
    ) {
        let state = if search { ViewState::search(needle) } else { ViewState::filter(needle) };
        let rows = select_rows(&employees, &state);
        let sentinels = rows.iter().filter(|row| row.is_sentinel()).count();
        prop_assert!(sentinels == 0 || rows.len() == 1);
        prop_assert!(!rows.is_empty());
    }
}

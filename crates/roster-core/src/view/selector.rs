//! Row selection for each view.

use super::collation::locale_compare;
use super::row::Row;
use super::state::ViewState;
use crate::employee::Employee;

/// Case-insensitive substring test.
///
/// An empty `needle` matches every haystack.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Records whose name contains `needle`, in roster order.
pub fn search_by_name<'a>(employees: &'a [Employee], needle: &str) -> Vec<&'a Employee> {
    employees
        .iter()
        .filter(|employee| contains_folded(&employee.name, needle))
        .collect()
}

/// Records whose department contains `needle`, in roster order.
pub fn filter_by_department<'a>(employees: &'a [Employee], needle: &str) -> Vec<&'a Employee> {
    employees
        .iter()
        .filter(|employee| contains_folded(&employee.department, needle))
        .collect()
}

/// Records ordered by name. Equal names keep their roster order.
pub fn sort_by_name(employees: &[Employee]) -> Vec<&Employee> {
    let mut sorted: Vec<&Employee> = employees.iter().collect();
    sorted.sort_by(|a, b| locale_compare(&a.name, &b.name));
    sorted
}

/// Derives the rows to display for `state`.
///
/// Search and filter results that come back empty yield their sentinel row
/// instead of an empty list.
pub fn select_rows(employees: &[Employee], state: &ViewState) -> Vec<Row> {
    match state {
        ViewState::Sort => to_rows(sort_by_name(employees)),
        ViewState::Search(text) if !text.is_empty() => {
            or_sentinel(search_by_name(employees, text), Row::NoMatch)
        }
        ViewState::Filter(text) if !text.is_empty() => or_sentinel(
            filter_by_department(employees, text),
            Row::NoEmployeesInDepartment,
        ),
        ViewState::List | ViewState::Search(_) | ViewState::Filter(_) => {
            employees.iter().cloned().map(Row::Employee).collect()
        }
    }
}

fn to_rows(employees: Vec<&Employee>) -> Vec<Row> {
    employees.into_iter().cloned().map(Row::Employee).collect()
}

fn or_sentinel(matches: Vec<&Employee>, sentinel: Row) -> Vec<Row> {
    if matches.is_empty() {
        vec![sentinel]
    } else {
        to_rows(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Roster;

    fn names(rows: &[Row]) -> Vec<String> {
        rows.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_empty_needle_matches_everything() {
        assert!(contains_folded("Sava", ""));
        assert!(contains_folded("", ""));
    }

    #[test]
    fn test_match_is_substring_not_prefix() {
        assert!(contains_folded("Irakli", "KL"));
        assert!(!contains_folded("Irakli", "xyz"));
    }

    #[test]
    fn test_list_keeps_stored_order() {
        let roster = Roster::seed();
        let rows = select_rows(roster.as_slice(), &ViewState::List);
        assert_eq!(
            names(&rows),
            vec![
                "Sava - IT - Senior Web Developer",
                "Saba - IT - Web Developer",
                "Irakli - HR - Manager",
            ]
        );
    }

    #[test]
    fn test_search_sa() {
        let roster = Roster::seed();
        let rows = select_rows(roster.as_slice(), &ViewState::search("sa"));
        assert_eq!(
            names(&rows),
            vec!["Sava - IT - Senior Web Developer", "Saba - IT - Web Developer"]
        );
    }

    #[test]
    fn test_filter_hr() {
        let roster = Roster::seed();
        let rows = select_rows(roster.as_slice(), &ViewState::filter("hr"));
        assert_eq!(names(&rows), vec!["Irakli - HR - Manager"]);
    }

    #[test]
    fn test_sort_by_name() {
        let roster = Roster::seed();
        let rows = select_rows(roster.as_slice(), &ViewState::Sort);
        let sorted: Vec<&str> = rows
            .iter()
            .filter_map(Row::as_employee)
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(sorted, vec!["Irakli", "Saba", "Sava"]);
    }

    #[test]
    fn test_filter_without_match_yields_sentinel() {
        let roster = Roster::seed();
        let rows = select_rows(roster.as_slice(), &ViewState::filter("finance"));
        assert_eq!(rows, vec![Row::NoEmployeesInDepartment]);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_search_without_match_yields_sentinel() {
        let roster = Roster::seed();
        let rows = select_rows(roster.as_slice(), &ViewState::search("zz"));
        assert_eq!(rows, vec![Row::NoMatch]);
    }

    #[test]
    fn test_empty_roster_list_is_empty() {
        let rows = select_rows(&[], &ViewState::List);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_empty_search_variant_renders_list() {
        let roster = Roster::seed();
        let rows = select_rows(roster.as_slice(), &ViewState::Search(String::new()));
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| !row.is_sentinel()));
    }

    #[test]
    fn test_sort_is_stable_for_equal_names() {
        let employees = vec![
            Employee::new("Ana", "IT", "first"),
            Employee::new("Ana", "HR", "second"),
        ];
        let sorted = sort_by_name(&employees);
        assert_eq!(sorted[0].role, "first");
        assert_eq!(sorted[1].role, "second");
    }
}

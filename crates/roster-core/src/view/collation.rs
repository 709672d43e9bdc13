//! Name ordering for the sorted view.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};

thread_local! {
    static ROOT_COLLATOR: Option<Collator> = root_collator();
}

fn root_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    Collator::try_new(&Default::default(), options).ok()
}

/// Compares two names with the CLDR root collation.
///
/// Base letters decide first, so "Élodie" sorts with the E names and "bob"
/// sorts between "Alice" and "Carol". Accents break ties next, then case
/// (lowercase first). Names the collator considers equal fall back to code
/// point order, which makes this a total order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => folded_compare(a, b),
        })
        .then_with(|| a.cmp(b))
}

/// Case-folded comparison used only if collation data cannot be loaded.
fn folded_compare(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);

    folded_a.cmp(folded_b).then_with(|| {
        let case_a = a.chars().map(char::is_uppercase);
        let case_b = b.chars().map(char::is_uppercase);
        case_a.cmp(case_b)
    })
}

// ABOUTME: Closed set of deck names that are only a color combination, e.g. "UW" or "WUBRG".
// ABOUTME: Built once per process from every ordering of 1 to 5 distinct color letters.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// The five color identifiers, in the order Goldfish prints them.
pub const COLOR_IDENTIFIERS: [char; 5] = ['W', 'U', 'B', 'R', 'G'];

/// 5 + 20 + 60 + 120 + 120 orderings.
static COLOR_NAMES: Lazy<HashSet<String>> = Lazy::new(|| {
    let mut names = HashSet::with_capacity(325);
    let mut current = String::with_capacity(COLOR_IDENTIFIERS.len());
    let mut used = [false; COLOR_IDENTIFIERS.len()];
    extend_orderings(&mut names, &mut current, &mut used);
    names
});

fn extend_orderings(names: &mut HashSet<String>, current: &mut String, used: &mut [bool; 5]) {
    for (i, color) in COLOR_IDENTIFIERS.iter().enumerate() {
        if used[i] {
            continue;
        }
        used[i] = true;
        current.push(*color);
        names.insert(current.clone());
        extend_orderings(names, current, used);
        current.pop();
        used[i] = false;
    }
}

/// Returns true if `name` is exactly an ordering of distinct color letters.
pub fn is_color_name(name: &str) -> bool {
    COLOR_NAMES.contains(name)
}

/// The full precomputed set.
pub fn color_names() -> &'static HashSet<String> {
    &COLOR_NAMES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_holds_every_ordering() {
        assert_eq!(color_names().len(), 325);
        assert_eq!(color_names().iter().filter(|n| n.len() == 1).count(), 5);
        assert_eq!(color_names().iter().filter(|n| n.len() == 3).count(), 60);
        assert_eq!(color_names().iter().filter(|n| n.len() == 5).count(), 120);
    }

    #[test]
    fn matches_exact_orderings_only() {
        assert!(is_color_name("W"));
        assert!(is_color_name("WUR"));
        assert!(is_color_name("GRBUW"));
        assert!(!is_color_name("WW"));
        assert!(!is_color_name("WURza"));
        assert!(!is_color_name("wur"));
        assert!(!is_color_name("Jeskai Control"));
        assert!(!is_color_name(""));
    }
}

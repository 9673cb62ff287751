use crate::models::Item;

/// Case-insensitive substring match of `term` against the item's name.
///
/// An absent name matches as the empty string, so it only passes an empty term.
pub fn matches_term(item: &Item, term: &str) -> bool {
    item.display_name().to_lowercase().contains(&term.to_lowercase())
}

/// Items of `data` whose name contains `term`, in their original order.
pub fn filter_items<'a>(data: &'a [Item], term: &str) -> Vec<&'a Item> {
    // Lowercase the term once rather than per item
    let needle = term.to_lowercase();
    data.iter().filter(|item| item.display_name().to_lowercase().contains(&needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> Vec<Item> {
        vec![
            Item::new("1", "Apple"),
            Item::new("2", "Banana"),
            Item::new("3", "Grape"),
            Item::new("4", "Pineapple"),
        ]
    }

    fn ids(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_filter_case_insensitive() {
        let data = fruit();
        assert_eq!(ids(&filter_items(&data, "ap")), vec!["1", "3", "4"]);
        assert_eq!(ids(&filter_items(&data, "AP")), vec!["1", "3", "4"]);
        assert_eq!(ids(&filter_items(&data, "aPpLe")), vec!["1", "4"]);
    }

    #[test]
    fn test_filter_empty_term_keeps_everything() {
        let data = fruit();
        assert_eq!(filter_items(&data, "").len(), 4);
    }

    #[test]
    fn test_filter_no_match() {
        let data = fruit();
        assert!(filter_items(&data, "kiwi").is_empty());
    }

    #[test]
    fn test_filter_preserves_order() {
        let data = vec![Item::new("z", "nana"), Item::new("a", "Banana"), Item::new("m", "ananas")];
        assert_eq!(ids(&filter_items(&data, "ana")), vec!["z", "a", "m"]);
    }

    #[test]
    fn test_filter_is_substring_not_fuzzy() {
        let data = fruit();
        // "apl" is a fuzzy match for Apple but not a substring
        assert!(filter_items(&data, "apl").is_empty());
    }

    #[test]
    fn test_unnamed_item_only_matches_empty_term() {
        let data = vec![Item::unnamed("1"), Item::new("2", "Apple")];
        assert_eq!(ids(&filter_items(&data, "")), vec!["1", "2"]);
        assert_eq!(ids(&filter_items(&data, "a")), vec!["2"]);
        assert!(matches_term(&data[0], ""));
        assert!(!matches_term(&data[0], "a"));
    }

    #[test]
    fn test_filter_empty_data() {
        assert!(filter_items(&[], "anything").is_empty());
    }

    #[test]
    fn test_filter_agrees_with_matches_term() {
        let data = fruit();
        for term in ["", "a", "an", "PINE", "x"] {
            let expected: Vec<&Item> = data.iter().filter(|i| matches_term(i, term)).collect();
            assert_eq!(filter_items(&data, term), expected, "term {:?}", term);
        }
    }
}

//! Built-in item list used when no data file is given.

use crate::models::Item;

const SAMPLE_NAMES: &[&str] = &[
    "Apple",
    "Apricot",
    "Avocado",
    "Banana",
    "Blackberry",
    "Blueberry",
    "Cantaloupe",
    "Cherry",
    "Coconut",
    "Cranberry",
    "Dragonfruit",
    "Durian",
    "Fig",
    "Grape",
    "Grapefruit",
    "Guava",
    "Kiwi",
    "Lemon",
    "Lime",
    "Lychee",
    "Mango",
    "Nectarine",
    "Orange",
    "Papaya",
    "Passionfruit",
    "Peach",
    "Pear",
    "Pineapple",
    "Plum",
    "Pomegranate",
    "Raspberry",
    "Strawberry",
    "Tangerine",
    "Watermelon",
];

/// Sample items with ids "1".."N" in alphabetical order
pub fn sample_items() -> Vec<Item> {
    SAMPLE_NAMES
        .iter()
        .enumerate()
        .map(|(idx, name)| Item::new((idx + 1).to_string(), *name))
        .collect()
}

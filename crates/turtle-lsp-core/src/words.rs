//! Free words typed in a document, offered as plain-text completions

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::Catalog;
use crate::identifiers::ClassifiedIdentifier;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("word separator pattern"));

/// Unique words of `text` in order of first appearance, without catalog
/// names and without names already reported by the classifier
pub fn words(catalog: &Catalog, text: &str, classified: &[ClassifiedIdentifier]) -> Vec<String> {
    let classified: HashSet<&str> = classified.iter().map(|i| i.name.as_str()).collect();
    let mut seen = HashSet::new();

    NON_WORD
        .split(text)
        .filter(|word| !word.is_empty())
        .filter(|word| !catalog.contains_name(word) && !classified.contains(word))
        .filter(|word| seen.insert(*word))
        .map(str::to_string)
        .collect()
}

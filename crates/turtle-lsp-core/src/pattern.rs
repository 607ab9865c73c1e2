//! Assembly of patterns from catalog and document names
//!
//! Names such as `let*`, `set!` or `char<=?` contain regex metacharacters.
//! Every name interpolated into a rule goes through [`escape`] first.

use regex::Regex;

use crate::error::Result;

/// Escape every regex metacharacter in a literal name
pub fn escape(name: &str) -> String {
    regex::escape(name)
}

/// Join literal names into a single escaped alternation.
///
/// Longer names come first so that a name is never shadowed by one of its
/// prefixes (`move-to` vs `move-to-center`) in unanchored contexts. Duplicates
/// and empty names are dropped.
pub fn alternation<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let mut names: Vec<&str> = names.into_iter().filter(|n| !n.is_empty()).collect();
    names.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    names.dedup();

    names.into_iter().map(escape).collect::<Vec<_>>().join("|")
}

/// Compile a matcher accepting exactly one of `names` and nothing else
pub fn exact_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<Regex> {
    let alternatives = alternation(names);
    if alternatives.is_empty() {
        // Nothing can precede the start of input
        return Ok(Regex::new("a^")?);
    }
    Ok(Regex::new(&format!("^(?:{})$", alternatives))?)
}

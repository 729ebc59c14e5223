//! Shared rewrite machinery for the HTML converters.

use regex::Regex;

/// One regex rewrite, applied to every match in the input.
pub(crate) struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    /// Compiles a rule. Patterns are static literals, so a bad one is a programming error.
    pub(crate) fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }
}

/// Applies `rules` in order, each one to the output of the previous.
pub(crate) fn apply_rules(input: &str, rules: &[Rule]) -> String {
    rules.iter().fold(input.to_string(), |text, rule| {
        rule.pattern
            .replace_all(&text, rule.replacement)
            .into_owned()
    })
}

/// HTML entities decoded by the converters, in decoding order.
///
/// `&amp;` is decoded before `&lt;`/`&gt;`, so `&amp;lt;` ends up as `<`.
pub(crate) const ENTITIES: [(&str, &str); 6] = [
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

/// Decodes [`ENTITIES`] in order.
pub(crate) fn decode_entities(input: &str) -> String {
    ENTITIES
        .iter()
        .fold(input.to_string(), |text, (entity, decoded)| {
            text.replace(entity, decoded)
        })
}

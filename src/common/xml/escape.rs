use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

// Use LeftmostLongest to ensure longer entities are matched first (e.g., &amp; instead of &lt;)
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("Failed to build XML unescaper")
});

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use slideberry::common::xml::escape_xml;
/// assert_eq!(escape_xml("Create & Edit"), "Create &amp; Edit");
/// assert_eq!(escape_xml("<a>\"b\"</a>"), "&lt;a&gt;&quot;b&quot;&lt;/a&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Unescape XML special characters.
///
/// Replaces the five standard XML entities with their corresponding characters.
/// Unknown or malformed entities are left unchanged.
///
/// # Examples
///
/// ```
/// use slideberry::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("Create &amp; Edit"), "Create & Edit");
/// assert_eq!(unescape_xml("&quot;sys_id&quot;"), "\"sys_id\"");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;"); // &amp; is matched first
/// assert_eq!(unescape_xml("&invalid;"), "&invalid;"); // unknown entity
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_covers_all_entities() {
        assert_eq!(escape_xml("&<>\"'"), "&amp;&lt;&gt;&quot;&apos;");
        assert_eq!(escape_xml("no specials"), "no specials");
    }

    #[test]
    fn test_unescape_incomplete_entity() {
        assert_eq!(unescape_xml("&amp"), "&amp");
        assert_eq!(unescape_xml("a & b"), "a & b");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Any string escapes to text that unescapes back to itself.
            #[test]
            fn prop_escape_unescape_round_trip(s in ".*") {
                prop_assert_eq!(unescape_xml(&escape_xml(&s)), s);
            }

            /// Escaped output never contains a bare special character.
            #[test]
            fn prop_escaped_has_no_bare_specials(s in ".*") {
                let escaped = escape_xml(&s);
                prop_assert!(!escaped.contains('<'));
                prop_assert!(!escaped.contains('>'));
                prop_assert!(!escaped.contains('"'));
                prop_assert!(!escaped.contains('\''));
            }
        }
    }
}

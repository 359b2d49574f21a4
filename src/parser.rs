//! Message classification.
//!
//! Inbound text follows a small convention: `category, url` saves a URL
//! under a category, a bare URL saves it without one, and anything else
//! gets echoed back with usage instructions. Classification is a pure
//! function with no I/O.

/// Result of classifying one inbound text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// Text had a comma and the part after the first comma is a URL.
    CategoryAndUrl { category: String, url: String },
    /// The whole (trimmed) text is a URL.
    BareUrl { url: String },
    /// Neither shape matched; carries the original text for the echo reply.
    Unrecognized { original: String },
}

/// Classify raw message text.
///
/// Only the first comma splits category from URL; any later commas stay
/// part of the URL. Both sides are trimmed before validation. A comma
/// whose right-hand side is not a URL does not partially parse: the whole
/// text falls through to the bare-URL check and then to `Unrecognized`.
pub fn classify(raw_text: &str) -> Classified {
    if let Some((head, tail)) = raw_text.split_once(',') {
        let url = tail.trim();
        if url.starts_with("http") {
            return Classified::CategoryAndUrl {
                category: head.trim().to_string(),
                url: url.to_string(),
            };
        }
    }

    let trimmed = raw_text.trim();
    if trimmed.starts_with("http") {
        return Classified::BareUrl {
            url: trimmed.to_string(),
        };
    }

    Classified::Unrecognized {
        original: raw_text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn category_and_url() {
        assert_eq!(
            classify("ガジェット, http://example.com/a"),
            Classified::CategoryAndUrl {
                category: "ガジェット".to_string(),
                url: "http://example.com/a".to_string(),
            }
        );
    }

    #[test]
    fn bare_url() {
        assert_eq!(
            classify("http://example.com/b"),
            Classified::BareUrl {
                url: "http://example.com/b".to_string(),
            }
        );
    }

    #[test]
    fn bare_url_is_trimmed() {
        assert_eq!(
            classify("  https://example.com/x \n"),
            Classified::BareUrl {
                url: "https://example.com/x".to_string(),
            }
        );
    }

    #[test]
    fn plain_text_is_unrecognized() {
        assert_eq!(
            classify("hello world"),
            Classified::Unrecognized {
                original: "hello world".to_string(),
            }
        );
    }

    #[test]
    fn comma_without_url_is_unrecognized_whole() {
        // Comma present but the right-hand side is not a URL: no partial
        // parse, the whole string is unrecognized.
        assert_eq!(
            classify("foo, not-a-url"),
            Classified::Unrecognized {
                original: "foo, not-a-url".to_string(),
            }
        );
    }

    #[test]
    fn only_first_comma_splits() {
        assert_eq!(
            classify("reading, http://example.com/a,b,c"),
            Classified::CategoryAndUrl {
                category: "reading".to_string(),
                url: "http://example.com/a,b,c".to_string(),
            }
        );
    }

    #[test]
    fn empty_category_is_kept() {
        // A leading comma yields an empty (trimmed) category, as in the
        // original convention.
        assert_eq!(
            classify(", http://example.com/a"),
            Classified::CategoryAndUrl {
                category: String::new(),
                url: "http://example.com/a".to_string(),
            }
        );
    }

    #[test]
    fn url_containing_comma_but_no_category() {
        // Right-hand side of the comma is not a URL, but the whole text
        // is, so it classifies as a bare URL comma and all.
        assert_eq!(
            classify("http://example.com/a,b"),
            Classified::BareUrl {
                url: "http://example.com/a,b".to_string(),
            }
        );
    }

    #[test]
    fn empty_input_is_unrecognized() {
        assert_eq!(
            classify(""),
            Classified::Unrecognized {
                original: String::new(),
            }
        );
    }

    proptest! {
        /// Any `category, url` pair (category comma-free, URL starting
        /// with "http") classifies with both sides trimmed.
        #[test]
        fn prop_category_url_roundtrip(
            category in "[a-zA-Z0-9 ]{0,20}",
            path in "[a-z0-9/]{0,20}",
        ) {
            let url = format!("http://example.com/{path}");
            let text = format!(" {category} , {url} ");
            prop_assert_eq!(
                classify(&text),
                Classified::CategoryAndUrl {
                    category: category.trim().to_string(),
                    url,
                }
            );
        }

        /// Text without commas that doesn't start with "http" is always
        /// unrecognized, returned verbatim.
        #[test]
        fn prop_non_url_text_unrecognized(text in "[a-gi-z ]{0,40}") {
            prop_assert_eq!(
                classify(&text),
                Classified::Unrecognized { original: text }
            );
        }

        /// A trimmed URL always classifies as a bare URL when no comma
        /// is present.
        #[test]
        fn prop_bare_url(path in "[a-z0-9/._-]{0,30}") {
            let url = format!("https://example.com/{path}");
            prop_assert_eq!(
                classify(&url),
                Classified::BareUrl { url }
            );
        }
    }
}

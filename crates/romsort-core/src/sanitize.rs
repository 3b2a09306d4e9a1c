//! Filesystem-safe name sanitization for scraped game titles.

/// Characters that are unsafe in a filename on at least one of the
/// filesystems the collection may end up on.
const FORBIDDEN: &[char] = &['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>', '\''];

/// Replaces every forbidden character in `name` with `-`.
///
/// One-to-one substitution: output length equals input length, and the
/// function is idempotent (`-` is never forbidden).
pub fn clean_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if FORBIDDEN.contains(&c) { '-' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_forbidden_characters() {
        assert_eq!(clean_file_name("Test: Game/Name"), "Test- Game-Name");
        assert_eq!(clean_file_name(r#"a\b?c%d*e:f|g"h<i>j'k"#), "a-b-c-d-e-f-g-h-i-j-k");
    }

    #[test]
    fn leaves_clean_input_untouched() {
        assert_eq!(clean_file_name("Ico (Europe)"), "Ico (Europe)");
        assert_eq!(clean_file_name(""), "");
    }

    #[test]
    fn all_forbidden_input() {
        assert_eq!(clean_file_name("/\\?%*:|\"<>'"), "-----------");
    }

    #[test]
    fn idempotent_and_length_preserving() {
        let inputs = ["007: From Russia with Love", "a/b\\c", "", "plain", "::::"];
        for s in inputs {
            let once = clean_file_name(s);
            assert_eq!(once.chars().count(), s.chars().count());
            assert_eq!(clean_file_name(&once), once);
        }
    }

    #[test]
    fn output_never_contains_forbidden_characters() {
        let cleaned = clean_file_name("x/y\\z?a%b*c:d|e\"f<g>h'i");
        assert!(!cleaned.chars().any(|c| FORBIDDEN.contains(&c)));
    }
}

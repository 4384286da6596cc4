//! Turn display text into URL-safe path segments.
//!
//! The algorithm is frozen for compatibility with previously indexed URLs:
//! lowercase, fold common accented letters to ASCII, delete apostrophes (so
//! "St. Mary's" keeps "marys" as one word), collapse every run of other
//! non-alphanumerics to a single hyphen, then strip a leading/trailing
//! hyphen.

/// Normalize a display name into a canonical URL path segment.
///
/// Returns the empty string when the input has no alphanumeric characters;
/// callers must treat that as an error rather than emit an empty segment.
pub fn normalize(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        // Apostrophes vanish without becoming a word boundary.
        if c == '\'' || c == '\u{2019}' {
            continue;
        }
        let c = fold_accent(c);
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Map common accented Latin letters to their base ASCII letter, so
/// "Café" slugs to "cafe" instead of losing the letter to a hyphen.
/// Anything unmapped passes through and falls into the non-alnum class.
fn fold_accent(c: char) -> char {
    match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'è'..='ë' | 'ē' | 'ė' | 'ę' => 'e',
        'ì'..='ï' | 'ī' | 'į' => 'i',
        'ñ' | 'ń' => 'n',
        'ò'..='ö' | 'ø' | 'ō' => 'o',
        'ù'..='ü' | 'ū' => 'u',
        'ý' | 'ÿ' => 'y',
        'ž' | 'ź' | 'ż' => 'z',
        'š' | 'ś' => 's',
        'ł' => 'l',
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_names() {
        assert_eq!(normalize("St. Mary's Hospital"), "st-marys-hospital");
        assert_eq!(normalize("Mission District"), "mission-district");
        assert_eq!(normalize("NoHo"), "noho");
    }

    #[test]
    fn test_apostrophes_deleted_not_hyphenated() {
        assert_eq!(normalize("O'Brien's / Café Noir!"), "obriens-cafe-noir");
        assert_eq!(normalize("Dee’s Corner"), "dees-corner");
    }

    #[test]
    fn test_runs_collapse_to_single_hyphen() {
        assert_eq!(normalize("a -- b ___ c"), "a-b-c");
        assert_eq!(normalize("x...y"), "x-y");
    }

    #[test]
    fn test_edge_trimming() {
        assert_eq!(normalize("  Leading and trailing!  "), "leading-and-trailing");
        assert_eq!(normalize("-already-slugged-"), "already-slugged");
    }

    #[test]
    fn test_no_alphanumerics_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!! --- '''"), "");
    }

    #[test]
    fn test_idempotent_on_normalized_input() {
        for input in ["St. Mary's Hospital", "Upper East Side", "7th & Vine"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_output_alphabet() {
        let slug = normalize("Ünïcode & Sons, Ltd. (Est. 1999)");
        assert!(!slug.is_empty());
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        assert!(!slug.starts_with('-'));
        assert!(!slug.ends_with('-'));
    }
}

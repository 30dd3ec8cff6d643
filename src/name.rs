//! Loose matching of Japanese player names for search.

const KATAKANA_START: char = '\u{30A1}';
const KATAKANA_END: char = '\u{30F6}';
/// Distance from a katakana code point to its hiragana counterpart.
const KANA_OFFSET: u32 = 0x60;

/// Normalize a name for comparison.
///
/// Drops half- and full-width spaces and the `・` separator, lowercases, and
/// folds katakana to hiragana. Kanji are left alone.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '・')
        .flat_map(char::to_lowercase)
        .map(|c| {
            if (KATAKANA_START..=KATAKANA_END).contains(&c) {
                char::from_u32(c as u32 - KANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// True if either normalized name contains the other.
pub fn matches_name(a: &str, b: &str) -> bool {
    let a = normalize_name(a);
    let b = normalize_name(b);
    a.contains(&b) || b.contains(&a)
}

/// True if the query is contained in the player's name or phonetic name.
pub fn matches_player_name(query: &str, name: &str, name_kana: Option<&str>) -> bool {
    let query = normalize_name(query);
    normalize_name(name).contains(&query)
        || name_kana.is_some_and(|kana| normalize_name(kana).contains(&query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("牧　秀悟"), "牧秀悟");
        assert_eq!(normalize_name("牧 秀悟"), "牧秀悟");
        assert_eq!(normalize_name("まき・しゅうご"), "まきしゅうご");
        assert_eq!(normalize_name("マキ　シュウゴ"), "まきしゅうご");
        assert_eq!(normalize_name("まき・しゅう ご"), "まきしゅうご");
        assert_eq!(normalize_name("ABC"), "abc");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_matches_name() {
        assert!(matches_name("牧秀悟", "牧　秀悟"));
        assert!(matches_name("牧秀悟", "牧"));
        assert!(matches_name("牧", "牧秀悟"));
        assert!(matches_name("まき", "マキ"));
        assert!(!matches_name("牧秀悟", "佐野"));
    }

    #[test]
    fn test_matches_player_name() {
        assert!(matches_player_name("牧 秀悟", "牧秀悟", None));
        assert!(matches_player_name("秀悟", "牧秀悟", None));
        assert!(!matches_player_name("まき", "牧秀悟", None));
        assert!(matches_player_name("まき", "牧秀悟", Some("まき・しゅうご")));
        assert!(matches_player_name("シュウゴ", "牧秀悟", Some("まき・しゅうご")));
        assert!(matches_player_name("まき しゅうご", "牧秀悟", Some("まき・しゅうご")));
        assert!(!matches_player_name("さの", "牧秀悟", Some("まき・しゅうご")));
    }
}

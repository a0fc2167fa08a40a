/// Folds the Turkish letters that have direct ASCII counterparts.
///
/// Dotted capital İ is intentionally absent: Unicode lowercasing turns it
/// into `i` plus a combining dot, and the combining dot never survives the
/// ASCII filter in [`normalize`].
fn fold_turkish(ch: char) -> char {
    match ch {
        'ç' | 'Ç' => 'c',
        'ğ' | 'Ğ' => 'g',
        'ı' => 'i',
        'ö' | 'Ö' => 'o',
        'ş' | 'Ş' => 's',
        'ü' | 'Ü' => 'u',
        _ => ch,
    }
}

/// Normalizes a display name into a lowercase ASCII file stem.
///
/// Runs of whitespace and hyphens collapse into a single hyphen, anything
/// outside `a-z0-9` is dropped, and the result carries no edge hyphens.
/// Inputs with no usable characters normalize to the empty string.
pub fn normalize(input: &str) -> String {
    let mut out = String::new();
    let mut pending_hyphen = false;

    for ch in input.chars() {
        for lowered in fold_turkish(ch).to_lowercase() {
            match lowered {
                'a'..='z' | '0'..='9' => {
                    if pending_hyphen && !out.is_empty() {
                        out.push('-');
                    }
                    pending_hyphen = false;
                    out.push(lowered);
                }
                '-' => pending_hyphen = true,
                c if c.is_whitespace() => pending_hyphen = true,
                _ => {}
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_basic_name() {
        assert_eq!(normalize("Dilara Erdem"), "dilara-erdem");
    }

    #[test]
    fn normalize_folds_turkish_letters() {
        assert_eq!(normalize("Çağrı Güngör"), "cagri-gungor");
        assert_eq!(normalize("Ümit Öztürk"), "umit-ozturk");
        assert_eq!(normalize("Şule Işık"), "sule-isik");
    }

    #[test]
    fn normalize_handles_dotted_capital_i() {
        assert_eq!(normalize("İsmail"), "ismail");
        assert_eq!(normalize("Ümit Öztürk İşçi"), "umit-ozturk-isci");
    }

    #[test]
    fn normalize_preserves_numbers() {
        assert_eq!(normalize("Analyst 2"), "analyst-2");
    }

    #[test]
    fn normalize_strips_special_chars() {
        assert_eq!(normalize("Hello! @World#"), "hello-world");
    }

    #[test]
    fn normalize_collapses_mixed_runs() {
        assert_eq!(normalize("foo - bar"), "foo-bar");
        assert_eq!(normalize("foo--bar"), "foo-bar");
        assert_eq!(normalize("a \t b"), "a-b");
    }

    #[test]
    fn normalize_trims_edge_hyphens() {
        assert_eq!(normalize(" -spaced- "), "spaced");
    }

    #[test]
    fn normalize_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_only_special_chars() {
        assert_eq!(normalize("!@#$%"), "");
        assert_eq!(normalize("🎉🎉"), "");
    }
}

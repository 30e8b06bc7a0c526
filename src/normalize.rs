use crate::types::Show;

/// Derive the canonical show name from a listing label
///
/// The last whitespace-separated token is the episode/time marker and is
/// dropped. A label with a single token therefore yields an empty name.
pub fn show_name(label: &str) -> String {
    let tokens: Vec<&str> = label.split_whitespace().collect();
    match tokens.split_last() {
        Some((_, name)) => name.join(" "),
        None => String::new(),
    }
}

/// Canonical [`Show`] for a listing label
pub fn canonical_show(label: &str) -> Show {
    Show::new(show_name(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_name_drops_trailing_token() {
        assert_eq!(show_name("Foo 9:00pm"), "Foo");
        assert_eq!(show_name("The Great British Bake Off S14E03"), "The Great British Bake Off");
    }

    #[test]
    fn test_show_name_collapses_whitespace() {
        assert_eq!(show_name("\n   Doctor   Who\tS01E01  \n"), "Doctor Who");
        assert_eq!(canonical_show("Doctor Who S01E01"), canonical_show(" Doctor Who  S01E02"));
    }

    #[test]
    fn test_show_name_is_stable() {
        let label = "Better Call Saul 10:00pm";
        let first = show_name(label);
        for _ in 0..3 {
            assert_eq!(show_name(label), first);
        }
    }

    #[test]
    fn test_single_token_label_yields_empty_name() {
        assert_eq!(show_name("9:00pm"), "");
        assert_eq!(show_name(""), "");
        assert_eq!(show_name("   "), "");
    }
}

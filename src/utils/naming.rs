/// Turns an identifier into a label: a space goes before every ASCII capital,
/// then each word is capitalised.
///
/// `userId` -> `User Id`, `ID` -> `I D`, `WidgetType` -> `Widget Type`.
pub fn humanize(name: &str) -> String {
    let mut spaced = String::with_capacity(name.len() * 2);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(ch);
    }
    spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// First character upper case, the rest lower case.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("userId"), "User Id");
        assert_eq!(humanize("ID"), "I D");
        assert_eq!(humanize("Widget"), "Widget");
        assert_eq!(humanize("name"), "Name");
        assert_eq!(humanize("localConfigURL"), "Local Config U R L");
        assert_eq!(humanize("snake_case"), "Snake_case");
        assert_eq!(humanize("x2Value"), "X2 Value");
        assert_eq!(humanize(""), "");
    }

    quickcheck! {
        fn prop_humanize_has_no_edge_or_double_spaces(name: String) -> bool {
            let label = humanize(&name);
            !label.starts_with(' ') && !label.ends_with(' ') && !label.contains("  ")
        }

        fn prop_humanize_splits_on_every_capital(name: String) -> bool {
            let ident: String = name.chars().filter(|c| c.is_ascii_alphabetic()).collect();
            let capitals = ident.chars().filter(|c| c.is_ascii_uppercase()).count();
            let starts_lower = ident.chars().next().is_some_and(|c| c.is_ascii_lowercase());
            let words = humanize(&ident).split(' ').filter(|w| !w.is_empty()).count();
            words == capitals + usize::from(starts_lower)
        }
    }
}

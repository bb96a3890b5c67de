//! Composite field parsing for occupancy records.
//!
//! Several record fields pack two values into one string joined by
//! `" - "`:
//!
//! - `wisma`: `"<building> - <room>"`
//! - `pidana`: `"<code> - <description>"`
//!
//! Every query goes through [`parse_composite`] so the split rule is the
//! same everywhere: the string is cut at the **first** separator and the
//! right-hand side keeps any later separators intact.

/// Separator between the two halves of a composite field.
pub const SEPARATOR: &str = " - ";

/// Split a composite field at the first [`SEPARATOR`].
///
/// Returns `None` when the separator does not occur.
pub fn parse_composite(value: &str) -> Option<(&str, &str)> {
    value.split_once(SEPARATOR)
}

/// Room code of a `wisma` field: everything after the first separator.
pub fn room_code(wisma: &str) -> Option<&str> {
    parse_composite(wisma).map(|(_, room)| room)
}

/// Leading code of a composite field, or the whole value when it is not
/// composite.
pub fn composite_code(value: &str) -> &str {
    parse_composite(value).map_or(value, |(code, _)| code)
}

/// Normalize a room name for fuzzy matching: drop every space and
/// upper-case the rest.
///
/// Only the ASCII space is removed; tabs and other whitespace are kept.
pub fn normalize_room_name(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != ' ')
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_first_separator() {
        assert_eq!(
            parse_composite("Wisma A - 101"),
            Some(("Wisma A", "101"))
        );
    }

    #[test]
    fn right_side_keeps_later_separators() {
        assert_eq!(
            parse_composite("Wisma A - 101 - Lantai 2"),
            Some(("Wisma A", "101 - Lantai 2"))
        );
    }

    #[test]
    fn missing_separator_is_none() {
        assert_eq!(parse_composite("Wisma A 101"), None);
        assert_eq!(parse_composite("Wisma A-101"), None);
        assert_eq!(parse_composite(""), None);
    }

    #[test]
    fn empty_halves_are_allowed() {
        assert_eq!(parse_composite(" - 101"), Some(("", "101")));
        assert_eq!(parse_composite("Wisma A - "), Some(("Wisma A", "")));
    }

    #[test]
    fn room_code_extraction() {
        assert_eq!(room_code("Wisma B - 7"), Some("7"));
        assert_eq!(room_code("Klinik"), None);
    }

    #[test]
    fn composite_code_falls_back_to_whole_value() {
        assert_eq!(composite_code("P1 - desc"), "P1");
        assert_eq!(composite_code("Pasal 362"), "Pasal 362");
        assert_eq!(composite_code(""), "");
    }

    #[test]
    fn normalization_strips_spaces_and_uppercases() {
        assert_eq!(normalize_room_name("wisma a - 101"), "WISMAA-101");
        assert_eq!(normalize_room_name("  Wisma   A - 101 "), "WISMAA-101");
    }

    #[test]
    fn normalization_keeps_other_whitespace() {
        assert_eq!(normalize_room_name("a\tb"), "A\tB");
    }

    #[test]
    fn normalization_uppercases_unicode() {
        assert_eq!(normalize_room_name("straße"), "STRASSE");
    }
}

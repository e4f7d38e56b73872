// src/core/sanitize.rs
use std::sync::LazyLock;

use regex::Regex;

/// A leading or trailing slash, with the whitespace around it.
static EDGE_SLASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*/|/\s*$").expect("static regex"));

/// Filename-illegal characters and their full-width lookalikes.
const FULLWIDTH: [(char, char); 8] = [
    ('/', '／'),
    (':', '：'),
    ('*', '＊'),
    ('?', '？'),
    ('"', '＂'),
    ('<', '＜'),
    ('>', '＞'),
    ('|', '｜'),
];

/// Make an album title safe to use as a file name.
///
/// Both edge slashes go; inner ones are widened like any other character.
pub fn sanitize_title(title: &str) -> String {
    let trimmed = EDGE_SLASH.replace_all(title, "");
    trimmed
        .chars()
        .map(|c| {
            FULLWIDTH
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |(_, to)| *to)
        })
        .collect()
}

/// Page text squeezed onto one line for log messages.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widens_every_illegal_char() {
        assert_eq!(sanitize_title("A/B: C*D?"), "A／B： C＊D？");
        assert_eq!(sanitize_title(r#"a"b<c>d|e||"#), "a＂b＜c＞d｜e｜｜");
    }

    #[test]
    fn strips_edge_slashes() {
        assert_eq!(sanitize_title("  / Title"), " Title");
        assert_eq!(sanitize_title("Title /  "), "Title ");
        assert_eq!(sanitize_title("/Title/"), "Title");
        assert_eq!(sanitize_title(" / A / B / "), " A ／ B ");
    }

    #[test]
    fn leaves_clean_titles_alone() {
        assert_eq!(sanitize_title("FINAL FANTASY VII"), "FINAL FANTASY VII");
        assert_eq!(sanitize_title(""), "");
    }

    #[test]
    fn normalize_ws_collapses_runs() {
        assert_eq!(normalize_ws("  a \n\t b  "), "a b");
    }
}

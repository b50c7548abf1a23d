//! Card colors for repository languages, matching GitHub's palette.

/// Color used for languages missing from the table.
pub const DEFAULT_LANGUAGE_COLOR: &str = "#ccc";

const LANGUAGE_COLORS: [(&str, &str); 16] = [
    ("JavaScript", "#f1e05a"),
    ("Python", "#3572A5"),
    ("Java", "#b07219"),
    ("TypeScript", "#2b7489"),
    ("HTML", "#e34c26"),
    ("CSS", "#563d7c"),
    ("Ruby", "#701516"),
    ("PHP", "#4F5D95"),
    ("C++", "#f34b7d"),
    ("C", "#555555"),
    ("C#", "#178600"),
    ("Go", "#00ADD8"),
    ("Rust", "#dea584"),
    ("Swift", "#ffac45"),
    ("Kotlin", "#F18E33"),
    ("Shell", "#89e051"),
];

pub fn language_color(language: &str) -> &'static str {
    LANGUAGE_COLORS
        .iter()
        .find(|&&(name, _)| name == language)
        .map_or(DEFAULT_LANGUAGE_COLOR, |&(_, color)| color)
}

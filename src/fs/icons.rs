//! Nerd-font glyph lookup for listing entries.

pub const DIRECTORY_ICON: &str = "\u{f07b}";
pub const DEFAULT_FILE_ICON: &str = "\u{f15b}";
pub const PARENT_ICON: &str = "\u{f062}";

/// Picks a glyph for an entry by extension, with a handful of well-known
/// dotfile names special-cased.
pub fn icon_for(name: &str, extension: &str, is_directory: bool) -> &'static str {
    if is_directory {
        return DIRECTORY_ICON;
    }

    match name {
        ".gitignore" | ".gitattributes" | ".gitmodules" => return "\u{f1d3}",
        "Makefile" | "makefile" => return "\u{f0ad}",
        "Dockerfile" => return "\u{f308}",
        _ => {}
    }

    match extension {
        ".rs" => "\u{e7a8}",
        ".go" => "\u{e627}",
        ".py" => "\u{e606}",
        ".js" | ".mjs" => "\u{e74e}",
        ".ts" => "\u{e628}",
        ".c" | ".h" => "\u{e61e}",
        ".cpp" | ".hpp" | ".cc" => "\u{e61d}",
        ".sh" | ".bash" | ".zsh" => "\u{f489}",
        ".md" | ".markdown" => "\u{f48a}",
        ".toml" | ".yaml" | ".yml" | ".ini" | ".conf" => "\u{e615}",
        ".json" => "\u{e60b}",
        ".html" | ".htm" => "\u{e736}",
        ".css" => "\u{e749}",
        ".zip" | ".gz" | ".tar" | ".xz" | ".bz2" | ".7z" => "\u{f410}",
        ".png" | ".jpg" | ".jpeg" | ".gif" | ".bmp" | ".webp" => "\u{f1c5}",
        ".pdf" => "\u{f1c1}",
        ".csv" => "\u{f1c3}",
        ".lock" => "\u{f023}",
        ".txt" => "\u{f15c}",
        _ => DEFAULT_FILE_ICON,
    }
}

//! Dungeon/floor name markup.
//!
//! Raw names may carry a leading colour tag and a trailing badge:
//! `$ff8800$Hera-Ur Descended! [x2 drops]`.

/// Result of parsing a raw dungeon or floor name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedName {
    pub name: String,
    pub badge: Option<String>,
    /// Hex colour without the leading `#`
    pub bg: Option<String>,
}

/// Parses a raw name. Total: any input yields a `ParsedName`, unrecognised
/// markup is kept as part of the display name.
pub fn parse_name(raw: &str) -> ParsedName {
    let (bg, rest) = split_color_tag(raw.trim_start());
    let (name, badge) = split_badge(rest);

    ParsedName {
        name: name.trim().to_string(),
        badge,
        bg,
    }
}

fn split_color_tag(s: &str) -> (Option<String>, &str) {
    let Some(body) = s.strip_prefix('$') else {
        return (None, s);
    };
    match body.find('$') {
        Some(6) if body[..6].chars().all(|c| c.is_ascii_hexdigit()) => {
            (Some(body[..6].to_ascii_lowercase()), &body[7..])
        }
        _ => (None, s),
    }
}

fn split_badge(s: &str) -> (&str, Option<String>) {
    let trimmed = s.trim_end();
    if !trimmed.ends_with(']') {
        return (s, None);
    }
    let Some(open) = trimmed.rfind('[') else {
        return (s, None);
    };
    let badge = trimmed[open + 1..trimmed.len() - 1].trim();
    if badge.is_empty() {
        return (s, None);
    }
    (&trimmed[..open], Some(badge.to_string()))
}

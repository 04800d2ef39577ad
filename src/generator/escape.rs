//! Destination-aware escaping for generated theme code.
//!
//! Every value taken from a property bag passes through one of these functions
//! before it is written into a theme file. Each function targets one grammar:
//!
//! - [`html`] for text and attribute values in static markup
//! - [`php_string`] for single-quoted PHP string literals
//! - [`html_comment`] / [`css_comment`] for comment bodies
//! - [`css_color`] / [`css_url`] for values inside CSS declarations
//! - [`class_list`] / [`identifier`] / [`text_domain`] / [`slug`] for names
//!
//! The CSS helpers are allow-lists: a value that does not match returns `None`
//! and the caller substitutes its default.

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)]
static COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)^(?:
            \#[0-9a-f]{3,4}
          | \#[0-9a-f]{6}
          | \#[0-9a-f]{8}
          | (?:rgb|rgba|hsl|hsla)\(\s*[0-9.%]+(?:\s*[,/\s]\s*[0-9.%]+){2,3}\s*\)
          | [a-z]{3,20}
        )$",
    )
    .expect("color pattern is valid")
});

/// Escapes text for HTML element content and quoted attribute values.
pub fn html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders `value` as a single-quoted PHP string literal, quotes included.
///
/// Inside single quotes PHP only interprets `\\` and `\'`, so escaping those two
/// is sufficient for the literal to hold any text verbatim.
pub fn php_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// `<?php echo esc_html('…'); ?>` for a text value.
pub fn echo_html(value: &str) -> String {
    format!("<?php echo esc_html({}); ?>", php_string(value))
}

/// `<?php echo esc_attr('…'); ?>` for an attribute value.
pub fn echo_attr(value: &str) -> String {
    format!("<?php echo esc_attr({}); ?>", php_string(value))
}

/// `<?php echo esc_url('…'); ?>` for a link target.
pub fn echo_url(value: &str) -> String {
    format!("<?php echo esc_url({}); ?>", php_string(value))
}

/// Makes text safe inside `<!-- … -->` in a PHP template.
///
/// Angle brackets are entity-encoded, which also rules out `<?php` and `?>`,
/// and consecutive hyphens are split so the comment cannot close early.
pub fn html_comment(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_hyphen = false;
    for c in value.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '-' if prev_hyphen => out.push_str(" -"),
            '\r' | '\n' => out.push(' '),
            _ => out.push(c),
        }
        prev_hyphen = c == '-';
    }
    if prev_hyphen {
        out.push(' ');
    }
    out
}

/// Makes text safe inside a `/* … */` comment on a single line.
pub fn css_comment(value: &str) -> String {
    let single_line: String = value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let mut out = single_line.replace("*/", "* /").replace("/*", "/ *");
    while out.contains("*/") {
        out = out.replace("*/", "* /");
    }
    out.trim().to_string()
}

/// Accepts hex colors, `rgb()`/`hsl()` functions and named colors.
pub fn css_color(value: &str) -> Option<String> {
    let value = value.trim();
    COLOR_REGEX.is_match(value).then(|| value.to_string())
}

/// Wraps a URL for use in a CSS `url()` when it contains no characters that
/// could leave the value.
pub fn css_url(value: &str) -> Option<String> {
    let value = value.trim();
    let safe = !value.is_empty()
        && value.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, ':' | '/' | '.' | '-' | '_' | '~' | '%' | '?' | '&' | '=' | '+' | '#' | '@' | ',')
        })
        && !value.to_ascii_lowercase().starts_with("javascript:");
    safe.then(|| format!("url('{value}')"))
}

/// Filters a space-separated class list down to valid CSS class names.
pub fn class_list(value: &str) -> Vec<String> {
    value
        .split_whitespace()
        .map(|token| {
            token
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                .collect::<String>()
        })
        .filter(|token| {
            token
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        })
        .collect()
}

/// Derives a PHP function-name prefix from free text.
///
/// Lowercases, turns runs of other characters into one `_`, and falls back to
/// `custom` when nothing usable remains.
pub fn identifier(value: &str) -> String {
    let ident = collapse(value, '_');
    if ident.is_empty() {
        "custom".to_string()
    } else if ident.starts_with(|c: char| c.is_ascii_digit()) {
        format!("theme_{ident}")
    } else {
        ident
    }
}

/// Derives a WordPress text domain (lowercase, hyphen separated).
pub fn text_domain(value: &str) -> String {
    let domain = collapse(value, '-');
    if domain.is_empty() {
        "custom-theme".to_string()
    } else {
        domain
    }
}

/// Derives a file-name-safe page slug, `page` when nothing usable remains.
pub fn slug(value: &str) -> String {
    let slug = collapse(value, '-');
    if slug.is_empty() {
        "page".to_string()
    } else {
        slug
    }
}

/// Derives a site-relative menu link from a menu label.
///
/// `Home`, and labels with nothing usable in them, link to the site root.
pub fn menu_path(label: &str) -> String {
    match collapse(label, '-').as_str() {
        "" | "home" => "/".to_string(),
        slug => format!("/{slug}/"),
    }
}

pub(crate) fn collapse(value: &str, separator: char) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with(separator) {
            out.push(separator);
        }
    }
    while out.ends_with(separator) {
        out.pop();
    }
    out
}

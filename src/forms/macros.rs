//! `<macros>` definitions and `$name` substitution

use indexmap::IndexMap;
use thiserror::Error;

/// Macro definitions in declaration order
pub type Macros = IndexMap<String, String>;

/// A `\u` escape not followed by four hex digits
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed \\uxxxx encoding in macro definition '{0}'")]
pub struct MalformedEscape(pub String);

/// Parse properties-style macro definitions.
///
/// Each logical line is `key=value`, `key:value` or `key value`. Lines starting
/// with `#` or `!` are comments and a trailing `\` continues the value on the
/// next line. A repeated key keeps its last value.
///
/// Keys and values understand the usual escapes: `\t`, `\n`, `\r`, `\f`,
/// `\uXXXX`, and a backslash before any other character (`\=`, `\:`, `\ `)
/// stands for that character.
pub fn parse_macros(text: &str) -> Result<Macros, MalformedEscape> {
    let mut macros = Macros::new();
    let mut pending = String::new();

    for raw in text.lines() {
        let line = raw.trim_start();
        if pending.is_empty() && (line.is_empty() || line.starts_with('#') || line.starts_with('!')) {
            continue;
        }

        if let Some(stripped) = continued(line) {
            pending.push_str(stripped);
            continue;
        }

        pending.push_str(line);
        if let Some((key, value)) = split_entry(&pending)? {
            macros.insert(key, value);
        }
        pending.clear();
    }

    if let Some((key, value)) = split_entry(&pending)? {
        macros.insert(key, value);
    }
    Ok(macros)
}

/// Replace every `$key` in `xml`, longest keys first so `$ab` wins over `$a`.
/// Returns the expanded text and the number of replacements made.
pub fn apply_macros(xml: &str, macros: &Macros) -> (String, usize) {
    let mut keys: Vec<&String> = macros.keys().collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut expanded = xml.to_string();
    let mut replacements = 0;
    for key in keys {
        let placeholder = format!("${key}");
        let count = expanded.matches(placeholder.as_str()).count();
        if count > 0 {
            expanded = expanded.replace(&placeholder, &macros[key]);
            replacements += count;
        }
    }
    (expanded, replacements)
}

// Odd number of trailing backslashes means the line continues
fn continued(line: &str) -> Option<&str> {
    let trailing = line.chars().rev().take_while(|&c| c == '\\').count();
    (trailing % 2 == 1).then(|| &line[..line.len() - 1])
}

fn split_entry(line: &str) -> Result<Option<(String, String)>, MalformedEscape> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let mut key_end = line.len();
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || c.is_whitespace() {
            key_end = i;
            break;
        }
    }

    let mut rest = line[key_end..].trim_start();
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = stripped.trim_start();
    }

    let malformed = || MalformedEscape(line.to_string());
    let key = unescape(&line[..key_end]).ok_or_else(malformed)?;
    let value = unescape(rest).ok_or_else(malformed)?;
    Ok(Some((key, value)))
}

/// Resolve backslash escapes, or `None` for a malformed `\u` escape.
/// Consecutive `\u` escapes are decoded as UTF-16 so surrogate pairs combine.
fn unescape(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut units: Vec<u16> = Vec::new();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c == '\\' && chars.as_str().starts_with('u') {
            chars.next();
            let hex: String = chars.by_ref().take(4).collect();
            if hex.len() != 4 || !hex.chars().all(|h| h.is_ascii_hexdigit()) {
                return None;
            }
            units.push(u16::from_str_radix(&hex, 16).ok()?);
            continue;
        }

        flush_utf16(&mut units, &mut out);
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    flush_utf16(&mut units, &mut out);
    Some(out)
}

fn flush_utf16(units: &mut Vec<u16>, out: &mut String) {
    out.extend(
        char::decode_utf16(units.drain(..)).map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER)),
    );
}

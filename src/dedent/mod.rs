//! Whole-file dedent transform.
//!
//! Computes the longest whitespace prefix shared by every non-blank line and
//! removes it from the start of each line. Tabs and spaces are compared as
//! literal characters; there is no tab expansion, so `\t` and four spaces
//! never share a prefix.

/// Compute the longest common leading whitespace prefix over non-blank lines.
///
/// Lines consisting solely of whitespace are ignored. Returns the empty
/// string when any non-blank line starts at column 0, or when the content has
/// no non-blank lines at all.
pub fn common_prefix(content: &str) -> &str {
    let mut prefix: Option<&str> = None;

    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let body = line.trim_start_matches(|c| c == ' ' || c == '\t');
        let indent = &line[..line.len() - body.len()];

        prefix = Some(match prefix {
            None => indent,
            Some(current) => shared_prefix(current, indent),
        });

        if prefix == Some("") {
            break;
        }
    }

    prefix.unwrap_or("")
}

/// Remove the common leading whitespace prefix from every line.
///
/// Lines that carry the prefix lose exactly that prefix, so relative
/// indentation among lines is preserved. Whitespace-only lines shorter than
/// the prefix are left as they are. Content with no common prefix is
/// returned unchanged.
pub fn dedent(content: &str) -> String {
    let prefix = common_prefix(content);
    if prefix.is_empty() {
        return content.to_string();
    }

    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(pos) = rest.find('\n') {
        let (line, tail) = rest.split_at(pos + 1);
        out.push_str(line.strip_prefix(prefix).unwrap_or(line));
        rest = tail;
    }
    // Final line without a trailing newline
    out.push_str(rest.strip_prefix(prefix).unwrap_or(rest));

    out
}

/// Longest common prefix of two indentation strings, compared byte-wise.
fn shared_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

//! Placeholder substitution for static bundle text
//!
//! Bundle strings carry `{name}` placeholders for computed values (dates,
//! counts, resolved field values). Substitution is single-pass and literal:
//! placeholders with no matching variable are left untouched, so braces and
//! embedded contact details in static text survive verbatim.

/// Substitute `{name}` placeholders in `template` from the given variables.
///
/// Unknown placeholders and unbalanced braces are emitted as-is. Substituted
/// values are inserted literally and are not re-scanned for placeholders.
pub fn substitute(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        match after_open.find('}') {
            Some(close) => {
                let name = &after_open[..close];
                match vars.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        // Unknown placeholder: keep the literal text
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after_open[close + 1..];
            }
            None => {
                // No closing brace in the remainder
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }

    out.push_str(rest);
    out
}

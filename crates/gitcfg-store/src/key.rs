//! Normalization of `section.key` names

const QUOTES: [char; 2] = ['"', '\''];

/// Split a variable name into its normalized `(section, key)` pair.
///
/// The name is lower-cased. If it contains quotes, a quoted subsection is
/// folded back into the section: whitespace before an opening quote acts as
/// a dot (the `[http "https://host"]` header form), and every dot-separated
/// component has surrounding quotes trimmed. Both `http."https://host".sslVerify`
/// and `http "https://host".sslVerify` yield `("http.https://host", "sslverify")`.
/// The last component is always the key and everything before it the section.
///
/// Names with fewer than two components yield `("", "")`.
pub fn to_section_key(name: &str) -> (String, String) {
    let name = dequote(name).to_lowercase();

    match name.rsplit_once('.') {
        Some((section, key)) => (section.to_string(), key.to_string()),
        None => (String::new(), String::new()),
    }
}

fn dequote(name: &str) -> String {
    if !name.contains(QUOTES) {
        return name.to_string();
    }

    join_header_form(name)
        .split('.')
        .map(|part| part.trim_matches(QUOTES))
        .collect::<Vec<_>>()
        .join(".")
}

/// Replace whitespace runs that precede a quote with a single dot.
fn join_header_form(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if !c.is_whitespace() {
            out.push(c);
            continue;
        }

        let mut run = String::from(c);
        while let Some(&next) = chars.peek() {
            if !next.is_whitespace() {
                break;
            }
            run.push(next);
            chars.next();
        }

        match chars.peek() {
            Some(next) if QUOTES.contains(next) => out.push('.'),
            _ => out.push_str(&run),
        }
    }

    out
}

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub(crate) type Criticals = HashMap<char, &'static str>;

const TEXT_BASE: &[(char, &str)] = &[
    ('#', "\\#"),
    ('$', "\\$"),
    ('%', "\\%"),
    ('&', "\\&"),
    ('{', "\\{"),
    ('}', "\\}"),
    ('[', "{[}"),
    (']', "{]}"),
    ('~', "{\\raise.17ex\\hbox{$\\scriptstyle\\sim$}}"),
    ('^', "\\textasciicircum "),
    ('\\', "\\textbackslash "),
    ('\n', "\\newline "),
    ('<', "\\textless "),
    ('>', "\\textgreater "),
    // \- allows a line break after the bar
    ('|', "\\textbar \\-"),
    ('ä', "\\\"a"),
    ('ö', "\\\"o"),
    ('ü', "\\\"u"),
    ('Ä', "\\\"A"),
    ('Ö', "\\\"O"),
    ('Ü', "\\\"U"),
    ('ß', "\\ss"),
    ('®', "\\textsuperscript{\\textregistered}"),
    ('µ', "\\textmu "),
    ('²', "$^2$"),
    ('³', "$^3$"),
    ('α', "$\\alpha$"),
    ('β', "$\\beta$"),
    ('∞', "$\\infty$"),
];

/// Text criticals with `_` left untouched, for content that uses math indices.
pub(crate) static TEXT_WITH_INDICES: Lazy<Criticals> =
    Lazy::new(|| TEXT_BASE.iter().copied().collect());

pub(crate) static TEXT: Lazy<Criticals> = Lazy::new(|| {
    let mut criticals: Criticals = TEXT_BASE.iter().copied().collect();
    criticals.insert('_', "\\_\\-");
    criticals
});

pub(crate) static FILE_PATH: Lazy<Criticals> =
    Lazy::new(|| [('\\', "/"), (' ', "\\space ")].into_iter().collect());

pub(crate) fn replace(text: &str, criticals: &Criticals) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        match criticals.get(&c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

/// Shared text escaping: `&&` collapses to `&` before the table is applied.
pub(crate) fn escape_text(text: &str, criticals: &Criticals) -> String {
    if text.is_empty() {
        return String::new();
    }
    replace(&text.replace("&&", "&"), criticals)
}

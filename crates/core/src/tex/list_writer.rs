#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListEnvironment {
    Description,
    Enumerate,
    Itemize,
}

impl ListEnvironment {
    fn name(self) -> &'static str {
        match self {
            ListEnvironment::Description => "description",
            ListEnvironment::Enumerate => "enumerate",
            ListEnvironment::Itemize => "itemize",
        }
    }
}

fn begin(environment: ListEnvironment) -> String {
    format!("\\begin{{{}}}\n", environment.name())
}

fn end(environment: ListEnvironment) -> String {
    format!("\\end{{{}}}\n", environment.name())
}

pub fn item(item: &str) -> String {
    format!("\\item {}\n", item)
}

pub fn labelled_item(label: &str, item: &str) -> String {
    format!("\\item[{}] {}\n", label, item)
}

fn create_list<S: AsRef<str>>(environment: ListEnvironment, items: &[S]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut tex = begin(environment);
    for entry in items {
        tex.push_str(&item(entry.as_ref()));
    }
    tex.push_str(&end(environment));
    tex
}

pub fn itemized<S: AsRef<str>>(items: &[S]) -> String {
    create_list(ListEnvironment::Itemize, items)
}

pub fn enumerated<S: AsRef<str>>(items: &[S]) -> String {
    create_list(ListEnvironment::Enumerate, items)
}

/// A description list of `(label, item)` pairs.
pub fn description<L: AsRef<str>, S: AsRef<str>>(items: &[(L, S)]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut tex = begin(ListEnvironment::Description);
    for (label, entry) in items {
        tex.push_str(&labelled_item(label.as_ref(), entry.as_ref()));
    }
    tex.push_str(&end(ListEnvironment::Description));
    tex
}

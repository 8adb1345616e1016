//! Math-mode fragments. Arguments are inserted as given.

pub fn fraction(numerator: &str, denominator: &str) -> String {
    format!("\\frac{{{}}}{{{}}}", numerator, denominator)
}

/// The `magnitude`-th root of `term`.
pub fn root(magnitude: &str, term: &str) -> String {
    format!("\\sqrt[{}]{{{}}}", magnitude, term)
}

pub fn sum(start: &str, end: &str, term: &str) -> String {
    format!("\\sum_{{{}}}^{{{}}} {}", start, end, term)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction() {
        assert_eq!(fraction("a", "b+1"), "\\frac{a}{b+1}");
    }

    #[test]
    fn test_root() {
        assert_eq!(root("3", "x"), "\\sqrt[3]{x}");
    }

    #[test]
    fn test_fragments_nest() {
        assert_eq!(
            sum("i=1", "n", &fraction("1", &root("2", "i"))),
            "\\sum_{i=1}^{n} \\frac{1}{\\sqrt[2]{i}}"
        );
    }
}

//! Conditional class-string merging.
//!
//! `cn` joins class fragments into one `class` attribute value: fragments are
//! split on whitespace, empty fragments vanish, and a class that appears more
//! than once is kept only at its first position.

/// Merge class fragments into a single space-separated string.
pub fn cn(fragments: &[&str]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for class in fragments.iter().flat_map(|f| f.split_whitespace()) {
        if !seen.contains(&class) {
            seen.push(class);
        }
    }
    seen.join(" ")
}

/// Builder for class lists with conditional fragments.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ClassList<'a> {
    fragments: Vec<&'a str>,
}

impl<'a> ClassList<'a> {
    pub fn new(base: &'a str) -> Self {
        Self {
            fragments: vec![base],
        }
    }

    pub fn with(mut self, classes: &'a str) -> Self {
        self.fragments.push(classes);
        self
    }

    /// Pick `when_true` or `when_false` depending on `condition`.
    pub fn either(mut self, condition: bool, when_true: &'a str, when_false: &'a str) -> Self {
        self.fragments.push(if condition { when_true } else { when_false });
        self
    }

    pub fn build(&self) -> String {
        cn(&self.fragments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cn_collapses_whitespace() {
        assert_eq!(cn(&["  px-4   py-1 ", "", "rounded"]), "px-4 py-1 rounded");
    }

    #[test]
    fn test_cn_drops_duplicates() {
        assert_eq!(cn(&["border", "text-xs border"]), "border text-xs");
    }

    #[test]
    fn test_cn_empty() {
        assert_eq!(cn(&[]), "");
        assert_eq!(cn(&["", "   "]), "");
    }

    #[test]
    fn test_class_list_conditionals() {
        let active = ClassList::new("btn").with("shown").either(true, "on", "off").build();
        assert_eq!(active, "btn shown on");

        let inactive = ClassList::new("btn").either(false, "on", "off").with("mono").build();
        assert_eq!(inactive, "btn off mono");
    }
}

use serde::{Deserialize, Serialize};

/// An ordered list of non-blank, trimmed lines of text
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiString {
    lines: Vec<String>,
}

impl MultiString {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from text that may span several lines
    pub fn from_text(text: &str) -> Self {
        let mut multi = Self::new();
        multi.append(text);
        multi
    }

    /// Append each non-blank line of `text`
    pub fn append(&mut self, text: &str) {
        self.lines.extend(
            text.split(|c: char| c == '\n' || c == '\r')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }

    /// Append every line of another list
    pub fn extend_from(&mut self, other: &MultiString) {
        self.lines.extend(other.lines.iter().cloned());
    }

    /// Remove and return the first line
    pub fn pop(&mut self) -> Option<String> {
        if self.lines.is_empty() {
            None
        } else {
            Some(self.lines.remove(0))
        }
    }

    /// The lines in order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Iterate over the lines
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.lines.iter()
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if there are no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All lines joined with newlines
    pub fn as_one_string(&self) -> String {
        self.lines.join("\n")
    }
}

impl<'a> IntoIterator for &'a MultiString {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// An ordered set of names, without repeats
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiNames {
    names: Vec<String>,
}

impl MultiNames {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a comma-separated list such as `"Equilibrator, CO2 Sensor"`
    pub fn from_comma_list(list: &str) -> Self {
        let mut names = Self::new();
        for name in list.split(',') {
            names.add(name);
        }
        names
    }

    /// Add a trimmed name; returns false if it was blank or already present
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// True if the (trimmed) name is present
    pub fn contains(&self, name: &str) -> bool {
        let name = name.trim();
        self.names.iter().any(|n| n == name)
    }

    /// The names in insertion order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate over the names
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }

    /// Number of names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if there are no names
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All names joined with `", "`
    pub fn as_one_string(&self) -> String {
        self.names.join(", ")
    }
}

impl<'a> IntoIterator for &'a MultiNames {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

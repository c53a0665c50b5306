//! A single parsed line of tabular input
//!
//! Fields keep the order of the header they were paired with. All values are
//! untyped text; interpretation happens when a [`Record`](super::Record) is
//! built.

/// One data line as an ordered field-name to value mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    /// 1-based line number in the source this row was read from
    line: usize,
    fields: Vec<(String, String)>,
}

impl Row {
    /// Create an empty row for the given source line
    pub fn new(line: usize) -> Self {
        Self {
            line,
            fields: Vec::new(),
        }
    }

    /// Pair header names with values positionally
    ///
    /// Pairing stops at whichever side runs out first.
    pub fn from_pairs<'a, H, V>(line: usize, headers: H, values: V) -> Self
    where
        H: IntoIterator<Item = &'a str>,
        V: IntoIterator<Item = &'a str>,
    {
        let mut row = Self::new(line);
        for (name, value) in headers.into_iter().zip(values) {
            row.insert(name, value);
        }
        row
    }

    /// Set a field, overwriting the value of an existing name in place
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Builder-style variant of [`Row::insert`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a field value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether a field is present
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Source line number
    pub fn line(&self) -> usize {
        self.line
    }

    /// Number of fields in the row
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the row has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in header order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() {
        let row = Row::from_pairs(2, ["department", "hours_worked"], ["Design", "150"]);
        assert_eq!(row.line(), 2);
        assert_eq!(row.get("department"), Some("Design"));
        assert_eq!(row.get("hours_worked"), Some("150"));
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_short_values_leave_fields_absent() {
        let row = Row::from_pairs(1, ["a", "b", "c"], ["1"]);
        assert_eq!(row.len(), 1);
        assert!(row.contains("a"));
        assert!(!row.contains("b"));
    }

    #[test]
    fn test_extra_values_dropped() {
        let row = Row::from_pairs(1, ["a"], ["1", "2", "3"]);
        let fields: Vec<_> = row.iter().collect();
        assert_eq!(fields, vec![("a", "1")]);
    }

    #[test]
    fn test_duplicate_name_overwrites_in_place() {
        let row = Row::from_pairs(1, ["rate", "name", "rate"], ["10", "x", "20"]);
        let fields: Vec<_> = row.iter().collect();
        assert_eq!(fields, vec![("rate", "20"), ("name", "x")]);
    }
}

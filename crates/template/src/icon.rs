//! Prefix-remap table for icon and pixbuf paths.

/// Ordered `(prefix, replacement)` rules applied to path text under
/// `<property name="pixbuf">` and `<property name="icon">` elements.
/// Insertion order is priority: the first matching prefix wins.
#[derive(Debug, Clone, Default)]
pub struct IconPathMap {
    rules: Vec<(String, String)>,
}

impl IconPathMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. Both sides are normalized to end with a single `/`
    /// so `"icons"` and `"icons/"` register the same prefix.
    pub fn register(&mut self, prefix: &str, replacement: &str) {
        self.rules
            .push((normalize(prefix), normalize(replacement)));
    }

    /// Returns the remapped path if some registered prefix matches,
    /// `None` when the path is to be left unchanged.
    pub fn remap(&self, path: &str) -> Option<String> {
        for (prefix, replacement) in &self.rules {
            if let Some(rest) = path.strip_prefix(prefix.as_str()) {
                return Some(format!("{}{}", replacement, rest));
            }
        }
        None
    }
}

fn normalize(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}

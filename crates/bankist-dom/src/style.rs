//! Inline style declarations (element.style)

/// Ordered list of inline CSS property declarations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssStyleDeclaration {
    properties: Vec<(String, String)>,
}

impl CssStyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `style` attribute value (`opacity: 0.5; transform: none`)
    pub fn parse(css_text: &str) -> Self {
        let mut style = Self::new();
        for declaration in css_text.split(';') {
            if let Some((name, value)) = declaration.split_once(':') {
                style.set_property(name.trim(), value.trim());
            }
        }
        style
    }

    /// Value of a property, if set
    pub fn get_property_value(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.properties
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set a property. An empty value removes it.
    pub fn set_property(&mut self, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        if name.is_empty() {
            return;
        }
        if value.is_empty() {
            self.properties.retain(|(n, _)| *n != name);
            return;
        }
        match self.properties.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.properties.push((name, value.to_string())),
        }
    }

    /// Remove a property, returning its old value
    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        let name = name.to_ascii_lowercase();
        let pos = self.properties.iter().position(|(n, _)| *n == name)?;
        Some(self.properties.remove(pos).1)
    }

    pub fn length(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Serialized declarations, as written back to the `style` attribute
    pub fn css_text(&self) -> String {
        self.properties
            .iter()
            .map(|(n, v)| format!("{n}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

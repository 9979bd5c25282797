//! Selectors
//!
//! Compound selectors (`tag#id.class[attr="value"]`) joined by descendant
//! combinators. This is the subset the page markup needs for
//! querySelector, querySelectorAll, closest and matches.

use std::str::FromStr;

use crate::{DomError, DomTree, ElementData, NodeId};

/// One simple selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Universal,
    Tag(String),
    Id(String),
    Class(String),
    /// `[name]` or `[name="value"]`
    Attribute { name: String, value: Option<String> },
}

impl SimpleSelector {
    /// Check a single element against this selector
    pub fn matches(&self, element: &ElementData) -> bool {
        match self {
            SimpleSelector::Universal => true,
            SimpleSelector::Tag(tag) => element.tag_name() == tag.as_str(),
            SimpleSelector::Id(id) => element.id() == Some(id.as_str()),
            SimpleSelector::Class(class) => element.has_class(class),
            SimpleSelector::Attribute { name, value } => match (element.get_attr(name), value) {
                (Some(_), None) => true,
                (Some(actual), Some(expected)) => actual == expected.as_str(),
                (None, _) => false,
            },
        }
    }
}

/// Simple selectors that must all match the same element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSelector {
    parts: Vec<SimpleSelector>,
}

impl CompoundSelector {
    pub fn parts(&self) -> &[SimpleSelector] {
        &self.parts
    }

    pub fn matches(&self, element: &ElementData) -> bool {
        self.parts.iter().all(|p| p.matches(element))
    }
}

/// Compound selectors joined by descendant combinators; the last one is the
/// subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    compounds: Vec<CompoundSelector>,
}

impl Selector {
    /// Parse selector text
    pub fn parse(input: &str) -> Result<Self, DomError> {
        let invalid = || DomError::InvalidSelector(input.to_string());
        let chars: Vec<char> = input.trim().chars().collect();
        let mut pos = 0;
        let mut compounds = Vec::new();
        let mut current: Vec<SimpleSelector> = Vec::new();

        while pos < chars.len() {
            let c = chars[pos];
            match c {
                c if c.is_whitespace() => {
                    if !current.is_empty() {
                        compounds.push(CompoundSelector { parts: std::mem::take(&mut current) });
                    }
                    pos += 1;
                }
                '*' => {
                    if !current.is_empty() {
                        return Err(invalid());
                    }
                    current.push(SimpleSelector::Universal);
                    pos += 1;
                }
                '#' | '.' => {
                    pos += 1;
                    let ident = read_ident(&chars, &mut pos);
                    if ident.is_empty() {
                        return Err(invalid());
                    }
                    current.push(if c == '#' {
                        SimpleSelector::Id(ident)
                    } else {
                        SimpleSelector::Class(ident)
                    });
                }
                '[' => {
                    pos += 1;
                    skip_whitespace(&chars, &mut pos);
                    let name = read_ident(&chars, &mut pos).to_ascii_lowercase();
                    if name.is_empty() {
                        return Err(invalid());
                    }
                    skip_whitespace(&chars, &mut pos);
                    let value = match chars.get(pos) {
                        Some(']') => None,
                        Some('=') => {
                            pos += 1;
                            skip_whitespace(&chars, &mut pos);
                            let value = read_value(&chars, &mut pos).ok_or_else(invalid)?;
                            skip_whitespace(&chars, &mut pos);
                            Some(value)
                        }
                        _ => return Err(invalid()),
                    };
                    if chars.get(pos) != Some(&']') {
                        return Err(invalid());
                    }
                    pos += 1;
                    current.push(SimpleSelector::Attribute { name, value });
                }
                c if is_ident_char(c) => {
                    if !current.is_empty() {
                        return Err(invalid());
                    }
                    let tag = read_ident(&chars, &mut pos);
                    current.push(SimpleSelector::Tag(tag.to_ascii_lowercase()));
                }
                _ => return Err(invalid()),
            }
        }

        if !current.is_empty() {
            compounds.push(CompoundSelector { parts: current });
        }
        if compounds.is_empty() {
            return Err(invalid());
        }
        Ok(Self { compounds })
    }

    pub fn compounds(&self) -> &[CompoundSelector] {
        &self.compounds
    }

    /// Check whether the node at `id` matches, walking ancestors for the
    /// descendant combinators
    pub fn matches(&self, tree: &DomTree, id: NodeId) -> bool {
        let Some((subject, rest)) = self.compounds.split_last() else {
            return false;
        };
        match tree.element(id) {
            Some(element) if subject.matches(element) => {}
            _ => return false,
        }

        let mut ancestors = tree.ancestors(id);
        rest.iter().rev().all(|compound| {
            ancestors.any(|a| tree.element(a).is_some_and(|e| compound.matches(e)))
        })
    }
}

impl FromStr for Selector {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

fn read_ident(chars: &[char], pos: &mut usize) -> String {
    let start = *pos;
    while *pos < chars.len() && is_ident_char(chars[*pos]) {
        *pos += 1;
    }
    chars[start..*pos].iter().collect()
}

fn read_value(chars: &[char], pos: &mut usize) -> Option<String> {
    match chars.get(*pos) {
        Some(&quote) if quote == '"' || quote == '\'' => {
            let start = *pos + 1;
            let end = start + chars[start..].iter().position(|&c| c == quote)?;
            *pos = end + 1;
            Some(chars[start..end].iter().collect())
        }
        _ => {
            let ident = read_ident(chars, pos);
            (!ident.is_empty()).then_some(ident)
        }
    }
}

fn skip_whitespace(chars: &[char], pos: &mut usize) {
    while *pos < chars.len() && chars[*pos].is_whitespace() {
        *pos += 1;
    }
}

use std::collections::HashMap;

use thiserror::Error;

use crate::label::Message;

const MAX_CATALOG_ENTRIES: usize = 10_000;
const MAX_KEY_BYTES: usize = 128;
const MAX_VALUE_BYTES: usize = 16 * 1024;
const MAX_EXPANDED_BYTES: usize = 64 * 1024;

fn is_valid_key(key: &str) -> bool {
    let mut it = key.chars();
    match it.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    it.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-')
}

#[derive(Debug, Error)]
pub enum SimpleParseError {
    #[error("yaml catalog error: {0}")]
    Yaml(String),

    #[error("catalog entry `{key}`: {msg}")]
    Entry { key: String, msg: String },
}

/// A flat message catalog loaded from a YAML mapping:
///
/// ```yaml
/// settings: "Settings"
/// copy-private-key: "Copy private key ({format})"
/// ```
///
/// Values may contain `{name}` placeholders; `{{` and `}}` produce literal braces.
#[derive(Clone, Debug, Default)]
pub struct SimpleCatalog {
    entries: HashMap<String, String>,
}

impl SimpleCatalog {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a YAML mapping of string keys to string values.
    pub fn parse(src: &str) -> Result<Self, SimpleParseError> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(src).map_err(|e| SimpleParseError::Yaml(e.to_string()))?;
        let raw = match value {
            serde_yaml::Value::Mapping(raw) => raw,
            // An empty document is an empty catalog
            serde_yaml::Value::Null => return Ok(Self::new()),
            _ => {
                return Err(SimpleParseError::Yaml(
                    "catalog must be a mapping of keys to strings".to_string(),
                ))
            }
        };

        if raw.len() > MAX_CATALOG_ENTRIES {
            return Err(SimpleParseError::Yaml(format!(
                "too many entries (max {MAX_CATALOG_ENTRIES})"
            )));
        }

        let mut cat = Self::new();
        for (k, v) in raw {
            let Some(key) = k.as_str() else {
                return Err(SimpleParseError::Yaml("yaml keys must be strings".to_string()));
            };
            let entry_err = |msg: String| SimpleParseError::Entry {
                key: key.to_string(),
                msg,
            };
            if !is_valid_key(key) {
                return Err(entry_err(
                    "invalid key (allowed: [A-Za-z0-9][A-Za-z0-9_.-]*)".to_string(),
                ));
            }
            if key.len() > MAX_KEY_BYTES {
                return Err(entry_err(format!("key is too long (max {MAX_KEY_BYTES} bytes)")));
            }
            let Some(val) = v.as_str() else {
                return Err(entry_err("value must be a string".to_string()));
            };
            if val.len() > MAX_VALUE_BYTES {
                return Err(entry_err(format!(
                    "value is too long (max {MAX_VALUE_BYTES} bytes)"
                )));
            }
            cat.insert(key, val);
        }
        Ok(cat)
    }

    pub fn format_message(&self, msg: &Message) -> Option<String> {
        let tmpl = self.get(msg.id.as_ref())?;
        Some(apply_placeholders(tmpl, msg))
    }
}

/// Bounded output buffer; pushes past the limit are dropped.
struct Expansion {
    out: String,
}

impl Expansion {
    fn full(&self) -> bool {
        self.out.len() >= MAX_EXPANDED_BYTES
    }

    fn push(&mut self, c: char) {
        if self.out.len() + c.len_utf8() <= MAX_EXPANDED_BYTES {
            self.out.push(c);
        }
    }

    fn push_str(&mut self, s: &str) {
        for c in s.chars() {
            if self.out.len() + c.len_utf8() > MAX_EXPANDED_BYTES {
                break;
            }
            self.out.push(c);
        }
    }
}

fn apply_placeholders(tmpl: &str, msg: &Message) -> String {
    if !tmpl.contains('{') && !tmpl.contains('}') {
        return tmpl.to_string();
    }

    let mut exp = Expansion {
        out: String::with_capacity(std::cmp::min(tmpl.len() + 8, MAX_EXPANDED_BYTES)),
    };
    let mut chars = tmpl.chars().peekable();

    while let Some(c) = chars.next() {
        if exp.full() {
            break;
        }
        match c {
            '}' => {
                // `}}` collapses to one brace; a lone `}` stays literal
                if chars.peek() == Some(&'}') {
                    chars.next();
                }
                exp.push('}');
            }
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                exp.push('{');
            }
            '{' => {
                let mut key = String::new();
                let mut closed = false;
                for n in chars.by_ref() {
                    if n == '}' {
                        closed = true;
                        break;
                    }
                    key.push(n);
                }

                // No closing brace: the rest is literal text
                if !closed {
                    exp.push('{');
                    exp.push_str(&key);
                    break;
                }

                let name = key.trim();
                match msg.find_arg(name) {
                    Some(v) if !name.is_empty() => exp.push_str(&v.render()),
                    _ => {
                        // Keep unknown placeholders visible
                        exp.push('{');
                        exp.push_str(name);
                        exp.push('}');
                    }
                }
            }
            _ => exp.push(c),
        }
    }

    exp.out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hello(name: &str) -> Message {
        Message::new("demo-hello").arg("name", name)
    }

    #[test]
    fn parse_yaml_and_lookup() {
        let src = r#"
demo-title: "Jumble"
demo-hello: "Hello, {name}!"
"#;

        let cat = SimpleCatalog::parse(src).unwrap();
        assert_eq!(cat.get("demo-title"), Some("Jumble"));
        assert_eq!(cat.len(), 2);

        let s = cat.format_message(&hello("Chris")).unwrap();
        assert_eq!(s, "Hello, Chris!");
    }

    #[test]
    fn empty_document_is_empty_catalog() {
        let cat = SimpleCatalog::parse("# nothing yet\n").unwrap();
        assert!(cat.is_empty());
    }

    #[test]
    fn escaped_braces() {
        let msg = hello("Chris");
        assert_eq!(apply_placeholders("Hello, {{name}}!", &msg), "Hello, {name}!");
        assert_eq!(apply_placeholders("{{{name}}}", &msg), "{Chris}");
        assert_eq!(apply_placeholders("}}", &msg), "}");
        assert_eq!(apply_placeholders("{{", &msg), "{");
    }

    #[test]
    fn missing_closing_brace_is_literal() {
        let msg = hello("Chris");
        assert_eq!(apply_placeholders("Hello, {name", &msg), "Hello, {name");
    }

    #[test]
    fn unknown_placeholder_stays_visible() {
        let msg = hello("Chris");
        assert_eq!(apply_placeholders("{greeting}, {name}", &msg), "{greeting}, Chris");
        assert_eq!(apply_placeholders("{}", &msg), "{}");
    }

    #[test]
    fn yaml_requires_string_values() {
        let err = SimpleCatalog::parse("demo-title: 123\n").unwrap_err();
        assert!(matches!(err, SimpleParseError::Entry { .. }));
    }

    #[test]
    fn key_validation() {
        let err = SimpleCatalog::parse("bad key: \"nope\"\n").unwrap_err();
        assert!(matches!(err, SimpleParseError::Entry { ref key, .. } if key == "bad key"));
    }

    #[test]
    fn non_mapping_is_rejected() {
        let err = SimpleCatalog::parse("- one\n- two\n").unwrap_err();
        assert!(matches!(err, SimpleParseError::Yaml(_)));
    }

    #[test]
    fn placeholder_output_is_limited() {
        let msg = Message::new("big").arg("name", "a".repeat(MAX_EXPANDED_BYTES * 2));
        let s = apply_placeholders("{name}{name}{name}", &msg);
        assert_eq!(s.len(), MAX_EXPANDED_BYTES);
    }
}

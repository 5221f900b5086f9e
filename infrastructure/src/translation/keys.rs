//! Key readers for the supported resource formats.
//!
//! - YAML: the document is parsed and its mappings flattened with `.`, in
//!   block or flow style (`app: {title: x}` → `app.title`). Sequences
//!   contribute their index (`list.0`). Every leaf, `null` included, is a key.
//! - XLIFF: one key per `<trans-unit>` (1.2) or `<unit>` (2.x): its
//!   `resname`/`name` attribute, or its `<source>` text when that is missing.

use quick_xml::Reader;
use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use serde_yaml::Value;
use std::collections::HashSet;
use thiserror::Error;
use transkey_domain::ResourceFormat;

/// A document that could not be read for keys
#[derive(Error, Debug)]
pub enum KeyReadError {
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid XML attribute: {0}")]
    XmlAttribute(#[from] AttrError),
}

/// Keys defined by a document of the given format.
///
/// Unsupported formats define no keys.
pub fn read_keys(format: ResourceFormat, content: &str) -> Result<HashSet<String>, KeyReadError> {
    match format {
        ResourceFormat::Yaml => yaml_keys(content),
        ResourceFormat::Xliff => xliff_keys(content),
        _ => Ok(HashSet::new()),
    }
}

/// Flattened leaf keys of a YAML document
pub fn yaml_keys(content: &str) -> Result<HashSet<String>, KeyReadError> {
    let document: Value = serde_yaml::from_str(content)?;
    let mut keys = HashSet::new();
    // a document that is not a mapping (empty, scalar, list) defines nothing
    if let Value::Mapping(_) = document {
        flatten(String::new(), &document, &mut keys);
    }
    Ok(keys)
}

fn flatten(prefix: String, value: &Value, keys: &mut HashSet<String>) {
    match value {
        Value::Mapping(map) => {
            for (key, child) in map {
                if let Some(segment) = key_segment(key) {
                    flatten(join(&prefix, &segment), child, keys);
                }
            }
        }
        Value::Sequence(items) => {
            for (i, child) in items.iter().enumerate() {
                flatten(join(&prefix, &i.to_string()), child, keys);
            }
        }
        Value::Tagged(tagged) => flatten(prefix, &tagged.value, keys),
        _ => {
            keys.insert(prefix);
        }
    }
}

fn key_segment(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", prefix, segment)
    }
}

/// A translation unit being read
#[derive(Default)]
struct Unit {
    name: Option<String>,
    source: Option<String>,
}

impl Unit {
    fn key(self) -> Option<String> {
        self.name
            .filter(|n| !n.trim().is_empty())
            .or(self.source)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }
}

/// Translation keys of an XLIFF document
pub fn xliff_keys(content: &str) -> Result<HashSet<String>, KeyReadError> {
    let mut reader = Reader::from_str(content);
    let mut keys = HashSet::new();
    let mut unit: Option<Unit> = None;
    let mut in_source = false;

    loop {
        match reader.read_event()? {
            Event::Start(element) => match element.local_name().as_ref() {
                b"trans-unit" => unit = Some(open_unit(&element, b"resname")?),
                b"unit" => unit = Some(open_unit(&element, b"name")?),
                // only the first <source> of a unit counts
                b"source" => {
                    if let Some(current) = unit.as_mut().filter(|u| u.source.is_none()) {
                        current.source = Some(String::new());
                        in_source = true;
                    }
                }
                _ => {}
            },
            Event::Empty(element) => match element.local_name().as_ref() {
                b"trans-unit" => keys.extend(open_unit(&element, b"resname")?.key()),
                b"unit" => keys.extend(open_unit(&element, b"name")?.key()),
                _ => {}
            },
            Event::Text(text) if in_source => {
                if let Some(source) = unit.as_mut().and_then(|u| u.source.as_mut()) {
                    source.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) if in_source => {
                if let Some(source) = unit.as_mut().and_then(|u| u.source.as_mut()) {
                    source.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::End(element) => match element.local_name().as_ref() {
                b"source" => in_source = false,
                b"trans-unit" | b"unit" => {
                    if let Some(key) = unit.take().and_then(Unit::key) {
                        keys.insert(key);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(keys)
}

fn open_unit(element: &BytesStart<'_>, name_attribute: &[u8]) -> Result<Unit, KeyReadError> {
    let name = match element.try_get_attribute(name_attribute)? {
        Some(attribute) => Some(attribute.unescape_value()?.into_owned()),
        None => None,
    };
    Ok(Unit { name, source: None })
}

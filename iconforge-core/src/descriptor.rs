//! Result Descriptor - What the Synthesizer Hands Back
//!
//! One descriptor per invocation. Glyph order is discovery order and
//! drives the order of every generated rule and tag.

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Base CSS class shared by every glyph.
pub const CLASS_PREFIX: &str = "apr";

/// Separates the namespace from the icon name inside a glyph name.
pub const NAME_DELIMITER: char = '$';

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDescriptor {
    pub font_name: String,
    #[serde(default)]
    pub glyphs_data: GlyphsData,
}

impl ResultDescriptor {
    pub fn new(font_name: impl Into<String>) -> Self {
        Self {
            font_name: font_name.into(),
            glyphs_data: GlyphsData::new(),
        }
    }

    pub fn with_glyph(mut self, key: impl Into<String>, record: GlyphRecord) -> Self {
        self.glyphs_data.insert(key, record);
        self
    }

    /// File name of the generated stylesheet
    pub fn css_file_name(&self) -> String {
        format!("{}.css", self.font_name)
    }

    /// File name of the generated demo page
    pub fn html_file_name(&self) -> String {
        format!("{}.html", self.font_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlyphRecord {
    /// Composite `<namespace>$<icon>` name
    pub name: String,
    /// Private-use codepoint, hex without prefix
    pub codepoint_hexa: String,
}

impl GlyphRecord {
    pub fn new(name: impl Into<String>, codepoint_hexa: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            codepoint_hexa: codepoint_hexa.into(),
        }
    }

    /// Segment after the first delimiter, up to the next one.
    ///
    /// Names without a delimiter are not validated; the whole name is used.
    pub fn class_suffix(&self) -> &str {
        let mut segments = self.name.split(NAME_DELIMITER);
        let head = segments.next().unwrap_or_default();
        segments.next().unwrap_or(head)
    }

    pub fn class_name(&self) -> String {
        format!("{}-{}", CLASS_PREFIX, self.class_suffix())
    }
}

/// Glyph records keyed by the synthesizer's internal key, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphsData {
    entries: Vec<(String, GlyphRecord)>,
    index: HashMap<String, usize>,
}

impl GlyphsData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record. Re-inserting a key replaces the record in place.
    pub fn insert(&mut self, key: impl Into<String>, record: GlyphRecord) {
        let key = key.into();
        let existing = self.index.get(&key).copied();
        match existing {
            Some(position) => self.entries[position].1 = record,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, record));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&GlyphRecord> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GlyphRecord)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r))
    }

    pub fn records(&self) -> impl Iterator<Item = &GlyphRecord> {
        self.entries.iter().map(|(_, r)| r)
    }
}

impl<K: Into<String>> FromIterator<(K, GlyphRecord)> for GlyphsData {
    fn from_iter<I: IntoIterator<Item = (K, GlyphRecord)>>(iter: I) -> Self {
        let mut data = Self::new();
        for (key, record) in iter {
            data.insert(key, record);
        }
        data
    }
}

impl Serialize for GlyphsData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, record) in &self.entries {
            map.serialize_entry(key, record)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for GlyphsData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(GlyphsDataVisitor)
    }
}

struct GlyphsDataVisitor;

impl<'de> Visitor<'de> for GlyphsDataVisitor {
    type Value = GlyphsData;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map or list of glyph records")
    }

    // Document order is discovery order; MapAccess yields entries as written.
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<GlyphsData, A::Error> {
        let mut data = GlyphsData::new();
        while let Some((key, record)) = access.next_entry::<String, GlyphRecord>()? {
            data.insert(key, record);
        }
        Ok(data)
    }

    // Some generators emit a plain array; positions become the keys.
    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<GlyphsData, A::Error> {
        let mut data = GlyphsData::new();
        let mut index = 0usize;
        while let Some(record) = access.next_element::<GlyphRecord>()? {
            data.insert(index.to_string(), record);
            index += 1;
        }
        Ok(data)
    }
}

//! Error definitions as read from the declarative document.

use std::{collections::HashSet, fmt, marker::PhantomData};

use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};

mod error;

pub use error::ParseError;

/// Status used when a definition leaves `httpCode` out, or sets it to null
/// or zero.
pub const DEFAULT_HTTP_CODE: u16 = 500;

/// One named entry of the definition document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDefinition {
    pub name: String,
    pub http_code: u16,
    /// Field name and type pairs in document order. Duplicates are kept so
    /// the renderer can reject them.
    pub payload: Vec<(String, String)>,
    /// Resolve `hint()` through a hand-written `custom_hint` method.
    pub custom_hint: bool,
}

impl ErrorDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            http_code: DEFAULT_HTTP_CODE,
            payload: Vec::new(),
            custom_hint: false,
        }
    }

    pub fn with_http_code(mut self, code: u16) -> Self {
        self.http_code = if code == 0 { DEFAULT_HTTP_CODE } else { code };
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.payload.push((name.into(), ty.into()));
        self
    }

    pub fn with_custom_hint(mut self) -> Self {
        self.custom_hint = true;
        self
    }

    pub fn has_payload(&self) -> bool {
        !self.payload.is_empty()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.payload.iter().map(|(name, _)| name.as_str())
    }
}

/// All definitions of one document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionSet {
    definitions: Vec<ErrorDefinition>,
}

impl DefinitionSet {
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ErrorDefinition> {
        self.definitions.iter()
    }

    pub fn get(&self, name: &str) -> Option<&ErrorDefinition> {
        self.definitions.iter().find(|def| def.name == name)
    }

    pub fn as_slice(&self) -> &[ErrorDefinition] {
        &self.definitions
    }
}

impl TryFrom<Vec<ErrorDefinition>> for DefinitionSet {
    type Error = ParseError;

    fn try_from(definitions: Vec<ErrorDefinition>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(definitions.len());
        for def in &definitions {
            if !seen.insert(def.name.as_str()) {
                return Err(ParseError::DuplicateName(def.name.clone()));
            }
        }
        Ok(Self { definitions })
    }
}

impl<'a> IntoIterator for &'a DefinitionSet {
    type Item = &'a ErrorDefinition;
    type IntoIter = std::slice::Iter<'a, ErrorDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.iter()
    }
}

/// Parses the raw definition document.
///
/// The top level must be an object mapping error names to
/// `{"httpCode": int, "payload": {field: type}, "customHint": bool}`.
/// Every key is optional. Entry order is kept and drives output order.
pub fn parse(raw: &[u8]) -> Result<DefinitionSet, ParseError> {
    let document: OrderedEntries<RawDefinition> = serde_json::from_slice(raw)?;

    let mut definitions = Vec::with_capacity(document.0.len());
    for (name, raw_def) in document.0 {
        let http_code = match raw_def.http_code {
            None | Some(0) => DEFAULT_HTTP_CODE,
            Some(code @ 100..=999) => code,
            Some(code) => return Err(ParseError::InvalidHttpCode { name, code }),
        };
        definitions.push(ErrorDefinition {
            name,
            http_code,
            payload: raw_def.payload.map(|fields| fields.0).unwrap_or_default(),
            custom_hint: raw_def.custom_hint,
        });
    }

    DefinitionSet::try_from(definitions)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDefinition {
    #[serde(default)]
    http_code: Option<u16>,
    #[serde(default)]
    payload: Option<OrderedEntries<String>>,
    #[serde(default)]
    custom_hint: bool,
}

/// A JSON object read as a list of pairs so that key order and duplicate
/// keys survive deserialization.
struct OrderedEntries<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedEntries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedEntriesVisitor(PhantomData))
    }
}

struct OrderedEntriesVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedEntriesVisitor<V> {
    type Value = OrderedEntries<V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, V>()? {
            entries.push((key, value));
        }
        Ok(OrderedEntries(entries))
    }
}

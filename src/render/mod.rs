//! Turns one error definition into source fragments.
//!
//! Each fragment is built by a plain function over its inputs. Composite
//! fragments call into the smaller builders (payload type name, identifier
//! constant name) instead of duplicating them.

use std::{collections::HashSet, fmt};

use crate::{definition::ErrorDefinition, identifier::identifier_for};

mod error;
pub mod naming;

pub use error::RenderError;

/// The identifier constant of one error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdConstant {
    pub name: String,
    pub value: String,
}

impl fmt::Display for IdConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pub const {}: &str = \"{}\";", self.name, self.value)
    }
}

/// Everything emitted for a single definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFragment {
    pub error_name: String,
    pub id_const: IdConstant,
    pub payload: Option<String>,
    pub error_type: String,
    pub constructor: String,
}

impl GeneratedFragment {
    /// Names of the items this fragment declares at module level.
    pub fn item_names(&self) -> Vec<String> {
        let mut names = vec![
            self.error_name.clone(),
            self.id_const.name.clone(),
            naming::constructor_name(&self.error_name),
        ];
        if self.payload.is_some() {
            names.push(naming::payload_type_name(&self.error_name));
        }
        names
    }
}

impl fmt::Display for GeneratedFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(payload) = &self.payload {
            writeln!(f, "{}", payload)?;
        }
        writeln!(f, "{}", self.error_type)?;
        write!(f, "{}", self.constructor)
    }
}

/// A payload field ready to be written into a struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadField {
    pub ident: String,
    pub ty: String,
}

pub fn render(def: &ErrorDefinition) -> Result<GeneratedFragment, RenderError> {
    if !naming::is_type_name(&def.name) {
        return Err(RenderError::InvalidName(def.name.clone()));
    }
    let fields = resolve_fields(&def.payload)?;

    let id_const = IdConstant {
        name: naming::id_const_name(&def.name),
        value: identifier_for(&def.name, def.field_names()),
    };
    let payload = if fields.is_empty() {
        None
    } else {
        Some(payload_fragment(&def.name, &fields))
    };
    let error_type = error_type_fragment(&def.name, payload.is_some(), def.custom_hint);
    let constructor = constructor_fragment(&def.name, payload.is_some(), def.http_code);

    Ok(GeneratedFragment {
        error_name: def.name.clone(),
        id_const,
        payload,
        error_type,
        constructor,
    })
}

pub fn resolve_fields(payload: &[(String, String)]) -> Result<Vec<PayloadField>, RenderError> {
    let mut seen = HashSet::with_capacity(payload.len());
    let mut fields = Vec::with_capacity(payload.len());
    for (name, ty) in payload {
        let ident = naming::field_ident(name)
            .ok_or_else(|| RenderError::InvalidFieldName(name.clone()))?;
        if !seen.insert(ident.clone()) {
            return Err(RenderError::DuplicateField(name.clone()));
        }
        let ty = ty.trim();
        validate_field_type(ty).map_err(|reason| RenderError::InvalidFieldType {
            field: name.clone(),
            ty: ty.to_string(),
            reason,
        })?;
        fields.push(PayloadField {
            ident,
            ty: ty.to_string(),
        });
    }
    Ok(fields)
}

/// Field types are copied into the output verbatim. They may be any type
/// expression, but must not be able to close the surrounding struct or
/// start another field.
pub fn validate_field_type(ty: &str) -> Result<(), &'static str> {
    if ty.is_empty() {
        return Err("type is empty");
    }
    if ty.contains("//") || ty.contains("/*") {
        return Err("type contains a comment");
    }
    let mut depth: Vec<char> = Vec::new();
    let mut prev = ' ';
    for ch in ty.chars() {
        let arrow = prev == '-' && ch == '>';
        prev = ch;
        match ch {
            '>' if arrow => {}
            ';' if depth.last() == Some(&'[') => {}
            ';' | '{' | '}' | '\n' | '\r' | '"' => return Err("type contains a separator"),
            '<' | '(' | '[' => depth.push(ch),
            '>' | ')' | ']' => {
                let expected = match ch {
                    '>' => '<',
                    ')' => '(',
                    _ => '[',
                };
                if depth.pop() != Some(expected) {
                    return Err("type has unbalanced brackets");
                }
            }
            ',' if depth.is_empty() => return Err("type contains a top-level comma"),
            _ => {}
        }
    }
    if !depth.is_empty() {
        return Err("type has unbalanced brackets");
    }
    Ok(())
}

pub fn payload_fragment(error_name: &str, fields: &[PayloadField]) -> String {
    let mut out = String::new();
    out.push_str(&format!("/// Payload of [`{}`].\n", error_name));
    out.push_str("#[derive(Debug)]\n");
    out.push_str(&format!(
        "pub struct {} {{\n",
        naming::payload_type_name(error_name)
    ));
    for field in fields {
        out.push_str(&format!("    pub {}: {},\n", field.ident, field.ty));
    }
    out.push_str("}\n");
    out
}

pub fn error_type_fragment(error_name: &str, has_payload: bool, custom_hint: bool) -> String {
    let mut out = String::new();
    out.push_str("#[derive(Debug)]\n");
    out.push_str(&format!("pub struct {} {{\n", error_name));
    out.push_str("    pub base: BaseError,\n");
    if has_payload {
        out.push_str(&format!(
            "    pub payload: Box<{}>,\n",
            naming::payload_type_name(error_name)
        ));
    }
    out.push_str("}\n\n");

    out.push_str(&format!("impl fmt::Display for {} {{\n", error_name));
    out.push_str("    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {\n");
    out.push_str("        fmt::Display::fmt(&self.base, f)\n");
    out.push_str("    }\n}\n\n");

    out.push_str(&format!("impl StdError for {} {{\n", error_name));
    out.push_str("    fn source(&self) -> Option<&(dyn StdError + 'static)> {\n");
    out.push_str("        self.base.source()\n");
    out.push_str("    }\n}\n\n");

    out.push_str(&format!("impl CodedError for {} {{\n", error_name));
    out.push_str("    fn base(&self) -> &BaseError {\n        &self.base\n    }\n\n");
    out.push_str("    fn base_mut(&mut self) -> &mut BaseError {\n        &mut self.base\n    }\n\n");
    out.push_str("    fn into_base(self: Box<Self>) -> BaseError {\n        self.base\n    }\n");
    if custom_hint {
        out.push_str("\n    fn hint(&self) -> String {\n        self.custom_hint()\n    }\n");
    }
    out.push_str("}\n");
    out
}

pub fn constructor_fragment(error_name: &str, has_payload: bool, http_code: u16) -> String {
    let payload_param = if has_payload {
        format!(", payload: {}", naming::payload_type_name(error_name))
    } else {
        String::new()
    };

    let mut out = String::new();
    out.push_str(&format!(
        "pub fn {}(msg: &str, err: Option<Error>{}) -> Error {{\n",
        naming::constructor_name(error_name),
        payload_param
    ));
    out.push_str(&format!("    Error::Coded(Box::new({} {{\n", error_name));
    out.push_str(&format!(
        "        base: BaseError::new({}, {}, msg, err),\n",
        naming::id_const_name(error_name),
        http_code
    ));
    if has_payload {
        out.push_str("        payload: Box::new(payload),\n");
    }
    out.push_str("    }))\n}\n");
    out
}

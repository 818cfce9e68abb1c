//! Structured model recovered from a type definition.

use serde::Serialize;

/// One scalar property of the source type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Declared type text, verbatim (modifiers included, whitespace collapsed).
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
}

impl FieldSpec {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }

    /// Identity fields are never generated from the source; artifacts add their own.
    pub fn is_identity(&self) -> bool {
        self.name.eq_ignore_ascii_case("id")
    }

    /// Navigation properties are declared `virtual` and are not scalars.
    pub fn is_navigation(&self) -> bool {
        self.ty.contains("virtual")
    }

    /// Whether the handler assigns this field through `EnsureUtc()`.
    pub fn is_date_time(&self) -> bool {
        self.ty.contains("DateTime")
    }
}

/// The type a slice is generated for.
///
/// `fields` never contains an identity or navigation property and keeps the
/// declaration order of the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSpec {
    pub class_name: String,
    pub fields: Vec<FieldSpec>,
}

impl ModelSpec {
    /// Build a model, applying the exclusion rule to `fields`.
    pub fn new(class_name: impl Into<String>, fields: impl IntoIterator<Item = FieldSpec>) -> Self {
        Self {
            class_name: class_name.into(),
            fields: fields.into_iter().filter(|f| !is_excluded(f)).collect(),
        }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

/// Exclusion rule for extracted properties.
pub fn is_excluded(field: &FieldSpec) -> bool {
    field.is_identity() || field.is_navigation()
}

//! The schema constraint shipped with structured-output requests, plus the
//! translator that builds it from a generic nested schema description.
//!
//! Callers describe the expected reply shape as a plain `serde_json::Value`
//! (hand-written, loaded from disk, or derived via
//! [`sibyl_core::schema_util::derive_response_schema`]) and the translator
//! maps it onto the representation the generateContent API understands:
//! a fixed kind vocabulary, recursively nested `properties` and `items`, and
//! flat `required` lists.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use sibyl_core::error::SibylError;

/// Value kinds accepted by the generateContent schema representation.
///
/// The wire format spells them in upper case (`"STRING"`, `"OBJECT"`, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

impl SchemaType {
    /// Case-insensitive lookup of a kind name as it appears in a schema
    /// description (`"string"`, `"Integer"`, …).
    fn from_kind_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "string" => Some(SchemaType::String),
            "number" => Some(SchemaType::Number),
            "integer" => Some(SchemaType::Integer),
            "boolean" => Some(SchemaType::Boolean),
            "array" => Some(SchemaType::Array),
            "object" => Some(SchemaType::Object),
            _ => None,
        }
    }
}

/// One node of the response-schema constraint.
///
/// Mirrors the `Schema` message of the generateContent API: a kind, an
/// optional description, nested field schemas for objects, an element schema
/// for arrays, and the list of required field names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Nested field schemas in declaration order. Serialized as a JSON map
    /// whose key order matches the declaration order; `None` when the source
    /// declared no fields (the API distinguishes an omitted map from an
    /// empty one).
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "ordered_properties"
    )]
    pub properties: Option<Vec<(String, Schema)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

fn ordered_properties<S>(
    properties: &Option<Vec<(String, Schema)>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match properties {
        Some(fields) => {
            let mut map = serializer.serialize_map(Some(fields.len()))?;
            for (name, schema) in fields {
                map.serialize_entry(name, schema)?;
            }
            map.end()
        }
        None => serializer.serialize_none(),
    }
}

impl TryFrom<&Value> for Schema {
    type Error = SibylError;

    /// Translate a generic schema description into the wire representation.
    ///
    /// The walk is depth-first; the first node whose `type` is not one of
    /// the six recognised kind names aborts the whole translation with
    /// [`SibylError::UnsupportedSchemaType`] carrying the offending string.
    /// A node without a `type` field counts as `"object"`.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use sibyl_gemini::api_v1beta::{Schema, SchemaType};
    ///
    /// let description = json!({
    ///     "type": "object",
    ///     "properties": {"name": {"type": "string"}},
    ///     "required": ["name"],
    /// });
    /// let schema = Schema::try_from(&description).unwrap();
    /// assert_eq!(schema.schema_type, SchemaType::Object);
    /// ```
    fn try_from(node: &Value) -> Result<Self, Self::Error> {
        let schema_type = match node.get("type") {
            None => SchemaType::Object,
            Some(Value::String(name)) => SchemaType::from_kind_name(name)
                .ok_or_else(|| SibylError::UnsupportedSchemaType(name.clone()))?,
            Some(other) => return Err(SibylError::UnsupportedSchemaType(other.to_string())),
        };

        let properties = match node.get("properties").and_then(Value::as_object) {
            Some(fields) if !fields.is_empty() => {
                let mut translated = Vec::with_capacity(fields.len());
                for (name, child) in fields {
                    translated.push((name.clone(), Schema::try_from(child)?));
                }
                Some(translated)
            }
            _ => None,
        };

        let items = match node.get("items") {
            Some(child) => Some(Box::new(Schema::try_from(child)?)),
            None => None,
        };

        Ok(Self {
            schema_type,
            description: node
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_owned),
            properties,
            items,
            required: node.get("required").and_then(Value::as_array).map(|names| {
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            }),
        })
    }
}

/// Fields emitted by JSON-Schema generators that the generateContent API
/// rejects with `INVALID_ARGUMENT`.
const UNSUPPORTED_SCHEMA_FIELDS: &[&str] = &["$schema", "title", "default", "additionalProperties"];

/// Recursively strip JSON-Schema bookkeeping fields the API does not accept.
///
/// Run this over a schema derived with
/// [`sibyl_core::schema_util::derive_response_schema`] before handing it to
/// the translator.
pub fn strip_unsupported_schema_fields(value: &mut Value) {
    if let Some(object) = value.as_object_mut() {
        for field in UNSUPPORTED_SCHEMA_FIELDS {
            object.remove(*field);
        }
        for (_, child) in object.iter_mut() {
            strip_unsupported_schema_fields(child);
        }
    } else if let Some(array) = value.as_array_mut() {
        for child in array.iter_mut() {
            strip_unsupported_schema_fields(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn all_six_kinds_translate() {
        for (name, expected) in [
            ("string", SchemaType::String),
            ("number", SchemaType::Number),
            ("integer", SchemaType::Integer),
            ("boolean", SchemaType::Boolean),
            ("array", SchemaType::Array),
            ("object", SchemaType::Object),
        ] {
            let schema = Schema::try_from(&json!({ "type": name })).unwrap();
            assert_eq!(schema.schema_type, expected);
        }
    }

    #[test]
    fn kind_names_are_matched_case_insensitively() {
        let schema = Schema::try_from(&json!({ "type": "STRING" })).unwrap();
        assert_eq!(schema.schema_type, SchemaType::String);
    }

    #[test]
    fn missing_type_defaults_to_object() {
        let schema = Schema::try_from(&json!({})).unwrap();
        assert_eq!(schema.schema_type, SchemaType::Object);
    }

    #[test]
    fn nested_descriptions_translate_isomorphically() {
        let description = json!({
            "type": "object",
            "description": "an invoice",
            "properties": {
                "invoice_id": {"type": "string"},
                "total_amount": {"type": "number"},
                "line_items": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {"label": {"type": "string"}},
                    },
                },
            },
            "required": ["invoice_id", "total_amount"],
        });

        let schema = Schema::try_from(&description).unwrap();
        assert_eq!(schema.description.as_deref(), Some("an invoice"));
        assert_eq!(
            schema.required,
            Some(vec!["invoice_id".to_string(), "total_amount".to_string()])
        );

        let fields = schema.properties.as_ref().unwrap();
        let names: Vec<&str> = fields.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["invoice_id", "total_amount", "line_items"]);

        let (_, line_items) = &fields[2];
        assert_eq!(line_items.schema_type, SchemaType::Array);
        let element = line_items.items.as_ref().unwrap();
        assert_eq!(element.schema_type, SchemaType::Object);
        let element_fields = element.properties.as_ref().unwrap();
        assert_eq!(element_fields[0].0, "label");
    }

    #[test]
    fn property_order_survives_serialization() {
        let description = json!({
            "type": "object",
            "properties": {
                "zulu": {"type": "string"},
                "alpha": {"type": "integer"},
                "mike": {"type": "boolean"},
            },
        });

        let schema = Schema::try_from(&description).unwrap();
        let serialized = serde_json::to_value(&schema).unwrap();
        let keys: Vec<&String> = serialized["properties"]
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(keys, ["zulu", "alpha", "mike"]);
        assert_eq!(serialized["type"], "OBJECT");
        assert_eq!(serialized["properties"]["alpha"]["type"], "INTEGER");
    }

    #[test]
    fn unrecognized_kind_fails_and_names_the_value() {
        let err = Schema::try_from(&json!({ "type": "currency" })).unwrap_err();
        assert!(err.to_string().contains("currency"));

        let err = Schema::try_from(&json!({ "type": "null" })).unwrap_err();
        assert!(err.to_string().contains("null"));
    }

    #[test]
    fn unrecognized_kind_in_a_nested_property_fails_the_whole_translation() {
        let description = json!({
            "type": "object",
            "properties": {
                "amount": {"type": "currency"},
            },
        });
        let err = Schema::try_from(&description).unwrap_err();
        assert!(err.to_string().contains("currency"));
    }

    #[test]
    fn empty_or_absent_properties_translate_to_none() {
        let schema = Schema::try_from(&json!({ "type": "object" })).unwrap();
        assert!(schema.properties.is_none());

        let schema = Schema::try_from(&json!({ "type": "object", "properties": {} })).unwrap();
        assert!(schema.properties.is_none());

        let serialized = serde_json::to_value(&schema).unwrap();
        assert!(serialized.get("properties").is_none());
    }

    #[test]
    fn strip_removes_generator_bookkeeping_recursively() {
        let mut schema = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "Invoice",
            "type": "object",
            "additionalProperties": false,
            "properties": {
                "invoice_id": {"type": "string", "default": ""},
            },
        });
        strip_unsupported_schema_fields(&mut schema);

        assert!(schema.get("$schema").is_none());
        assert!(schema.get("title").is_none());
        assert!(schema.get("additionalProperties").is_none());
        assert!(schema["properties"]["invoice_id"].get("default").is_none());
        assert_eq!(schema["properties"]["invoice_id"]["type"], "string");
    }
}

//! Data model for RDAP autnum responses
//!
//! Registries disagree wildly about which parts of an autnum record they
//! populate, so every field here is optional or defaults to empty and
//! unknown JSON fields are ignored. The jCard (`vcardArray`) payload is
//! kept as raw JSON and parsed on demand, since its array-of-arrays shape
//! does not map onto a plain serde struct.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An RDAP autnum record: the registry's answer for one AS number.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutnumRecord {
    /// Registry-assigned name of the allocation (often a technical label)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Registry handle identifying the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Parties associated with the autnum, in registry-supplied order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<Entity>,
    /// Free-text remarks, in registry-supplied order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remarks: Vec<Remark>,
}

/// A party (organization, person, role-holder) attached to an autnum.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entity {
    /// Raw jCard payload, if the registry supplied one
    #[serde(
        rename = "vcardArray",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub vcard_array: Option<Value>,
}

impl Entity {
    /// Parse this entity's jCard payload into a structured [`VCard`].
    ///
    /// Returns `None` when the entity carries no `vcardArray` or the
    /// payload is not even superficially jCard-shaped.
    pub fn vcard(&self) -> Option<VCard> {
        VCard::from_jcard(self.vcard_array.as_ref()?)
    }
}

/// A registry-authored remark: an optional title plus description lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Remark {
    /// Remark title, e.g. `"description"` in APNIC records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Description lines, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,
}

/// A parsed jCard: an ordered sequence of properties.
///
/// Property names are not unique; a vCard may carry several `fn` or
/// `kind` properties and consumers decide which occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct VCard {
    /// Properties in declaration order
    pub properties: Vec<Property>,
}

/// One jCard property: a name and its string values.
#[derive(Debug, Clone)]
pub struct Property {
    /// Property name, e.g. `fn`, `kind`, `adr`
    pub name: String,
    /// String values in declaration order; nested arrays are flattened
    pub values: Vec<String>,
}

impl VCard {
    /// Parse a jCard JSON value: `["vcard", [[name, params, type, value...], ...]]`.
    ///
    /// Malformed property entries are skipped rather than failing the
    /// whole card; registries routinely emit partial jCards.
    pub fn from_jcard(value: &Value) -> Option<VCard> {
        let items = value.as_array()?;
        let entries = items.get(1)?.as_array()?;

        let mut properties = Vec::new();
        for entry in entries {
            let Some(fields) = entry.as_array() else {
                continue;
            };
            let Some(name) = fields.first().and_then(Value::as_str) else {
                continue;
            };

            // Values occupy the slots after [name, params, type]. A value
            // slot is either a plain string or an array of components
            // (e.g. structured "adr"), which we flatten one level.
            let mut values = Vec::new();
            for field in fields.iter().skip(3) {
                match field {
                    Value::String(text) => values.push(text.clone()),
                    Value::Array(parts) => {
                        values.extend(parts.iter().filter_map(Value::as_str).map(String::from));
                    }
                    _ => {}
                }
            }

            properties.push(Property {
                name: name.to_string(),
                values,
            });
        }

        Some(VCard { properties })
    }
}

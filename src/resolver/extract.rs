//! Organization name extraction from autnum records
//!
//! Registries encode "who operates this AS" in at least three different
//! places: a vCard on an organization entity (RIPE, ARIN), a remark
//! titled "description" (APNIC), or nowhere structured at all, leaving
//! only the record's name/handle. Extraction walks those sources in
//! decreasing order of reliability and returns the first hit.

use crate::rdap::record::{AutnumRecord, Remark, VCard};

/// Maximum display-name length in Unicode code points
pub const MAX_NAME_LEN: usize = 40;

/// Extract the best-effort organization name from an autnum record.
///
/// Never fails; a record with no extractable name yields an empty
/// string. Whatever source wins is passed through [`shorten_name`].
pub fn extract_name(record: &AutnumRecord) -> String {
    // An explicit organization-typed contact is the most reliable source.
    for entity in &record.entities {
        if let Some(vcard) = entity.vcard() {
            if let Some(name) = org_name_from_vcard(&vcard) {
                return shorten_name(&name);
            }
        }
    }

    // APNIC-style records carry the name in a remark titled "description".
    for remark in &record.remarks {
        let titled = remark
            .title
            .as_deref()
            .is_some_and(|t| t.trim().eq_ignore_ascii_case("description"));
        if titled {
            if let Some(line) = first_description_line(remark) {
                return shorten_name(line);
            }
        }
    }

    // Any remark at all, for registries that omit titles.
    for remark in &record.remarks {
        if let Some(line) = first_description_line(remark) {
            return shorten_name(line);
        }
    }

    // Last resorts: name and handle are frequently allocation labels
    // rather than organization names.
    if let Some(name) = non_empty_trimmed(record.name.as_deref()) {
        return shorten_name(name);
    }
    if let Some(handle) = non_empty_trimmed(record.handle.as_deref()) {
        return shorten_name(handle);
    }

    String::new()
}

/// Trim surrounding whitespace and cap the name at [`MAX_NAME_LEN`]
/// Unicode code points.
///
/// Truncation keeps exactly the first 40 code points as-is; whitespace
/// the cut may expose is left alone. No ellipsis is added.
pub fn shorten_name(text: &str) -> String {
    if text.chars().count() > MAX_NAME_LEN {
        return text.chars().take(MAX_NAME_LEN).collect();
    }
    text.trim().to_string()
}

/// Formatted name of an organization vCard, or `None` when the card does
/// not represent an organization or carries no usable `fn` value.
fn org_name_from_vcard(vcard: &VCard) -> Option<String> {
    // A card is an organization when some "kind" property's last value
    // contains "org" (covers "org" and "organization" spellings).
    let is_organization = vcard.properties.iter().any(|property| {
        property.name.eq_ignore_ascii_case("kind")
            && property
                .values
                .last()
                .is_some_and(|kind| kind.trim().to_lowercase().contains("org"))
    });
    if !is_organization {
        return None;
    }

    // Last-declared wins: take the last non-empty value of the first "fn"
    // property that has one.
    for property in &vcard.properties {
        if !property.name.eq_ignore_ascii_case("fn") {
            continue;
        }
        if let Some(name) = property
            .values
            .iter()
            .rev()
            .map(|value| value.trim())
            .find(|value| !value.is_empty())
        {
            return Some(name.to_string());
        }
    }

    None
}

/// First description line of a remark, trimmed, if non-empty.
fn first_description_line(remark: &Remark) -> Option<&str> {
    remark
        .description
        .first()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
}

/// Trim an optional field and drop it when empty.
fn non_empty_trimmed(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|value| !value.is_empty())
}

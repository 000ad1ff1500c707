// src/domain/property.rs

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Image shown for properties that have no photos yet.
pub const PLACEHOLDER_IMAGE: &str = "/logo.png";

/// Staff roles a property can carry, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaffRole {
    Vp,
    Rem,
    Rsd,
    Ds,
    Pm,
}

impl StaffRole {
    pub const ALL: [StaffRole; 5] = [
        StaffRole::Vp,
        StaffRole::Rem,
        StaffRole::Rsd,
        StaffRole::Ds,
        StaffRole::Pm,
    ];

    /// Key used for this role both in the store and in the canonical output.
    pub fn key(self) -> &'static str {
        match self {
            StaffRole::Vp => "vp",
            StaffRole::Rem => "rem",
            StaffRole::Rsd => "rsd",
            StaffRole::Ds => "ds",
            StaffRole::Pm => "pm",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StaffMember {
    pub name: String,
    pub email: String,
}

/// Every role is always present; struct field order is the serialized order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Staff {
    pub vp: StaffMember,
    pub rem: StaffMember,
    pub rsd: StaffMember,
    pub ds: StaffMember,
    pub pm: StaffMember,
}

impl Staff {
    pub fn get(&self, role: StaffRole) -> &StaffMember {
        match role {
            StaffRole::Vp => &self.vp,
            StaffRole::Rem => &self.rem,
            StaffRole::Rsd => &self.rsd,
            StaffRole::Ds => &self.ds,
            StaffRole::Pm => &self.pm,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (StaffRole, &StaffMember)> + '_ {
        StaffRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub manager: String,
    pub phone: String,
    pub email: String,
}

/// Canonical, fully defaulted property handed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    pub address: String,
    pub description: String,
    pub units: String,
    pub year_built: String,
    pub renovated: String,
    pub amenities: Vec<String>,
    pub contact: Contact,
    pub staff: Staff,
    pub images: Vec<String>,
}

// record
//  ├── name, address, description, phone
//  ├── unit, yearBuilt, renovated      (strings or numbers)
//  ├── amenities, images               (arrays or index-keyed objects)
//  └── vp / rem / rsd / ds / pm
//       ├── name
//       └── email

/// A property record as the store hands it back. Nothing is guaranteed present
/// and any field with an unexpected shape is treated as missing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProperty {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub year_built: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub renovated: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub amenities: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub images: Vec<String>,

    #[serde(default, deserialize_with = "lenient_member")]
    pub vp: Option<RawStaffMember>,
    #[serde(default, deserialize_with = "lenient_member")]
    pub rem: Option<RawStaffMember>,
    #[serde(default, deserialize_with = "lenient_member")]
    pub rsd: Option<RawStaffMember>,
    #[serde(default, deserialize_with = "lenient_member")]
    pub ds: Option<RawStaffMember>,
    #[serde(default, deserialize_with = "lenient_member")]
    pub pm: Option<RawStaffMember>,
}

#[derive(Debug, Default, Clone)]
pub struct RawStaffMember {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl RawProperty {
    /// Reads a raw record out of a JSON value. Anything that is not an object
    /// yields an empty record.
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return RawProperty::default();
        }

        // Every field deserializer accepts any JSON, so an object cannot fail here.
        RawProperty::deserialize(value).unwrap_or_default()
    }

    fn member(&self, role: StaffRole) -> Option<&RawStaffMember> {
        match role {
            StaffRole::Vp => self.vp.as_ref(),
            StaffRole::Rem => self.rem.as_ref(),
            StaffRole::Rsd => self.rsd.as_ref(),
            StaffRole::Ds => self.ds.as_ref(),
            StaffRole::Pm => self.pm.as_ref(),
        }
    }
}

impl Property {
    /// Fills every canonical field from a raw record.
    ///
    /// `id_hint` becomes the id. `name_hint` is a slug that is Title-Cased and
    /// used only when the record carries no name of its own. Role records are
    /// defaulted field by field, so a role with a name but no email keeps its name.
    pub fn from_raw(raw: &RawProperty, id_hint: &str, name_hint: &str) -> Self {
        let text = |field: &Option<String>| field.clone().unwrap_or_default();

        let member = |role: StaffRole| {
            raw.member(role)
                .map(|m| StaffMember {
                    name: text(&m.name),
                    email: text(&m.email),
                })
                .unwrap_or_default()
        };

        let staff = Staff {
            vp: member(StaffRole::Vp),
            rem: member(StaffRole::Rem),
            rsd: member(StaffRole::Rsd),
            ds: member(StaffRole::Ds),
            pm: member(StaffRole::Pm),
        };

        let contact = Contact {
            manager: staff.pm.name.clone(),
            phone: text(&raw.phone),
            email: staff.pm.email.clone(),
        };

        let images = if raw.images.is_empty() {
            vec![PLACEHOLDER_IMAGE.to_string()]
        } else {
            raw.images.clone()
        };

        Property {
            id: id_hint.to_string(),
            name: raw
                .name
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| title_case_slug(name_hint)),
            address: text(&raw.address),
            description: text(&raw.description),
            units: text(&raw.unit),
            year_built: text(&raw.year_built),
            renovated: text(&raw.renovated),
            amenities: raw.amenities.clone(),
            contact,
            staff,
            images,
        }
    }
}

/// Normalizes one raw store record into a canonical `Property`. Never fails.
pub fn normalize(record: &Value, id_hint: &str, name_hint: &str) -> Property {
    Property::from_raw(&RawProperty::from_value(record), id_hint, name_hint)
}

/// "parkside-at-tinton-falls" -> "Parkside At Tinton Falls"
pub fn title_case_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_string(&value))
}

/// Arrays come back either as JSON arrays or as objects keyed "0", "1", ...
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| {
                (a.parse::<u64>().ok(), a.as_str()).cmp(&(b.parse::<u64>().ok(), b.as_str()))
            });
            entries.into_iter().map(|(_, v)| v).collect()
        }
        _ => Vec::new(),
    };

    Ok(items.iter().filter_map(scalar_string).collect())
}

fn lenient_member<'de, D>(deserializer: D) -> Result<Option<RawStaffMember>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    Ok(value.as_object().map(|obj| RawStaffMember {
        name: obj.get("name").and_then(scalar_string),
        email: obj.get("email").and_then(scalar_string),
    }))
}

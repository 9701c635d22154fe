// ============================================================================
// FORM DATA - Editable booking fields and their wire mapping
// ============================================================================
// FIELDS is the single source of truth for how a form field is named inside
// the UI (input `name`, camelCase) and on the wire (snake_case).
// ============================================================================

use serde_json::{Map, Value};
use thiserror::Error;

use super::HotelId;
use crate::utils::{to_camel_case, to_snake_case};

/// Request body sent on create/update, keys in server convention.
pub type WirePayload = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    HotelId,
    NoOfRooms,
    CheckInDate,
    CheckOutDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: FormField,
    pub internal: &'static str,
    pub wire: &'static str,
}

pub static FIELDS: [FieldSpec; 4] = [
    FieldSpec { field: FormField::HotelId, internal: "hotelId", wire: "hotel_id" },
    FieldSpec { field: FormField::NoOfRooms, internal: "noOfRooms", wire: "no_of_rooms" },
    FieldSpec { field: FormField::CheckInDate, internal: "checkInDate", wire: "check_in_date" },
    FieldSpec { field: FormField::CheckOutDate, internal: "checkOutDate", wire: "check_out_date" },
];

impl FormField {
    pub fn spec(self) -> &'static FieldSpec {
        // Same order as FIELDS
        match self {
            FormField::HotelId => &FIELDS[0],
            FormField::NoOfRooms => &FIELDS[1],
            FormField::CheckInDate => &FIELDS[2],
            FormField::CheckOutDate => &FIELDS[3],
        }
    }

    /// Input `name` attribute.
    pub fn name(self) -> &'static str {
        self.spec().internal
    }

    /// Resolve a key written in any casing (`checkInDate`, `check_in_date`, ...).
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = to_camel_case(key);
        FIELDS
            .iter()
            .find(|spec| spec.internal == normalized)
            .map(|spec| spec.field)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormInputError {
    #[error("unknown form field '{0}'")]
    UnknownField(String),

    #[error("'{value}' is not a valid value for {field}")]
    InvalidValue { field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormData {
    pub hotel_id: HotelId,
    pub no_of_rooms: u32,
    pub check_in_date: String,
    pub check_out_date: String,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            hotel_id: 0,
            no_of_rooms: 1,
            check_in_date: String::new(),
            check_out_date: String::new(),
        }
    }
}

impl FormData {
    pub fn value(&self, field: FormField) -> Value {
        match field {
            FormField::HotelId => Value::from(self.hotel_id),
            FormField::NoOfRooms => Value::from(self.no_of_rooms),
            FormField::CheckInDate => Value::from(self.check_in_date.clone()),
            FormField::CheckOutDate => Value::from(self.check_out_date.clone()),
        }
    }

    /// Current value rendered into the matching input.
    pub fn input_value(&self, field: FormField) -> String {
        match field {
            FormField::HotelId => self.hotel_id.to_string(),
            FormField::NoOfRooms => self.no_of_rooms.to_string(),
            FormField::CheckInDate => self.check_in_date.clone(),
            FormField::CheckOutDate => self.check_out_date.clone(),
        }
    }

    pub fn set_value(&mut self, field: FormField, value: &Value) -> Result<(), FormInputError> {
        let invalid = || FormInputError::InvalidValue {
            field: field.name(),
            value: value.to_string(),
        };

        match field {
            FormField::HotelId => {
                self.hotel_id = value_as_u64(value).ok_or_else(invalid)?;
            }
            FormField::NoOfRooms => {
                self.no_of_rooms = value_as_u64(value)
                    .and_then(|n| u32::try_from(n).ok())
                    .ok_or_else(invalid)?;
            }
            FormField::CheckInDate => {
                self.check_in_date = value.as_str().ok_or_else(invalid)?.to_string();
            }
            FormField::CheckOutDate => {
                self.check_out_date = value.as_str().ok_or_else(invalid)?.to_string();
            }
        }
        Ok(())
    }

    /// Apply an edit coming from an input element (`name`, raw string value).
    pub fn apply_input(&mut self, name: &str, raw: &str) -> Result<(), FormInputError> {
        let field = FormField::from_key(name)
            .ok_or_else(|| FormInputError::UnknownField(name.to_string()))?;
        self.set_value(field, &Value::from(raw))
    }

    /// snake_case payload for create/update requests.
    pub fn to_wire(&self) -> WirePayload {
        FIELDS
            .iter()
            .map(|spec| {
                debug_assert_eq!(to_snake_case(spec.internal), spec.wire);
                (spec.wire.to_string(), self.value(spec.field))
            })
            .collect()
    }

    /// Seed a form from a server object. Unknown keys (id, status, hotel...)
    /// are skipped, unusable values keep the default.
    pub fn from_wire(object: &Map<String, Value>) -> Self {
        let mut form = FormData::default();
        for (key, value) in object {
            let Some(field) = FormField::from_key(key) else {
                continue;
            };
            if let Err(e) = form.set_value(field, value) {
                log::warn!("⚠️ Ignoring booking field '{}': {}", key, e);
            }
        }
        form
    }
}

fn value_as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => parse_whole_number(s.trim()),
        _ => None,
    }
}

/// Number inputs report whole numbers as `3`, `3.0` or `1e1`.
fn parse_whole_number(raw: &str) -> Option<u64> {
    if let Ok(n) = raw.parse::<u64>() {
        return Some(n);
    }
    let n = raw.parse::<f64>().ok()?;
    if n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n < u64::MAX as f64 {
        Some(n as u64)
    } else {
        None
    }
}

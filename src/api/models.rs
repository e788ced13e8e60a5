//! Wire models for the contacts API.
//!
//! Every JSON response uses one of two envelopes:
//!
//! ```json
//! {"message": "OK", "data": {"id": 1, "name": "John Doe", "phone": "+628912345678", "email": "johndoe@example.com"}}
//! {"error": "data not found"}
//! ```
//!
//! `data` is either a single [`Contact`] or the full list, in insertion order.

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A single contact record.
///
/// Nothing about a contact is enforced: identifiers may repeat and any field may
/// be empty. Missing or `null` fields keep their zero value, so `{}` is a valid
/// contact.
///
/// Decoding is lenient about keys: names match case-insensitively (`"ID"` sets
/// `id`), a repeated key overwrites the earlier value, and unknown keys are
/// skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContactField {
    Id,
    Name,
    Phone,
    Email,
}

impl ContactField {
    fn from_key(key: &str) -> Option<Self> {
        [
            ("id", ContactField::Id),
            ("name", ContactField::Name),
            ("phone", ContactField::Phone),
            ("email", ContactField::Email),
        ]
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, field)| field)
    }
}

struct ContactVisitor;

impl<'de> Visitor<'de> for ContactVisitor {
    type Value = Contact;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a contact object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Contact, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut contact = Contact::default();

        // Keys are applied in order; `null` leaves the current value alone.
        while let Some(key) = map.next_key::<String>()? {
            match ContactField::from_key(&key) {
                Some(ContactField::Id) => {
                    if let Some(id) = map.next_value::<Option<i64>>()? {
                        contact.id = id;
                    }
                }
                Some(ContactField::Name) => {
                    if let Some(name) = map.next_value::<Option<String>>()? {
                        contact.name = name;
                    }
                }
                Some(ContactField::Phone) => {
                    if let Some(phone) = map.next_value::<Option<String>>()? {
                        contact.phone = phone;
                    }
                }
                Some(ContactField::Email) => {
                    if let Some(email) = map.next_value::<Option<String>>()? {
                        contact.email = email;
                    }
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(contact)
    }
}

impl<'de> Deserialize<'de> for Contact {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ContactVisitor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseMessage {
    #[serde(rename = "OK")]
    Ok,
}

/// Success envelope shared by list, create and lookup.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DataResponse<T> {
    pub message: ResponseMessage,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            message: ResponseMessage::Ok,
            data,
        }
    }
}

pub type ContactsResponse = DataResponse<Vec<Contact>>;
pub type ContactResponse = DataResponse<Contact>;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn contact_missing_fields_default_to_zero() {
        let contact: Contact = serde_json::from_value(json!({"name": "Ann"})).unwrap();
        assert_eq!(contact.id, 0);
        assert_eq!(contact.name, "Ann");
        assert!(contact.phone.is_empty());
        assert!(contact.email.is_empty());
    }

    #[test]
    fn contact_keys_match_case_insensitively() {
        let contact: Contact =
            serde_json::from_str(r#"{"ID":7,"Name":"Ann","PHONE":"+62","eMail":"a@b.c"}"#)
                .unwrap();
        assert_eq!(contact.id, 7);
        assert_eq!(contact.name, "Ann");
        assert_eq!(contact.phone, "+62");
        assert_eq!(contact.email, "a@b.c");
    }

    #[test]
    fn contact_repeated_key_last_value_wins() {
        let contact: Contact = serde_json::from_str(r#"{"id":1,"id":2,"ID":3}"#).unwrap();
        assert_eq!(contact.id, 3);

        let contact: Contact = serde_json::from_str(r#"{"id":5,"id":null}"#).unwrap();
        assert_eq!(contact.id, 5);
    }

    #[test]
    fn contact_rejects_non_object() {
        assert!(serde_json::from_str::<Contact>("[1,2]").is_err());
        assert!(serde_json::from_str::<Contact>(r#""contact""#).is_err());
        assert!(serde_json::from_str::<Contact>(r#"{"name":3}"#).is_err());
    }

    #[test]
    fn envelope_serializes_ok_message() {
        let body = serde_json::to_value(ContactResponse::ok(Contact::default())).unwrap();
        assert_eq!(body["message"], "OK");
        assert_eq!(body["data"]["id"], 0);
    }
}

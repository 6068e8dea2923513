use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PetType {
    pub name: String,
}

impl PetType {
    pub fn new(name: impl Into<String>) -> Self {
        PetType { name: name.into() }
    }
}

/// An animal registered with the clinic.
///
/// Identity is the `id`: two `Pet` values are equal when their ids are, whatever
/// their other fields say. The owner link is a back-reference by id and is never
/// serialized; `Owner::from_document` restores it.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Pet {
    #[serde(rename = "_id", default = "ObjectId::new")]
    id: ObjectId,
    #[serde(default)]
    name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    birth_date: Option<NaiveDate>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pet_type: Option<PetType>,
    #[serde(skip)]
    owner_id: Option<ObjectId>,
}

impl Pet {
    pub fn new() -> Self {
        Pet {
            id: ObjectId::new(),
            name: String::new(),
            birth_date: None,
            pet_type: None,
            owner_id: None,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    pub fn set_birth_date(&mut self, birth_date: Option<NaiveDate>) {
        self.birth_date = birth_date;
    }

    pub fn pet_type(&self) -> Option<&PetType> {
        self.pet_type.as_ref()
    }

    pub fn set_pet_type(&mut self, pet_type: Option<PetType>) {
        self.pet_type = pet_type;
    }

    pub fn owner_id(&self) -> Option<ObjectId> {
        self.owner_id
    }

    pub(crate) fn set_owner_id(&mut self, owner_id: ObjectId) {
        self.owner_id = Some(owner_id);
    }
}

impl Default for Pet {
    fn default() -> Self {
        Pet::new()
    }
}

impl PartialEq for Pet {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Pet {}

impl Hash for Pet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let birth_date = self.birth_date.map(|d| d.to_string()).unwrap_or_default();
        let pet_type = self.pet_type.as_ref().map(|t| t.name.as_str()).unwrap_or_default();
        write!(
            f,
            "[Pet@{} name = '{}', birthDate = '{}', type = '{}']",
            self.id.to_hex(), self.name, birth_date, pet_type
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_getters_and_setters() {
        let mut pet = Pet::new();
        pet.set_name("Buddy");
        pet.set_birth_date(NaiveDate::from_ymd_opt(2020, 5, 17));
        pet.set_pet_type(Some(PetType::new("dog")));

        assert_eq!(pet.name(), "Buddy");
        assert_eq!(pet.birth_date(), NaiveDate::from_ymd_opt(2020, 5, 17));
        assert_eq!(pet.pet_type().map(|t| t.name.as_str()), Some("dog"));
        assert_eq!(pet.owner_id(), None);
    }

    #[test]
    fn test_new_pet_is_empty() {
        let pet = Pet::default();
        assert!(pet.name().is_empty());
        assert!(pet.birth_date().is_none());
        assert!(pet.pet_type().is_none());
        assert!(pet.owner_id().is_none());
    }

    #[test]
    fn test_identity_ignores_mutable_fields() {
        let mut pet = Pet::new();
        pet.set_name("Buddy");
        let mut renamed = pet.clone();
        renamed.set_name("Max");

        assert_eq!(pet, renamed);
        assert_ne!(pet, Pet::new());

        let mut set = HashSet::new();
        set.insert(pet);
        assert!(set.contains(&renamed));
    }

    #[test]
    fn test_to_string() {
        let mut pet = Pet::new();
        pet.set_name("Buddy");
        pet.set_birth_date(NaiveDate::from_ymd_opt(2020, 5, 17));
        pet.set_pet_type(Some(PetType::new("dog")));

        let rendered = pet.to_string();
        assert!(rendered.starts_with(&format!("[Pet@{}", pet.id().to_hex())));
        assert!(rendered.contains("name = 'Buddy'"));
        assert!(rendered.contains("birthDate = '2020-05-17'"));
        assert!(rendered.contains("type = 'dog'"));
    }

    #[test]
    fn test_owner_link_is_not_serialized() {
        let mut pet = Pet::new();
        pet.set_name("Buddy");
        pet.set_owner_id(ObjectId::new());

        let json = serde_json::to_value(&pet).unwrap();
        assert_eq!(json["name"], "Buddy");
        assert!(json.get("owner_id").is_none());
        assert!(json.get("type").is_none());
    }
}

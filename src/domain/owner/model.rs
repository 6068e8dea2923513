use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use mongodb::bson::{from_document, oid::ObjectId, to_document, Document};
use serde::{Deserialize, Serialize};

use crate::domain::pet::model::Pet;
use crate::utils::config::{AppConfig, PetSort};
use crate::utils::errors::ModelError;

/// A clinic customer and the pets registered under them.
///
/// The pet set is created on first use. Every pet in it points back at this
/// owner through `Pet::owner_id`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Owner {
    #[serde(rename = "_id", default = "ObjectId::new")]
    id: ObjectId,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    telephone: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pets: Option<HashSet<Pet>>,
}

impl Owner {
    pub fn new() -> Self {
        Owner {
            id: ObjectId::new(),
            first_name: String::new(),
            last_name: String::new(),
            address: String::new(),
            city: String::new(),
            telephone: String::new(),
            pets: None,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    pub fn telephone(&self) -> &str {
        &self.telephone
    }

    pub fn set_telephone(&mut self, telephone: impl Into<String>) {
        self.telephone = telephone.into();
    }

    fn pets_internal(&mut self) -> &mut HashSet<Pet> {
        self.pets.get_or_insert_with(HashSet::new)
    }

    /// Pets in the process-wide order (see `AppConfig::pet_sort`).
    pub fn pets(&self) -> Vec<&Pet> {
        self.pets_sorted_by(AppConfig::global().pet_sort)
    }

    pub fn pets_sorted_by(&self, sort: PetSort) -> Vec<&Pet> {
        let mut pets: Vec<&Pet> = self.pets.iter().flatten().collect();
        pets.sort_by(|a, b| compare_pets(a, b, sort));
        pets
    }

    /// Adopts `pet`: links it back to this owner and stores it, replacing a pet
    /// with the same id.
    pub fn add_pet(&mut self, mut pet: Pet) {
        let owner_id = self.id;
        if let Some(previous) = pet.owner_id().filter(|id| *id != owner_id) {
            log::debug!("pet {} moves from owner {} to {}", pet.id(), previous, owner_id);
        }
        pet.set_owner_id(owner_id);
        self.pets_internal().replace(pet);
    }

    /// Case-insensitive lookup by name. When several pets match, the first in
    /// the default ordering wins, which makes the pick stable across calls.
    pub fn pet(&self, name: &str) -> Option<&Pet> {
        let wanted = name.to_lowercase();
        self.pets_sorted_by(PetSort::default())
            .into_iter()
            .find(|pet| pet.name().to_lowercase() == wanted)
    }

    pub fn to_document(&self) -> Result<Document, ModelError> {
        Ok(to_document(self)?)
    }

    pub fn from_document(document: Document) -> Result<Owner, ModelError> {
        let mut owner: Owner = from_document(document)?;
        let owner_id = owner.id;

        // Back-references are not stored; rebuild them from the enclosing owner.
        if let Some(pets) = owner.pets.take() {
            log::debug!("relinking {} pets to owner {}", pets.len(), owner_id);
            let relinked = pets
                .into_iter()
                .map(|mut pet| {
                    pet.set_owner_id(owner_id);
                    pet
                })
                .collect();
            owner.pets = Some(relinked);
        }

        Ok(owner)
    }
}

fn compare_pets(a: &Pet, b: &Pet, sort: PetSort) -> Ordering {
    let by_name = if sort.ignore_case {
        a.name().to_lowercase().cmp(&b.name().to_lowercase())
    } else {
        a.name().cmp(b.name())
    };
    let ordering = by_name.then_with(|| a.id().cmp(&b.id()));

    if sort.ascending {
        ordering
    } else {
        ordering.reverse()
    }
}

impl Default for Owner {
    fn default() -> Self {
        Owner::new()
    }
}

impl PartialEq for Owner {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Owner {}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Owner@{id} id = '{id}', lastName = '{}', firstName = '{}', address = '{}', city = '{}', telephone = '{}']",
            self.last_name,
            self.first_name,
            self.address,
            self.city,
            self.telephone,
            id = self.id.to_hex(),
        )
    }
}

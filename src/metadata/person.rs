use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::macros::text_accessors;
use super::MultiString;

/// A person identified by name, with an optional identifier and organization
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    last_name: String,
    first_name: String,
    middle: String,
    id: String,
    id_type: String,
    organization: String,
}

impl Person {
    /// Create a person with every field empty
    pub fn new() -> Self {
        Self::default()
    }

    text_accessors! {
        last_name, set_last_name => "last (family) name";
        first_name, set_first_name => "first (given) name";
        middle, set_middle => "middle name or initials";
        id, set_id => "identifier, such as an ORCID";
        id_type, set_id_type => "type of the identifier";
        organization, set_organization => "organization";
    }

    /// Names of required fields that are not assigned
    pub fn invalid_field_names(&self) -> BTreeSet<String> {
        let mut invalid = BTreeSet::new();
        if self.last_name.is_empty() {
            invalid.insert("lastName".to_string());
        }
        if self.first_name.is_empty() {
            invalid.insert("firstName".to_string());
        }
        invalid
    }

    /// True if both the last and first names are assigned
    pub fn is_valid(&self) -> bool {
        self.invalid_field_names().is_empty()
    }

    /// The name as "First Middle Last", skipping empty parts
    pub fn full_name(&self) -> String {
        [self.first_name.as_str(), self.middle.as_str(), self.last_name.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A principal investigator: a person with contact information
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Investigator {
    person: Person,
    streets: MultiString,
    city: String,
    region: String,
    zip_code: String,
    country: String,
    phone: String,
    email: String,
}

impl Investigator {
    /// Create an investigator with every field empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an investigator for the given person with no contact information
    pub fn from_person(person: Person) -> Self {
        Self {
            person,
            ..Self::default()
        }
    }

    /// The name and organization
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Mutable access to the name and organization
    pub fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    /// Street address lines
    pub fn streets(&self) -> &MultiString {
        &self.streets
    }

    /// Replace the street address lines
    pub fn set_streets(&mut self, streets: MultiString) {
        self.streets = streets;
    }

    text_accessors! {
        city, set_city => "city";
        region, set_region => "region, state or province";
        zip_code, set_zip_code => "postal code";
        country, set_country => "country";
        phone, set_phone => "telephone number";
        email, set_email => "e-mail address";
    }

    /// Names of required fields that are not assigned
    pub fn invalid_field_names(&self) -> BTreeSet<String> {
        self.person.invalid_field_names()
    }

    /// True if the person is valid
    pub fn is_valid(&self) -> bool {
        self.invalid_field_names().is_empty()
    }
}

/// The person submitting a dataset; an investigator that must be reachable
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Submitter(Investigator);

impl Submitter {
    /// Create a submitter with every field empty
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying investigator fields
    pub fn investigator(&self) -> &Investigator {
        &self.0
    }

    /// Mutable access to the underlying investigator fields
    pub fn investigator_mut(&mut self) -> &mut Investigator {
        &mut self.0
    }

    /// Names of required fields that are not assigned; in addition to the
    /// name, a submitter needs a street address, phone and e-mail.
    pub fn invalid_field_names(&self) -> BTreeSet<String> {
        let mut invalid = self.0.invalid_field_names();
        if self.0.streets.is_empty() {
            invalid.insert("streets".to_string());
        }
        if self.0.phone.is_empty() {
            invalid.insert("phone".to_string());
        }
        if self.0.email.is_empty() {
            invalid.insert("email".to_string());
        }
        invalid
    }

    /// True if no required field is missing
    pub fn is_valid(&self) -> bool {
        self.invalid_field_names().is_empty()
    }
}

impl From<Investigator> for Submitter {
    fn from(investigator: Investigator) -> Self {
        Self(investigator)
    }
}

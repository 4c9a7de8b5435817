// Address Sub-form - controlled editor for one shipping address
//
// The sub-form never keeps its own copy of the address. Every edit produces a
// complete replacement record that the owning form applies. The only state it
// owns is whether the section is collapsed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::product::errors::FieldPathError;
use crate::product::validation::ErrorMap;

pub const COUNTRIES: &[&str] = &[
    "United States",
    "Canada",
    "United Kingdom",
    "Australia",
    "Germany",
    "France",
    "Other",
];

pub const US_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA",
    "HI", "ID", "IL", "IN", "IA", "KS", "KY", "LA", "ME", "MD",
    "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC",
    "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV", "WI", "WY",
];

/// A full shipping address. `company` and `street2` may be left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    pub name: String,
    pub company: String,
    pub street1: String,
    pub street2: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub phone: String,
    pub email: String,
}

impl AddressRecord {
    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::Name => &self.name,
            AddressField::Company => &self.company,
            AddressField::Street1 => &self.street1,
            AddressField::Street2 => &self.street2,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
            AddressField::ZipCode => &self.zip_code,
            AddressField::Country => &self.country,
            AddressField::Phone => &self.phone,
            AddressField::Email => &self.email,
        }
    }

    fn slot(&mut self, field: AddressField) -> &mut String {
        match field {
            AddressField::Name => &mut self.name,
            AddressField::Company => &mut self.company,
            AddressField::Street1 => &mut self.street1,
            AddressField::Street2 => &mut self.street2,
            AddressField::City => &mut self.city,
            AddressField::State => &mut self.state,
            AddressField::ZipCode => &mut self.zip_code,
            AddressField::Country => &mut self.country,
            AddressField::Phone => &mut self.phone,
            AddressField::Email => &mut self.email,
        }
    }

    /// Return a copy of this record with one field replaced.
    pub fn with_field(&self, field: AddressField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        *next.slot(field) = value.into();
        next
    }
}

/// Which of the two addresses on a product an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Origin ("fromAddress")
    From,
    /// Destination ("toAddress")
    To,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::From, Side::To];

    /// Key of this address in the product record and in error paths
    pub fn key(self) -> &'static str {
        match self {
            Side::From => "fromAddress",
            Side::To => "toAddress",
        }
    }

    /// Party name used in validation messages
    pub fn party(self) -> &'static str {
        match self {
            Side::From => "Sender",
            Side::To => "Recipient",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Side::ALL.into_iter().find(|side| side.key() == key)
    }

    /// Prefix shared by every error key belonging to this address
    pub fn error_prefix(self) -> String {
        format!("{}.", self.key())
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Name,
    Company,
    Street1,
    Street2,
    City,
    State,
    ZipCode,
    Country,
    Phone,
    Email,
}

impl AddressField {
    pub const ALL: [AddressField; 10] = [
        AddressField::Name,
        AddressField::Company,
        AddressField::Street1,
        AddressField::Street2,
        AddressField::City,
        AddressField::State,
        AddressField::ZipCode,
        AddressField::Country,
        AddressField::Phone,
        AddressField::Email,
    ];

    /// Fields that must be non-blank, in validation order
    pub const REQUIRED: [AddressField; 8] = [
        AddressField::Name,
        AddressField::Street1,
        AddressField::City,
        AddressField::State,
        AddressField::ZipCode,
        AddressField::Country,
        AddressField::Phone,
        AddressField::Email,
    ];

    pub fn key(self) -> &'static str {
        match self {
            AddressField::Name => "name",
            AddressField::Company => "company",
            AddressField::Street1 => "street1",
            AddressField::Street2 => "street2",
            AddressField::City => "city",
            AddressField::State => "state",
            AddressField::ZipCode => "zipCode",
            AddressField::Country => "country",
            AddressField::Phone => "phone",
            AddressField::Email => "email",
        }
    }

    /// Human wording used in "<party> <label> is required"
    pub fn label(self) -> &'static str {
        match self {
            AddressField::Name => "name",
            AddressField::Company => "company",
            AddressField::Street1 => "street address",
            AddressField::Street2 => "address line 2",
            AddressField::City => "city",
            AddressField::State => "state",
            AddressField::ZipCode => "ZIP code",
            AddressField::Country => "country",
            AddressField::Phone => "phone",
            AddressField::Email => "email",
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    /// Fixed choices offered for this field, if it is a dropdown
    pub fn options(self) -> Option<&'static [&'static str]> {
        match self {
            AddressField::State => Some(US_STATES),
            AddressField::Country => Some(COUNTRIES),
            _ => None,
        }
    }
}

impl FromStr for AddressField {
    type Err = FieldPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddressField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| FieldPathError::UnknownField(s.to_string()))
    }
}

/// Display state of one address section on the entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressForm {
    side: Side,
    title: String,
    required: bool,
    is_collapsed: bool,
}

impl AddressForm {
    pub fn new(side: Side, title: impl Into<String>) -> Self {
        Self {
            side,
            title: title.into(),
            required: false,
            is_collapsed: true,
        }
    }

    pub fn origin() -> Self {
        Self::new(Side::From, "From Address").required(true)
    }

    pub fn destination() -> Self {
        Self::new(Side::To, "To Address").required(true)
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_collapsed(&self) -> bool {
        self.is_collapsed
    }

    /// Flip the collapsed flag. Entered values live in the owner and are untouched.
    pub fn toggle_collapsed(&mut self) {
        self.is_collapsed = !self.is_collapsed;
    }

    /// Build the replacement record the owner should store after an edit.
    pub fn on_address_change(
        &self,
        current: &AddressRecord,
        field: AddressField,
        value: impl Into<String>,
    ) -> AddressRecord {
        current.with_field(field, value)
    }

    /// Errors that belong to this address, keyed by bare field name.
    pub fn errors_for(&self, errors: &ErrorMap) -> ErrorMap {
        errors.strip_prefix(&self.side.error_prefix())
    }
}

// Core record types for the product entry form

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::address::{AddressRecord, Side};

/// Product categories offered by the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    #[serde(rename = "Home & Garden")]
    HomeAndGarden,
    Sports,
    Books,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Clothing,
        Category::HomeAndGarden,
        Category::Sports,
        Category::Books,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::HomeAndGarden => "Home & Garden",
            Category::Sports => "Sports",
            Category::Books => "Books",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Cm,
    #[default]
    In,
    Mm,
    Ft,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 4] = [LengthUnit::Cm, LengthUnit::In, LengthUnit::Mm, LengthUnit::Ft];

    pub fn as_str(self) -> &'static str {
        match self {
            LengthUnit::Cm => "cm",
            LengthUnit::In => "in",
            LengthUnit::Mm => "mm",
            LengthUnit::Ft => "ft",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LengthUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s.trim())
            .ok_or_else(|| format!("unknown length unit: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    #[default]
    Lb,
    G,
    Oz,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 4] = [WeightUnit::Kg, WeightUnit::Lb, WeightUnit::G, WeightUnit::Oz];

    pub fn as_str(self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lb => "lb",
            WeightUnit::G => "g",
            WeightUnit::Oz => "oz",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeightUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s.trim())
            .ok_or_else(|| format!("unknown weight unit: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionRecord {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
    pub unit: LengthUnit,
    pub weight_unit: WeightUnit,
}

/// The record edited by the product entry form.
///
/// `Default` is the literal empty form: blank strings, zero numbers, no
/// category and `in`/`lb` units.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub name: String,
    pub order_number: String,
    pub from_address: AddressRecord,
    pub to_address: AddressRecord,
    pub price: f64,
    pub category: Option<Category>,
    pub brand: String,
    pub sku: String,
    pub quantity: f64,
    pub images: Vec<String>,
    pub specifications: BTreeMap<String, String>,
    pub dimensions: DimensionRecord,
}

impl ProductRecord {
    pub fn address(&self, side: Side) -> &AddressRecord {
        match side {
            Side::From => &self.from_address,
            Side::To => &self.to_address,
        }
    }

    pub fn address_mut(&mut self, side: Side) -> &mut AddressRecord {
        match side {
            Side::From => &mut self.from_address,
            Side::To => &mut self.to_address,
        }
    }
}

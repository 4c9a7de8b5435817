use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::address::{AddressField, Side};
use crate::product::types::ProductRecord;

/// Validation messages keyed by dotted field path (e.g. `fromAddress.email`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<String, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.insert(path.into(), message.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    pub fn remove(&mut self, path: &str) -> Option<String> {
        self.0.remove(path)
    }

    /// Drop every entry whose key starts with `prefix`.
    pub fn clear_prefix(&mut self, prefix: &str) {
        self.0.retain(|key, _| !key.starts_with(prefix));
    }

    /// Entries under `prefix`, re-keyed without it.
    pub fn strip_prefix(&self, prefix: &str) -> ErrorMap {
        ErrorMap(
            self.0
                .iter()
                .filter_map(|(key, message)| {
                    key.strip_prefix(prefix)
                        .map(|rest| (rest.to_string(), message.clone()))
                })
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (path, message) in self.iter() {
            writeln!(f, "  {path}: {message}")?;
        }
        Ok(())
    }
}

fn require(errors: &mut ErrorMap, value: &str, path: impl Into<String>, message: impl Into<String>) {
    if value.trim().is_empty() {
        errors.insert(path, message);
    }
}

/// Check a whole record. Returns an empty map when the record can be submitted.
pub fn validate(record: &ProductRecord) -> ErrorMap {
    let mut errors = ErrorMap::new();

    require(&mut errors, &record.name, "name", "Product name is required");
    require(&mut errors, &record.order_number, "orderNumber", "Order number is required");

    for side in Side::ALL {
        let address = record.address(side);
        for field in AddressField::REQUIRED {
            require(
                &mut errors,
                address.get(field),
                format!("{}.{}", side.key(), field.key()),
                format!("{} {} is required", side.party(), field.label()),
            );
        }
    }

    if record.price.is_nan() || record.price <= 0.0 {
        errors.insert("price", "Price must be greater than 0");
    }
    if record.category.is_none() {
        errors.insert("category", "Category is required");
    }
    require(&mut errors, &record.sku, "sku", "SKU is required");
    if record.quantity < 0.0 {
        errors.insert("quantity", "Quantity cannot be negative");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AddressRecord;
    use crate::product::types::Category;

    fn address(name: &str) -> AddressRecord {
        AddressRecord {
            name: name.to_string(),
            street1: "1 Main St".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip_code: "73301".to_string(),
            country: "United States".to_string(),
            phone: "555-0100".to_string(),
            email: "ship@example.com".to_string(),
            ..Default::default()
        }
    }

    fn valid_record() -> ProductRecord {
        ProductRecord {
            name: "Gaming Laptop".to_string(),
            order_number: "ORD-2024-002".to_string(),
            from_address: address("Computer Hub"),
            to_address: address("Jane Smith"),
            price: 1299.99,
            category: Some(Category::Electronics),
            sku: "GL-15".to_string(),
            quantity: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_record_has_no_errors() {
        assert!(validate(&valid_record()).is_empty());
    }

    #[test]
    fn test_empty_record_reports_every_required_field() {
        let errors = validate(&ProductRecord::default());

        // name, orderNumber, 8 per address, price, category, sku
        assert_eq!(errors.len(), 2 + 16 + 3);
        assert_eq!(errors.get("name"), Some("Product name is required"));
        assert_eq!(errors.get("fromAddress.zipCode"), Some("Sender ZIP code is required"));
        assert_eq!(errors.get("toAddress.street1"), Some("Recipient street address is required"));
        assert_eq!(errors.get("price"), Some("Price must be greater than 0"));
        assert!(!errors.contains("quantity"));
        assert!(!errors.contains("brand"));
        assert!(!errors.contains("fromAddress.company"));
        assert!(!errors.contains("toAddress.street2"));
    }

    #[test]
    fn test_whitespace_only_counts_as_blank() {
        let mut record = valid_record();
        record.sku = "   ".to_string();
        record.to_address.email = "\t".to_string();

        let errors = validate(&record);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("sku"), Some("SKU is required"));
        assert_eq!(errors.get("toAddress.email"), Some("Recipient email is required"));
    }

    #[test]
    fn test_price_boundary() {
        for price in [0.0, -1.0, f64::NAN] {
            let mut record = valid_record();
            record.price = price;
            assert!(validate(&record).contains("price"), "price {price} should fail");
        }

        for price in [0.01, 1.0, 1e9] {
            let mut record = valid_record();
            record.price = price;
            assert!(validate(&record).is_empty(), "price {price} should pass");
        }
    }

    #[test]
    fn test_negative_quantity() {
        let mut record = valid_record();
        record.quantity = -1.0;
        assert_eq!(validate(&record).get("quantity"), Some("Quantity cannot be negative"));

        record.quantity = 0.0;
        assert!(validate(&record).is_empty());
    }

    #[test]
    fn test_error_map_prefix_helpers() {
        let mut errors = validate(&ProductRecord::default());

        errors.clear_prefix("fromAddress.");

        assert!(errors.iter().all(|(path, _)| !path.starts_with("fromAddress.")));
        assert_eq!(errors.strip_prefix("toAddress.").len(), 8);
    }
}

// Sample open orders served by the simulated backend

use chrono::NaiveDate;

use crate::orders::types::{OrderAddress, OrderPriority, OrderRecord, OrderStatus};
use crate::product::{DimensionRecord, LengthUnit, WeightUnit};

fn day(year: i32, month: u32, date: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, date).unwrap_or(NaiveDate::MIN)
}

fn place(name: &str, city: &str, state: &str) -> OrderAddress {
    OrderAddress {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        country: "USA".to_string(),
    }
}

fn inches(length: f64, width: f64, height: f64, weight: f64) -> DimensionRecord {
    DimensionRecord {
        length,
        width,
        height,
        weight,
        unit: LengthUnit::In,
        weight_unit: WeightUnit::Lb,
    }
}

pub fn sample_orders() -> Vec<OrderRecord> {
    vec![
        OrderRecord {
            id: "1".to_string(),
            order_number: "ORD-2024-001".to_string(),
            product_name: "Wireless Headphones".to_string(),
            customer_name: "John Doe".to_string(),
            customer_email: "john@example.com".to_string(),
            status: OrderStatus::Processing,
            priority: OrderPriority::High,
            created_date: day(2024, 1, 15),
            estimated_delivery: day(2024, 1, 20),
            total_amount: 299.99,
            from_address: place("Tech Store", "New York", "NY"),
            to_address: place("John Doe", "Los Angeles", "CA"),
            dimensions: inches(8.0, 6.0, 3.0, 1.2),
            tracking_number: Some("TRK123456789".to_string()),
        },
        OrderRecord {
            id: "2".to_string(),
            order_number: "ORD-2024-002".to_string(),
            product_name: "Gaming Laptop".to_string(),
            customer_name: "Jane Smith".to_string(),
            customer_email: "jane@example.com".to_string(),
            status: OrderStatus::Pending,
            priority: OrderPriority::Medium,
            created_date: day(2024, 1, 16),
            estimated_delivery: day(2024, 1, 25),
            total_amount: 1299.99,
            from_address: place("Computer Hub", "Austin", "TX"),
            to_address: place("Jane Smith", "Seattle", "WA"),
            dimensions: inches(15.0, 10.0, 2.0, 4.5),
            tracking_number: None,
        },
        OrderRecord {
            id: "3".to_string(),
            order_number: "ORD-2024-003".to_string(),
            product_name: "Smart Watch".to_string(),
            customer_name: "Mike Johnson".to_string(),
            customer_email: "mike@example.com".to_string(),
            status: OrderStatus::Shipped,
            priority: OrderPriority::Low,
            created_date: day(2024, 1, 12),
            estimated_delivery: day(2024, 1, 18),
            total_amount: 399.99,
            from_address: place("Gadget Store", "Chicago", "IL"),
            to_address: place("Mike Johnson", "Miami", "FL"),
            dimensions: inches(4.0, 4.0, 1.0, 0.3),
            tracking_number: Some("TRK987654321".to_string()),
        },
        OrderRecord {
            id: "4".to_string(),
            order_number: "ORD-2024-004".to_string(),
            product_name: "Bluetooth Speaker".to_string(),
            customer_name: "Sarah Wilson".to_string(),
            customer_email: "sarah@example.com".to_string(),
            status: OrderStatus::Delivered,
            priority: OrderPriority::Medium,
            created_date: day(2024, 1, 10),
            estimated_delivery: day(2024, 1, 15),
            total_amount: 149.99,
            from_address: place("Audio Plus", "Denver", "CO"),
            to_address: place("Sarah Wilson", "Portland", "OR"),
            dimensions: inches(6.0, 4.0, 4.0, 2.1),
            tracking_number: Some("TRK456789123".to_string()),
        },
    ]
}

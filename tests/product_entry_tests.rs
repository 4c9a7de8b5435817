// End-to-end checks of the product entry workflow through the public API:
// field edits -> validation -> submit -> reset.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use shipdesk::address::{AddressField, Side};
use shipdesk::backend::{OperationError, OrderId, ProductService, SimulatedBackend};
use shipdesk::product::{
    Category, DimensionField, FieldUpdate, FormState, LengthUnit, ProductRecord, SubmitError,
    TopField, WeightUnit,
};

/// Backend that fails a fixed number of times before succeeding
struct FlakyService {
    failures_left: AtomicUsize,
}

#[async_trait]
impl ProductService for FlakyService {
    async fn create_product(&self, _product: &ProductRecord) -> Result<OrderId, OperationError> {
        let left = self.failures_left.load(Ordering::SeqCst);
        if left > 0 {
            self.failures_left.store(left - 1, Ordering::SeqCst);
            return Err(OperationError::SaveFailed("connection reset".to_string()));
        }
        Ok("PRD-flaky".to_string())
    }
}

fn set(form: &mut FormState, path: &str, value: &str) {
    form.update_field(FieldUpdate::from_path(path, value).expect("known field path"));
}

fn fill_address(form: &mut FormState, side: Side) {
    let values = [
        (AddressField::Name, "Computer Hub"),
        (AddressField::Company, ""),
        (AddressField::Street1, "500 Congress Ave"),
        (AddressField::City, "Austin"),
        (AddressField::State, "TX"),
        (AddressField::ZipCode, "73301"),
        (AddressField::Country, "United States"),
        (AddressField::Phone, "555-0199"),
        (AddressField::Email, "hub@example.com"),
    ];
    for (field, value) in values {
        let next = form
            .address_form(side)
            .on_address_change(form.record().address(side), field, value);
        form.change_address(side, next);
    }
}

fn complete_form() -> FormState {
    let mut form = FormState::new();
    set(&mut form, "name", "Gaming Laptop");
    set(&mut form, "orderNumber", "ORD-2024-002");
    set(&mut form, "price", "1299.99");
    set(&mut form, "category", "Electronics");
    set(&mut form, "sku", "GL-15-2024");
    set(&mut form, "quantity", "1");
    fill_address(&mut form, Side::From);
    fill_address(&mut form, Side::To);
    form
}

#[test]
fn test_each_required_field_blocks_acceptance() {
    let required = [
        "name",
        "orderNumber",
        "sku",
        "fromAddress.name",
        "fromAddress.street1",
        "fromAddress.city",
        "fromAddress.state",
        "fromAddress.zipCode",
        "fromAddress.country",
        "fromAddress.phone",
        "fromAddress.email",
        "toAddress.name",
        "toAddress.street1",
        "toAddress.city",
        "toAddress.state",
        "toAddress.zipCode",
        "toAddress.country",
        "toAddress.phone",
        "toAddress.email",
    ];

    for path in required {
        for blank in ["", "   "] {
            let mut form = complete_form();
            set(&mut form, path, blank);

            let errors = match form.begin_submit() {
                Err(SubmitError::Rejected(rejected)) => rejected.errors().clone(),
                other => panic!("{path} blank should be rejected, got {other:?}"),
            };

            assert_eq!(errors.len(), 1, "only {path} should fail");
            assert!(errors.contains(path));
            assert!(!form.is_submitting());
        }
    }
}

#[test]
fn test_optional_fields_may_stay_blank() {
    let mut form = complete_form();
    set(&mut form, "brand", "");
    set(&mut form, "fromAddress.company", "");
    set(&mut form, "toAddress.street2", "");

    assert!(form.validate().is_ok());
}

#[test]
fn test_numeric_fields_coerce_instead_of_failing() {
    let mut form = FormState::new();
    for path in ["price", "quantity", "dimensions.length", "dimensions.width", "dimensions.height", "dimensions.weight"] {
        set(&mut form, path, "not a number");
    }

    let record = form.record();
    assert_eq!(record.price, 0.0);
    assert_eq!(record.quantity, 0.0);
    assert_eq!(record.dimensions.length, 0.0);
    assert_eq!(record.dimensions.width, 0.0);
    assert_eq!(record.dimensions.height, 0.0);
    assert_eq!(record.dimensions.weight, 0.0);
}

#[test]
fn test_price_must_be_positive() {
    let mut form = complete_form();

    set(&mut form, "price", "0");
    assert!(form.validate().unwrap_err().errors().contains("price"));

    set(&mut form, "price", "-5");
    assert!(form.validate().unwrap_err().errors().contains("price"));

    set(&mut form, "price", "0.01");
    assert!(form.validate().is_ok());
}

#[test]
fn test_editing_clears_exactly_one_error() {
    let mut form = FormState::new();
    let all = form.validate().unwrap_err().errors().clone();

    form.update_field(FieldUpdate::SetTopLevel(TopField::OrderNumber, "ORD-1".to_string()));

    assert!(!form.errors().contains("orderNumber"));
    for (path, message) in all.iter().filter(|(path, _)| *path != "orderNumber") {
        assert_eq!(form.errors().get(path), Some(message));
    }
}

#[test]
fn test_reset_yields_zero_record() {
    let mut form = complete_form();
    form.update_field(FieldUpdate::SetDimension(DimensionField::Unit, "mm".to_string()));
    form.update_field(FieldUpdate::SetDimension(DimensionField::WeightUnit, "oz".to_string()));
    form.validate().unwrap();

    form.reset();

    let record = form.record();
    assert_eq!(record, &ProductRecord::default());
    assert_eq!(record.name, "");
    assert_eq!(record.category, None);
    assert_eq!(record.dimensions.unit, LengthUnit::In);
    assert_eq!(record.dimensions.weight_unit, WeightUnit::Lb);
    assert_eq!(
        (record.dimensions.length, record.dimensions.width, record.dimensions.height, record.dimensions.weight),
        (0.0, 0.0, 0.0, 0.0)
    );
    assert!(form.errors().is_empty());
}

#[test]
fn test_collapse_preserves_entered_address() {
    let mut form = complete_form();
    let before = form.record().from_address.clone();

    form.address_form_mut(Side::From).toggle_collapsed();

    assert!(!form.address_form(Side::From).is_collapsed());
    assert!(form.address_form(Side::To).is_collapsed());
    assert_eq!(form.record().from_address, before);
}

#[tokio::test(start_paused = true)]
async fn test_submit_through_simulated_backend() {
    let backend = SimulatedBackend::new(Duration::from_millis(1000), Duration::ZERO);
    let mut form = complete_form();
    assert_eq!(form.record().category, Some(Category::Electronics));

    let accepted = form.submit(&backend).await.expect("valid product is accepted");

    let created = backend.created_products();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].0, accepted.order_id);
    assert_eq!(created[0].1.sku, "GL-15-2024");
    assert_eq!(form.record(), &ProductRecord::default());
}

#[tokio::test]
async fn test_rejected_submit_never_reaches_backend() {
    let backend = SimulatedBackend::immediate();
    let mut form = complete_form();
    set(&mut form, "sku", "");

    let result = form.submit(&backend).await;

    assert!(matches!(result, Err(SubmitError::Rejected(_))));
    assert!(backend.created_products().is_empty());
    assert_eq!(form.record().name, "Gaming Laptop");
}

#[tokio::test]
async fn test_operation_error_then_manual_resubmit() {
    let service = FlakyService {
        failures_left: AtomicUsize::new(1),
    };
    let mut form = complete_form();

    let first = form.submit(&service).await;
    assert!(matches!(first, Err(SubmitError::Operation(OperationError::SaveFailed(_)))));
    assert!(form.errors().is_empty());
    assert_eq!(form.record().sku, "GL-15-2024");

    let second = form.submit(&service).await.unwrap();
    assert_eq!(second.order_id, "PRD-flaky");
    assert_eq!(form.record(), &ProductRecord::default());
}

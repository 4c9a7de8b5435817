// Product entry form state: the record being edited, its validation errors,
// the address sub-forms and the submit lifecycle.

use tracing::{debug, info, warn};

use crate::address::{AddressForm, AddressRecord, Side};
use crate::backend::{OperationError, OrderId, ProductService};
use crate::notification::NotificationCenter;
use crate::product::errors::{SubmitError, ValidationError};
use crate::product::types::ProductRecord;
use crate::product::update::{reduce, FieldUpdate};
use crate::product::validation::{validate, ErrorMap};

/// Collapsible sections of the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSection {
    BasicInfo,
    Pricing,
    Dimensions,
    Additional,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionState {
    pub basic_info: bool,
    pub pricing: bool,
    pub dimensions: bool,
    pub additional: bool,
}

impl Default for SectionState {
    fn default() -> Self {
        Self {
            basic_info: true,
            pricing: true,
            dimensions: false,
            additional: false,
        }
    }
}

impl SectionState {
    fn slot(&mut self, section: FormSection) -> &mut bool {
        match section {
            FormSection::BasicInfo => &mut self.basic_info,
            FormSection::Pricing => &mut self.pricing,
            FormSection::Dimensions => &mut self.dimensions,
            FormSection::Additional => &mut self.additional,
        }
    }

    pub fn is_open(&self, section: FormSection) -> bool {
        match section {
            FormSection::BasicInfo => self.basic_info,
            FormSection::Pricing => self.pricing,
            FormSection::Dimensions => self.dimensions,
            FormSection::Additional => self.additional,
        }
    }

    pub fn toggle(&mut self, section: FormSection) {
        let open = self.slot(section);
        *open = !*open;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub order_id: OrderId,
}

#[derive(Debug)]
pub struct FormState {
    record: ProductRecord,
    errors: ErrorMap,
    submitting: bool,
    sections: SectionState,
    origin: AddressForm,
    destination: AddressForm,
    notifications: NotificationCenter,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            record: ProductRecord::default(),
            errors: ErrorMap::new(),
            submitting: false,
            sections: SectionState::default(),
            origin: AddressForm::origin(),
            destination: AddressForm::destination(),
            notifications: NotificationCenter::new(),
        }
    }

    pub fn record(&self) -> &ProductRecord {
        &self.record
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn sections(&self) -> &SectionState {
        &self.sections
    }

    pub fn toggle_section(&mut self, section: FormSection) {
        self.sections.toggle(section);
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationCenter {
        &mut self.notifications
    }

    pub fn address_form(&self, side: Side) -> &AddressForm {
        match side {
            Side::From => &self.origin,
            Side::To => &self.destination,
        }
    }

    pub fn address_form_mut(&mut self, side: Side) -> &mut AddressForm {
        match side {
            Side::From => &mut self.origin,
            Side::To => &mut self.destination,
        }
    }

    /// Apply one edit. The error for the edited path is cleared straight away,
    /// whether or not the new value is valid.
    pub fn update_field(&mut self, update: FieldUpdate) {
        let path = update.path();
        debug!(field = %path, "Field updated");

        let record = std::mem::take(&mut self.record);
        self.record = reduce(record, &update);
        self.errors.remove(&path);
    }

    /// Replace one address wholesale, as emitted by its sub-form.
    pub fn change_address(&mut self, side: Side, address: AddressRecord) {
        *self.record.address_mut(side) = address;
        self.errors.clear_prefix(&side.error_prefix());
    }

    /// Run validation and store the resulting map.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        self.errors = validate(&self.record);
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError(self.errors.clone()))
        }
    }

    /// Validate and enter the submitting state, handing back the record to save.
    ///
    /// Fails with `InFlight` while an earlier submission has not finished.
    pub fn begin_submit(&mut self) -> Result<ProductRecord, SubmitError> {
        if self.submitting {
            debug!("Submit ignored, another submission is in flight");
            return Err(SubmitError::InFlight);
        }

        if let Err(rejected) = self.validate() {
            info!(errors = rejected.errors().len(), "Product rejected by validation");
            return Err(rejected.into());
        }

        self.submitting = true;
        Ok(self.record.clone())
    }

    /// Leave the submitting state with the outcome of the save.
    ///
    /// Success resets the form. A failed save keeps the entered data so the
    /// user can submit again.
    pub fn finish_submit(
        &mut self,
        outcome: Result<OrderId, OperationError>,
    ) -> Result<Accepted, SubmitError> {
        self.submitting = false;

        match outcome {
            Ok(order_id) => {
                info!(product.id = %order_id, "Product accepted");
                self.reset();
                self.notifications.success("Product added successfully!");
                Ok(Accepted { order_id })
            }
            Err(e) => {
                warn!("Product save failed: {}", e);
                self.notifications.error("Error submitting product");
                Err(e.into())
            }
        }
    }

    pub async fn submit<S>(&mut self, service: &S) -> Result<Accepted, SubmitError>
    where
        S: ProductService + ?Sized,
    {
        let product = self.begin_submit()?;
        let outcome = service.create_product(&product).await;
        self.finish_submit(outcome)
    }

    /// Back to the empty form. Display state (sections, collapse flags) is kept.
    pub fn reset(&mut self) {
        self.record = ProductRecord::default();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AddressField;
    use crate::backend::MockProductService;
    use crate::product::update::{DimensionField, TopField};

    fn set(form: &mut FormState, path: &str, value: &str) {
        form.update_field(FieldUpdate::from_path(path, value).unwrap());
    }

    fn filled_form() -> FormState {
        let mut form = FormState::new();
        set(&mut form, "name", "Bluetooth Speaker");
        set(&mut form, "orderNumber", "ORD-2024-004");
        set(&mut form, "price", "149.99");
        set(&mut form, "category", "Electronics");
        set(&mut form, "sku", "BT-SPK");
        set(&mut form, "quantity", "2");
        for side in ["fromAddress", "toAddress"] {
            for (field, value) in [
                ("name", "Audio Plus"),
                ("street1", "9 Elm St"),
                ("city", "Denver"),
                ("state", "CO"),
                ("zipCode", "80201"),
                ("country", "United States"),
                ("phone", "555-0101"),
                ("email", "audio@example.com"),
            ] {
                set(&mut form, &format!("{side}.{field}"), value);
            }
        }
        form
    }

    #[test]
    fn test_editing_clears_only_that_error() {
        let mut form = FormState::new();
        assert!(form.validate().is_err());
        let before = form.errors().len();
        assert!(form.errors().contains("sku"));

        // Clearing is optimistic: an invalid value still clears the error
        form.update_field(FieldUpdate::SetTopLevel(TopField::Sku, " ".to_string()));

        assert!(!form.errors().contains("sku"));
        assert_eq!(form.errors().len(), before - 1);
        assert!(form.errors().contains("name"));
    }

    #[test]
    fn test_editing_field_without_error_keeps_map() {
        let mut form = FormState::new();
        form.validate().unwrap_err();
        let before = form.errors().clone();

        form.update_field(FieldUpdate::SetDimension(DimensionField::Height, "3".to_string()));

        assert_eq!(form.errors(), &before);
        assert_eq!(form.record().dimensions.height, 3.0);
    }

    #[test]
    fn test_change_address_clears_side_errors() {
        let mut form = FormState::new();
        form.validate().unwrap_err();

        let address = form.address_form(Side::From).on_address_change(
            &form.record().from_address,
            AddressField::Name,
            "Tech Store",
        );
        form.change_address(Side::From, address);

        assert_eq!(form.record().from_address.name, "Tech Store");
        assert!(form.errors().strip_prefix("fromAddress.").is_empty());
        assert_eq!(form.errors().strip_prefix("toAddress.").len(), 8);
    }

    #[test]
    fn test_reset_restores_empty_record() {
        let mut form = filled_form();
        form.toggle_section(FormSection::Dimensions);
        set(&mut form, "dimensions.unit", "cm");

        form.reset();

        assert_eq!(form.record(), &ProductRecord::default());
        assert!(form.errors().is_empty());
        assert!(form.sections().is_open(FormSection::Dimensions));
    }

    #[test]
    fn test_sections_default_and_toggle() {
        let mut form = FormState::new();
        assert!(form.sections().is_open(FormSection::BasicInfo));
        assert!(form.sections().is_open(FormSection::Pricing));
        assert!(!form.sections().is_open(FormSection::Dimensions));
        assert!(!form.sections().is_open(FormSection::Additional));

        form.toggle_section(FormSection::Pricing);
        assert!(!form.sections().is_open(FormSection::Pricing));
    }

    #[test]
    fn test_second_begin_submit_is_rejected_while_in_flight() {
        let mut form = filled_form();

        let product = form.begin_submit().unwrap();
        assert_eq!(product.sku, "BT-SPK");
        assert!(form.is_submitting());

        assert_eq!(form.begin_submit(), Err(SubmitError::InFlight));
        // the pending submission is unaffected
        assert_eq!(form.record().sku, "BT-SPK");

        form.finish_submit(Ok("PRD-1".to_string())).unwrap();
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_submit_accepts_and_resets() {
        let mut service = MockProductService::new();
        service
            .expect_create_product()
            .withf(|product| product.name == "Bluetooth Speaker")
            .times(1)
            .returning(|_| Ok("PRD-42".to_string()));
        let mut form = filled_form();

        let accepted = form.submit(&service).await.unwrap();

        assert_eq!(accepted.order_id, "PRD-42");
        assert_eq!(form.record(), &ProductRecord::default());
        assert!(!form.is_submitting());
        assert_eq!(
            form.notifications().current().map(|n| n.message.as_str()),
            Some("Product added successfully!")
        );
    }

    #[tokio::test]
    async fn test_submit_rejects_without_calling_service() {
        let mut service = MockProductService::new();
        service.expect_create_product().times(0);
        let mut form = FormState::new();
        set(&mut form, "name", "Lamp");

        let result = form.submit(&service).await;

        match result {
            Err(SubmitError::Rejected(rejected)) => {
                assert!(!rejected.errors().contains("name"));
                assert!(rejected.errors().contains("sku"));
                assert_eq!(rejected.errors(), form.errors());
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(form.record().name, "Lamp");
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_data_and_notifies() {
        let mut service = MockProductService::new();
        service
            .expect_create_product()
            .returning(|_| Err(OperationError::SaveFailed("timeout".to_string())));
        let mut form = filled_form();

        let result = form.submit(&service).await;

        assert!(matches!(result, Err(SubmitError::Operation(_))));
        assert_eq!(form.record().name, "Bluetooth Speaker");
        assert!(form.errors().is_empty());
        assert!(!form.is_submitting());
        let notice = form.notifications_mut().dismiss().unwrap();
        assert_eq!(notice.message, "Error submitting product");
    }
}

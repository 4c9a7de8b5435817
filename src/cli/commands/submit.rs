use anyhow::{bail, Result};
use std::path::PathBuf;
use tracing::Instrument;

use shipdesk::address::AddressField;
use shipdesk::product::{ErrorMap, FormState, SubmitError};
use shipdesk::telemetry::{create_session_span, generate_correlation_id};
use shipdesk::{config, SimulatedBackend};

use crate::cli::commands::{build_form, Command};

pub struct SubmitCommand {
    pub assignments: Vec<String>,
    pub file: Option<PathBuf>,
    pub validate_only: bool,
}

impl SubmitCommand {
    pub fn new(assignments: Vec<String>, file: Option<PathBuf>) -> Self {
        Self {
            assignments,
            file,
            validate_only: false,
        }
    }

    pub fn validate_only(mut self, validate_only: bool) -> Self {
        self.validate_only = validate_only;
        self
    }

    async fn run(&self) -> Result<()> {
        let mut form = build_form(self.file.as_deref(), &self.assignments)?;

        if self.validate_only {
            return match form.validate() {
                Ok(()) => {
                    println!("✅ Product is valid and ready to submit");
                    Ok(())
                }
                Err(rejected) => {
                    Self::print_errors(&form);
                    Err(rejected.into())
                }
            };
        }

        let backend = SimulatedBackend::from_config(&config()?.backend);
        print!("🚀 Submitting product... ");
        std::io::Write::flush(&mut std::io::stdout())?;

        match form.submit(&backend).await {
            Ok(accepted) => {
                println!("✅");
                if let Some(notice) = form.notifications_mut().dismiss() {
                    println!("{notice}");
                }
                println!("   🆔 Product id: {}", accepted.order_id);
                Ok(())
            }
            Err(SubmitError::Rejected(rejected)) => {
                println!("❌");
                Self::print_errors(&form);
                Err(rejected.into())
            }
            Err(SubmitError::Operation(e)) => {
                println!("❌");
                if let Some(notice) = form.notifications_mut().dismiss() {
                    println!("{notice}");
                }
                println!("   → Your entries were kept; run the command again to resubmit");
                Err(e.into())
            }
            Err(SubmitError::InFlight) => bail!("a submission is already in progress"),
        }
    }

    fn print_errors(form: &FormState) {
        println!("❌ {} field(s) need attention:", form.errors().len());
        print!("{}", form.errors());
        for hint in option_hints(form.errors()) {
            println!("   💡 {hint}");
        }
        println!();
        println!("🔧 Fix with: shipdesk submit --set <path>=<value> ...");
    }
}

/// One line per dropdown field with an error, listing its accepted values.
fn option_hints(errors: &ErrorMap) -> Vec<String> {
    let mut fields: Vec<AddressField> = Vec::new();
    for (path, _) in errors.iter() {
        let Some((_, key)) = path.split_once('.') else {
            continue;
        };
        if let Ok(field) = key.parse::<AddressField>() {
            if field.options().is_some() && !fields.contains(&field) {
                fields.push(field);
            }
        }
    }

    fields
        .into_iter()
        .filter_map(|field| {
            field
                .options()
                .map(|options| format!("{} options: {}", field.key(), options.join(", ")))
        })
        .collect()
}

impl Command for SubmitCommand {
    async fn execute(&self) -> Result<()> {
        let correlation_id = generate_correlation_id();
        let operation = if self.validate_only { "validate" } else { "submit" };
        let span = create_session_span(operation, Some(&correlation_id));
        self.run().instrument(span).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_hints_cover_state_and_country_once() {
        let mut errors = ErrorMap::new();
        errors.insert("fromAddress.state", "Sender state is required");
        errors.insert("toAddress.state", "Recipient state is required");
        errors.insert("toAddress.country", "Recipient country is required");
        errors.insert("sku", "SKU is required");

        let hints = option_hints(&errors);

        assert_eq!(hints.len(), 2);
        assert!(hints[0].starts_with("state options: AL, AK"));
        assert!(hints[1].starts_with("country options: United States, Canada"));
    }

    #[test]
    fn test_no_hints_without_dropdown_errors() {
        let mut errors = ErrorMap::new();
        errors.insert("toAddress.city", "Recipient city is required");
        errors.insert("name", "Product name is required");

        assert!(option_hints(&errors).is_empty());
    }
}

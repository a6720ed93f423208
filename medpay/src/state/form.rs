use medpay_model::PaymentStatus;

use crate::controller::{PaymentField, PaymentFields};
use crate::utils::dates::append_iso_date_char;
use crate::views::ProviderOption;

/// State for the add-payment form
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentFormState {
    pub current_field: PaymentField,
    pub service_date: String, // YYYY-MM-DD
    /// Index into the form's provider options; 0 is the placeholder.
    pub provider_index: usize,
    pub service_type: String,
    pub total_amount: String,
    pub insurance_coverage: String,
    pub status: PaymentStatus,
    pub notes: String,

    pub validation_error: Option<String>,
}

impl PaymentFormState {
    pub fn new(service_date: impl Into<String>) -> Self {
        Self {
            current_field: PaymentField::ServiceDate,
            service_date: service_date.into(),
            provider_index: 0,
            service_type: String::new(),
            total_amount: String::new(),
            insurance_coverage: String::new(),
            status: PaymentStatus::Pending,
            notes: String::new(),
            validation_error: None,
        }
    }

    /// A blank form dated today.
    pub fn today() -> Self {
        Self::new(chrono::Local::now().format("%Y-%m-%d").to_string())
    }

    pub fn navigate(&mut self, forward: bool) {
        self.current_field = if forward {
            self.current_field.next()
        } else {
            self.current_field.previous()
        };
    }

    pub fn append_char(&mut self, c: char) {
        if self.current_field == PaymentField::ServiceDate {
            if let Some(date) = append_iso_date_char(&self.service_date, c) {
                self.service_date = date;
            }
            return;
        }

        if let Some(text) = self.text_mut() {
            text.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(text) = self.text_mut() {
            text.pop();
        }
    }

    pub fn clear_field(&mut self) {
        match self.current_field {
            PaymentField::Provider => self.provider_index = 0,
            PaymentField::Status => self.status = PaymentStatus::Pending,
            _ => {
                if let Some(text) = self.text_mut() {
                    text.clear();
                }
            }
        }
    }

    /// Step the focused selection. `option_count` is the number of provider
    /// options including the placeholder.
    pub fn cycle_choice(&mut self, forward: bool, option_count: usize) {
        match self.current_field {
            PaymentField::Provider if option_count > 0 => {
                self.provider_index = if forward {
                    (self.provider_index + 1) % option_count
                } else {
                    (self.provider_index + option_count - 1) % option_count
                };
            }
            PaymentField::Status => {
                self.status = if forward {
                    self.status.next()
                } else {
                    self.status.previous()
                };
            }
            _ => {}
        }
    }

    pub fn provider_label<'a>(&self, options: &'a [ProviderOption]) -> &'a str {
        options
            .get(self.provider_index)
            .map(|o| o.label.as_str())
            .unwrap_or("")
    }

    /// The raw values as the controller expects them.
    pub fn to_fields(&self, options: &[ProviderOption]) -> PaymentFields {
        PaymentFields {
            service_date: self.service_date.clone(),
            provider_id: options
                .get(self.provider_index)
                .map(|o| o.value.clone())
                .unwrap_or_default(),
            service_type: self.service_type.clone(),
            total_amount: self.total_amount.clone(),
            insurance_coverage: self.insurance_coverage.clone(),
            status: self.status.as_str().to_string(),
            notes: self.notes.clone(),
        }
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.current_field {
            PaymentField::ServiceDate => Some(&mut self.service_date),
            PaymentField::ServiceType => Some(&mut self.service_type),
            PaymentField::TotalAmount => Some(&mut self.total_amount),
            PaymentField::InsuranceCoverage => Some(&mut self.insurance_coverage),
            PaymentField::Notes => Some(&mut self.notes),
            PaymentField::Provider | PaymentField::Status => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_providers;
    use crate::views::provider_options;

    #[test]
    fn typing_goes_to_focused_field() {
        let mut form = PaymentFormState::new("");
        for c in "20240401".chars() {
            form.append_char(c);
        }
        assert_eq!(form.service_date, "2024-04-01");

        form.navigate(true);
        form.append_char('x');
        assert_eq!(form.current_field, PaymentField::Provider);

        form.navigate(true);
        for c in "X-Ray".chars() {
            form.append_char(c);
        }
        form.delete_char();
        assert_eq!(form.service_type, "X-Ra");
    }

    #[test]
    fn navigation_wraps() {
        let mut form = PaymentFormState::new("2024-01-01");
        form.navigate(false);
        assert_eq!(form.current_field, PaymentField::Notes);
        form.navigate(true);
        assert_eq!(form.current_field, PaymentField::ServiceDate);
    }

    #[test]
    fn choices_cycle_and_map_to_values() {
        let options = provider_options(&sample_providers()).form;
        let mut form = PaymentFormState::new("2024-01-01");
        assert_eq!(form.to_fields(&options).provider_id, "");

        form.current_field = PaymentField::Provider;
        form.cycle_choice(true, options.len());
        form.cycle_choice(true, options.len());
        assert_eq!(form.provider_label(&options), "Dr. Smith Cardiology");
        assert_eq!(form.to_fields(&options).provider_id, "2");

        form.cycle_choice(false, options.len());
        form.cycle_choice(false, options.len());
        form.cycle_choice(false, options.len());
        assert_eq!(form.provider_label(&options), "Metro Dermatology");

        form.current_field = PaymentField::Status;
        form.cycle_choice(true, options.len());
        assert_eq!(form.to_fields(&options).status, "overdue");
    }

    #[test]
    fn clear_field_resets_choices() {
        let mut form = PaymentFormState::new("2024-01-01");
        form.provider_index = 3;
        form.current_field = PaymentField::Provider;
        form.clear_field();
        assert_eq!(form.provider_index, 0);

        form.current_field = PaymentField::ServiceDate;
        form.clear_field();
        assert_eq!(form.service_date, "");
    }
}

//! Checkout form: per-field validation plus the in-flight submission guard.
//!
//! Field rules follow the checkout contract: every field is required, the
//! email must look like an address, the card number needs at least 13 digits
//! once whitespace is stripped, the CVV is 3 or 4 digits, and the expiry is
//! `MM/YY` no earlier than the current month.

/// Identifies one input of the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    CardNumber,
    ExpiryDate,
    Cvv,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::FullName,
        Field::Email,
        Field::CardNumber,
        Field::ExpiryDate,
        Field::Cvv,
    ];
}

/// One input's committed value and its current inline error, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    pub value: String,
    pub error: Option<String>,
}

/// Matches the `^[^\s@]+@[^\s@]+\.[^\s@]+$` shape without a regex engine.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    // The domain needs a dot with something on both sides.
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// At least 13 digits after stripping whitespace; nothing but digits and
/// whitespace allowed.
pub fn is_valid_card_number(value: &str) -> bool {
    let stripped: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    stripped.len() >= 13 && stripped.chars().all(|c| c.is_ascii_digit())
}

/// 3 or 4 digits.
pub fn is_valid_cvv(value: &str) -> bool {
    (3..=4).contains(&value.len()) && value.chars().all(|c| c.is_ascii_digit())
}

/// `MM/YY` with a real month, not before `current_month`/`current_year`
/// (year given as two digits).
pub fn is_valid_expiry(value: &str, current_month: u32, current_year: u32) -> bool {
    let Some((month_str, year_str)) = value.split_once('/') else {
        return false;
    };
    if month_str.len() != 2 || year_str.len() != 2 {
        return false;
    }
    let (Ok(month), Ok(year)) = (month_str.parse::<u32>(), year_str.parse::<u32>()) else {
        return false;
    };
    if !(1..=12).contains(&month) {
        return false;
    }
    if year < current_year {
        return false;
    }
    !(year == current_year && month < current_month)
}

/// The whole checkout form. `submitting` gates re-entry: a second submit
/// while one is in flight is rejected before validation even runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaymentFormState {
    pub full_name: FieldState,
    pub email: FieldState,
    pub card_number: FieldState,
    pub expiry_date: FieldState,
    pub cvv: FieldState,
    pub submitting: bool,
}

impl PaymentFormState {
    pub fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::CardNumber => &self.card_number,
            Field::ExpiryDate => &self.expiry_date,
            Field::Cvv => &self.cvv,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::CardNumber => &mut self.card_number,
            Field::ExpiryDate => &mut self.expiry_date,
            Field::Cvv => &mut self.cvv,
        }
    }

    /// Editing a field clears its stale error immediately.
    pub fn set_value(&mut self, field: Field, value: String) {
        let state = self.field_mut(field);
        state.value = value;
        state.error = None;
    }

    /// Blur-time validation of a single field. Returns whether it passed.
    pub fn validate_field(&mut self, field: Field, current_month: u32, current_year: u32) -> bool {
        let value = self.field(field).value.clone();
        let error = if value.trim().is_empty() {
            Some("This field is required".to_string())
        } else {
            match field {
                Field::Email if !is_valid_email(&value) => {
                    Some("Enter a valid email address".to_string())
                }
                Field::CardNumber if !is_valid_card_number(&value) => {
                    Some("Card number is invalid".to_string())
                }
                Field::ExpiryDate if !is_valid_expiry(&value, current_month, current_year) => {
                    Some("Expiry date is invalid".to_string())
                }
                Field::Cvv if !is_valid_cvv(&value) => Some("CVV is invalid".to_string()),
                _ => None,
            }
        };
        let passed = error.is_none();
        self.field_mut(field).error = error;
        passed
    }

    /// Submit-time validation of every field.
    pub fn validate_all(&mut self, current_month: u32, current_year: u32) -> bool {
        let mut all_valid = true;
        for field in Field::ALL {
            if !self.validate_field(field, current_month, current_year) {
                all_valid = false;
            }
        }
        all_valid
    }

    /// Attempts to start a submission. Returns `false`, with inline errors
    /// populated, when validation fails or one is already in flight.
    pub fn begin_submit(&mut self, current_month: u32, current_year: u32) -> bool {
        if self.submitting {
            return false;
        }
        if !self.validate_all(current_month, current_year) {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Completion of the external submission, success or failure. Always
    /// clears `submitting`; on success the fields reset to empty, on failure
    /// the values stay put for correction.
    pub fn finish_submit(&mut self, success: bool) {
        self.submitting = false;
        if success {
            for field in Field::ALL {
                *self.field_mut(field) = FieldState::default();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: (u32, u32) = (6, 26); // June 2026

    fn filled_form() -> PaymentFormState {
        let mut form = PaymentFormState::default();
        form.set_value(Field::FullName, "Ada Lovelace".into());
        form.set_value(Field::Email, "ada@example.com".into());
        form.set_value(Field::CardNumber, "4111 1111 1111 1".into());
        form.set_value(Field::ExpiryDate, "12/27".into());
        form.set_value(Field::Cvv, "123".into());
        form
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.io"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@"));
        assert!(!is_valid_email("ada @example.com"));
        assert!(!is_valid_email("ada@exa@mple.com"));
    }

    #[test]
    fn card_number_needs_thirteen_digits_after_stripping() {
        assert!(is_valid_card_number("4111 1111 1111 1"));
        assert!(is_valid_card_number("4111111111111111"));
        assert!(!is_valid_card_number("4111 1111 1111"), "12 digits");
        assert!(!is_valid_card_number("4111-1111-1111-1111"));
    }

    #[test]
    fn cvv_is_three_or_four_digits() {
        assert!(is_valid_cvv("123"));
        assert!(is_valid_cvv("1234"));
        assert!(!is_valid_cvv("12"));
        assert!(!is_valid_cvv("12345"));
        assert!(!is_valid_cvv("12a"));
    }

    #[test]
    fn expiry_rejects_the_past_but_not_the_current_month() {
        let (m, y) = NOW;
        assert!(is_valid_expiry("06/26", m, y), "current month is still valid");
        assert!(is_valid_expiry("07/26", m, y));
        assert!(is_valid_expiry("01/27", m, y));
        assert!(!is_valid_expiry("05/26", m, y));
        assert!(!is_valid_expiry("12/25", m, y));
        assert!(!is_valid_expiry("13/27", m, y));
        assert!(!is_valid_expiry("00/27", m, y));
        assert!(!is_valid_expiry("6/26", m, y), "month must be two digits");
        assert!(!is_valid_expiry("0626", m, y));
    }

    #[test]
    fn short_cvv_blocks_submission() {
        let mut form = filled_form();
        form.set_value(Field::Cvv, "12".into());
        assert!(!form.begin_submit(NOW.0, NOW.1));
        assert!(!form.submitting, "no submission may start");
        assert!(form.cvv.error.is_some());
        assert!(form.card_number.error.is_none());
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = PaymentFormState::default();
        form.validate_field(Field::Email, NOW.0, NOW.1);
        assert!(form.email.error.is_some());
        form.set_value(Field::Email, "a".into());
        assert!(form.email.error.is_none());
    }

    #[test]
    fn submitting_lifecycle_and_reset_on_success() {
        let mut form = filled_form();
        assert!(!form.submitting);
        assert!(form.begin_submit(NOW.0, NOW.1));
        assert!(form.submitting);
        // Re-entry while in flight is rejected.
        assert!(!form.begin_submit(NOW.0, NOW.1));
        form.finish_submit(true);
        assert!(!form.submitting);
        for field in Field::ALL {
            assert!(form.field(field).value.is_empty());
            assert!(form.field(field).error.is_none());
        }
    }

    #[test]
    fn failure_keeps_values_for_correction() {
        let mut form = filled_form();
        assert!(form.begin_submit(NOW.0, NOW.1));
        form.finish_submit(false);
        assert!(!form.submitting);
        assert_eq!(form.email.value, "ada@example.com");
        // A retry is possible immediately.
        assert!(form.begin_submit(NOW.0, NOW.1));
    }
}

//! Приёмка сырья: форма, правила и результат проверки

use crate::shared::validation::{ValidationErrors, ValidationRules};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MAX_INTAKE_QUANTITY: u32 = 10_000;

static BATCH_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^BATCH-\d{4}$").expect("batch id pattern is valid"));

pub mod field {
    pub const ITEM_NAME: &str = "item_name";
    pub const BATCH_ID: &str = "batch_id";
    pub const QUANTITY: &str = "quantity";
    pub const SUPPLIER: &str = "supplier";
    pub const EXPIRY_DATE: &str = "expiry_date";
}

const EXPIRY_IN_PAST: &str = "Expiry date must be in the future.";

fn item_name_rules() -> ValidationRules {
    ValidationRules::none().min_length(3, "Item name must be at least 3 characters.")
}

fn batch_id_rules() -> ValidationRules {
    ValidationRules::none().pattern(
        &BATCH_ID_RE,
        "Batch ID must follow format: BATCH-XXXX (e.g., BATCH-1024).",
    )
}

fn quantity_rules() -> ValidationRules {
    ValidationRules::none()
        .required("Quantity is required.")
        .min(1.0, "Must be at least 1.")
        .max(MAX_INTAKE_QUANTITY as f64, "Exceeds maximum intake.")
}

fn supplier_rules() -> ValidationRules {
    ValidationRules::none().min_length(2, "Supplier name is required.")
}

/// Сырые значения полей формы, как их ввёл пользователь
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryIntakeForm {
    pub item_name: String,
    pub batch_id: String,
    pub quantity: String,
    pub supplier: String,
    /// `YYYY-MM-DD` из `<input type="date">`
    pub expiry_date: String,
}

/// Проверенная приёмка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryIntake {
    pub item_name: String,
    pub batch_id: String,
    pub quantity: u32,
    pub supplier: String,
    pub expiry_date: NaiveDate,
}

impl InventoryIntakeForm {
    /// Проверить все поля. Ошибки собираются по всем полям сразу,
    /// по одному сообщению на поле.
    pub fn validate(&self, today: NaiveDate) -> Result<InventoryIntake, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.check(field::ITEM_NAME, item_name_rules().validate_string(&self.item_name));
        errors.check(field::BATCH_ID, batch_id_rules().validate_string(&self.batch_id));
        errors.check(field::SUPPLIER, supplier_rules().validate_string(&self.supplier));

        // нецелое или пустое значение считается незаполненным
        let quantity = self.quantity.trim().parse::<i64>().ok();
        errors.check(
            field::QUANTITY,
            quantity_rules().validate_number(quantity.map(|q| q as f64)),
        );

        let expiry = NaiveDate::parse_from_str(self.expiry_date.trim(), "%Y-%m-%d").ok();
        match expiry {
            Some(date) if date > today => {}
            _ => errors.check(field::EXPIRY_DATE, Err(EXPIRY_IN_PAST)),
        }

        match (quantity, expiry) {
            (Some(quantity), Some(expiry_date)) if errors.is_empty() => Ok(InventoryIntake {
                item_name: self.item_name.clone(),
                batch_id: self.batch_id.clone(),
                quantity: quantity as u32,
                supplier: self.supplier.clone(),
                expiry_date,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn valid_form() -> InventoryIntakeForm {
        InventoryIntakeForm {
            item_name: "Organic Butter".to_string(),
            batch_id: "BATCH-1024".to_string(),
            quantity: "120".to_string(),
            supplier: "Dairy Farms".to_string(),
            expiry_date: "2026-12-01".to_string(),
        }
    }

    #[test]
    fn test_valid_form_is_accepted() {
        let intake = valid_form().validate(today()).unwrap();
        assert_eq!(intake.item_name, "Organic Butter");
        assert_eq!(intake.quantity, 120);
        assert_eq!(intake.expiry_date, NaiveDate::from_ymd_opt(2026, 12, 1).unwrap());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = InventoryIntakeForm::default().validate(today()).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(
            errors.get(field::ITEM_NAME),
            Some("Item name must be at least 3 characters.")
        );
        assert_eq!(
            errors.get(field::BATCH_ID),
            Some("Batch ID must follow format: BATCH-XXXX (e.g., BATCH-1024).")
        );
        assert_eq!(errors.get(field::QUANTITY), Some("Quantity is required."));
        assert_eq!(errors.get(field::SUPPLIER), Some("Supplier name is required."));
        assert_eq!(errors.get(field::EXPIRY_DATE), Some("Expiry date must be in the future."));
    }

    #[test]
    fn test_batch_id_format() {
        for bad in ["BATCH-12", "batch-1234", "BATCH-12345", "LOT-1234", " BATCH-1234"] {
            let form = InventoryIntakeForm {
                batch_id: bad.to_string(),
                ..valid_form()
            };
            let errors = form.validate(today()).unwrap_err();
            assert!(errors.get(field::BATCH_ID).is_some(), "{}", bad);
        }
    }

    #[test]
    fn test_quantity_bounds() {
        let check = |raw: &str| {
            InventoryIntakeForm {
                quantity: raw.to_string(),
                ..valid_form()
            }
            .validate(today())
            .err()
            .and_then(|e| e.get(field::QUANTITY))
        };
        assert_eq!(check("0"), Some("Must be at least 1."));
        assert_eq!(check("-3"), Some("Must be at least 1."));
        assert_eq!(check("10001"), Some("Exceeds maximum intake."));
        assert_eq!(check("abc"), Some("Quantity is required."));
        assert_eq!(check("1"), None);
        assert_eq!(check("10000"), None);
    }

    #[test]
    fn test_expiry_must_be_after_today() {
        let check = |raw: &str| {
            InventoryIntakeForm {
                expiry_date: raw.to_string(),
                ..valid_form()
            }
            .validate(today())
            .is_ok()
        };
        assert!(!check("2026-10-19"));
        assert!(!check("2026-10-01"));
        assert!(!check("not a date"));
        assert!(check("2026-10-20"));
    }

    #[test]
    fn test_short_names() {
        let form = InventoryIntakeForm {
            item_name: "Ab".to_string(),
            supplier: "X".to_string(),
            ..valid_form()
        };
        let errors = form.validate(today()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.get(field::ITEM_NAME).is_some());
        assert!(errors.get(field::SUPPLIER).is_some());
    }
}

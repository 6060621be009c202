//! Investment parameter domain model.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::ValidationError;
use crate::utils::number_utils::{coerce_f64, coerce_whole, lookup};

pub const DEFAULT_DOWN_PAYMENT_PERCENT: f64 = 20.0;
pub const DEFAULT_INTEREST_RATE: f64 = 7.0;
pub const DEFAULT_LOAN_TERM_YEARS: u32 = 30;
pub const DEFAULT_PROPERTY_TAX_RATE: f64 = 1.25;
pub const DEFAULT_INSURANCE_MONTHLY: f64 = 200.0;
pub const DEFAULT_UTILITIES_MONTHLY: f64 = 150.0;
pub const DEFAULT_MAINTENANCE_PERCENT: f64 = 1.0;
pub const DEFAULT_PROPERTY_MANAGEMENT_PERCENT: f64 = 8.0;
pub const DEFAULT_VACANCY_RATE: f64 = 5.0;

/// Mortgage and operating-expense assumptions supplied alongside a purchase price.
///
/// Carried through to the response unchanged; nothing here is used in the
/// rent estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentParameters {
    pub purchase_price: f64,
    pub down_payment_percent: f64,
    pub interest_rate: f64,
    pub loan_term_years: u32,
    pub property_tax_rate: f64,
    pub insurance_monthly: f64,
    pub utilities_monthly: f64,
    pub maintenance_percent: f64,
    pub property_management_percent: f64,
    pub vacancy_rate: f64,
}

impl InvestmentParameters {
    /// Parameters for `purchase_price` with every other field at its default.
    pub fn with_defaults(purchase_price: f64) -> Self {
        Self {
            purchase_price,
            down_payment_percent: DEFAULT_DOWN_PAYMENT_PERCENT,
            interest_rate: DEFAULT_INTEREST_RATE,
            loan_term_years: DEFAULT_LOAN_TERM_YEARS,
            property_tax_rate: DEFAULT_PROPERTY_TAX_RATE,
            insurance_monthly: DEFAULT_INSURANCE_MONTHLY,
            utilities_monthly: DEFAULT_UTILITIES_MONTHLY,
            maintenance_percent: DEFAULT_MAINTENANCE_PERCENT,
            property_management_percent: DEFAULT_PROPERTY_MANAGEMENT_PERCENT,
            vacancy_rate: DEFAULT_VACANCY_RATE,
        }
    }

    /// Extracts investment parameters from a raw request object.
    ///
    /// Returns `None` when no purchase price was supplied. An absent, `null`,
    /// empty-string or zero `purchasePrice` counts as not supplied, and the
    /// remaining keys are then ignored.
    pub fn from_request(raw: &Map<String, Value>) -> Result<Option<Self>, ValidationError> {
        let purchase_price = match lookup(raw, "purchasePrice") {
            None => return Ok(None),
            Some(Value::String(text)) if text.trim().is_empty() => return Ok(None),
            Some(value) => coerce_f64(value, "purchasePrice")?,
        };
        if purchase_price == 0.0 {
            return Ok(None);
        }

        let defaults = Self::with_defaults(purchase_price);
        let number = |field: &'static str, default: f64| -> Result<f64, ValidationError> {
            lookup(raw, field).map_or(Ok(default), |value| coerce_f64(value, field))
        };
        let loan_term_years = match lookup(raw, "loanTermYears") {
            None => defaults.loan_term_years,
            Some(value) => coerce_whole(coerce_f64(value, "loanTermYears")?, "loanTermYears")?,
        };

        Ok(Some(Self {
            purchase_price,
            down_payment_percent: number("downPaymentPercent", defaults.down_payment_percent)?,
            interest_rate: number("interestRate", defaults.interest_rate)?,
            loan_term_years,
            property_tax_rate: number("propertyTaxRate", defaults.property_tax_rate)?,
            insurance_monthly: number("insuranceMonthly", defaults.insurance_monthly)?,
            utilities_monthly: number("utilitiesMonthly", defaults.utilities_monthly)?,
            maintenance_percent: number("maintenancePercent", defaults.maintenance_percent)?,
            property_management_percent: number(
                "propertyManagementPercent",
                defaults.property_management_percent,
            )?,
            vacancy_rate: number("vacancyRate", defaults.vacancy_rate)?,
        }))
    }
}

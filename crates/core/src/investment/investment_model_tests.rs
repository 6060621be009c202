//! Tests for investment parameter extraction.

#[cfg(test)]
mod tests {
    use crate::errors::ValidationError;
    use crate::investment::InvestmentParameters;
    use serde_json::{json, Value};

    fn parse(value: Value) -> Result<Option<InvestmentParameters>, ValidationError> {
        InvestmentParameters::from_request(value.as_object().unwrap())
    }

    #[test]
    fn test_absent_purchase_price_yields_none() {
        assert_eq!(parse(json!({ "interestRate": 6.5 })).unwrap(), None);
        assert_eq!(parse(json!({ "purchasePrice": null })).unwrap(), None);
        assert_eq!(parse(json!({ "purchasePrice": "" })).unwrap(), None);
        assert_eq!(parse(json!({ "purchasePrice": 0 })).unwrap(), None);
    }

    #[test]
    fn test_defaults_applied_for_omitted_parameters() {
        let params = parse(json!({ "purchasePrice": 1_200_000 })).unwrap().unwrap();
        assert_eq!(params, InvestmentParameters::with_defaults(1_200_000.0));
        assert_eq!(params.down_payment_percent, 20.0);
        assert_eq!(params.interest_rate, 7.0);
        assert_eq!(params.loan_term_years, 30);
        assert_eq!(params.property_tax_rate, 1.25);
        assert_eq!(params.insurance_monthly, 200.0);
        assert_eq!(params.utilities_monthly, 150.0);
        assert_eq!(params.maintenance_percent, 1.0);
        assert_eq!(params.property_management_percent, 8.0);
        assert_eq!(params.vacancy_rate, 5.0);
    }

    #[test]
    fn test_supplied_parameters_override_defaults() {
        let params = parse(json!({
            "purchasePrice": "950000",
            "insuranceMonthly": 300,
            "utilitiesMonthly": "200",
            "loanTermYears": 15
        }))
        .unwrap()
        .unwrap();
        assert_eq!(params.purchase_price, 950_000.0);
        assert_eq!(params.insurance_monthly, 300.0);
        assert_eq!(params.utilities_monthly, 200.0);
        assert_eq!(params.loan_term_years, 15);
        assert_eq!(params.vacancy_rate, 5.0);
    }

    #[test]
    fn test_invalid_parameter_is_rejected() {
        assert_eq!(
            parse(json!({ "purchasePrice": 500000, "interestRate": "high" })),
            Err(ValidationError::InvalidNumber { field: "interestRate" })
        );
        assert_eq!(
            parse(json!({ "purchasePrice": "lots" })),
            Err(ValidationError::InvalidNumber { field: "purchasePrice" })
        );
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(InvestmentParameters::with_defaults(800_000.0)).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        for key in [
            "purchasePrice",
            "downPaymentPercent",
            "interestRate",
            "loanTermYears",
            "propertyTaxRate",
            "insuranceMonthly",
            "utilitiesMonthly",
            "maintenancePercent",
            "propertyManagementPercent",
            "vacancyRate",
        ] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert_eq!(keys.len(), 10);
    }
}

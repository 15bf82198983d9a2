//! Raw questionnaire payload types.
//!
//! The wire shape mirrors what the questionnaire UI submits, which is
//! deliberately loose: numeric fields may be JSON numbers or strings, and
//! any field modeled as a multi-year history may be a bare scalar or a
//! most-recent-first array. Nothing here is trusted; the [`Normalizer`]
//! reduces it all to a canonical [`ValuationInput`].
//!
//! [`Normalizer`]: super::normalize::Normalizer
//! [`ValuationInput`]: super::types::ValuationInput

use rust_decimal::Decimal;
use serde::Deserialize;

/// A numeric field that may arrive as a JSON number or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    /// A JSON number, or a plain numeric string which `Decimal` also accepts.
    Number(Decimal),
    /// Any other string; coerced during normalization, `None` on failure.
    Text(String),
}

impl NumericValue {
    /// Coerces the value to a decimal.
    ///
    /// Strings are parsed after stripping a leading currency symbol,
    /// thousands separators, and surrounding whitespace. Returns `None`
    /// when the value is not numeric.
    #[must_use]
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text
                .trim()
                .trim_start_matches('$')
                .replace(',', "")
                .parse()
                .ok(),
        }
    }
}

/// A field that may arrive as a scalar or a most-recent-first series.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScalarOrSeries {
    /// An ordered sequence of yearly values, most recent at index 0.
    Series(Vec<NumericValue>),
    /// A single value for the current year.
    Scalar(NumericValue),
}

impl ScalarOrSeries {
    /// Returns the current-year value: index 0 of a series, or the scalar.
    #[must_use]
    pub fn current(&self) -> Option<Decimal> {
        match self {
            Self::Series(values) => values.first().and_then(NumericValue::as_decimal),
            Self::Scalar(value) => value.as_decimal(),
        }
    }

    /// Returns the full history, most recent first, skipping non-numeric
    /// entries.
    #[must_use]
    pub fn history(&self) -> Vec<Decimal> {
        match self {
            Self::Series(values) => values.iter().filter_map(NumericValue::as_decimal).collect(),
            Self::Scalar(value) => value.as_decimal().into_iter().collect(),
        }
    }
}

/// One questionnaire submission, exactly as received.
///
/// Field names follow the questionnaire's JSON contract (camelCase).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawValuationInput {
    /// Legal or trading name of the business.
    pub business_name: Option<String>,
    /// Industry key into the multiple table.
    pub industry: Option<String>,
    /// Free-text location.
    pub location: Option<String>,
    /// Year the business was founded.
    pub founded_year: Option<NumericValue>,
    /// Number of employees.
    pub employee_count: Option<NumericValue>,
    /// Annual revenue; scalar or a 3-year most-recent-first history.
    pub annual_revenue: Option<ScalarOrSeries>,
    /// Seller's discretionary earnings for the current year.
    pub sde: Option<NumericValue>,
    /// Owner add-backs included in SDE (display only).
    pub add_backs: Option<NumericValue>,
    /// Owner salary included in SDE (display only).
    pub owner_salary: Option<NumericValue>,
    /// Gross margin percentage.
    pub gross_margin: Option<NumericValue>,
    /// Net margin percentage.
    pub net_margin: Option<NumericValue>,
    /// Owner involvement level: minimal, moderate, or high.
    pub owner_involvement: Option<String>,
    /// Annual customer retention rate percentage.
    pub customer_retention_rate: Option<NumericValue>,
    /// Share of revenue from the top five customers, percentage.
    pub top5_customers_pct: Option<NumericValue>,
    /// Year-over-year revenue growth rate percentage.
    pub revenue_growth_rate: Option<NumericValue>,
    /// Share of revenue that is recurring, percentage.
    pub recurring_revenue_pct: Option<NumericValue>,
    /// User-supplied competitive advantages.
    pub competitive_advantages: Option<Vec<String>>,
    /// User-supplied risk factors.
    pub major_risk_factors: Option<Vec<String>>,
    /// User-supplied growth opportunities.
    pub growth_opportunities: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_numeric_value_from_number() {
        let value: NumericValue = serde_json::from_value(json!(185500)).unwrap();
        assert_eq!(value.as_decimal(), Some(dec!(185500)));
    }

    #[test]
    fn test_numeric_value_from_string() {
        let value: NumericValue = serde_json::from_value(json!("185500.50")).unwrap();
        assert_eq!(value.as_decimal(), Some(dec!(185500.50)));
    }

    #[test]
    fn test_numeric_value_strips_currency_formatting() {
        let value: NumericValue = serde_json::from_value(json!("$1,200,000")).unwrap();
        assert_eq!(value.as_decimal(), Some(dec!(1200000)));
    }

    #[test]
    fn test_numeric_value_junk_is_none() {
        let value: NumericValue = serde_json::from_value(json!("a lot")).unwrap();
        assert_eq!(value.as_decimal(), None);
    }

    #[test]
    fn test_scalar_or_series_scalar() {
        let value: ScalarOrSeries = serde_json::from_value(json!(500000)).unwrap();
        assert_eq!(value.current(), Some(dec!(500000)));
        assert_eq!(value.history(), vec![dec!(500000)]);
    }

    #[test]
    fn test_scalar_or_series_uses_most_recent_year() {
        let value: ScalarOrSeries =
            serde_json::from_value(json!([600000, 550000, 500000])).unwrap();
        assert_eq!(value.current(), Some(dec!(600000)));
        assert_eq!(
            value.history(),
            vec![dec!(600000), dec!(550000), dec!(500000)]
        );
    }

    #[test]
    fn test_raw_input_tolerates_missing_fields() {
        let raw: RawValuationInput = serde_json::from_value(json!({
            "businessName": "Acme Consulting"
        }))
        .unwrap();
        assert_eq!(raw.business_name.as_deref(), Some("Acme Consulting"));
        assert!(raw.sde.is_none());
        assert!(raw.annual_revenue.is_none());
    }

    #[test]
    fn test_raw_input_mixed_number_shapes() {
        let raw: RawValuationInput = serde_json::from_value(json!({
            "businessName": "Acme",
            "industry": "consulting",
            "annualRevenue": ["600,000", 550000],
            "sde": "185500",
            "customerRetentionRate": 92
        }))
        .unwrap();

        let revenue = raw.annual_revenue.unwrap();
        assert_eq!(revenue.current(), Some(dec!(600000)));
        assert_eq!(raw.sde.unwrap().as_decimal(), Some(dec!(185500)));
    }
}

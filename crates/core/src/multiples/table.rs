//! Base SDE-multiple ranges by industry.
//!
//! These are configuration data, not computed values. They reflect typical
//! small-business transaction multiples: product and digital businesses
//! command higher ranges than traditional service businesses. Lookups are
//! static; the selector never consults anything external at call time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An SDE-multiple range with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipleRange {
    /// Lower bound of the multiple.
    pub low: Decimal,
    /// Upper bound of the multiple.
    pub high: Decimal,
}

impl MultipleRange {
    /// Creates a range from bounds.
    #[must_use]
    pub const fn new(low: Decimal, high: Decimal) -> Self {
        Self { low, high }
    }
}

/// Builds a range from tenths, e.g. `range(5, 25)` is 0.5x-2.5x.
fn range(low_tenths: i64, high_tenths: i64) -> MultipleRange {
    MultipleRange::new(Decimal::new(low_tenths, 1), Decimal::new(high_tenths, 1))
}

/// Looks up the base multiple range for an industry key.
///
/// Keys are the normalized (lowercase, trimmed) identifiers the
/// questionnaire uses. Returns `None` for unknown industries; callers fall
/// back to [`default_range`].
#[must_use]
pub fn base_range(industry: &str) -> Option<MultipleRange> {
    let found = match industry {
        "saas" => range(30, 80),
        "software" => range(25, 60),
        "healthcare" => range(20, 45),
        "digital-media" => range(20, 45),
        "ecommerce" => range(20, 40),
        "manufacturing" => range(20, 40),
        "construction" => range(15, 35),
        "marketing-agency" => range(15, 30),
        "retail" => range(15, 30),
        "restaurant" => range(13, 25),
        "professional-services" => range(10, 30),
        "transportation" => range(10, 28),
        "cleaning" => range(9, 22),
        "landscaping" => range(8, 20),
        "consulting" => range(5, 25),
        "personal-services" => range(4, 15),
        _ => return None,
    };
    Some(found)
}

/// Conservative range applied when the industry is not in the table.
#[must_use]
pub fn default_range() -> MultipleRange {
    range(15, 30)
}

/// Human-readable industry label for report text.
///
/// Known keys get their proper names; anything else is title-cased from the
/// key so reports stay readable even for unrecognized industries.
#[must_use]
pub fn industry_label(industry: &str) -> String {
    match industry {
        "saas" => "SaaS".to_string(),
        "ecommerce" => "E-commerce".to_string(),
        "digital-media" => "Digital Media".to_string(),
        "" => "Unspecified".to_string(),
        other => title_case(other),
    }
}

fn title_case(key: &str) -> String {
    key.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_known_industries_have_ordered_bounds() {
        for key in [
            "saas",
            "software",
            "healthcare",
            "digital-media",
            "ecommerce",
            "manufacturing",
            "construction",
            "marketing-agency",
            "retail",
            "restaurant",
            "professional-services",
            "transportation",
            "cleaning",
            "landscaping",
            "consulting",
            "personal-services",
        ] {
            let range = base_range(key).unwrap();
            assert!(range.low > Decimal::ZERO, "{key} low must be positive");
            assert!(range.low <= range.high, "{key} bounds must be ordered");
        }
    }

    #[test]
    fn test_consulting_base_range() {
        assert_eq!(base_range("consulting").unwrap(), MultipleRange::new(dec!(0.5), dec!(2.5)));
    }

    #[test]
    fn test_digital_industries_outrank_service_industries() {
        let saas = base_range("saas").unwrap();
        let consulting = base_range("consulting").unwrap();
        assert!(saas.low > consulting.low);
        assert!(saas.high > consulting.high);
    }

    #[test]
    fn test_unknown_industry_is_none() {
        assert!(base_range("underwater-basket-weaving").is_none());
        assert!(base_range("").is_none());
    }

    #[test]
    fn test_industry_labels() {
        assert_eq!(industry_label("saas"), "SaaS");
        assert_eq!(industry_label("ecommerce"), "E-commerce");
        assert_eq!(industry_label("marketing-agency"), "Marketing Agency");
        assert_eq!(industry_label("underwater-basket-weaving"), "Underwater Basket Weaving");
        assert_eq!(industry_label(""), "Unspecified");
    }
}

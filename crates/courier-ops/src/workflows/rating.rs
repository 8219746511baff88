//! Driver rating derived from late-delivery history.

use serde::{Deserialize, Serialize};

/// Late deliveries a driver may accumulate before the rating is elevated.
pub const LATE_DELIVERY_THRESHOLD: u32 = 5;

/// Delivery driver as seen by the rating calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    #[serde(alias = "number_of_late_deliveries")]
    pub number_of_late_deliveries: u32,
}

impl Driver {
    pub const fn new(number_of_late_deliveries: u32) -> Self {
        Self {
            number_of_late_deliveries,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverRating {
    Standard,
    Elevated,
}

impl DriverRating {
    /// Numeric rating exposed to billing callers.
    pub const fn value(self) -> u8 {
        match self {
            Self::Standard => 1,
            Self::Elevated => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Elevated => "Elevated",
        }
    }
}

pub fn rate_driver(driver: &Driver) -> DriverRating {
    if more_than_five_late_deliveries(driver) {
        DriverRating::Elevated
    } else {
        DriverRating::Standard
    }
}

/// Returns `2` once late deliveries exceed the threshold, `1` otherwise.
pub fn compute_rating(driver: &Driver) -> u8 {
    rate_driver(driver).value()
}

fn more_than_five_late_deliveries(driver: &Driver) -> bool {
    driver.number_of_late_deliveries > LATE_DELIVERY_THRESHOLD
}

/// Serializable rating result shared by the router and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverRatingView {
    pub late_deliveries: u32,
    pub rating: u8,
    pub rating_label: &'static str,
}

impl From<&Driver> for DriverRatingView {
    fn from(driver: &Driver) -> Self {
        let rating = rate_driver(driver);
        Self {
            late_deliveries: driver.number_of_late_deliveries,
            rating: rating.value(),
            rating_label: rating.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!more_than_five_late_deliveries(&Driver::new(5)));
        assert!(more_than_five_late_deliveries(&Driver::new(6)));
    }

    #[test]
    fn zero_late_deliveries_is_standard() {
        assert_eq!(rate_driver(&Driver::default()), DriverRating::Standard);
        assert_eq!(compute_rating(&Driver::default()), 1);
    }

    #[test]
    fn saturated_count_is_elevated() {
        assert_eq!(compute_rating(&Driver::new(u32::MAX)), 2);
    }

    #[test]
    fn driver_accepts_camel_and_snake_case_keys() {
        let camel: Driver =
            serde_json::from_str(r#"{"numberOfLateDeliveries": 7}"#).expect("camelCase parses");
        let snake: Driver =
            serde_json::from_str(r#"{"number_of_late_deliveries": 7}"#).expect("snake parses");
        assert_eq!(camel, snake);
        assert_eq!(camel.number_of_late_deliveries, 7);
    }

    #[test]
    fn driver_rejects_negative_and_missing_counts() {
        assert!(serde_json::from_str::<Driver>(r#"{"numberOfLateDeliveries": -1}"#).is_err());
        assert!(serde_json::from_str::<Driver>(r#"{"numberOfLateDeliveries": "six"}"#).is_err());
        assert!(serde_json::from_str::<Driver>("{}").is_err());
    }

    #[test]
    fn view_carries_value_and_label() {
        let view = DriverRatingView::from(&Driver::new(9));
        assert_eq!(
            view,
            DriverRatingView {
                late_deliveries: 9,
                rating: 2,
                rating_label: "Elevated",
            }
        );
    }
}

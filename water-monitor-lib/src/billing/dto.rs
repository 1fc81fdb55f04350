use serde::{Deserialize, Serialize};

/// One month's bill as returned by `GET /api/consumption`.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct MonthlyConsumption {
    /// Month key in `YYYY-MM` form.
    pub month: String,
    #[serde(rename = "displayMonth", default)]
    pub display_month: Option<String>,
    #[serde(rename = "displayMonthEn", default)]
    pub display_month_en: Option<String>,
    pub liters: f64,
    pub price_per_liter: f64,
    pub total_amount: f64,
    #[serde(default)]
    pub breakdown: Vec<DailyBreakdown>,
}

impl MonthlyConsumption {
    /// Human label for the month: localized label, then the English one,
    /// then the raw key. Empty strings count as absent.
    pub fn display_label(&self) -> &str {
        self.display_month
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.display_month_en.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or(&self.month)
    }
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct DailyBreakdown {
    pub date: String,
    pub liters: f64,
}

/// Body of `POST /api/pay`.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct PaymentRequest {
    pub method: String,
    pub amount: f64,
}

/// Response of `POST /api/pay`. The server echoes more fields (method,
/// amount, timestamp); only these two drive the UI.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct PaymentResult {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_label_falls_back_in_order() {
        let mut bill: MonthlyConsumption = serde_json::from_str(
            r#"{
                "month": "2025-10",
                "displayMonth": "Октябрь 2025",
                "displayMonthEn": "October 2025",
                "liters": 120.5,
                "price_per_liter": 0.48,
                "total_amount": 57.84,
                "breakdown": [{"date": "2025-10-01", "liters": 4.5}]
            }"#,
        )
        .unwrap();

        assert_eq!(bill.display_label(), "Октябрь 2025");
        bill.display_month = None;
        assert_eq!(bill.display_label(), "October 2025");
        bill.display_month_en = Some(String::new());
        assert_eq!(bill.display_label(), "2025-10");
    }

    #[test]
    fn breakdown_defaults_to_empty_when_absent() {
        let bill: MonthlyConsumption = serde_json::from_str(
            r#"{"month":"2025-10","liters":0.0,"price_per_liter":0.48,"total_amount":0.0}"#,
        )
        .unwrap();

        assert!(bill.breakdown.is_empty());
        assert_eq!(bill.display_month, None);
        assert_eq!(bill.display_label(), "2025-10");
    }
}

use serde::{Deserialize, Serialize};

/// Consumption statistics returned by `GET /get_data?days=N`.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Statistics {
    /// Day labels, oldest first. Same length as `liters`.
    pub dates: Vec<String>,
    pub liters: Vec<f64>,
    pub today_liters: f64,
    pub today_cost: f64,
    pub total_liters: f64,
    pub total_cost: f64,
    /// Average daily consumption over the trailing 7 days.
    pub avg_7days: f64,
    pub cost_per_liter: f64,
}

/// Result of `POST /reset`. The reset only counts when `status` is `"ok"`.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct ResetOutcome {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl ResetOutcome {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

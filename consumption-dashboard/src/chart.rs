use water_monitor_lib::format;
use water_monitor_lib::text::{self, Lang};

/// Tariff behind the per-day cost line of the tooltip. The dashboard chart
/// keeps its own rate and does not reuse the server's price per liter.
pub const CHART_COST_PER_LITER: f64 = 0.001;

/// Daily consumption series, one point per day.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartModel {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartModel {
    pub fn new(dates: &[String], liters: &[f64]) -> Self {
        let (labels, values) = dates
            .iter()
            .cloned()
            .zip(liters.iter().copied())
            .unzip();
        ChartModel { labels, values }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Points as (day index, liters).
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v))
            .collect()
    }

    /// Upper bound of the liters axis, with headroom above the peak.
    pub fn y_upper(&self) -> f64 {
        let max = self.values.iter().fold(0.0_f64, |acc, v| acc.max(*v));
        if max <= 0.0 {
            1.0
        } else {
            max * 1.1
        }
    }

    /// The two tooltip lines for one day: consumption and its cost.
    pub fn tooltip(&self, idx: usize, lang: Lang) -> Option<[String; 2]> {
        let liters = *self.values.get(idx)?;
        let consumption = format!(
            "{}: {} {}",
            text::chart_series_label(lang),
            format::liters(liters),
            text::liters_unit(lang)
        );
        let cost = format::currency(liters * CHART_COST_PER_LITER);
        Some([consumption, text::chart_cost_line(lang, &cost)])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn model() -> ChartModel {
        ChartModel::new(
            &["2025-10-14".to_string(), "2025-10-15".to_string()],
            &[10.0, 12.5],
        )
    }

    #[test]
    fn indexes_points_by_day() {
        assert_eq!(model().points(), vec![(0.0, 10.0), (1.0, 12.5)]);
    }

    #[test]
    fn y_axis_leaves_headroom() {
        assert!((model().y_upper() - 13.75).abs() < 1e-9);
        assert_eq!(ChartModel::default().y_upper(), 1.0);
    }

    #[test]
    fn tooltip_uses_the_chart_rate() {
        let lines = model().tooltip(1, Lang::Ru).unwrap();
        assert_eq!(lines[0], "Потребление воды (литры): 12.50 л");
        assert_eq!(lines[1], "Стоимость: 0.0125 тг");
    }

    #[test]
    fn tooltip_is_none_past_the_series() {
        assert!(model().tooltip(2, Lang::En).is_none());
    }
}

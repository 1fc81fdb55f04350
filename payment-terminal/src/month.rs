use chrono::{Datelike, Local};

/// Month the bill is shown for. Navigation never steps past the current
/// month, the server has nothing newer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    pub fn current() -> Self {
        let now = Local::now();
        MonthCursor {
            year: now.year(),
            month: now.month(),
        }
    }

    /// Query key in the server's `YYYY-MM` form.
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            MonthCursor {
                year: self.year - 1,
                month: 12,
            }
        } else {
            MonthCursor {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The following month, unless that would step past `limit`.
    pub fn next_clamped(&self, limit: MonthCursor) -> Self {
        let next = if self.month == 12 {
            MonthCursor {
                year: self.year + 1,
                month: 1,
            }
        } else {
            MonthCursor {
                year: self.year,
                month: self.month + 1,
            }
        };
        if (next.year, next.month) > (limit.year, limit.month) {
            *self
        } else {
            next
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn at(year: i32, month: u32) -> MonthCursor {
        MonthCursor { year, month }
    }

    #[test]
    fn key_is_zero_padded() {
        assert_eq!(at(2025, 3).key(), "2025-03");
        assert_eq!(at(2025, 12).key(), "2025-12");
    }

    #[test]
    fn prev_wraps_into_the_previous_year() {
        assert_eq!(at(2025, 1).prev(), at(2024, 12));
        assert_eq!(at(2025, 7).prev(), at(2025, 6));
    }

    #[test]
    fn next_wraps_into_the_following_year() {
        assert_eq!(at(2024, 12).next_clamped(at(2025, 6)), at(2025, 1));
    }

    #[test]
    fn next_stops_at_the_limit() {
        let limit = at(2025, 10);
        assert_eq!(at(2025, 10).next_clamped(limit), at(2025, 10));
        assert_eq!(at(2025, 9).next_clamped(limit), at(2025, 10));
    }
}

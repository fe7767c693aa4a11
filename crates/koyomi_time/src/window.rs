//! Search windows: bounded intervals of instants handed to root finders.

use crate::{Instant, TimeError};

/// Interval `[start, end]` with `start < end`.
///
/// A window only describes where to look. Whether the searched signal
/// actually crosses its target inside the window is checked by the solver,
/// not here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchWindow {
    start: Instant,
    end: Instant,
}

impl SearchWindow {
    /// Create a window, rejecting non-finite bounds and empty intervals.
    pub fn new(start: Instant, end: Instant) -> Result<Self, TimeError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(TimeError::NonFinite);
        }
        if end <= start {
            return Err(TimeError::EmptyWindow {
                start_jd: start.as_jd_tt(),
                end_jd: end.as_jd_tt(),
            });
        }
        Ok(Self { start, end })
    }

    /// Window of `before_days` before and `after_days` after `center`.
    pub fn around(center: Instant, before_days: f64, after_days: f64) -> Result<Self, TimeError> {
        Self::new(center.add_days(-before_days), center.add_days(after_days))
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn end(&self) -> Instant {
        self.end
    }

    /// Width of the window in days.
    pub fn span_days(&self) -> f64 {
        self.end - self.start
    }

    /// Whether `t` lies inside the closed interval.
    pub fn contains(&self, t: Instant) -> bool {
        t >= self.start && t <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_reversed_bounds() {
        let a = Instant::from_jd_tt(10.0);
        let b = Instant::from_jd_tt(5.0);
        assert!(matches!(
            SearchWindow::new(a, b),
            Err(TimeError::EmptyWindow { .. })
        ));
    }

    #[test]
    fn rejects_zero_width() {
        let a = Instant::from_jd_tt(10.0);
        assert!(SearchWindow::new(a, a).is_err());
    }

    #[test]
    fn rejects_nan() {
        let a = Instant::from_jd_tt(f64::NAN);
        let b = Instant::from_jd_tt(5.0);
        assert_eq!(SearchWindow::new(a, b), Err(TimeError::NonFinite));
    }

    #[test]
    fn around_center() {
        let w = SearchWindow::around(Instant::from_jd_tt(100.0), 60.0, 1.0).unwrap();
        assert_eq!(w.start().as_jd_tt(), 40.0);
        assert_eq!(w.end().as_jd_tt(), 101.0);
        assert!((w.span_days() - 61.0).abs() < 1e-12);
        assert!(w.contains(Instant::from_jd_tt(100.0)));
        assert!(!w.contains(Instant::from_jd_tt(101.5)));
    }
}

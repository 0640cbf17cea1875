// SPDX-License-Identifier: MPL-2.0
//! End-of-session score summary.

/// Message tier shown on the results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Perfect,
    Great,
    Fair,
    KeepTrying,
}

impl Grade {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Grade::Perfect,
            70..=89 => Grade::Great,
            50..=69 => Grade::Fair,
            _ => Grade::KeepTrying,
        }
    }

    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            Grade::Perfect => "grade-perfect",
            Grade::Great => "grade-great",
            Grade::Fair => "grade-fair",
            Grade::KeepTrying => "grade-keep-trying",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    pub correct: usize,
    pub total: usize,
    /// Rounded accuracy, 0 for an empty session.
    pub percentage: u32,
    pub grade: Grade,
}

impl ScoreSummary {
    #[must_use]
    pub fn new(correct: usize, total: usize) -> Self {
        let correct = correct.min(total);
        let percentage = if total == 0 {
            0
        } else {
            ((correct as f64 / total as f64) * 100.0).round() as u32
        };
        Self {
            correct,
            total,
            percentage,
            grade: Grade::from_percentage(percentage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_is_rounded() {
        assert_eq!(ScoreSummary::new(2, 3).percentage, 67);
        assert_eq!(ScoreSummary::new(1, 3).percentage, 33);
        assert_eq!(ScoreSummary::new(5, 5).percentage, 100);
    }

    #[test]
    fn empty_session_scores_zero() {
        let summary = ScoreSummary::new(0, 0);
        assert_eq!(summary.percentage, 0);
        assert_eq!(summary.grade, Grade::KeepTrying);
    }

    #[test]
    fn grade_thresholds() {
        assert_eq!(Grade::from_percentage(100), Grade::Perfect);
        assert_eq!(Grade::from_percentage(90), Grade::Perfect);
        assert_eq!(Grade::from_percentage(89), Grade::Great);
        assert_eq!(Grade::from_percentage(70), Grade::Great);
        assert_eq!(Grade::from_percentage(69), Grade::Fair);
        assert_eq!(Grade::from_percentage(50), Grade::Fair);
        assert_eq!(Grade::from_percentage(49), Grade::KeepTrying);
    }

    #[test]
    fn correct_never_exceeds_total() {
        let summary = ScoreSummary::new(7, 5);
        assert_eq!(summary.correct, 5);
        assert_eq!(summary.percentage, 100);
    }
}

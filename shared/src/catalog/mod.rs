//! Static display data for the marketing site and the member dashboard
//!
//! Every figure here is a literal. Nothing is fetched or computed.

pub mod community;
pub mod insights;
pub mod library;
pub mod marketing;
pub mod member;

/// Percentage change shown next to a stat
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub value: f32,
    pub positive: bool,
}

impl Trend {
    pub const fn up(value: f32) -> Self {
        Self {
            value,
            positive: true,
        }
    }

    pub const fn down(value: f32) -> Self {
        Self {
            value,
            positive: false,
        }
    }

    /// `+12.5%` for positive trends, `-0.8%` / `3%` otherwise
    pub fn label(&self) -> String {
        let sign = if self.positive { "+" } else { "" };
        format!("{}{}%", sign, self.value)
    }

    /// CSS modifier for the trend colour
    pub fn class(&self) -> &'static str {
        if self.positive {
            "trend-up"
        } else {
            "trend-down"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub description: Option<&'static str>,
    pub trend: Option<Trend>,
}

/// Heading/body pair used by FAQ accordions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_labels() {
        assert_eq!(Trend::up(25.0).label(), "+25%");
        assert_eq!(Trend::up(12.5).label(), "+12.5%");
        assert_eq!(Trend::down(-0.8).label(), "-0.8%");
        assert_eq!(Trend::down(3.0).label(), "3%");
    }

    #[test]
    fn trend_class() {
        assert_eq!(Trend::up(1.0).class(), "trend-up");
        assert_eq!(Trend::down(-1.0).class(), "trend-down");
    }

    #[test]
    fn faq_lists_are_populated() {
        assert_eq!(marketing::FAQ_ITEMS.len(), 8);
        assert_eq!(marketing::ABOUT_FAQ_ITEMS.len(), 6);
        for item in marketing::FAQ_ITEMS.iter().chain(marketing::ABOUT_FAQ_ITEMS) {
            assert!(!item.answer.is_empty(), "{} has no answer", item.question);
        }
    }

    #[test]
    fn member_progress_is_a_percentage() {
        assert!(member::CURRENT_COURSE.progress <= 100);
        assert!(member::MEMBERSHIP.progress_to_next <= 100);
        for goal in insights::MONTHLY_GOALS {
            assert!(goal.percentage <= 100.0);
        }
    }
}

//! Mock member data for the dashboard overview

use super::{StatCard, Trend};

pub const MEMBER_FIRST_NAME: &str = "John";

pub const MEMBER_STATS: &[StatCard] = &[
    StatCard {
        title: "Courses Completed",
        value: "3 of 12",
        description: Some("25% of curriculum"),
        trend: Some(Trend::up(25.0)),
    },
    StatCard {
        title: "Learning Streak",
        value: "7 days",
        description: Some("Keep it up!"),
        trend: Some(Trend::up(7.0)),
    },
    StatCard {
        title: "Time This Month",
        value: "24h",
        description: Some("4.8h per week"),
        trend: Some(Trend::up(12.0)),
    },
    StatCard {
        title: "Achievement Badges",
        value: "8",
        description: Some("3 new this month"),
        trend: Some(Trend::up(60.0)),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseProgress {
    pub title: &'static str,
    pub description: &'static str,
    /// Percent complete, 0-100
    pub progress: u8,
    pub next_lesson: &'static str,
    pub estimated_time: &'static str,
    pub category: &'static str,
}

pub const CURRENT_COURSE: CourseProgress = CourseProgress {
    title: "Advanced Sales Funnel Optimization",
    description: "Learn to optimize your sales funnels for maximum conversion rates and revenue growth.",
    progress: 65,
    next_lesson: "Lesson 4: A/B Testing Your Funnels",
    estimated_time: "15 min",
    category: "Marketing",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Coaching,
    Mastermind,
    Workshop,
}

impl SessionKind {
    pub fn label(self) -> &'static str {
        match self {
            SessionKind::Coaching => "1-on-1",
            SessionKind::Mastermind => "Mastermind",
            SessionKind::Workshop => "Workshop",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledSession {
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub duration: &'static str,
    pub kind: SessionKind,
    pub host: Option<&'static str>,
    /// (registered, capacity)
    pub seats: Option<(u32, u32)>,
    pub status: &'static str,
}

pub const UPCOMING_SESSIONS: &[ScheduledSession] = &[
    ScheduledSession {
        title: "1-on-1 Coaching Session",
        description: "Personal strategy session with your business coach",
        date: "Feb 20, 2025",
        time: "2:00 PM EST",
        duration: "45 min",
        kind: SessionKind::Coaching,
        host: Some("Sarah Mitchell"),
        seats: None,
        status: "confirmed",
    },
    ScheduledSession {
        title: "Group Mastermind Call",
        description: "Peer learning session with other Growth tier members",
        date: "Feb 22, 2025",
        time: "1:00 PM EST",
        duration: "90 min",
        kind: SessionKind::Mastermind,
        host: None,
        seats: Some((12, 15)),
        status: "registered",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoCard {
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub badge: &'static str,
    pub category: &'static str,
}

pub const RECOMMENDED: &[VideoCard] = &[
    VideoCard {
        title: "Leadership Mindset Mastery",
        description: "Develop the mindset and skills needed to lead high-performing teams effectively.",
        duration: "32 min",
        badge: "new",
        category: "Leadership",
    },
    VideoCard {
        title: "Financial Planning for Entrepreneurs",
        description: "Essential financial strategies every business owner needs to know for long-term success.",
        duration: "28 min",
        badge: "recommended",
        category: "Finance",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub user: &'static str,
    pub action: &'static str,
    pub target: &'static str,
    pub time: &'static str,
    /// Directed at the member (highlighted with a star)
    pub direct: bool,
}

pub const COMMUNITY_ACTIVITY: &[Activity] = &[
    Activity {
        user: "Alex Rodriguez",
        action: "replied to your question",
        target: "Marketing Strategies Forum",
        time: "2 hours ago",
        direct: true,
    },
    Activity {
        user: "Coach Sarah",
        action: "sent you a message",
        target: "Direct Message",
        time: "4 hours ago",
        direct: true,
    },
    Activity {
        user: "Jennifer Kim",
        action: "connected with you",
        target: "Networking",
        time: "1 day ago",
        direct: false,
    },
    Activity {
        user: "David Thompson",
        action: "liked your post",
        target: "Business Scaling Tips",
        time: "2 days ago",
        direct: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub earned: &'static str,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "First Course Complete",
        description: "Completed your first course module",
        icon: "🎯",
        earned: "2 days ago",
    },
    Achievement {
        title: "7-Day Streak",
        description: "Consistent learning for 7 days",
        icon: "🔥",
        earned: "1 week ago",
    },
    Achievement {
        title: "Community Helper",
        description: "Helped 5 other members",
        icon: "🤝",
        earned: "2 weeks ago",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Membership {
    pub tier: &'static str,
    pub since: &'static str,
    pub next_tier: &'static str,
    pub progress_to_next: u8,
    pub benefits: &'static [&'static str],
}

pub const MEMBERSHIP: Membership = Membership {
    tier: "Growth Member",
    since: "Jan 2024",
    next_tier: "Elite Member",
    progress_to_next: 65,
    benefits: &[
        "1-on-1 coaching",
        "Group masterminds",
        "Premium content",
        "Priority support",
    ],
};

//! Data behind the courses, live sessions, events, resources and profile views

use super::member::{ScheduledSession, SessionKind, VideoCard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Course {
    pub title: &'static str,
    pub instructor: &'static str,
    pub lessons: u32,
    pub duration: &'static str,
    /// Percent complete, 0-100
    pub progress: u8,
    pub category: &'static str,
}

impl Course {
    pub fn status(&self) -> &'static str {
        match self.progress {
            0 => "Not started",
            100 => "Completed",
            _ => "In progress",
        }
    }
}

pub const COURSE_CATEGORIES: &[&str] = &["All", "Marketing", "Leadership", "Finance", "Operations"];

pub const COURSES: &[Course] = &[
    Course {
        title: "Advanced Sales Funnel Optimization",
        instructor: "Sarah Mitchell",
        lessons: 12,
        duration: "4h 20m",
        progress: 65,
        category: "Marketing",
    },
    Course {
        title: "Business Foundations",
        instructor: "James Carter",
        lessons: 8,
        duration: "2h 45m",
        progress: 100,
        category: "Operations",
    },
    Course {
        title: "Leadership Mindset Mastery",
        instructor: "Sarah Mitchell",
        lessons: 10,
        duration: "3h 10m",
        progress: 30,
        category: "Leadership",
    },
    Course {
        title: "Financial Planning for Entrepreneurs",
        instructor: "Daniel Reyes",
        lessons: 9,
        duration: "2h 55m",
        progress: 0,
        category: "Finance",
    },
    Course {
        title: "Hiring Your First Team",
        instructor: "Priya Nair",
        lessons: 7,
        duration: "2h 05m",
        progress: 0,
        category: "Leadership",
    },
    Course {
        title: "Systems That Scale",
        instructor: "James Carter",
        lessons: 11,
        duration: "3h 40m",
        progress: 100,
        category: "Operations",
    },
];

pub const LIVE_SESSIONS: &[ScheduledSession] = &[
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
    ScheduledSession {
        title: "Pricing Strategy Workshop",
        description: "Hands-on workshop on value-based pricing for service businesses",
        date: "Feb 27, 2025",
        time: "11:00 AM EST",
        duration: "60 min",
        kind: SessionKind::Workshop,
        host: Some("Daniel Reyes"),
        seats: Some((38, 50)),
        status: "open",
    },
];

pub const RECORDINGS: &[VideoCard] = &[
    VideoCard {
        title: "Mastermind: Q1 Planning",
        description: "Members share their quarterly goals and get peer feedback.",
        duration: "84 min",
        badge: "replay",
        category: "Mastermind",
    },
    VideoCard {
        title: "Workshop: Writing Offers That Convert",
        description: "A live teardown of member sales pages.",
        duration: "58 min",
        badge: "replay",
        category: "Marketing",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventListing {
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub format: &'static str,
    /// (registered, capacity)
    pub seats: (u32, u32),
}

impl EventListing {
    pub fn seats_left(&self) -> u32 {
        self.seats.1.saturating_sub(self.seats.0)
    }
}

pub const EVENTS: &[EventListing] = &[
    EventListing {
        title: "Spring Growth Summit",
        description: "Two days of keynotes, breakouts and networking with fellow members",
        date: "Mar 14-15, 2025",
        location: "Austin, TX",
        format: "In person",
        seats: (182, 250),
    },
    EventListing {
        title: "Scaling Your Team Workshop",
        description: "Build the hiring plan for your next three roles",
        date: "Mar 5, 2025",
        location: "Online",
        format: "Virtual",
        seats: (97, 120),
    },
    EventListing {
        title: "Elite Members Retreat",
        description: "An invitation-only retreat for Elite tier members",
        date: "Apr 10-12, 2025",
        location: "Napa Valley, CA",
        format: "In person",
        seats: (24, 30),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub title: &'static str,
    pub kind: &'static str,
    pub size: &'static str,
    pub downloads: u64,
}

pub const RESOURCES: &[Resource] = &[
    Resource {
        title: "Monthly Revenue Report Template",
        kind: "Spreadsheet",
        size: "84 KB",
        downloads: 1342,
    },
    Resource {
        title: "Sales Funnel Checklist",
        kind: "PDF",
        size: "1.2 MB",
        downloads: 2087,
    },
    Resource {
        title: "90-Day Business Plan",
        kind: "Template",
        size: "310 KB",
        downloads: 964,
    },
    Resource {
        title: "Hiring Scorecard",
        kind: "PDF",
        size: "540 KB",
        downloads: 718,
    },
    Resource {
        title: "Cash Flow Forecast",
        kind: "Spreadsheet",
        size: "126 KB",
        downloads: 1105,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub business: &'static str,
    pub bio: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "John Parker",
    email: "john.parker@example.com",
    location: "Denver, CO",
    business: "Parker Consulting Group",
    bio: "Consultant helping service businesses build repeatable sales systems.",
};

/// (label, enabled)
pub const NOTIFICATION_PREFERENCES: &[(&str, bool)] = &[
    ("Email me about new courses", true),
    ("Remind me before live sessions", true),
    ("Weekly community digest", false),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_status_from_progress() {
        let statuses: Vec<&str> = COURSES.iter().map(Course::status).collect();
        assert!(statuses.contains(&"Completed"));
        assert!(statuses.contains(&"In progress"));
        assert!(statuses.contains(&"Not started"));
    }

    #[test]
    fn seats_left_never_underflows() {
        let full = EventListing {
            seats: (60, 50),
            ..EVENTS[0]
        };
        assert_eq!(full.seats_left(), 0);
        assert_eq!(EVENTS[0].seats_left(), 68);
    }
}

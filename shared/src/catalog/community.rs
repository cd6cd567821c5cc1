//! Community hub data (dashboard view and the standalone community page)

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommunityStat {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

pub const HUB_STATS: &[CommunityStat] = &[
    CommunityStat {
        label: "Total Members",
        value: "1,247",
        change: "+89 this month",
    },
    CommunityStat {
        label: "Active Today",
        value: "89",
        change: "24 new posts",
    },
    CommunityStat {
        label: "Total Posts",
        value: "2,841",
        change: "+156 this week",
    },
    CommunityStat {
        label: "Engagement Rate",
        value: "87%",
        change: "Above average",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForumCategory {
    pub name: &'static str,
    pub description: &'static str,
    pub posts: u64,
    pub members: u64,
}

pub const FORUM_CATEGORIES: &[ForumCategory] = &[
    ForumCategory {
        name: "General Discussion",
        description: "Open discussions about business and entrepreneurship",
        posts: 567,
        members: 1024,
    },
    ForumCategory {
        name: "Marketing Strategies",
        description: "Share and discuss marketing tactics that work",
        posts: 234,
        members: 789,
    },
    ForumCategory {
        name: "Leadership & Management",
        description: "Leadership insights and team management",
        posts: 189,
        members: 643,
    },
    ForumCategory {
        name: "Financial Planning",
        description: "Financial strategies and investment discussions",
        posts: 156,
        members: 523,
    },
    ForumCategory {
        name: "Success Stories",
        description: "Share your wins and celebrate achievements",
        posts: 98,
        members: 892,
    },
    ForumCategory {
        name: "Q&A with Coaches",
        description: "Get answers from our expert coaches",
        posts: 145,
        members: 1156,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discussion {
    pub user: &'static str,
    pub action: &'static str,
    pub target: &'static str,
    pub title: &'static str,
    pub time: &'static str,
    pub likes: u32,
    pub replies: u32,
}

pub const RECENT_DISCUSSIONS: &[Discussion] = &[
    Discussion {
        user: "Sarah Johnson",
        action: "posted in",
        target: "Marketing Strategies",
        title: "How I increased my conversion rate by 340%",
        time: "2 hours ago",
        likes: 23,
        replies: 8,
    },
    Discussion {
        user: "Mike Chen",
        action: "replied to",
        target: "Leadership & Management",
        title: "Building remote teams that actually work",
        time: "4 hours ago",
        likes: 15,
        replies: 3,
    },
    Discussion {
        user: "Jennifer Rodriguez",
        action: "started discussion",
        target: "Financial Planning",
        title: "Best practices for scaling business finances",
        time: "6 hours ago",
        likes: 31,
        replies: 12,
    },
    Discussion {
        user: "David Kim",
        action: "shared success in",
        target: "Success Stories",
        title: "From $50K to $500K revenue in 18 months",
        time: "1 day ago",
        likes: 87,
        replies: 24,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contributor {
    pub name: &'static str,
    pub posts: u32,
    pub reputation: u64,
    pub badge: &'static str,
}

pub const TOP_CONTRIBUTORS: &[Contributor] = &[
    Contributor {
        name: "Alex Thompson",
        posts: 156,
        reputation: 2840,
        badge: "Elite Contributor",
    },
    Contributor {
        name: "Maria Garcia",
        posts: 134,
        reputation: 2567,
        badge: "Community Leader",
    },
    Contributor {
        name: "Robert Smith",
        posts: 98,
        reputation: 1876,
        badge: "Mentor",
    },
    Contributor {
        name: "Lisa Chen",
        posts: 87,
        reputation: 1654,
        badge: "Rising Star",
    },
];

// Standalone /community page

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Post {
    pub author: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub likes: u32,
    pub comments: u32,
    pub time: &'static str,
    pub category: &'static str,
}

pub const PAGE_STATS: &[CommunityStat] = &[
    CommunityStat {
        label: "Total Members",
        value: "1,247",
        change: "",
    },
    CommunityStat {
        label: "Active Today",
        value: "89",
        change: "",
    },
    CommunityStat {
        label: "Total Posts",
        value: "2,156",
        change: "",
    },
    CommunityStat {
        label: "Total Engagements",
        value: "12,847",
        change: "",
    },
];

pub const RECENT_POSTS: &[Post] = &[
    Post {
        author: "Sarah Johnson",
        title: "How I scaled my business to 7 figures",
        excerpt: "Sharing my journey and the key strategies that helped me break through...",
        likes: 24,
        comments: 8,
        time: "2 hours ago",
        category: "Success Story",
    },
    Post {
        author: "Mike Chen",
        title: "Question about hiring first employees",
        excerpt: "Looking for advice on when and how to make my first hires...",
        likes: 12,
        comments: 15,
        time: "4 hours ago",
        category: "Question",
    },
    Post {
        author: "Emily Rodriguez",
        title: "Monthly revenue report template",
        excerpt: "Created a template that helped me track my business metrics...",
        likes: 31,
        comments: 6,
        time: "1 day ago",
        category: "Resource",
    },
];

/// (name, posts, colour class)
pub const PAGE_CATEGORIES: &[(&str, u32, &str)] = &[
    ("General Discussion", 342, "dot-blue"),
    ("Success Stories", 156, "dot-green"),
    ("Questions & Help", 289, "dot-yellow"),
    ("Resources", 98, "dot-purple"),
    ("Networking", 124, "dot-pink"),
];

/// (name, posts this month)
pub const PAGE_CONTRIBUTORS: &[(&str, u32)] = &[
    ("Alex Thompson", 48),
    ("Maria Garcia", 41),
    ("David Kim", 33),
    ("Lisa Wang", 27),
];

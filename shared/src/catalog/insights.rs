//! Business insights data (dashboard view and the standalone insights page)

use super::{StatCard, Trend};

/// (name, count)
pub const INSIGHT_CATEGORIES: &[(&str, u32)] = &[
    ("All", 18),
    ("Performance", 6),
    ("Growth", 5),
    ("Market Trends", 4),
    ("Strategy", 3),
];

pub const KEY_METRICS: &[(&str, &str)] = &[
    ("+23%", "Revenue Growth"),
    ("87%", "Goal Achievement"),
    ("1,247", "Active Customers"),
    ("$45", "Avg. CAC"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insight {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub kind: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub is_new: bool,
    /// (label, value)
    pub metrics: [(&'static str, &'static str); 3],
}

pub const INSIGHTS: &[Insight] = &[
    Insight {
        title: "Q4 Revenue Performance Analysis",
        excerpt: "Deep dive into your business performance metrics, identifying key growth drivers \
                  and areas for optimization in the upcoming quarter.",
        kind: "Performance Analysis",
        date: "Dec 20, 2024",
        read_time: "12 min read",
        category: "Performance",
        is_new: true,
        metrics: [("Revenue", "+23%"), ("Growth", "+15%"), ("Efficiency", "94%")],
    },
    Insight {
        title: "Market Expansion Opportunities",
        excerpt: "Strategic analysis of untapped market segments and expansion opportunities \
                  based on current industry trends and competitive landscape.",
        kind: "Strategic Report",
        date: "Dec 18, 2024",
        read_time: "8 min read",
        category: "Growth",
        is_new: false,
        metrics: [
            ("Opportunities", "5"),
            ("Potential", "$2.4M"),
            ("Timeline", "6 months"),
        ],
    },
    Insight {
        title: "Customer Acquisition Cost Optimization",
        excerpt: "Comprehensive breakdown of your CAC across different channels and strategies \
                  to improve ROI on marketing spend.",
        kind: "Financial Analysis",
        date: "Dec 15, 2024",
        read_time: "10 min read",
        category: "Performance",
        is_new: false,
        metrics: [
            ("Current CAC", "$45"),
            ("Target CAC", "$32"),
            ("Improvement", "28%"),
        ],
    },
    Insight {
        title: "Competitive Intelligence Report",
        excerpt: "Latest insights on competitor strategies, market positioning, and opportunities \
                  to differentiate your business.",
        kind: "Market Research",
        date: "Dec 12, 2024",
        read_time: "15 min read",
        category: "Market Trends",
        is_new: false,
        metrics: [("Competitors", "12"), ("Threats", "3"), ("Opportunities", "7")],
    },
    Insight {
        title: "Team Productivity Benchmarking",
        excerpt: "Analysis of team performance metrics compared to industry standards and \
                  recommendations for productivity improvements.",
        kind: "Performance Analysis",
        date: "Dec 10, 2024",
        read_time: "9 min read",
        category: "Performance",
        is_new: false,
        metrics: [("Productivity", "87%"), ("Target", "92%"), ("Gap", "5%")],
    },
    Insight {
        title: "Digital Transformation Roadmap",
        excerpt: "Strategic framework for implementing technology solutions that will drive \
                  efficiency and competitive advantage.",
        kind: "Strategic Plan",
        date: "Dec 8, 2024",
        read_time: "14 min read",
        category: "Strategy",
        is_new: false,
        metrics: [
            ("Phases", "4"),
            ("Timeline", "18 months"),
            ("Investment", "$150K"),
        ],
    },
];

// Standalone /insights page

pub const KPI_METRICS: &[StatCard] = &[
    StatCard {
        title: "Monthly Revenue",
        value: "$47,890",
        description: Some("vs last month"),
        trend: Some(Trend::up(12.5)),
    },
    StatCard {
        title: "Active Members",
        value: "1,247",
        description: Some("vs last month"),
        trend: Some(Trend::up(8.3)),
    },
    StatCard {
        title: "Conversion Rate",
        value: "3.2%",
        description: Some("vs last month"),
        trend: Some(Trend::down(-0.8)),
    },
    StatCard {
        title: "Engagement Score",
        value: "87%",
        description: Some("vs last month"),
        trend: Some(Trend::up(5.1)),
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Goal {
    pub title: &'static str,
    pub current: u64,
    pub target: u64,
    pub dollars: bool,
    pub percentage: f32,
}

pub const MONTHLY_GOALS: &[Goal] = &[
    Goal {
        title: "Revenue Target",
        current: 47890,
        target: 60000,
        dollars: true,
        percentage: 79.8,
    },
    Goal {
        title: "New Members",
        current: 89,
        target: 120,
        dollars: false,
        percentage: 74.2,
    },
    Goal {
        title: "Content Published",
        current: 28,
        target: 35,
        dollars: false,
        percentage: 80.0,
    },
    Goal {
        title: "Event Attendance",
        current: 234,
        target: 300,
        dollars: false,
        percentage: 78.0,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopContent {
    pub title: &'static str,
    pub kind: &'static str,
    pub views: u64,
    /// Percent
    pub engagement: u8,
    pub revenue: u64,
}

pub const TOP_CONTENT: &[TopContent] = &[
    TopContent {
        title: "Building Your First Million Dollar Business",
        kind: "Video Course",
        views: 1847,
        engagement: 94,
        revenue: 12450,
    },
    TopContent {
        title: "Leadership Masterclass Series",
        kind: "Live Stream",
        views: 1234,
        engagement: 89,
        revenue: 8930,
    },
    TopContent {
        title: "Financial Freedom Blueprint",
        kind: "Blog Series",
        views: 2156,
        engagement: 76,
        revenue: 6780,
    },
    TopContent {
        title: "Scaling Your Team Workshop",
        kind: "Event",
        views: 567,
        engagement: 92,
        revenue: 15670,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierBreakdown {
    pub name: &'static str,
    pub members: u64,
    pub revenue: u64,
    pub growth: &'static str,
}

pub const MEMBERSHIP_TIERS: &[TierBreakdown] = &[
    TierBreakdown {
        name: "Basic",
        members: 456,
        revenue: 9120,
        growth: "+5.2%",
    },
    TierBreakdown {
        name: "Premium",
        members: 327,
        revenue: 19620,
        growth: "+8.1%",
    },
    TierBreakdown {
        name: "Elite",
        members: 89,
        revenue: 17800,
        growth: "+15.3%",
    },
    TierBreakdown {
        name: "VIP",
        members: 23,
        revenue: 11500,
        growth: "+22.1%",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benchmark {
    pub metric: &'static str,
    pub yours: &'static str,
    pub industry: &'static str,
    pub status: &'static str,
}

pub const BENCHMARKS: &[Benchmark] = &[
    Benchmark {
        metric: "Churn Rate",
        yours: "2.1%",
        industry: "5.3%",
        status: "excellent",
    },
    Benchmark {
        metric: "Monthly Growth",
        yours: "12.5%",
        industry: "8.2%",
        status: "excellent",
    },
    Benchmark {
        metric: "Customer LTV",
        yours: "$2,340",
        industry: "$1,890",
        status: "good",
    },
    Benchmark {
        metric: "Engagement Rate",
        yours: "87%",
        industry: "72%",
        status: "excellent",
    },
];

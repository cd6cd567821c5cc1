//! Public site copy: landing, about and FAQ pages

use super::FaqItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Headline {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportChannel {
    pub title: &'static str,
    pub body: &'static str,
    pub action: &'static str,
    pub href: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub members: &'static str,
}

pub const HERO_TITLE: &str = "Membership Platform";
pub const HERO_TAGLINE: &str =
    "Build a branded, subscription-based community with courses, live sessions and events.";

pub const HOME_FEATURES: &[Feature] = &[
    Feature {
        title: "📚 Courses",
        body: "Structured video curriculum your members can work through at their own pace",
    },
    Feature {
        title: "🎥 Live Sessions",
        body: "Coaching calls and group masterminds scheduled right from the dashboard",
    },
    Feature {
        title: "👥 Community",
        body: "Forums, success stories and direct messages between members",
    },
    Feature {
        title: "📈 Insights",
        body: "Business reports and benchmarks delivered to every member tier",
    },
];

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Basic",
        price: "$29/month",
        members: "Up to 1,000 members",
    },
    Plan {
        name: "Professional",
        price: "$79/month",
        members: "Up to 10,000 members",
    },
    Plan {
        name: "Enterprise",
        price: "$199/month",
        members: "Unlimited members",
    },
];

pub const ABOUT_TITLE: &str = "Building the Future of Membership Platforms";
pub const ABOUT_INTRO: &str = "We help creators, educators, and businesses build their own branded \
subscription-based communities with powerful tools and seamless experiences.";

pub const MISSION: &str = "To democratize the creation of membership platforms, empowering \
creators and businesses to build sustainable revenue streams through community-driven content \
and experiences.";

pub const VALUES: &str = "We believe in transparency, innovation, and putting creators first. \
Every feature we build is designed to help you succeed and grow your community.";

pub const ABOUT_STATS: &[Headline] = &[
    Headline {
        value: "10,000+",
        label: "Active Creators",
    },
    Headline {
        value: "$50M+",
        label: "Revenue Generated",
    },
    Headline {
        value: "500K+",
        label: "Members Served",
    },
    Headline {
        value: "99.9%",
        label: "Uptime",
    },
];

pub const TEAMS: &[Feature] = &[
    Feature {
        title: "Leadership Team",
        body: "Experienced executives with deep knowledge in SaaS and creator economy",
    },
    Feature {
        title: "Engineering Team",
        body: "World-class developers building scalable, secure solutions",
    },
    Feature {
        title: "Support Team",
        body: "Dedicated customer success specialists ready to help you succeed",
    },
];

pub const ABOUT_FAQ_ITEMS: &[FaqItem] = &[
    FaqItem {
        question: "What is included in each membership tier?",
        answer: &[
            "Our Basic plan ($29/month) includes up to 1,000 members, basic content management, \
             email support, and standard integrations. The Professional plan ($79/month) adds \
             advanced analytics, priority support, custom branding, video streaming, and API access.",
            "The Enterprise plan ($199/month) provides unlimited members, custom analytics, \
             dedicated support, white-label solutions, advanced security, and custom development.",
        ],
    },
    FaqItem {
        question: "How do I cancel my subscription?",
        answer: &[
            "You can cancel your subscription at any time through your account dashboard. Simply \
             go to Settings → Billing and click the \"Cancel Subscription\" button. There are no \
             cancellation fees or penalties.",
            "Your access will continue until the end of your current billing period. You can \
             reactivate your subscription at any time and pick up right where you left off.",
        ],
    },
    FaqItem {
        question: "Can I upgrade or downgrade my plan?",
        answer: &[
            "Yes, you can upgrade or downgrade your plan at any time through your account \
             dashboard. Changes take effect immediately, and billing is adjusted on a prorated basis.",
            "When upgrading, you'll only pay the difference for the remaining billing period. When \
             downgrading, you'll receive a credit for the unused portion of your current plan.",
        ],
    },
    FaqItem {
        question: "Do you offer refunds?",
        answer: REFUND_ANSWER,
    },
    FaqItem {
        question: "How do I access member-only content?",
        answer: &[
            "Once you're a member, you'll have access to all member-only content through your \
             dashboard. This includes exclusive courses, downloadable resources, community forums, \
             and live events.",
            "You can access content on any device - desktop, tablet, or mobile. Our platform syncs \
             across all devices, so you can continue learning wherever you are.",
        ],
    },
    FaqItem {
        question: "Is my payment information secure?",
        answer: &[
            "Absolutely. We use Stripe for all payment processing, which is PCI DSS Level 1 \
             compliant - the highest level of security certification in the payment industry. Your \
             payment information is encrypted and never stored on our servers.",
            "We also implement additional security measures including SSL encryption, two-factor \
             authentication, and regular security audits to ensure your data is always protected.",
        ],
    },
];

const REFUND_ANSWER: &[&str] = &[
    "We offer a 30-day money-back guarantee for all new subscriptions. If you're not satisfied \
     with our platform within the first 30 days, we'll provide a full refund, no questions asked.",
    "After the 30-day period, refunds are handled on a case-by-case basis. We're committed to \
     your satisfaction and will work with you to resolve any issues you may have.",
];

pub const FAQ_INTRO: &str = "Find answers to common questions about our membership platform, \
billing, features, and support.";

pub const FAQ_ITEMS: &[FaqItem] = &[
    FaqItem {
        question: "What is included in my membership?",
        answer: &[
            "Your membership provides exclusive access to premium content, community forums, and \
             member-only resources. You'll get unlimited access to courses, downloadable \
             materials, and direct communication with instructors and fellow members.",
            "Additional benefits include early access to new content, exclusive workshops, \
             networking opportunities, and priority support from our team.",
        ],
    },
    FaqItem {
        question: "How does billing and subscription work?",
        answer: &[
            "We offer flexible monthly and annual subscription plans. All payments are processed \
             securely through Stripe with automatic renewal. You can choose between Basic \
             ($29/month), Professional ($79/month), or Enterprise ($199/month) plans.",
            "You can upgrade, downgrade, or cancel your subscription at any time through your \
             account dashboard. No hidden fees or cancellation charges. We also offer a 14-day \
             free trial with no credit card required.",
        ],
    },
    FaqItem {
        question: "What payment methods do you accept?",
        answer: &[
            "We accept all major credit cards including Visa, Mastercard, American Express, and \
             Discover. We also support PayPal for international payments and bank transfers for \
             annual enterprise plans.",
            "All payments are processed securely through Stripe, ensuring your financial \
             information is protected with bank-level security standards.",
        ],
    },
    FaqItem {
        question: "Can I cancel my subscription anytime?",
        answer: &[
            "Yes, you can cancel your subscription at any time through your account dashboard. \
             There are no cancellation fees or penalties. Your access will continue until the end \
             of your current billing period.",
            "If you cancel, you'll still have access to all content until your subscription \
             expires. You can reactivate your subscription at any time and pick up right where \
             you left off.",
        ],
    },
    FaqItem {
        question: "How do I get technical support?",
        answer: &[
            "Our support team is available 24/7 to help with any technical issues or questions \
             about your membership. You can access our comprehensive help center, submit support \
             tickets, or join our community forums for peer-to-peer assistance.",
            "For urgent issues, you can contact us via live chat, email, or phone. Enterprise \
             customers receive dedicated support with priority response times.",
        ],
    },
    FaqItem {
        question: "Is there a mobile app available?",
        answer: &[
            "Yes! We offer native mobile apps for both iOS and Android devices. The apps provide \
             full access to all platform features including content streaming, community forums, \
             and push notifications for new content.",
            "You can download our mobile apps from the App Store or Google Play Store. The apps \
             sync seamlessly with your web account, so you can continue learning on any device.",
        ],
    },
    FaqItem {
        question: "What happens if I exceed my member limit?",
        answer: &[
            "If you approach your member limit, we'll notify you via email and in your dashboard. \
             You can upgrade your plan at any time to accommodate more members without any \
             interruption to your service.",
            "Basic plans support up to 1,000 members, Professional plans support up to 10,000 \
             members, and Enterprise plans have unlimited member capacity.",
        ],
    },
    FaqItem {
        question: "Do you offer refunds?",
        answer: REFUND_ANSWER,
    },
];

pub const SUPPORT_CHANNELS: &[SupportChannel] = &[
    SupportChannel {
        title: "Live Chat",
        body: "Get instant help from our support team",
        action: "Start Chat",
        href: None,
    },
    SupportChannel {
        title: "Email Support",
        body: "Send us a detailed message",
        action: "Send Email",
        href: Some("mailto:support@membershipplatform.com"),
    },
    SupportChannel {
        title: "Phone Support",
        body: "Call us during business hours",
        action: "Call Now",
        href: None,
    },
];

//! Copy for the landing page.

use crate::navigation::SectionId;

#[derive(Clone, Copy, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "⚡",
        title: "Lightning Fast",
        description: "Enjoy ultra-fast connections with our optimized global network infrastructure.",
    },
    Feature {
        icon: "🔒",
        title: "Military Grade Security",
        description: "Protect your data with AES-256 encryption and next-generation VLESS protocol.",
    },
    Feature {
        icon: "🌍",
        title: "Global Coverage",
        description: "Connect to servers in over 50 countries with one click.",
    },
    Feature {
        icon: "📱",
        title: "Cross-Platform",
        description: "Use AHMED on all your devices - Android, iOS, Windows, Mac, and Linux.",
    },
];

#[derive(Clone, Copy, PartialEq)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [Step; 3] = [
    Step {
        title: "Download & Install",
        description: "Get our app from the App Store, Google Play, or desktop platforms.",
    },
    Step {
        title: "Select Server",
        description: "Choose from our global network of high-speed servers in over 50 countries.",
    },
    Step {
        title: "Connect Securely",
        description: "Establish a secure connection with one click and browse anonymously.",
    },
];

#[derive(Clone, Copy, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub tagline: &'static str,
    pub price: &'static str,
    pub perks: &'static [&'static str],
    pub cta: &'static str,
    pub featured: bool,
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Free Trial",
        tagline: "Limited features for testing",
        price: "FREE",
        perks: &["Limited bandwidth", "1 device", "Basic security", "Limited servers"],
        cta: "Start Free Trial",
        featured: false,
    },
    Plan {
        name: "Pro",
        tagline: "Premium experience",
        price: "$9.99/mo",
        perks: &[
            "Unlimited bandwidth",
            "5 devices",
            "Advanced security",
            "All servers",
            "Priority support",
        ],
        cta: "Subscribe Now",
        featured: true,
    },
    Plan {
        name: "Enterprise",
        tagline: "For businesses and teams",
        price: "$29.99/mo",
        perks: &[
            "Unlimited bandwidth",
            "Unlimited devices",
            "Custom security",
            "All servers + dedicated",
            "Dedicated support",
            "Custom integrations",
        ],
        cta: "Contact Sales",
        featured: false,
    },
];

#[derive(Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

impl Testimonial {
    /// Initials of the first two words of the name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Ali Mohamed",
        role: "Freelance Developer",
        quote: "I've tried many VPN services, but AHMED is by far the fastest and most reliable. The VLESS protocol makes a huge difference in performance!",
    },
    Testimonial {
        name: "Sara Rahman",
        role: "Marketing Professional",
        quote: "The interface is clean and intuitive. Connecting to different servers is super easy, and I love how lightweight the app is on my phone.",
    },
    Testimonial {
        name: "Kamal Mehta",
        role: "Digital Nomad",
        quote: "As a frequent traveler, AHMED has been a lifesaver. I can access all my favorite content no matter where I am in the world.",
    },
];

#[derive(Clone, Copy, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [FaqEntry; 6] = [
    FaqEntry {
        question: "What is VLESS protocol?",
        answer: "VLESS is a lightweight, secure, and multiplexing proxy protocol designed for high-performance scenarios. It's known for its efficiency and low latency, making it perfect for modern internet usage.",
    },
    FaqEntry {
        question: "Is AHMED VPN free to use?",
        answer: "We offer a free trial version with limited features, but our full-featured premium plans provide the best experience with unlimited bandwidth and advanced security features.",
    },
    FaqEntry {
        question: "How many devices can I use with one account?",
        answer: "Our free plan allows one device, while the Pro plan supports up to 5 devices simultaneously. Enterprise plans offer unlimited device connections.",
    },
    FaqEntry {
        question: "Does AHMED keep logs of my activity?",
        answer: "Absolutely not! We have a strict no-logs policy. Your online activities, browsing history, and personal information are never recorded or stored.",
    },
    FaqEntry {
        question: "What platforms does AHMED support?",
        answer: "AHMED works on all major platforms including Windows, macOS, Linux, Android, and iOS. We also provide browser extensions for Chrome and Firefox.",
    },
    FaqEntry {
        question: "How do I get VLESS configuration files?",
        answer: "You can easily generate VLESS configuration files through our app or website once you've subscribed to one of our plans. The configurations can be imported into compatible clients like Xray or V2Ray.",
    },
];

pub const QUICK_LINKS: [(&str, SectionId); 4] = [
    ("Features", SectionId::Features),
    ("How It Works", SectionId::How),
    ("Pricing", SectionId::Pricing),
    ("FAQ", SectionId::Faq),
];

pub const LEGAL_LINKS: [&str; 4] = [
    "Privacy Policy",
    "Terms of Service",
    "Cookie Policy",
    "Refund Policy",
];

pub const SOCIAL_LINKS: [&str; 4] = ["Twitter", "LinkedIn", "Facebook", "Instagram"];

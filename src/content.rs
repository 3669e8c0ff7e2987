use serde::{Deserialize, Serialize};

pub const SITE_NAME: &str = "Aditya Kini";
pub const SITE_TAGLINE: &str = "Full Stack Developer | Cloud Enthusiast | Problem Solver";
pub const GITHUB_URL: &str = "https://github.com/Kini7686";

/// Closed set of icon identifiers used by the data tables. The presentation
/// layer resolves these to icon-font classes; data never carries markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    ArrowUpRight,
    Award,
    BadgeCheck,
    Book,
    Brain,
    Briefcase,
    Calendar,
    Check,
    ChevronDown,
    Close,
    Cloud,
    Code,
    Download,
    External,
    Folder,
    GitHub,
    Graduation,
    Heart,
    LinkedIn,
    Location,
    Mail,
    Menu,
    Phone,
    Search,
    Send,
    Server,
    Shield,
    Spinner,
    Wrench,
}

impl Icon {
    pub fn class(&self) -> &'static str {
        match self {
            Icon::ArrowRight => "extra-arrow-right",
            Icon::ArrowUpRight => "extra-arrow-up-right",
            Icon::Award => "extra-award",
            Icon::BadgeCheck => "extra-badge-check",
            Icon::Book => "extra-book",
            Icon::Brain => "extra-brain",
            Icon::Briefcase => "extra-briefcase",
            Icon::Calendar => "extra-calendar",
            Icon::Check => "extra-check",
            Icon::ChevronDown => "extra-chevron-down",
            Icon::Close => "extra-close",
            Icon::Cloud => "extra-cloud",
            Icon::Code => "extra-code",
            Icon::Download => "extra-download",
            Icon::External => "extra-link",
            Icon::Folder => "extra-folder",
            Icon::GitHub => "devicon-github-plain",
            Icon::Graduation => "extra-graduation",
            Icon::Heart => "extra-heart",
            Icon::LinkedIn => "devicon-linkedin-plain",
            Icon::Location => "extra-location",
            Icon::Mail => "extra-email",
            Icon::Menu => "extra-menu",
            Icon::Phone => "extra-phone",
            Icon::Search => "extra-search",
            Icon::Send => "extra-send",
            Icon::Server => "extra-server",
            Icon::Shield => "extra-shield",
            Icon::Spinner => "extra-spinner",
            Icon::Wrench => "extra-wrench",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub section: &'static str,
}

pub const NAV_LINKS: [NavLink; 9] = [
    NavLink { label: "Home", section: "home" },
    NavLink { label: "About", section: "about" },
    NavLink { label: "Skills", section: "skills" },
    NavLink { label: "Achievements", section: "achievements" },
    NavLink { label: "Publications", section: "publications" },
    NavLink { label: "Projects", section: "projects" },
    NavLink { label: "Experience", section: "experience" },
    NavLink { label: "Education", section: "education" },
    NavLink { label: "Contact", section: "contact" },
];

// The footer deliberately skips Publications to keep to one row.
pub const FOOTER_LINKS: [NavLink; 8] = [
    NavLink { label: "Home", section: "home" },
    NavLink { label: "About", section: "about" },
    NavLink { label: "Skills", section: "skills" },
    NavLink { label: "Achievements", section: "achievements" },
    NavLink { label: "Projects", section: "projects" },
    NavLink { label: "Experience", section: "experience" },
    NavLink { label: "Education", section: "education" },
    NavLink { label: "Contact", section: "contact" },
];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub icon: Icon,
    pub href: &'static str,
    pub label: &'static str,
}

pub const HERO_SOCIALS: [SocialLink; 4] = [
    SocialLink {
        icon: Icon::GitHub,
        href: "https://github.com/Kini7686",
        label: "GitHub",
    },
    SocialLink {
        icon: Icon::LinkedIn,
        href: "https://linkedin.com/in/aditya-kini/",
        label: "LinkedIn",
    },
    SocialLink {
        icon: Icon::External,
        href: "https://kini7686.github.io/Portfolio/",
        label: "Portfolio",
    },
    SocialLink {
        icon: Icon::Mail,
        href: "mailto:akini01@syr.edu",
        label: "Email",
    },
];

pub const CONTACT_SOCIALS: [SocialLink; 3] = [
    SocialLink {
        icon: Icon::GitHub,
        href: "https://github.com/Kini7686",
        label: "GitHub",
    },
    SocialLink {
        icon: Icon::LinkedIn,
        href: "https://linkedin.com/in/aditya-kini/",
        label: "LinkedIn",
    },
    SocialLink {
        icon: Icon::External,
        href: "https://aditya-kini.vercel.app/",
        label: "Portfolio",
    },
];

pub const FOOTER_SOCIALS: [SocialLink; 3] = [
    SocialLink {
        icon: Icon::GitHub,
        href: "https://github.com/Kini7686",
        label: "GitHub",
    },
    SocialLink {
        icon: Icon::LinkedIn,
        href: "https://linkedin.com/in/aditya-kini/",
        label: "LinkedIn",
    },
    SocialLink {
        icon: Icon::Mail,
        href: "mailto:akini01@syr.edu",
        label: "Email",
    },
];

/// A headline stat animated by the count-up in the About section.
/// `value` follows the grammar in `crate::anim::StatValue`.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: "3+", label: "Years Experience" },
    Stat { value: "10+", label: "Projects Built" },
    Stat { value: "2", label: "AWS Certifications" },
    Stat { value: "3.6", label: "GPA" },
];

#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        icon: Icon::Code,
        title: "Full Stack Development",
        description: "React.js, Node.js, Express.js, MongoDB",
    },
    Highlight {
        icon: Icon::Cloud,
        title: "Cloud & DevOps",
        description: "AWS, Firebase, Docker, CI/CD",
    },
    Highlight {
        icon: Icon::Award,
        title: "Certified Professional",
        description: "AWS Certified Developer - Associate",
    },
    Highlight {
        icon: Icon::Book,
        title: "Continuous Learning",
        description: "MS in CS at Syracuse University",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: Icon,
    pub skills: &'static [&'static str],
    pub color: &'static str,
}

pub const SKILL_CATEGORIES: [SkillCategory; 6] = [
    SkillCategory {
        title: "Programming Languages",
        icon: Icon::Code,
        skills: &[
            "Python", "C/C++", "Java", "JavaScript", "PHP", "SQL", "NoSQL", "HTML", "CSS",
            "SASS", "Bash Script",
        ],
        color: "from-amber-100 to-yellow-100",
    },
    SkillCategory {
        title: "Frameworks & Libraries",
        icon: Icon::Server,
        skills: &[
            "React.js", "Next.js", "Node.js", "Express.js", "Flask", "Bootstrap",
            "Tailwind CSS", "Socket.IO",
        ],
        color: "from-orange-100 to-amber-100",
    },
    SkillCategory {
        title: "Cloud & DevOps",
        icon: Icon::Cloud,
        skills: &[
            "AWS", "Firebase", "Docker", "Git/GitHub", "Postman", "REST APIs",
            "CI/CD Pipelines",
        ],
        color: "from-yellow-100 to-amber-100",
    },
    SkillCategory {
        title: "AI/ML & Data",
        icon: Icon::Brain,
        skills: &[
            "TensorFlow", "PyTorch", "Pandas", "NumPy", "Scikit-learn", "NLP", "GenAI",
            "Ollama",
        ],
        color: "from-amber-50 to-orange-100",
    },
    SkillCategory {
        title: "Networking & Security",
        icon: Icon::Shield,
        skills: &[
            "Wireshark", "Nmap", "Burp Suite", "Cisco Packet Tracer", "Firewalls",
            "Network Monitoring",
        ],
        color: "from-yellow-50 to-amber-100",
    },
    SkillCategory {
        title: "Tools & Platforms",
        icon: Icon::Wrench,
        skills: &["Figma", "MongoDB", "Neo4j", "Streamlit", "WordPress", "AWS CloudFormation"],
        color: "from-amber-100 to-yellow-50",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub date: Option<&'static str>,
    pub link: Option<&'static str>,
}

pub const ACHIEVEMENTS: [Achievement; 3] = [
    Achievement {
        title: "AWS Certified Developer - Associate",
        description: "Professional certification validating expertise in developing, deploying, and debugging cloud-based applications using AWS.",
        icon: Icon::BadgeCheck,
        date: Some("2024"),
        link: Some("#"),
    },
    Achievement {
        title: "AWS Academy Cloud Foundations",
        description: "Completed comprehensive training in AWS Cloud Services with hands-on experience in secure deployments and resource optimization.",
        icon: Icon::Award,
        date: Some("2022"),
        link: Some("#"),
    },
    Achievement {
        title: "OSINT Automation Application",
        description: "Demonstrated project idea at WEschool's 4th International Conference, showcasing 6 modules designed to skim secured data and files across internet.",
        icon: Icon::Search,
        date: Some("2023"),
        link: None,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Publication {
    pub title: &'static str,
    pub journal: &'static str,
    pub impact_factor: &'static str,
    pub link: Option<&'static str>,
}

pub const PUBLICATIONS: [Publication; 2] = [
    Publication {
        title: "CAR AND HOUSE PRICE PREDICTION USING LINEAR, LASSO AND RIDGE REGRESSION",
        journal: "International Journal of Advance and Innovative Research, Volume 8, Issue 4 (IX)",
        impact_factor: "8.126",
        link: Some("https://iaraedu.com/pdf/ijair-volume-8-issue-4-ix-october-december-2021.pdf#page=81"),
    },
    Publication {
        title: "OSINT Automation Application",
        journal: "International Journal of Scientific Research in Computer Science, Engineering and Information Technology (IJSRCSEIT)",
        impact_factor: "7.254",
        link: Some("https://ijsrcseit.com/paper/CSEIT232551.pdf"),
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub repo_url: Option<&'static str>,
    pub featured: bool,
}

pub const PROJECTS: [Project; 5] = [
    Project {
        title: "KiniBot",
        description: "A real-time collaborative IDE enabling multi-user coding with <200ms latency. Features an integrated Ollama-based AI assistant for live code debugging and summarization, reducing error resolution time by 60%. Includes a secure browser compiler supporting Python, Java, and C/C++ with shared real-time outputs.",
        image: "/project-kinibot.png",
        technologies: &[
            "React.js", "Next.js", "Node.js", "Express.js", "Socket.IO", "Python", "C/C++",
            "Java", "Ollama",
        ],
        live_url: None,
        repo_url: Some("https://github.com/Kini7686/KiniBot-Real-Time-Code-Collaboration-with-Built-In-AI"),
        featured: true,
    },
    Project {
        title: "CleanClick",
        description: "An eco-conscious social platform for sharing sustainable products and building green communities. Features direct eco-product sharing, AWS-powered image storage, JWT and Google OAuth authentication with role-based access control.",
        image: "/project-cleanclick.png",
        technologies: &["React.js", "Node.js", "Express.js", "MongoDB", "AWS", "JWT"],
        live_url: None,
        repo_url: Some("https://github.com/Kini7686"),
        featured: true,
    },
    Project {
        title: "AI Research Paper Scraper",
        description: "An AI-driven web application that fetches and summarizes IEEE and arXiv papers via keyword-based search. Uses TF-IDF and entity extraction to construct a Neo4j knowledge graph visualizing topic connections across research domains.",
        image: "/project-research.jpg",
        technologies: &["Python", "Flask", "Streamlit", "Neo4j", "OpenAI API"],
        live_url: None,
        repo_url: Some("https://github.com/Kini7686"),
        featured: false,
    },
    Project {
        title: "FoodConnectSU",
        description: "An AI-powered campus food waste reduction platform that enables students to list and claim surplus meals in real time. Integrates food image recognition and QR-based pickup verification to ensure secure, efficient redistribution of unused food.",
        image: "/project-foodconnect.jpg",
        technologies: &["Python", "Streamlit", "Firebase", "REST API", "OpenCV", "Tesseract OCR"],
        live_url: None,
        repo_url: Some("https://github.com/Kini7686/FoodConnect-SU"),
        featured: false,
    },
    Project {
        title: "Car and House Price Prediction Using Regression Model",
        description: "A data-driven machine learning application that predicts car and house prices using regression algorithms. Implements EDA, feature engineering, model training (Linear/Random Forest), and evaluation to deliver accurate price estimations based on real-world datasets.",
        image: "/project-car-house.png",
        technologies: &[
            "Python", "Pandas", "Scikit-Learn", "Matplotlib", "Seaborn", "Jupyter Notebook",
        ],
        live_url: None,
        repo_url: Some("https://github.com/Kini7686/Car-and-House-Price-Prediction-Using-Regression-Model"),
        featured: false,
    },
];

/// Splits projects into featured and other groups, preserving declaration
/// order within each. Every project lands in exactly one group.
pub fn featured_split(projects: &[Project]) -> (Vec<&Project>, Vec<&Project>) {
    projects.iter().partition(|p| p.featured)
}

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub bullets: &'static [&'static str],
    pub tech_stack: &'static [&'static str],
    pub is_current: bool,
}

pub const EXPERIENCES: [Experience; 4] = [
    Experience {
        title: "Software Developer Intern",
        company: "iConsult Collaborative",
        location: "Syracuse University, USA",
        period: "Mar 2025 - Present",
        bullets: &[
            "Rebuilt the React.js onboarding flow to resolve performance issues, modularizing components and raising user engagement by 25%.",
            "Implemented Firebase Authentication to stabilize user sessions, adding token refresh logic that reduced login errors by 30%.",
            "Integrated Firebase services and REST APIs through modular design, improving deployment efficiency and scalability by 40%.",
        ],
        tech_stack: &["React.js", "Node.js", "Express.js", "MongoDB", "Figma", "AWS", "Firebase"],
        is_current: true,
    },
    Experience {
        title: "Software Developer",
        company: "RK Broadband",
        location: "India",
        period: "Apr 2022 - Jun 2024",
        bullets: &[
            "Designed and developed a full-stack web application using React.js and Node.js/Express.js with modular architecture and RESTful design principles.",
            "Implemented secure authentication and authorization with admin-controlled user provisioning, session management, and credential validation.",
            "Built and optimized REST APIs and database schemas to manage users, billing records, and service states with CRUD operations.",
            "Integrated UPI-based payment workflows with backend verification and real-time transaction synchronization for automated service activation.",
        ],
        tech_stack: &[
            "React.js", "Node.js", "Express.js", "MongoDB", "REST APIs", "JavaScript", "HTML",
            "CSS", "Git",
        ],
        is_current: false,
    },
    Experience {
        title: "Cyber Security Intern",
        company: "Cyber Security (SLRTCE)",
        location: "Mumbai, Maharashtra, India",
        period: "Nov 2022 - Jan 2023",
        bullets: &[
            "Applied advanced cybersecurity techniques including Wireshark and forensic analysis to monitor network traffic, trace security incidents, and recover over 200 log records, improving network visibility and threat detection capabilities.",
            "Conducted Vulnerability Assessments and Penetration Testing (VAPT) on 5+ critical network devices, identifying vulnerabilities and implementing remediation strategies that contributed to a 30% improvement in network security.",
            "Worked closely with a multidisciplinary security team, collaborating on identifying and mitigating security threats to strengthen the organization's network infrastructure.",
            "Engaged in team-based security assessments and contributed to the formulation of security protocols aimed at safeguarding network assets, ensuring compliance with industry standards, and sharing best practices across teams.",
        ],
        tech_stack: &[
            "VAPT", "Wireshark", "Network Traffic Analysis", "Forensic Analysis",
            "Routing & Network Monitoring", "Linux", "OSINT", "Teamwork",
        ],
        is_current: false,
    },
    Experience {
        title: "Cloud Intern",
        company: "AWS Academy (SLRTCE)",
        location: "India",
        period: "Jul 2022 - Aug 2022",
        bullets: &[
            "Completed hands-on training in AWS Cloud Services, focusing on secure deployments and resource optimization across all Services.",
            "Deployed a three-tier blog application on AWS using CloudFormation and WordPress with S3 storage and Lambda automation.",
            "Implemented CI/CD pipelines via CodePipeline and S3 lifecycle policies, reducing deployment time by 50% and storage costs by 30%.",
        ],
        tech_stack: &["AWS EC2", "S3", "RDS", "Lambda", "CodePipeline", "CloudFormation", "CI/CD"],
        is_current: false,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub gpa: Option<&'static str>,
    pub description: &'static [&'static str],
    pub achievements: &'static [&'static str],
    pub is_current: bool,
}

pub const EDUCATION: [Education; 2] = [
    Education {
        degree: "Master of Science in Computer Science",
        school: "Syracuse University",
        location: "Syracuse, NY, USA",
        period: "2024 - 2026",
        gpa: Some("3.60/4.00"),
        description: &[
            "Focusing on advanced software engineering, cloud computing, and artificial intelligence.",
            "Coursework includes Distributed Systems, Machine Learning, and Software Engineering.",
        ],
        achievements: &[],
        is_current: true,
    },
    Education {
        degree: "Bachelor of Engineering in Computer Engineering",
        school: "University of Mumbai",
        location: "Mumbai, India",
        period: "2019 - 2023",
        gpa: Some("3.56/4.00"),
        description: &[
            "Built a strong foundation in computer science fundamentals, data structures, and algorithms.",
            "Completed projects in web development, database management, and networking.",
        ],
        achievements: &[],
        is_current: false,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
}

pub const CERTIFICATIONS: [Certification; 2] = [
    Certification {
        name: "AWS Certified Developer - Associate",
        issuer: "Amazon Web Services",
        year: "2024",
    },
    Certification {
        name: "AWS Academy Cloud Foundations",
        issuer: "AWS Academy (SLRTCE)",
        year: "2022",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ContactDetail {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        icon: Icon::Mail,
        label: "Email",
        value: "akini01@syr.edu",
        href: Some("mailto:akini01@syr.edu"),
    },
    ContactDetail {
        icon: Icon::Phone,
        label: "Phone",
        value: "+1 (315) 952-8827",
        href: Some("tel:+13159528827"),
    },
    ContactDetail {
        icon: Icon::Location,
        label: "Location",
        value: "Syracuse, NY, USA",
        href: None,
    },
];

/// Fields of the contact form. Local UI state only; nothing here is ever
/// transmitted or persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Lifecycle of the simulated submission. The transitions are driven by
/// timers in the contact component: Idle -> Submitting on submit,
/// Submitting -> Submitted after `SUBMIT_LATENCY_MS`, Submitted -> Idle
/// (fields cleared) after `SUBMITTED_DISPLAY_MS`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

pub const SUBMIT_LATENCY_MS: f64 = 2000.0;
pub const SUBMITTED_DISPLAY_MS: f64 = 3000.0;

impl SubmitStatus {
    /// The submit control is disabled whenever a submission is in flight
    /// or the success indicator is showing.
    pub fn is_busy(&self) -> bool {
        !matches!(self, SubmitStatus::Idle)
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            SubmitStatus::Idle => "Send Message",
            SubmitStatus::Submitting => "Sending...",
            SubmitStatus::Submitted => "Message Sent!",
        }
    }

    pub fn button_icon(&self) -> Icon {
        match self {
            SubmitStatus::Idle => Icon::Send,
            SubmitStatus::Submitting => Icon::Spinner,
            SubmitStatus::Submitted => Icon::Check,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique(keys: impl IntoIterator<Item = &'static str>, what: &str) {
        let mut seen = HashSet::new();
        for key in keys {
            assert!(seen.insert(key), "duplicate {what} key: {key}");
        }
    }

    #[test]
    fn test_list_keys_are_unique() {
        assert_unique(STATS.iter().map(|s| s.label), "stat");
        assert_unique(HIGHLIGHTS.iter().map(|h| h.title), "highlight");
        assert_unique(SKILL_CATEGORIES.iter().map(|c| c.title), "skill category");
        assert_unique(ACHIEVEMENTS.iter().map(|a| a.title), "achievement");
        assert_unique(PUBLICATIONS.iter().map(|p| p.title), "publication");
        assert_unique(PROJECTS.iter().map(|p| p.title), "project");
        assert_unique(EDUCATION.iter().map(|e| e.school), "education");
        assert_unique(CERTIFICATIONS.iter().map(|c| c.name), "certification");
        assert_unique(NAV_LINKS.iter().map(|l| l.label), "nav link");
        assert_unique(FOOTER_LINKS.iter().map(|l| l.label), "footer link");
    }

    #[test]
    fn test_experience_keys_are_unique() {
        // Company alone may repeat across roles; company+period must not.
        let mut seen = HashSet::new();
        for exp in &EXPERIENCES {
            assert!(
                seen.insert((exp.company, exp.period)),
                "duplicate experience: {} {}",
                exp.company,
                exp.period
            );
        }
    }

    #[test]
    fn test_featured_split_is_a_strict_partition() {
        let (featured, other) = featured_split(&PROJECTS);
        assert_eq!(featured.len() + other.len(), PROJECTS.len());
        assert!(featured.iter().all(|p| p.featured));
        assert!(other.iter().all(|p| !p.featured));

        // No project may land in both groups.
        for f in &featured {
            assert!(!other.iter().any(|o| o.title == f.title));
        }
    }

    #[test]
    fn test_featured_split_preserves_declaration_order() {
        let (featured, other) = featured_split(&PROJECTS);
        let order_of = |title: &str| {
            PROJECTS
                .iter()
                .position(|p| p.title == title)
                .expect("split returned an unknown project")
        };
        for group in [&featured, &other] {
            let positions: Vec<_> = group.iter().map(|p| order_of(p.title)).collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            assert_eq!(positions, sorted);
        }
    }

    #[test]
    fn test_nav_links_resolve_to_declared_sections() {
        // Every footer target must also be reachable from the main nav.
        let nav: HashSet<_> = NAV_LINKS.iter().map(|l| l.section).collect();
        for link in &FOOTER_LINKS {
            assert!(nav.contains(link.section), "orphan footer link: {}", link.section);
        }
    }

    #[test]
    fn test_contact_form_clear_resets_every_field() {
        let mut form = ContactFormState {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Lovelace".to_string(),
        };
        form.clear();
        assert_eq!(form, ContactFormState::default());
    }

    #[test]
    fn test_submit_status_busy_states() {
        assert!(!SubmitStatus::Idle.is_busy());
        assert!(SubmitStatus::Submitting.is_busy());
        assert!(SubmitStatus::Submitted.is_busy());
        assert_eq!(SubmitStatus::Idle.button_label(), "Send Message");
        assert_eq!(SubmitStatus::Submitting.button_label(), "Sending...");
        assert_eq!(SubmitStatus::Submitted.button_label(), "Message Sent!");
    }

    #[test]
    fn test_submission_timing_windows() {
        // 2s simulated latency, 3s success display before the form resets
        assert_eq!(SUBMIT_LATENCY_MS, 2000.0);
        assert_eq!(SUBMITTED_DISPLAY_MS, 3000.0);
    }
}

//! Literal page content

use super::{
    Achievement, ContactLink, ContentSection, ExperienceEntry, Icon, LinkKind, Profile, Project,
    SectionKind, SkillGroup,
};

/// Contact address, shared by the profile and the mail link.
macro_rules! address {
    () => {
        "ravirv1717@gmail.com"
    };
}

const EMAIL: ContactLink = ContactLink {
    label: address!(),
    href: concat!("mailto:", address!()),
    kind: LinkKind::Mail,
    icon: Icon::Mail,
};

const LINKEDIN: ContactLink = ContactLink {
    label: "LinkedIn Profile",
    href: "https://www.linkedin.com/in/ravi-shankar-poddar-1aa982257/",
    kind: LinkKind::External,
    icon: Icon::LinkedIn,
};

const GITHUB: ContactLink = ContactLink {
    label: "GitHub",
    href: "https://github.com/ravirv17",
    kind: LinkKind::External,
    icon: Icon::GitHub,
};

pub const PROFILE: Profile = Profile {
    name: "Ravi Shankar Poddar",
    tagline: "Software Developer & Problem Solver",
    email: address!(),
    socials: &[GITHUB, LINKEDIN, EMAIL],
};

/// Page sections in display order.
pub const SECTIONS: &[ContentSection] = &[
    ContentSection {
        id: "about",
        title: "About Me",
        kind: SectionKind::About,
    },
    ContentSection {
        id: "experience",
        title: "Experience",
        kind: SectionKind::Experience,
    },
    ContentSection {
        id: "skills",
        title: "Technical Skills",
        kind: SectionKind::Skills,
    },
    ContentSection {
        id: "achievements",
        title: "Achievements",
        kind: SectionKind::Achievements,
    },
    ContentSection {
        id: "projects",
        title: "Featured Projects",
        kind: SectionKind::Projects,
    },
    ContentSection {
        id: "contact",
        title: "Get in Touch",
        kind: SectionKind::Contact,
    },
];

pub const ABOUT: &str = "Passionate software developer with a strong foundation in web \
    technologies and problem-solving. Experienced in building scalable applications and \
    working with modern development tools. Committed to writing clean, efficient code and \
    staying updated with the latest industry trends.";

pub const EXPERIENCE: &[ExperienceEntry] = &[ExperienceEntry {
    role: "Full Stack Developer Intern",
    organisation: "HOBIT",
    period: "May 2024 - July 2024",
    highlights: &[
        "Developed responsive websites using HTML, CSS, JavaScript, and React, cutting page load times by 20%.",
        "Built a School Management System using Node.js, Express, and MongoDB for secure user authentication.",
        "Designed a Property Listing Application with React and MongoDB, enabling over 50 daily property searches.",
        "Created an e-commerce site (liorak.in) on Shopify, integrating seamless payment gateways.",
    ],
}];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        category: "Frontend",
        skills: &["React.js", "TypeScript", "HTML", "Tailwind CSS", "D3.js"],
    },
    SkillGroup {
        category: "Backend",
        skills: &["Node.js", "Express.js", "RESTful APIs", "MongoDB"],
    },
    SkillGroup {
        category: "Tools & Others",
        skills: &["Git", "Netlify"],
    },
    SkillGroup {
        category: "Programming",
        skills: &["JavaScript", "Python", "Java", "C++", "C"],
    },
    SkillGroup {
        category: "Problem Solving",
        skills: &["Data Structures", "Algorithms"],
    },
    SkillGroup {
        category: "Soft Skills",
        skills: &["Team Collaboration", "Communication", "Leadership"],
    },
];

pub const ACHIEVEMENTS: &[Achievement] = &[Achievement {
    heading: "Programming",
    items: &[
        "Achieved 4-star rating on GeeksForGeeks (1814 rating).",
        "Solved 500+ problems across various platforms.",
        "Contributed 20+ repositories and features to open-source projects on GitHub.",
    ],
}];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "Built a fully functional online store with product listings, cart, and checkout.",
        tech: &["React", "HTML", "CSS", "JavaScript"],
        link: "https://www.liorak.in",
    },
    Project {
        title: "Smart Street Light",
        description: "Engineered an IoT-based system reducing energy consumption by 30%.",
        tech: &["Arduino IDE", "Arduino", "IoT sensors"],
        link: "https://www.linkedin.com/posts/ravi-shankar-poddar-1aa982257_made-a-project-called-smart-street-light-activity-7224096042072338434-ywvC?utm_source=share&utm_medium=member_desktop&rcm=ACoAAD9TcpIBPVr82t6FfKaD3b1qt-VN-7iHz-Y",
    },
    Project {
        title: "SONAR Using Arduino",
        description: "Made a SONAR system using Arduino and Ultrasonic sensor that visualizes object in front of it and its distance on an app.",
        tech: &["Arduino IDE", "Arduino", "IoT sensors", "Python", "Flask"],
        link: "https://www.linkedin.com/posts/ravi-shankar-poddar-1aa982257_we-made-sonar-using-arduino-that-not-only-activity-7224099423612452864-HOI6?utm_source=share&utm_medium=member_desktop&rcm=ACoAAD9TcpIBPVr82t6FfKaD3b1qt-VN-7iHz-Y",
    },
    Project {
        title: "Portfolio Website",
        description: "Designed a responsive personal site showcasing projects.",
        tech: &["TypeScript", "React.js", "Vite", "TailwindCSS"],
        link: "https://github.com/ravirv17/Portfolio",
    },
];

pub const CONTACT_BLURB: &str = "I'm always interested in hearing about new opportunities and \
    collaborations. Feel free to reach out!";

pub const CONTACT_LINKS: &[ContactLink] = &[EMAIL, LINKEDIN];

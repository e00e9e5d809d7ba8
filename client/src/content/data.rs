//! The collections shown on the page.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use super::types::{Education, Internship, NavItem, Profile, Project, SectionId, SkillCategory};

pub const PROFILE: Profile = Profile {
    name: "Syed Owais",
    initial: "S",
    headline: "AI & Machine Learning Engineer crafting intelligent backends and data-driven ecosystems.",
    summary: "Final-year AI and Machine Learning student passionate about developing intelligent, \
              data-driven systems. Experienced in full-stack development, model optimization, and \
              scalable deployments using Python, Flask, and FastAPI. Committed to building efficient \
              real-world solutions through collaboration and clean code principles.",
    github_handle: "owais1724",
    email: "syedowaismohi@gmail.com",
    phone: "+91 9353120726",
};

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "About", target: SectionId::About },
    NavItem { label: "Skills", target: SectionId::Skills },
    NavItem { label: "Projects", target: SectionId::Projects },
    NavItem { label: "Experience", target: SectionId::Experience },
    NavItem { label: "Contact", target: SectionId::Contact },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "LinkedIn Post Generator",
        description: "Built using LLaMA 3.2, LangChain, and Groq Cloud. Features few-shot learning on \
                      real LinkedIn posts and dynamic tone adjustment with character-limit validation.",
        technologies: &["Python", "LLaMA 3.2", "LangChain", "Streamlit", "Groq Cloud"],
        link: None,
    },
    Project {
        title: "FastTask",
        description: "Scalable task management backend supporting multi-user collaboration and full \
                      lifecycle management with JWT authentication and clean architecture principles.",
        technologies: &["Python", "FastAPI", "PostgreSQL", "SQLAlchemy", "JWT"],
        link: None,
    },
    Project {
        title: "FastLink",
        description: "High-performance URL shortener service focused on fast redirection and stateless \
                      backend design. Includes expiry handling and click analytics.",
        technologies: &["Python", "FastAPI"],
        link: None,
    },
    Project {
        title: "BusBuddy Chatbot",
        description: "Transit planning bot for Surat bus transit with NLTK-based natural language \
                      interaction, route planning, and fare calculation.",
        technologies: &["Python", "NLTK", "Flask"],
        link: None,
    },
];

pub const INTERNSHIPS: &[Internship] = &[Internship {
    company: "IndiaMart",
    role: "Backend & ML Intern",
    period: "Oct 2024",
    points: &[
        "Conducted ML auditing to evaluate and enhance photo search model performance.",
        "Built object-detection-based cropping for key objects in screenshots.",
        "Optimized image recognition processes to improve search accuracy.",
        "Collaborated to integrate ML solutions into production pipelines.",
    ],
}];

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "B.E. Artificial Intelligence and Machine Learning",
        institution: "BMS Institute of Technology and Management, Bengaluru",
        period: "2022 — 2026 (Expected)",
        details: "CGPA: 8.2/10",
    },
    Education {
        degree: "Pre-University Course",
        institution: "SBR PU College of Science",
        period: "2020 — 2022",
        details: "Percentage: 87%",
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory { name: "Programming", skills: &["Python", "C++", "C"] },
    SkillCategory {
        name: "AI / ML",
        skills: &["Decision Tree", "KNN", "Random Forest", "TensorFlow", "NumPy", "Pandas", "Scikit-learn"],
    },
    SkillCategory {
        name: "Backend",
        skills: &["FastAPI", "Flask", "RESTful API", "JWT Auth", "PostgreSQL", "SQL"],
    },
    SkillCategory {
        name: "Tools & Core",
        skills: &["Git", "GitHub", "Docker", "DSA", "System Design", "Algorithmic Thinking"],
    },
];

//! One-time population of the portfolio tables.
//!
//! Run with `portfolio-api seed`. Existing skills, documents and experiences
//! are deleted first; chat and contact history is left alone.

use anyhow::{Context, Result};
use tracing::info;

use crate::models::portfolio::{NewDocument, NewExperience, NewSkill};
use crate::storage::PortfolioStore;

struct ExperienceSeed {
    title: &'static str,
    company: &'static str,
    duration: &'static str,
    achievements: &'static [&'static str],
    current: bool,
}

const EXPERIENCES: &[ExperienceSeed] = &[
    ExperienceSeed {
        title: "Lead Technical Writer",
        company: "Ushur Inc",
        duration: "December 2023 - Present",
        achievements: &[
            "Led complete transformation of documentation strategy, delivering 600+ structured articles across multiple product lines",
            "Managed and mentored a team of 4 technical writers, establishing performance goals and enabling skill growth",
            "Spearheaded migration from Confluence/JIRA to Document360, improving authoring workflows and accessibility",
            "Introduced AI-powered workflows to automate style checks, content validation, and publishing processes",
            "Received the Ushur Customer Impact Award for creating the biggest product or business impact through documentation transformation",
        ],
        current: true,
    },
    ExperienceSeed {
        title: "Senior Customer Documentation Developer",
        company: "Nokia Solutions and Networks India",
        duration: "September 2022 - December 2023",
        achievements: &[
            "Created admin guides, API guides, installation guides, troubleshooting guides, and user manuals in Agile environment",
            "Produced video tutorials using Camtasia to assist customers in understanding GUI and product features",
            "Led chatbot team utilizing Azure and Language Studio to convert technical manuals into Q&A pairs",
            "Received Network Infrastructure Quality Award 2023 for contribution to accessibility and customer experience",
        ],
        current: false,
    },
    ExperienceSeed {
        title: "Senior Technical Writer",
        company: "Trane Technologies",
        duration: "August 2017 - September 2022",
        achievements: &[
            "Created technical documentation including Parts Manuals, Installation Guides, Service Guides, and Maintenance Manuals",
            "Proficient in DITA concepts and structured authoring using Adobe FrameMaker, Arbortext Editor",
            "Involved in training new hires on products, processes, DITA concepts, and documentation tools",
            "Actively participated in innovative ideas to improve technical documentation and achieve sustainability goals",
        ],
        current: false,
    },
    ExperienceSeed {
        title: "Technical Writer",
        company: "Benefitalign Technologies",
        duration: "March 2016 - July 2017",
        achievements: &[
            "Designed software product documentation including User Manuals, Configuration Guides, FAQs, and Command References",
            "Created and revised REST API documents for internal use",
            "Led a 25-member team of Products and Rates, implementing agile methodology to improve performance",
            "Collaborated with geographically distributed development and marketing teams",
        ],
        current: false,
    },
];

/// (title, type, description, pages, asset file name)
const DOCUMENTS: &[(&str, &str, &str, i32, &str)] = &[
    (
        "API Overview Documentation",
        "API Guide",
        "Comprehensive API documentation showcasing structured endpoint documentation, authentication methods, and implementation examples.",
        15,
        "API Overview.pdf",
    ),
    (
        "Sample User Guide V3.0",
        "User Guide",
        "Professional user guide demonstrating clear step-by-step instructions, feature explanations, and troubleshooting sections.",
        25,
        "Sample_UserGuide_V3.0.pdf",
    ),
    (
        "PaaS Sample Documentation",
        "Technical Guide",
        "Platform-as-a-Service documentation covering deployment, configuration, and management procedures for enterprise solutions.",
        20,
        "PAAS Sample Doc.pdf",
    ),
    (
        "API Week 2 Assignment",
        "API Reference",
        "Detailed API assignment documentation demonstrating technical writing skills for complex API endpoints and integration patterns.",
        12,
        "API-Week-2-Assign.pdf",
    ),
];

/// (category, name, proficiency, level)
const SKILLS: &[(&str, &str, i32, &str)] = &[
    ("Documentation Tools", "Adobe FrameMaker", 95, "Expert"),
    ("Documentation Tools", "Document360", 90, "Expert"),
    ("Documentation Tools", "Arbortext Editor", 90, "Expert"),
    ("Documentation Tools", "Adobe RoboHelp", 85, "Expert"),
    ("Documentation Tools", "Confluence", 85, "Expert"),
    ("Documentation Tools", "JIRA", 80, "Advanced"),
    ("Documentation Tools", "Camtasia", 80, "Advanced"),
    ("Documentation Tools", "GitHub", 75, "Advanced"),
    ("Technical Skills", "DITA XML", 95, "Expert"),
    ("Technical Skills", "Markdown", 90, "Expert"),
    ("Technical Skills", "HTML/XML", 85, "Expert"),
    ("Technical Skills", "REST APIs", 85, "Expert"),
    ("Technical Skills", "Python", 70, "Advanced"),
    ("Technical Skills", "MySQL", 65, "Advanced"),
    ("Technical Skills", "Azure Language Studio", 75, "Advanced"),
    ("Technical Skills", "Swagger/OpenAPI", 80, "Advanced"),
    ("Methodologies", "Agile/Scrum", 90, "Expert"),
    ("Methodologies", "DDLC", 85, "Expert"),
    ("Methodologies", "SDLC", 80, "Advanced"),
    ("Methodologies", "Structured Authoring", 95, "Expert"),
    ("Standards & Guidelines", "MSTP", 85, "Expert"),
    ("Standards & Guidelines", "Simplified Technical English", 80, "Advanced"),
    ("Standards & Guidelines", "ATA 100", 75, "Advanced"),
    ("Standards & Guidelines", "ASD S1000D", 70, "Advanced"),
];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub experiences: usize,
    pub documents: usize,
    pub skills: usize,
}

/// Replaces the portfolio content with the fixed data above.
pub async fn seed_portfolio(store: &dyn PortfolioStore) -> Result<SeedSummary> {
    info!("Seeding portfolio data...");

    store
        .reset_portfolio()
        .await
        .context("Failed to clear portfolio tables")?;

    let mut summary = SeedSummary::default();

    for seed in EXPERIENCES {
        store
            .create_experience(NewExperience {
                title: seed.title.to_string(),
                company: seed.company.to_string(),
                duration: seed.duration.to_string(),
                achievements: seed.achievements.iter().map(|a| a.to_string()).collect(),
                current: seed.current,
            })
            .await
            .with_context(|| format!("Failed to insert experience '{}'", seed.title))?;
        summary.experiences += 1;
    }

    for &(title, doc_type, description, pages, file) in DOCUMENTS {
        let path = format!("/attached_assets/{file}");
        store
            .create_document(NewDocument {
                title: title.to_string(),
                doc_type: doc_type.to_string(),
                description: description.to_string(),
                pages,
                file_path: Some(path.clone()),
                preview_url: Some(path),
            })
            .await
            .with_context(|| format!("Failed to insert document '{title}'"))?;
        summary.documents += 1;
    }

    for &(category, name, proficiency, level) in SKILLS {
        store
            .create_skill(NewSkill {
                category: category.to_string(),
                name: name.to_string(),
                proficiency,
                level: level.to_string(),
            })
            .await
            .with_context(|| format!("Failed to insert skill '{name}'"))?;
        summary.skills += 1;
    }

    info!(
        "Seeded {} experiences, {} documents, {} skills",
        summary.experiences, summary.documents, summary.skills
    );
    Ok(summary)
}

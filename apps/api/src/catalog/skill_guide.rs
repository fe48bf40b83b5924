//! Static skill guide — category, improvement sentence and learning resources per skill.
//!
//! Keyed by normalized `SkillToken` text. Skills without an entry fall back to
//! `fallback_suggestion` / `FALLBACK_DESCRIPTION` and the generic category.

use crate::models::skill::SkillToken;

#[derive(Debug, Clone, Copy)]
pub struct SkillGuide {
    pub skill: &'static str,
    pub category: &'static str,
    pub suggestion: &'static str,
    pub description: &'static str,
    pub resources: &'static [&'static str],
}

pub const GENERIC_CATEGORY: &str = "core technical";

pub const FALLBACK_DESCRIPTION: &str = "Adding this skill or experience could significantly enhance your resume and make you more competitive in the job market.";

// ────────────────────────────────────────────────────────────────────────────
// Guide table
// ────────────────────────────────────────────────────────────────────────────

const FRONTEND: &str = "frontend development";
const BACKEND: &str = "backend development";
const CLOUD: &str = "cloud platform";
const DEVOPS: &str = "DevOps and delivery";
const DATA: &str = "data and databases";
const DESIGN: &str = "UI/UX design";

pub const SKILL_GUIDES: &[SkillGuide] = &[
    SkillGuide {
        skill: "aws",
        category: CLOUD,
        suggestion: "Add cloud platform experience (AWS, Azure, etc.)",
        description: "Cloud skills are in high demand across the tech industry. Even basic familiarity could significantly improve your job prospects.",
        resources: &[
            "AWS Free Tier - Hands-on practice",
            "Microsoft Learn - Azure Fundamentals",
            "Cloud Computing Certification Courses",
        ],
    },
    SkillGuide {
        skill: "azure",
        category: CLOUD,
        suggestion: "Add Microsoft Azure experience",
        description: "Azure is the default cloud for many enterprise employers.",
        resources: &["Microsoft Learn - Azure Fundamentals"],
    },
    SkillGuide {
        skill: "gcp",
        category: CLOUD,
        suggestion: "Add Google Cloud Platform experience",
        description: "GCP experience broadens the set of cloud-native teams you can join.",
        resources: &["Google Cloud Skills Boost"],
    },
    SkillGuide {
        skill: "docker",
        category: DEVOPS,
        suggestion: "Learn container technologies like Docker",
        description: "Containerization is a key skill for modern development environments. It demonstrates your understanding of deployment processes.",
        resources: &[
            "Docker's Official Getting Started Guide",
            "Docker for Developers Course",
            "Container Orchestration with Kubernetes",
        ],
    },
    SkillGuide {
        skill: "kubernetes",
        category: DEVOPS,
        suggestion: "Learn container orchestration with Kubernetes",
        description: "Kubernetes runs most production container workloads; operating it is a strong infrastructure signal.",
        resources: &["Kubernetes Basics Tutorial", "Certified Kubernetes Application Developer (CKAD)"],
    },
    SkillGuide {
        skill: "terraform",
        category: DEVOPS,
        suggestion: "Practice infrastructure as code with Terraform",
        description: "Declarative infrastructure shows you can manage environments reproducibly.",
        resources: &["HashiCorp Learn - Terraform"],
    },
    SkillGuide {
        skill: "ci/cd",
        category: DEVOPS,
        suggestion: "Set up automated CI/CD pipelines",
        description: "Automated build and deploy pipelines are expected on most engineering teams.",
        resources: &["GitHub Actions Documentation"],
    },
    SkillGuide {
        skill: "git",
        category: DEVOPS,
        suggestion: "Highlight version control workflows with Git",
        description: "Branching, reviews and history hygiene are table stakes for collaborative work.",
        resources: &["Pro Git Book"],
    },
    SkillGuide {
        skill: "linux",
        category: DEVOPS,
        suggestion: "Build confidence administering Linux systems",
        description: "Most servers run Linux; shell fluency speeds up debugging and operations.",
        resources: &["The Linux Command Line"],
    },
    SkillGuide {
        skill: "graphql",
        category: BACKEND,
        suggestion: "Gain experience with GraphQL for API development",
        description: "GraphQL is becoming the preferred API solution for many companies, replacing traditional REST APIs in many use cases.",
        resources: &[
            "GraphQL Official Documentation",
            "Building APIs with GraphQL Tutorial",
            "GraphQL vs REST: Practical Comparison",
        ],
    },
    SkillGuide {
        skill: "rest apis",
        category: BACKEND,
        suggestion: "Show experience designing REST APIs",
        description: "Well-designed HTTP APIs are the backbone of most web backends.",
        resources: &[],
    },
    SkillGuide {
        skill: "node.js",
        category: BACKEND,
        suggestion: "Build a backend service with Node.js",
        description: "Server-side JavaScript lets frontend developers grow into full stack roles.",
        resources: &["Node.js Official Guides"],
    },
    SkillGuide {
        skill: "python",
        category: BACKEND,
        suggestion: "Add Python to your toolkit",
        description: "Python is widely used for backend services, scripting and data work.",
        resources: &["The Python Tutorial"],
    },
    SkillGuide {
        skill: "mongodb",
        category: DATA,
        suggestion: "Get hands-on with MongoDB",
        description: "Document databases are common in JavaScript-heavy stacks.",
        resources: &["MongoDB University"],
    },
    SkillGuide {
        skill: "sql",
        category: DATA,
        suggestion: "Strengthen your SQL skills",
        description: "Querying relational data is needed in nearly every backend and data role.",
        resources: &["SQLBolt Interactive Lessons"],
    },
    SkillGuide {
        skill: "postgresql",
        category: DATA,
        suggestion: "Work with PostgreSQL in a real project",
        description: "PostgreSQL is the most common open-source relational database in production.",
        resources: &["PostgreSQL Tutorial"],
    },
    SkillGuide {
        skill: "react",
        category: FRONTEND,
        suggestion: "Build a project with React",
        description: "React is the most requested frontend framework in job postings.",
        resources: &["React Official Tutorial"],
    },
    SkillGuide {
        skill: "javascript",
        category: FRONTEND,
        suggestion: "Deepen your modern JavaScript knowledge",
        description: "JavaScript underpins every web frontend and many backends.",
        resources: &["MDN JavaScript Guide"],
    },
    SkillGuide {
        skill: "typescript",
        category: FRONTEND,
        suggestion: "Adopt TypeScript in your projects",
        description: "Typed JavaScript is now the default on many professional teams.",
        resources: &["TypeScript Handbook"],
    },
    SkillGuide {
        skill: "css",
        category: FRONTEND,
        suggestion: "Improve your CSS layout skills",
        description: "Responsive layout with flexbox and grid is expected of frontend developers.",
        resources: &["MDN CSS Layout"],
    },
    SkillGuide {
        skill: "html",
        category: FRONTEND,
        suggestion: "Strengthen semantic HTML and accessibility",
        description: "Semantic markup improves accessibility and search visibility.",
        resources: &["MDN HTML Basics"],
    },
    SkillGuide {
        skill: "ui/ux",
        category: DESIGN,
        suggestion: "Develop an understanding of UI/UX principles",
        description: "Companies increasingly focus on user experience; design literacy sets developers apart.",
        resources: &["Refactoring UI", "Nielsen Norman Group Articles"],
    },
];

/// Alternate spellings mapped to their canonical skill.
pub const SKILL_ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ecmascript", "javascript"),
    ("ts", "typescript"),
    ("reactjs", "react"),
    ("react.js", "react"),
    ("nodejs", "node.js"),
    ("postgres", "postgresql"),
    ("mongo", "mongodb"),
    ("k8s", "kubernetes"),
    ("amazon web services", "aws"),
    ("google cloud", "gcp"),
    ("restful", "rest apis"),
    ("rest api", "rest apis"),
    ("restful api", "rest apis"),
    ("ux", "ui/ux"),
    ("html5", "html"),
    ("css3", "css"),
    ("ci / cd", "ci/cd"),
];

pub fn lookup(skill: &SkillToken) -> Option<&'static SkillGuide> {
    SKILL_GUIDES.iter().find(|g| g.skill == skill.as_str())
}

pub fn category_for(skill: &SkillToken) -> &'static str {
    lookup(skill).map(|g| g.category).unwrap_or(GENERIC_CATEGORY)
}

pub fn fallback_suggestion(skill: &SkillToken) -> String {
    format!("Add experience with {skill} to your resume")
}

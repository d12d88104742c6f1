use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectKind {
    Agency,
    PersonalProject,
    Freelance,
}

impl ProjectKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Agency => "Agency",
            Self::PersonalProject => "Personal Project",
            Self::Freelance => "Freelance",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub href: &'static str,
    /// Display only, never parsed or sorted on.
    pub year: &'static str,
    pub kind: ProjectKind,
    pub tech_stack: &'static [&'static str],
    pub featured: bool,
    pub github: Option<&'static str>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate project id: {0}")]
    DuplicateId(&'static str),
}

static AGENCY_PROJECTS: [Project; 8] = [
    Project {
        id: "munireg",
        title: "MuniReg",
        description: "MuniReg is a modern platform supporting municipal registration and compliance programs for vacant and foreclosed properties. I designed and developed a user-friendly website for easy access to essential services.",
        image: "/images/projects/munireg.webp",
        href: "https://munireg.com/",
        year: "2025",
        kind: ProjectKind::Agency,
        tech_stack: &["WordPress", "CSS", "JavaScript"],
        featured: false,
        github: None,
    },
    Project {
        id: "mediview",
        title: "MediView",
        description: "MediView is a pioneering medical technology company advancing augmented-reality solutions for surgical navigation. I designed and developed a sleek, modern website to reflect their innovation.",
        image: "/images/projects/mediview.webp",
        href: "https://mediview.com/",
        year: "2024",
        kind: ProjectKind::Agency,
        tech_stack: &["WordPress", "CSS", "JavaScript"],
        featured: true,
        github: None,
    },
    Project {
        id: "esquiretek",
        title: "EsquireTek",
        description: "EsquireTek is an AI software product that helps attorneys and law firms automate legal tasks. I helped design and build their website to highlight the product's sophistication.",
        image: "/images/projects/esquiretek.webp",
        href: "https://esquiretek.com/alpha",
        year: "2023",
        kind: ProjectKind::Agency,
        tech_stack: &["WordPress", "CSS", "JavaScript"],
        featured: false,
        github: None,
    },
    Project {
        id: "daniels-amish",
        title: "Daniel's Amish",
        description: "Daniel's Amish is an Amish furniture manufacturer in Ohio. I contributed to their new website design, enhancing their marketing and online presence.",
        image: "/images/projects/daniels-amish.webp",
        href: "https://www.danielsamish.com/",
        year: "2022",
        kind: ProjectKind::Agency,
        tech_stack: &["WordPress", "WooCommerce", "CSS"],
        featured: false,
        github: None,
    },
    Project {
        id: "datafon",
        title: "Datafon",
        description: "Datafon helps organizations engage audiences and streamline interactions. I designed and built their website to showcase their innovative approach and make complex services feel approachable.",
        image: "/images/projects/datafon.webp",
        href: "https://datafon.co.uk/",
        year: "2024",
        kind: ProjectKind::Agency,
        tech_stack: &["WordPress", "CSS", "JavaScript"],
        featured: false,
        github: None,
    },
    Project {
        id: "acordis",
        title: "Acordis",
        description: "Acordis is an IT solutions company in Miami, Florida. I worked on a design refresh and modernized their web aesthetic.",
        image: "/images/projects/acordis.webp",
        href: "https://acordiscorp.com/",
        year: "2022",
        kind: ProjectKind::Agency,
        tech_stack: &["WordPress", "CSS"],
        featured: false,
        github: None,
    },
    Project {
        id: "knk",
        title: "knk Publishing Software",
        description: "The knkPublishing Group, originally from Germany, expanded to North America. I contributed to a website redesign that gave their brand a fresh, modern look.",
        image: "/images/projects/knk.webp",
        href: "https://knkpublishingsoftware.com/",
        year: "2021",
        kind: ProjectKind::Agency,
        tech_stack: &["WordPress", "CSS", "JavaScript"],
        featured: false,
        github: None,
    },
    Project {
        id: "shenanigans",
        title: "Shenanigans Stables",
        description: "Shenanigans Stables is an equestrian facility in Ohio. I worked on their website to improve online visibility and integrate appointment scheduling.",
        image: "/images/projects/shenanigans.webp",
        href: "https://shenanigansstables.com/",
        year: "2022",
        kind: ProjectKind::Agency,
        tech_stack: &["WordPress", "CSS"],
        featured: false,
        github: None,
    },
];

static PERSONAL_PROJECTS: [Project; 8] = [
    Project {
        id: "netflix-clone",
        title: "Netflix Clone",
        description: "A full-stack Netflix clone with user authentication, real-time updates, Stripe payments, and a responsive UI. Built with modern React patterns and best practices.",
        image: "/images/projects/netflix.webp",
        href: "https://netflix-clone-omega-lac.vercel.app/",
        year: "2026",
        kind: ProjectKind::PersonalProject,
        tech_stack: &["React", "TypeScript", "Next.js", "Tailwind", "Stripe", "Prisma"],
        featured: true,
        github: None,
    },
    Project {
        id: "slack-clone",
        title: "Slack Clone",
        description: "A real-time messaging application with workspaces, channels, direct messages, and rich text editing. Features real-time updates and modern UI/UX.",
        image: "/images/projects/slack.webp",
        href: "https://slack-clone-622bd.web.app/login",
        year: "2026",
        kind: ProjectKind::PersonalProject,
        tech_stack: &["React", "TypeScript", "Next.js", "Convex", "Tailwind"],
        featured: true,
        github: None,
    },
    Project {
        id: "analytics-dashboard",
        title: "Analytics Dashboard",
        description: "A React analytics dashboard with interactive charts and tables, visualizing key metrics and trends in real time.",
        image: "/images/projects/dashboard.webp",
        href: "https://analytics-dashboard-jade-six.vercel.app/",
        year: "2025",
        kind: ProjectKind::PersonalProject,
        tech_stack: &["React", "TypeScript", "Recharts", "Tailwind"],
        featured: true,
        github: None,
    },
    Project {
        id: "pa-realestate",
        title: "PA Premium Real Estate",
        description: "A React real estate mockup with multiple agents, properties, and interactive filtering for exploring and comparing listings.",
        image: "/images/projects/realestate.webp",
        href: "https://react-realestate.vercel.app/",
        year: "2021",
        kind: ProjectKind::PersonalProject,
        tech_stack: &["React", "CSS", "JavaScript"],
        featured: false,
        github: None,
    },
    Project {
        id: "supreme-contracting",
        title: "Supreme Contracting",
        description: "A roofing and exterior contractor website designed to showcase services including roof replacement, gutter systems, and home protection solutions.",
        image: "/images/projects/supreme.webp",
        href: "https://supremecontractingva.com/",
        year: "2024",
        kind: ProjectKind::Freelance,
        tech_stack: &["HTML", "CSS", "JavaScript"],
        featured: false,
        github: None,
    },
    Project {
        id: "avellinos",
        title: "Avellino's Italian Cuisine",
        description: "Italian themed restaurant website featuring a unique menu built with React.",
        image: "/images/projects/avellinos.webp",
        href: "https://restaurant-51fd0.web.app/",
        year: "2021",
        kind: ProjectKind::PersonalProject,
        tech_stack: &["React", "Firebase", "CSS"],
        featured: false,
        github: None,
    },
    Project {
        id: "recipe-app",
        title: "Recipe Search App",
        description: "A simple recipe search application using JavaScript and the Edamam API service.",
        image: "/images/projects/recipe.webp",
        href: "https://qnistico.github.io/Recipe-Search-App/",
        year: "2022",
        kind: ProjectKind::PersonalProject,
        tech_stack: &["JavaScript", "API", "CSS"],
        featured: false,
        github: Some("https://github.com/qnistico/Recipe-Search-App"),
    },
    Project {
        id: "cgn-dui",
        title: "CGN DUI Attorney",
        description: "A personalized legal website for a Philadelphia area DUI Attorney named Charles G. Nistico.",
        image: "/images/projects/cgn.webp",
        href: "https://duiattorney.net/",
        year: "2021",
        kind: ProjectKind::Freelance,
        tech_stack: &["HTML", "CSS", "JavaScript"],
        featured: false,
        github: None,
    },
];

pub fn agency_projects() -> &'static [Project] {
    &AGENCY_PROJECTS
}

/// Personal and freelance work, newest and strongest first.
pub fn personal_projects() -> &'static [Project] {
    &PERSONAL_PROJECTS
}

pub fn all_projects() -> Vec<Project> {
    personal_projects()
        .iter()
        .chain(agency_projects())
        .copied()
        .collect()
}

pub fn featured_projects() -> Vec<Project> {
    all_projects().into_iter().filter(|p| p.featured).collect()
}

pub fn find(id: &str) -> Option<Project> {
    personal_projects()
        .iter()
        .chain(agency_projects())
        .find(|p| p.id == id)
        .copied()
}

pub fn validate(projects: &[Project]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for p in projects {
        if !seen.insert(p.id) {
            return Err(CatalogError::DuplicateId(p.id));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Personal,
    Agency,
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 3] = [Self::All, Self::Personal, Self::Agency];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Personal => "Personal & Freelance",
            Self::Agency => "Agency Work",
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Personal => project.kind != ProjectKind::Agency,
            Self::Agency => project.kind == ProjectKind::Agency,
        }
    }

    /// Filtered view of the full catalog, keeping catalog order.
    pub fn projects(&self) -> Vec<Project> {
        all_projects()
            .into_iter()
            .filter(|p| self.matches(p))
            .collect()
    }

    /// Agency work carries an ownership note whenever it is on screen.
    pub fn shows_agency_note(&self) -> bool {
        matches!(self, Self::All | Self::Agency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_unique() {
        let all = all_projects();
        assert_eq!(all.len(), 16);
        assert!(validate(&all).is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let mut projects = all_projects();
        projects.push(agency_projects()[2]);
        assert_eq!(
            validate(&projects),
            Err(CatalogError::DuplicateId("esquiretek"))
        );
    }

    #[test]
    fn test_agency_filter_keeps_catalog_order() {
        let agency = ProjectFilter::Agency.projects();
        assert_eq!(agency.len(), 8);
        assert!(agency.iter().all(|p| p.kind == ProjectKind::Agency));
        let ids: Vec<&str> = agency.iter().map(|p| p.id).collect();
        let expected: Vec<&str> = agency_projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_personal_filter_includes_freelance() {
        let personal = ProjectFilter::Personal.projects();
        assert_eq!(personal.len(), 8);
        assert!(personal.iter().any(|p| p.kind == ProjectKind::Freelance));
        assert!(personal.iter().all(|p| p.kind != ProjectKind::Agency));
    }

    #[test]
    fn test_all_filter_lists_personal_first() {
        let all = ProjectFilter::All.projects();
        assert_eq!(all.len(), 16);
        assert_eq!(all[0].id, "netflix-clone");
        assert_eq!(all[8].id, "munireg");
    }

    #[test]
    fn test_featured_subset() {
        let featured = featured_projects();
        let ids: Vec<&str> = featured.iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            vec!["netflix-clone", "slack-clone", "analytics-dashboard", "mediview"]
        );
    }

    #[test]
    fn test_find_and_labels() {
        let p = find("recipe-app").expect("recipe-app should exist");
        assert!(p.github.is_some());
        assert_eq!(p.kind.to_string(), "Personal Project");
        assert!(find("nope").is_none());
        assert!(!ProjectFilter::Personal.shows_agency_note());
        assert!(ProjectFilter::All.shows_agency_note());
    }
}

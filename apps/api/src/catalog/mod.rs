// Static career catalog served read-only. The match pipeline treats these
// records as external input; only title and cluster feed the rule tables.

pub mod handlers;

use crate::models::career::{Career, MarketDemand};

const CAREERS: &[Career] = &[
    Career {
        id: 1,
        title: "Software Engineer",
        description: "Designs, builds, and maintains software systems, from web services to embedded devices.",
        required_skills: &["programming", "problem solving", "system design", "debugging"],
        cluster: "Technology",
        market_demand: MarketDemand::High,
    },
    Career {
        id: 2,
        title: "Data Scientist",
        description: "Extracts insight from data using statistics, machine learning, and domain knowledge.",
        required_skills: &["statistics", "python", "machine learning", "communication"],
        cluster: "Technology",
        market_demand: MarketDemand::High,
    },
    Career {
        id: 3,
        title: "Physicist",
        description: "Studies matter, energy, and the fundamental laws of nature through theory and experiment.",
        required_skills: &["mathematics", "research", "modeling", "scientific writing"],
        cluster: "Science",
        market_demand: MarketDemand::Medium,
    },
    Career {
        id: 4,
        title: "Chemist",
        description: "Investigates the composition and behavior of substances in laboratory settings.",
        required_skills: &["lab technique", "analysis", "attention to detail", "safety protocols"],
        cluster: "Science",
        market_demand: MarketDemand::Medium,
    },
    Career {
        id: 5,
        title: "Musician",
        description: "Performs, composes, or produces music across live and recorded settings.",
        required_skills: &["instrumental skill", "ear training", "composition", "performance"],
        cluster: "Arts",
        market_demand: MarketDemand::Low,
    },
    Career {
        id: 6,
        title: "Graphic Designer",
        description: "Creates visual concepts for brands, products, and publications.",
        required_skills: &["typography", "layout", "design software", "client communication"],
        cluster: "Arts",
        market_demand: MarketDemand::Medium,
    },
    Career {
        id: 7,
        title: "Teacher",
        description: "Educates students and develops curricula across subjects and grade levels.",
        required_skills: &["communication", "lesson planning", "patience", "assessment"],
        cluster: "Education",
        market_demand: MarketDemand::High,
    },
    Career {
        id: 8,
        title: "Nurse",
        description: "Provides patient care, health education, and clinical support in medical settings.",
        required_skills: &["patient care", "clinical knowledge", "empathy", "record keeping"],
        cluster: "Healthcare",
        market_demand: MarketDemand::High,
    },
    Career {
        id: 9,
        title: "Marketing Manager",
        description: "Plans and executes campaigns that connect products with their audiences.",
        required_skills: &["strategy", "copywriting", "analytics", "project management"],
        cluster: "Business",
        market_demand: MarketDemand::Medium,
    },
    Career {
        id: 10,
        title: "Financial Analyst",
        description: "Evaluates investments, budgets, and market trends to guide financial decisions.",
        required_skills: &["financial modeling", "excel", "reporting", "attention to detail"],
        cluster: "Business",
        market_demand: MarketDemand::High,
    },
    Career {
        id: 11,
        title: "UX Designer",
        description: "Researches user needs and designs intuitive digital product experiences.",
        required_skills: &["user research", "wireframing", "prototyping", "usability testing"],
        cluster: "Design",
        market_demand: MarketDemand::High,
    },
    Career {
        id: 12,
        title: "Research Scientist",
        description: "Conducts original research, publishes findings, and advances their field.",
        required_skills: &["experimental design", "data analysis", "writing", "grant applications"],
        cluster: "Science",
        market_demand: MarketDemand::Medium,
    },
];

/// The full read-only catalog.
pub fn all() -> &'static [Career] {
    CAREERS
}

pub fn find_by_id(id: u32) -> Option<&'static Career> {
    CAREERS.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_at_least_ten_careers() {
        assert!(all().len() >= 10);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut ids: Vec<u32> = all().iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all().len());
    }

    #[test]
    fn test_catalog_records_are_populated() {
        for career in all() {
            assert!(!career.title.is_empty());
            assert!(!career.description.is_empty());
            assert!(!career.required_skills.is_empty());
            assert!(!career.cluster.is_empty());
        }
    }

    #[test]
    fn test_find_by_id() {
        assert_eq!(find_by_id(1).unwrap().title, "Software Engineer");
        assert!(find_by_id(999).is_none());
    }
}

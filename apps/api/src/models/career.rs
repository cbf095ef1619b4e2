use serde::Serialize;

/// A record in the static career catalog. Read-only input to the core;
/// the title (and optional cluster) double as lookup keys into the
/// heuristic rule tables.
#[derive(Debug, Clone, Serialize)]
pub struct Career {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub required_skills: &'static [&'static str],
    pub cluster: &'static str,
    pub market_demand: MarketDemand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketDemand {
    High,
    Medium,
    Low,
}

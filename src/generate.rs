//! Mock analysis data.
//!
//! Nothing here is computed. Related keywords and competitors are fixed
//! lists; per-keyword figures are drawn uniformly from fixed ranges.

use rand::Rng;

use crate::snapshot::{Competitor, KeywordAnalysis, Snapshot};

const RELATED_KEYWORDS: [&str; 20] = [
    "online marketing",
    "search engine optimization",
    "keyword advertising",
    "content marketing",
    "social media marketing",
    "email marketing",
    "performance marketing",
    "influencer marketing",
    "brand marketing",
    "product marketing",
    "digital advertising",
    "retargeting",
    "viral marketing",
    "native advertising",
    "programmatic advertising",
    "mobile marketing",
    "conversion rate optimization",
    "customer lifetime value",
    "marketing automation",
    "data-driven marketing",
];

// (url, impressions, clicks, cost)
const COMPETITORS: [(&str, u64, u64, u64); 5] = [
    ("example1.com", 10_000, 500, 1_000_000),
    ("example2.com", 8_000, 400, 800_000),
    ("example3.com", 12_000, 600, 1_200_000),
    ("example4.com", 9_000, 450, 900_000),
    ("example5.com", 11_000, 550, 1_100_000),
];

pub fn generate(keywords: &[String]) -> Snapshot {
    generate_with(&mut rand::thread_rng(), keywords)
}

pub fn generate_with<R: Rng>(rng: &mut R, keywords: &[String]) -> Snapshot {
    Snapshot {
        timestamp: Snapshot::now_timestamp(),
        related_keywords: RELATED_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        competitors: COMPETITORS
            .iter()
            .map(|&(url, impressions, clicks, cost)| Competitor {
                url: url.to_string(),
                impressions,
                clicks,
                cost,
            })
            .collect(),
        keyword_analysis: keywords
            .iter()
            .map(|keyword| KeywordAnalysis {
                keyword: keyword.clone(),
                pc_rank: rng.gen_range(1..=10),
                mobile_rank: rng.gen_range(1..=10),
                bid_price: rng.gen_range(1_000..6_000),
                impressions: rng.gen_range(10_000..40_000),
                clicks: rng.gen_range(500..2_000),
                cost: rng.gen_range(1_000_000..4_000_000),
                cpc: rng.gen_range(1_000..4_000),
            })
            .collect(),
    }
}

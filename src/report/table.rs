//! Terminal rendering for a snapshot.
//!
//! Three sections, in display order:
//! - related keywords, wrapped as a tag list
//! - competitor table
//! - per-keyword analysis table

use crate::snapshot::Snapshot;
use crate::util::{format_money, format_number, truncate};

const TAG_LINE_WIDTH: usize = 72;

pub fn render(snapshot: &Snapshot, currency: &str) -> String {
    let mut output = String::new();

    output.push_str("\nRelated keywords\n");
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&render_tags(&snapshot.related_keywords));

    output.push_str("\nCompetitors\n");
    output.push_str(&"-".repeat(40));
    output.push('\n');
    if snapshot.competitors.is_empty() {
        output.push_str("  (none)\n");
    } else {
        output.push_str(&format!(
            "  {:24} {:>12} {:>10} {:>16}\n",
            "URL", "impressions", "clicks", "cost"
        ));
        for competitor in &snapshot.competitors {
            output.push_str(&format!(
                "  {:24} {:>12} {:>10} {:>16}\n",
                truncate(&competitor.url, 24),
                format_number(competitor.impressions),
                format_number(competitor.clicks),
                format_money(competitor.cost, currency)
            ));
        }
    }

    output.push_str("\nKeyword analysis\n");
    output.push_str(&"-".repeat(40));
    output.push('\n');
    if snapshot.keyword_analysis.is_empty() {
        output.push_str("  (none)\n");
    } else {
        output.push_str(&format!(
            "  {:20} {:>4} {:>6} {:>10} {:>12} {:>8} {:>14} {:>8}\n",
            "keyword", "pc", "mobile", "bid", "impressions", "clicks", "cost", "cpc"
        ));
        for row in &snapshot.keyword_analysis {
            output.push_str(&format!(
                "  {:20} {:>4} {:>6} {:>10} {:>12} {:>8} {:>14} {:>8}\n",
                truncate(&row.keyword, 20),
                row.pc_rank,
                row.mobile_rank,
                format_money(row.bid_price, currency),
                format_number(row.impressions),
                format_number(row.clicks),
                format_money(row.cost, currency),
                format_money(row.cpc, currency)
            ));
        }
    }

    output
}

fn render_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::from("  (none)\n");
    }

    let mut output = String::new();
    let mut line = String::from(" ");

    for tag in tags {
        let tag = format!(" [{tag}]");
        if line.chars().count() + tag.chars().count() > TAG_LINE_WIDTH && line.len() > 1 {
            output.push_str(&line);
            output.push('\n');
            line = String::from(" ");
        }
        line.push_str(&tag);
    }

    output.push_str(&line);
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{Competitor, KeywordAnalysis};

    fn sample() -> Snapshot {
        Snapshot {
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            related_keywords: vec!["seo".to_string(), "retargeting".to_string()],
            competitors: vec![Competitor {
                url: "example1.com".to_string(),
                impressions: 10_000,
                clicks: 500,
                cost: 1_000_000,
            }],
            keyword_analysis: vec![KeywordAnalysis {
                keyword: "shoes".to_string(),
                pc_rank: 2,
                mobile_rank: 9,
                bid_price: 1_500,
                impressions: 20_000,
                clicks: 800,
                cost: 2_000_000,
                cpc: 1_200,
            }],
        }
    }

    #[test]
    fn renders_all_sections() {
        let output = render(&sample(), "원");
        assert!(output.contains("[seo] [retargeting]"));
        assert!(output.contains("example1.com"));
        assert!(output.contains("1,000,000원"));
        assert!(output.contains("shoes"));
        assert!(output.contains("2,000,000원"));
    }

    #[test]
    fn empty_sections_say_none() {
        let snapshot = Snapshot {
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            related_keywords: vec![],
            competitors: vec![],
            keyword_analysis: vec![],
        };
        assert_eq!(render(&snapshot, "").matches("(none)").count(), 3);
    }

    #[test]
    fn long_tag_lists_wrap() {
        let tags: Vec<String> = (0..30).map(|i| format!("keyword number {i}")).collect();
        let rendered = render_tags(&tags);
        assert!(rendered.lines().count() > 1);
        assert!(rendered.lines().all(|l| l.chars().count() <= TAG_LINE_WIDTH + 20));
    }
}

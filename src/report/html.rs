//! HTML fragments for embedding a snapshot in a page.
//!
//! Produces the inner markup of the three result regions: the related
//! keyword tag list and the two tables. All text is escaped.

use crate::snapshot::Snapshot;
use crate::util::{escape_html, format_money, format_number};

pub struct Fragments {
    pub related_keywords: String,
    pub competitors: String,
    pub keyword_analysis: String,
}

pub fn fragments(snapshot: &Snapshot, currency: &str) -> Fragments {
    let currency = escape_html(currency);

    let related_keywords = snapshot
        .related_keywords
        .iter()
        .map(|k| format!("<li class=\"tag\">{}</li>", escape_html(k)))
        .collect::<String>();

    let mut competitors = String::from(
        "<tr><th>URL</th><th>Monthly impressions</th><th>Monthly clicks</th><th>Monthly cost</th></tr>",
    );
    for c in &snapshot.competitors {
        competitors.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&c.url),
            format_number(c.impressions),
            format_number(c.clicks),
            format_money(c.cost, &currency)
        ));
    }

    let mut keyword_analysis = String::from(
        "<tr><th>Keyword</th><th>PC rank</th><th>Mobile rank</th><th>Bid price</th>\
         <th>Monthly impressions</th><th>Monthly clicks</th><th>Monthly cost</th><th>CPC</th></tr>",
    );
    for a in &snapshot.keyword_analysis {
        keyword_analysis.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&a.keyword),
            a.pc_rank,
            a.mobile_rank,
            format_money(a.bid_price, &currency),
            format_number(a.impressions),
            format_number(a.clicks),
            format_money(a.cost, &currency),
            format_money(a.cpc, &currency)
        ));
    }

    Fragments {
        related_keywords,
        competitors,
        keyword_analysis,
    }
}

/// All three fragments wrapped in their containers.
pub fn render(snapshot: &Snapshot, currency: &str) -> String {
    let f = fragments(snapshot, currency);
    format!(
        "<ul id=\"relatedKeywordList\">{}</ul>\n<table id=\"competitorTable\">{}</table>\n<table id=\"keywordAnalysisTable\">{}</table>\n",
        f.related_keywords, f.competitors, f.keyword_analysis
    )
}

//! Built-in sample dataset.
//!
//! The editor shows this dataset when it runs without a real master
//! file, so the term table is never empty on first launch. The shape
//! mirrors a typical site setup: five root categories, a second level
//! under two of them and a handful of post tags.

use tms_model::TermRow;

/// Sample master-terms file content.
pub const SAMPLE_MASTER_TERMS_CSV: &str = "id,taxonomy,name,slug,parent
1,category,News,news,0
2,category,Guides,guides,0
3,category,Reviews,reviews,0
4,category,Events,events,0
5,category,Releases,releases,0
11,category,Product News,product-news,1
12,category,Company News,company-news,1
13,category,Community News,community-news,1
31,category,Hardware Reviews,hardware-reviews,3
101,post_tag,howto,howto,0
102,post_tag,interview,interview,0
103,post_tag,opinion,opinion,0
104,post_tag,roundup,roundup,0
105,post_tag,archive,archive,0
";

/// The sample dataset as rows, in file order.
pub fn sample_rows() -> Vec<TermRow> {
    vec![
        TermRow::new("1", "category", "News", "news", "0"),
        TermRow::new("2", "category", "Guides", "guides", "0"),
        TermRow::new("3", "category", "Reviews", "reviews", "0"),
        TermRow::new("4", "category", "Events", "events", "0"),
        TermRow::new("5", "category", "Releases", "releases", "0"),
        TermRow::new("11", "category", "Product News", "product-news", "1"),
        TermRow::new("12", "category", "Company News", "company-news", "1"),
        TermRow::new("13", "category", "Community News", "community-news", "1"),
        TermRow::new("31", "category", "Hardware Reviews", "hardware-reviews", "3"),
        TermRow::new("101", "post_tag", "howto", "howto", "0"),
        TermRow::new("102", "post_tag", "interview", "interview", "0"),
        TermRow::new("103", "post_tag", "opinion", "opinion", "0"),
        TermRow::new("104", "post_tag", "roundup", "roundup", "0"),
        TermRow::new("105", "post_tag", "archive", "archive", "0"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tms_codec::parse_master_terms;
    use tms_model::Taxonomy;

    #[test]
    fn sample_rows_match_the_sample_file() {
        let decoded = parse_master_terms(SAMPLE_MASTER_TERMS_CSV).expect("decode sample");
        assert_eq!(decoded, sample_rows());
    }

    #[test]
    fn sample_covers_both_taxonomies_and_nesting() {
        let rows = sample_rows();
        assert_eq!(rows.len(), 14);
        assert!(
            rows.iter()
                .any(|row| row.taxonomy_kind() == Some(Taxonomy::Category) && !row.is_root())
        );
        assert!(
            rows.iter()
                .any(|row| row.taxonomy_kind() == Some(Taxonomy::PostTag))
        );
    }
}

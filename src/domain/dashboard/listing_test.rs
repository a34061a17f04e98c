#[cfg(test)]
mod tests {
    use crate::domain::dashboard::listing::*;
    use crate::domain::foundation::{OpportunityId, Timestamp};
    use crate::domain::judgment::test_support::judgment;
    use crate::domain::opportunity::test_support::opportunity;
    use crate::domain::opportunity::{FundingStage, Opportunity};
    use crate::domain::selection::{ComparisonSet, FavoriteSet};

    fn id(s: &str) -> OpportunityId {
        OpportunityId::new(s).unwrap()
    }

    fn catalog() -> Vec<Opportunity> {
        let mut a = opportunity("1", FundingStage::SeriesA, "Artificial Intelligence");
        a.company_name = "TechVision AI".to_string();
        a.description = "Computer vision for retail analytics".to_string();
        a.funding_amount = 5_000_000;
        a.valuation = 25_000_000;
        a.created_at = Timestamp::from_ymd(2024, 1, 15).unwrap();

        let mut b = opportunity("2", FundingStage::SeriesB, "Clean Energy");
        b.company_name = "GreenEnergy Solutions".to_string();
        b.funding_amount = 15_000_000;
        b.valuation = 80_000_000;
        b.created_at = Timestamp::from_ymd(2024, 1, 20).unwrap();

        let mut c = opportunity("3", FundingStage::Seed, "Healthcare");
        c.company_name = "healthtrack pro".to_string();
        c.funding_amount = 250_000;
        c.valuation = 3_000_000;
        c.created_at = Timestamp::from_ymd(2024, 2, 1).unwrap();

        vec![a, b, c]
    }

    fn ids(listing: &OpportunityListing) -> Vec<&str> {
        listing
            .opportunities
            .iter()
            .map(|card| card.opportunity.id.as_str())
            .collect()
    }

    fn build(filter: OpportunityFilter) -> OpportunityListing {
        OpportunityListing::build(
            &catalog(),
            &[],
            &FavoriteSet::default(),
            &ComparisonSet::default(),
            &filter,
        )
    }

    #[test]
    fn no_filter_keeps_catalog_order() {
        let listing = build(OpportunityFilter::default());
        assert_eq!(ids(&listing), vec!["1", "2", "3"]);
        assert_eq!(listing.total, 3);
    }

    #[test]
    fn search_is_case_insensitive_over_name_description_industry() {
        let by_name = build(OpportunityFilter {
            search: Some("greenENERGY".to_string()),
            ..Default::default()
        });
        assert_eq!(ids(&by_name), vec!["2"]);

        let by_description = build(OpportunityFilter {
            search: Some("retail".to_string()),
            ..Default::default()
        });
        assert_eq!(ids(&by_description), vec!["1"]);

        let by_industry = build(OpportunityFilter {
            search: Some("health".to_string()),
            ..Default::default()
        });
        assert_eq!(ids(&by_industry), vec!["3"]);
    }

    #[test]
    fn stage_and_industry_filters_combine() {
        let listing = build(OpportunityFilter {
            stage: Some(FundingStage::SeriesA),
            industry: Some("Clean Energy".to_string()),
            ..Default::default()
        });
        assert!(listing.opportunities.is_empty());
        assert_eq!(listing.total, 0);

        let listing = build(OpportunityFilter {
            stage: Some(FundingStage::SeriesB),
            ..Default::default()
        });
        assert_eq!(ids(&listing), vec!["2"]);
    }

    #[test]
    fn favorites_only_shows_favorites() {
        let favorites = FavoriteSet::from_ids([id("3"), id("1")]);
        let listing = OpportunityListing::build(
            &catalog(),
            &[],
            &favorites,
            &ComparisonSet::default(),
            &OpportunityFilter {
                favorites_only: true,
                ..Default::default()
            },
        );

        assert_eq!(ids(&listing), vec!["1", "3"]);
        assert!(listing.opportunities.iter().all(|card| card.is_favorite));
    }

    #[test]
    fn sort_by_name_ignores_case() {
        let listing = build(OpportunityFilter {
            sort: Some(SortKey::Name),
            ..Default::default()
        });
        assert_eq!(ids(&listing), vec!["2", "3", "1"]);
    }

    #[test]
    fn sort_by_funding_valuation_and_date_descend() {
        let funding = build(OpportunityFilter {
            sort: Some(SortKey::Funding),
            ..Default::default()
        });
        assert_eq!(ids(&funding), vec!["2", "1", "3"]);

        let valuation = build(OpportunityFilter {
            sort: Some(SortKey::Valuation),
            ..Default::default()
        });
        assert_eq!(ids(&valuation), vec!["2", "1", "3"]);

        let date = build(OpportunityFilter {
            sort: Some(SortKey::Date),
            ..Default::default()
        });
        assert_eq!(ids(&date), vec!["3", "2", "1"]);
    }

    #[test]
    fn sort_by_score_puts_unjudged_last() {
        let judgments = vec![
            judgment("3", "Ada", [4, 4, 4, 4, 4]),
            judgment("1", "Ada", [9, 9, 9, 9, 9]),
        ];
        let listing = OpportunityListing::build(
            &catalog(),
            &judgments,
            &FavoriteSet::default(),
            &ComparisonSet::default(),
            &OpportunityFilter {
                sort: Some(SortKey::Score),
                ..Default::default()
            },
        );

        assert_eq!(ids(&listing), vec!["1", "3", "2"]);
        assert!(!listing.opportunities[2].has_judgment);
        assert_eq!(listing.opportunities[0].average_score, 9.0);
    }

    #[test]
    fn cards_carry_compact_currency_and_flags() {
        let listing = OpportunityListing::build(
            &catalog(),
            &[],
            &FavoriteSet::default(),
            &ComparisonSet::from_ids([id("3")]),
            &OpportunityFilter::default(),
        );

        let card = &listing.opportunities[2];
        assert_eq!(card.funding_display, "$250K");
        assert_eq!(card.valuation_display, "$3.0M");
        assert!(card.in_comparison);
        assert!(!card.is_favorite);
        assert_eq!(listing.opportunities[0].funding_display, "$5.0M");
    }

    #[test]
    fn filter_options_are_distinct_in_catalog_order() {
        let mut opportunities = catalog();
        opportunities.push(opportunity("4", FundingStage::SeriesA, "Healthcare"));

        let options = FilterOptions::from_catalog(&opportunities);

        assert_eq!(
            options.stages,
            vec![FundingStage::SeriesA, FundingStage::SeriesB, FundingStage::Seed]
        );
        assert_eq!(
            options.industries,
            vec!["Artificial Intelligence", "Clean Energy", "Healthcare"]
        );
    }

    #[test]
    fn card_serializes_flattened_opportunity() {
        let listing = build(OpportunityFilter::default());
        let json = serde_json::to_value(&listing).unwrap();

        let card = &json["opportunities"][0];
        assert_eq!(card["companyName"], "TechVision AI");
        assert_eq!(card["fundingDisplay"], "$5.0M");
        assert_eq!(card["judgmentCount"], 0);
        assert_eq!(json["filters"]["stages"][0], "Series A");
    }

    #[test]
    fn sort_key_parses_case_insensitively() {
        assert_eq!("Score".parse::<SortKey>().unwrap(), SortKey::Score);
        assert!("rating".parse::<SortKey>().is_err());
    }
}

use super::FetchPlan;
use crate::models::app_config::AppConfig;
use crate::models::enums::Preset;

#[test]
fn free_text_plans_widen_the_query_and_use_the_configured_subreddit() {
    let mut config = AppConfig::default();
    config.reddit.subreddit = "stocks".to_string();

    let plan = FetchPlan::from_query("semiconductors", &config);

    assert!(plan.guardian_query.starts_with("semiconductors"));
    assert!(plan.guardian_query.contains("venture capital"));
    assert!(plan.newsapi_query.contains("OR IPO"));
    assert_eq!(plan.subreddit, "stocks");
    assert_eq!(plan.limit, None);
}

#[test]
fn preset_plans_map_to_per_source_queries_not_the_preset_name() {
    let plan = FetchPlan::from_preset(Preset::Ipo);

    assert_eq!(plan.guardian_query, "IPO announcement");
    assert!(plan.newsapi_query.contains("IPO"));
    assert_ne!(plan.guardian_query, "ipo");
    assert_ne!(plan.subreddit, "ipo");
    assert!(!plan.subreddit.is_empty());
}

#[test]
fn each_preset_has_nonempty_mappings() {
    for preset in Preset::ALL {
        let plan = FetchPlan::from_preset(preset);
        assert!(!plan.guardian_query.is_empty(), "{preset} cms query");
        assert!(!plan.newsapi_query.is_empty(), "{preset} aggregator query");
        assert!(!plan.subreddit.is_empty(), "{preset} subreddit");
    }
}

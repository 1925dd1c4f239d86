//! Explore page scenarios run against the mock catalog.

use model::entities::prelude::{Recipe, RecipeCategory};
use model::{CookbookStore, MockStore};

use crate::recipes::{CategoryFilter, RecipeQuery, TimeFilter};

/// Prepared test scenario: the input list, the query and the ids expected
/// back, in order.
pub type TestScenario = (Vec<Recipe>, RecipeQuery, Vec<&'static str>);

/// Trait for building test scenarios.
pub trait TestScenarioBuilder {
    fn get_scenario(&self) -> TestScenario;
}

pub fn run_and_assert_scenario(builder: &dyn TestScenarioBuilder) {
    let (recipes, query, expected) = builder.get_scenario();
    let result = query.apply(&recipes);
    let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, expected, "query {:?}", query);
}

fn explore_catalog() -> Vec<Recipe> {
    MockStore::new().recipes()
}

pub struct ScenarioChocolateSearch;

impl TestScenarioBuilder for ScenarioChocolateSearch {
    fn get_scenario(&self) -> TestScenario {
        let query = RecipeQuery {
            search: "Chocolate".into(),
            ..Default::default()
        };
        (explore_catalog(), query, vec!["2", "11"])
    }
}

pub struct ScenarioQuickBreakfast;

impl TestScenarioBuilder for ScenarioQuickBreakfast {
    fn get_scenario(&self) -> TestScenario {
        let query = RecipeQuery {
            category: CategoryFilter::Category(RecipeCategory::Breakfast),
            time: TimeFilter::Under15,
            ..Default::default()
        };
        (explore_catalog(), query, vec!["5"])
    }
}

pub struct ScenarioQuickAndEasy;

impl TestScenarioBuilder for ScenarioQuickAndEasy {
    fn get_scenario(&self) -> TestScenario {
        let query = RecipeQuery {
            category: CategoryFilter::Quick,
            ..Default::default()
        };
        (explore_catalog(), query, vec!["1", "5", "6", "9", "11"])
    }
}

pub struct ScenarioLongCooks;

impl TestScenarioBuilder for ScenarioLongCooks {
    fn get_scenario(&self) -> TestScenario {
        let query = RecipeQuery {
            time: TimeFilter::Over60,
            ..Default::default()
        };
        (explore_catalog(), query, vec!["7"])
    }
}

pub struct ScenarioNoMatch;

impl TestScenarioBuilder for ScenarioNoMatch {
    fn get_scenario(&self) -> TestScenario {
        let query = RecipeQuery {
            search: "pasta".into(),
            category: CategoryFilter::Category(RecipeCategory::Desserts),
            ..Default::default()
        };
        (explore_catalog(), query, vec![])
    }
}

#[test]
fn test_scenario_chocolate_search() {
    run_and_assert_scenario(&ScenarioChocolateSearch);
}

#[test]
fn test_scenario_quick_breakfast() {
    run_and_assert_scenario(&ScenarioQuickBreakfast);
}

#[test]
fn test_scenario_quick_and_easy() {
    run_and_assert_scenario(&ScenarioQuickAndEasy);
}

#[test]
fn test_scenario_long_cooks() {
    run_and_assert_scenario(&ScenarioLongCooks);
}

#[test]
fn test_scenario_no_match() {
    run_and_assert_scenario(&ScenarioNoMatch);
}

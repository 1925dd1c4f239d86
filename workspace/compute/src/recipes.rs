//! Filtered and ordered views over a recipe list.

use std::fmt;
use std::str::FromStr;

use model::entities::prelude::{Recipe, RecipeCategory};
use tracing::{debug, instrument};

use crate::cooking_time::parse_minutes;
use crate::error::{ComputeError, Result};

/// Exclusive upper bound for the "Quick & Easy" category, in minutes.
pub const QUICK_MINUTES: u32 = 30;

/// Category select on the explore page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Recipes that take less than [`QUICK_MINUTES`].
    Quick,
    Category(RecipeCategory),
}

impl CategoryFilter {
    /// Options in the order the select shows them.
    pub fn options() -> Vec<CategoryFilter> {
        let mut options = vec![CategoryFilter::All];
        options.extend(
            [
                RecipeCategory::Breakfast,
                RecipeCategory::Lunch,
                RecipeCategory::Dinner,
                RecipeCategory::Desserts,
                RecipeCategory::Vegetarian,
                RecipeCategory::Vegan,
            ]
            .map(CategoryFilter::Category),
        );
        options.push(CategoryFilter::Quick);
        options
    }

    pub fn value(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Quick => "quick",
            CategoryFilter::Category(c) => c.value(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Quick => "Quick & Easy",
            CategoryFilter::Category(c) => c.label(),
        }
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Quick => {
                parse_minutes(&recipe.cooking_time).is_some_and(|m| m < QUICK_MINUTES)
            }
            CategoryFilter::Category(c) => recipe.category == Some(*c),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ComputeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" | "all" => Ok(CategoryFilter::All),
            "quick" => Ok(CategoryFilter::Quick),
            other => other
                .parse::<RecipeCategory>()
                .map(CategoryFilter::Category)
                .map_err(|_| ComputeError::unknown_filter("category", s)),
        }
    }
}

/// Cooking-time select on the explore page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFilter {
    #[default]
    All,
    Under15,
    Under30,
    Under60,
    Over60,
}

impl TimeFilter {
    pub const ALL: [TimeFilter; 5] = [
        TimeFilter::All,
        TimeFilter::Under15,
        TimeFilter::Under30,
        TimeFilter::Under60,
        TimeFilter::Over60,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            TimeFilter::All => "all",
            TimeFilter::Under15 => "under15",
            TimeFilter::Under30 => "under30",
            TimeFilter::Under60 => "under60",
            TimeFilter::Over60 => "over60",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeFilter::All => "Any Time",
            TimeFilter::Under15 => "Under 15 minutes",
            TimeFilter::Under30 => "Under 30 minutes",
            TimeFilter::Under60 => "Under 1 hour",
            TimeFilter::Over60 => "Over 1 hour",
        }
    }

    /// Buckets are inclusive at their upper bound; `Over60` is strict.
    /// A time that cannot be read only passes `All`.
    pub fn matches_minutes(&self, minutes: Option<u32>) -> bool {
        match (self, minutes) {
            (TimeFilter::All, _) => true,
            (_, None) => false,
            (TimeFilter::Under15, Some(m)) => m <= 15,
            (TimeFilter::Under30, Some(m)) => m <= 30,
            (TimeFilter::Under60, Some(m)) => m <= 60,
            (TimeFilter::Over60, Some(m)) => m > 60,
        }
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_minutes(parse_minutes(&recipe.cooking_time))
    }
}

impl FromStr for TimeFilter {
    type Err = ComputeError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        if needle.is_empty() {
            return Ok(TimeFilter::All);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.value() == needle)
            .ok_or_else(|| ComputeError::unknown_filter("time", s))
    }
}

/// Search box plus the two selects of the explore page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipeQuery {
    pub search: String,
    pub category: CategoryFilter,
    pub time: TimeFilter,
}

impl RecipeQuery {
    /// Case-insensitive substring match over title or description. An empty
    /// search matches everything.
    pub fn matches_search(&self, recipe: &Recipe) -> bool {
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || recipe.title.to_lowercase().contains(&needle)
            || recipe.description.to_lowercase().contains(&needle)
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_search(recipe) && self.category.matches(recipe) && self.time.matches(recipe)
    }

    /// Keeps the matching recipes in their original order.
    #[instrument(skip(recipes), fields(num_recipes = recipes.len()))]
    pub fn apply(&self, recipes: &[Recipe]) -> Vec<Recipe> {
        let result: Vec<Recipe> = recipes.iter().filter(|r| self.matches(r)).cloned().collect();
        debug!("{} of {} recipes match", result.len(), recipes.len());
        result
    }
}

/// Orderings offered by the home feed tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedOrder {
    /// Catalog order.
    #[default]
    Trending,
    /// Newest first; the catalog is oldest first.
    Recent,
    /// Most liked first.
    Popular,
}

impl FeedOrder {
    pub const ALL: [FeedOrder; 3] = [FeedOrder::Trending, FeedOrder::Recent, FeedOrder::Popular];

    pub fn label(&self) -> &'static str {
        match self {
            FeedOrder::Trending => "Trending",
            FeedOrder::Recent => "Recent",
            FeedOrder::Popular => "Popular",
        }
    }

    pub fn apply(&self, recipes: &[Recipe]) -> Vec<Recipe> {
        let mut ordered = recipes.to_vec();
        match self {
            FeedOrder::Trending => {}
            FeedOrder::Recent => ordered.reverse(),
            // Stable, so ties keep catalog order.
            FeedOrder::Popular => ordered.sort_by(|a, b| b.likes.count.cmp(&a.likes.count)),
        }
        ordered
    }
}

impl fmt::Display for FeedOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// "Load more": the current list followed by the first `batch` records of
/// `source`. Nothing new is fetched, so records repeat.
pub fn load_more<T: Clone>(current: &[T], source: &[T], batch: usize) -> Vec<T> {
    current
        .iter()
        .chain(source.iter().take(batch))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{CookbookStore, MockStore};

    fn ids(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_search_matches_title_or_description_ignoring_case() {
        let recipes = MockStore::new().recipes();
        let query = RecipeQuery {
            search: "CURRY".into(),
            ..Default::default()
        };
        let result = query.apply(&recipes);
        assert_eq!(ids(&result), vec!["3"]);

        let query = RecipeQuery {
            search: "tahini".into(),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&recipes)), vec!["8"]);

        let query = RecipeQuery {
            search: "past".into(),
            ..Default::default()
        };
        for recipe in query.apply(&recipes) {
            let haystack = format!("{} {}", recipe.title, recipe.description).to_lowercase();
            assert!(haystack.contains("past"));
        }
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let recipes = MockStore::new().recipes();
        assert_eq!(RecipeQuery::default().apply(&recipes), recipes);
    }

    #[test]
    fn test_category_filter_parsing() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("quick".parse::<CategoryFilter>().unwrap(), CategoryFilter::Quick);
        assert_eq!(
            "dessert".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Category(RecipeCategory::Desserts)
        );
        assert_eq!(
            "brunch".parse::<CategoryFilter>(),
            Err(ComputeError::unknown_filter("category", "brunch"))
        );
        for option in CategoryFilter::options() {
            assert_eq!(option.value().parse::<CategoryFilter>().unwrap(), option);
        }
    }

    #[test]
    fn test_quick_excludes_thirty_minutes() {
        let mut recipe = MockStore::new().recipes().remove(0);
        for (cooking_time, quick) in [
            ("29 mins", true),
            ("30 mins", false),
            ("0.5 hours", false),
            ("overnight", false),
        ] {
            recipe.cooking_time = cooking_time.into();
            assert_eq!(CategoryFilter::Quick.matches(&recipe), quick, "{cooking_time}");
        }

        let recipes = MockStore::new().recipes();
        let quick = RecipeQuery {
            category: CategoryFilter::Quick,
            ..Default::default()
        }
        .apply(&recipes);
        assert!(!quick.is_empty());
        assert!(quick.iter().all(|r| r.cooking_time != "30 mins"));
    }

    #[test]
    fn test_time_buckets() {
        assert!(TimeFilter::Under15.matches_minutes(Some(15)));
        assert!(!TimeFilter::Under15.matches_minutes(Some(16)));
        assert!(TimeFilter::Under60.matches_minutes(Some(60)));
        assert!(!TimeFilter::Over60.matches_minutes(Some(60)));
        assert!(TimeFilter::Over60.matches_minutes(Some(61)));
        assert!(!TimeFilter::Under30.matches_minutes(None));
        assert!(TimeFilter::All.matches_minutes(None));
        assert!("later".parse::<TimeFilter>().is_err());
    }

    #[test]
    fn test_feed_orders() {
        let feed = MockStore::new().feed();
        assert_eq!(ids(&FeedOrder::Trending.apply(&feed)), vec!["1", "2", "3", "4", "5", "6"]);
        assert_eq!(ids(&FeedOrder::Recent.apply(&feed)), vec!["6", "5", "4", "3", "2", "1"]);

        let popular = FeedOrder::Popular.apply(&feed);
        assert_eq!(popular[0].id, "2");
        assert!(popular.windows(2).all(|w| w[0].likes.count >= w[1].likes.count));
    }

    #[test]
    fn test_load_more_appends_one_batch() {
        let source = vec![1, 2, 3, 4, 5];
        let once = load_more(&source, &source, 3);
        assert_eq!(once, vec![1, 2, 3, 4, 5, 1, 2, 3]);
        let twice = load_more(&once, &source, 3);
        assert_eq!(twice.len(), once.len() + 3);
        assert_eq!(load_more(&source, &source, 10).len(), 10);
    }
}

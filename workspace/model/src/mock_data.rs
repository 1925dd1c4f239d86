//! Static placeholder records standing in for a backend.

use common::{CreateLearningPlanRequest, CreateRecipeRequest, UpdateProfileRequest};
use tracing::{info, instrument, warn};

use crate::entities::author::profile_slug;
use crate::entities::prelude::*;
use crate::error::{ModelError, Result};
use crate::like::LikeState;
use crate::store::CookbookStore;

/// Profile id of the signed-in user.
pub const CURRENT_USER_ID: &str = "john-doe";

/// Shown when a cover image URL fails to load.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1540420773420-3366772f4999?auto=format&q=75&fit=crop&w=600&h=350";

const FEED_IDS: [&str; 6] = ["1", "2", "3", "4", "5", "6"];

fn unsplash(photo: &str) -> String {
    format!(
        "https://images.unsplash.com/photo-{}?auto=format&q=75&fit=crop&w=600&h=350",
        photo
    )
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

struct RecipeSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    photo: &'static str,
    author: &'static str,
    cooking_time: &'static str,
    category: RecipeCategory,
    likes: u32,
    comments: u32,
}

impl RecipeSeed {
    fn build(self) -> Recipe {
        Recipe {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            image_url: unsplash(self.photo),
            author: Author::from_name(self.author),
            created_at: "March 15, 2025".to_string(),
            cooking_time: self.cooking_time.to_string(),
            servings: 4,
            category: Some(self.category),
            ingredients: strings(&["See the full recipe for quantities"]),
            steps: strings(&["Prepare the ingredients.", "Cook and serve."]),
            tags: vec![self.category.value().to_string()],
            likes: LikeState::new(false, self.likes),
            comments: self.comments,
            is_saved: false,
        }
    }
}

fn shrimp_pasta() -> Recipe {
    let mut recipe = RecipeSeed {
        id: "1",
        title: "Garlic Butter Shrimp Pasta",
        description: "This creamy garlic butter shrimp pasta is one of my favorite dinners because it's so quick and easy, taking only 20 minutes to make. It's perfect for date night, a quick weeknight dinner, or entertaining guests because it's impressive yet simple.",
        photo: "1563379926898-05f4575a45d8",
        author: "Emma Wilson",
        cooking_time: "25 mins",
        category: RecipeCategory::Dinner,
        likes: 124,
        comments: 32,
    }
    .build();

    recipe.ingredients = strings(&[
        "8 oz (225g) linguine or fettuccine pasta",
        "1 lb (450g) large shrimp, peeled and deveined",
        "4 tablespoons butter, divided",
        "5 cloves garlic, minced",
        "1/4 teaspoon red pepper flakes (optional)",
        "1/4 cup white wine or chicken broth",
        "1/2 cup heavy cream",
        "1/4 cup freshly grated Parmesan cheese",
        "2 tablespoons fresh parsley, chopped",
        "1 tablespoon fresh lemon juice",
        "Salt and pepper, to taste",
    ]);
    recipe.steps = strings(&[
        "Bring a large pot of salted water to a boil. Cook the pasta until al dente and reserve 1/2 cup of pasta water before draining.",
        "Pat the shrimp dry and season with salt and pepper.",
        "Melt 2 tablespoons of butter in a large skillet over medium-high heat. Cook the shrimp 1-2 minutes per side until pink, then set aside.",
        "Reduce the heat to medium, add the remaining butter, the garlic and red pepper flakes, and cook for about a minute until fragrant.",
        "Pour in the wine or broth and simmer for 2-3 minutes, scraping up any browned bits.",
        "Add the cream and simmer for 2-3 minutes until it starts to thicken.",
        "Stir in the Parmesan until smooth, loosening with pasta water if needed.",
        "Return the shrimp and pasta to the pan and toss to coat.",
        "Off the heat, stir in the lemon juice and parsley. Adjust the seasoning.",
        "Serve immediately with extra Parmesan and parsley.",
    ]);
    recipe.tags = strings(&["pasta", "seafood", "dinner", "quick", "garlic"]);
    recipe
}

fn recipe_catalog() -> Vec<Recipe> {
    let seeds = vec![
        RecipeSeed {
            id: "2",
            title: "Perfect Chocolate Chip Cookies",
            description: "Crispy on the outside, chewy on the inside - these chocolate chip cookies are simply perfect for any occasion.",
            photo: "1499636136210-6f4ee915583e",
            author: "John Baker",
            cooking_time: "45 mins",
            category: RecipeCategory::Desserts,
            likes: 287,
            comments: 54,
        },
        RecipeSeed {
            id: "3",
            title: "Thai Green Curry with Vegetables",
            description: "Aromatic and spicy Thai curry packed with fresh vegetables and served with jasmine rice.",
            photo: "1455619452474-d2be8b1e70cd",
            author: "Sarah Chang",
            cooking_time: "40 mins",
            category: RecipeCategory::Dinner,
            likes: 178,
            comments: 42,
        },
        RecipeSeed {
            id: "4",
            title: "Homemade Margherita Pizza",
            description: "Classic Margherita pizza with a crispy crust, fresh mozzarella, tomatoes, and basil.",
            photo: "1604382354936-07c5d9983bd3",
            author: "Marco Rossi",
            cooking_time: "50 mins",
            category: RecipeCategory::Dinner,
            likes: 210,
            comments: 38,
        },
        RecipeSeed {
            id: "5",
            title: "Avocado Toast with Poached Egg",
            description: "The perfect breakfast - creamy avocado on toasted sourdough topped with a perfectly poached egg.",
            photo: "1525351484163-7529414344d8",
            author: "Emily Green",
            cooking_time: "15 mins",
            category: RecipeCategory::Breakfast,
            likes: 156,
            comments: 27,
        },
        RecipeSeed {
            id: "6",
            title: "Beef and Vegetable Stir Fry",
            description: "A quick and healthy stir fry with tender beef strips and crisp vegetables in a savory sauce.",
            photo: "1512621776951-a57141f2eefd",
            author: "David Wong",
            cooking_time: "20 mins",
            category: RecipeCategory::Dinner,
            likes: 142,
            comments: 31,
        },
        RecipeSeed {
            id: "7",
            title: "Classic Beef Lasagna",
            description: "Layers of pasta, rich meat sauce, and creamy cheese make this lasagna a family favorite.",
            photo: "1619895092538-128341789043",
            author: "Mark Johnson",
            cooking_time: "1 hr 15 mins",
            category: RecipeCategory::Dinner,
            likes: 98,
            comments: 24,
        },
        RecipeSeed {
            id: "8",
            title: "Vegetarian Buddha Bowl",
            description: "A nourishing bowl filled with roasted vegetables, grains, and a delicious tahini dressing.",
            photo: "1512621776951-a57141f2eefd",
            author: "Sarah Chen",
            cooking_time: "35 mins",
            category: RecipeCategory::Vegetarian,
            likes: 156,
            comments: 41,
        },
        RecipeSeed {
            id: "9",
            title: "Fluffy Blueberry Pancakes",
            description: "Start your day right with these light and fluffy pancakes loaded with fresh blueberries.",
            photo: "1528207776546-365bb710ee93",
            author: "David Kim",
            cooking_time: "20 mins",
            category: RecipeCategory::Breakfast,
            likes: 87,
            comments: 19,
        },
        RecipeSeed {
            id: "10",
            title: "Crispy Baked Chicken Wings",
            description: "Perfectly crispy chicken wings baked in the oven and tossed in your favorite sauce.",
            photo: "1527477396000-e27163b481c2",
            author: "Alex Rodriguez",
            cooking_time: "45 mins",
            category: RecipeCategory::Appetizers,
            likes: 112,
            comments: 27,
        },
        RecipeSeed {
            id: "11",
            title: "Chocolate Lava Cake",
            description: "Decadent chocolate cake with a warm, gooey center, perfect for chocolate lovers.",
            photo: "1563805042-7684c019e1cb",
            author: "Michael Thompson",
            cooking_time: "25 mins",
            category: RecipeCategory::Desserts,
            likes: 178,
            comments: 45,
        },
        RecipeSeed {
            id: "12",
            title: "Fresh Spring Rolls",
            description: "Light and healthy spring rolls filled with vegetables, herbs, and your choice of protein.",
            photo: "1536304929831-ee1ca9d44906",
            author: "Jennifer Lee",
            cooking_time: "30 mins",
            category: RecipeCategory::Vegan,
            likes: 92,
            comments: 21,
        },
        RecipeSeed {
            id: "13",
            title: "Lemon Herb Roasted Chicken",
            description: "Juicy roasted chicken with a delicious lemon and herb flavor. Perfect for Sunday dinner!",
            photo: "1532550907401-a500c9a57435",
            author: "John Doe",
            cooking_time: "1h 30m",
            category: RecipeCategory::Dinner,
            likes: 189,
            comments: 45,
        },
        RecipeSeed {
            id: "14",
            title: "Classic Beef Stroganoff",
            description: "Creamy beef stroganoff with mushrooms served over egg noodles. A family favorite comfort food.",
            photo: "1673913816586-aa75aa4bbb41",
            author: "John Doe",
            cooking_time: "45 mins",
            category: RecipeCategory::Dinner,
            likes: 142,
            comments: 32,
        },
        RecipeSeed {
            id: "15",
            title: "Triple Chocolate Brownies",
            description: "Rich, fudgy brownies with three types of chocolate. Guaranteed to satisfy any chocolate craving!",
            photo: "1606313564200-e75d5e30476c",
            author: "John Doe",
            cooking_time: "40 mins",
            category: RecipeCategory::Desserts,
            likes: 221,
            comments: 53,
        },
    ];

    std::iter::once(shrimp_pasta())
        .chain(seeds.into_iter().map(RecipeSeed::build))
        .collect()
}

fn comment(id: &str, text: &str, author: &str, created_at: &str, likes: u32, liked: bool) -> Comment {
    Comment {
        id: id.to_string(),
        text: text.to_string(),
        author: Author::from_name(author),
        created_at: created_at.to_string(),
        likes: LikeState::new(liked, likes),
    }
}

fn current_user() -> Profile {
    Profile {
        id: CURRENT_USER_ID.to_string(),
        name: "John Doe".to_string(),
        avatar: None,
        bio: Some("Food enthusiast and home chef. I love creating simple, delicious recipes that anyone can make at home.".to_string()),
        location: Some("San Francisco, CA".to_string()),
        website: Some("https://johndoe-chef.com".to_string()),
        email: Some("john.doe@example.com".to_string()),
        join_date: "January 2025".to_string(),
        followers_count: 458,
        following_count: 123,
        recipes_count: 42,
    }
}

fn challenge_catalog() -> Vec<Challenge> {
    vec![
        Challenge {
            id: "1".to_string(),
            title: "30-Minute Meals Challenge".to_string(),
            description: "Create a delicious, balanced meal in just 30 minutes using only 5 main ingredients.".to_string(),
            image_url: unsplash("1504674900247-0877df9cc836"),
            status: ChallengeStatus::Active,
            start_date: "Apr 1, 2025".to_string(),
            end_date: "Apr 15, 2025".to_string(),
            participants: 78,
            progress: 40,
            prize: "Featured on homepage".to_string(),
            entries: 28,
            likes: 145,
            comments: 32,
        },
        Challenge {
            id: "2".to_string(),
            title: "Plant-Based Dessert Challenge".to_string(),
            description: "Create a delicious dessert using only plant-based ingredients. Get creative!".to_string(),
            image_url: unsplash("1464349095431-e9a21285b5f3"),
            status: ChallengeStatus::Active,
            start_date: "Apr 5, 2025".to_string(),
            end_date: "Apr 20, 2025".to_string(),
            participants: 64,
            progress: 30,
            prize: "$50 Gift Card".to_string(),
            entries: 19,
            likes: 112,
            comments: 27,
        },
        Challenge {
            id: "3".to_string(),
            title: "Global Fusion Challenge".to_string(),
            description: "Combine techniques and flavors from two different cultural cuisines to create something unique.".to_string(),
            image_url: unsplash("1455619452474-d2be8b1e70cd"),
            status: ChallengeStatus::Upcoming,
            start_date: "Apr 20, 2025".to_string(),
            end_date: "May 5, 2025".to_string(),
            participants: 32,
            progress: 0,
            prize: "Cookbook Collection".to_string(),
            entries: 0,
            likes: 67,
            comments: 14,
        },
        Challenge {
            id: "4".to_string(),
            title: "Zero Waste Cooking Challenge".to_string(),
            description: "Create a meal using commonly discarded food parts (stems, peels, etc.) to reduce food waste.".to_string(),
            image_url: unsplash("1490645935967-10de6ba17061"),
            status: ChallengeStatus::Completed,
            start_date: "Mar 10, 2025".to_string(),
            end_date: "Mar 25, 2025".to_string(),
            participants: 93,
            progress: 100,
            prize: "Premium Cookware Set".to_string(),
            entries: 54,
            likes: 224,
            comments: 48,
        },
    ]
}

fn learning_plan_catalog() -> Vec<LearningPlan> {
    vec![
        LearningPlan {
            id: "1".to_string(),
            title: "Master Italian Cuisine".to_string(),
            description: "A comprehensive 4-week plan to learn the fundamentals of Italian cooking, from pasta making to perfecting sauces.".to_string(),
            image_url: unsplash("1498579150354-977475b7ea0b"),
            author: Author::from_name("Marco Rossi"),
            duration: "4 weeks".to_string(),
            difficulty: Difficulty::Intermediate,
            participants: 54,
            likes: 187,
            comments: 29,
        },
        LearningPlan {
            id: "2".to_string(),
            title: "Baking Fundamentals".to_string(),
            description: "Learn the science behind baking perfect bread, cakes, and pastries with this step-by-step learning plan.".to_string(),
            image_url: unsplash("1549118060-48932f6c5dfd"),
            author: Author::from_name("Emily Green"),
            duration: "3 weeks".to_string(),
            difficulty: Difficulty::Beginner,
            participants: 72,
            likes: 231,
            comments: 47,
        },
        LearningPlan {
            id: "3".to_string(),
            title: "Plant-Based Cooking Mastery".to_string(),
            description: "Transform vegetables into delicious, satisfying meals with this comprehensive plant-based cooking course.".to_string(),
            image_url: unsplash("1540420773420-3366772f4999"),
            author: Author::from_name("Alex Rivera"),
            duration: "4 weeks".to_string(),
            difficulty: Difficulty::Intermediate,
            participants: 41,
            likes: 162,
            comments: 35,
        },
    ]
}

/// In-memory [`CookbookStore`]. Reads return fresh copies of the static
/// records; writes only log their payload.
#[derive(Debug, Clone)]
pub struct MockStore {
    recipes: Vec<Recipe>,
    challenges: Vec<Challenge>,
    learning_plans: Vec<LearningPlan>,
    current_user: Profile,
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            recipes: recipe_catalog(),
            challenges: challenge_catalog(),
            learning_plans: learning_plan_catalog(),
            current_user: current_user(),
        }
    }

    /// Builds a public profile for an author known only by name.
    fn author_profile(&self, author: &Author) -> Profile {
        let recipes_count = self
            .recipes
            .iter()
            .filter(|r| r.author.id == author.id)
            .count() as u32;
        Profile {
            id: author.id.clone(),
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            bio: None,
            location: None,
            website: None,
            email: None,
            join_date: "January 2025".to_string(),
            followers_count: 0,
            following_count: 0,
            recipes_count,
        }
    }

    fn known_authors(&self) -> impl Iterator<Item = &Author> {
        self.recipes
            .iter()
            .map(|r| &r.author)
            .chain(self.learning_plans.iter().map(|p| &p.author))
    }

    fn log_write<T: serde::Serialize>(what: &str, payload: &T) {
        match serde_json::to_string(payload) {
            Ok(json) => info!(payload = %json, "{} (not persisted)", what),
            Err(e) => warn!(error = %e, "{}: payload could not be serialized", what),
        }
    }
}

impl CookbookStore for MockStore {
    fn feed(&self) -> Vec<Recipe> {
        self.recipes
            .iter()
            .filter(|r| FEED_IDS.contains(&r.id.as_str()))
            .cloned()
            .collect()
    }

    fn recipes(&self) -> Vec<Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.author.id != CURRENT_USER_ID)
            .cloned()
            .collect()
    }

    fn recipe(&self, id: &str) -> Result<Recipe> {
        self.recipes
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| ModelError::not_found("Recipe", id))
    }

    fn recipes_by_author(&self, author_id: &str) -> Vec<Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.author.id == author_id)
            .cloned()
            .collect()
    }

    fn comments(&self, recipe_id: &str) -> Vec<Comment> {
        if self.recipes.iter().all(|r| r.id != recipe_id) {
            return Vec::new();
        }
        vec![
            comment(
                "1",
                "This recipe is amazing! I made it last weekend and my family loved it. Will definitely make it again.",
                "Jane Smith",
                "2 days ago",
                5,
                false,
            ),
            comment(
                "2",
                "I substituted some ingredients and it still turned out great. Very versatile recipe!",
                "Mike Johnson",
                "3 days ago",
                3,
                true,
            ),
        ]
    }

    fn current_user(&self) -> Profile {
        self.current_user.clone()
    }

    fn profile(&self, username: Option<&str>) -> Result<Profile> {
        let Some(username) = username else {
            return Ok(self.current_user());
        };
        let slug = profile_slug(username);
        if slug == self.current_user.id {
            return Ok(self.current_user());
        }
        self.known_authors()
            .find(|a| a.id == slug)
            .map(|a| self.author_profile(a))
            .ok_or_else(|| ModelError::not_found("Profile", username))
    }

    fn challenges(&self) -> Vec<Challenge> {
        self.challenges.clone()
    }

    fn learning_plans(&self) -> Vec<LearningPlan> {
        self.learning_plans.clone()
    }

    #[instrument(skip(self, request), fields(title = %request.title))]
    fn create_recipe(&self, request: &CreateRecipeRequest) -> Result<()> {
        Self::log_write("Create recipe", request);
        Ok(())
    }

    #[instrument(skip(self, request))]
    fn update_recipe(&self, id: &str, request: &CreateRecipeRequest) -> Result<()> {
        self.recipe(id)?;
        Self::log_write("Update recipe", request);
        Ok(())
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    fn update_profile(&self, request: &UpdateProfileRequest) -> Result<()> {
        Self::log_write("Update profile", request);
        Ok(())
    }

    #[instrument(skip(self, request), fields(title = %request.title))]
    fn create_learning_plan(&self, request: &CreateLearningPlanRequest) -> Result<()> {
        Self::log_write("Create learning plan", request);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_and_explore_lists() {
        let store = MockStore::new();
        assert_eq!(store.feed().len(), 6);
        assert!(store.recipes().iter().all(|r| r.author.id != CURRENT_USER_ID));
        assert_eq!(store.recipes_by_author(CURRENT_USER_ID).len(), 3);
    }

    #[test]
    fn test_recipe_lookup() {
        let store = MockStore::new();
        let recipe = store.recipe("1").unwrap();
        assert_eq!(recipe.title, "Garlic Butter Shrimp Pasta");
        assert_eq!(recipe.author.id, "emma-wilson");
        assert_eq!(recipe.ingredients.len(), 11);
        assert!(matches!(store.recipe("999"), Err(ModelError::NotFound { .. })));
    }

    #[test]
    fn test_profile_lookup() {
        let store = MockStore::new();
        assert_eq!(store.profile(None).unwrap().id, CURRENT_USER_ID);
        assert_eq!(store.profile(Some("john-doe")).unwrap().recipes_count, 42);

        let marco = store.profile(Some("marco-rossi")).unwrap();
        assert_eq!(marco.name, "Marco Rossi");
        assert_eq!(marco.recipes_count, 1);

        assert!(store.profile(Some("nobody-here")).is_err());
    }

    #[test]
    fn test_comments_only_for_known_recipes() {
        let store = MockStore::new();
        assert_eq!(store.comments("1").len(), 2);
        assert!(store.comments("404").is_empty());
    }

    #[test]
    fn test_writes_succeed_without_changing_reads() {
        let store = MockStore::new();
        let before = store.recipes();
        let request = CreateRecipeRequest {
            title: "Test".into(),
            description: "Test desc".into(),
            cooking_time: "10 mins".into(),
            category: "breakfast".into(),
            ingredients: vec!["egg".into()],
            steps: vec!["fry".into()],
            tags: vec![],
            image_url: None,
        };
        assert!(store.create_recipe(&request).is_ok());
        assert!(store.update_recipe("1", &request).is_ok());
        assert!(store.update_recipe("nope", &request).is_err());
        assert_eq!(store.recipes(), before);
    }
}

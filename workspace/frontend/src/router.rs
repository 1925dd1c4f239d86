use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::pages::challenges::ChallengesPage;
use crate::pages::create_learning_plan::CreateLearningPlanPage;
use crate::pages::create_recipe::CreateRecipePage;
use crate::pages::edit_recipe::EditRecipePage;
use crate::pages::home::HomePage;
use crate::pages::landing::LandingPage;
use crate::pages::learning_plans::LearningPlansPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::profile::ProfilePage;
use crate::pages::profile_edit::ProfileEditPage;
use crate::pages::recipe::RecipePage;
use crate::pages::recipes::RecipesPage;
use crate::pages::signup::SignupPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/home")]
    Home,
    #[at("/recipes")]
    Recipes,
    #[at("/recipes/:id")]
    Recipe { id: String },
    #[at("/recipes/edit/:id")]
    EditRecipe { id: String },
    #[at("/create")]
    CreateRecipe,
    #[at("/profile")]
    Profile,
    #[at("/profile/edit")]
    ProfileEdit,
    #[at("/profile/:username")]
    UserProfile { username: String },
    #[at("/learning-plans")]
    LearningPlans,
    #[at("/create-learning-plan")]
    CreateLearningPlan,
    #[at("/challenges")]
    Challenges,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Profile page of an author, or the own profile for the signed-in user.
    pub fn author_profile(author_id: &str) -> Route {
        if author_id == model::CURRENT_USER_ID {
            Route::Profile
        } else {
            Route::UserProfile {
                username: author_id.to_string(),
            }
        }
    }
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Landing => {
            log::trace!("Rendering Landing page");
            html! { <LandingPage /> }
        }
        Route::Login => {
            log::trace!("Rendering Login page");
            html! { <LoginPage /> }
        }
        Route::Signup => {
            log::trace!("Rendering Signup page");
            html! { <SignupPage /> }
        }
        Route::Home => {
            log::trace!("Rendering Home page");
            html! { <Layout title="Home"><HomePage /></Layout> }
        }
        Route::Recipes => {
            log::trace!("Rendering Recipes page");
            html! { <Layout title="Explore Recipes"><RecipesPage /></Layout> }
        }
        Route::Recipe { id } => {
            log::trace!("Rendering Recipe page for ID: {}", id);
            html! { <Layout title="Recipe"><RecipePage recipe_id={id} /></Layout> }
        }
        Route::EditRecipe { id } => {
            log::trace!("Rendering Edit Recipe page for ID: {}", id);
            html! { <Layout title="Edit Recipe"><EditRecipePage recipe_id={id} /></Layout> }
        }
        Route::CreateRecipe => {
            log::trace!("Rendering Create Recipe page");
            html! { <Layout title="Create Recipe"><CreateRecipePage /></Layout> }
        }
        Route::Profile => {
            log::trace!("Rendering own Profile page");
            html! { <Layout title="Profile"><ProfilePage /></Layout> }
        }
        Route::ProfileEdit => {
            log::trace!("Rendering Profile Edit page");
            html! { <Layout title="Edit Profile"><ProfileEditPage /></Layout> }
        }
        Route::UserProfile { username } => {
            log::trace!("Rendering Profile page for: {}", username);
            html! { <Layout title="Profile"><ProfilePage username={Some(username)} /></Layout> }
        }
        Route::LearningPlans => {
            log::trace!("Rendering Learning Plans page");
            html! { <Layout title="Learning Plans"><LearningPlansPage /></Layout> }
        }
        Route::CreateLearningPlan => {
            log::trace!("Rendering Create Learning Plan page");
            html! { <Layout title="Create Learning Plan"><CreateLearningPlanPage /></Layout> }
        }
        Route::Challenges => {
            log::trace!("Rendering Challenges page");
            html! { <Layout title="Cooking Challenges"><ChallengesPage /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <NotFoundPage /> }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes() {
        assert_eq!(Route::recognize("/"), Some(Route::Landing));
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
        assert_eq!(Route::recognize("/signup"), Some(Route::Signup));
    }

    #[test]
    fn test_recipe_routes() {
        assert_eq!(Route::recognize("/recipes"), Some(Route::Recipes));
        assert_eq!(
            Route::recognize("/recipes/1"),
            Some(Route::Recipe { id: "1".into() })
        );
        assert_eq!(
            Route::recognize("/recipes/edit/13"),
            Some(Route::EditRecipe { id: "13".into() })
        );
        assert_eq!(Route::recognize("/create"), Some(Route::CreateRecipe));
    }

    #[test]
    fn test_profile_edit_wins_over_username() {
        assert_eq!(Route::recognize("/profile"), Some(Route::Profile));
        assert_eq!(Route::recognize("/profile/edit"), Some(Route::ProfileEdit));
        assert_eq!(
            Route::recognize("/profile/emma-wilson"),
            Some(Route::UserProfile {
                username: "emma-wilson".into()
            })
        );
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(Route::recognize("/nope/at/all"), Some(Route::NotFound));
    }

    #[test]
    fn test_paths_round_trip() {
        assert_eq!(Route::LearningPlans.to_path(), "/learning-plans");
        assert_eq!(Route::CreateLearningPlan.to_path(), "/create-learning-plan");
        assert_eq!(Route::Challenges.to_path(), "/challenges");
        assert_eq!(
            Route::Recipe { id: "7".into() }.to_path(),
            "/recipes/7"
        );
    }

    #[test]
    fn test_author_profile_route() {
        assert_eq!(Route::author_profile("john-doe"), Route::Profile);
        assert_eq!(
            Route::author_profile("emma-wilson"),
            Route::UserProfile {
                username: "emma-wilson".into()
            }
        );
    }
}

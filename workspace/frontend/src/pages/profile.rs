use model::entities::prelude::{Profile, Recipe};
use model::CURRENT_USER_ID;
use yew::prelude::*;

use crate::api_client::profile::get_profile;
use crate::api_client::recipe::get_recipes_by_author;
use crate::common::empty_state::EmptyState;
use crate::Route;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::{CardGrid, FetchRender};
use crate::common::store::use_store;
use crate::components::profile::ProfileHeader;
use crate::components::recipes::RecipeCard;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Profile slug; `None` shows the signed-in user.
    #[prop_or_default]
    pub username: Option<String>,
}

#[function_component(ProfilePage)]
pub fn profile_page(props: &Props) -> Html {
    let store = use_store();
    let (state, refetch) = use_fetch_with_refetch(props.username.clone(), move |username: Option<String>| {
        let store = store.clone();
        async move {
            let profile = get_profile(store.clone(), username).await?;
            let recipes = get_recipes_by_author(store, profile.id.clone()).await?;
            Ok::<_, String>((profile, recipes))
        }
    });

    let render = Callback::from(|(profile, recipes): (Profile, Vec<Recipe>)| {
        html! { <ProfileView key={profile.id.clone()} profile={profile.clone()} {recipes} /> }
    });

    html! {
        <div class="container max-w-6xl mx-auto space-y-8">
            <FetchRender<(Profile, Vec<Recipe>)>
                state={(*state).clone()}
                {render}
                on_retry={Some(Callback::from(move |_| refetch.emit(())))}
                loading_text={Some(AttrValue::from("Loading profile..."))}
                back_to={Some(Route::Home)}
            />
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileTab {
    Recipes,
    CookingPlans,
    Favorites,
}

impl ProfileTab {
    const ALL: [ProfileTab; 3] = [ProfileTab::Recipes, ProfileTab::CookingPlans, ProfileTab::Favorites];

    fn label(&self) -> &'static str {
        match self {
            ProfileTab::Recipes => "Recipes",
            ProfileTab::CookingPlans => "Cooking Plans",
            ProfileTab::Favorites => "Favorites",
        }
    }
}

#[derive(Properties, PartialEq)]
struct ProfileViewProps {
    profile: Profile,
    recipes: Vec<Recipe>,
}

#[function_component(ProfileView)]
fn profile_view(props: &ProfileViewProps) -> Html {
    let active = use_state(|| ProfileTab::Recipes);
    let is_own = props.profile.id == CURRENT_USER_ID;

    let content = match *active {
        ProfileTab::Recipes => html! {
            <CardGrid<Recipe>
                items={props.recipes.clone()}
                render_item={Callback::from(|recipe: Recipe| html! { <RecipeCard key={recipe.id.clone()} recipe={recipe.clone()} /> })}
                empty_title="No Recipes Yet"
                empty_message={Some("Recipes shared by this cook will show up here.".to_string())}
            />
        },
        ProfileTab::CookingPlans => html! {
            <EmptyState
                title="No Cooking Plans Yet"
                message={Some("Start creating cooking plans to share with others!".to_string())}
                icon="fas fa-clipboard-list"
            />
        },
        ProfileTab::Favorites => html! {
            <EmptyState
                title="No Favorites Yet"
                message={Some("When you find recipes you love, save them here!".to_string())}
                icon="far fa-heart"
            />
        },
    };

    html! {
        <>
            <ProfileHeader profile={props.profile.clone()} {is_own} />
            <div role="tablist" class="tabs tabs-bordered">
                { for ProfileTab::ALL.into_iter().map(|tab| {
                    let active = active.clone();
                    html! {
                        <a
                            role="tab"
                            class={classes!("tab", "gap-2", (*active == tab).then_some("tab-active"))}
                            onclick={Callback::from(move |_| active.set(tab))}
                        >
                            <i class="fas fa-utensils"></i>{tab.label()}
                        </a>
                    }
                }) }
            </div>
            {content}
        </>
    }
}

use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: "fas fa-book-open",
        title: "Share Your Recipes",
        description: "Upload and share your favorite recipes with detailed ingredients, instructions, and beautiful photos.",
    },
    Feature {
        icon: "fas fa-chart-line",
        title: "Track Your Progress",
        description: "Document your cooking journey with learning updates, track your improvements, and celebrate your successes.",
    },
    Feature {
        icon: "fas fa-trophy",
        title: "Join Cooking Challenges",
        description: "Participate in time-limited cooking challenges to test your skills and creativity with specific constraints.",
    },
    Feature {
        icon: "fas fa-clipboard-list",
        title: "Create Structured Plans",
        description: "Design and share comprehensive cooking plans with step-by-step guides for others to follow.",
    },
    Feature {
        icon: "fas fa-users",
        title: "Build Your Community",
        description: "Connect with fellow food enthusiasts, follow your favorite chefs, and engage with a supportive cooking community.",
    },
    Feature {
        icon: "fas fa-lightbulb",
        title: "Get Inspired",
        description: "Discover new recipes, techniques, and ingredients to expand your culinary repertoire and try new flavors.",
    },
];

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1606787366850-de6330128bfc?auto=format&q=75&fit=crop&w=600";

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <div class="min-h-screen flex flex-col bg-base-100">
            <header class="navbar border-b border-base-300 px-4">
                <div class="flex-1">
                    <Link<Route> to={Route::Landing} classes="flex items-center gap-2">
                        <i class="fas fa-utensils text-primary text-xl"></i>
                        <span class="text-xl font-semibold">{"CulinaryCraft"}</span>
                    </Link<Route>>
                </div>
                <div class="flex-none gap-2">
                    <Link<Route> to={Route::Login} classes="btn btn-ghost">{"Sign In"}</Link<Route>>
                    <Link<Route> to={Route::Signup} classes="btn btn-primary">{"Get Started"}</Link<Route>>
                </div>
            </header>

            <section class="py-20 md:py-32 bg-gradient-to-b from-base-200 to-base-100">
                <div class="container mx-auto px-4 flex flex-col lg:flex-row items-center gap-12">
                    <div class="lg:w-1/2 space-y-6">
                        <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold leading-tight">
                            {"Your Ultimate Cooking Companion"}
                        </h1>
                        <p class="text-lg md:text-xl text-base-content/70">
                            {"A social platform for food enthusiasts to share recipes, track cooking progress, \
                              and engage with a community of passionate chefs."}
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 pt-4">
                            <Link<Route> to={Route::Signup} classes="btn btn-primary btn-lg">
                                {"Create Account"}<i class="fas fa-arrow-right ml-2"></i>
                            </Link<Route>>
                            <Link<Route> to={Route::Home} classes="btn btn-outline btn-lg">{"Explore Recipes"}</Link<Route>>
                        </div>
                    </div>
                    <div class="lg:w-1/2 relative">
                        <div class="absolute -top-6 -left-6 w-full h-full rounded-box bg-primary/20"></div>
                        <img src={HERO_IMAGE} alt="Cooking" class="relative z-10 rounded-box shadow-lg" />
                    </div>
                </div>
            </section>

            <section class="py-20">
                <div class="container mx-auto px-4">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold">{"Everything You Need to Cook, Share & Learn"}</h2>
                        <p class="mt-4 text-lg text-base-content/70 max-w-2xl mx-auto">
                            {"CulinaryCraft provides all the tools you need to document your cooking journey, \
                              share your creations, and connect with a community of food enthusiasts."}
                        </p>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                        { for FEATURES.iter().map(|feature| html! {
                            <div key={feature.title} class="p-6 border border-base-300 rounded-box hover:border-primary transition-colors">
                                <i class={classes!(feature.icon, "text-4xl", "text-primary", "mb-4")}></i>
                                <h3 class="text-xl font-semibold mb-2">{feature.title}</h3>
                                <p class="text-base-content/70">{feature.description}</p>
                            </div>
                        }) }
                    </div>
                    <div class="mt-16 text-center">
                        <Link<Route> to={Route::Signup} classes="btn btn-primary btn-lg">{"Join CulinaryCraft Today"}</Link<Route>>
                    </div>
                </div>
            </section>

            <footer class="footer footer-center bg-base-200 p-10 mt-auto">
                <div>
                    <Link<Route> to={Route::Landing} classes="flex items-center gap-2">
                        <i class="fas fa-utensils text-primary text-xl"></i>
                        <span class="text-xl font-semibold">{"CulinaryCraft"}</span>
                    </Link<Route>>
                    <p class="text-base-content/70">{"Your ultimate cooking companion"}</p>
                </div>
                <nav class="grid grid-flow-col gap-4">
                    <Link<Route> to={Route::Recipes} classes="link link-hover">{"Recipes"}</Link<Route>>
                    <Link<Route> to={Route::Challenges} classes="link link-hover">{"Challenges"}</Link<Route>>
                    <Link<Route> to={Route::LearningPlans} classes="link link-hover">{"Learning Plans"}</Link<Route>>
                </nav>
                <p class="text-base-content/60">{format!("\u{a9} {} CulinaryCraft. All rights reserved.", year)}</p>
            </footer>
        </div>
    }
}

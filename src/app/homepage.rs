use leptos::prelude::*;
use leptos_meta::Title;

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_session_storage;

use super::contact::Contact;
use super::header::LOGO_PATH;
use super::hero::Hero;
use super::icons::{Glyph, Icon};
use super::projects::Projects;
use super::skills::Skills;

/// Session storage flag set after the intro has played once.
#[cfg(feature = "hydrate")]
const VISITED_KEY: &str = "hasVisitedHomepage";
/// The overlay starts fading out after this long.
#[cfg(feature = "hydrate")]
const INTRO_MS: u64 = 2000;
/// And is removed from the DOM once the fade is done.
#[cfg(feature = "hydrate")]
const INTRO_UNMOUNT_MS: u64 = 2800;

const EXPERTISE: [(Glyph, &str, &str); 8] = [
    (
        Glyph::Palette,
        "UI/UX Design",
        "Create intuitive, elegant interfaces optimized for usability and engagement.",
    ),
    (
        Glyph::Code,
        "Front-End Development",
        "Build robust, responsive web applications using HTML, CSS, JavaScript, React, and WordPress.",
    ),
    (
        Glyph::Accessibility,
        "Accessibility & SEO",
        "Ensure websites are accessible, inclusive, and optimized for search engines.",
    ),
    (
        Glyph::Zap,
        "Performance & Scalability",
        "Write clean, maintainable code and implement best practices for fast-loading, scalable websites.",
    ),
    (
        Glyph::Users,
        "Collaboration & Teamwork",
        "Work effectively within cross-functional teams to deliver projects on time and to specification.",
    ),
    (
        Glyph::Layers,
        "Design Systems & Prototyping",
        "Build consistent, reusable UI components and interactive prototypes in Figma or similar tools.",
    ),
    (
        Glyph::Bot,
        "AI-Augmented Development",
        "Leverage AI tools to rapidly build, iterate, and ship production-ready applications.",
    ),
    (
        Glyph::Network,
        "Product Architecture Thinking",
        "Translate business goals and user needs into practical, scalable product solutions.",
    ),
];

/// Soft background glows behind the home sections.
const AMBIENT_BLOBS: [&str; 4] = [
    "top: 0; right: -5%; width: 600px; height: 600px; background: radial-gradient(circle, rgba(167, 139, 250, 0.15) 0%, transparent 70%); animation-duration: 8s",
    "top: 1200px; left: -10%; width: 500px; height: 500px; background: radial-gradient(circle, rgba(139, 92, 246, 0.12) 0%, transparent 70%); animation-duration: 10s; animation-delay: 1s",
    "top: 2400px; right: 0; width: 450px; height: 450px; background: radial-gradient(circle, rgba(34, 211, 238, 0.08) 0%, transparent 70%); animation-duration: 9s; animation-delay: 2s",
    "bottom: 200px; left: -5%; width: 400px; height: 400px; background: radial-gradient(circle, rgba(167, 139, 250, 0.1) 0%, transparent 70%); animation-duration: 11s; animation-delay: 3s",
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Front-End Developer & Designer" />
        <div class="relative">
            <LoadingScreen />
            {AMBIENT_BLOBS
                .into_iter()
                .map(|style| view! { <div class="ambient-blob" style=style aria-hidden="true" /> })
                .collect_view()}
            <Hero />
            <Expertise />
            <Projects />
            <Skills />
            <Contact />
        </div>
    }
}

/// Full-screen intro shown on the first home page visit of a browser session.
#[component]
fn LoadingScreen() -> impl IntoView {
    let (visible, set_visible) = signal(true);
    let (mounted, set_mounted) = signal(true);

    #[cfg(feature = "hydrate")]
    {
        use std::time::Duration;

        let (visited, set_visited, _) =
            use_session_storage::<bool, FromToStringCodec>(VISITED_KEY);
        Effect::watch(
            || (),
            move |_, _, _| {
                if visited.get_untracked() {
                    set_visible.set(false);
                    set_mounted.set(false);
                    return;
                }
                set_visited.set(true);
                set_timeout(
                    move || {
                        set_visible.try_set(false);
                    },
                    Duration::from_millis(INTRO_MS),
                );
                set_timeout(
                    move || {
                        set_mounted.try_set(false);
                    },
                    Duration::from_millis(INTRO_UNMOUNT_MS),
                );
            },
            true,
        );
    }

    view! {
        <Show when=move || mounted.get()>
            <div class=move || {
                if visible.get() {
                    "fixed inset-0 z-[9999] flex items-center justify-center bg-background transition-opacity duration-500 opacity-100"
                } else {
                    "fixed inset-0 z-[9999] flex items-center justify-center bg-background transition-opacity duration-500 opacity-0 pointer-events-none"
                }
            }>
                <div class="absolute inset-0 overflow-hidden">
                    <div class="absolute top-1/4 right-1/4 w-96 h-96 rounded-full bg-blue/20 blur-3xl animate-drift" />
                    <div class="absolute bottom-1/4 left-1/4 w-80 h-80 rounded-full bg-blue/10 blur-3xl animate-drift-slow" />
                </div>
                <div class="relative z-10 flex flex-col items-center">
                    <svg
                        viewBox="0 0 40 40"
                        fill="none"
                        xmlns="http://www.w3.org/2000/svg"
                        class="w-24 h-24 text-blue mb-6"
                    >
                        <path
                            d=LOGO_PATH
                            stroke="currentColor"
                            stroke-width="1.5"
                            fill="none"
                            class="intro-stroke"
                        />
                        <path d=LOGO_PATH fill="currentColor" class="intro-fill" />
                        <g class="intro-brackets">
                            <path
                                d="M17 16L14 20L17 24"
                                stroke="white"
                                stroke-width="1"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            />
                            <path
                                d="M23 16L26 20L23 24"
                                stroke="white"
                                stroke-width="1"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            />
                            <path d="M21 15L19 25" stroke="white" stroke-width="1" stroke-linecap="round" />
                        </g>
                    </svg>
                    <h1 class="text-2xl font-bold text-foreground intro-name">"Quinton Nistico"</h1>
                    <div class="w-48 h-1 bg-card-border rounded-full mt-6 overflow-hidden">
                        <div class="h-full bg-blue rounded-full intro-bar" />
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn Expertise() -> impl IntoView {
    view! {
        <section class="py-20 expertise-container">
            <div class="max-w-7xl mx-auto px-6">
                <div class="text-center mb-12">
                    <h2 class="text-3xl md:text-4xl font-black text-foreground mb-4">
                        <span class="text-blue">"My"</span>
                        " Expertise"
                    </h2>
                    <p class="text-text max-w-2xl mx-auto">
                        "I specialize in front-end development, UI/UX design, and responsive web applications. My work combines creative design with clean, maintainable code to deliver high-quality, accessible digital experiences."
                    </p>
                </div>
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-x-8 gap-y-4">
                    {EXPERTISE
                        .into_iter()
                        .map(|(glyph, title, description)| {
                            view! {
                                <div class="group py-6">
                                    <div class="w-12 h-12 rounded-lg bg-blue/10 flex items-center justify-center mb-4 group-hover:bg-blue/20 group-hover:rotate-6 transition-all duration-300">
                                        <Icon glyph class="w-6 h-6 text-blue" />
                                    </div>
                                    <h3 class="text-lg font-semibold text-foreground mb-2 group-hover:text-blue transition-colors duration-300">
                                        {title}
                                    </h3>
                                    <p class="text-sm text-text leading-relaxed">{description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

use leptos::{either::Either, prelude::*};
use leptos_router::components::A;
use leptos_use::use_window_scroll;

use super::icons::{Glyph, Icon};
use super::theme::ThemeToggle;

/// Vertical scroll (px) after which the header switches to its solid style.
const SCROLLED_AFTER: f64 = 45.0;
/// Viewport width (px) from which the desktop nav replaces the mobile menu.
#[cfg(feature = "hydrate")]
const DESKTOP_MIN_WIDTH: f64 = 1024.0;

pub(super) const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/#projects", "Projects"),
    ("/about", "About"),
    ("/#contact", "Contact"),
];

pub(super) const LOGO_PATH: &str = "M20 3C10.611 3 3 10.611 3 20C3 29.389 10.611 37 20 37C24 37 27.6 35.7 30.5 33.4L33.5 37L38 33L35 29.5C36.9 26.8 38 23.5 38 20C38 10.611 30.389 3 20 3ZM20 32C13.373 32 8 26.627 8 20C8 13.373 13.373 8 20 8C26.627 8 32 13.373 32 20C32 26.627 26.627 32 20 32Z";

#[component]
pub fn Logo(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <svg viewBox="0 0 40 40" fill="none" xmlns="http://www.w3.org/2000/svg" class=class>
            <path d=LOGO_PATH fill="currentColor" />
            <path
                d="M17 16L14 20L17 24"
                stroke="currentColor"
                stroke-width="1"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
            <path
                d="M23 16L26 20L23 24"
                stroke="currentColor"
                stroke-width="1"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
            <path d="M21 15L19 25" stroke="currentColor" stroke-width="1" stroke-linecap="round" />
        </svg>
    }
}

#[cfg(feature = "hydrate")]
fn lock_body_scroll(locked: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let res = if locked {
        body.style().set_property("overflow", "hidden")
    } else {
        body.style().remove_property("overflow").map(|_| ())
    };
    if let Err(e) = res {
        log::warn!("could not toggle body scroll: {e:?}");
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| scroll_y.get() > SCROLLED_AFTER);
    let (menu_open, set_menu_open) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        let resize = window_event_listener(leptos::ev::resize, move |_| {
            let wide = window()
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .is_some_and(|w| w >= DESKTOP_MIN_WIDTH);
            if wide {
                set_menu_open.set(false);
            }
        });
        Effect::new(move |_| lock_body_scroll(menu_open.get()));
        on_cleanup(move || {
            resize.remove();
            lock_body_scroll(false);
        });
    }

    let close_menu = move |_: leptos::ev::MouseEvent| set_menu_open.set(false);

    view! {
        <header class=move || {
            if scrolled.get() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 scrolled bg-nav-bg backdrop-blur-md shadow-lg py-3"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent py-5"
            }
        }>
            <div class="max-w-7xl mx-auto px-6 flex items-center justify-between">
                <A href="/" attr:class="logo-container flex items-center gap-2" attr:aria-label="Home">
                    <Logo class="logo-icon w-9 h-9 flex-shrink-0 text-blue" />
                    <div class="logo-text flex flex-col leading-tight">
                        <span class="logo-name text-base font-bold tracking-tight text-foreground">
                            "Quinton Nistico"
                        </span>
                        <span class="logo-tagline text-xs font-medium tracking-wide text-blue">
                            "Web Development"
                        </span>
                    </div>
                </A>

                <nav class="hidden lg:flex items-center gap-8">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <A
                                    href=href
                                    attr:class="relative text-sm font-medium text-text hover:text-foreground transition-colors duration-300 group"
                                >
                                    {label}
                                    <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-blue transition-all duration-300 group-hover:w-full" />
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="flex items-center gap-4">
                    <ThemeToggle />
                    <button
                        class="lg:hidden p-2 text-foreground"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                    >
                        {move || {
                            if menu_open.get() {
                                Either::Left(view! { <Icon glyph=Glyph::Close class="h-6 w-6" /> })
                            } else {
                                Either::Right(view! { <Icon glyph=Glyph::Menu class="h-6 w-6" /> })
                            }
                        }}
                    </button>
                </div>
            </div>
        </header>

        <Show when=move || menu_open.get()>
            <div class="fixed inset-0 z-40 lg:hidden">
                <div
                    class="absolute inset-0 bg-background/95 backdrop-blur-md"
                    on:click=close_menu
                />
                <nav class="absolute inset-0 flex flex-col items-center justify-center gap-8">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <A
                                    href=href
                                    on:click=close_menu
                                    attr:class="text-2xl font-medium text-foreground hover:text-blue transition-colors duration-300"
                                >
                                    {label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </Show>
    }
}

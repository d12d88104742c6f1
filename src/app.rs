mod about;
#[cfg(feature = "hydrate")]
mod captcha;
mod contact;
mod footer;
mod header;
mod hero;
mod homepage;
mod icons;
mod projects;
mod skills;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutPage;
use footer::Footer;
use header::Header;
use homepage::HomePage;
pub use theme::{use_theme, ThemeProvider, ThemeToggle};

use crate::geometry::Rect;
use crate::theme::bootstrap_script;

pub const SITE_NAME: &str = "Quinton Nistico";

/// Viewport box of a mounted element.
fn client_rect(el: &web_sys::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                // runs before first paint so a stored light theme never flashes dark
                <script inner_html=bootstrap_script() />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta
                    name="description"
                    content="Front-End Web Developer & Designer with 4+ years of professional agency experience, specializing in responsive, accessible web applications."
                />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{SITE_NAME} | {title}") />
        <Meta property="og:site_name" content="Quinton Nistico Portfolio" />
        <Meta property="og:type" content="website" />

        <ThemeProvider>
            <Router>
                <Header />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/about") view=AboutPage />
                    </Routes>
                </main>
                <Footer />
            </Router>
        </ThemeProvider>
    }
}

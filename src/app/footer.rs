use leptos::prelude::*;
use leptos_router::components::A;

use super::header::NAV_LINKS;
use super::icons::{Glyph, Icon};

/// Baked in by build.rs.
const BUILD_YEAR: &str = env!("BUILD_YEAR");

pub(super) const EMAIL: &str = "quintonnistico@gmail.com";
pub(super) const PHONE_DISPLAY: &str = "(610)-389-8465";
pub(super) const PHONE_HREF: &str = "tel:6103898465";

const SOCIAL_LINKS: [(Glyph, &str, &str); 2] = [
    (Glyph::Github, "GitHub", "https://github.com/qnistico"),
    (Glyph::Linkedin, "LinkedIn", "https://linkedin.com/in/quintonnistico"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let contact_info = [
        (Glyph::Phone, PHONE_DISPLAY.to_string(), PHONE_HREF.to_string()),
        (Glyph::Mail, EMAIL.to_string(), format!("mailto:{EMAIL}")),
    ];

    view! {
        <footer class="bg-card-bg border-t border-card-border mt-20">
            <div class="max-w-[1312px] mx-auto px-6 py-12">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-10">
                    <div>
                        <h3 class="text-lg font-semibold text-foreground mb-4">"Quick Links"</h3>
                        <ul class="space-y-2">
                            {NAV_LINKS
                                .into_iter()
                                .map(|(href, label)| {
                                    view! {
                                        <li>
                                            <A
                                                href=href
                                                attr:class="text-text hover:text-blue transition-colors duration-300"
                                            >
                                                {label}
                                            </A>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h3 class="text-lg font-semibold text-foreground mb-4">"Contact"</h3>
                        <ul class="space-y-3">
                            {contact_info
                                .into_iter()
                                .map(|(glyph, label, href)| {
                                    view! {
                                        <li>
                                            <a
                                                href=href
                                                class="flex items-center gap-3 text-text hover:text-blue transition-colors duration-300"
                                            >
                                                <span class="flex h-8 w-8 items-center justify-center rounded-full bg-blue/10">
                                                    <Icon glyph class="h-4 w-4 text-blue" />
                                                </span>
                                                {label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h3 class="text-lg font-semibold text-foreground mb-4">"Connect"</h3>
                        <div class="flex gap-3">
                            {SOCIAL_LINKS
                                .into_iter()
                                .map(|(glyph, label, href)| {
                                    view! {
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=label
                                            class="flex h-10 w-10 items-center justify-center rounded-full bg-blue/10 text-blue hover:bg-blue hover:text-white hover:scale-110 active:scale-95 transition-all duration-300"
                                        >
                                            <Icon glyph class="h-5 w-5" />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="mt-10 pt-6 border-t border-card-border">
                    <div class="flex flex-col md:flex-row justify-between items-center gap-4 text-sm text-text">
                        <p>"© " {BUILD_YEAR} " Quinton Nistico. All rights reserved."</p>
                        <p>
                            "Built with " <span class="text-blue">"Rust"</span> ", "
                            <span class="text-blue">"Leptos"</span> " & "
                            <span class="text-blue">"Axum"</span>
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}

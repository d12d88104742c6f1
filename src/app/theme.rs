use leptos::{either::Either, prelude::*};

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::theme::Theme;
#[cfg(feature = "hydrate")]
use crate::theme::{DARK_CLASS, STORAGE_KEY};

use super::icons::{Glyph, Icon};

/// Read side of the theme, shared with any component.
#[derive(Clone, Copy)]
struct ThemeReader(Signal<Theme>);

/// Write side. Only `ThemeToggle` in this module can reach it.
#[derive(Clone, Copy)]
struct ThemeWriter(WriteSignal<Theme>);

pub fn use_theme() -> Signal<Theme> {
    expect_context::<ThemeReader>().0
}

#[cfg(feature = "hydrate")]
fn apply_root_class(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    let res = if theme.is_dark() {
        classes.add_1(DARK_CLASS)
    } else {
        classes.remove_1(DARK_CLASS)
    };
    if let Err(e) = res {
        log::warn!("could not update theme class: {e:?}");
    }
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let (theme, set_theme) = signal(Theme::default());

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) = use_local_storage::<Theme, FromToStringCodec>(STORAGE_KEY);
        Effect::watch(
            || (),
            move |_, _, _| set_theme.set(stored.get_untracked()),
            true,
        );
        Effect::watch(
            move || theme.get(),
            move |t, _, _| {
                set_stored.set(*t);
                apply_root_class(*t);
            },
            false,
        );
    }

    provide_context(ThemeReader(theme.into()));
    provide_context(ThemeWriter(set_theme));
    children()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ThemeWriter(set_theme) = expect_context::<ThemeWriter>();
    let theme = use_theme();
    let is_dark = move || theme.get().is_dark();

    view! {
        <button
            on:click=move |_| set_theme.update(|t| *t = t.toggled())
            class="relative flex items-center gap-2 rounded-full bg-card-bg border border-card-border px-3 py-1.5 text-sm font-medium transition-all duration-300 hover:shadow-lg"
            aria-label=move || format!("Switch to {} mode", theme.get().toggled())
        >
            <span class=move || {
                if is_dark() {
                    "text-xs uppercase tracking-wide opacity-50"
                } else {
                    "text-xs uppercase tracking-wide"
                }
            }>"Light"</span>
            <span class="relative h-6 w-12 rounded-full bg-foreground/10">
                <span
                    class="absolute top-1 h-4 w-4 rounded-full bg-blue flex items-center justify-center transition-all duration-300"
                    style:left=move || if is_dark() { "calc(100% - 20px)" } else { "4px" }
                >
                    {move || {
                        if is_dark() {
                            Either::Left(view! { <Icon glyph=Glyph::Moon class="w-2.5 h-2.5 text-white" /> })
                        } else {
                            Either::Right(view! { <Icon glyph=Glyph::Sun class="w-2.5 h-2.5 text-white" /> })
                        }
                    }}
                </span>
            </span>
            <span class=move || {
                if is_dark() {
                    "text-xs uppercase tracking-wide"
                } else {
                    "text-xs uppercase tracking-wide opacity-50"
                }
            }>"Dark"</span>
        </button>
    }
}

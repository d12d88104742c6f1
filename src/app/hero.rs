use leptos::{html, prelude::*};
use leptos_use::use_window_scroll;

use crate::geometry::{interpolate, magnetic_offset, Point};
use crate::typewriter::{Pace, Typewriter};
#[cfg(feature = "hydrate")]
use crate::typewriter::Phase;

use super::client_rect;
use super::icons::{Glyph, Icon};
use super::theme::use_theme;

const ROLES: [&str; 3] = ["web developer.", "web designer.", "UI/UX specialist."];

/// Fraction of the pointer's distance from the button center that the button
/// follows.
const MAGNET_STRENGTH: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            Self::Primary => "bg-button-bg text-white hover:bg-button-hover shadow-lg hover:shadow-xl hover:shadow-shadow-hover",
            Self::Secondary => "bg-card-bg border border-blue/50 text-foreground hover:border-blue hover:text-blue",
            Self::Ghost => "text-foreground hover:text-blue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            Self::Sm => "px-4 py-2 text-sm",
            Self::Md => "px-6 py-3 text-base",
            Self::Lg => "px-8 py-4 text-lg",
        }
    }
}

/// Link styled as a pill button that drifts toward the pointer while hovered.
#[component]
pub fn MagneticButton(
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(default = true)] show_arrow: bool,
    #[prop(optional, into)] target: Option<String>,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::A>::new();
    let (offset, set_offset) = signal(Point { x: 0.0, y: 0.0 });
    let external = target.as_deref() == Some("_blank");

    let class = format!(
        "relative inline-flex items-center justify-center gap-2 font-medium rounded-full transition-all duration-300 overflow-hidden group active:scale-[0.98] {} {}",
        variant.class(),
        size.class()
    );

    view! {
        <a
            node_ref=node
            href=href
            target=target
            rel=external.then_some("noopener noreferrer")
            class=class
            style:transform=move || {
                let p = offset.get();
                format!("translate({:.1}px, {:.1}px)", p.x, p.y)
            }
            on:pointermove=move |ev| {
                let Some(el) = node.get_untracked() else {
                    return;
                };
                let pointer = Point {
                    x: ev.client_x() as f64,
                    y: ev.client_y() as f64,
                };
                set_offset.set(magnetic_offset(pointer, client_rect(&el), MAGNET_STRENGTH));
            }
            on:pointerleave=move |_| set_offset.set(Point { x: 0.0, y: 0.0 })
        >
            <span class="relative z-10">{children()}</span>
            {show_arrow
                .then(|| {
                    view! {
                        <span class="relative z-10 opacity-70 transition-all duration-200 group-hover:translate-x-1 group-hover:opacity-100">
                            <Icon glyph=Glyph::ChevronRight class="h-4 w-4" />
                        </span>
                    }
                })}
            <div
                class="absolute inset-0 bg-gradient-to-r from-blue/20 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300"
                style="border-radius: inherit"
            />
        </a>
    }
}

/// Cycles through `words`, typing and deleting one character per tick.
#[component]
pub fn TypewriterText(
    words: &'static [&'static str],
    #[prop(optional)] pace: Option<Pace>,
) -> impl IntoView {
    let machine = RwSignal::new(Typewriter::new(
        words.iter().copied(),
        pace.unwrap_or_default(),
    ));

    #[cfg(feature = "hydrate")]
    {
        use std::time::Duration;

        let pending = StoredValue::new(None::<TimeoutHandle>);
        Effect::new(move |_| {
            let (delay, typing) = machine.with(|t| (t.delay_ms(), t.phase() == Phase::Typing));
            let Some(delay) = delay else {
                return;
            };
            // typing gets a little human unevenness
            let jitter = if typing {
                (js_sys::Math::random() * 50.0) as u64
            } else {
                0
            };
            match set_timeout_with_handle(
                move || {
                    machine.try_update(|t| t.advance());
                },
                Duration::from_millis(delay + jitter),
            ) {
                Ok(handle) => pending.set_value(Some(handle)),
                Err(e) => log::warn!("could not schedule typewriter tick: {e:?}"),
            }
        });
        on_cleanup(move || {
            if let Some(handle) = pending.get_value() {
                handle.clear();
            }
        });
    }

    view! {
        <span>
            {move || machine.with(|t| t.text())}
            <span class="inline-block w-[3px] h-[1em] bg-foreground ml-1 align-middle animate-blink" />
        </span>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let (_, scroll_y) = use_window_scroll();
    let theme = use_theme();

    // 0.0 with the hero's top at the viewport top, 1.0 once it has scrolled out
    let progress = Memo::new(move |_| {
        let y = scroll_y.get();
        let height = section
            .get()
            .map(|s| s.offset_height() as f64)
            .unwrap_or_default();
        if height > 0.0 {
            y / height
        } else {
            0.0
        }
    });

    let backdrop_style = move || {
        format!(
            "transform: translateY({:.1}px)",
            interpolate(progress.get(), (0.0, 1.0), (0.0, 100.0))
        )
    };
    let content_style = move || {
        let p = progress.get();
        format!(
            "opacity: {:.3}; transform: scale({:.3})",
            interpolate(p, (0.0, 0.5), (1.0, 0.0)),
            interpolate(p, (0.0, 0.5), (1.0, 0.9))
        )
    };
    let portrait_class = move |dark_image: bool| {
        if theme.get().is_dark() == dark_image {
            "absolute inset-0 w-full h-full object-contain transition-opacity duration-300 opacity-100"
        } else {
            "absolute inset-0 w-full h-full object-contain transition-opacity duration-300 opacity-0"
        }
    };

    view! {
        <section
            node_ref=section
            class="relative min-h-screen flex items-center justify-center overflow-hidden pt-20"
        >
            <div class="absolute inset-0 z-0" style=backdrop_style>
                <div class="absolute top-1/4 right-1/4 w-96 h-96 rounded-full bg-gradient-to-r from-blue/20 to-blue/5 blur-3xl animate-drift" />
                <div class="absolute bottom-1/4 left-1/4 w-80 h-80 rounded-full bg-gradient-to-r from-blue/10 to-transparent blur-3xl animate-drift-slow" />
            </div>

            <div class="relative z-10 max-w-7xl mx-auto px-6 py-20" style=content_style>
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="order-2 lg:order-1">
                        <h1 class="text-4xl md:text-5xl lg:text-6xl font-black text-foreground leading-tight mb-4 animate-rise">
                            "Hi, I'm Quinton"
                        </h1>
                        <p class="text-xl md:text-2xl text-foreground mb-6 animate-rise">
                            "I am a "
                            <span class="text-blue font-semibold">
                                <TypewriterText words=&ROLES />
                            </span>
                        </p>
                        <p class="text-lg text-text mb-8 max-w-xl animate-rise">
                            "Front-End Web Developer & Designer with 4+ years of professional agency experience, specializing in responsive, accessible web applications. I build high-quality digital experiences that combine creative design with clean, maintainable code."
                        </p>
                        <div class="flex flex-wrap gap-4 animate-rise">
                            <MagneticButton href="#projects" size=ButtonSize::Lg>
                                "View My Work"
                            </MagneticButton>
                            <MagneticButton
                                href="#contact"
                                variant=ButtonVariant::Secondary
                                size=ButtonSize::Lg
                            >
                                "Contact Me"
                            </MagneticButton>
                        </div>
                    </div>

                    <div class="order-1 lg:order-2 flex justify-center">
                        <div class="relative animate-float">
                            <div class="absolute inset-0 bg-blue/20 rounded-full blur-3xl scale-90" />
                            <div class="relative w-64 h-64 md:w-80 md:h-80 lg:w-96 lg:h-96">
                                <img
                                    src="/images/portraitDark.webp"
                                    alt="Quinton Nistico"
                                    class=move || portrait_class(true)
                                />
                                <img
                                    src="/images/portraitLight.webp"
                                    alt="Quinton Nistico"
                                    class=move || portrait_class(false)
                                />
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2">
                <div class="w-6 h-10 rounded-full border-2 border-text/30 flex justify-center pt-2 animate-bounce">
                    <div class="w-1.5 h-1.5 rounded-full bg-blue" />
                </div>
            </div>
        </section>
    }
}

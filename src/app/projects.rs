use leptos::{html, prelude::*};

use crate::carousel::{Carousel, SnapTarget};
use crate::catalog::{Project, ProjectFilter};
use crate::geometry::{tilt_for_pointer, Point, Tilt};

use super::client_rect;
use super::icons::{Glyph, Icon};

/// Must match the `gap-6` between cards.
const CARD_GAP_PX: f64 = 24.0;
const TILT_MAX_DEG: f64 = 10.0;

#[component]
pub fn Projects() -> impl IntoView {
    let (filter, set_filter) = signal(ProjectFilter::default());
    let projects = Memo::new(move |_| filter.get().projects());

    view! {
        <section id="projects" class="py-20 px-6">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-3xl md:text-4xl font-black text-foreground mb-4">
                        <span class="text-blue">"Featured"</span>
                        " Projects"
                    </h2>
                    <p class="text-text max-w-2xl mx-auto mb-8">
                        "A selection of my work across personal projects and professional agency work. Each project showcases my ability to create high-quality, user-focused digital experiences."
                    </p>
                    <div class="flex flex-wrap justify-center gap-3">
                        {ProjectFilter::ALL
                            .into_iter()
                            .map(|f| {
                                view! {
                                    <button
                                        on:click=move |_| set_filter.set(f)
                                        aria-pressed=move || (filter.get() == f).to_string()
                                        class=move || {
                                            if filter.get() == f {
                                                "px-5 py-2 rounded-full text-sm font-medium transition-all duration-300 hover:scale-105 active:scale-95 bg-blue text-white shadow-lg"
                                            } else {
                                                "px-5 py-2 rounded-full text-sm font-medium transition-all duration-300 hover:scale-105 active:scale-95 bg-card-bg border border-card-border text-text hover:border-blue hover:text-blue"
                                            }
                                        }
                                    >
                                        {f.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <Show when=move || filter.get().shows_agency_note()>
                    <div class="mb-8 p-4 rounded-lg bg-blue/5 border border-blue/20 text-center">
                        <p class="text-sm text-text">
                            <span class="text-blue font-semibold">"Note:"</span>
                            " Agency projects are the property of "
                            <a
                                href="https://www.insivia.com/"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-blue hover:underline"
                            >
                                "Insivia"
                            </a>
                            ". These represent a sample of the many websites I contributed to in this capacity."
                        </p>
                    </div>
                </Show>

                <ProjectCarousel projects=projects.into() />
            </div>
        </section>
    }
}

/// Distance between the left edges of two neighbouring cards.
fn measure_pitch(track: &web_sys::HtmlElement) -> f64 {
    track
        .first_element_child()
        .map(|card| card.get_bounding_client_rect().width() + CARD_GAP_PX)
        .unwrap_or_default()
}

fn scroll_track(track: &web_sys::HtmlElement, target: SnapTarget) {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_left(target.offset);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    track.scroll_to_with_scroll_to_options(&opts);
}

/// Horizontally scrolling card strip with drag-to-scroll, snap on release,
/// arrow buttons and one dot per card.
#[component]
fn ProjectCarousel(projects: Signal<Vec<Project>>) -> impl IntoView {
    let track = NodeRef::<html::Div>::new();
    let carousel = StoredValue::new(Carousel::new(0, 0.0));
    let (active, set_active) = signal(0usize);
    let (dragging, set_dragging) = signal(false);
    let count = move || projects.with(Vec::len);

    // a new card list starts over at the first card
    Effect::new(move |_| {
        let n = projects.with(Vec::len);
        let Some(el) = track.get() else {
            return;
        };
        let pitch = measure_pitch(&el);
        carousel.update_value(|c| {
            c.set_layout(n, pitch);
            c.go_to(0);
        });
        el.set_scroll_left(0);
        set_active.set(0);
    });

    let jump = move |target: Option<SnapTarget>| {
        let Some(target) = target else {
            return;
        };
        set_active.set(target.index);
        if let Some(el) = track.get_untracked() {
            scroll_track(&el, target);
        }
    };

    // Move and release are tracked on the window so a drag that leaves the
    // strip, or the whole window, still ends. They live only for one drag.
    #[cfg(feature = "hydrate")]
    let start_drag = {
        use leptos::ev;

        let drag_listeners = StoredValue::new_local(Vec::<WindowListenerHandle>::new());
        let detach = move || {
            drag_listeners.try_update_value(|handles| {
                handles.drain(..).for_each(WindowListenerHandle::remove)
            });
        };

        let release = move || {
            detach();
            set_dragging.set(false);
            let Some(el) = track.get_untracked() else {
                return;
            };
            let offset = el.scroll_left() as f64;
            jump(carousel.try_update_value(|c| c.pointer_up(offset)).flatten());
        };

        let resizes = window_event_listener(ev::resize, move |_| {
            let Some(el) = track.get_untracked() else {
                return;
            };
            let pitch = measure_pitch(&el);
            let target = carousel.try_update_value(|c| {
                let index = c.active_index();
                c.set_layout(c.card_count(), pitch);
                c.go_to(index)
            });
            jump(target);
        });
        on_cleanup(move || {
            resizes.remove();
            detach();
        });

        move || {
            detach();
            let moves = window_event_listener(ev::pointermove, move |ev| {
                let x = ev.client_x() as f64;
                let Some(offset) = carousel.try_update_value(|c| c.pointer_move(x)).flatten()
                else {
                    return;
                };
                ev.prevent_default();
                if let Some(el) = track.get_untracked() {
                    el.set_scroll_left(offset.round() as i32);
                }
            });
            let ups = window_event_listener(ev::pointerup, move |_| release());
            let cancels = window_event_listener(ev::pointercancel, move |_| release());
            drag_listeners.set_value(vec![moves, ups, cancels]);
        }
    };

    view! {
        <div class="relative">
            <div
                node_ref=track
                class=move || {
                    // mandatory snapping would fight the offsets a drag writes
                    if dragging.get() {
                        "flex gap-6 overflow-x-auto pb-4 select-none no-scrollbar cursor-grabbing"
                    } else {
                        "flex gap-6 overflow-x-auto pb-4 select-none no-scrollbar cursor-grab snap-x snap-mandatory"
                    }
                }
                on:scroll=move |_| {
                    let Some(el) = track.get_untracked() else {
                        return;
                    };
                    let offset = el.scroll_left() as f64;
                    let changed = carousel.try_update_value(|c| c.on_scroll(offset)).flatten();
                    if let Some(index) = changed {
                        set_active.set(index);
                    }
                }
                on:pointerdown=move |ev| {
                    // touch and pen keep native scrolling
                    if ev.pointer_type() != "mouse" || ev.button() != 0 {
                        return;
                    }
                    let Some(el) = track.get_untracked() else {
                        return;
                    };
                    let offset = el.scroll_left() as f64;
                    carousel.update_value(|c| c.pointer_down(ev.client_x() as f64, offset));
                    set_dragging.set(true);
                    #[cfg(feature = "hydrate")]
                    start_drag();
                }
                on:click=move |ev| {
                    if carousel.try_update_value(|c| c.blocks_activation()).unwrap_or(false) {
                        ev.prevent_default();
                        ev.stop_propagation();
                    }
                }
                on:dragstart=|ev| ev.prevent_default()
            >
                <For
                    each=move || projects.get()
                    key=|project| project.id
                    children=move |project| view! { <ProjectCard project /> }
                />
            </div>

            <div class="flex items-center justify-center gap-4 mt-6">
                <button
                    class="p-2 rounded-full bg-card-bg border border-card-border text-foreground hover:border-blue hover:text-blue transition-all duration-300 disabled:opacity-30 disabled:pointer-events-none"
                    aria-label="Previous project"
                    disabled=move || active.get() == 0
                    on:click=move |_| jump(carousel.try_update_value(Carousel::prev).flatten())
                >
                    <Icon glyph=Glyph::ChevronLeft class="h-5 w-5" />
                </button>
                <div class="flex gap-2">
                    {move || {
                        (0..count())
                            .map(|i| {
                                view! {
                                    <button
                                        aria-label=format!("Go to project {}", i + 1)
                                        class=move || {
                                            if active.get() == i {
                                                "h-2 w-6 rounded-full bg-blue transition-all duration-300"
                                            } else {
                                                "h-2 w-2 rounded-full bg-card-border hover:bg-blue/50 transition-all duration-300"
                                            }
                                        }
                                        on:click=move |_| {
                                            jump(carousel.try_update_value(|c| c.go_to(i)))
                                        }
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <button
                    class="p-2 rounded-full bg-card-bg border border-card-border text-foreground hover:border-blue hover:text-blue transition-all duration-300 disabled:opacity-30 disabled:pointer-events-none"
                    aria-label="Next project"
                    disabled=move || active.get() + 1 >= count()
                    on:click=move |_| jump(carousel.try_update_value(Carousel::next).flatten())
                >
                    <Icon glyph=Glyph::ChevronRight class="h-5 w-5" />
                </button>
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let card = NodeRef::<html::Div>::new();
    let (tilt, set_tilt) = signal(Tilt::default());

    view! {
        <div
            node_ref=card
            class="group flex-none snap-start w-[85%] sm:w-[calc(50%-12px)] lg:w-[calc(33.333%-16px)] transition-transform duration-200 ease-out"
            style:transform=move || {
                let t = tilt.get();
                format!("perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg)", t.rotate_x, t.rotate_y)
            }
            on:pointermove=move |ev| {
                let Some(el) = card.get_untracked() else {
                    return;
                };
                let pointer = Point {
                    x: ev.client_x() as f64,
                    y: ev.client_y() as f64,
                };
                set_tilt.set(tilt_for_pointer(pointer, client_rect(&el), TILT_MAX_DEG));
            }
            on:pointerleave=move |_| set_tilt.set(Tilt::default())
        >
            <div class="relative h-full overflow-hidden rounded-xl bg-card-bg border border-card-border shadow-lg transition-all duration-300 group-hover:shadow-2xl group-hover:shadow-shadow-hover group-hover:border-blue/30">
                <a
                    href=project.href
                    target="_blank"
                    rel="noopener noreferrer"
                    draggable="false"
                    class="block relative h-48 overflow-hidden"
                >
                    <img
                        src=project.image
                        alt=project.title
                        loading="lazy"
                        draggable="false"
                        class="h-full w-full object-cover transition-transform duration-500 group-hover:scale-105"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-black/50 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300" />
                </a>

                <div class="p-5">
                    <div class="flex items-center gap-2 text-xs text-text mb-2">
                        <span class="px-2 py-1 rounded-full bg-blue/10 text-blue font-medium">
                            {project.year}
                        </span>
                        <span>"|"</span>
                        <span>{project.kind.label()}</span>
                    </div>
                    <h3 class="text-lg font-semibold text-foreground mb-2 group-hover:text-blue transition-colors duration-300">
                        {project.title}
                    </h3>
                    <p class="text-sm text-text line-clamp-2 mb-4">{project.description}</p>
                    <div class="flex flex-wrap gap-1.5 mb-4">
                        {project
                            .tech_stack
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-2 py-0.5 text-xs rounded bg-foreground/5 text-text">
                                        {*tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex items-center justify-between">
                        <a
                            href=project.href
                            target="_blank"
                            rel="noopener noreferrer"
                            draggable="false"
                            class="flex items-center gap-1 text-sm font-medium text-blue"
                        >
                            <span>"View Website"</span>
                            <span class="transition-transform duration-200 group-hover:translate-x-1">
                                <Icon glyph=Glyph::ChevronRight class="h-4 w-4" />
                            </span>
                        </a>
                        {project
                            .github
                            .map(|repo| {
                                view! {
                                    <a
                                        href=repo
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        draggable="false"
                                        aria-label=format!("{} source on GitHub", project.title)
                                        class="flex items-center gap-1 text-sm font-medium text-text hover:text-blue transition-colors duration-300"
                                    >
                                        <Icon glyph=Glyph::Github class="h-4 w-4" />
                                        <span>"Code"</span>
                                    </a>
                                }
                            })}
                    </div>
                </div>
            </div>
        </div>
    }
}

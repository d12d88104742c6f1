use leptos::prelude::*;

use crate::geometry::{orbit_position, to_viewbox_percent};

const SKILLS: [(&str, &str); 12] = [
    ("HTML", "/images/skills/html5.svg"),
    ("CSS", "/images/skills/css.svg"),
    ("React", "/images/skills/react.svg"),
    ("TypeScript", "/images/skills/typescript.svg"),
    ("Next.js", "/images/skills/nextjs.svg"),
    ("Tailwind", "/images/skills/tailwind.svg"),
    ("WordPress", "/images/skills/wordpress.webp"),
    ("Figma", "/images/skills/figma.webp"),
    ("Git", "/images/skills/git.webp"),
    ("GitHub", "/images/skills/github.svg"),
    ("UI/UX", "/images/skills/uiux.webp"),
    ("RWD", "/images/skills/rwd.webp"),
];

/// Side of the square SVG viewbox the layout is computed in.
const VIEWBOX: f64 = 500.0;
/// Center to node center, in viewbox units.
const RADIUS: f64 = 200.0;
const NODE_PX: u32 = 56;
const CENTER_PX: u32 = 96;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section class="py-20 px-6 bg-gradient-to-b from-transparent to-card-bg/50">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-3xl md:text-4xl font-black text-foreground mb-4">
                        <span class="text-blue">"My"</span>
                        " Skills"
                    </h2>
                    <p class="text-text max-w-2xl mx-auto">
                        "My list of web skills is always growing. Here are the ones I currently work with the most."
                    </p>
                </div>
                <SkillConstellation skills=&SKILLS center_label="Tech Stack" />
            </div>
        </section>
    }
}

/// Skill nodes on a ring around a center label, with a spoke to each node.
/// Hovering a node highlights its spoke and sends a pulse along it.
#[component]
fn SkillConstellation(
    skills: &'static [(&'static str, &'static str)],
    #[prop(into)] center_label: String,
) -> impl IntoView {
    let (active, set_active) = signal(None::<usize>);
    let total = skills.len();
    let mid = VIEWBOX / 2.0;
    let node_end = move |index: usize| {
        let p = orbit_position(index, total, RADIUS);
        (format!("{:.2}", mid + p.x), format!("{:.2}", mid + p.y))
    };
    let mid_attr = format!("{mid}");

    let spokes = (0..total)
        .map(|index| {
            let (x2, y2) = node_end(index);
            let is_active = move || active.get() == Some(index);
            view! {
                <line
                    x1=mid_attr.clone()
                    y1=mid_attr.clone()
                    x2=x2
                    y2=y2
                    stroke="currentColor"
                    class=move || {
                        if is_active() {
                            "text-blue opacity-100 transition-opacity duration-300"
                        } else {
                            "text-card-border opacity-30 transition-opacity duration-300"
                        }
                    }
                    stroke-width=move || if is_active() { "2" } else { "1" }
                />
            }
        })
        .collect_view();

    let pulse = move || {
        active.get().map(|index| {
            let (x2, y2) = node_end(index);
            let mid = format!("{mid}");
            view! {
                <circle r="4" fill="currentColor" class="text-blue">
                    <animate
                        attributeName="cx"
                        from=mid.clone()
                        to=x2
                        dur="0.8s"
                        repeatCount="indefinite"
                    />
                    <animate attributeName="cy" from=mid to=y2 dur="0.8s" repeatCount="indefinite" />
                    <animate
                        attributeName="opacity"
                        values="0;1;0"
                        dur="0.8s"
                        repeatCount="indefinite"
                    />
                </circle>
            }
        })
    };

    let nodes = skills
        .iter()
        .enumerate()
        .map(|(index, (name, icon))| {
            let pos = to_viewbox_percent(orbit_position(index, total, RADIUS), VIEWBOX);
            let is_active = move || active.get() == Some(index);
            let half = NODE_PX / 2;
            view! {
                <div
                    class="absolute z-20 animate-pop"
                    style=format!(
                        "left: {:.3}%; top: {:.3}%; width: {NODE_PX}px; height: {NODE_PX}px; margin-left: -{half}px; margin-top: -{half}px; animation-delay: {}ms",
                        pos.x,
                        pos.y,
                        index * 30,
                    )
                    on:mouseenter=move |_| set_active.set(Some(index))
                    on:mouseleave=move |_| set_active.set(None)
                >
                    <div class=move || {
                        if is_active() {
                            "absolute inset-0 bg-blue/30 rounded-xl blur-lg scale-150 opacity-100 transition-all duration-200"
                        } else {
                            "absolute inset-0 bg-blue/30 rounded-xl blur-lg scale-0 opacity-0 transition-all duration-200"
                        }
                    } />
                    <div class=move || {
                        if is_active() {
                            "relative w-full h-full rounded-xl flex items-center justify-center cursor-pointer transition-all duration-200 hover:scale-110 bg-blue/10 border-2 border-blue"
                        } else {
                            "relative w-full h-full rounded-xl flex items-center justify-center cursor-pointer transition-all duration-200 hover:scale-110 bg-card-bg border border-card-border hover:border-blue/50"
                        }
                    }>
                        <img src=*icon alt=*name class="w-7 h-7 object-contain" />
                    </div>
                    <span class=move || {
                        if is_active() {
                            "absolute left-1/2 -translate-x-1/2 top-full mt-1.5 text-xs font-medium whitespace-nowrap transition-colors duration-200 text-blue"
                        } else {
                            "absolute left-1/2 -translate-x-1/2 top-full mt-1.5 text-xs font-medium whitespace-nowrap transition-colors duration-200 text-text"
                        }
                    }>{*name}</span>
                </div>
            }
        })
        .collect_view();

    let center_half = CENTER_PX / 2;
    view! {
        <div class="relative w-full max-w-[600px] mx-auto aspect-square">
            <svg
                class="absolute inset-0 w-full h-full"
                viewBox=format!("0 0 {VIEWBOX} {VIEWBOX}")
                preserveAspectRatio="xMidYMid slice"
            >
                <circle
                    cx=format!("{mid}")
                    cy=format!("{mid}")
                    r=format!("{RADIUS}")
                    fill="none"
                    stroke="currentColor"
                    class="text-card-border"
                    stroke-width="1"
                    stroke-dasharray="4 4"
                />
                {spokes}
                {pulse}
            </svg>

            <div
                class="absolute z-10"
                style=format!(
                    "left: 50%; top: 50%; width: {CENTER_PX}px; height: {CENTER_PX}px; margin-left: -{center_half}px; margin-top: -{center_half}px",
                )
            >
                <div class="relative w-full h-full animate-pop">
                    <div class="absolute inset-0 bg-blue/20 rounded-full blur-xl scale-150" />
                    <div class="relative w-full h-full rounded-full bg-gradient-to-br from-blue to-blue-hover flex items-center justify-center">
                        <span class="text-white font-bold text-sm">{center_label}</span>
                    </div>
                </div>
            </div>

            {nodes}
        </div>
    }
}

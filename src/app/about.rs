use leptos::prelude::*;
use leptos_meta::Title;

use super::hero::{ButtonVariant, MagneticButton};
use super::icons::{Glyph, Icon};
use super::theme::use_theme;

struct Experience {
    title: &'static str,
    company: &'static str,
    period: &'static str,
    description: &'static str,
}

const EXPERIENCE: [Experience; 1] = [Experience {
    title: "Front-End Developer & Designer",
    company: "Insivia",
    period: "2020 - 2024",
    description: "Led front-end development for 50+ client websites. Designed and built responsive interfaces, collaborated with marketing teams, and mentored junior developers.",
}];

const SKILL_GROUPS: [(&str, [&str; 6]); 3] = [
    (
        "Development",
        ["React", "TypeScript", "Next.js", "JavaScript", "HTML/CSS", "Tailwind"],
    ),
    (
        "Design",
        ["Figma", "Adobe XD", "Photoshop", "Illustrator", "UI/UX", "Responsive Design"],
    ),
    (
        "Tools",
        ["Git", "VS Code", "WordPress", "Vercel", "Firebase", "REST APIs"],
    ),
];

const VALUES: [(Glyph, &str, &str); 3] = [
    (
        Glyph::Code,
        "Clean Code",
        "I write maintainable, well-documented code that other developers can easily understand and build upon.",
    ),
    (
        Glyph::Palette,
        "Design Thinking",
        "Every project starts with understanding user needs and designing solutions that are both beautiful and functional.",
    ),
    (
        Glyph::Users,
        "Collaboration",
        "I thrive in team environments and believe the best products come from diverse perspectives working together.",
    ),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <div class="min-h-screen pt-24 pb-20">
            <Intro />
            <Values />
            <WorkExperience />
            <SkillGroups />
            <Education />
        </div>
    }
}

#[component]
fn SectionHeading(accent: &'static str, #[prop(optional)] rest: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 mb-12">
            <h2 class="text-3xl md:text-4xl font-black text-foreground">
                <span class="text-blue">{accent}</span>
                {rest}
            </h2>
            <div class="flex-1 h-px bg-gradient-to-r from-blue/50 to-transparent" />
        </div>
    }
}

#[component]
fn Intro() -> impl IntoView {
    let theme = use_theme();
    let portrait = move || {
        if theme.get().is_dark() {
            "/images/portraitDark.webp"
        } else {
            "/images/portraitLight.webp"
        }
    };

    view! {
        <section class="px-6 mb-20">
            <div class="max-w-7xl mx-auto grid lg:grid-cols-2 gap-12 items-center">
                <div class="relative mx-auto lg:mx-0 animate-rise">
                    <div class="absolute inset-0 bg-blue/20 rounded-2xl blur-3xl scale-90" />
                    <div class="relative w-72 h-72 md:w-96 md:h-96 rounded-2xl overflow-hidden border border-card-border">
                        <img
                            src=portrait
                            alt="Quinton Nistico"
                            class="w-full h-full object-contain"
                        />
                    </div>
                </div>

                <div class="animate-rise">
                    <span class="text-blue font-semibold text-sm uppercase tracking-wider">
                        "About Me"
                    </span>
                    <h1 class="text-4xl md:text-5xl font-black text-foreground mt-2 mb-6">
                        "Quinton Nistico"
                    </h1>
                    <div class="flex items-center gap-2 text-text mb-6">
                        <Icon glyph=Glyph::MapPin class="w-4 h-4 text-blue" />
                        <span>"Philadelphia, PA"</span>
                    </div>
                    <p class="text-lg text-text mb-6 leading-relaxed">
                        "I'm a Front-End Developer & Designer with 4+ years of professional agency experience. I specialize in creating responsive, accessible web applications that combine creative design with clean, maintainable code."
                    </p>
                    <p class="text-text mb-8 leading-relaxed">
                        "My passion lies at the intersection of design and development. I believe that great user experiences come from understanding both the visual and technical aspects of web development. When I'm not coding, you can find me exploring new design trends or contributing to open-source projects."
                    </p>
                    <div class="flex flex-wrap gap-4">
                        <MagneticButton href="/#contact">"Get In Touch"</MagneticButton>
                        <MagneticButton
                            href="/resume.pdf"
                            variant=ButtonVariant::Secondary
                            target="_blank"
                        >
                            "Download Resume"
                        </MagneticButton>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Values() -> impl IntoView {
    view! {
        <section class="px-6 py-20 bg-gradient-to-b from-transparent via-blue/5 to-transparent">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-3xl md:text-4xl font-black text-foreground mb-4">
                        "What I "
                        <span class="text-blue">"Value"</span>
                    </h2>
                    <p class="text-text max-w-2xl mx-auto">
                        "The principles that guide my work and collaboration with others."
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-8">
                    {VALUES
                        .into_iter()
                        .map(|(glyph, title, description)| {
                            view! {
                                <div class="p-8 rounded-xl bg-card-bg border border-card-border h-full hover:-translate-y-2 transition-transform duration-300">
                                    <div class="w-12 h-12 rounded-lg bg-blue/10 flex items-center justify-center mb-4">
                                        <Icon glyph class="w-6 h-6 text-blue" />
                                    </div>
                                    <h3 class="text-xl font-bold text-foreground mb-3">{title}</h3>
                                    <p class="text-text">{description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn WorkExperience() -> impl IntoView {
    view! {
        <section class="px-6 py-20">
            <div class="max-w-7xl mx-auto">
                <SectionHeading accent="Work" rest=" Experience" />
                <div class="space-y-8">
                    {EXPERIENCE
                        .iter()
                        .map(|job| {
                            view! {
                                <div class="p-8 rounded-xl bg-card-bg border border-card-border">
                                    <div class="flex flex-wrap items-start justify-between gap-4 mb-4">
                                        <div>
                                            <h3 class="text-xl font-bold text-foreground">
                                                {job.title}
                                            </h3>
                                            <div class="flex items-center gap-2 text-blue mt-1">
                                                <Icon glyph=Glyph::Briefcase class="w-4 h-4" />
                                                <span class="font-medium">{job.company}</span>
                                            </div>
                                        </div>
                                        <span class="px-4 py-1 rounded-full bg-blue/10 text-blue text-sm font-medium">
                                            {job.period}
                                        </span>
                                    </div>
                                    <p class="text-text">{job.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillGroups() -> impl IntoView {
    view! {
        <section class="px-6 py-20">
            <div class="max-w-7xl mx-auto">
                <SectionHeading accent="Skills" rest=" & Tools" />
                <div class="grid md:grid-cols-3 gap-8">
                    {SKILL_GROUPS
                        .into_iter()
                        .map(|(category, items)| {
                            view! {
                                <div class="p-6 rounded-xl bg-card-bg border border-card-border">
                                    <h3 class="text-lg font-bold text-foreground mb-4">{category}</h3>
                                    <div class="flex flex-wrap gap-2">
                                        {items
                                            .into_iter()
                                            .map(|item| {
                                                view! {
                                                    <span class="px-3 py-1.5 text-sm rounded-full bg-blue/10 text-blue border border-blue/20">
                                                        {item}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Education() -> impl IntoView {
    view! {
        <section class="px-6 py-20">
            <div class="max-w-7xl mx-auto">
                <SectionHeading accent="Education" />
                <div class="p-8 rounded-xl bg-card-bg border border-card-border">
                    <div class="flex items-center gap-4">
                        <div class="w-12 h-12 rounded-lg bg-blue/10 flex items-center justify-center">
                            <Icon glyph=Glyph::GraduationCap class="w-6 h-6 text-blue" />
                        </div>
                        <div>
                            <h3 class="text-xl font-bold text-foreground">"Temple University"</h3>
                            <p class="text-text">"Bachelor of Science in Computer Science"</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

//! The portfolio page
//!
//! Walks [`SECTIONS`] in order and renders each body inside a
//! scroll-revealed [`Section`].

use leptos::prelude::*;

use crate::components::{
    AchievementCard, ContactCard, ExperienceCard, ProjectCard, RevealItem, Section, SkillCard,
};
use crate::models::content::{
    ABOUT, ACHIEVEMENTS, CONTACT_BLURB, CONTACT_LINKS, EXPERIENCE, PROFILE, PROJECTS, SECTIONS,
    SKILL_GROUPS,
};
use crate::models::{ContentSection, SectionKind};

use super::{Footer, Hero};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <Hero profile=PROFILE />
            <main class="max-w-7xl mx-auto px-4 py-16 sm:px-6 lg:px-8">
                {SECTIONS.iter().map(render_section).collect_view()}
            </main>
            <Footer name=PROFILE.name />
        </div>
    }
}

fn render_section(section: &'static ContentSection) -> impl IntoView {
    view! {
        <Section title=section.title id=section.id>
            {section_body(section.kind)}
        </Section>
    }
}

fn section_body(kind: SectionKind) -> AnyView {
    match kind {
        SectionKind::About => view! {
            <RevealItem class="bg-white rounded-xl shadow-lg p-8">
                <p class="text-xl text-gray-700 leading-relaxed">{ABOUT}</p>
            </RevealItem>
        }
        .into_any(),
        SectionKind::Experience => view! {
            <div class="space-y-8">
                {EXPERIENCE
                    .iter()
                    .map(|entry| view! { <RevealItem><ExperienceCard entry=entry /></RevealItem> })
                    .collect_view()}
            </div>
        }
        .into_any(),
        SectionKind::Skills => view! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {SKILL_GROUPS
                    .iter()
                    .map(|group| view! { <RevealItem><SkillCard group=group /></RevealItem> })
                    .collect_view()}
            </div>
        }
        .into_any(),
        SectionKind::Achievements => view! {
            <div class="space-y-6">
                {ACHIEVEMENTS
                    .iter()
                    .map(|achievement| {
                        view! { <RevealItem><AchievementCard achievement=achievement /></RevealItem> }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        SectionKind::Projects => view! {
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                {PROJECTS
                    .iter()
                    .map(|project| view! { <RevealItem><ProjectCard project=project /></RevealItem> })
                    .collect_view()}
            </div>
        }
        .into_any(),
        SectionKind::Contact => view! {
            <RevealItem>
                <ContactCard blurb=CONTACT_BLURB links=CONTACT_LINKS />
            </RevealItem>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_component_exists() {
        let _component = Home;
    }
}

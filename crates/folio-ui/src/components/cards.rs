//! Cards rendered inside page sections

use leptos::prelude::*;

use super::icon::IconGlyph;
use crate::models::{Achievement, ContactLink, ExperienceEntry, Icon, Project, SkillGroup};

const CARD: &str = "bg-white rounded-xl shadow-lg";
const HOVER_LIFT: &str = "transform hover:scale-[1.02] transition-transform";

/// An anchor that honours the link's open behaviour.
#[component]
pub fn OutboundLink(
    link: ContactLink,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=link.href target=link.kind.target() rel=link.kind.rel() class=class>
            {children()}
        </a>
    }
}

#[component]
pub fn ExperienceCard(entry: &'static ExperienceEntry) -> impl IntoView {
    view! {
        <div class=format!("{CARD} {HOVER_LIFT} p-8")>
            <div class="flex items-start">
                <IconGlyph icon=Icon::Briefcase class="text-blue-600 mr-4 flex-shrink-0" />
                <div>
                    <h3 class="text-xl font-semibold text-gray-900">{entry.role}</h3>
                    <p class="text-gray-600 mb-2">
                        {format!("{} • {}", entry.organisation, entry.period)}
                    </p>
                    <ul class="list-disc list-inside text-gray-700 space-y-2">
                        {entry.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SkillCard(group: &'static SkillGroup) -> impl IntoView {
    view! {
        <div class=format!("{CARD} {HOVER_LIFT} p-6")>
            <h3 class="text-lg font-semibold text-blue-600 mb-4">{group.category}</h3>
            <ul class="space-y-2">
                {group
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <li class="text-gray-700 flex items-center">
                                <span class="w-2 h-2 bg-blue-500 rounded-full mr-2"></span>
                                {*skill}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn AchievementCard(achievement: &'static Achievement) -> impl IntoView {
    view! {
        <div class=format!("{CARD} {HOVER_LIFT} p-8")>
            <div class="flex items-start">
                <IconGlyph icon=Icon::Award class="text-blue-600 mr-4 flex-shrink-0" />
                <div>
                    <h3 class="text-xl font-semibold text-gray-900">{achievement.heading}</h3>
                    <ul class="list-disc list-inside text-gray-700 mt-2 space-y-2">
                        {achievement.items.iter().map(|i| view! { <li>{*i}</li> }).collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class=format!("{CARD} {HOVER_LIFT} overflow-hidden")>
            <div class="p-8">
                <div class="flex justify-between items-start">
                    <h3 class="text-xl font-semibold text-gray-900">{project.title}</h3>
                    <a
                        href=project.link
                        class="text-blue-600 hover:text-blue-800"
                        aria-label=format!("Open {}", project.title)
                    >
                        <IconGlyph icon=Icon::ExternalLink size=20 />
                    </a>
                </div>
                <p class="text-gray-600 mt-2 mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tech
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-blue-100 text-blue-800 rounded-full text-sm">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ContactCard(blurb: &'static str, links: &'static [ContactLink]) -> impl IntoView {
    view! {
        <div class=format!("{CARD} p-8")>
            <p class="text-xl text-gray-700 mb-6">{blurb}</p>
            <div class="flex flex-col space-y-4">
                {links
                    .iter()
                    .map(|link| {
                        view! {
                            <OutboundLink
                                link=*link
                                class="flex items-center text-blue-600 hover:text-blue-800 transition-colors"
                            >
                                <IconGlyph icon=link.icon size=20 class="mr-2" />
                                {link.label}
                            </OutboundLink>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

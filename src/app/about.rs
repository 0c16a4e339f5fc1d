use std::sync::Arc;

use leptos::prelude::*;

use super::counters::use_counters;
use super::reveal::Reveal;
use crate::content::{Certification, Education, Experience, SiteContent, Skill};

#[component]
pub fn About(content: Arc<SiteContent>) -> impl IntoView {
    let counters = use_counters(&content.metrics);
    let profile = content.profile.clone();
    let experience = move || counters.with(|c| c.get("experience"));

    let bio = match profile.bio_parts() {
        Some((before, after)) => {
            let (before, after) = (before.to_string(), after.to_string());
            view! {
                "I'm " {profile.name.clone()} ", " {before} {experience} {after}
            }
            .into_any()
        }
        None => view! { "I'm " {profile.name.clone()} ", " {profile.bio.clone()} }.into_any(),
    };

    let stats = content
        .metrics
        .iter()
        .enumerate()
        .map(|(i, metric)| {
            let key = metric.key.clone();
            let value = move || counters.with(|c| c.get(&key));
            let label = metric.label.clone();
            view! {
                <Reveal index=i>
                    <div class="bg-white dark:bg-gray-800 p-6 rounded-xl shadow-md hover:shadow-lg transition-shadow">
                        <h3 class="text-5xl font-bold text-blue-600 mb-2">{value} "+"</h3>
                        <p class="text-gray-600 dark:text-gray-400">{label}</p>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section
            id="about"
            class="py-2 bg-gradient-to-b from-gray-50 to-white dark:from-gray-900 dark:to-gray-800"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col lg:flex-row gap-12 items-center mb-20">
                    <Reveal class="flex-shrink-0">
                        <div class="relative w-64 h-64 rounded-2xl overflow-hidden shadow-2xl border-4 border-white dark:border-gray-800">
                            <img
                                src=profile.portrait.clone()
                                alt=profile.name.clone()
                                class="w-full h-full object-cover"
                            />
                        </div>
                    </Reveal>
                    <Reveal index=1 class="flex-1">
                        <span class="inline-block mb-4 px-4 py-1 rounded-full bg-blue-100 text-blue-600 dark:bg-blue-900/30 dark:text-blue-400 text-sm font-medium">
                            {profile.role.clone()}
                        </span>
                        <h2 class="text-4xl md:text-5xl font-bold text-gray-900 dark:text-white mb-4">
                            "About " <span class="text-blue-600">"Me"</span>
                        </h2>
                        <p class="text-lg text-gray-600 dark:text-gray-300 mb-6 leading-relaxed">
                            {bio}
                        </p>
                        <div class="flex flex-wrap gap-3">
                            <a
                                href="#contact"
                                class="px-4 py-2 md:px-6 md:py-3 bg-blue-600 text-white rounded-lg shadow-lg hover:shadow-xl transition-all"
                            >
                                "Contact Me"
                            </a>
                            <a
                                href=profile.resume.clone()
                                download=""
                                class="px-4 py-2 md:px-6 md:py-3 border border-blue-600 text-blue-600 dark:text-blue-400 rounded-lg flex items-center gap-2"
                            >
                                "Download CV"
                                <i class="extra-download" />
                            </a>
                        </div>
                    </Reveal>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-20">{stats}</div>

                <Skills skills=content.skills.clone() />

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 mb-20">
                    <Timeline experience=content.experience.clone() />
                    <div>
                        <EducationList education=content.education.clone() />
                        <Certifications certifications=content.certifications.clone() />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Skills(skills: Vec<Skill>) -> impl IntoView {
    view! {
        <div class="mb-20">
            <Reveal>
                <h3 class="text-3xl font-bold text-center mb-12 text-gray-900 dark:text-white">
                    "My " <span class="text-blue-600 dark:text-blue-400">"Technical"</span>
                    " Skills"
                </h3>
            </Reveal>
            <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-6">
                {skills
                    .into_iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        view! {
                            <Reveal index=i delay_ms=300>
                                <div class="bg-white dark:bg-gray-800 p-4 rounded-xl shadow-sm hover:shadow-md hover:-translate-y-1 transition flex flex-col items-center gap-3">
                                    <i class=format!("text-4xl {} {}", skill.icon, skill.color) />
                                    <span class="font-medium text-gray-800 dark:text-gray-200">
                                        {skill.name}
                                    </span>
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Timeline(experience: Vec<Experience>) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-3xl font-bold mb-8 text-gray-900 dark:text-white">
                "Professional " <span class="text-blue-600 dark:text-blue-400">"Experience"</span>
            </h3>
            <div class="space-y-8 relative">
                {experience
                    .into_iter()
                    .enumerate()
                    .map(|(i, exp)| {
                        view! {
                            <Reveal index=i class="relative pl-12">
                                <div class="absolute left-0 top-1 w-8 h-8 rounded-full bg-blue-600 border-4 border-white dark:border-gray-800 flex items-center justify-center">
                                    <span class="text-white text-sm font-bold">{i + 1}</span>
                                </div>
                                <div class="bg-white dark:bg-gray-800 p-6 rounded-xl shadow-sm hover:shadow-md transition-shadow">
                                    <h4 class="text-xl font-bold text-gray-900 dark:text-white mb-1">
                                        {exp.title}
                                    </h4>
                                    <p class="text-blue-600 dark:text-blue-400 text-sm mb-4">
                                        {exp.period}
                                    </p>
                                    <p class="text-gray-600 dark:text-gray-300 mb-4">
                                        {exp.description}
                                    </p>
                                    <div class="flex flex-wrap gap-2">
                                        {exp
                                            .tags
                                            .into_iter()
                                            .map(|tag| {
                                                view! {
                                                    <span class="px-3 py-1 text-xs rounded-full bg-blue-100 dark:bg-blue-900/30 text-blue-800 dark:text-blue-200">
                                                        {tag}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn EducationList(education: Vec<Education>) -> impl IntoView {
    view! {
        <h3 class="text-3xl font-bold mb-8 text-gray-900 dark:text-white">
            <span class="text-blue-600 dark:text-blue-400">"Education"</span>
            " Background"
        </h3>
        <div class="space-y-8">
            {education
                .into_iter()
                .enumerate()
                .map(|(i, edu)| {
                    view! {
                        <Reveal index=i>
                            <div class="bg-white dark:bg-gray-800 p-6 rounded-xl shadow-sm">
                                <h4 class="text-xl font-bold text-gray-900 dark:text-white">
                                    {edu.degree}
                                </h4>
                                <p class="text-blue-600 dark:text-blue-400 mb-3">
                                    {edu.institution} " • " {edu.period}
                                </p>
                                <ul class="space-y-2 text-gray-600 dark:text-gray-300">
                                    {edu
                                        .highlights
                                        .into_iter()
                                        .map(|h| {
                                            view! {
                                                <li class="flex items-start gap-2">
                                                    <span class="text-blue-500">"•"</span>
                                                    <span>{h}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        </Reveal>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Certifications(certifications: Vec<Certification>) -> impl IntoView {
    view! {
        <h3 class="text-3xl font-bold mt-12 mb-8 text-gray-900 dark:text-white">
            <span class="text-blue-600 dark:text-blue-400">"Certifications"</span>
            " & Courses"
        </h3>
        <div class="space-y-4">
            {certifications
                .into_iter()
                .enumerate()
                .map(|(i, cert)| {
                    view! {
                        <Reveal index=i>
                            <div class="bg-white dark:bg-gray-800 p-4 rounded-lg shadow-sm flex justify-between items-center">
                                <div>
                                    <h4 class="font-medium text-gray-900 dark:text-white">
                                        {cert.title}
                                    </h4>
                                    <p class="text-sm text-gray-600 dark:text-gray-400">
                                        {cert.issuer} " • " {cert.year}
                                    </p>
                                </div>
                                <a
                                    href=cert.link
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-blue-600 dark:text-blue-400 hover:text-blue-700"
                                    aria-label="Open certificate"
                                >
                                    <i class="extra-link" />
                                </a>
                            </div>
                        </Reveal>
                    }
                })
                .collect_view()}
        </div>
    }
}

use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::Project;

#[component]
pub fn Projects(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section
            id="projects"
            class="py-2 bg-gray-50 dark:bg-gray-900 transition-colors duration-500"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900 dark:text-white mb-4">
                        "My " <span class="text-blue-600 dark:text-blue-400">"Projects"</span>
                    </h2>
                    <p class="text-lg text-gray-600 dark:text-gray-300 max-w-2xl mx-auto">
                        "Here are some of my featured projects. Each one was built to solve real problems."
                    </p>
                </Reveal>
                <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                    {projects
                        .into_iter()
                        .enumerate()
                        .map(|(i, project)| view! { <ProjectCard index=i project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(index: usize, project: Project) -> impl IntoView {
    // empty links are left out entirely
    let github = (!project.github.is_empty()).then(|| {
        view! {
            <a
                href=project.github.clone()
                target="_blank"
                rel="noopener noreferrer"
                class="bg-gray-900/80 hover:bg-gray-900 text-white p-2 rounded-full transition-colors"
                aria-label="Source on GitHub"
            >
                <i class="devicon-github-plain" />
            </a>
        }
    });
    let live = (!project.link.is_empty()).then(|| {
        view! {
            <a
                href=project.link.clone()
                target="_blank"
                rel="noopener noreferrer"
                class="bg-blue-600/80 hover:bg-blue-600 text-white p-2 rounded-full transition-colors"
                aria-label="Live demo"
            >
                <i class="extra-link" />
            </a>
        }
    });

    view! {
        <Reveal index=index delay_ms=300 class="h-full">
            <div class="group relative rounded-2xl overflow-hidden shadow-lg bg-white dark:bg-gray-800 hover:shadow-blue-600/40 hover:-translate-y-1 transition-all duration-300 h-full flex flex-col">
                <div class="relative h-48 overflow-hidden">
                    <img
                        src=project.image
                        alt=project.title.clone()
                        loading="lazy"
                        class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-black/70 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-end p-4">
                        <div class="flex gap-3">{github} {live}</div>
                    </div>
                </div>
                <div class="p-6 flex-1 flex flex-col">
                    <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-2">
                        {project.title}
                    </h3>
                    <p class="text-gray-600 dark:text-gray-300 mb-4">{project.description}</p>
                    <div class="mt-auto flex flex-wrap gap-2 mb-4">
                        {project
                            .tech
                            .into_iter()
                            .map(|tech| {
                                view! {
                                    <span class="text-xs px-3 py-1 bg-pink-100 dark:bg-blue-900/50 text-blue-700 dark:text-blue-300 rounded-full">
                                        {tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Reveal>
    }
}

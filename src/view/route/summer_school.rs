use dioxus::prelude::*;

use crate::{
    server::model::summer_school::SummerSchoolProject,
    view::{component::Layout, PageContext},
};

#[derive(Props, Clone, PartialEq)]
pub struct SummerSchoolPageProps {
    pub ctx: PageContext,
    pub year: i32,
    pub projects: Vec<SummerSchoolProject>,
}

#[allow(non_snake_case)]
pub fn SummerSchoolPage(props: SummerSchoolPageProps) -> Element {
    rsx!(Layout {
        ctx: props.ctx.clone(),
        title: format!("Летняя школа {}", props.year),
        p {
            "Летняя школа кафедры: студенты работают над открытыми проектами под "
            "руководством преподавателей и инженеров компаний-партнёров."
        }
        for project in props.projects {
            Project { key: "{project.id}", project: project.clone() }
        }
    })
}

#[component]
fn Project(project: SummerSchoolProject) -> Element {
    rsx!(article {
        class: "project",
        h2 { "{project.project_name}" }
        p { "{project.description}" }
        if let Some(tech) = &project.tech {
            p {
                strong { "Технологии: " }
                "{tech}"
            }
        }
        if let Some(requirements) = &project.requirements {
            p {
                strong { "Требования: " }
                "{requirements}"
            }
        }
        if let Some(advisors) = &project.advisors {
            p {
                strong { "Руководители: " }
                "{advisors}"
            }
        }
        if !project.repos.is_empty() {
            div {
                strong { "Репозитории:" }
                ul {
                    for repo in project.repos.iter() {
                        li { key: "{repo}", a { href: "{repo}", "{repo}" } }
                    }
                }
            }
        }
        if !project.demos.is_empty() {
            div {
                strong { "Демонстрации:" }
                ul {
                    for demo in project.demos.iter() {
                        li { key: "{demo}", a { href: "{demo}", "{demo}" } }
                    }
                }
            }
        }
    })
}

//! Thesis directory pages: the search form, the result fragments loaded by
//! `js/theses.js`, and the moderation list of uploaded theses.

use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCode, FaFile},
    Icon,
};

use crate::{
    server::model::thesis::{ThesisCard, ThesisFilterOptions, ThesisSearchPage, ALL_WORKTYPES},
    view::{
        component::{Layout, PageLinks},
        route::StaticPageProps,
        PageContext,
    },
};

#[derive(Props, Clone, PartialEq)]
pub struct ThesesPageProps {
    pub ctx: PageContext,
    pub options: ThesisFilterOptions,
}

#[allow(non_snake_case)]
pub fn ThesesPage(props: ThesesPageProps) -> Element {
    let ctx = props.ctx;
    let options = props.options;
    // Years are listed newest first.
    let first_year = options.years.last().copied();
    let last_year = options.years.first().copied();

    rsx!(Layout {
        ctx: ctx.clone(),
        title: "Выпускные квалификационные работы",
        form {
            id: "theses-filter",
            class: "filter",
            label {
                "Тип работы"
                select {
                    name: "worktype",
                    for choice in options.worktypes.iter() {
                        option {
                            key: "{choice.value}",
                            value: "{choice.value}",
                            selected: choice.value == ALL_WORKTYPES,
                            "{choice.label}"
                        }
                    }
                }
            }
            label {
                "Направление"
                select {
                    name: "course",
                    for choice in options.courses.iter() {
                        option { key: "{choice.value}", value: "{choice.value}", "{choice.label}" }
                    }
                }
            }
            label {
                "Научный руководитель"
                select {
                    name: "supervisor",
                    for choice in options.supervisors.iter() {
                        option { key: "{choice.value}", value: "{choice.value}", "{choice.label}" }
                    }
                }
            }
            label {
                "С"
                select {
                    name: "startdate",
                    for year in options.years.iter() {
                        option {
                            key: "{year}",
                            value: "{year}",
                            selected: Some(*year) == first_year,
                            "{year}"
                        }
                    }
                }
            }
            label {
                "По"
                select {
                    name: "enddate",
                    for year in options.years.iter() {
                        option {
                            key: "{year}",
                            value: "{year}",
                            selected: Some(*year) == last_year,
                            "{year}"
                        }
                    }
                }
            }
        }
        div { id: "theses", class: "thesis-list" }
        script { src: ctx.href("/js/theses.js") }
    })
}

#[derive(Props, Clone, PartialEq)]
pub struct ThesesFragmentProps {
    pub ctx: PageContext,
    pub page: ThesisSearchPage,
}

/// One page of search results.
#[allow(non_snake_case)]
pub fn ThesesFragment(props: ThesesFragmentProps) -> Element {
    let ctx = props.ctx;
    let filter = props.page.filter.clone();

    rsx!(div {
        class: "results",
        for thesis in props.page.theses {
            ThesisItem {
                key: "{thesis.id}",
                ctx: ctx.clone(),
                thesis: thesis.clone(),
            }
        }
        PageLinks {
            pagination: props.page.pagination.clone(),
            href: move |page: u64| format!("fetch_theses?{}", filter.query(page)),
        }
    })
}

/// Shown when a search matches nothing.
#[allow(non_snake_case)]
pub fn BlankFragment(props: StaticPageProps) -> Element {
    rsx!(div {
        class: "results empty",
        p { "По вашему запросу работ не найдено." }
        a { href: props.ctx.href("/theses.html"), "Сбросить фильтр" }
    })
}

#[component]
pub fn ThesisItem(ctx: PageContext, thesis: ThesisCard) -> Element {
    rsx!(article {
        class: "thesis",
        h3 { "{thesis.name_ru}" }
        if let Some(name_en) = &thesis.name_en {
            p { class: "thesis-en", "{name_en}" }
        }
        p {
            class: "meta",
            span { class: "author", "{thesis.author}" }
            " · "
            span { "Научный руководитель: {thesis.supervisor}" }
        }
        p {
            class: "meta",
            "{thesis.worktype} · {thesis.course} · {thesis.publish_year}"
        }
        if let Some(description) = &thesis.description {
            p { class: "description", "{description}" }
        }
        ul {
            class: "files",
            for file in thesis.files.iter() {
                li {
                    key: "{file.name}",
                    Icon {
                        width: 14,
                        height: 14,
                        icon: FaFile,
                    }
                    a { href: ctx.asset(&file.url), {file.kind.caption()} }
                }
            }
            if let Some(source_uri) = &thesis.source_uri {
                li {
                    Icon {
                        width: 14,
                        height: 14,
                        icon: FaCode,
                    }
                    a { href: "{source_uri}", "Исходный код" }
                }
            }
        }
    })
}

#[derive(Props, Clone, PartialEq)]
pub struct ModerationPageProps {
    pub ctx: PageContext,
    pub theses: Vec<ThesisCard>,
}

/// Uploaded theses waiting for a moderator.
#[allow(non_snake_case)]
pub fn ModerationPage(props: ModerationPageProps) -> Element {
    let ctx = props.ctx;

    rsx!(Layout {
        ctx: ctx.clone(),
        title: "Загруженные работы",
        if props.theses.is_empty() {
            p { "Новых работ нет." }
        }
        for thesis in props.theses {
            div {
                key: "{thesis.id}",
                class: "moderation-item",
                ThesisItem { ctx: ctx.clone(), thesis: thesis.clone() }
                p {
                    class: "actions",
                    a {
                        class: "button",
                        href: ctx.href(&format!("/theses_add_tmp?thesis_id={}", thesis.id)),
                        "Опубликовать"
                    }
                    " "
                    a {
                        class: "button danger",
                        href: ctx.href(&format!("/theses_delete_tmp?thesis_id={}", thesis.id)),
                        "Удалить"
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        server::model::{
            pagination::Pagination,
            thesis::{ThesisFile, ThesisFilter},
            upload::FileKind,
        },
        view::render_fragment,
    };

    fn card() -> ThesisCard {
        ThesisCard {
            id: 7,
            name_ru: "Статический анализ".to_string(),
            name_en: None,
            description: None,
            author: "Иванов Иван".to_string(),
            publish_year: 2021,
            worktype: "Бакалаврская ВКР".to_string(),
            course: "Программная инженерия".to_string(),
            supervisor: "Петров Пётр Петрович".to_string(),
            files: vec![ThesisFile {
                kind: FileKind::Text,
                name: "Ivanov_Ivan_text.pdf".to_string(),
                url: "thesis/texts/Ivanov_Ivan_text.pdf".to_string(),
            }],
            source_uri: Some("https://github.com/example/analyzer".to_string()),
        }
    }

    #[test]
    fn fragment_links_pages_with_effective_filter() {
        let page = ThesisSearchPage {
            theses: vec![card()],
            filter: ThesisFilter {
                worktype: 3,
                course: 0,
                supervisor: 0,
                startdate: 2019,
                enddate: 2021,
            },
            pagination: Pagination::new(1, 10, 25),
        };

        let html = render_fragment(
            ThesesFragment,
            ThesesFragmentProps {
                ctx: PageContext::for_path("/fetch_theses"),
                page,
            },
        )
        .0;

        assert!(html.contains("Статический анализ"));
        assert!(html.contains("thesis/texts/Ivanov_Ivan_text.pdf"));
        assert!(html.contains("fetch_theses?worktype=3"));
        assert!(html.contains("enddate=2021"));
        assert!(html.contains("page=2"));
    }

    #[test]
    fn nested_pages_link_files_from_site_root() {
        let html = render_fragment(
            ModerationPage,
            ModerationPageProps {
                ctx: PageContext::for_path("/bachelor/admission.html"),
                theses: vec![card()],
            },
        )
        .0;

        assert!(html.contains("../thesis/texts/Ivanov_Ivan_text.pdf"));
        assert!(html.contains("../theses_delete_tmp?thesis_id=7"));
    }
}

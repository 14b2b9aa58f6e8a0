use dioxus::prelude::*;

use crate::{
    server::model::{curriculum::StudyYear, staff::StaffMember, thesis::ThesisCard},
    view::{
        component::Layout,
        route::{department::StaffCard, theses::ThesisItem, StaticPageProps},
        PageContext,
    },
};

#[allow(non_snake_case)]
pub fn ApplicationPage(props: StaticPageProps) -> Element {
    let ctx = props.ctx;

    rsx!(Layout {
        ctx: ctx.clone(),
        title: "Поступающим в бакалавриат",
        p {
            "Кафедра ведёт обучение по двум программам бакалавриата. Приём проводится по "
            "результатам ЕГЭ по математике, информатике и русскому языку."
        }
        ul {
            li {
                a {
                    href: ctx.href("/bachelor/programming-technology.html"),
                    "Технологии программирования"
                }
            }
            li {
                a {
                    href: ctx.href("/bachelor/software-engineering.html"),
                    "Программная инженерия"
                }
            }
        }
        p {
            a { href: ctx.href("/bachelor/admission.html"), "Почему стоит выбрать нас" }
        }
    })
}

#[derive(Props, Clone, PartialEq)]
pub struct AdmissionPageProps {
    pub ctx: PageContext,
    pub recommended: Vec<ThesisCard>,
    pub staff: Vec<StaffMember>,
}

#[allow(non_snake_case)]
pub fn AdmissionPage(props: AdmissionPageProps) -> Element {
    let ctx = props.ctx;

    rsx!(Layout {
        ctx: ctx.clone(),
        title: "Поступление на кафедру",
        if !props.recommended.is_empty() {
            section {
                h2 { "Работы наших студентов" }
                div {
                    class: "thesis-list",
                    for thesis in props.recommended {
                        ThesisItem {
                            key: "{thesis.id}",
                            ctx: ctx.clone(),
                            thesis: thesis.clone(),
                        }
                    }
                }
            }
        }
        section {
            h2 { "Преподаватели" }
            div {
                class: "staff-grid",
                for member in props.staff {
                    StaffCard {
                        key: "{member.id}",
                        ctx: ctx.clone(),
                        member: member.clone(),
                    }
                }
            }
            a { href: ctx.href("/department/staff.html"), "Все сотрудники" }
        }
    })
}

#[derive(Props, Clone, PartialEq)]
pub struct CurriculumPageProps {
    pub ctx: PageContext,
    pub title: String,
    pub years: Vec<StudyYear>,
}

#[allow(non_snake_case)]
pub fn CurriculumPage(props: CurriculumPageProps) -> Element {
    rsx!(Layout {
        ctx: props.ctx.clone(),
        title: props.title.clone(),
        for study_year in props.years {
            section {
                key: "{study_year.year}",
                class: "study-year",
                h2 { "{study_year.year} курс" }
                if study_year.entries.is_empty() {
                    p { "Учебный план ещё не опубликован." }
                } else {
                    table {
                        thead {
                            tr {
                                th { "Дисциплина" }
                                th { "Блок" }
                            }
                        }
                        tbody {
                            for (index, entry) in study_year.entries.iter().enumerate() {
                                tr {
                                    key: "{index}",
                                    td { "{entry.discipline}" }
                                    td { "{entry.kind}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

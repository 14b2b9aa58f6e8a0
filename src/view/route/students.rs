use dioxus::prelude::*;

use crate::view::{component::Layout, route::StaticPageProps};

#[allow(non_snake_case)]
pub fn StudentsPage(props: StaticPageProps) -> Element {
    let ctx = props.ctx;

    rsx!(Layout {
        ctx: ctx.clone(),
        title: "Студентам",
        ul {
            li {
                a { href: ctx.href("/bachelor/programming-technology.html"), "Учебный план «Технологии программирования»" }
            }
            li {
                a { href: ctx.href("/bachelor/software-engineering.html"), "Учебный план «Программная инженерия»" }
            }
            li {
                a { href: ctx.href("/theses.html"), "Архив выпускных работ" }
            }
            li {
                a { href: ctx.href("/students/scholarships.html"), "Стипендии" }
            }
            li {
                a { href: ctx.href("/summer_school_2021.html"), "Летняя школа" }
            }
        }
    })
}

#[allow(non_snake_case)]
pub fn ScholarshipsPage(props: StaticPageProps) -> Element {
    rsx!(Layout {
        ctx: props.ctx.clone(),
        title: "Стипендии",
        p {
            "Помимо государственной академической стипендии студенты кафедры могут "
            "претендовать на повышенные стипендии за научную деятельность и именные "
            "стипендии компаний-партнёров."
        }
        p {
            "Конкурс на именные стипендии проводится каждый семестр. Заявки принимаются "
            "у секретаря кафедры."
        }
    })
}

use dioxus::prelude::*;

use crate::view::{component::Layout, route::StaticPageProps};

#[allow(non_snake_case)]
pub fn InformationSystemsAdministrationPage(props: StaticPageProps) -> Element {
    rsx!(Layout {
        ctx: props.ctx.clone(),
        title: "Администрирование информационных систем",
        p {
            "Магистерская программа готовит специалистов по проектированию, развёртыванию "
            "и сопровождению распределённых информационных систем."
        }
        h2 { "Вступительные испытания" }
        p { "Портфолио и собеседование по основам программирования и сетевых технологий." }
    })
}

#[allow(non_snake_case)]
pub fn SoftwareEngineeringPage(props: StaticPageProps) -> Element {
    rsx!(Layout {
        ctx: props.ctx.clone(),
        title: "Программная инженерия (магистратура)",
        p {
            "Программа ориентирована на исследования в области языков программирования, "
            "анализа программ и разработки крупных программных систем."
        }
        h2 { "Вступительные испытания" }
        p { "Портфолио с описанием выполненных проектов и научной работы." }
    })
}

use dioxus::prelude::*;

use crate::view::{component::Layout, route::StaticPageProps};

#[allow(non_snake_case)]
pub fn NotFoundPage(props: StaticPageProps) -> Element {
    let ctx = props.ctx;

    rsx!(Layout {
        ctx: ctx.clone(),
        title: "Страница не найдена",
        p { "Запрошенной страницы не существует или она была перемещена." }
        a { href: ctx.href("/"), "На главную" }
    })
}

#[allow(non_snake_case)]
pub fn NoOfferPage(props: StaticPageProps) -> Element {
    rsx!(Layout {
        ctx: props.ctx.clone(),
        title: "Публичная оферта",
        p {
            "Сайт кафедры носит информационный характер. Представленные материалы "
            "не являются публичной офертой."
        }
    })
}

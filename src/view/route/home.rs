use dioxus::prelude::*;

use crate::view::{component::Layout, route::StaticPageProps};

#[allow(non_snake_case)]
pub fn IndexPage(props: StaticPageProps) -> Element {
    let ctx = props.ctx;

    rsx!(Layout {
        ctx: ctx.clone(),
        title: "Кафедра системного программирования",
        section {
            class: "lead",
            p {
                "Кафедра системного программирования математико-механического факультета "
                "СПбГУ готовит специалистов в области программной инженерии: от разработки "
                "компиляторов и операционных систем до анализа данных и встроенных систем."
            }
        }
        section {
            class: "cards",
            div {
                class: "card",
                h2 { "Бакалавриат" }
                p { "Программы «Технологии программирования» и «Программная инженерия»." }
                a { href: ctx.href("/bachelor/application.html"), "Поступление" }
            }
            div {
                class: "card",
                h2 { "Магистратура" }
                ul {
                    li {
                        a {
                            href: ctx.href("/master/software-engineering.html"),
                            "Программная инженерия"
                        }
                    }
                    li {
                        a {
                            href: ctx.href("/master/information-systems-administration.html"),
                            "Администрирование информационных систем"
                        }
                    }
                }
            }
            div {
                class: "card",
                h2 { "Выпускные работы" }
                p { "Тексты, презентации и отзывы на квалификационные работы студентов кафедры." }
                a { href: ctx.href("/theses.html"), "Перейти к архиву" }
            }
        }
    })
}

#[allow(non_snake_case)]
pub fn ContactsPage(props: StaticPageProps) -> Element {
    rsx!(Layout {
        ctx: props.ctx.clone(),
        title: "Контакты",
        dl {
            class: "contacts",
            dt { "Адрес" }
            dd { "198504, Санкт-Петербург, Петергоф, Университетский проспект, д. 28, ауд. 3381" }
            dt { "Телефон" }
            dd { "+7 (812) 428-42-10" }
            dt { "Электронная почта" }
            dd {
                a { href: "mailto:se@math.spbu.ru", "se@math.spbu.ru" }
            }
        }
    })
}

#[allow(non_snake_case)]
pub fn FaqPage(props: StaticPageProps) -> Element {
    rsx!(Layout {
        ctx: props.ctx.clone(),
        title: "Часто задаваемые вопросы",
        dl {
            class: "faq",
            dt { "Как выбрать научного руководителя?" }
            dd {
                "Посмотрите темы выпускных работ прошлых лет в архиве и напишите "
                "преподавателю, чьи работы вам интересны."
            }
            dt { "Когда сдаются выпускные работы?" }
            dd { "Тексты загружаются в архив после защиты, в конце весеннего семестра." }
            dt { "Можно ли пройти практику в компании?" }
            dd {
                "Да. Учебная практика может проходить у партнёров кафедры при наличии "
                "руководителя от компании и куратора от кафедры."
            }
        }
    })
}

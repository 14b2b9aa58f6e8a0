use dioxus::prelude::*;

use crate::view::PageContext;

#[component]
pub fn Footer(ctx: PageContext) -> Element {
    let year = chrono::Utc::now().format("%Y").to_string();
    let contacts = ctx.href("/contacts.html");
    let summer_school = ctx.href("/summer_school_2021.html");

    rsx!(footer {
        class: "site-footer",
        p {
            "© 2014–{year} Кафедра системного программирования СПбГУ"
        }
        p {
            a { href: "{contacts}", "Контакты" }
            " · "
            a { href: "{summer_school}", "Летняя школа" }
        }
    })
}

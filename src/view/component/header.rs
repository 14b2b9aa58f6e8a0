use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaGraduationCap, Icon};

use crate::view::{PageContext, SITE_NAME};

/// Main navigation entries: site path and caption.
const NAVIGATION: [(&str, &str); 6] = [
    ("/bachelor/application.html", "Абитуриентам"),
    ("/students/index.html", "Студентам"),
    ("/theses.html", "Выпускные работы"),
    ("/department/staff.html", "Сотрудники"),
    ("/frequently-asked-questions.html", "Вопросы"),
    ("/contacts.html", "Контакты"),
];

#[component]
pub fn Header(ctx: PageContext) -> Element {
    let home = ctx.href("/");

    rsx!(header {
        class: "site-header",
        a {
            class: "brand",
            href: "{home}",
            Icon {
                width: 32,
                height: 32,
                icon: FaGraduationCap,
            }
            span { {SITE_NAME} }
        }
        nav {
            ul {
                for (path, caption) in NAVIGATION {
                    li {
                        key: "{path}",
                        a {
                            class: if ctx.is_current(path) { "active" } else { "" },
                            href: ctx.href(path),
                            {caption}
                        }
                    }
                }
            }
        }
    })
}

use dioxus::prelude::*;

use crate::view::{
    component::{Footer, Header},
    PageContext, SITE_NAME,
};

#[component]
pub fn Layout(ctx: PageContext, #[props(into)] title: String, children: Element) -> Element {
    let stylesheet = ctx.href("/css/site.css");

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta {
                name: "viewport",
                content: "width=device-width, initial-scale=1",
            }
            title { "{title} | {SITE_NAME}" }
            link { rel: "stylesheet", href: "{stylesheet}" }
        }
        body {
            Header { ctx: ctx.clone() }
            main {
                class: "container",
                h1 { "{title}" }
                {children}
            }
            Footer { ctx: ctx.clone() }
        }
    }
}

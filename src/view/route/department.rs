use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaEnvelope, FaUser},
    Icon,
};

use crate::{
    server::model::staff::StaffMember,
    view::{component::Layout, PageContext},
};

#[derive(Props, Clone, PartialEq)]
pub struct StaffPageProps {
    pub ctx: PageContext,
    pub staff: Vec<StaffMember>,
}

#[allow(non_snake_case)]
pub fn StaffPage(props: StaffPageProps) -> Element {
    rsx!(Layout {
        ctx: props.ctx.clone(),
        title: "Сотрудники кафедры",
        div {
            class: "staff-grid",
            for member in props.staff {
                StaffCard {
                    key: "{member.id}",
                    ctx: props.ctx.clone(),
                    member: member.clone(),
                }
            }
        }
    })
}

#[component]
pub fn StaffCard(ctx: PageContext, member: StaffMember) -> Element {
    rsx!(div {
        class: "staff-card",
        if let Some(avatar) = &member.avatar {
            img {
                class: "avatar",
                src: ctx.asset(avatar),
                alt: "{member.name}",
            }
        } else {
            div {
                class: "avatar placeholder",
                Icon {
                    width: 64,
                    height: 64,
                    icon: FaUser,
                }
            }
        }
        h3 { "{member.name}" }
        p { class: "position", "{member.position}" }
        if let Some(contacts) = &member.contacts {
            p {
                class: "contacts",
                Icon {
                    width: 14,
                    height: 14,
                    icon: FaEnvelope,
                }
                a { href: "mailto:{contacts}", "{contacts}" }
            }
        }
    })
}

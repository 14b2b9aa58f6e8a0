//! Admin backend pages.

use dioxus::prelude::*;

use crate::{
    server::model::admin::{AdminForm, AdminLink, AdminListPage, FieldInput, FormField, FormValues},
    view::{
        component::{Layout, PageLinks},
        PageContext,
    },
};

#[derive(Props, Clone, PartialEq)]
pub struct AdminIndexProps {
    pub ctx: PageContext,
    pub resources: Vec<AdminLink>,
}

#[allow(non_snake_case)]
pub fn AdminIndexPage(props: AdminIndexProps) -> Element {
    let ctx = props.ctx;

    rsx!(Layout {
        ctx: ctx.clone(),
        title: "Администрирование",
        ul {
            class: "admin-resources",
            for resource in props.resources {
                li {
                    key: "{resource.slug}",
                    a {
                        href: ctx.href(&format!("/admin/{}/", resource.slug)),
                        {resource.title}
                    }
                }
            }
        }
    })
}

#[derive(Props, Clone, PartialEq)]
pub struct AdminListProps {
    pub ctx: PageContext,
    pub page: AdminListPage,
}

#[allow(non_snake_case)]
pub fn ResourceListPage(props: AdminListProps) -> Element {
    let ctx = props.ctx;
    let page = props.page;
    let slug = page.resource.slug;

    rsx!(Layout {
        ctx: ctx.clone(),
        title: page.resource.title,
        p {
            a { href: ctx.href("/admin/"), "← Все разделы" }
            " "
            a {
                class: "button",
                href: ctx.href(&format!("/admin/{slug}/new")),
                "Создать"
            }
        }
        table {
            class: "admin-table",
            thead {
                tr {
                    th { "ID" }
                    for column in page.columns.iter() {
                        th { key: "{column}", {*column} }
                    }
                    th {}
                }
            }
            tbody {
                for row in page.rows.iter() {
                    tr {
                        key: "{row.id}",
                        td {
                            a {
                                href: ctx.href(&format!("/admin/{slug}/edit/{}", row.id)),
                                "{row.id}"
                            }
                        }
                        for (index, cell) in row.cells.iter().enumerate() {
                            td { key: "{index}", "{cell}" }
                        }
                        td {
                            form {
                                method: "post",
                                action: ctx.href(&format!("/admin/{slug}/delete/{}", row.id)),
                                button { r#type: "submit", class: "danger", "Удалить" }
                            }
                        }
                    }
                }
            }
        }
        PageLinks {
            pagination: page.pagination.clone(),
            href: move |page: u64| format!("?page={page}"),
        }
    })
}

#[derive(Props, Clone, PartialEq)]
pub struct AdminFormProps {
    pub ctx: PageContext,
    pub form: AdminForm,
}

#[allow(non_snake_case)]
pub fn ResourceFormPage(props: AdminFormProps) -> Element {
    let ctx = props.ctx;
    let form = props.form;
    let slug = form.resource.slug;
    let (title, action) = match form.id {
        Some(id) => (
            format!("{}: запись {}", form.resource.title, id),
            format!("/admin/{slug}/edit/{id}"),
        ),
        None => (
            format!("{}: новая запись", form.resource.title),
            format!("/admin/{slug}/new"),
        ),
    };

    rsx!(Layout {
        ctx: ctx.clone(),
        title: title,
        if let Some(error) = &form.error {
            p { class: "form-error", "{error}" }
        }
        form {
            class: "admin-form",
            method: "post",
            action: ctx.href(&action),
            for field in form.fields.iter() {
                FieldRow {
                    key: "{field.name}",
                    field: field.clone(),
                    values: form.values.clone(),
                }
            }
            p {
                button { r#type: "submit", "Сохранить" }
                " "
                a { href: ctx.href(&format!("/admin/{slug}/")), "Отмена" }
            }
        }
    })
}

#[component]
fn FieldRow(field: FormField, values: FormValues) -> Element {
    let name = field.name;
    let value = values.get(name).to_string();

    rsx!(div {
        class: "field",
        label {
            r#for: "{name}",
            {field.label}
            if field.required && !matches!(field.input, FieldInput::Checkbox) {
                " *"
            }
        }
        {match &field.input {
            FieldInput::Text => rsx!(input {
                r#type: "text",
                id: "{name}",
                name: "{name}",
                value: "{value}",
            }),
            FieldInput::Number => rsx!(input {
                r#type: "number",
                id: "{name}",
                name: "{name}",
                value: "{value}",
            }),
            FieldInput::TextArea => rsx!(textarea {
                id: "{name}",
                name: "{name}",
                rows: "5",
                "{value}"
            }),
            FieldInput::Checkbox => rsx!(input {
                r#type: "checkbox",
                id: "{name}",
                name: "{name}",
                value: "y",
                checked: values.checkbox(name),
            }),
            FieldInput::Select(choices) => rsx!(select {
                id: "{name}",
                name: "{name}",
                for choice in choices.iter() {
                    option {
                        key: "{choice.value}",
                        value: "{choice.value}",
                        selected: choice.value == value,
                        "{choice.label}"
                    }
                }
            }),
        }}
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        server::model::admin::{Choice, FormField},
        view::render,
    };

    #[test]
    fn form_marks_current_choice_and_shows_error() {
        let form = AdminForm {
            resource: AdminLink {
                slug: "staff",
                title: "Сотрудники",
            },
            id: Some(3),
            fields: vec![
                FormField::text("position", "Должность"),
                FormField::select(
                    "science_degree",
                    "Учёная степень",
                    vec![Choice::new("", ""), Choice::new("к.т.н.", "к.т.н.")],
                ),
            ],
            values: FormValues::new()
                .set("position", "Доцент")
                .set("science_degree", "к.т.н."),
            error: Some("Учёная степень: Not a valid choice.".to_string()),
        };

        let html = render(
            ResourceFormPage,
            AdminFormProps {
                ctx: PageContext::for_path("/admin/staff/edit/3"),
                form,
            },
        )
        .0;

        assert!(html.contains("Not a valid choice."));
        assert!(html.contains("value=\"Доцент\""));
        assert!(html.contains("../../../admin/staff/edit/3"));
    }
}

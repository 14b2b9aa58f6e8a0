//! Admin backend handlers, generic over the edited [`AdminResource`].

use std::collections::HashMap;

use axum::{
    extract::{Form, Path, Query, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    server::{
        error::AppError,
        middleware::auth::BasicAuthGuard,
        model::admin::{AdminForm, FormValues},
        service::admin::{resources, AdminResource, AdminService},
        state::AppState,
        util::parse::parse_or,
    },
    view::{
        self,
        route::admin::{
            AdminFormProps, AdminIndexPage, AdminIndexProps, AdminListProps, ResourceFormPage,
            ResourceListPage,
        },
        PageContext,
    },
};

/// Links to every admin resource.
pub async fn index(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    BasicAuthGuard::new(&state.config, &headers).require()?;

    Ok(view::render(
        AdminIndexPage,
        AdminIndexProps {
            ctx: PageContext::for_path(uri.path()),
            resources: resources(),
        },
    ))
}

/// One page of a resource's records, selected with `?page=`.
pub async fn list<R: AdminResource>(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    BasicAuthGuard::new(&state.config, &headers).require()?;

    let page = parse_or(query.get("page").map(String::as_str), 1);
    let page = AdminService::<R>::new(&state.db).list(page).await?;

    Ok(view::render(
        ResourceListPage,
        AdminListProps {
            ctx: PageContext::for_path(uri.path()),
            page,
        },
    ))
}

pub async fn new_form<R: AdminResource>(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    BasicAuthGuard::new(&state.config, &headers).require()?;

    let form = AdminService::<R>::new(&state.db).new_form().await?;

    Ok(render_form(&uri, form))
}

/// Creates a record, re-rendering the form with status 422 on invalid input.
pub async fn create<R: AdminResource>(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Form(values): Form<HashMap<String, String>>,
) -> Result<Response, AppError> {
    BasicAuthGuard::new(&state.config, &headers).require()?;

    let service = AdminService::<R>::new(&state.db);
    let values = FormValues::from_map(values);

    match service.create(&values).await {
        Ok(()) => Ok(redirect_to_list::<R>().into_response()),
        Err(AppError::FormErr(err)) => {
            let form = service.invalid_form(None, values, &err).await?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, render_form(&uri, form)).into_response())
        }
        Err(err) => Err(err),
    }
}

pub async fn edit_form<R: AdminResource>(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    BasicAuthGuard::new(&state.config, &headers).require()?;

    let form = AdminService::<R>::new(&state.db)
        .edit_form(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No {} record {}", R::SLUG, id)))?;

    Ok(render_form(&uri, form))
}

/// Updates a record, re-rendering the form with status 422 on invalid input.
pub async fn update<R: AdminResource>(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Path(id): Path<i32>,
    Form(values): Form<HashMap<String, String>>,
) -> Result<Response, AppError> {
    BasicAuthGuard::new(&state.config, &headers).require()?;

    let service = AdminService::<R>::new(&state.db);
    let values = FormValues::from_map(values);

    match service.update(id, &values).await {
        Ok(()) => Ok(redirect_to_list::<R>().into_response()),
        Err(AppError::FormErr(err)) => {
            let form = service.invalid_form(Some(id), values, &err).await?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, render_form(&uri, form)).into_response())
        }
        Err(err) => Err(err),
    }
}

pub async fn delete<R: AdminResource>(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<Redirect, AppError> {
    BasicAuthGuard::new(&state.config, &headers).require()?;

    if !AdminService::<R>::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound(format!("No {} record {}", R::SLUG, id)));
    }

    Ok(redirect_to_list::<R>())
}

fn render_form(uri: &Uri, form: AdminForm) -> Html<String> {
    view::render(
        ResourceFormPage,
        AdminFormProps {
            ctx: PageContext::for_path(uri.path()),
            form,
        },
    )
}

fn redirect_to_list<R: AdminResource>() -> Redirect {
    Redirect::to(&format!("/admin/{}/", R::SLUG))
}

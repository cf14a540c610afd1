use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use tracing::{error, info, instrument};

use super::{
    dto::{ActionForm, AddStudentForm, BannerQuery, DeleteStudentRequest},
    services::{parse_student_id, validate_new_student},
    view::Banner,
};
use crate::{
    error::{Action, AppError},
    state::AppState,
};

pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_students)
                .post(submit_action)
                .fallback(redirect_home),
        )
        .route("/add", post(add_student).fallback(redirect_home))
        .route(
            "/delete",
            get(delete_student_by_query)
                .post(delete_student_by_form)
                .fallback(redirect_home),
        )
}

/// Anything we do not recognise goes back to the listing untouched.
pub async fn redirect_home() -> Redirect {
    Redirect::to("/")
}

/// GET /: the listing page with the banner of the last submission.
#[instrument(skip(state, banner))]
pub async fn list_students(
    State(state): State<AppState>,
    banner: Option<Query<BannerQuery>>,
) -> Response {
    let BannerQuery { success, error: failure } = banner.map(|Query(b)| b).unwrap_or_default();
    let mut banner = Banner {
        success: success.filter(|m| !m.is_empty()),
        errors: failure.filter(|m| !m.is_empty()).into_iter().collect(),
    };

    let students = match state.students.list_all().await {
        Ok(rows) => rows,
        Err(e) => {
            let err = AppError::from_store(Action::List, e);
            error!(error = %err, "list students failed");
            banner.errors.push(err.user_message());
            Vec::new()
        }
    };

    match state.pages.render(&students, &banner) {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            error!(error = %e, "render listing page failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// POST /add
#[instrument(skip(state, form))]
pub async fn add_student(
    State(state): State<AppState>,
    form: Option<Form<AddStudentForm>>,
) -> Response {
    match form {
        Some(Form(form)) => create_student(&state, &form.name, &form.age, &form.department)
            .await
            .into_response(),
        None => redirect_home().await.into_response(),
    }
}

/// GET /delete?id=
#[instrument(skip(state, req))]
pub async fn delete_student_by_query(
    State(state): State<AppState>,
    req: Option<Query<DeleteStudentRequest>>,
) -> Result<Redirect, AppError> {
    let id = req.and_then(|Query(r)| r.id);
    remove_student(&state, id.as_deref()).await
}

/// POST /delete
#[instrument(skip(state, req))]
pub async fn delete_student_by_form(
    State(state): State<AppState>,
    req: Option<Form<DeleteStudentRequest>>,
) -> Result<Redirect, AppError> {
    let id = req.and_then(|Form(r)| r.id);
    remove_student(&state, id.as_deref()).await
}

/// POST /: the inline page sends both operations here, keyed by `action`.
#[instrument(skip(state, form))]
pub async fn submit_action(
    State(state): State<AppState>,
    form: Option<Form<ActionForm>>,
) -> Response {
    let Some(Form(form)) = form else {
        return redirect_home().await.into_response();
    };
    match form.action.as_deref().map(str::trim) {
        Some("add") => create_student(&state, &form.name, &form.age, &form.department)
            .await
            .into_response(),
        Some("delete") => remove_student(&state, form.id.as_deref())
            .await
            .into_response(),
        _ => redirect_home().await.into_response(),
    }
}

async fn create_student(
    state: &AppState,
    name: &str,
    age: &str,
    department: &str,
) -> Result<Redirect, AppError> {
    let student = validate_new_student(name, age, department)?;
    let id = state
        .students
        .insert(&student)
        .await
        .map_err(|e| AppError::from_store(Action::Add, e))?;
    info!(student_id = id, "student added");
    Ok(Redirect::to(
        &BannerQuery::success("Student added successfully").location(),
    ))
}

async fn remove_student(state: &AppState, raw_id: Option<&str>) -> Result<Redirect, AppError> {
    let id = parse_student_id(raw_id)?;
    state
        .students
        .delete_by_id(id)
        .await
        .map_err(|e| AppError::from_store(Action::Delete, e))?;
    info!(student_id = id, "student deleted");
    Ok(Redirect::to(
        &BannerQuery::success("Student deleted successfully").location(),
    ))
}

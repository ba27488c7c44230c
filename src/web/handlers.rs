use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::export::csv::{EXPORT_FILENAME, events_to_csv};
use crate::models::event::Event;
use crate::models::event_type::EventType;
use crate::web::session::{self, SessionUser};
use crate::web::{AppState, views};
use axum::Form;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse, Redirect, Response};
use chrono::Local;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginForm {
    pub nombre: String,
}

#[derive(Deserialize)]
pub struct ClockForm {
    pub tipo: String,
}

/// GET /
pub async fn login_form() -> Html<String> {
    views::login_page()
}

/// POST / — trim the name; an empty name re-shows the form without creating
/// a user or a session.
pub async fn login_submit(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    let name = form.nombre.trim();
    if name.is_empty() {
        return Ok(views::login_page().into_response());
    }

    let db = state.db()?;
    queries::ensure_user(&db.conn, name)?;
    drop(db);

    tracing::info!(user = name, "login");
    let cookie = session::session_cookie(&state.secret, name);
    Ok(([(header::SET_COOKIE, cookie)], Redirect::to("/fichar")).into_response())
}

/// GET /fichar
pub async fn clock_form(user: SessionUser) -> Html<String> {
    views::clock_page(&user.0)
}

/// POST /fichar — append one event with the server-assigned current
/// date and time, then redirect back to the form.
pub async fn clock_submit(
    State(state): State<AppState>,
    user: SessionUser,
    Form(form): Form<ClockForm>,
) -> AppResult<Response> {
    let kind = EventType::from_db_str(&form.tipo)
        .ok_or_else(|| AppError::InvalidEventType(form.tipo.clone()))?;

    let now = Local::now();
    let event = Event::new(user.0.clone(), kind, now.date_naive(), now.time());

    let db = state.db()?;
    queries::insert_event(&db.conn, &event)?;
    drop(db);

    tracing::info!(user = %user.0, tipo = kind.to_db_str(), "clock event");
    Ok(Redirect::to("/fichar").into_response())
}

/// GET /tabla — flat chronological table of everyone's events.
pub async fn events_table(
    State(state): State<AppState>,
    _user: SessionUser,
) -> AppResult<Html<String>> {
    let events = queries::load_all_by_date(&state.db()?.conn)?;
    Ok(views::table_page(&events))
}

/// GET /resumen — run the aggregator over the full log.
pub async fn summary(
    State(state): State<AppState>,
    _user: SessionUser,
) -> AppResult<Html<String>> {
    let events = queries::load_all_by_user(&state.db()?.conn)?;
    let summaries = crate::core::summary::summarize(&events);
    Ok(views::summary_page(&summaries))
}

/// GET /exportar — all raw events as a CSV attachment.
pub async fn export_csv(
    State(state): State<AppState>,
    _user: SessionUser,
) -> AppResult<Response> {
    let events = queries::load_all_by_user(&state.db()?.conn)?;
    let body = events_to_csv(&events)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
            ),
        ],
        body,
    )
        .into_response())
}

/// GET /logout — clears the cookie whether or not a valid session came in.
pub async fn logout(user: Option<SessionUser>) -> Response {
    if let Some(user) = &user {
        tracing::info!(user = %user.0, "logout");
    }
    ([(header::SET_COOKIE, session::clear_cookie())], Redirect::to("/")).into_response()
}

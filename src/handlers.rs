// src/handlers.rs

use crate::app::AppState;
use crate::error::{LogviewError, Result};
use crate::models::{Bookmark, Channel, Log};
use crate::{calendar, db, refresh, render};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use chrono::{NaiveDate, Utc};
use rusqlite::Connection;

/// Runs a batch of queries on a worker thread; rusqlite is blocking.
async fn with_db<T, F>(state: &AppState, queries: F) -> Result<T>
where
    F: FnOnce(&Connection) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let db_path = state.config.db_path.clone();
    tokio::task::spawn_blocking(move || {
        let conn = db::open(&db_path)?;
        queries(&conn)
    })
    .await?
}

fn redirect(to: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, to.to_string())], ()).into_response()
}

fn not_found(what: impl Into<String>) -> LogviewError {
    LogviewError::NotFound(what.into())
}

/// GET /. With a single archived channel the listing is pointless, go
/// straight to it.
pub async fn list_channels(State(state): State<AppState>) -> Result<Response> {
    refresh::trigger(state.config.update_logs_cmd.as_deref());

    let channels = with_db(&state, |conn| db::all_channels(conn)).await?;
    if let [channel] = channels.as_slice() {
        return Ok(redirect(&channel.url()));
    }
    Ok(Html(render::channel_list(&channels)).into_response())
}

/// GET /{name}/. Jump to the channel's most recent log.
pub async fn channel_index(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response> {
    refresh::trigger(state.config.update_logs_cmd.as_deref());

    let (channel, latest) = with_db(&state, move |conn| {
        let channel = db::channel_by_name(conn, &name)?
            .ok_or_else(|| not_found(format!("channel {name}")))?;
        let latest = db::latest_log(conn, channel.id)?;
        Ok((channel, latest))
    })
    .await?;

    match latest {
        Some(log) => Ok(redirect(&log.url(&channel.name))),
        None => Ok(Html(render::empty_channel(&channel)).into_response()),
    }
}

/// GET /{name}/{year}/{month}/{day}/
pub async fn show_log(
    State(state): State<AppState>,
    Path((name, year, month, day)): Path<(String, String, String, String)>,
) -> Result<Response> {
    refresh::trigger(state.config.update_logs_cmd.as_deref());

    let date = parse_date(&year, &month, &day)
        .ok_or_else(|| not_found(format!("log {name}/{year}/{month}/{day}")))?;

    let (channel, log, dates) = with_db(&state, move |conn| {
        let channel = db::channel_by_name(conn, &name)?
            .ok_or_else(|| not_found(format!("channel {name}")))?;
        let log = db::log_by_date(conn, channel.id, date)?
            .ok_or_else(|| not_found(format!("log {name}/{date}")))?;
        let (start, end) = calendar::month_window(date);
        let dates = db::log_dates_between(conn, channel.id, start, end)?;
        Ok((channel, log, dates))
    })
    .await?;

    let cacheable = calendar::cacheable(log.updated, Utc::now(), state.config.fresh_threshold_secs);
    Ok(Html(render::log_page(
        &channel,
        &log,
        &dates,
        state.config.cache_timeout_secs,
        cacheable,
    ))
    .into_response())
}

/// GET /{name}/bookmarks/
pub async fn bookmark_index(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response> {
    refresh::trigger(state.config.update_logs_cmd.as_deref());

    let (channel, bookmarks) = with_db(&state, move |conn| {
        let channel = db::channel_by_name(conn, &name)?
            .ok_or_else(|| not_found(format!("channel {name}")))?;
        let bookmarks = db::bookmarks_for_channel(conn, channel.id)?;
        Ok((channel, bookmarks))
    })
    .await?;

    Ok(Html(render::bookmark_list(&channel, &bookmarks)).into_response())
}

/// GET /{name}/bookmarks/{path}. Resolves a saved deep link to its log,
/// anchored at the bookmarked line when there is one.
pub async fn bookmark_show(
    State(state): State<AppState>,
    Path((name, path)): Path<(String, String)>,
) -> Result<Response> {
    refresh::trigger(state.config.update_logs_cmd.as_deref());

    let (channel, bookmark, log) = with_db(&state, move |conn| {
        let channel = db::channel_by_name(conn, &name)?
            .ok_or_else(|| not_found(format!("channel {name}")))?;
        let (bookmark, log) = db::bookmark_by_path(conn, channel.id, &path)?
            .ok_or_else(|| not_found(format!("bookmark {name}/{path}")))?;
        Ok((channel, bookmark, log))
    })
    .await?;

    Ok(redirect(&bookmark_target(&channel, &bookmark, &log)))
}

fn bookmark_target(channel: &Channel, bookmark: &Bookmark, log: &Log) -> String {
    let mut target = log.url(&channel.name);
    if let Some(line) = bookmark.line {
        target.push_str(&format!("#L{line}"));
    }
    target
}

/// GET /login. The OpenID flow itself lives outside this server.
pub async fn login(State(state): State<AppState>) -> Response {
    refresh::trigger(state.config.update_logs_cmd.as_deref());
    redirect(&state.config.openid_url)
}

/// GET /logout. Drops the session cookie and goes back to the listing.
pub async fn logout(State(state): State<AppState>) -> Response {
    refresh::trigger(state.config.update_logs_cmd.as_deref());
    (
        StatusCode::FOUND,
        [
            (
                header::SET_COOKIE,
                "session=; Path=/; Max-Age=0".to_string(),
            ),
            (header::LOCATION, "/".to_string()),
        ],
        (),
    )
        .into_response()
}

fn parse_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

// src/render.rs
//
// Page rendering. Pages are small enough that they are assembled as plain
// strings; every value interpolated into markup goes through `escape`.

use crate::models::{Bookmark, Channel, Log};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fmt::Write;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn page(title: &str, body_attrs: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n\
         <body{}>\n{}</body>\n</html>\n",
        escape(title),
        body_attrs,
        body
    )
}

pub fn channel_list(channels: &[Channel]) -> String {
    let mut body = String::from("<h1>Channels</h1>\n");
    if channels.is_empty() {
        body.push_str("<p>No channels archived yet.</p>\n");
    } else {
        body.push_str("<ul class=\"channels\">\n");
        for channel in channels {
            let _ = writeln!(
                body,
                "<li><a href=\"{}\">{}</a></li>",
                channel.url(),
                escape(&channel.name)
            );
        }
        body.push_str("</ul>\n");
    }
    page("Channels", "", &body)
}

pub fn empty_channel(channel: &Channel) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>No logs archived for this channel yet.</p>\n",
        escape(&channel.name)
    );
    page(&channel.name, "", &body)
}

/// The log page: month navigation over the dates that have logs, then the
/// transcript with one `L<n>` anchor per line so bookmarks can deep-link.
pub fn log_page(
    channel: &Channel,
    log: &Log,
    dates: &BTreeSet<NaiveDate>,
    cache_timeout_secs: u64,
    cacheable: bool,
) -> String {
    let title = format!("{} {}", channel.name, log.date);
    let mut body = format!(
        "<h1>{} {}</h1>\n",
        escape(&channel.name),
        log.date
    );

    body.push_str("<nav class=\"calendar\">\n");
    for date in dates {
        let marker = if *date == log.date { " class=\"current\"" } else { "" };
        let _ = writeln!(
            body,
            "<a{} href=\"/{}/{}/\">{}</a>",
            marker,
            escape(&channel.name),
            date.format("%Y/%m/%d"),
            date
        );
    }
    body.push_str("</nav>\n");

    body.push_str("<ol class=\"log\">\n");
    for (number, line) in log.content.lines().enumerate() {
        let _ = writeln!(
            body,
            "<li id=\"L{}\">{}</li>",
            number + 1,
            escape(line)
        );
    }
    body.push_str("</ol>\n");

    let body_attrs = format!(
        " data-cacheable=\"{}\" data-cache-timeout=\"{}\"",
        cacheable, cache_timeout_secs
    );
    page(&title, &body_attrs, &body)
}

pub fn bookmark_list(channel: &Channel, bookmarks: &[(Bookmark, NaiveDate)]) -> String {
    let title = format!("{} bookmarks", channel.name);
    let mut body = format!("<h1>{} bookmarks</h1>\n", escape(&channel.name));
    if bookmarks.is_empty() {
        body.push_str("<p>No bookmarks for this channel yet.</p>\n");
    } else {
        body.push_str("<ul class=\"bookmarks\">\n");
        for (bookmark, date) in bookmarks {
            let _ = writeln!(
                body,
                "<li><a href=\"/{}/bookmarks/{}\">{}</a> <span class=\"date\">{}</span></li>",
                escape(&channel.name),
                escape(&bookmark.path),
                escape(&bookmark.path),
                date
            );
        }
        body.push_str("</ul>\n");
    }
    page(&title, "", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn channel() -> Channel {
        Channel {
            id: 1,
            name: "rust".to_string(),
        }
    }

    fn log(date: NaiveDate, content: &str) -> Log {
        Log {
            id: 1,
            channel_id: 1,
            date,
            updated: Utc::now(),
            content: content.to_string(),
        }
    }

    #[test]
    fn markup_in_log_lines_is_escaped() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
        let html = log_page(
            &channel(),
            &log(date, "<script>alert(1)</script>"),
            &BTreeSet::new(),
            300,
            true,
        );
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn log_lines_get_line_anchors() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
        let html = log_page(&channel(), &log(date, "one\ntwo\nthree"), &BTreeSet::new(), 300, true);
        assert!(html.contains("<li id=\"L1\">one</li>"));
        assert!(html.contains("<li id=\"L3\">three</li>"));
    }

    #[test]
    fn log_page_carries_cache_hints() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
        let html = log_page(&channel(), &log(date, "x"), &BTreeSet::new(), 300, false);
        assert!(html.contains("data-cacheable=\"false\""));
        assert!(html.contains("data-cache-timeout=\"300\""));
    }

    #[test]
    fn calendar_links_every_date_in_the_window() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
        let mut dates = BTreeSet::new();
        dates.insert(NaiveDate::from_ymd_opt(2019, 12, 2).unwrap());
        dates.insert(date);
        let html = log_page(&channel(), &log(date, "x"), &dates, 300, true);
        assert!(html.contains("href=\"/rust/2019/12/02/\""));
        assert!(html.contains("href=\"/rust/2020/01/15/\""));
    }

    #[test]
    fn channel_listing_links_each_channel() {
        let channels = vec![
            channel(),
            Channel {
                id: 2,
                name: "python".to_string(),
            },
        ];
        let html = channel_list(&channels);
        assert!(html.contains("href=\"/rust/\""));
        assert!(html.contains("href=\"/python/\""));
    }
}

use crate::display::DisplayConfig;
use crate::feed::{ActivityFeedModel, FilterSelection, Icon};
use crate::models::{ActivityRecord, ShowRecord};
use crate::view::DisplayState;

pub fn render_index() -> String {
    page(
        "Dashboard",
        r#"<header>
      <h1>Dashboard</h1>
      <p class="subtitle">What I have been building and watching.</p>
    </header>
    <nav class="panel">
      <a class="stat link" href="/github"><span class="label">GitHub</span><span class="value">Activity</span></a>
      <a class="stat link" href="/shows"><span class="label">Trakt</span><span class="value">Shows</span></a>
    </nav>"#,
    )
}

pub fn render_activity_page(model: &ActivityFeedModel, display: &DisplayConfig) -> String {
    let counts = model.counts();
    let mut body = String::from(
        r#"<header>
      <h1>GitHub Activity</h1>
    </header>
    <section class="panel">"#,
    );

    for (label, value) in [
        ("Total Activities", counts.total),
        ("Push Events", counts.push),
        ("Creates", counts.create),
        ("Issues", counts.issues),
    ] {
        body.push_str(&format!(
            r#"
      <div class="stat"><span class="label">{label}</span><span class="value">{value}</span></div>"#
        ));
    }
    body.push_str("\n    </section>\n    <nav class=\"tabs\">");

    for selection in FilterSelection::ALL {
        let class = if selection == model.selection() { "tab active" } else { "tab" };
        body.push_str(&format!(
            r#"
      <a class="{class}" href="/github?filter={}">{}</a>"#,
            selection.as_str(),
            selection.label()
        ));
    }
    body.push_str("\n    </nav>\n    <section class=\"list\">");

    match DisplayState::from_records(model.filtered()) {
        DisplayState::Ready(records) => {
            for record in records {
                body.push_str(&render_activity(model.icon_for(&record.kind), record, display));
            }
        }
        DisplayState::Empty | DisplayState::LoadFailure(_) => {
            body.push_str(&empty_feed_message(model))
        }
    }
    body.push_str("\n    </section>");

    page("GitHub Activity", &body)
}

fn empty_feed_message(model: &ActivityFeedModel) -> String {
    let message = match model.selection() {
        _ if model.is_empty() => "No recent activity.".to_string(),
        FilterSelection::All => "No recent activity.".to_string(),
        selection => format!("No {} events.", selection.label()),
    };
    format!(r#"<p class="no-content-message">{message}</p>"#)
}

fn render_activity(icon: Icon, record: &ActivityRecord, display: &DisplayConfig) -> String {
    let icon = icon
        .name()
        .map(|name| format!(r#"<span class="icon icon-{name}" title="{name}"></span>"#))
        .unwrap_or_default();
    let when = record
        .timestamp
        .map(|timestamp| {
            format!(
                r#"<span class="meta">{}</span>"#,
                escape(&display.format_timestamp(timestamp))
            )
        })
        .unwrap_or_default();

    let mut out = format!(
        r#"
      <article class="card">
        <div class="card-header"><div>{icon}<span class="badge">{}</span></div>{when}</div>
        <a class="repo" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        escape(record.kind.label()),
        escape(&record.url),
        escape(&record.repository)
    );

    let commits = record.commits();
    if !commits.is_empty() {
        out.push_str("\n        <ul class=\"commits\">");
        for commit in commits {
            out.push_str(&format!(
                r#"<li><a href="{}" target="_blank" rel="noopener noreferrer">{}</a></li>"#,
                escape(&commit.url),
                escape(&commit.message)
            ));
        }
        out.push_str("</ul>");
    }

    if let Some((action, issue)) = record.issue() {
        out.push_str(&format!(
            r#"
        <p class="detail">{}: <a href="{}" target="_blank" rel="noopener noreferrer">{}</a></p>"#,
            escape(action.unwrap_or("updated")),
            escape(&issue.url),
            escape(&issue.title)
        ));
    } else if let Some(action) = record.action() {
        out.push_str(&format!("\n        <p class=\"detail\">{}</p>", escape(action)));
    }

    if let Some((ref_type, git_ref)) = record.created_ref() {
        let git_ref = git_ref
            .map(|git_ref| format!(" <code>{}</code>", escape(git_ref)))
            .unwrap_or_default();
        out.push_str(&format!(
            "\n        <p class=\"detail\">created {}{git_ref}</p>",
            escape(ref_type)
        ));
    }
    out.push_str("\n      </article>");
    out
}

pub fn render_shows_page(view: &DisplayState<ShowRecord>, display: &DisplayConfig) -> String {
    let content = match view {
        DisplayState::LoadFailure(message) => format!(
            r#"<div class="error-message">Error loading shows: {}</div>"#,
            escape(message)
        ),
        DisplayState::Empty => {
            r#"<div class="no-content-message">No shows found. Start watching some shows to see them here!</div>"#
                .to_string()
        }
        DisplayState::Ready(shows) => {
            let cards: String = shows.iter().map(|show| render_show(show, display)).collect();
            format!("<section class=\"media-grid\">{cards}\n    </section>")
        }
    };
    page(
        "Shows",
        &format!("<header>\n      <h1>Shows</h1>\n    </header>\n    {content}"),
    )
}

fn render_show(show: &ShowRecord, display: &DisplayConfig) -> String {
    let title = escape(&show.title);
    let poster = match show.poster_url.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => format!(
            r#"<div class="media-poster"><img src="{}" alt="{title} poster"></div>"#,
            escape(url)
        ),
        None => format!(
            r#"<div class="media-poster placeholder-poster" aria-label="Placeholder for {title}"></div>"#
        ),
    };
    let year = show
        .year
        .map(|year| format!("<span>{year} &bull; </span>"))
        .unwrap_or_default();
    let watched = show
        .last_watched_at
        .map(|watched| {
            format!(
                r#"<div class="media-meta">Last watched: {}</div>"#,
                escape(&display.format_date(watched))
            )
        })
        .unwrap_or_default();
    let genres = if show.genres.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="media-meta">{}</div>"#,
            escape(&show.genres.join(", "))
        )
    };

    format!(
        r#"
      <article class="media-card">{poster}<div class="media-info"><h3 class="media-title">{title}</h3><div class="media-meta">{year}<span>{} episodes watched</span></div>{watched}{genres}</div></article>"#,
        show.episodes_watched
    )
}

fn page(title: &str, body: &str) -> String {
    PAGE_HTML
        .replace("{{TITLE}}", &escape(title))
        .replace("{{BODY}}", body)
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg: #16181d;
      --card: #1f2229;
      --ink: #e8e6e3;
      --muted: #9a968f;
      --accent: #2f7cf6;
      --border: rgba(255, 255, 255, 0.08);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    main {
      width: min(960px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    a {
      color: inherit;
    }

    .subtitle,
    .meta,
    .media-meta {
      color: var(--muted);
      font-size: 0.9rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat,
    .card,
    .media-card {
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 16px;
      padding: 18px;
    }

    .stat {
      display: grid;
      gap: 8px;
      text-decoration: none;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
    }

    .tabs {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
      padding: 12px;
      background: var(--card);
      border-radius: 12px;
    }

    .tab {
      padding: 8px 16px;
      border-radius: 8px;
      background: #2a2e37;
      text-decoration: none;
    }

    .tab.active {
      background: var(--accent);
      color: white;
    }

    .list {
      display: grid;
      gap: 16px;
    }

    .card-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      margin-bottom: 12px;
    }

    .badge {
      background: var(--accent);
      color: white;
      font-size: 0.8rem;
      padding: 2px 8px;
      border-radius: 6px;
    }

    .icon {
      display: inline-block;
      width: 1rem;
      height: 1rem;
      margin-right: 8px;
      border-radius: 50%;
      border: 2px solid var(--muted);
      vertical-align: middle;
    }

    .repo {
      font-size: 1.1rem;
      font-weight: 600;
      text-decoration: none;
    }

    .commits {
      list-style: none;
      margin: 12px 0 0;
      padding: 0;
    }

    .commits li {
      border-left: 2px solid var(--border);
      padding: 6px 0 6px 14px;
      font-size: 0.9rem;
    }

    .media-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
      gap: 18px;
    }

    .media-poster img,
    .placeholder-poster {
      width: 100%;
      aspect-ratio: 2 / 3;
      object-fit: cover;
      border-radius: 10px;
      background: #333333;
    }

    .media-title {
      margin: 10px 0 6px;
      font-size: 1rem;
    }

    .error-message {
      color: #f2705f;
    }

    .no-content-message {
      color: var(--muted);
    }
  </style>
</head>
<body>
  <main>
    {{BODY}}
  </main>
</body>
</html>
"#;

pub const PAGE_TITLE: &str = "SDN Search";
pub const NAV_STATS_ID: &str = "nav-stats";
pub const NAV_STATS_PLACEHOLDER: &str = r#"<span class="stat-item">Loading stats...</span>"#;

pub fn render_page(title: &str, nav_stats: Option<&str>, head: &str, overlays: &str) -> String {
    let nav_stats = nav_stats
        .map(|html| format!(r#"<div id="{NAV_STATS_ID}" class="nav-stats">{html}</div>"#))
        .unwrap_or_default();
    PAGE_HTML
        .replace("{{TITLE}}", &escape_html(title))
        .replace("{{HEAD}}", head)
        .replace("{{NAV_STATS}}", &nav_stats)
        .replace("{{OVERLAYS}}", overlays)
}

pub fn escape_html(text: &str) -> String {
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

pub const ANIMATIONS_CSS: &str = r#"
    @keyframes slideIn {
      from {
        transform: translateX(100%);
        opacity: 0;
      }
      to {
        transform: translateX(0);
        opacity: 1;
      }
    }

    @keyframes slideOut {
      from {
        transform: translateX(0);
        opacity: 1;
      }
      to {
        transform: translateX(100%);
        opacity: 0;
      }
    }
"#;

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    :root {
      --bg: #f8fafc;
      --ink: #1e293b;
      --muted: #64748b;
      --nav: #1e3a5f;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: -apple-system, "Segoe UI", Roboto, sans-serif;
    }

    .navbar {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
      padding: 1rem 2rem;
      background: var(--nav);
      color: white;
    }

    .navbar h1 {
      margin: 0;
      font-size: 1.25rem;
    }

    .nav-stats {
      display: flex;
      gap: 1.5rem;
      font-size: 0.9rem;
    }

    .stat-item strong {
      color: #cbd5e1;
      font-weight: 500;
    }

    main {
      padding: 2rem;
    }
  </style>
{{HEAD}}</head>
<body>
  <nav class="navbar">
    <h1>{{TITLE}}</h1>
    {{NAV_STATS}}
  </nav>
  <main></main>
{{OVERLAYS}}</body>
</html>
"#;

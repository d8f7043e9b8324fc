//! Server-rendered HTML pages

mod detail;
mod index;

pub use detail::render_detail_page;
pub use index::render_index_page;

use axum::http::StatusCode;

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap page content in the shared document shell.
/// `title` is escaped here; `body` must already be safe HTML.
fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        * {{
            box-sizing: border-box;
        }}
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            line-height: 1.6;
            margin: 0;
        }}
        header {{
            background-color: #2a2a2a;
            border-bottom: 1px solid #3a3a3a;
            padding: 16px 20px;
        }}
        header a {{
            color: #4a9eff;
            text-decoration: none;
            font-size: 22px;
            font-weight: 600;
        }}
        main {{
            padding: 20px;
            max-width: 900px;
        }}
        h1, h2 {{
            color: #4a9eff;
        }}
        a {{
            color: #4a9eff;
        }}
        ul {{
            padding-left: 20px;
        }}
        .error {{
            background: #3a1a1a;
            border: 1px solid #ef4444;
            color: #fca5a5;
            padding: 10px 14px;
            border-radius: 4px;
        }}
        .empty {{
            color: #888;
        }}
        .muted {{
            color: #888;
            font-family: 'Courier New', monospace;
            font-size: 13px;
        }}
        form {{
            margin: 10px 0 20px;
        }}
        input[type=text], textarea {{
            background: #2a2a2a;
            color: #e0e0e0;
            border: 1px solid #3a3a3a;
            border-radius: 4px;
            padding: 6px 8px;
        }}
        button {{
            padding: 6px 16px;
            background: #4a9eff;
            color: white;
            border: none;
            border-radius: 4px;
            font-weight: 600;
            cursor: pointer;
        }}
        button:hover {{
            background: #3a8eef;
        }}
        .comment {{
            border-left: 3px solid #3a3a3a;
            padding: 4px 12px;
            margin-bottom: 10px;
        }}
    </style>
</head>
<body>
    <header><a href="/">jack</a></header>
    <main>
{body}
    </main>
</body>
</html>
"#,
        title = escape_html(title),
        body = body,
    )
}

/// Error banner, or nothing when there is no message
fn error_banner(message: Option<&str>) -> String {
    match message {
        Some(message) => format!(
            r#"        <p class="error">{}</p>
"#,
            escape_html(message)
        ),
        None => String::new(),
    }
}

/// Page shown for 404 and 500 responses
pub fn render_error_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        r#"        <h1>{code} {reason}</h1>
        <p class="empty">{message}</p>
        <p><a href="/">Back to channel list</a></p>
"#,
        code = status.as_u16(),
        reason = reason,
        message = escape_html(message),
    );
    page(reason, &body)
}

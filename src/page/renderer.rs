//! Chronicles page renderer
//!
//! Renders the post list to HTML. Every post field passes through
//! `escape_html` before insertion; the feed and the submission form are
//! both untrusted sources.

use crate::domain::entities::Post;

/// Render the post list section. An empty list renders a placeholder
/// instead of post entries.
pub fn render_posts(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "<p class=\"meta\">No posts yet — use the form below to add one.</p>\n".to_string();
    }

    let mut buf = String::new();
    for post in posts {
        buf.push_str(&render_post(post));
    }
    buf
}

fn render_post(post: &Post) -> String {
    let mut meta = format_date(post);
    if let Some(from) = &post.from {
        meta.push_str(" • ");
        meta.push_str(&escape_html(from));
    }

    format!(
        "<div class=\"post\">\n\
         <h4>{}</h4>\n\
         <div class=\"meta\">{}</div>\n\
         <div class=\"content\">{}</div>\n\
         </div>\n",
        escape_html(&post.title),
        meta,
        escape_html(&post.content),
    )
}

/// Display form of the post date; unparsable dates are shown verbatim.
fn format_date(post: &Post) -> String {
    match post.parsed_date() {
        Some(date) => date.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => escape_html(&post.date),
    }
}

/// Render the full chronicles page: post list plus the submission form.
pub fn render_page(posts: &[Post]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>The Accountant Chronicles</title>
</head>
<body>
    <header>
        <h1>The Accountant Chronicles</h1>
        <p class="meta">Dispatches from the ledger.</p>
    </header>
    <section id="chronicles-posts">
{posts_html}    </section>
    <section id="chronicles-form">
        <h3>Add a post</h3>
        <form method="post" action="/posts">
            <input type="text" name="title" placeholder="Title">
            <input type="text" name="from" placeholder="From (optional)">
            <textarea name="content" placeholder="Content"></textarea>
            <button type="submit">Publish</button>
        </form>
    </section>
</body>
</html>
"#,
        posts_html = render_posts(posts),
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

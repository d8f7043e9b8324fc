//! Channel detail page: videos, comments and the forms that add them

use jack_common::db::{Channel, Comment, CommentTarget, Video};

use super::{error_banner, escape_html, page};
use crate::validation::VIDEO_URL_PREFIX;

pub fn render_detail_page(
    channel: &Channel,
    videos: &[Video],
    comments: &[Comment],
    error: Option<&str>,
) -> String {
    let channel_id = escape_html(&channel.channel_id);

    let video_items: String = videos.iter().map(render_video).collect();
    let video_listing = if video_items.is_empty() {
        r#"        <p class="empty">No videos yet.</p>"#.to_string()
    } else {
        format!("        <ul>\n{}        </ul>", video_items)
    };

    let comment_items: String = comments.iter().map(render_comment).collect();
    let comment_listing = if comment_items.is_empty() {
        r#"        <p class="empty">No comments yet.</p>"#.to_string()
    } else {
        comment_items
    };

    let body = format!(
        r#"        <h1>{name}</h1>
        <p class="muted">{channel_id}</p>
{error}
        <h2>Videos</h2>
{video_listing}
        <form method="post" action="/{channel_id}/">
            <input type="text" name="url" placeholder="{prefix}..." size="50" required>
            <button type="submit">Add video</button>
        </form>

        <h2>Comments</h2>
{comment_listing}
        <form method="post" action="/channel/{channel_id}/comment/">
            <textarea name="comment" rows="3" cols="60" placeholder="Comment on this channel" required></textarea>
            <button type="submit">Post</button>
        </form>
        <p><a href="/">Back to channel list</a></p>
"#,
        name = escape_html(&channel.channel_nm),
        channel_id = channel_id,
        error = error_banner(error),
        video_listing = video_listing,
        prefix = escape_html(VIDEO_URL_PREFIX),
        comment_listing = comment_listing,
    );

    page(&channel.channel_nm, &body)
}

fn render_video(video: &Video) -> String {
    let video_id = escape_html(&video.video_id);
    format!(
        r#"            <li>
                <a href="{prefix}{video_id}" target="_blank" rel="noopener">{video_id}</a>
                <form method="post" action="/video/{video_id}/comment/">
                    <input type="text" name="comment" placeholder="Comment on this video" required>
                    <button type="submit">Post</button>
                </form>
            </li>
"#,
        prefix = escape_html(VIDEO_URL_PREFIX),
        video_id = video_id,
    )
}

fn render_comment(comment: &Comment) -> String {
    let about = match &comment.target {
        CommentTarget::Channel(_) => "channel".to_string(),
        CommentTarget::Video(video_id) => format!("video {}", escape_html(video_id)),
    };
    format!(
        r#"        <div class="comment">
            <p>{text}</p>
            <p class="muted">{about} &middot; {when}</p>
        </div>
"#,
        text = escape_html(&comment.comment),
        about = about,
        when = comment.reg_datetime.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

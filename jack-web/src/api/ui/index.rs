//! Channel list page

use jack_common::db::Channel;

use super::{error_banner, escape_html, page};

/// Shown instead of the list when no channel is registered
pub const EMPTY_CHANNEL_LIST_MESSAGE: &str = "No Recomended Youtuber.";

pub fn render_index_page(channels: &[Channel], error: Option<&str>) -> String {
    let listing = if channels.is_empty() {
        format!(r#"        <p class="empty">{}</p>"#, EMPTY_CHANNEL_LIST_MESSAGE)
    } else {
        let items: String = channels
            .iter()
            .map(|channel| {
                format!(
                    r#"            <li><a href="/{id}/">{name}</a> <span class="muted">{id}</span></li>
"#,
                    id = escape_html(&channel.channel_id),
                    name = escape_html(&channel.channel_nm),
                )
            })
            .collect();
        format!("        <ul>\n{}        </ul>", items)
    };

    let body = format!(
        r#"        <h1>Recommended YouTubers</h1>
{error}{listing}
        <h2>Add channel</h2>
        <form method="post" action="/">
            <input type="text" name="channel_id" placeholder="Channel ID" required>
            <input type="text" name="channel_nm" placeholder="Channel name">
            <button type="submit">Add</button>
        </form>
"#,
        error = error_banner(error),
        listing = listing,
    );

    page("Recommended YouTubers", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_message() {
        let html = render_index_page(&[], None);
        assert!(html.contains(EMPTY_CHANNEL_LIST_MESSAGE));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_channels_linked_and_escaped() {
        let channels = vec![
            Channel::new("TokaiOnAir", "東海オンエア"),
            Channel::new("evil", "<b>x</b>"),
        ];
        let html = render_index_page(&channels, Some("Invalid channel ID."));

        assert!(html.contains(r#"<a href="/TokaiOnAir/">東海オンエア</a>"#));
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(html.contains("Invalid channel ID."));
        assert!(!html.contains(EMPTY_CHANNEL_LIST_MESSAGE));
    }
}

//! HTML for the feed page.

use crate::{
    constants::MAX_POST_LENGTH,
    dto::FeedPage,
    sanitize::escape_html,
};

/// Render the feed, oldest post first, numbered from 1.
///
/// Post content is stored already escaped and is emitted verbatim.
pub fn render_feed(page: &FeedPage<'_>) -> String {
    let mut html = String::with_capacity(2048 + page.posts.len() * 256);

    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>BBS</title>\n\
         <link rel=\"stylesheet\" href=\"/static/style.css\">\n\
         </head>\n<body>\n<main>\n",
    );

    html.push_str(&format!(
        "<form method=\"post\" action=\"/\">\n\
         <textarea name=\"content\" maxlength=\"{max}\" placeholder=\"{alert}\"></textarea>\n\
         <div class=\"controls\">\n\
         <span class=\"posts-left\">{left} posts left today</span>\n\
         <button type=\"submit\">Post</button>\n\
         </div>\n</form>\n",
        max = MAX_POST_LENGTH,
        alert = escape_html(page.top_alert),
        left = page.posts_left,
    ));

    html.push_str("<ol class=\"feed\">\n");
    for (i, post) in page.posts.iter().enumerate() {
        html.push_str(&format!(
            "<li class=\"post\">\n\
             <header><span class=\"number\">#{number}</span> \
             <span class=\"name\">{name}</span> \
             <time datetime=\"{datetime}\">{time}</time></header>\n\
             <p>{content}</p>\n</li>\n",
            number = i + 1,
            name = escape_html(&post.name),
            datetime = post.time.to_rfc3339(),
            time = post.time.format("%Y-%m-%d %H:%M UTC"),
            content = post.content,
        ));
    }
    html.push_str("</ol>\n</main>\n</body>\n</html>\n");

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constants::TOP_ALERT, models::Post};
    use chrono::Utc;

    fn post(name: &str, content: &str) -> Post {
        Post {
            time: Utc::now(),
            name: name.to_string(),
            content: content.to_string(),
            ip: "127.0.0.1".to_string(),
        }
    }

    #[test]
    fn shows_alert_and_posts_left() {
        let html = render_feed(&FeedPage {
            posts: &[],
            posts_left: 7,
            top_alert: TOP_ALERT,
        });

        assert!(html.contains(TOP_ALERT));
        assert!(html.contains("7 posts left today"));
        assert!(html.contains("maxlength=\"400\""));
    }

    #[test]
    fn lists_posts_in_order() {
        let posts = [post("happy lion", "first"), post("sad tiger", "second")];
        let html = render_feed(&FeedPage {
            posts: &posts,
            posts_left: 10,
            top_alert: TOP_ALERT,
        });

        let first = html.find("first").unwrap();
        let second = html.find("second").unwrap();
        assert!(first < second);
        assert!(html.contains("#1</span> <span class=\"name\">happy lion"));
        assert!(html.contains("#2</span> <span class=\"name\">sad tiger"));
    }

    #[test]
    fn content_is_not_escaped_twice() {
        let posts = [post("happy lion", "&lt;b&gt;")];
        let html = render_feed(&FeedPage {
            posts: &posts,
            posts_left: 10,
            top_alert: TOP_ALERT,
        });

        assert!(html.contains("<p>&lt;b&gt;</p>"));
    }
}

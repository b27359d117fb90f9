use crate::{
    AppState,
    audit::escape_line_breaks,
    constants::TOP_ALERT,
    dto::{FeedPage, PostForm},
    extract::ClientIp,
    names::name_from_ip,
    sanitize::sanitize,
    views::render_feed,
};
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::{Html, Redirect},
};
use tracing::{debug, info};

/// GET /
pub async fn get_feed(State(state): State<AppState>, ClientIp(ip): ClientIp) -> Html<String> {
    let posts = state.board.snapshot();
    let page = FeedPage {
        posts: &posts,
        posts_left: state.board.posts_left(&ip),
        top_alert: TOP_ALERT,
    };

    Html(render_feed(&page))
}

/// POST /
/// Body: content=...
///
/// Always answers 303 to `/`, whether the post was stored, dropped by the
/// rate limit, or empty.
pub async fn create_post(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    form: Result<Form<PostForm>, FormRejection>,
) -> Redirect {
    let raw = match form {
        Ok(Form(form)) => form.content,
        Err(rejection) => {
            debug!("Unreadable post body from {}: {}", ip, rejection);
            String::new()
        }
    };

    let content = sanitize(&raw);
    if content.is_empty() {
        return Redirect::to("/");
    }

    info!(
        "{} ({}) said: {}",
        name_from_ip(&ip),
        ip,
        escape_line_breaks(content.as_str())
    );
    state.board.add_post(content, &ip);

    Redirect::to("/")
}

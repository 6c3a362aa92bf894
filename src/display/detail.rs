//! the single post view
use {
    super::{View, frame_bottom, frame_line, frame_rule, frame_top},
    crate::{models::Post, ui::state::DetailState, utils::wrap_words},
    std::fmt::Write,
};

/// render the detail screen for a given state
pub fn render_detail(state: &DetailState, view: &View) -> String {
    match state {
        DetailState::Loading => format!("{}\n", view.palette.subtle(view.messages.loading_post)),
        DetailState::NotFound => format!("{}\n", view.palette.dislike(view.messages.post_not_found)),
        DetailState::Loaded(post) => render_post(post, view),
    }
}

/// render every field of a post
pub fn render_post(post: &Post, view: &View) -> String {
    let mut out = String::new();
    let inner = view.inner_width();
    let p = &view.palette;
    let m = view.messages;

    for line in wrap_words(&post.title, view.width, None) {
        let _ = writeln!(out, "{}", p.title(&line));
    }

    let _ = writeln!(
        out,
        "{}   {}\n",
        p.subtle(&format!("{} #{}", m.post_id, post.id)),
        p.subtle(&format!("{} {}", m.user, post.user_id))
    );

    frame_top(&mut out, view, m.body_heading, |s| p.title(s));
    for line in wrap_words(&post.body, inner, None) {
        frame_line(&mut out, view, &p.text(&line));
    }
    frame_bottom(&mut out, view);

    out.push('\n');

    frame_top(&mut out, view, m.extra_heading, |s| p.title(s));
    frame_line(
        &mut out,
        view,
        &format!(
            "{}   {}",
            p.like(&format!(
                "{}{}: {}",
                view.icon("👍"),
                m.likes,
                post.reactions.likes
            )),
            p.dislike(&format!(
                "{}{}: {}",
                view.icon("👎"),
                m.dislikes,
                post.reactions.dislikes
            )),
        ),
    );
    frame_rule(&mut out, view);

    let tags = format!("{}: {}", m.tags, post.joined_tags());
    for line in wrap_words(&tags, inner, None) {
        frame_line(&mut out, view, &p.tag(&line));
    }
    frame_bottom(&mut out, view);

    out
}

//! the post list: one card per post
use {
    super::{View, frame_bottom, frame_line, frame_rule, frame_top},
    crate::{
        models::Post,
        ui::state::ListState,
        utils::{truncate_chars, wrap_words},
    },
    std::fmt::Write,
};

/// render the list screen for a given state
pub fn render_list(state: &ListState, view: &View) -> String {
    match state {
        ListState::Loading => format!("{}\n", view.palette.subtle(view.messages.loading_posts)),
        ListState::Empty => format!("{}\n", view.palette.subtle(view.messages.no_posts)),
        ListState::Loaded(posts) => {
            let mut out = String::new();
            let _ = writeln!(out, "{}\n", view.palette.title(view.messages.list_title));

            for post in posts {
                out.push_str(&render_card(post, view));
            }

            out
        }
    }
}

/// render a single post card
///
/// ```text
/// ┌─ #1 ──────────────
/// │ User ID: 7
/// ├───────────────────
/// │ title, cut to one line
/// │ body, cut to a few lines
/// │ Likes: 3   Dislikes: 1   [first tag]
/// └───────────────────
/// ```
pub fn render_card(post: &Post, view: &View) -> String {
    let mut out = String::new();
    let inner = view.inner_width();
    let p = &view.palette;

    frame_top(&mut out, view, &format!("#{}", post.id), |s| p.subtle(s));
    frame_line(
        &mut out,
        view,
        &p.primary(&format!(
            "{}{} {}",
            view.icon("👤"),
            view.messages.user_id,
            post.user_id
        )),
    );
    frame_rule(&mut out, view);
    frame_line(&mut out, view, &p.title(&truncate_chars(&post.title, inner)));

    for line in wrap_words(&post.body, inner, Some(view.body_lines.max(1))) {
        frame_line(&mut out, view, &p.text(&line));
    }

    frame_line(&mut out, view, &reaction_line(post, view));
    frame_bottom(&mut out, view);

    out
}

/// likes, dislikes and the highlighted tag
fn reaction_line(post: &Post, view: &View) -> String {
    let p = &view.palette;
    let tag = post.primary_tag().unwrap_or(view.messages.no_tag);

    let (likes, dislikes) = if view.icons {
        (
            format!("{}{}", view.icon("👍"), post.reactions.likes),
            format!("{}{}", view.icon("👎"), post.reactions.dislikes),
        )
    } else {
        (
            format!("{}: {}", view.messages.likes, post.reactions.likes),
            format!("{}: {}", view.messages.dislikes, post.reactions.dislikes),
        )
    };

    format!(
        "{}   {}   {}",
        p.like(&likes),
        p.dislike(&dislikes),
        p.tag(&format!("[{}]", tag))
    )
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{config::options::Language, models::Reactions, ui::themes::Palette},
    };

    fn strip(text: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(text.as_bytes())).unwrap()
    }

    fn post(id: i64, tags: &[&str]) -> Post {
        Post {
            id,
            title: format!("title {}", id),
            body: "His mother had always taught him not to ever think of himself as better than others."
                .to_string(),
            user_id: 7,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            reactions: Reactions {
                likes: 192,
                dislikes: 25,
            },
        }
    }

    #[test]
    fn test_card_contents() {
        let view = View::plain(Language::English);
        let card = render_card(&post(1, &["history", "crime"]), &view);

        assert!(card.starts_with("┌─ #1 "));
        assert!(card.contains("│ User ID: 7\n"));
        assert!(card.contains("│ title 1\n"));
        assert!(card.contains("│ Likes: 192   Dislikes: 25   [history]\n"));
    }

    #[test]
    fn test_card_body_is_cut_to_configured_lines() {
        let mut view = View::plain(Language::English);
        view.width = 30;
        view.body_lines = 2;

        let card = render_card(&post(1, &[]), &view);
        let body_lines: Vec<&str> = card
            .lines()
            .filter(|l| l.starts_with("│ ") && !l.contains("title") && !l.contains("User") && !l.contains("Likes"))
            .collect();

        assert_eq!(body_lines.len(), 2);
        assert!(body_lines[1].ends_with('…'));
        assert!(body_lines.iter().all(|l| l.chars().count() <= view.width));
    }

    #[test]
    fn test_card_without_tags() {
        let view = View::plain(Language::Spanish);
        let card = render_card(&post(3, &[]), &view);

        assert!(card.contains("[Sin Etiqueta]"));
        assert!(card.contains("Usuario ID: 7"));
    }

    #[test]
    fn test_card_icons() {
        let mut view = View::plain(Language::English);
        view.icons = true;
        let card = render_card(&post(1, &["x"]), &view);

        assert!(card.contains("👍 192   👎 25   [x]"));
        assert!(card.contains("👤 User ID: 7"));
    }

    #[test]
    fn test_list_states() {
        let view = View::plain(Language::English);

        assert_eq!(render_list(&ListState::Loading, &view), "Loading posts...\n");
        assert_eq!(render_list(&ListState::Empty, &view), "No posts found.\n");
    }

    #[test]
    fn test_list_keeps_order() {
        let view = View::plain(Language::English);
        let state = ListState::Loaded(vec![post(3, &[]), post(1, &[]), post(2, &[])]);
        let out = render_list(&state, &view);
        let ids: Vec<&str> = out
            .lines()
            .filter_map(|l| l.strip_prefix("┌─ "))
            .filter_map(|l| l.split_whitespace().next())
            .collect();

        assert_eq!(ids, vec!["#3", "#1", "#2"]);
    }

    #[test]
    fn test_colored_list_matches_plain_layout() {
        let plain = View::plain(Language::English);
        let colored = View {
            palette: Palette::rose_pine(),
            ..plain
        };
        let state = ListState::Loaded(vec![post(1, &["history"]), post(22, &[])]);

        let a = render_list(&state, &plain);
        let b = render_list(&state, &colored);

        assert_ne!(a, b);
        assert_eq!(strip(&b), a);

        for line in strip(&b).lines().filter(|l| l.starts_with(['┌', '├', '└'])) {
            assert_eq!(line.chars().count(), 72, "{:?}", line);
        }
    }
}

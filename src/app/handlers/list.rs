//! post list handling
use {
    super::{Action, Choice, Handlers},
    crate::utils::truncate_chars,
    color_eyre::Result,
};

impl Handlers {
    /// show the post list and ask what to open
    pub(crate) async fn show_posts(&mut self) -> Result<Action> {
        self.clear_screen()?;

        let spinner = self.spinner(self.view.messages.loading_posts)?;
        self.list.mount(self.api.as_ref()).await;
        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        let view = self.fitted_view();
        self.draw(&self.list.render(&view))?;

        if self.once {
            return Ok(Action::Exit);
        }

        let msgs = view.messages;
        let label_width = view.inner_width();
        let mut choices: Vec<Choice> = self
            .list
            .state()
            .posts()
            .iter()
            .enumerate()
            .filter_map(|(index, post)| {
                let route = self.list.select(index)?;
                let label = format!("#{} {}", post.id, post.title);
                Some(Choice::new(truncate_chars(&label, label_width), Action::Open(route)))
            })
            .collect();

        choices.push(Choice::new(msgs.reload, Action::Reload));
        choices.push(Choice::new(msgs.exit, Action::Exit));

        self.prompt(msgs.select_post, choices, Action::Exit)
    }
}

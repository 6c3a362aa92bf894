//! post detail handling
use {
    super::{Action, Choice, Handlers},
    color_eyre::Result,
};

impl Handlers {
    /// show one post and wait for the user to leave
    pub(crate) async fn show_post(&mut self, id: i64) -> Result<Action> {
        self.clear_screen()?;

        let spinner = self.spinner(self.view.messages.loading_post)?;
        self.detail.mount(id, self.api.as_ref()).await;
        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        let view = self.fitted_view();
        self.draw(&self.detail.render(&view))?;

        if self.once {
            return Ok(Action::Exit);
        }

        let msgs = view.messages;
        let choices = vec![
            Choice::new(msgs.back, Action::Back),
            Choice::new(msgs.reload, Action::Reload),
            Choice::new(msgs.exit, Action::Exit),
        ];

        self.prompt(msgs.detail_prompt, choices, Action::Back)
    }
}

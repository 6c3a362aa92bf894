//! logic handler stuff
mod detail;
mod list;

use {
    super::interrupt::InterruptHandler,
    crate::{
        client::PostsApi,
        display::View,
        getopt, opt_and,
        ui::{DetailScreen, ListScreen, Navigator, Route},
    },
    color_eyre::Result,
    crossterm::{
        cursor::MoveTo,
        execute,
        terminal::{self, Clear, ClearType},
    },
    indicatif::{ProgressBar, ProgressStyle},
    inquire::{InquireError, Select},
    std::{
        fmt,
        io::{Write, stdout},
        sync::Arc,
        time::Duration,
    },
    tracing::debug,
};

/// what the user asked for on a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    /// go to a screen
    Open(Route),
    /// go back one screen
    Back,
    /// fetch the current screen again
    Reload,
    /// quit
    Exit,
}

/// a labelled [`Action`] for a prompt
#[derive(Debug, Clone)]
pub(crate) struct Choice {
    /// what the prompt shows
    label: String,
    /// what picking it does
    action: Action,
}

impl Choice {
    /// make a new choice
    pub(crate) fn new(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// logic handlers
pub struct Handlers {
    /// where posts come from
    pub(crate) api: Arc<dyn PostsApi>,
    /// how to draw things
    pub(crate) view: View,
    /// the interruption handler
    pub(crate) interrupt: InterruptHandler,
    /// render the first screen and quit
    pub(crate) once: bool,
    /// the post list
    pub(crate) list: ListScreen,
    /// the post detail
    pub(crate) detail: DetailScreen,
}

impl Handlers {
    /// make a new set of handlers
    pub fn new(api: Arc<dyn PostsApi>, view: View, interrupt: InterruptHandler, once: bool) -> Self {
        Self {
            api,
            view,
            interrupt,
            once,
            list: ListScreen::new(),
            detail: DetailScreen::new(),
        }
    }

    /// see [`InterruptHandler::check_and_reset`]
    pub fn was_interrupted(&self) -> bool {
        self.interrupt.check_and_reset()
    }

    /// run the main loop, starting on `start`
    ///
    /// the post list is always at the bottom of the back stack
    ///
    /// # Errors
    ///
    /// returns an error if drawing or prompting fails
    pub async fn run_main_loop(&mut self, start: Route) -> Result<()> {
        let mut nav = Navigator::new(Route::Posts);
        if start != Route::Posts {
            nav.push(start);
        }

        loop {
            if self.was_interrupted() {
                debug!("interrupted, leaving");
                break;
            }

            let action = match nav.current() {
                Route::Posts => self.show_posts().await?,
                Route::Post { id } => self.show_post(id).await?,
            };

            match action {
                Action::Open(route) => nav.push(route),
                Action::Reload => self.leave(nav.current()),
                Action::Back => match nav.back() {
                    Some(left) => self.leave(left),
                    None => break,
                },
                Action::Exit => break,
            }
        }

        Ok(())
    }

    /// dismiss whatever screen `route` was showing
    fn leave(&mut self, route: Route) {
        match route {
            Route::Posts => self.list.dismiss(),
            Route::Post { .. } => self.detail.dismiss(),
        }
    }

    /// the view, narrowed to the terminal if there is one
    pub(crate) fn fitted_view(&self) -> View {
        match terminal::size() {
            Ok((cols, _)) => self.view.fit_width(cols as usize),
            Err(_) => self.view,
        }
    }

    /// clear the screen if enabled
    pub(crate) fn clear_screen(&self) -> Result<()> {
        if self.once {
            return Ok(());
        }

        opt_and!(
            ui.clear_screen,
            execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?
        );
        Ok(())
    }

    /// start a spinner if enabled
    pub(crate) fn spinner(&self, msg: &'static str) -> Result<Option<ProgressBar>> {
        if !getopt!(ui.spinner) {
            return Ok(None);
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::with_template("{spinner:.magenta} {msg}")?);
        pb.set_message(msg);
        pb.enable_steady_tick(Duration::from_millis(80));

        Ok(Some(pb))
    }

    /// print a rendered screen
    pub(crate) fn draw(&self, screen: &str) -> Result<()> {
        let mut out = stdout().lock();
        out.write_all(screen.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// ask the user to pick a choice
    ///
    /// escape maps to `on_cancel`, ctrl+c always exits
    pub(crate) fn prompt(&self, msg: &str, choices: Vec<Choice>, on_cancel: Action) -> Result<Action> {
        match Select::new(msg, choices).with_page_size(15).prompt() {
            Ok(choice) => Ok(choice.action),
            Err(InquireError::OperationCanceled) => Ok(on_cancel),
            Err(InquireError::OperationInterrupted) => Ok(Action::Exit),
            Err(e) => Err(e.into()),
        }
    }
}

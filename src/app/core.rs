//! the core app
use {
    super::{cli::Cli, handlers::Handlers, interrupt::InterruptHandler, logging},
    crate::{
        client::{PostsApi, PostsClient},
        config::{
            instance::{config, config_mut, init_config},
            options::PostsRs,
        },
        display::View,
        getopt,
    },
    color_eyre::{Result, eyre::Context},
    std::sync::Arc,
    tracing::{info, warn},
};

/// the postrs app
pub struct PostsApp {
    /// the logic handlers
    handlers: Handlers,
    /// where to start
    cli: Cli,
}

impl PostsApp {
    /// initialize postrs
    ///
    /// - 1. loads the config file, failing on invalid values
    /// - 2. sets up logging
    /// - 3. writes the global config file if there isn't one
    /// - 4. applies and validates the cli overrides
    /// - 5. sets up the custom interruption handler if enabled
    /// - 6. builds the api client
    ///
    /// # Errors
    ///
    /// returns an error if the config files, env or cli overrides are invalid
    /// returns an error if it fails to setup logging
    /// returns an error if it fails to setup the interrupt handler
    /// returns an error if the base url can't be used
    pub fn init(cli: Cli) -> Result<Self> {
        init_config()?;
        logging::setup()?;

        if let Err(e) = PostsRs::ensure_global_config() {
            warn!(error = ?e, "couldn't write the global config file");
        }

        if let Some(base_url) = &cli.base_url {
            config_mut()?.base_url = Some(base_url.clone());
            config()?.run_validation()?;
        }

        let interrupt = Self::setup_interrupt_handler()?;
        let api: Arc<dyn PostsApi> =
            Arc::new(PostsClient::from_config().context("failed to build the api client")?);

        info!(
            "Starting {} v{} using {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            getopt!(base_url)
        );

        Ok(Self {
            handlers: Handlers::new(api, View::from_config(), interrupt, cli.print),
            cli,
        })
    }

    /// run the main loop
    ///
    /// # Errors
    ///
    /// returns an error if the main loop fails
    pub async fn run(mut self) -> Result<()> {
        self.handlers.run_main_loop(self.cli.start_route()).await
    }

    /// setup the interruption handler
    fn setup_interrupt_handler() -> Result<InterruptHandler> {
        let handler = InterruptHandler::new();
        let handler_clone = handler.clone();

        if getopt!(ui.ctrlc_handler) {
            ctrlc::set_handler(move || {
                handler_clone.trigger();
            })
            .context("failed to set Ctrl+C handler")?;
        }

        Ok(handler)
    }
}

//! config singleton management stuff
use {
    crate::config::options::PostsRs,
    color_eyre::{Result, eyre::eyre},
    std::sync::{OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard},
    tracing::warn,
};

/// global config instance
static CONFIG: OnceLock<RwLock<PostsRs>> = OnceLock::new();

/// the config lock, loading it on first use if [`init_config`] never ran
///
/// a lazy load that fails falls back to the defaults
fn cell() -> &'static RwLock<PostsRs> {
    CONFIG.get_or_init(|| {
        let cfg = PostsRs::load().unwrap_or_else(|e| {
            warn!(error = ?e, "failed to load configuration, falling back to defaults");
            PostsRs::default()
        });

        RwLock::new(cfg)
    })
}

/// load the config explicitly
///
/// # Errors
///
/// returns an error if a config file or env override can't be read or holds invalid values
pub fn init_config() -> Result<()> {
    install(PostsRs::load())
}

/// make `loaded` the global config, or hand back its error untouched
fn install(loaded: Result<PostsRs>) -> Result<()> {
    let cfg = loaded?;

    if let Err(lock) = CONFIG.set(RwLock::new(cfg)) {
        let cfg = lock
            .into_inner()
            .map_err(|e| eyre!("Configuration lock poisoned: {}", e))?;
        *config_mut()? = cfg;
    }

    Ok(())
}

/// get a ro ref to the config
pub fn config() -> Result<RwLockReadGuard<'static, PostsRs>> {
    cell()
        .read()
        .map_err(|e| eyre!("Configuration lock poisoned: {}", e))
}

/// get a rw ref to the config
pub fn config_mut() -> Result<RwLockWriteGuard<'static, PostsRs>> {
    cell()
        .write()
        .map_err(|e| eyre!("Configuration lock poisoned: {}", e))
}

/// get a specific config value with a default fallback
pub fn get_or_default<T, F>(getter: F, default: T) -> T
where
    F: FnOnce(&PostsRs) -> Option<T>,
    T: Clone,
{
    config()
        .ok()
        .and_then(|cfg| getter(&cfg))
        .unwrap_or(default)
}

//! Console logging and panic reporting.
//!
//! Without `hydrate` there is no logger; `log` macros compile to no-ops so
//! native tests stay quiet.

/// Install the console logger at `level` and route panics to the console.
///
/// Safe to call more than once: a second logger install is refused by `log`
/// and reported at `debug` through the logger already in place.
pub fn init(level: log::LevelFilter) {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        if let Some(level) = level.to_level() {
            if let Err(err) = console_log::init_with_level(level) {
                log::debug!("interactions: logger already installed: {err}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::set_max_level(level);
    }
}

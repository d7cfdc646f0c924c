/// Installs the global logger. Verbose runs show per-file progress; otherwise
/// only warnings and errors are printed.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();
}

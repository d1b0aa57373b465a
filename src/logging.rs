use std::time::SystemTime;

use log::LevelFilter;

/// sends every log line to stderr as `[<rfc3339 time> <level> <target>] <message>`.
///
/// Stdout is kept clean for the markdown references of uploaded pictures
pub fn init_logging() -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(LevelFilter::Trace)
        .level_for("hyper", LevelFilter::Warn)
        .level_for("rocket", LevelFilter::Warn)
        .level_for("_", LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply()?;
    // narrowed again once the config file is read
    log::set_max_level(LevelFilter::Info);
    Ok(())
}

use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::io::Write;

/// Installs the process logger. `RUST_LOG` applies unless `level` overrides it.
pub fn init_logging(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] [{}:{}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .target(Target::Stderr)
        .init();
}

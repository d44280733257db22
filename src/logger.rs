use log::LevelFilter;
use env_logger::{Builder, Target};
use std::io::Write;
use chrono::Local;

pub fn init() {
    Builder::new()
        .format(|buf, record| {
            writeln!(buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        // Progress lines belong on stdout, not stderr.
        .target(Target::Stdout)
        .init();
}

use std::sync::Arc;

use log::Log;

use crate::LineTarget;

/// Wraps a [`LineTarget`] and a Log implementor,
/// calling `.suspend` on the target while writing the log message
/// thereby preventing the pull line and logs from getting mixed up.
pub struct LogWrapper<L: Log> {
    target: Arc<LineTarget>,
    log: L,
}

impl<L: Log + 'static> LogWrapper<L> {
    pub fn new(target: Arc<LineTarget>, log: L) -> Self {
        Self { target, log }
    }

    /// installs this as the global logger,
    ///
    /// tries to find the correct argument to set_max_level
    /// by reading the logger configuration,
    /// you may want to set it manually though.
    pub fn try_init(self) -> Result<(), log::SetLoggerError> {
        use log::LevelFilter::*;
        let levels = [Error, Warn, Info, Debug, Trace];

        log::set_max_level(Off);
        for level_filter in levels.iter().rev() {
            let Some(level) = level_filter.to_level() else {
                continue;
            };
            let meta = log::Metadata::builder().level(level).build();
            if self.enabled(&meta) {
                log::set_max_level(*level_filter);
                break;
            }
        }

        log::set_boxed_logger(Box::new(self))
    }

    pub fn target(&self) -> Arc<LineTarget> {
        self.target.clone()
    }
}

impl<L: Log> Log for LogWrapper<L> {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.log.enabled(metadata)
    }

    fn log(&self, record: &log::Record) {
        if self.log.enabled(record.metadata()) {
            self.target.suspend(|| self.log.log(record))
        }
    }

    fn flush(&self) {
        self.log.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Mutex;

    use super::*;
    use crate::TermLike;

    #[derive(Debug, Default, Clone)]
    struct Shared(Arc<Mutex<String>>);

    impl TermLike for Shared {
        fn width(&self) -> u16 {
            80
        }

        fn move_cursor_up(&self, _n: usize) -> io::Result<()> {
            Ok(())
        }

        fn move_cursor_down(&self, _n: usize) -> io::Result<()> {
            Ok(())
        }

        fn write_line(&self, s: &str) -> io::Result<()> {
            let mut out = self.0.lock().unwrap();
            out.push_str(s);
            out.push('\n');
            Ok(())
        }

        fn write_str(&self, s: &str) -> io::Result<()> {
            self.0.lock().unwrap().push_str(s);
            Ok(())
        }

        fn clear_line(&self) -> io::Result<()> {
            self.0.lock().unwrap().push('\r');
            Ok(())
        }

        fn flush(&self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Writes records into the same buffer as the line target.
    struct EchoLog(Shared, log::Level);

    impl Log for EchoLog {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= self.1
        }

        fn log(&self, record: &log::Record) {
            let _ = self.0.write_line(&format!("{}", record.args()));
        }

        fn flush(&self) {}
    }

    #[test]
    fn records_interrupt_the_live_line() {
        let out = Shared::default();
        let target = Arc::new(LineTarget::term_like(Box::new(out.clone())));
        let wrapper = LogWrapper::new(target.clone(), EchoLog(out.clone(), log::Level::Info));

        target.draw("⠋ busy").unwrap();
        wrapper.log(
            &log::Record::builder()
                .args(format_args!("hello"))
                .level(log::Level::Info)
                .build(),
        );
        wrapper.log(
            &log::Record::builder()
                .args(format_args!("noise"))
                .level(log::Level::Debug)
                .build(),
        );

        assert_eq!(&*out.0.lock().unwrap(), "\r⠋ busy\rhello\n⠋ busy");
    }
}

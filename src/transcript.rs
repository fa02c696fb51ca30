use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Destination of the human-readable game transcript.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LogMode {
    /// Keep lines in memory until [`GameLog::flush`] is called.
    #[default]
    Buffer,
    /// Write each line to stdout.
    Print,
    /// Append each line to a file.
    File(PathBuf),
}

/// Transcript of a game: turns, piles, draws, takes and results.
///
/// Write failures are reported through the `log` facade and otherwise ignored,
/// so a bad destination never interrupts a game.
#[derive(Clone, Debug, Default)]
pub struct GameLog {
    mode: LogMode,
    buffer: String,
}

impl GameLog {
    pub fn new(mode: LogMode) -> Self {
        Self {
            mode,
            buffer: String::new(),
        }
    }

    pub fn mode(&self) -> &LogMode {
        &self.mode
    }

    /// Switches the destination of later lines. Lines already buffered stay
    /// until flushed.
    pub fn set_mode(&mut self, mode: LogMode) {
        self.mode = mode;
    }

    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        match &self.mode {
            LogMode::Buffer => {
                self.buffer.push_str(text);
                self.buffer.push('\n');
            }
            LogMode::Print => println!("{text}"),
            LogMode::File(path) => {
                let written = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .and_then(|mut file| writeln!(file, "{text}"));
                if let Err(err) = written {
                    log::warn!("could not write game log to {}: {err}", path.display());
                }
            }
        }
    }

    /// Returns the buffered transcript and clears it.
    pub fn flush(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_collects_until_flushed() {
        let mut log = GameLog::default();
        log.line("first");
        log.line(String::from("second"));
        assert_eq!(log.flush(), "first\nsecond\n");
        assert_eq!(log.flush(), "");
    }

    #[test]
    fn switching_mode_keeps_earlier_buffered_lines() {
        let path = std::env::temp_dir().join(format!("chromakin-switch-{}.txt", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let mut log = GameLog::default();
        assert_eq!(log.mode(), &LogMode::Buffer);
        log.line("buffered");
        log.set_mode(LogMode::File(path.clone()));
        assert_eq!(log.mode(), &LogMode::File(path.clone()));
        log.line("written");
        assert_eq!(log.flush(), "buffered\n");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "written\n");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unwritable_file_is_ignored() {
        let mut log = GameLog::new(LogMode::File(PathBuf::from(
            "/nonexistent-dir/chromakin/game.log",
        )));
        log.line("dropped");
        assert_eq!(log.flush(), "");
    }

    #[test]
    fn file_mode_appends_lines() {
        let path = std::env::temp_dir().join(format!("chromakin-log-{}.txt", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let mut log = GameLog::new(LogMode::File(path.clone()));
        log.line("one");
        log.line("two");
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "one\ntwo\n");
        let _ = std::fs::remove_file(&path);
    }
}

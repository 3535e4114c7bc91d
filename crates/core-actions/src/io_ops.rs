//! File IO helpers: load a file into a `Buffer`, serialize the buffer back out.
//!
//! Synchronous and minimal. Load applies line-ending normalization so no `\r`
//! reaches a line; save writes every line followed by a single LF. Failures are
//! typed as `FileError` and turned into status text by the dispatcher or the
//! binary; they never abort the session.

use core_state::{EditorState, normalize_line_endings};
use core_text::Buffer;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result of attempting to open a file.
#[derive(Debug)]
pub enum OpenFileResult {
    Success(OpenSuccess),
    Error(FileError),
}

pub struct OpenSuccess {
    pub buffer: Buffer,
    pub file_name: PathBuf,
    pub mixed_line_endings: bool,
}

impl std::fmt::Debug for OpenSuccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenSuccess")
            .field("file_name", &self.file_name)
            .field("lines", &self.buffer.line_count())
            .field("mixed_line_endings", &self.mixed_line_endings)
            .finish()
    }
}

/// Open a file path into a new Buffer applying line ending normalization.
/// Invalid UTF-8 sequences decode to U+FFFD rather than failing the load.
pub fn open_file(path: &Path) -> OpenFileResult {
    match std::fs::read(path) {
        Ok(bytes) => {
            let content = String::from_utf8_lossy(&bytes);
            if matches!(content, std::borrow::Cow::Owned(_)) {
                tracing::warn!(target: "io", path = %path.display(), "invalid_utf8_replaced");
            }
            let norm = normalize_line_endings(&content);
            if norm.mixed {
                tracing::warn!(target: "io", path = %path.display(), "mixed_line_endings_detected");
            }
            let buffer = Buffer::from_text(&norm.normalized);
            tracing::info!(target: "io", path = %path.display(), lines = buffer.line_count(), "file_opened");
            OpenFileResult::Success(OpenSuccess {
                buffer,
                file_name: path.to_path_buf(),
                mixed_line_endings: norm.mixed,
            })
        }
        Err(source) => {
            let e = FileError::Read {
                path: path.to_path_buf(),
                source,
            };
            tracing::error!(target: "io", ?e, "file_open_error");
            OpenFileResult::Error(e)
        }
    }
}

/// Load `path`, degrading to a single empty line when it cannot be read.
pub fn load_or_empty(path: &Path) -> Buffer {
    match open_file(path) {
        OpenFileResult::Success(s) => s.buffer,
        OpenFileResult::Error(_) => Buffer::new(),
    }
}

/// Result of a write attempt.
#[derive(Debug)]
pub enum WriteFileResult {
    Success { path: PathBuf, bytes: usize },
    Error(FileError),
}

/// Serialize the buffer to the bound file name, or the default save path when
/// none is bound. Clears the modified flag only on success.
pub fn write_file(state: &mut EditorState) -> WriteFileResult {
    let path = state.save_target().to_path_buf();
    let content = state.buffer().to_text();
    match std::fs::write(&path, content.as_bytes()) {
        Ok(()) => {
            state.modified = false;
            tracing::info!(target: "io", path = %path.display(), bytes = content.len(), "file_written");
            WriteFileResult::Success {
                path,
                bytes: content.len(),
            }
        }
        Err(source) => {
            let e = FileError::Write { path, source };
            tracing::error!(target: "io", ?e, "file_write_error");
            WriteFileResult::Error(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn open_file_normalizes_line_endings() {
        use std::io::Write;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.txt");
        {
            let mut f = std::fs::File::create(&path).unwrap();
            write!(f, "line1\r\nline2\nline3\r\n").unwrap();
        }
        match open_file(&path) {
            OpenFileResult::Success(s) => {
                assert_eq!(s.buffer.lines(), vec!["line1", "line2", "line3", ""]);
                assert!(s.mixed_line_endings, "should detect mixed endings");
                assert_eq!(s.file_name, path);
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn non_utf8_file_keeps_its_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, b"caf\xe9\nline two\n").unwrap();
        let b = load_or_empty(&path);
        assert_eq!(b.lines(), vec!["caf\u{FFFD}", "line two", ""]);

        let mut state = EditorState::new(b);
        state.file_name = Some(path.clone());
        assert!(matches!(write_file(&mut state), WriteFileResult::Success { .. }));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "caf\u{FFFD}\nline two\n\n"
        );
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let b = load_or_empty(&dir.path().join("nope.txt"));
        assert_eq!(b.lines(), vec![String::new()]);
    }

    #[test]
    fn write_file_appends_lf_to_every_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut state = EditorState::new(Buffer::from_lines(&["a", "b"]));
        state.file_name = Some(path.clone());
        state.modified = true;
        let res = write_file(&mut state);
        assert!(matches!(res, WriteFileResult::Success { bytes: 4, .. }));
        assert!(!state.modified, "modified cleared after write");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb\n");
    }

    #[test]
    fn write_file_uses_default_path_when_unbound() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = EditorState::new(Buffer::from_lines(&["x"]));
        state.default_save_path = dir.path().join("output.txt");
        assert!(matches!(write_file(&mut state), WriteFileResult::Success { .. }));
        assert_eq!(
            std::fs::read_to_string(dir.path().join("output.txt")).unwrap(),
            "x\n"
        );
    }

    #[test]
    fn write_error_keeps_modified() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = EditorState::new(Buffer::from_lines(&["x"]));
        state.file_name = Some(dir.path().join("no_such_dir").join("f.txt"));
        state.modified = true;
        match write_file(&mut state) {
            WriteFileResult::Error(e) => {
                assert!(matches!(e, FileError::Write { .. }));
                assert!(e.to_string().starts_with("write "));
            }
            other => panic!("expected error, got {other:?}"),
        }
        assert!(state.modified);
    }

    #[test]
    fn load_then_save_round_trips_lf_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rt.txt");
        std::fs::write(&path, "one\ntwo").unwrap();
        let mut state = EditorState::new(load_or_empty(&path));
        state.file_name = Some(path.clone());
        write_file(&mut state);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn trailing_newline_adds_empty_line_per_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cycle.txt");
        std::fs::write(&path, "a\n").unwrap();
        let mut state = EditorState::new(load_or_empty(&path));
        assert_eq!(state.buffer().lines(), vec!["a", ""]);
        state.file_name = Some(path.clone());
        write_file(&mut state);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\n\n");
    }
}

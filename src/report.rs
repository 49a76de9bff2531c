use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Where report lines end up. Implementations receive the full history plus
/// the line that was just appended.
pub trait Render {
    fn render(&mut self, lines: &[String], latest: &str) -> io::Result<()>;
}

/// Line-oriented output: each new line is written once, in order.
pub struct LineRenderer<W: Write> {
    out: W,
}

impl<W: Write> LineRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl LineRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Render for LineRenderer<W> {
    fn render(&mut self, _lines: &[String], latest: &str) -> io::Result<()> {
        writeln!(self.out, "{}", latest)?;
        self.out.flush()
    }
}

/// A single text panel that always shows the whole report so far.
pub struct PanelRenderer {
    path: PathBuf,
}

impl PanelRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Render for PanelRenderer {
    fn render(&mut self, lines: &[String], _latest: &str) -> io::Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, lines.join("\n"))
    }
}

/// Append-only report. Lines are never edited once emitted.
pub struct Report {
    lines: Vec<String>,
    renderer: Box<dyn Render + Send>,
    render_failed: bool,
}

impl Report {
    pub fn new(renderer: impl Render + Send + 'static) -> Self {
        Self {
            lines: Vec::new(),
            renderer: Box::new(renderer),
            render_failed: false,
        }
    }

    /// A report that only keeps lines in memory.
    pub fn detached() -> Self {
        Self::new(NullRenderer)
    }

    pub fn emit(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
        let latest = self.lines.last().map(String::as_str).unwrap_or_default();
        if let Err(err) = self.renderer.render(&self.lines, latest) {
            // one warning is enough; the lines are still kept in memory
            if !self.render_failed {
                tracing::warn!("failed to render report output: {}", err);
                self.render_failed = true;
            }
        }
    }

    pub fn blank(&mut self) {
        self.emit("");
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn dump(&self) -> String {
        self.lines.join("\n")
    }
}

struct NullRenderer;

impl Render for NullRenderer {
    fn render(&mut self, _lines: &[String], _latest: &str) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Broken;

    impl Render for Broken {
        fn render(&mut self, _lines: &[String], _latest: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "closed"))
        }
    }

    #[test]
    fn line_renderer_writes_each_line_once() {
        let buf = SharedBuf::default();
        let mut report = Report::new(LineRenderer::new(buf.clone()));
        report.emit("first");
        report.blank();
        report.emit("second");

        let written = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(written, "first\n\nsecond\n");
        assert_eq!(report.dump(), "first\n\nsecond");
    }

    #[test]
    fn panel_renderer_holds_the_full_report() {
        let path = std::env::temp_dir().join(format!(
            "velorin_panel_test_{}.txt",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let mut report = Report::new(PanelRenderer::new(&path));
        report.emit("a");
        report.emit("b");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "a\nb");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn render_errors_do_not_lose_lines() {
        let mut report = Report::new(Broken);
        report.emit("kept");
        report.emit("also kept");
        assert_eq!(report.lines(), ["kept", "also kept"]);
    }
}

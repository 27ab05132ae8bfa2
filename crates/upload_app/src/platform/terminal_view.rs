use std::io::{self, Write};

use upload_core::{AppViewModel, StatusTone, UploadView};

/// Draws the upload widget as console lines. Only lines that differ from the
/// previous frame are printed, so each state change shows up once.
pub(crate) struct TerminalView<W: Write> {
    out: W,
    last: Vec<String>,
}

impl TerminalView<io::Stdout> {
    pub(crate) fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub(crate) fn new(out: W) -> Self {
        Self {
            out,
            last: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> UploadView for TerminalView<W> {
    fn render(&mut self, view: &AppViewModel) {
        let lines = render_lines(view);
        for line in lines.iter().filter(|line| !self.last.contains(line)) {
            let _ = writeln!(self.out, "{line}");
        }
        let _ = self.out.flush();
        self.last = lines;
    }
}

pub(crate) const DROP_HINT: &str = "[drop] release to upload";
pub(crate) const SUBMIT_DISABLED: &str = "[generate disabled]";

pub(crate) fn render_lines(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    if view.drop_highlighted {
        lines.push(DROP_HINT.to_string());
    }

    if let Some(name) = &view.file_label {
        lines.push(format!("Selected: {name}"));
        if !view.submit_enabled {
            lines.push(SUBMIT_DISABLED.to_string());
        }
    }

    if let Some(status) = &view.status {
        let marker = match status.tone {
            StatusTone::Neutral => "[..]",
            StatusTone::Success => "[ok]",
            StatusTone::Error => "[!!]",
        };
        lines.push(format!("{marker} {}", status.text));
    }

    if let Some(downloads) = &view.downloads {
        lines.push(format!("Course: {}", downloads.course_title));
        lines.push(format!("  DOCX: {}", downloads.docx_href));
        lines.push(format!("  MD:   {}", downloads.md_href));
    }

    lines
}

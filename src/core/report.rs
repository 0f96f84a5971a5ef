use crate::domain::model::Verdict;
use crate::utils::error::Result;
use std::io::Write;

/// Writes one verdict line per call.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn report(&mut self, verdict: &Verdict) -> Result<()> {
        writeln!(self.out, "{}", verdict)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Reporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

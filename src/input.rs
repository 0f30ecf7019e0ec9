use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// The name that stands for standard input.
pub(crate) const STDIN_NAME: &str = "-";

/// A named, buffered text source.
pub(crate) struct Source {
    pub(crate) name: String,
    pub(crate) reader: Box<dyn BufRead>,
}

impl Source {
    pub(crate) fn new(name: impl Into<String>, reader: impl BufRead + 'static) -> Self {
        Self { name: name.into(), reader: Box::new(reader) }
    }
}

impl std::fmt::Debug for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Source").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Open the given paths in order, falling back to standard input when there are none.
///
/// Paths that can't be opened are reported and skipped. Opening happens lazily, so only
/// one source is alive at a time.
pub(crate) fn open_sources(paths: &[PathBuf]) -> impl Iterator<Item = Source> + '_ {
    let stdin_only = paths.is_empty().then(|| PathBuf::from(STDIN_NAME));
    stdin_only.into_iter().chain(paths.iter().cloned()).filter_map(|path| match open(&path) {
        Ok(source) => Some(source),
        Err(e) => {
            report_failure(&path.display().to_string(), &e);
            None
        }
    })
}

fn open(path: &Path) -> io::Result<Source> {
    if path == Path::new(STDIN_NAME) {
        return Ok(Source::new(STDIN_NAME, io::stdin().lock()));
    }
    let file = File::open(path)?;
    Ok(Source::new(path.display().to_string(), BufReader::new(file)))
}

/// Tell the user a source failed. Processing carries on with the next one.
pub(crate) fn report_failure(name: &str, error: &io::Error) {
    eprintln!("{}: {name}: {error}", env!("CARGO_PKG_NAME"));
}

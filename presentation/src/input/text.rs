//! Where free-form text input comes from

use std::io::{self, Read};
use std::path::PathBuf;

/// Source of a text argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl TextSource {
    /// Interpret a positional argument; `-` means standard input.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            TextSource::Stdin
        } else {
            TextSource::Inline(arg.to_string())
        }
    }

    /// Read the whole text. Content is returned as-is; blank checks
    /// happen in the domain.
    pub fn read(&self) -> io::Result<String> {
        match self {
            TextSource::Inline(text) => Ok(text.clone()),
            TextSource::File(path) => std::fs::read_to_string(path).map_err(|e| {
                io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
            }),
            TextSource::Stdin => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
        }
    }
}

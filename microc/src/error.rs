use std::{io, process::ExitCode};

use derive_more::{Display, From};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
    #[display("usage: microc <file>")]
    MissingArgument,

    #[display("cannot open {path}: {source}")]
    FileOpen { path: String, source: io::Error },

    #[from]
    #[display("{_0}")]
    Syntax(microc_syntax::Error),
}

impl Error {
    pub fn file_open(path: impl Into<String>, source: io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::MissingArgument => ExitCode::from(1),
            Self::FileOpen { .. } => ExitCode::from(2),
            Self::Syntax(_) => ExitCode::from(3),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileOpen { source, .. } => Some(source),
            Self::Syntax(e) => Some(e),
            Self::MissingArgument => None,
        }
    }
}

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Query text with the name it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySource {
    pub name: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("query is required: use positional argument, -q/--query, or - for stdin")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn load_query_source(
    query_path: Option<&Path>,
    query_text: Option<&str>,
) -> Result<QuerySource, LoadError> {
    if let Some(text) = query_text {
        return Ok(QuerySource {
            name: "<query>".to_string(),
            text: text.to_string(),
        });
    }

    match query_path {
        Some(path) if path.as_os_str() == "-" => load_stdin(),
        Some(path) => load_file(path),
        None => Err(LoadError::Missing),
    }
}

fn load_stdin() -> Result<QuerySource, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(QuerySource {
        name: "<stdin>".to_string(),
        text: buf,
    })
}

fn load_file(path: &Path) -> Result<QuerySource, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(QuerySource {
        name: path.to_string_lossy().into_owned(),
        text,
    })
}

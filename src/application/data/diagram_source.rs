use std::path::PathBuf;

use compio::io::AsyncReadExt;
use derive_more::Display;
use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::ext::BestEffortPathExt;

/// Where the diagram text comes from.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DiagramSource {
    #[display("inline text")]
    Literal(String),
    #[display("{}", _0.display())]
    File(PathBuf),
    #[display("standard input")]
    Stdin,
}

impl DiagramSource {
    /// `-` and a missing path both mean standard input.
    pub fn from_args(tree: Option<String>, diagram: Option<PathBuf>) -> Self {
        match (tree, diagram) {
            (Some(text), _) => DiagramSource::Literal(text),
            (None, Some(path)) if path.as_os_str() != "-" => DiagramSource::File(path),
            (None, _) => DiagramSource::Stdin,
        }
    }

    pub async fn read(&self) -> Result<String, DiagramSourceError> {
        debug!("Reading diagram from {self}");
        match self {
            DiagramSource::Literal(text) => Ok(text.clone()),
            DiagramSource::File(path) => {
                let bytes = compio::fs::read(path).await.context(ReadFileSnafu {
                    file_path: path.best_effort_path_display(),
                })?;
                debug!("Read {} bytes", bytes.len());
                String::from_utf8(bytes).context(NotUtf8Snafu {
                    file_path: path.best_effort_path_display(),
                })
            }
            DiagramSource::Stdin => {
                let mut stdin = compio::fs::stdin();
                let res = stdin.read_to_string(String::new()).await;
                let bytes = res.0.context(ReadStdinSnafu)?;
                debug!("Read {bytes} bytes");
                Ok(res.1)
            }
        }
    }
}

#[derive(Debug, Snafu)]
pub enum DiagramSourceError {
    #[snafu(display("Failed to read the diagram file: {}", file_path))]
    ReadFile {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("The diagram file is not valid UTF-8: {}", file_path))]
    NotUtf8 {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to read the diagram from standard input"))]
    ReadStdin { source: std::io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[rstest]
    #[case(Some("root/"), None, DiagramSource::Literal("root/".into()))]
    #[case(None, Some("tree.txt"), DiagramSource::File("tree.txt".into()))]
    #[case(None, Some("-"), DiagramSource::Stdin)]
    #[case(None, None, DiagramSource::Stdin)]
    fn from_args_picks_source(
        #[case] tree: Option<&str>,
        #[case] diagram: Option<&str>,
        #[case] expected: DiagramSource,
    ) {
        let source = DiagramSource::from_args(tree.map(String::from), diagram.map(PathBuf::from));
        assert_eq!(source, expected);
    }

    #[compio::test]
    async fn literal_is_returned_as_is() {
        let source = DiagramSource::Literal("root/\n└── a".to_string());
        assert_eq!(source.read().await.expect("Failed to read"), "root/\n└── a");
    }

    #[compio::test]
    async fn file_contents_are_read() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "project/\n├── README.md").expect("Failed to write to temp file");

        let source = DiagramSource::File(temp_file.path().to_path_buf());
        let text = source.read().await.expect("Failed to read");

        assert_eq!(text, "project/\n├── README.md");
    }

    #[compio::test]
    async fn missing_file_is_a_read_error() {
        let source = DiagramSource::File(PathBuf::from("/this/path/does/not/exist.txt"));
        let result = source.read().await;
        assert!(matches!(result, Err(DiagramSourceError::ReadFile { .. })));
    }

    #[compio::test]
    async fn binary_file_is_rejected() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file.write_all(&[0xff, 0xfe, 0x00]).expect("Failed to write to temp file");

        let source = DiagramSource::File(temp_file.path().to_path_buf());
        let result = source.read().await;

        assert!(matches!(result, Err(DiagramSourceError::NotUtf8 { .. })));
    }

    #[test]
    fn display_names_the_source() {
        assert_eq!(DiagramSource::Stdin.to_string(), "standard input");
        assert_eq!(DiagramSource::File("a/b.txt".into()).to_string(), "a/b.txt");
    }
}

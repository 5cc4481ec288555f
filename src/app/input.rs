//! Where submissions come from.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

/// Source of URLs to submit.
///
/// Each item becomes the content of the input field followed by a submit.
/// Items are used verbatim: no trimming, no validation.
pub enum InputSource {
    /// URLs given on the command line.
    Args(std::vec::IntoIter<String>),
    /// One URL per line, read as the user types.
    Lines(Lines<Box<dyn AsyncBufRead + Unpin + Send>>),
}

impl InputSource {
    pub fn from_args(urls: Vec<String>) -> Self {
        InputSource::Args(urls.into_iter())
    }

    pub fn from_reader<R>(reader: R) -> Self
    where
        R: AsyncBufRead + Unpin + Send + 'static,
    {
        let boxed: Box<dyn AsyncBufRead + Unpin + Send> = Box::new(reader);
        InputSource::Lines(boxed.lines())
    }

    pub fn stdin() -> Self {
        Self::from_reader(BufReader::new(tokio::io::stdin()))
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, InputSource::Lines(_))
    }

    /// Next URL, or `None` once the source is exhausted.
    pub async fn next_url(&mut self) -> std::io::Result<Option<String>> {
        match self {
            InputSource::Args(urls) => Ok(urls.next()),
            InputSource::Lines(lines) => lines.next_line().await,
        }
    }
}

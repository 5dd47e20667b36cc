use crate::adapters::outbound::filesystem::{FileSystemReader, PACKAGES_FILE_NAME};
use crate::ports::outbound::MetadataReader;
use crate::shared::error::DeptraceError;
use crate::shared::security::{validate_file_size, MAX_FILE_SIZE};
use crate::shared::Result;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::io::Read;
use std::path::Path;
use std::thread;
use std::time::Duration;

/// HttpRepositoryReader adapter fetching a package index from a remote mirror
///
/// Downloads `<repository>/Packages` with a blocking client. Transient
/// failures are retried; a 404 is reported as a missing source at once.
/// Test graphs are always local and are read through [`FileSystemReader`].
pub struct HttpRepositoryReader {
    client: Client,
    retry_delay: Duration,
    show_progress: bool,
    local: FileSystemReader,
}

impl HttpRepositoryReader {
    const TIMEOUT_SECONDS: u64 = 30;
    const MAX_ATTEMPTS: u32 = 3;
    const RETRY_DELAY_MS: u64 = 500;

    pub fn new() -> Result<Self> {
        let user_agent = format!("deptrace/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            retry_delay: Duration::from_millis(Self::RETRY_DELAY_MS),
            show_progress: true,
            local: FileSystemReader::new(),
        })
    }

    /// Overrides the base delay between attempts (attempt `n` waits `n * delay`)
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Disables the download progress bar
    pub fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// URL of the package index below a repository base URL
    pub fn packages_url(repository: &str) -> String {
        format!("{}/{}", repository.trim_end_matches('/'), PACKAGES_FILE_NAME)
    }

    fn fetch(&self, url: &str) -> Result<String> {
        let mut last_error = None;

        for attempt in 1..=Self::MAX_ATTEMPTS {
            match self.fetch_once(url) {
                Ok(body) => return Ok(body),
                Err(FetchError::Fatal(e)) => return Err(e),
                Err(FetchError::Transient(details)) => {
                    if attempt < Self::MAX_ATTEMPTS {
                        eprintln!(
                            "   ⚠️  Attempt {}/{} to fetch {} failed: {}. Retrying...",
                            attempt,
                            Self::MAX_ATTEMPTS,
                            url,
                            details
                        );
                        thread::sleep(self.retry_delay * attempt);
                    }
                    last_error = Some(details);
                }
            }
        }

        Err(DeptraceError::MetadataReadError {
            location: url.to_string(),
            details: format!(
                "Giving up after {} attempts: {}",
                Self::MAX_ATTEMPTS,
                last_error.unwrap_or_default()
            ),
        }
        .into())
    }

    fn fetch_once(&self, url: &str) -> std::result::Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Transient(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::Fatal(
                DeptraceError::MetadataSourceMissing {
                    path: url.to_string(),
                    suggestion: "The mirror has no Packages index at this location. Check repository_url.".to_string(),
                }
                .into(),
            ));
        }
        if status.is_server_error() {
            return Err(FetchError::Transient(format!("server returned {}", status)));
        }
        if !status.is_success() {
            return Err(FetchError::Fatal(
                DeptraceError::MetadataReadError {
                    location: url.to_string(),
                    details: format!("server returned {}", status),
                }
                .into(),
            ));
        }

        if let Some(length) = response.content_length() {
            validate_file_size(length, url, MAX_FILE_SIZE).map_err(FetchError::Fatal)?;
        }

        let progress = self.progress_bar(response.content_length());
        let mut body = Vec::new();
        progress
            .wrap_read(response)
            .take(MAX_FILE_SIZE + 1)
            .read_to_end(&mut body)
            .map_err(|e| FetchError::Transient(e.to_string()))?;
        progress.finish_and_clear();

        validate_file_size(body.len() as u64, url, MAX_FILE_SIZE).map_err(FetchError::Fatal)?;

        String::from_utf8(body).map_err(|e| {
            FetchError::Fatal(
                DeptraceError::MetadataReadError {
                    location: url.to_string(),
                    details: format!("index is not valid UTF-8: {}", e),
                }
                .into(),
            )
        })
    }

    fn progress_bar(&self, length: Option<u64>) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = match length {
            Some(len) => ProgressBar::new(len),
            None => ProgressBar::new_spinner(),
        };
        pb.set_draw_target(ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::default_bar()
            .template("   {spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} Packages")
        {
            pb.set_style(style.progress_chars("=>-"));
        }
        pb
    }
}

enum FetchError {
    /// Worth another attempt (connection failure, 5xx, interrupted body)
    Transient(String),
    /// Retrying cannot help
    Fatal(anyhow::Error),
}

impl MetadataReader for HttpRepositoryReader {
    fn read_packages_index(&self, repository: &str) -> Result<String> {
        self.fetch(&Self::packages_url(repository))
    }

    fn read_test_graph(&self, path: &Path) -> Result<String> {
        self.local.read_test_graph(path)
    }
}

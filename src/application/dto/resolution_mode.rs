/// Where package metadata comes from and in which format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionMode {
    /// Repository index fetched from an HTTP(S) mirror
    Online,
    /// Repository index read from a local directory
    Offline,
    /// Adjacency-list test graph read from a local file
    Test,
}

impl ResolutionMode {
    /// Online and offline both read the repository index format
    pub fn is_repository(self) -> bool {
        !matches!(self, ResolutionMode::Test)
    }
}

impl std::str::FromStr for ResolutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "online" => Ok(ResolutionMode::Online),
            "offline" => Ok(ResolutionMode::Offline),
            "test" => Ok(ResolutionMode::Test),
            _ => Err(format!(
                "mode must be one of 'online', 'offline', 'test' (got '{}')",
                s
            )),
        }
    }
}

impl std::fmt::Display for ResolutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionMode::Online => write!(f, "online"),
            ResolutionMode::Offline => write!(f, "offline"),
            ResolutionMode::Test => write!(f, "test"),
        }
    }
}

/// Network adapters for remote package mirrors
mod http_repository_reader;

pub use http_repository_reader::HttpRepositoryReader;

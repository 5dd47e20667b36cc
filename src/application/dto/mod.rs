/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI glue, the use case and the formatters,
/// keeping the domain layer isolated.
mod output_format;
mod resolution_mode;
mod resolve_request;
mod resolve_response;

pub use output_format::OutputFormat;
pub use resolution_mode::ResolutionMode;
pub use resolve_request::ResolveRequest;
pub use resolve_response::ResolveResponse;

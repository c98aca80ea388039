pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Provider error: {message}")]
	Provider { message: String },
	#[error("Vector store error: {message}")]
	Qdrant { message: String },
}
impl From<color_eyre::Report> for Error {
	fn from(err: color_eyre::Report) -> Self {
		Self::Provider { message: err.to_string() }
	}
}
impl From<qna_storage::Error> for Error {
	fn from(err: qna_storage::Error) -> Self {
		Self::Qdrant { message: err.to_string() }
	}
}

// Driver Error Mapping

use jobboard_core::AppError;
use mongodb::error::{Error as MongoError, ErrorKind};

/// Convert a driver error to AppError with the store-layer taxonomy
pub(crate) fn map_mongo_error(err: MongoError) -> AppError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::DnsResolve { .. }
        | ErrorKind::Authentication { .. }
        | ErrorKind::Io(_) => AppError::Connection(err.to_string()),
        ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => {
            AppError::Decode(err.to_string())
        }
        _ => AppError::Transport(err.to_string()),
    }
}

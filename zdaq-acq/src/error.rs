use thiserror::Error;
use zdaq_types::ZdaqError;

pub type AcqResult<T> = std::result::Result<T, AcqError>;

#[derive(Debug, Error)]
pub enum AcqError {
    /// Endpoint устройства не открылся
    #[error("Device not available: {0}")]
    DeviceNotFound(String),

    /// Ошибка бинарного формата или чтения записи
    #[error("Format error: {0}")]
    Format(#[from] ZdaqError),

    /// Ошибка системного вызова (poll и т.п.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

use thiserror::Error;

/// Результат для операций ZDAQ
pub type ZdaqResult<T> = std::result::Result<T, ZdaqError>;

/// Типы ошибок формата ZDAQ.
#[derive(Debug, Error)]
pub enum ZdaqError {
    /// Прочитано меньше байт, чем требует чтение фиксированного размера
    #[error("Short read: got {actual} bytes instead of {expected}")]
    ShortRead { expected: usize, actual: usize },

    /// Длина data-payload не равна nsamples × ssize
    #[error("Sample payload size mismatch: got {actual} bytes, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Несовместимая major-версия бинарного layout'а
    #[error("Unsupported control layout version: found {found}, expected {expected}")]
    UnsupportedVersion { found: u8, expected: u8 },

    /// Строковое поле не помещается в фиксированный слот записи
    #[error("Name field too long: {actual} bytes (max {max})")]
    NameTooLong { actual: usize, max: usize },

    /// Ошибки ввода/вывода (автоконвертируются из std::io::Error)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ZdaqError {
    /// Удобные конструкторы
    pub fn short_read(
        expected: usize,
        actual: usize,
    ) -> Self {
        Self::ShortRead { expected, actual }
    }

    pub fn size_mismatch(
        expected: usize,
        actual: usize,
    ) -> Self {
        Self::SizeMismatch { expected, actual }
    }
}

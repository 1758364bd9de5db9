//! Acquisition-слой ZDAQ: перечисление и открытие пар устройств,
//! ожидание готовности control-источников и мультиплексированное чтение
//! декодированных блоков.

pub mod device;
pub mod error;
pub mod mux;
pub mod poll;

pub use device::*;
pub use error::*;
pub use mux::*;
pub use poll::*;

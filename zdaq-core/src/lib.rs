//! Библиотека бинарного формата ZIO control-блоков
//!
//! Эталонная реализация кодека 512-байтных control-записей ZIO v1.0 и
//! потоковое чтение пар (control-блок, data-блок) из байтовых источников.
//!
//! # Быстрый старт
//!
//! ```
//! use zdaq_core::{read_channel, CTRL_BLOCK_SIZE};
//! use std::io::Cursor;
//!
//! # fn fabricate_record() -> [u8; CTRL_BLOCK_SIZE] {
//! #     let mut raw = [0u8; CTRL_BLOCK_SIZE];
//! #     raw[0] = 1; // major_version
//! #     raw[8] = 2; // nsamples = 2
//! #     raw[12] = 1; // ssize = 1
//! #     raw
//! # }
//! let mut ctrl = Cursor::new(fabricate_record().to_vec());
//! let mut data = Cursor::new(vec![0x0Au8, 0x0B]);
//!
//! let (blk, samples) = read_channel(&mut ctrl, &mut data)?;
//! assert_eq!(blk.nsamples, 2);
//! assert_eq!(samples.to_u64_vec(), vec![0x0A, 0x0B]);
//! # Ok::<(), zdaq_types::ZdaqError>(())
//! ```

pub mod binary;
pub mod format;
pub mod layout;
pub mod samples;
pub mod stream;

pub use binary::*;
pub use format::*;
pub use layout::*;
pub use samples::*;
pub use stream::*;

/// Версия библиотеки.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

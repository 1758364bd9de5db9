//! Мультиплексор каналов: fan-in по готовности control-источников.
//!
//! Readiness-набор — control-дескрипторы всех пар; data-источник каждой
//! пары читается сразу после своего control-блока, поэтому внутри одного
//! канала порядок control → data никогда не нарушается. Между каналами
//! порядок не гарантирован.

use std::{collections::VecDeque, os::fd::RawFd, path::PathBuf};

use log::{debug, warn};
use zdaq_core::read_channel;
use zdaq_types::{ControlBlock, SampleBlock};

use crate::{
    device::{open_devices, DeviceChannelPair},
    error::{AcqError, AcqResult},
    poll::wait_readable,
};

/// Набор открытых каналов, готовый к мультиплексированному чтению.
pub struct ChannelMux {
    pairs: Vec<DeviceChannelPair>,
}

/// Ленивая последовательность пар (control-блок, data-блок).
///
/// Любая ошибка чтения или декодирования завершает последовательность:
/// после первого `Err` итератор возвращает только `None`. Частичные пары
/// не эмитируются.
pub struct BlockStream {
    pairs: Vec<DeviceChannelPair>,
    /// Оставшиеся wakeup-итерации; None — без ограничения
    remaining: Option<u64>,
    /// Каналы, о готовности которых сообщило последнее пробуждение
    pending: VecDeque<usize>,
    done: bool,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl ChannelMux {
    pub fn new(pairs: Vec<DeviceChannelPair>) -> Self {
        Self { pairs }
    }

    /// Открывает все пары по путям и собирает мультиплексор.
    pub fn open(paths: &[(PathBuf, PathBuf)]) -> AcqResult<Self> {
        Ok(Self::new(open_devices(paths)?))
    }

    /// Количество каналов в наборе.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Превращает набор в ленивую последовательность декодированных пар.
    ///
    /// `budget` — число wakeup-итераций (`None` — бесконечно). Бюджет
    /// списывается один раз за пробуждение, а не за эмиссию: если одно
    /// пробуждение сообщило о готовности нескольких каналов, пар будет
    /// эмитировано больше, чем `budget`. Это свойство fan-in дизайна,
    /// сохранённое намеренно.
    pub fn blocks(
        self,
        budget: Option<u64>,
    ) -> BlockStream {
        BlockStream {
            pairs: self.pairs,
            remaining: budget,
            pending: VecDeque::new(),
            done: false,
        }
    }
}

impl Iterator for BlockStream {
    type Item = AcqResult<(ControlBlock, SampleBlock)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }

            // Сначала дочитываем каналы, готовые с прошлого пробуждения:
            // одна эмиссия на каждый готовый источник
            if let Some(idx) = self.pending.pop_front() {
                let DeviceChannelPair { ctrl, data, label } = &mut self.pairs[idx];

                match read_channel(ctrl, data) {
                    Ok(pair) => return Some(Ok(pair)),
                    Err(e) => {
                        warn!("Channel {label}: read failed: {e}");
                        self.done = true;
                        return Some(Err(AcqError::Format(e)));
                    }
                }
            }

            if self.pairs.is_empty() {
                return None;
            }
            if self.remaining == Some(0) {
                return None;
            }

            let fds: Vec<RawFd> = self.pairs.iter().map(|p| p.ctrl_fd()).collect();

            let ready = match wait_readable(&fds) {
                Ok(r) => r,
                Err(e) => {
                    self.done = true;
                    return Some(Err(AcqError::Io(e)));
                }
            };

            debug!(
                "wakeup: {} of {} control sources ready",
                ready.len(),
                fds.len()
            );

            if let Some(n) = self.remaining {
                self.remaining = Some(n - 1);
            }
            self.pending.extend(ready);
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////

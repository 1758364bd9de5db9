//! Перечисление и открытие пар endpoint'ов acquisition-устройств.
//!
//! Каждый физический канал драйвер экспортирует как два байтовых потока:
//! `<base>-<index>-ctrl` (control-записи) и `<base>-<index>-data`
//! (payload выборок). Открытая пара — [`DeviceChannelPair`]; соответствие
//! control → data хранится явной записью, а не map'ой по дескриптору.

use std::{
    fs::File,
    os::fd::{AsRawFd, RawFd},
    path::{Path, PathBuf},
};

use log::info;

use crate::{AcqError, AcqResult};

/// Выбор каналов для перечисления устройств.
#[derive(Debug, Clone)]
pub enum Channels {
    /// Первые `n` каналов: индексы 0..n
    Count(u32),
    /// Явный список индексов каналов
    List(Vec<u32>),
}

/// Пара открытых endpoint'ов одного физического канала.
#[derive(Debug)]
pub struct DeviceChannelPair {
    /// Control-endpoint (участник readiness-набора)
    pub ctrl: File,
    /// Data-endpoint, спаренный с control
    pub data: File,
    /// Имя пары для логов
    pub label: String,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl Channels {
    fn indices(&self) -> Vec<u32> {
        match self {
            Channels::Count(n) => (0..*n).collect(),
            Channels::List(list) => list.clone(),
        }
    }
}

impl DeviceChannelPair {
    /// Открывает пару endpoint'ов по путям.
    pub fn open(
        ctrl_path: &Path,
        data_path: &Path,
    ) -> AcqResult<Self> {
        let ctrl = File::open(ctrl_path)
            .map_err(|e| AcqError::DeviceNotFound(format!("{}: {e}", ctrl_path.display())))?;
        let data = File::open(data_path)
            .map_err(|e| AcqError::DeviceNotFound(format!("{}: {e}", data_path.display())))?;

        let label = ctrl_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| ctrl_path.display().to_string());

        info!(
            "Opened channel pair: {} + {}",
            ctrl_path.display(),
            data_path.display()
        );

        Ok(Self { ctrl, data, label })
    }

    /// Оборачивает уже открытые дескрипторы (pipe, FIFO, socketpair).
    pub fn from_files(
        ctrl: File,
        data: File,
    ) -> Self {
        Self {
            ctrl,
            data,
            label: "anon".to_string(),
        }
    }

    /// fd control-endpoint'а — элемент readiness-набора мультиплексора.
    pub fn ctrl_fd(&self) -> RawFd {
        self.ctrl.as_raw_fd()
    }
}

/// Строит пары путей `<base>-<index>-ctrl` / `<base>-<index>-data`.
///
/// Индексы дополняются нулём до двух цифр когда каналов ≥ 10 — так же
/// нумерует устройства драйвер.
pub fn enum_devices(
    base: &str,
    channels: &Channels,
) -> Vec<(PathBuf, PathBuf)> {
    let indices = channels.indices();
    let pad = indices.len() >= 10;

    indices
        .into_iter()
        .map(|c| {
            let prefix = if pad {
                format!("{base}-{c:02}")
            } else {
                format!("{base}-{c}")
            };
            (
                PathBuf::from(format!("{prefix}-ctrl")),
                PathBuf::from(format!("{prefix}-data")),
            )
        })
        .collect()
}

/// Открывает все пары из списка путей.
///
/// Первая же неоткрывшаяся пара — ошибка: частично открытый набор каналов
/// не возвращается.
pub fn open_devices(paths: &[(PathBuf, PathBuf)]) -> AcqResult<Vec<DeviceChannelPair>> {
    paths
        .iter()
        .map(|(ctrl, data)| DeviceChannelPair::open(ctrl, data))
        .collect()
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_devices_padded_indices() {
        // 12 каналов — двухзначные индексы -00..-11
        let devs = enum_devices("/dev/zio/zzero-0000-0", &Channels::Count(12));

        assert_eq!(devs.len(), 12);
        assert_eq!(
            devs[0].0,
            PathBuf::from("/dev/zio/zzero-0000-0-00-ctrl")
        );
        assert_eq!(
            devs[0].1,
            PathBuf::from("/dev/zio/zzero-0000-0-00-data")
        );
        assert_eq!(
            devs[11].0,
            PathBuf::from("/dev/zio/zzero-0000-0-11-ctrl")
        );
    }

    #[test]
    fn test_enum_devices_unpadded_indices() {
        // 5 каналов — однозначные индексы -0..-4
        let devs = enum_devices("/dev/zio/zzero-0000-0", &Channels::Count(5));

        assert_eq!(devs.len(), 5);
        assert_eq!(devs[0].0, PathBuf::from("/dev/zio/zzero-0000-0-0-ctrl"));
        assert_eq!(devs[4].1, PathBuf::from("/dev/zio/zzero-0000-0-4-data"));
    }

    #[test]
    fn test_enum_devices_explicit_list() {
        let devs = enum_devices("/dev/zio/adc", &Channels::List(vec![2, 7]));

        assert_eq!(devs.len(), 2);
        assert_eq!(devs[0].0, PathBuf::from("/dev/zio/adc-2-ctrl"));
        assert_eq!(devs[1].1, PathBuf::from("/dev/zio/adc-7-data"));
    }

    #[test]
    fn test_enum_devices_padding_follows_list_len() {
        // Паддинг зависит от числа каналов в списке, не от значения индекса
        let list: Vec<u32> = (0..10).collect();
        let devs = enum_devices("/dev/zio/adc", &Channels::List(list));

        assert_eq!(devs[0].0, PathBuf::from("/dev/zio/adc-00-ctrl"));
        assert_eq!(devs[9].0, PathBuf::from("/dev/zio/adc-09-ctrl"));
    }

    #[test]
    fn test_open_devices_from_tempdir() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("zzero-0000-0");
        let base = base.to_string_lossy().into_owned();

        let paths = enum_devices(&base, &Channels::Count(2));
        for (ctrl, data) in &paths {
            std::fs::write(ctrl, b"").unwrap();
            std::fs::write(data, b"").unwrap();
        }

        let pairs = open_devices(&paths).unwrap();
        assert_eq!(pairs.len(), 2);
        assert!(pairs[0].label.ends_with("-0-ctrl"));
    }

    #[test]
    fn test_open_devices_missing_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("nodev").to_string_lossy().into_owned();

        let paths = enum_devices(&base, &Channels::Count(1));
        let err = open_devices(&paths).unwrap_err();

        assert!(matches!(err, AcqError::DeviceNotFound(_)));
    }
}

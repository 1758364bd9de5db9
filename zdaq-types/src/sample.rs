use serde::Serialize;

/// Ширина одной выборки в байтах (объявляется в control-блоке полем `ssize`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum SampleWidth {
    /// 1 байт — u8
    U8 = 1,
    /// 2 байта — u16
    U16 = 2,
    /// 4 байта — u32
    U32 = 4,
    /// 8 байт — u64
    U64 = 8,
}

/// Блок выборок одного acquisition-события.
///
/// Ровно `nsamples` беззнаковых значений, ширина элемента выбирается из
/// `ssize` control-блока. Вариант enum фиксирует реальную ширину.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SampleBlock {
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
    U64(Vec<u64>),
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl SampleWidth {
    /// Выбирает ширину по полю `ssize` control-блока.
    ///
    /// Любой `ssize` вне {1, 2, 4, 8} трактуется как 1 байт — намеренно
    /// сохранённое допущение протокола v1.0; итоговая проверка длины payload
    /// всё равно отловит несоответствие `nsamples × ssize`.
    pub fn from_ssize(ssize: u16) -> Self {
        match ssize {
            2 => SampleWidth::U16,
            4 => SampleWidth::U32,
            8 => SampleWidth::U64,
            _ => SampleWidth::U8,
        }
    }

    /// Ширина элемента в байтах.
    pub fn bytes(&self) -> usize {
        *self as usize
    }
}

impl SampleBlock {
    /// Количество выборок в блоке.
    pub fn len(&self) -> usize {
        match self {
            SampleBlock::U8(v) => v.len(),
            SampleBlock::U16(v) => v.len(),
            SampleBlock::U32(v) => v.len(),
            SampleBlock::U64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ширина элементов блока.
    pub fn width(&self) -> SampleWidth {
        match self {
            SampleBlock::U8(_) => SampleWidth::U8,
            SampleBlock::U16(_) => SampleWidth::U16,
            SampleBlock::U32(_) => SampleWidth::U32,
            SampleBlock::U64(_) => SampleWidth::U64,
        }
    }

    /// Выборка по индексу, расширенная до u64.
    pub fn get(
        &self,
        idx: usize,
    ) -> Option<u64> {
        match self {
            SampleBlock::U8(v) => v.get(idx).map(|&s| s as u64),
            SampleBlock::U16(v) => v.get(idx).map(|&s| s as u64),
            SampleBlock::U32(v) => v.get(idx).map(|&s| s as u64),
            SampleBlock::U64(v) => v.get(idx).copied(),
        }
    }

    /// Все выборки, расширенные до u64 (удобно для сравнения в тестах и
    /// экспорта).
    pub fn to_u64_vec(&self) -> Vec<u64> {
        match self {
            SampleBlock::U8(v) => v.iter().map(|&s| s as u64).collect(),
            SampleBlock::U16(v) => v.iter().map(|&s| s as u64).collect(),
            SampleBlock::U32(v) => v.iter().map(|&s| s as u64).collect(),
            SampleBlock::U64(v) => v.iter().copied().collect(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////

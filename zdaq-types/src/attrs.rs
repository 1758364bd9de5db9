use serde::Serialize;

/// Количество стандартных атрибутов в одном attribute-регионе.
pub const STD_ATTR_COUNT: usize = 16;

/// Количество расширенных атрибутов в одном attribute-регионе.
pub const EXT_ATTR_COUNT: usize = 32;

/// Набор атрибутов канала или триггера (один 200-байтный регион).
///
/// Биты в `std_mask`/`ext_mask` помечают какие из значений семантически
/// валидны. Маски здесь — метаданные, а не фильтры: массивы всегда содержат
/// все 16/32 значения независимо от масок.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeSet {
    /// Маска валидности стандартных атрибутов
    pub std_mask: u16,
    /// Маска валидности расширенных атрибутов
    pub ext_mask: u32,
    /// Стандартные атрибуты (ровно 16 значений)
    pub std_attrs: [u32; STD_ATTR_COUNT],
    /// Расширенные атрибуты (ровно 32 значения)
    pub ext_attrs: [u32; EXT_ATTR_COUNT],
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self {
            std_mask: 0,
            ext_mask: 0,
            std_attrs: [0; STD_ATTR_COUNT],
            ext_attrs: [0; EXT_ATTR_COUNT],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_fixed_cardinality() {
        let a = AttributeSet::default();
        assert_eq!(a.std_attrs.len(), 16);
        assert_eq!(a.ext_attrs.len(), 32);
    }
}

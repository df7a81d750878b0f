use contracts::enums::SortDirection;
use serde::{Deserialize, Serialize};

/// Сортировка одной колонки, как её понимает виджет таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnOrder {
    pub column: usize,
    pub direction: SortDirection,
}

impl ColumnOrder {
    pub fn new(column: usize, direction: SortDirection) -> Self {
        Self { column, direction }
    }
}

/// Состояние пагинации (`page.info()`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: u32,
    pub pages: u32,
    pub start: u32,
    pub end: u32,
    pub length: i32,
    pub records_total: u32,
    pub records_display: u32,
}

/// Часть API виджета таблицы, которой пользуется контроллер.
///
/// Все методы берут `&self`: `draw()` синхронно вызывает обработчик
/// перерисовки, который снова обращается к виджету.
pub trait TableWidget {
    /// Разрешает сортировку таблицы и указанной колонки. Обратно не отключается.
    fn grant_sortable(&self, column: usize);

    fn current_order(&self) -> Vec<ColumnOrder>;

    /// Задаёт сортировку без перерисовки; пустой срез снимает её
    fn set_order(&self, order: &[ColumnOrder]);

    /// Возвращает строки в исходный порядок документа
    fn restore_natural_order(&self);

    fn search(&self, query: &str);

    fn search_column(&self, column: usize, query: &str);

    /// Сбрасывает общий поиск и поиск по всем колонкам
    fn clear_searches(&self);

    fn draw(&self);

    fn page_info(&self) -> Option<PageInfo>;
}

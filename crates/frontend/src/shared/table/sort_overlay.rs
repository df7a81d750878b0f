//! Сортировка по колонке приоритета поверх таблицы с отключённой сортировкой.
//!
//! Виджет настроен без сортировки, чтобы случайный клик по заголовку не
//! перемешивал строки. Колонке приоритета сортировка выдаётся как постоянное
//! право: при активном направлении флаги подтверждаются на каждой перерисовке
//! и никогда не снимаются, иначе порядок тихо откатывается при смене
//! страницы или поиске.

use super::widget::{ColumnOrder, TableWidget};
use contracts::enums::sort_direction::direction_code;
use contracts::enums::SortDirection;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Что сделал обработчик перерисовки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawAction {
    /// Сортировка не выбрана, естественный порядок
    Untouched,
    /// Флаги подтверждены, порядок уже совпадал
    Reasserted,
    /// Порядок виджета разошёлся с выбранным и применён заново
    Reapplied,
}

type DisplayListener = Rc<dyn Fn(Option<SortDirection>)>;

pub struct PrioritySortOverlay<W: TableWidget> {
    widget: W,
    column: usize,
    direction: Cell<Option<SortDirection>>,
    display: RefCell<Option<DisplayListener>>,
}

impl<W: TableWidget> PrioritySortOverlay<W> {
    pub fn new(widget: W, column: usize) -> Self {
        Self {
            widget,
            column,
            direction: Cell::new(None),
            display: RefCell::new(None),
        }
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.direction.get()
    }

    /// Значение, которое должно стоять в выпадающем списке
    pub fn dropdown_value(&self) -> &'static str {
        direction_code(self.direction.get())
    }

    /// Слушатель визуального состояния выпадающего списка
    pub fn set_display_listener(&self, listener: impl Fn(Option<SortDirection>) + 'static) {
        *self.display.borrow_mut() = Some(Rc::new(listener));
    }

    fn notify_display(&self) {
        let listener = self.display.borrow().clone();
        if let Some(listener) = listener {
            listener(self.direction.get());
        }
    }

    fn wanted_order(&self, direction: SortDirection) -> ColumnOrder {
        ColumnOrder::new(self.column, direction)
    }

    /// Выбор пользователя в выпадающем списке: "", "asc" или "desc".
    /// Незнакомое значение считается выбором "Default Order".
    pub fn select(&self, value: &str) -> Option<SortDirection> {
        let direction = SortDirection::from_code(value);
        if direction.is_none() && !value.is_empty() {
            log::debug!("unknown priority sort value {:?}, using default order", value);
        }
        self.apply(direction);
        direction
    }

    pub fn apply(&self, direction: Option<SortDirection>) {
        self.direction.set(direction);
        self.widget.search_column(self.column, "");

        match direction {
            Some(direction) => {
                self.widget.grant_sortable(self.column);
                self.widget.set_order(&[self.wanted_order(direction)]);
            }
            None => {
                self.widget.set_order(&[]);
                self.widget.restore_natural_order();
            }
        }

        self.notify_display();
        self.widget.draw();
        log::debug!(
            "priority sort on column {} set to {:?}",
            self.column,
            self.dropdown_value()
        );
    }

    /// Сброс фильтра: естественный порядок и сброшенный список
    pub fn clear(&self) {
        self.apply(None);
    }

    /// Обработчик перерисовки виджета (пагинация, поиск, размер страницы)
    pub fn on_redraw(&self) -> RedrawAction {
        let Some(direction) = self.direction.get() else {
            return RedrawAction::Untouched;
        };

        self.widget.grant_sortable(self.column);
        let wanted = self.wanted_order(direction);
        if self.widget.current_order() == [wanted] {
            return RedrawAction::Reasserted;
        }

        log::debug!("table order drifted, reapplying {:?}", wanted);
        self.widget.set_order(&[wanted]);
        self.widget.draw();
        RedrawAction::Reapplied
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::table::widget::PageInfo;
    use std::collections::{BTreeMap, BTreeSet};

    /// Виджет в памяти. Имитирует DataTables с `ordering: false`:
    /// сортировка применяется только при выданном праве на колонку.
    #[derive(Default)]
    pub struct FakeTable {
        pub order: RefCell<Vec<ColumnOrder>>,
        pub sortable: RefCell<BTreeSet<usize>>,
        pub column_searches: RefCell<BTreeMap<usize, String>>,
        pub global_search: RefCell<String>,
        pub natural_restores: Cell<usize>,
        pub draws: Cell<usize>,
    }

    impl FakeTable {
        /// Порядок, реально применённый к строкам
        pub fn effective_order(&self) -> Vec<ColumnOrder> {
            let sortable = self.sortable.borrow();
            self.order
                .borrow()
                .iter()
                .filter(|o| sortable.contains(&o.column))
                .copied()
                .collect()
        }
    }

    impl TableWidget for FakeTable {
        fn grant_sortable(&self, column: usize) {
            self.sortable.borrow_mut().insert(column);
        }

        fn current_order(&self) -> Vec<ColumnOrder> {
            self.order.borrow().clone()
        }

        fn set_order(&self, order: &[ColumnOrder]) {
            *self.order.borrow_mut() = order.to_vec();
        }

        fn restore_natural_order(&self) {
            self.natural_restores.set(self.natural_restores.get() + 1);
        }

        fn search(&self, query: &str) {
            *self.global_search.borrow_mut() = query.to_string();
        }

        fn search_column(&self, column: usize, query: &str) {
            let mut searches = self.column_searches.borrow_mut();
            if query.is_empty() {
                searches.remove(&column);
            } else {
                searches.insert(column, query.to_string());
            }
        }

        fn clear_searches(&self) {
            self.global_search.borrow_mut().clear();
            self.column_searches.borrow_mut().clear();
        }

        fn draw(&self) {
            self.draws.set(self.draws.get() + 1);
        }

        fn page_info(&self) -> Option<PageInfo> {
            None
        }
    }

    const PRIORITY: usize = 2;

    fn overlay() -> PrioritySortOverlay<FakeTable> {
        PrioritySortOverlay::new(FakeTable::default(), PRIORITY)
    }

    fn desc() -> Vec<ColumnOrder> {
        vec![ColumnOrder::new(PRIORITY, SortDirection::Descending)]
    }

    #[test]
    fn test_starts_in_natural_order() {
        let overlay = overlay();
        assert_eq!(overlay.direction(), None);
        assert_eq!(overlay.dropdown_value(), "");
        assert_eq!(overlay.on_redraw(), RedrawAction::Untouched);
        assert!(overlay.widget().current_order().is_empty());
    }

    #[test]
    fn test_descending_survives_redraws() {
        let overlay = overlay();
        overlay.select("desc");
        assert_eq!(overlay.widget().effective_order(), desc());

        // Смена размера страницы, поиск, переход на страницу
        for _ in 0..3 {
            overlay.widget().search("pump");
            overlay.on_redraw();
            assert_eq!(overlay.widget().effective_order(), desc());
            assert_eq!(overlay.direction(), Some(SortDirection::Descending));
        }
    }

    #[test]
    fn test_redraw_without_drift_does_not_redraw_again() {
        let overlay = overlay();
        overlay.select("asc");
        let draws = overlay.widget().draws.get();

        assert_eq!(overlay.on_redraw(), RedrawAction::Reasserted);
        assert_eq!(overlay.widget().draws.get(), draws);
    }

    #[test]
    fn test_drifted_order_is_reapplied() {
        let overlay = overlay();
        overlay.select("desc");

        // Виджет сбросил порядок и право сортировки колонки
        overlay.widget().order.borrow_mut().clear();
        overlay.widget().sortable.borrow_mut().clear();

        assert_eq!(overlay.on_redraw(), RedrawAction::Reapplied);
        assert_eq!(overlay.widget().effective_order(), desc());
        // Повторная перерисовка, вызванная draw(), уже ничего не меняет
        assert_eq!(overlay.on_redraw(), RedrawAction::Reasserted);
    }

    #[test]
    fn test_default_clears_order_entirely() {
        let overlay = overlay();
        overlay.select("asc");
        overlay.select("");

        assert_eq!(overlay.direction(), None);
        assert!(overlay.widget().current_order().is_empty());
        assert_eq!(overlay.widget().natural_restores.get(), 1);

        assert_eq!(overlay.on_redraw(), RedrawAction::Untouched);
        assert!(overlay.widget().current_order().is_empty());
    }

    #[test]
    fn test_selection_clears_column_filter() {
        let overlay = overlay();
        overlay.widget().search_column(PRIORITY, "3");
        overlay.widget().search_column(4, "open");

        overlay.select("asc");
        let searches = overlay.widget().column_searches.borrow();
        assert!(!searches.contains_key(&PRIORITY));
        assert_eq!(searches.get(&4).map(String::as_str), Some("open"));
    }

    #[test]
    fn test_unknown_value_means_default() {
        let overlay = overlay();
        overlay.select("desc");
        assert_eq!(overlay.select("sideways"), None);
        assert!(overlay.widget().current_order().is_empty());
        assert_eq!(overlay.dropdown_value(), "");
    }

    #[test]
    fn test_clear_resets_state_and_display() {
        let overlay = overlay();
        let shown = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&shown);
        overlay.set_display_listener(move |d| sink.borrow_mut().push(direction_code(d)));

        overlay.select("desc");
        overlay.clear();

        assert_eq!(overlay.direction(), None);
        assert_eq!(shown.borrow().as_slice(), ["desc", ""]);
    }

    #[test]
    fn test_display_follows_last_selection() {
        let sequences: &[&[&str]] = &[
            &["asc"],
            &["desc", "asc"],
            &["asc", "", "desc"],
            &["desc", "desc", ""],
            &["", "asc", "desc", "asc"],
        ];

        for sequence in sequences {
            let overlay = overlay();
            let shown = Rc::new(RefCell::new(String::from("unset")));
            let sink = Rc::clone(&shown);
            overlay.set_display_listener(move |d| *sink.borrow_mut() = direction_code(d).to_string());

            for value in sequence.iter() {
                overlay.select(value);
                assert_eq!(shown.borrow().as_str(), *value);
                assert_eq!(overlay.dropdown_value(), *value);
            }
            overlay.on_redraw();
            assert_eq!(shown.borrow().as_str(), *sequence.last().unwrap());
        }
    }
}

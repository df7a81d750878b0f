//! Привязки к jQuery DataTables и реализация `TableWidget` поверх них.

use super::options::DataTableOptions;
use super::widget::{ColumnOrder, PageInfo, TableWidget};
use crate::shared::dom::js_error;
use contracts::enums::SortDirection;
use contracts::PortalError;
use js_sys::{Array, Function, Object, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    type JQuery;

    #[wasm_bindgen(catch, js_name = jQuery)]
    fn jquery(selector: &str) -> Result<JQuery, JsValue>;

    #[wasm_bindgen(method, catch, js_name = DataTable)]
    fn data_table(this: &JQuery, options: &JsValue) -> Result<Api, JsValue>;

    /// Экземпляр `DataTables.Api`
    #[derive(Clone)]
    type Api;

    #[wasm_bindgen(method)]
    fn settings(this: &Api) -> Array;

    #[wasm_bindgen(method, js_name = order)]
    fn get_order(this: &Api) -> JsValue;

    #[wasm_bindgen(method, js_name = order)]
    fn set_order(this: &Api, order: &JsValue) -> Api;

    #[wasm_bindgen(method, js_name = search)]
    fn set_search(this: &Api, query: &str) -> Api;

    #[wasm_bindgen(method)]
    fn column(this: &Api, index: u32) -> Api;

    #[wasm_bindgen(method)]
    fn columns(this: &Api) -> Api;

    #[wasm_bindgen(method)]
    fn rows(this: &Api, modifier: &JsValue) -> Api;

    #[wasm_bindgen(method)]
    fn data(this: &Api) -> Api;

    #[wasm_bindgen(method)]
    fn header(this: &Api) -> Api;

    #[wasm_bindgen(method, js_name = toArray)]
    fn to_array(this: &Api) -> Array;

    #[wasm_bindgen(method)]
    fn table(this: &Api) -> Api;

    #[wasm_bindgen(method)]
    fn container(this: &Api) -> Element;

    #[wasm_bindgen(method)]
    fn draw(this: &Api) -> Api;
}

fn global_property(name: &str) -> JsValue {
    Reflect::get(&js_sys::global(), &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED)
}

fn property(target: &JsValue, name: &str) -> Result<JsValue, PortalError> {
    Reflect::get(target, &JsValue::from_str(name)).map_err(js_error)
}

fn set_property(target: &JsValue, name: &str, value: &JsValue) -> Result<(), PortalError> {
    Reflect::set(target, &JsValue::from_str(name), value)
        .map(|_| ())
        .map_err(js_error)
}

/// Проверяет, что на странице подключены jQuery и плагин DataTables
fn require_plugin() -> Result<(), PortalError> {
    let jquery = global_property("jQuery");
    if jquery.is_undefined() || jquery.is_null() {
        return Err(PortalError::missing("jQuery"));
    }
    let plugin = property(&jquery, "fn").and_then(|fns| property(&fns, "DataTable"))?;
    if !plugin.is_function() {
        return Err(PortalError::missing("DataTables plugin"));
    }
    Ok(())
}

/// Таблица DataTables на странице
#[derive(Clone)]
pub struct DataTable {
    api: Api,
}

impl DataTable {
    /// Создаёт виджет на `#table_id` (id без `#`). `on_draw` вызывается после каждой
    /// перерисовки, включая первую, выполняемую ещё внутри конструктора.
    pub fn create<F>(table_id: &str, options: &DataTableOptions, on_draw: F) -> Result<Self, PortalError>
    where
        F: FnMut() + 'static,
    {
        require_plugin()?;

        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let js_options = options
            .serialize(&serializer)
            .map_err(|e| PortalError::InvalidConfig(e.to_string()))?;

        let draw_callback = Closure::wrap(Box::new(on_draw) as Box<dyn FnMut()>);
        set_property(&js_options, "drawCallback", draw_callback.as_ref())?;
        draw_callback.forget();

        let api = jquery(&format!("#{}", table_id))
            .map_err(js_error)?
            .data_table(&js_options)
            .map_err(js_error)?;
        log::info!("table #{} initialised", table_id);
        Ok(Self { api })
    }

    fn settings(&self) -> Result<JsValue, PortalError> {
        let settings = self.api.settings().get(0);
        if settings.is_undefined() {
            return Err(PortalError::missing("table settings"));
        }
        Ok(settings)
    }

    fn grant(&self, column: usize) -> Result<(), PortalError> {
        let settings = self.settings()?;
        let features = property(&settings, "oFeatures")?;
        set_property(&features, "bSort", &JsValue::TRUE)?;

        let columns = property(&settings, "aoColumns")?;
        let column = Reflect::get_u32(&columns, column as u32).map_err(js_error)?;
        if column.is_undefined() {
            return Err(PortalError::Dom("priority column is out of range".to_string()));
        }
        set_property(&column, "bSortable", &JsValue::TRUE)
    }

    fn natural_order(&self) -> Result<(), PortalError> {
        let settings = self.settings()?;
        let master: Array = property(&settings, "aiDisplayMaster")?
            .dyn_into()
            .map_err(js_error)?;

        let mut indexes: Vec<f64> = master.iter().filter_map(|v| v.as_f64()).collect();
        indexes.sort_by(|a, b| a.total_cmp(b));
        for (position, index) in indexes.into_iter().enumerate() {
            master.set(position as u32, JsValue::from_f64(index));
        }
        Ok(())
    }

    /// Обёртка `.dataTables_wrapper` вокруг таблицы
    pub fn wrapper(&self) -> Element {
        self.api.table().container()
    }

    /// Заголовки колонок (текст `<th>`)
    pub fn headers(&self) -> Vec<String> {
        self.api
            .columns()
            .header()
            .to_array()
            .iter()
            .filter_map(|th| th.dyn_into::<web_sys::Node>().ok())
            .map(|th| th.text_content().unwrap_or_default().trim().to_string())
            .collect()
    }

    /// Строки с учётом текущего поиска, ячейки как HTML из источника
    pub fn filtered_rows(&self) -> Result<Vec<Vec<String>>, PortalError> {
        let modifier = Object::new();
        set_property(&modifier, "search", &JsValue::from_str("applied"))?;
        let rows = self.api.rows(&modifier).data().to_array();
        serde_wasm_bindgen::from_value(rows.into()).map_err(|e| PortalError::Dom(e.to_string()))
    }

    fn read_page_info(&self) -> Result<PageInfo, PortalError> {
        let page = property(&self.api, "page")?;
        let info: Function = property(&page, "info")?.dyn_into().map_err(js_error)?;
        let value = info.call0(&self.api).map_err(js_error)?;
        serde_wasm_bindgen::from_value(value).map_err(|e| PortalError::Dom(e.to_string()))
    }
}

impl TableWidget for DataTable {
    fn grant_sortable(&self, column: usize) {
        if let Err(e) = self.grant(column) {
            log::warn!("cannot enable sorting on column {}: {}", column, e);
        }
    }

    fn current_order(&self) -> Vec<ColumnOrder> {
        let raw: Vec<(usize, String)> =
            serde_wasm_bindgen::from_value(self.api.get_order()).unwrap_or_default();
        raw.into_iter()
            .filter_map(|(column, code)| {
                SortDirection::from_code(&code).map(|direction| ColumnOrder::new(column, direction))
            })
            .collect()
    }

    fn set_order(&self, order: &[ColumnOrder]) {
        let pairs: Vec<(usize, &str)> = order
            .iter()
            .map(|o| (o.column, o.direction.code()))
            .collect();
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        match pairs.serialize(&serializer) {
            Ok(value) => {
                self.api.set_order(&value);
            }
            Err(e) => log::warn!("cannot set table order: {}", e),
        }
    }

    fn restore_natural_order(&self) {
        if let Err(e) = self.natural_order() {
            log::debug!("natural order not restored: {}", e);
        }
    }

    fn search(&self, query: &str) {
        self.api.set_search(query);
    }

    fn search_column(&self, column: usize, query: &str) {
        self.api.column(column as u32).set_search(query);
    }

    fn clear_searches(&self) {
        self.api.set_search("");
        self.api.columns().set_search("");
    }

    fn draw(&self) {
        self.api.draw();
    }

    fn page_info(&self) -> Option<PageInfo> {
        self.read_page_info()
            .map_err(|e| log::debug!("page info unavailable: {}", e))
            .ok()
    }
}

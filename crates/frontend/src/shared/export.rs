/// Выгрузка отфильтрованных строк таблицы в CSV с разделителем `;`
use crate::shared::dom::{self, js_error};
use contracts::PortalError;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const CSV_SEPARATOR: char = ';';

/// Текст ячейки без HTML-разметки: бейджи, иконки и ссылки в выгрузку не попадают
pub fn strip_markup(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }

    let decoded = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Экранирует CSV ячейку если необходимо
pub fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(CSV_SEPARATOR) || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn csv_line<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .map(|cell| escape_csv_cell(cell.as_ref()))
        .collect::<Vec<_>>()
        .join(&CSV_SEPARATOR.to_string())
}

/// Собирает CSV: BOM для Excel, заголовки, строки с очищенными ячейками
pub fn build_csv(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut csv = String::new();
    csv.push('\u{FEFF}');
    csv.push_str(&csv_line(headers));
    csv.push('\n');

    for row in rows {
        let cells: Vec<String> = row.iter().map(|cell| strip_markup(cell)).collect();
        csv.push_str(&csv_line(&cells));
        csv.push('\n');
    }
    csv
}

pub fn csv_filename(name: &str) -> String {
    let name = name.trim();
    let name = if name.is_empty() { "export" } else { name };
    if name.to_ascii_lowercase().ends_with(".csv") {
        name.to_string()
    } else {
        format!("{}.csv", name)
    }
}

/// Отдаёт CSV браузеру как скачиваемый файл
pub fn download_csv(content: &str, filename: &str) -> Result<(), PortalError> {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &properties).map_err(js_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let document = dom::require_document()?;
    let body = document.body().ok_or_else(|| PortalError::missing("document body"))?;
    let anchor = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| PortalError::Dom("anchor cast failed".to_string()))?;

    anchor.set_href(&url);
    anchor.set_download(&csv_filename(filename));
    let _ = anchor.style().set_property("display", "none");

    body.append_child(&anchor).map_err(js_error)?;
    anchor.click();
    body.remove_child(&anchor).map_err(js_error)?;
    Url::revoke_object_url(&url).map_err(js_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup(r#"<span class="badge priority-3">3</span>"#), "3");
        assert_eq!(strip_markup("<a href=\"/x\">Edit</a><a>Delete</a>"), "Edit Delete");
        assert_eq!(strip_markup("Tom &amp; Jerry&nbsp;&lt;3"), "Tom & Jerry <3");
        assert_eq!(strip_markup("  plain\n text "), "plain text");
    }

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("simple"), "simple");
        assert_eq!(escape_csv_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("two\nlines"), "\"two\nlines\"");
        // Запятая не разделитель
        assert_eq!(escape_csv_cell("a,b"), "a,b");
    }

    #[test]
    fn test_build_csv() {
        let headers = vec!["Title".to_string(), "Priority".to_string()];
        let rows = vec![
            vec!["Maintenance; Friday".to_string(), "<span class=\"badge\">5</span>".to_string()],
            vec!["Release".to_string(), "1".to_string()],
        ];

        let csv = build_csv(&headers, &rows);
        assert!(csv.starts_with('\u{FEFF}'));
        assert_eq!(
            csv.trim_start_matches('\u{FEFF}'),
            "Title;Priority\n\"Maintenance; Friday\";5\nRelease;1\n"
        );
    }

    #[test]
    fn test_csv_filename() {
        assert_eq!(csv_filename("announcements"), "announcements.csv");
        assert_eq!(csv_filename("report.CSV"), "report.CSV");
        assert_eq!(csv_filename("  "), "export.csv");
    }
}

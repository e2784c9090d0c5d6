use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use super::{TabularError, TabularStore};
use crate::domain::table::RecordTable;

const SHEET_NAME: &str = "Sheet1";
const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Spreadsheet store: reads the first worksheet of xlsx/xls/ods files and
/// writes xlsx
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetStore;

/// Typed value for a text cell on its way back into a worksheet
#[derive(Debug, Clone, Copy, PartialEq)]
enum CellValue<'a> {
    Number(f64),
    Boolean(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Text(&'a str),
}

impl<'a> CellValue<'a> {
    /// Only text that the reader itself would produce is typed, so other
    /// spellings stay strings
    fn parse(value: &'a str) -> Self {
        if let Some(n) = as_number(value) {
            return CellValue::Number(n);
        }
        match value {
            "TRUE" => return CellValue::Boolean(true),
            "FALSE" => return CellValue::Boolean(false),
            _ => {}
        }
        if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
            if date.format(DATE_FORMAT).to_string() == value {
                return CellValue::Date(date);
            }
        }
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, DATETIME_FORMAT) {
            if datetime.format(DATETIME_FORMAT).to_string() == value {
                return CellValue::DateTime(datetime);
            }
        }
        CellValue::Text(value)
    }
}

/// Cells whose text survives a trip through `f64` are written as numbers
fn as_number(value: &str) -> Option<f64> {
    let n = value.parse::<f64>().ok()?;
    (n.is_finite() && n.to_string() == value).then_some(n)
}

fn format_datetime(datetime: NaiveDateTime) -> String {
    if datetime.time() == NaiveTime::MIN {
        datetime.format(DATE_FORMAT).to_string()
    } else {
        datetime.format(DATETIME_FORMAT).to_string()
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::Bool(true) => "TRUE".to_string(),
        Data::Bool(false) => "FALSE".to_string(),
        Data::DateTime(dt) if dt.is_datetime() => dt
            .as_datetime()
            .map_or_else(|| dt.as_f64().to_string(), format_datetime),
        other => other.to_string(),
    }
}

struct CellFormats {
    date: Format,
    datetime: Format,
}

fn write_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &str,
    formats: &CellFormats,
) -> Result<(), XlsxError> {
    match CellValue::parse(value) {
        CellValue::Number(n) => sheet.write_number(row, col, n)?,
        CellValue::Boolean(b) => sheet.write_boolean(row, col, b)?,
        CellValue::Date(date) => sheet.write_datetime_with_format(row, col, date, &formats.date)?,
        CellValue::DateTime(datetime) => {
            sheet.write_datetime_with_format(row, col, datetime, &formats.datetime)?
        }
        CellValue::Text(text) => sheet.write_string(row, col, text)?,
    };
    Ok(())
}

impl TabularStore for SpreadsheetStore {
    fn read(&self, path: &Path) -> Result<RecordTable, TabularError> {
        let mut workbook = open_workbook_auto(path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| TabularError::NoWorksheet(path.display().to_string()))??;

        let mut rows = range.rows();
        let headers: Vec<String> = rows
            .next()
            .map(|row| row.iter().map(cell_text).collect())
            .unwrap_or_default();
        let rows = rows
            .map(|row| row.iter().map(cell_text).collect())
            .collect();
        Ok(RecordTable::new(headers, rows))
    }

    fn write(&self, table: &RecordTable, path: &Path) -> Result<(), TabularError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let formats = CellFormats {
            date: Format::new().set_num_format("yyyy-mm-dd"),
            datetime: Format::new().set_num_format("yyyy-mm-dd hh:mm:ss"),
        };
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;

        for (col, header) in table.headers().iter().enumerate() {
            let col = u16::try_from(col).map_err(|_| XlsxError::RowColumnLimitError)?;
            sheet.write_string_with_format(0, col, header, &header_format)?;
        }
        for (r, row) in table.rows().enumerate() {
            let r = u32::try_from(r + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
            for (col, value) in row.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                let col = u16::try_from(col).map_err(|_| XlsxError::RowColumnLimitError)?;
                write_cell(sheet, r, col, value, &formats)?;
            }
        }
        workbook.save(path)?;
        Ok(())
    }
}

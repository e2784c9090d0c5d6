use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use csv::{ReaderBuilder, WriterBuilder};

use super::{TabularError, TabularStore};
use crate::domain::table::RecordTable;

const BOM: char = '\u{feff}';

/// CSV/TSV store
#[derive(Debug, Clone, Copy)]
pub struct DelimitedStore {
    delimiter: u8,
}

impl DelimitedStore {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn read_from<R: Read>(&self, reader: R) -> Result<RecordTable, TabularError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(reader);
        let headers: Vec<String> = rdr
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if i == 0 {
                    h.trim_start_matches(BOM).to_string()
                } else {
                    h.to_string()
                }
            })
            .collect();
        let rows = rdr
            .records()
            .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
            .collect::<Result<Vec<Vec<String>>, csv::Error>>()?;
        Ok(RecordTable::new(headers, rows))
    }

    pub fn write_to<W: Write>(&self, table: &RecordTable, writer: W) -> Result<(), TabularError> {
        let mut wtr = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(writer);
        wtr.write_record(table.headers())?;
        for row in table.rows() {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl TabularStore for DelimitedStore {
    fn read(&self, path: &Path) -> Result<RecordTable, TabularError> {
        let file = File::open(path)?;
        self.read_from(file)
    }

    fn write(&self, table: &RecordTable, path: &Path) -> Result<(), TabularError> {
        let file = File::create(path)?;
        self.write_to(table, file)
    }
}

//! CSV export of the facet table.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::mesh::FacetTable;

/// Column header matching the 16-column row layout.
const HEADER: &str = "cx,cy,cz,area,v0x,v0y,v0z,v1x,v1y,v1z,v2x,v2y,v2z,nx,ny,nz";

/// Write a facet table as CSV to any writer.
///
/// One header line, then one row per facet in emission order. Values use
/// the shortest representation that round-trips through f64.
pub fn write<W: Write>(table: &FacetTable, writer: &mut W) -> Result<()> {
    writeln!(writer, "{HEADER}")?;
    for facet in table {
        let row = facet.to_row();
        let mut first = true;
        for value in row {
            if first {
                write!(writer, "{value}")?;
                first = false;
            } else {
                write!(writer, ",{value}")?;
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Save a facet table to a CSV file.
pub fn save<P: AsRef<Path>>(table: &FacetTable, path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write(table, &mut writer)?;
    writer.flush()?;
    Ok(())
}

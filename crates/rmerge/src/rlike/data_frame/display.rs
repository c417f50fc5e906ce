/* -----------------------------------------------------------------------------
DataFrame Display implementation
----------------------------------------------------------------------------- */

// dependencies
use std::fmt::{Display, Formatter};
use super::DataFrame;

// write one cell padded to width, truncating long values with an ellipsis
fn write_cell(f: &mut Formatter, val: &str, width: usize) -> std::fmt::Result {
    if val.chars().count() > width {
        let truncated: String = val.chars().take(width - 1).collect();
        write!(f, "{truncated}… ")
    } else {
        write!(f, "{val:width$} ")
    }
}

impl Display for DataFrame {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let n_show = self.n_row.min(self.print_max_rows);

        // Calculate column widths based on column names and data, build header type info
        let mut widths: Vec<usize>  = Vec::new();
        let mut labels: Vec<String> = Vec::new();
        for col_name in &self.col_names {
            let col = &self.columns[col_name];
            let label = format!("{} <{}>", col_name, col.col_type());
            let mut width = label.chars().count();
            for i in 0..n_show {
                width = width.max(col.cell_string(i).chars().count());
            }
            widths.push(width.min(self.print_max_col_width).max(2));
            labels.push(label);
        }

        // Write header including DataFrame dimensions, column names, and separator
        writeln!(f, "\nDataFrame: {} rows × {} columns", self.n_row, self.n_col())?;
        for (label, width) in labels.iter().zip(&widths) {
            write_cell(f, label, *width)?;
        }
        writeln!(f)?;
        for width in &widths {
            write!(f, "{:-<width$} ", "", width = width)?;
        }
        writeln!(f)?;

        // Write data rows
        for i in 0..n_show {
            for (col_name, width) in self.col_names.iter().zip(&widths) {
                write_cell(f, &self.columns[col_name].cell_string(i), *width)?;
            }
            writeln!(f)?;
        }

        // Show ellipsis if more rows exist
        if self.n_row > self.print_max_rows { writeln!(f, "...")?; }
        Ok(())
    }
}

//! Text and CSV file I/O
//!
//! - **text**: line-oriented sample logs
//! - **csv_reader**: header-aware CSV queries
//! - **csv_writer**: CSV output, filtering, appending and merging

pub mod csv_reader;
pub mod csv_writer;
pub mod text;

pub use csv_reader::{
    find_rows_by_value, get_column_values, get_csv_headers, get_row_count, get_unique_values,
    read_samples_as_dict, read_samples_as_list,
};
pub use csv_writer::{
    append_row_to_csv, create_sample_csv, filter_and_save, merge_csv_files,
    write_samples_from_dict, write_samples_from_list,
};
pub use text::{
    append_to_log, count_lines, read_file_content, read_sample_log, write_lines,
    write_sample_log,
};

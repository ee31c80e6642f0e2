use crate::cli::explore::constants::{MORE_ROWS_PROMPT, RAW_DATA_PROMPT};
use crate::cli::explore::prompt::ask_yes_no;
use crate::cli::explore::render::render_record;
use crate::data::TripRecord;
use std::io;

/// Offer the raw records `page_size` at a time, stopping on anything but
/// "yes" or at the end of the data.
pub(crate) fn page_raw_data(records: &[TripRecord], page_size: usize) -> io::Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    if !ask_yes_no(RAW_DATA_PROMPT)? {
        return Ok(());
    }

    let mut offset = 0;
    loop {
        let end = (offset + page_size).min(records.len());
        for (idx, record) in records[offset..end].iter().enumerate() {
            print!("{}", render_record(offset + idx + 1, record));
        }
        offset = end;

        if offset >= records.len() {
            println!("That's all of them.");
            return Ok(());
        }

        if !ask_yes_no(MORE_ROWS_PROMPT)? {
            return Ok(());
        }
    }
}

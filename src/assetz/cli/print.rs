use assetz::api::{CmdMessage, MessageLevel};
use assetz::commands::count_of;
use assetz::error::AssetzError;
use assetz::index::IndexedRecord;
use colored::Colorize;
use std::io::{Result, Write};
use unicode_width::UnicodeWidthStr;

const ID_WIDTH: usize = 5;
const CATEGORY_WIDTH: usize = 10;
const NAME_WIDTH: usize = 30;
const PRICE_WIDTH: usize = 10;
const RULE_WIDTH: usize = 60;

pub(crate) const MENU_ITEMS: [(&str, &str); 7] = [
    ("1", "List all records"),
    ("2", "Add a record"),
    ("3", "Edit a record"),
    ("4", "Delete a record"),
    ("5", "Search by name"),
    ("6", "Filter by category"),
    ("0", "Quit"),
];

pub(crate) fn print_menu(out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "{}", "Asset Manager".bold())?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    for (key, label) in MENU_ITEMS {
        writeln!(out, "{}. {}", key.yellow(), label)?;
    }
    Ok(())
}

pub(crate) fn print_messages(out: &mut impl Write, messages: &[CmdMessage]) -> Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(crate) fn print_error(out: &mut impl Write, err: &AssetzError) -> Result<()> {
    writeln!(out, "{}", err.to_string().red())
}

/// Fixed-width table. Widths are display columns, so Thai and CJK names line up.
pub(crate) fn print_table(out: &mut impl Write, records: &[IndexedRecord]) -> Result<()> {
    writeln!(out)?;
    let header = format!(
        "{} {} {} {}",
        pad_right("ID", ID_WIDTH),
        pad_right("Category", CATEGORY_WIDTH),
        pad_right("Name", NAME_WIDTH),
        pad_left("Price", PRICE_WIDTH)
    );
    writeln!(out, "{}", header.bold())?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    for entry in records {
        writeln!(
            out,
            "{} {} {} {}",
            pad_right(&entry.index.to_string(), ID_WIDTH).yellow(),
            pad_right(&entry.record.category, CATEGORY_WIDTH),
            pad_right(&entry.record.name, NAME_WIDTH),
            pad_left(&entry.record.price, PRICE_WIDTH)
        )?;
    }
    Ok(())
}

pub(crate) fn print_total(out: &mut impl Write, count: usize) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Total: {}", count_of(count, "record"))
}

/// Compact `  i: name - price currency` lines used by the category filter.
pub(crate) fn print_category_lines(
    out: &mut impl Write,
    records: &[IndexedRecord],
    currency: &str,
) -> Result<()> {
    for entry in records {
        writeln!(
            out,
            "  {}: {} - {} {}",
            entry.index.to_string().yellow(),
            entry.record.name,
            entry.record.price,
            currency
        )?;
    }
    Ok(())
}

fn pad_right(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn pad_left(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(padding), s)
}

#[cfg(test)]
pub(crate) fn plain() {
    colored::control::set_override(false);
}

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use langindex_core::StageStats;
use langindex_model::LanguageRecord;

use langindex_cli::types::{BuildResult, CrosswalkResult, ShowResult};

pub fn print_build_summary(result: &BuildResult) {
    println!("Sources: {}", result.sources_root.display());
    print_sources_table(result);
    print_stage_table(result);
    print_ambiguous_table(result);
    print_outputs_table(result);
    println!("Records: {}", result.report.record_count);
    println!("Index digest: {}", result.index_digest);
}

pub fn print_records(result: &ShowResult) {
    if result.records.len() > 1 {
        println!("{} records share {}", result.records.len(), result.query);
    }
    for record in &result.records {
        print_record_table(record);
    }
}

pub fn print_crosswalk_summary(result: &CrosswalkResult) {
    match &result.output {
        Some(path) => println!("Wrote {} code pairs to {}", result.pairs, path.display()),
        None => print!("{}", result.text),
    }
}

fn print_sources_table(result: &BuildResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Role"),
        header_cell("File"),
        header_cell("Bytes"),
        header_cell("SHA-256"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for source in &result.sources {
        let file_name = source
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(source.role),
            Cell::new(file_name),
            Cell::new(source.size),
            dim_cell(&source.sha256),
        ]);
    }
    println!("{table}");
}

fn print_stage_table(result: &BuildResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Seen"),
        header_cell("Skipped"),
        header_cell("Created"),
        header_cell("Updated"),
        header_cell("Renamed"),
        header_cell("Synthesized"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for stats in &result.report.stages {
        table.add_row(vec![
            Cell::new(stats.stage).add_attribute(Attribute::Bold),
            Cell::new(stats.seen),
            skipped_cell(stats),
            count_cell(stats.created, Color::Green),
            count_cell(stats.updated, Color::Green),
            count_cell(stats.renamed, Color::Blue),
            count_cell(stats.synthesized, Color::Blue),
        ]);
    }
    println!("{table}");
}

fn print_ambiguous_table(result: &BuildResult) {
    let ambiguous = &result.report.ambiguous;
    if ambiguous.is_empty() {
        return;
    }
    println!(
        "{} languages have no primary country but are found in several countries",
        ambiguous.len()
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tag"),
        header_cell("Name"),
        header_cell("Countries"),
    ]);
    apply_summary_table_style(&mut table);
    for entry in ambiguous {
        table.add_row(vec![
            Cell::new(&entry.tag).fg(Color::Yellow),
            Cell::new(&entry.desired_name),
            Cell::new(entry.countries.join("; ")),
        ]);
    }
    println!("{table}");
}

fn print_outputs_table(result: &BuildResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Format"),
        header_cell("Records"),
        header_cell("Path"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    if result.outputs.is_empty() {
        table.add_row(vec![dim_cell("-"), dim_cell("-"), dim_cell("-")]);
    }
    for output in &result.outputs {
        table.add_row(vec![
            Cell::new(output.format).add_attribute(Attribute::Bold),
            Cell::new(output.records),
            Cell::new(output.path.display()),
        ]);
    }
    println!("{table}");
}

fn print_record_table(record: &LanguageRecord) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell(&record.tag)]);
    apply_summary_table_style(&mut table);
    let countries: Vec<&str> = record.countries.iter().map(String::as_str).collect();
    let rows = [
        ("ISO 639-3", record.three_letter_tag.clone()),
        ("Desired name", record.desired_name.clone()),
        (
            "Macrolanguage",
            if record.is_macro_language { "yes" } else { "no" }.to_string(),
        ),
        ("Names", record.names.join("; ")),
        ("Countries", countries.join("; ")),
        ("Primary country", record.primary_country.clone()),
    ];
    for (label, value) in rows {
        let value_cell = if value.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(value)
        };
        table.add_row(vec![Cell::new(label).add_attribute(Attribute::Bold), value_cell]);
    }
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn skipped_cell(stats: &StageStats) -> Cell {
    let total = stats.skipped_total();
    if total == 0 {
        return dim_cell(0);
    }
    let reasons: Vec<String> = stats
        .skipped
        .iter()
        .map(|(reason, count)| format!("{reason}: {count}"))
        .collect();
    Cell::new(format!("{total} ({})", reasons.join(", "))).fg(Color::Yellow)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

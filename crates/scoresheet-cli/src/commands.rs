use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::Table;
use tracing::{info, info_span};

use scoresheet_core::address::project_address;
use scoresheet_core::entity::resolve_entity_address;
use scoresheet_core::{Locale, MemorySnapshot, RecordStore, ScoreSheetAssembler};
use scoresheet_model::AddressChoice;

use scoresheet_cli::cli::{AddressesArgs, BuildArgs};
use crate::summary::apply_table_style;
use crate::types::BuildResult;

pub fn run_build(args: &BuildArgs) -> Result<BuildResult> {
    let snapshot = MemorySnapshot::from_path(&args.snapshot)?;
    let locale = load_locale(args.locale.as_deref())?;
    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let enrollments = snapshot.exam_enrollments();

    let span = info_span!(
        "build",
        snapshot = %args.snapshot.display(),
        enrollment_count = enrollments.len()
    );
    let _guard = span.enter();
    let start = Instant::now();
    let assembler = ScoreSheetAssembler::new(&snapshot, &locale);
    let sheet = assembler.build_at(&enrollments, as_of)?;
    info!(
        unit_count = sheet.learning_unit_years.len(),
        duration_ms = start.elapsed().as_millis(),
        "sheet assembled"
    );

    let json = serde_json::to_string_pretty(&sheet).context("serialize sheet")?;
    match &args.output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("write sheet to {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(BuildResult {
        sheet,
        output: args.output.clone(),
    })
}

pub fn run_addresses(args: &AddressesArgs) -> Result<()> {
    let snapshot = MemorySnapshot::from_path(&args.snapshot)?;
    let locale = load_locale(args.locale.as_deref())?;
    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());

    let mut table = Table::new();
    table.set_header(vec![
        "Offering", "Source", "Recipient", "City", "Country", "Email",
    ]);
    apply_table_style(&mut table);
    for offering in &snapshot.offerings {
        let source = snapshot
            .address_preference(offering.id)
            .map_or("ENTITY_ADMINISTRATION", |preference| {
                match preference.choice {
                    AddressChoice::EntityAdministration => "ENTITY_ADMINISTRATION",
                    AddressChoice::EntityManagement => "ENTITY_MANAGEMENT",
                    AddressChoice::Custom(_) => "CUSTOM",
                }
            });
        let address = resolve_entity_address(&snapshot, offering.id, as_of)
            .map(|resolved| project_address(&resolved, &locale))
            .unwrap_or_default();
        table.add_row(vec![
            offering.acronym.clone(),
            source.to_string(),
            address.recipient,
            address.city,
            address.country,
            address.email,
        ]);
    }
    println!("{table}");
    Ok(())
}

fn load_locale(path: Option<&Path>) -> Result<Locale> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("read locale {}", path.display()))?;
            serde_json::from_str(&json).context("parse locale")
        }
        None => Ok(Locale::default()),
    }
}

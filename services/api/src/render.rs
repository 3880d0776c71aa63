use crate::infra::{load_catalog, parse_year, print_json};
use clap::Args;
use fetp_readiness::error::AppError;
use fetp_readiness::workflows::credentialing::report::views::{
    CountryReadinessSnapshot, EligibilityTable, ModalityReadinessEntry,
};
use fetp_readiness::workflows::credentialing::report::{
    country_snapshot, eligibility_table, modality_profile,
};
use fetp_readiness::workflows::credentialing::{
    AssessmentYear, EligibilityEngine, EligibilityStatus, ReviewContext, ViewerRole,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ReadinessArgs {
    /// Country to score
    #[arg(long)]
    pub(crate) country: String,
    /// Directory holding programs.csv, modalities.csv and countries.csv
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Year program maturity is measured against (defaults to the configured or current year)
    #[arg(long, value_parser = parse_year)]
    pub(crate) year: Option<AssessmentYear>,
    /// Viewer role, e.g. minister_of_health or donor_partner
    #[arg(long)]
    pub(crate) role: Option<String>,
    /// Emit JSON instead of the console summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct EligibilityArgs {
    /// Restrict the table to one WHO region (e.g. AFRO)
    #[arg(long)]
    pub(crate) region: Option<String>,
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Emit JSON instead of the console table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ModalitiesArgs {
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_readiness(args: ReadinessArgs) -> Result<(), AppError> {
    let ReadinessArgs {
        country,
        data_dir,
        year,
        role,
        json,
    } = args;

    let loaded = load_catalog(data_dir, year)?;
    let role = role.as_deref().map(ViewerRole::parse).unwrap_or_default();
    let context = ReviewContext::new(country, role, loaded.year);
    let snapshot = country_snapshot(&loaded.catalog, &context);

    if json {
        print_json(&snapshot)
    } else {
        render_snapshot(&snapshot);
        Ok(())
    }
}

pub(crate) fn run_eligibility(args: EligibilityArgs) -> Result<(), AppError> {
    let EligibilityArgs {
        region,
        data_dir,
        json,
    } = args;

    let loaded = load_catalog(data_dir, None)?;
    let table = eligibility_table(
        &loaded.catalog,
        &EligibilityEngine::default(),
        region.as_deref(),
    );

    if json {
        print_json(&table)
    } else {
        render_eligibility(&table);
        Ok(())
    }
}

pub(crate) fn run_modalities(args: ModalitiesArgs) -> Result<(), AppError> {
    let loaded = load_catalog(args.data_dir, None)?;
    let profile = modality_profile(&loaded.catalog);

    if args.json {
        print_json(&profile)
    } else {
        render_modalities(&profile);
        Ok(())
    }
}

fn render_snapshot(snapshot: &CountryReadinessSnapshot) {
    println!("Credentialing readiness: {}", snapshot.country);
    if !snapshot.known_country {
        println!("No programs or country records found; showing an empty profile.");
    }
    if let Some(region) = &snapshot.who_region {
        println!("WHO region: {region}");
    }
    println!(
        "Viewer: {} ({})",
        snapshot.viewer_role, snapshot.viewer_mandate
    );
    println!("Assessment year: {}", snapshot.assessment_year);

    println!(
        "\n{} programs | {} accredited | {} years active | modalities: {}",
        snapshot.num_programs,
        snapshot.num_accredited,
        snapshot.years_active,
        list_or_none(&snapshot.modalities)
    );
    println!(
        "Readiness score: {}/100 ({})",
        snapshot.readiness_score, snapshot.tier_label
    );

    println!("\nScore breakdown");
    for component in &snapshot.breakdown {
        println!(
            "- {}: {:.1} / {:.0}",
            component.dimension, component.score, component.max
        );
    }

    println!("\nRecommendations");
    for message in &snapshot.recommendations {
        println!("- {message}");
    }

    println!("\nInvestment priorities");
    for message in &snapshot.investment_priorities {
        println!("- {message}");
    }

    let governance = &snapshot.governance;
    println!("\nGovernance pathway");
    println!(
        "- Host institutions: {}",
        list_or_none(&governance.host_institutions)
    );
    println!("- Networks: {}", list_or_none(&governance.networks));
    println!("- Coverage: {}", governance.coverage_assessment);
    println!(
        "- Quality: {} (next step: {})",
        governance.quality_maturity, governance.accreditation_next_step
    );
    println!("- Integration: {}", governance.integration_level);
    if !governance.partner_entry_points.is_empty() {
        println!("Partner entry points:");
        for entry in &governance.partner_entry_points {
            println!("  - {entry}");
        }
    }
}

fn render_eligibility(table: &EligibilityTable) {
    match &table.region {
        Some(region) => println!("Credentialing eligibility ({region})"),
        None => println!("Credentialing eligibility (all regions)"),
    }
    for status in EligibilityStatus::ordered() {
        println!("- {}: {}", status.label(), table.counts.get(status));
    }

    if table.rows.is_empty() {
        println!("\nNo programs matched.");
        return;
    }

    println!();
    for row in &table.rows {
        println!(
            "{} ({}) | {} | accredited: {} | {}",
            row.program_name, row.country, row.modality, row.accredited, row.status
        );
        if !row.reasons.is_empty() {
            println!("  reasons: {}", row.reasons);
            println!("  actions: {}", row.actions);
        }
    }
}

fn render_modalities(profile: &[ModalityReadinessEntry]) {
    println!("Training modality readiness");
    for entry in profile {
        println!(
            "\n{} ({}): {:.0} months, {:.0}% field-based | duration score {:.1} | field intensity {:.1}",
            entry.name,
            entry.modality_id,
            entry.duration_months,
            entry.field_based_percent,
            entry.duration_score,
            entry.field_intensity_score
        );
        if let Some(description) = &entry.description {
            println!("  {description}");
        }
        if entry.programs.is_empty() {
            println!("  No programs implement this modality.");
        }
        for program in &entry.programs {
            let established = program
                .established
                .map(|year| year.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            println!(
                "  - {} ({}, est. {}, accredited: {})",
                program.program_name, program.country, established, program.accredited
            );
        }
    }
}

fn list_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "none".to_string()
    } else {
        values.join(", ")
    }
}

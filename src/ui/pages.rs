//! Dashboard pages and their render functions.
//!
//! Each page is a variant of [`Page`] and renders top-to-bottom from a
//! fresh load of its inputs; nothing survives from one render to the
//! next. A failed render returns its error to the caller, which decides
//! whether to keep navigating (interactive shell) or exit non-zero
//! (direct mode).

use dialoguer::{Input, Select, theme::ColorfulTheme};
use serde_json::json;
use std::io::IsTerminal;

use crate::analysis::{correlation, metrics, risk};
use crate::core::constants::{display, output_formats, risk as risk_constants};
use crate::core::error::{Result, VeloriskError};
use crate::data::districts::looks_like_location_code;
use crate::data::store::DataStore;
use crate::data::thefts::pad_location_code;
use crate::reporting::logging;
use crate::ui::ProgressReporter;
use crate::ui::output;

/// One dashboard page. The order of `ALL` is the navigation order; the
/// first entry is the initial selection of the interactive shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Summary,
    Hypotheses,
    Correlation,
    Prediction,
    Performance,
    Conclusions,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Summary,
        Page::Hypotheses,
        Page::Correlation,
        Page::Prediction,
        Page::Performance,
        Page::Conclusions,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Summary => "Project Summary",
            Page::Hypotheses => "Project Hypotheses",
            Page::Correlation => "Feature Correlation Study",
            Page::Prediction => "Bicycle Theft Prediction",
            Page::Performance => "Model Performance",
            Page::Conclusions => "Project Conclusions",
        }
    }
}

/// Per-render display settings derived from config and CLI
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub format: String,
    pub show_progress: bool,
    pub risk_window: u8,
}

impl RenderOptions {
    fn is_json(&self) -> bool {
        self.format == output_formats::JSON
    }

    fn is_minimal(&self) -> bool {
        self.format == output_formats::MINIMAL
    }

    fn progress(&self) -> ProgressReporter {
        ProgressReporter::new(self.show_progress && self.format == output_formats::TEXT)
    }
}

/// Prediction inputs from the CLI; missing fields are prompted for
/// interactively when stdin is a terminal.
#[derive(Debug, Clone, Default)]
pub struct PredictionArgs {
    pub bike_type: Option<String>,
    pub district: Option<String>,
    pub hour: Option<u8>,
}

/// Render one page against a fresh load of its inputs.
pub fn render_page(page: Page, store: &DataStore, options: &RenderOptions) -> Result<()> {
    match page {
        Page::Summary => render_summary(store, options),
        Page::Hypotheses => Ok(render_hypotheses(options)),
        Page::Correlation => render_correlation(store, options),
        Page::Prediction => render_prediction(store, options, &PredictionArgs::default()),
        Page::Performance => render_performance(store, options),
        Page::Conclusions => Ok(render_conclusions(options)),
    }
}

// --- Project Summary -------------------------------------------------

const SUMMARY_BLURB: &str = "\
Bicycle thefts are a persistent problem in Berlin. This dashboard \
explores historical theft reports from the city's open-data portal to \
surface when, where, and which bicycles are stolen, and offers a simple \
historical risk lookup per district and bicycle type.";

pub fn render_summary(store: &DataStore, options: &RenderOptions) -> Result<()> {
    let progress = options.progress();
    let thefts = store.load_thefts(Some(&progress))?;
    progress.finish_and_clear();
    logging::log_load_info("theft records", thefts.len(), thefts.skipped_rows);
    let frame = store.load_dataset()?;

    if options.is_json() {
        let date_range = thefts
            .date_range()
            .map(|(min, max)| json!({ "from": min.to_string(), "to": max.to_string() }));
        output::print_json(&json!({
            "page": "summary",
            "records": thefts.len(),
            "skipped_rows": thefts.skipped_rows,
            "date_range": date_range,
            "top_bike_types": thefts
                .top_bike_types(display::TOP_BIKE_TYPES)
                .iter()
                .map(|(name, count)| json!({ "bike_type": name, "count": count }))
                .collect::<Vec<_>>(),
            "dataset_rows": frame.row_count(),
            "dataset_columns": frame.column_count(),
        }));
        return Ok(());
    }

    if !options.is_minimal() {
        output::display_heading(Page::Summary.title());
        println!("\n{SUMMARY_BLURB}");
        output::display_section("Dataset overview");
    }
    output::display_key_value("Theft records", &thefts.len().to_string());
    if thefts.skipped_rows > 0 {
        output::display_key_value("Skipped rows", &thefts.skipped_rows.to_string());
    }
    if let Some((min, max)) = thefts.date_range() {
        output::display_key_value("Offense dates", &format!("{min} to {max}"));
    }

    if !options.is_minimal() {
        output::display_section("Most stolen bicycle types");
    }
    for (name, count) in thefts.top_bike_types(display::TOP_BIKE_TYPES) {
        output::display_key_value(&name, &count.to_string());
    }

    if !options.is_minimal() {
        output::display_section("Cleaned dataset preview");
        print!(
            "{}",
            output::render_table(frame.column_names(), &frame.preview(display::PREVIEW_ROWS))
        );
    }
    Ok(())
}

// --- Project Hypotheses ----------------------------------------------

const HYPOTHESES: [(&str, &str); 3] = [
    (
        "Most bicycle thefts occur during nighttime hours.",
        "Not confirmed. Theft records show a higher incidence during \
         daytime hours, with densely populated districts seeing the most \
         reports.",
    ),
    (
        "Specific bicycle types are targeted far more than others.",
        "Partially confirmed. E-bikes are over-represented, but common \
         city and road bikes also show high theft rates, likely because \
         they are easy to resell.",
    ),
    (
        "Theft rates are highest in districts with fewer security measures.",
        "Confirmed with caveats. High-traffic and touristic districts \
         dominate; poorly secured bike racks stand out as a common factor.",
    ),
];

pub fn render_hypotheses(options: &RenderOptions) {
    if options.is_json() {
        output::print_json(&json!({
            "page": "hypotheses",
            "hypotheses": HYPOTHESES
                .iter()
                .map(|(claim, finding)| json!({ "claim": claim, "finding": finding }))
                .collect::<Vec<_>>(),
        }));
        return;
    }

    if !options.is_minimal() {
        output::display_heading(Page::Hypotheses.title());
    }
    for (index, (claim, finding)) in HYPOTHESES.iter().enumerate() {
        output::display_section(&format!("Hypothesis {}", index + 1));
        println!("{claim}");
        println!("Finding: {finding}");
    }
}

// --- Feature Correlation Study ---------------------------------------

const CORRELATION_BLURB: &str = "\
Which features move together with theft occurrences? The Pearson \
correlation matrix below covers the numeric columns of the cleaned \
dataset and guides feature selection for the prediction model.";

pub fn render_correlation(store: &DataStore, options: &RenderOptions) -> Result<()> {
    let frame = store.load_dataset()?;
    let matrix = correlation::correlation_matrix(&frame, "cleaned dataset")?;

    if options.is_json() {
        output::print_json(&json!({ "page": "correlation", "matrix": matrix }));
        return Ok(());
    }

    if !options.is_minimal() {
        output::display_heading(Page::Correlation.title());
        println!("\n{CORRELATION_BLURB}");
        output::display_section("Dataset preview");
        print!(
            "{}",
            output::render_table(frame.column_names(), &frame.preview(display::PREVIEW_ROWS))
        );
        output::display_section("Pearson correlation matrix");
    }
    print!("{}", output::render_correlation_table(&matrix));
    Ok(())
}

// --- Bicycle Theft Prediction ----------------------------------------

pub fn render_prediction(
    store: &DataStore,
    options: &RenderOptions,
    args: &PredictionArgs,
) -> Result<()> {
    if !options.is_json() && !options.is_minimal() {
        output::display_heading(Page::Prediction.title());
    }

    let progress = options.progress();
    let thefts = store.load_thefts(Some(&progress))?;
    progress.finish_and_clear();
    logging::log_load_info("theft records", thefts.len(), thefts.skipped_rows);

    let (location_code, district_name) = resolve_district(store, args.district.as_deref())?;
    let bike_type = resolve_bike_type(&thefts, args.bike_type.as_deref())?;
    let hour = resolve_hour(args.hour)?;

    let assessment = risk::assess_risk(
        &thefts.records,
        &location_code,
        &bike_type,
        hour,
        options.risk_window,
    );

    if options.is_json() {
        output::print_json(&json!({
            "page": "prediction",
            "query": {
                "location_code": location_code,
                "district": district_name,
                "bike_type": bike_type,
                "hour": hour,
            },
            "assessment": assessment,
        }));
        return Ok(());
    }

    if options.is_minimal() {
        println!("{}", assessment.level);
        return Ok(());
    }

    output::display_key_value("District", district_name.as_deref().unwrap_or(&location_code));
    output::display_key_value("Bicycle type", &bike_type);
    output::display_key_value("Hour", &format!("{hour}:00"));
    output::display_risk_assessment(&assessment);
    Ok(())
}

/// Resolve the district argument to a padded location code, prompting
/// when absent. Names go through the district table; codes are used
/// directly after an existence check that only warns.
fn resolve_district(store: &DataStore, arg: Option<&str>) -> Result<(String, Option<String>)> {
    if let Some(raw) = arg {
        if looks_like_location_code(raw) {
            let code = pad_location_code(raw);
            let name = store
                .load_districts()
                .ok()
                .and_then(|districts| districts.find_by_id(&code).map(|d| d.name.clone()));
            if name.is_none() {
                log::warn!("location code {code} not present in the district table");
            }
            return Ok((code, name));
        }
        let districts = store.load_districts()?;
        return match districts.find_by_name(raw) {
            Some(district) => Ok((district.id.clone(), Some(district.name.clone()))),
            None => Err(VeloriskError::InvalidArgument(format!(
                "unknown district '{raw}'"
            ))),
        };
    }

    require_terminal("--district")?;
    let districts = store.load_districts()?;
    let names = districts.names();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("District")
        .items(&names)
        .default(0)
        .interact()?;
    let district = districts.iter().nth(selection).expect("selection in range");
    Ok((district.id.clone(), Some(district.name.clone())))
}

/// Resolve the bicycle-type argument, prompting from the categories
/// present in the data when absent.
fn resolve_bike_type(
    thefts: &crate::data::thefts::TheftTable,
    arg: Option<&str>,
) -> Result<String> {
    if let Some(raw) = arg {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(VeloriskError::InvalidArgument(
                "--bike-type must not be empty".to_string(),
            ));
        }
        return Ok(trimmed.to_string());
    }

    require_terminal("--bike-type")?;
    let mut types: Vec<String> = thefts
        .records
        .iter()
        .map(|r| r.bike_type.clone())
        .filter(|t| !t.is_empty())
        .collect();
    types.sort();
    types.dedup();
    if types.is_empty() {
        return Err(VeloriskError::EmptyInput(
            "no bicycle types in the theft records".to_string(),
        ));
    }
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Bicycle type")
        .items(&types)
        .default(0)
        .interact()?;
    Ok(types.swap_remove(selection))
}

fn resolve_hour(arg: Option<u8>) -> Result<u8> {
    if let Some(hour) = arg {
        // clap range-checks the flag; this guards programmatic callers
        if hour > risk_constants::MAX_HOUR {
            return Err(VeloriskError::InvalidArgument(format!(
                "hour must be 0-{}, got {hour}",
                risk_constants::MAX_HOUR
            )));
        }
        return Ok(hour);
    }

    require_terminal("--hour")?;
    let hour: u8 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Hour of day (0-23)")
        .validate_with(|value: &u8| {
            if *value <= risk_constants::MAX_HOUR {
                Ok(())
            } else {
                Err("hour must be between 0 and 23")
            }
        })
        .interact_text()?;
    Ok(hour)
}

fn require_terminal(flag: &str) -> Result<()> {
    if std::io::stdin().is_terminal() {
        Ok(())
    } else {
        Err(VeloriskError::InvalidArgument(format!(
            "{flag} is required when not running interactively"
        )))
    }
}

// --- Model Performance -----------------------------------------------

pub fn render_performance(store: &DataStore, options: &RenderOptions) -> Result<()> {
    let records = store.load_predictions()?;
    let report = metrics::evaluate(&records)?;

    if options.is_json() {
        output::print_json(&json!({ "page": "performance", "report": report }));
        return Ok(());
    }

    if !options.is_minimal() {
        output::display_heading(Page::Performance.title());
        output::display_section("Offline evaluation of the precomputed predictions");
    }
    output::display_metrics_report(&report);

    if !options.is_minimal() {
        output::display_section("Sample predictions");
        let headers = vec!["Actual".to_string(), "Predicted".to_string()];
        let rows: Vec<Vec<String>> = records
            .iter()
            .take(display::PREVIEW_ROWS)
            .map(|r| vec![r.actual.clone(), r.predicted.clone()])
            .collect();
        print!("{}", output::render_table(&headers, &rows));
    }
    Ok(())
}

// --- Project Conclusions ---------------------------------------------

const CONCLUSIONS: [(&str, &str); 3] = [
    (
        "Summary of findings",
        "Common bicycle types are stolen most; thefts cluster in \
         particular hours and districts; the offline model shows balanced \
         precision and recall on the held-out predictions.",
    ),
    (
        "Business insights",
        "Enforcement and city planning can focus on the identified \
         hotspots, and awareness campaigns can target the high-risk hours \
         surfaced by the historical data.",
    ),
    (
        "Recommendations",
        "Add secure parking in high-risk districts, publish locking \
         guidance for owners, and keep collecting detailed theft reports \
         to sharpen future models.",
    ),
];

pub fn render_conclusions(options: &RenderOptions) {
    if options.is_json() {
        output::print_json(&json!({
            "page": "conclusions",
            "sections": CONCLUSIONS
                .iter()
                .map(|(title, body)| json!({ "title": title, "body": body }))
                .collect::<Vec<_>>(),
        }));
        return;
    }

    if !options.is_minimal() {
        output::display_heading(Page::Conclusions.title());
    }
    for (title, body) in CONCLUSIONS {
        output::display_section(title);
        println!("{body}");
    }
}

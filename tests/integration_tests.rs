use aqi_enricher::processors::{EnrichmentPipeline, FixedJitter, SkipReason};
use aqi_enricher::readers::DatasetReader;
use aqi_enricher::settings::Settings;
use aqi_enricher::ProcessingError;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::path::Path;
use tempfile::TempDir;

const TEMPERATURES: &str = r#"{
  "2017": {
    " Koramangala ": { "avg_temp": 23.1, "max_temp": 30.2 },
    "Yelahanka": { "avg_temp": 22.4 }
  },
  "2020": {
    "KORAMANGALA": { "avg_temp": 23.9 },
    "Whitefield": { "avg_temp": 24.3 }
  },
  "2021": {
    "Koramangala": { "avg_temp": 24.0 },
    "Whitefield": { "avg_temp": 24.6 }
  }
}"#;

const POLLUTANTS: &str = "\
area,year,pm2_5_avg,pm10_avg,no2_avg,o3_avg,co_avg
Koramangala,2020,40.0,80.0,50.0,30.0,1000.0
Koramangala,2021,80.0,160.0,100.0,60.0,2000.0
 whitefield ,2020,20.0,45.0,30.0,25.0,700.0
";

fn write_inputs(dir: &Path) -> Settings {
    let temperature_path = dir.join("temperatures.json");
    let pollutant_path = dir.join("pollutants.csv");
    std::fs::write(&temperature_path, TEMPERATURES).unwrap();
    std::fs::write(&pollutant_path, POLLUTANTS).unwrap();

    Settings {
        temperature_path,
        pollutant_path,
        output_path: dir.join("out").join("enriched.json"),
        ..Settings::default()
    }
}

fn read_output(path: &Path) -> Value {
    let text = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn test_pipeline_without_jitter() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let settings = write_inputs(temp_dir.path());
    let output_path = settings.output_path.clone();

    let report = EnrichmentPipeline::new(settings)
        .run(&mut FixedJitter(1.0), None)
        .unwrap();

    assert_eq!(report.total_entries, 6);
    assert_eq!(report.enriched_entries, 4);
    assert_eq!(report.skipped_for(SkipReason::NoBaseline), 1);
    assert_eq!(report.skipped_for(SkipReason::NoYearRow), 1);

    let output = read_output(&output_path);

    // backcast from the 2020 baseline with the 2017 multiplier
    let backcast = &output["2017"][" Koramangala "];
    assert_eq!(backcast["avg_temp"], json!(23.1));
    assert_eq!(backcast["max_temp"], json!(30.2));
    assert!((backcast["pollutants"]["so2"].as_f64().unwrap() - 13.8).abs() < 1e-9);
    assert!((backcast["pollutants"]["pm25"].as_f64().unwrap() - 36.8).abs() < 1e-9);
    // pm25 36.8 -> 3, pm10 73.6 -> 3, everything else lower
    assert_eq!(backcast["aqi"], json!(3));

    let baseline = &output["2020"]["KORAMANGALA"];
    assert_eq!(baseline["pollutants"]["pm25"], json!(40.0));
    assert_eq!(baseline["pollutants"]["co"], json!(1000.0));

    let exact_year = &output["2021"]["Koramangala"];
    assert_eq!(exact_year["pollutants"]["pm25"], json!(80.0));
    assert_eq!(exact_year["aqi"], json!(5));

    // untouched: no pollutant rows for the area, or no row for the year
    assert_eq!(output["2017"]["Yelahanka"], json!({ "avg_temp": 22.4 }));
    assert_eq!(output["2021"]["Whitefield"], json!({ "avg_temp": 24.6 }));
}

#[test]
fn test_output_keeps_input_order() {
    let temp_dir = TempDir::new().unwrap();
    let settings = write_inputs(temp_dir.path());
    let output_path = settings.output_path.clone();

    EnrichmentPipeline::new(settings)
        .run(&mut FixedJitter(1.0), None)
        .unwrap();

    let dataset = DatasetReader::new().read_dataset(&output_path).unwrap();
    let years: Vec<&str> = dataset.years.iter().map(|y| y.key.as_str()).collect();
    assert_eq!(years, vec!["2017", "2020", "2021"]);

    let names: Vec<&str> = dataset.years[0]
        .districts
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(names, vec![" Koramangala ", "Yelahanka"]);

    let keys: Vec<&String> = dataset.years[0].districts[0].record.keys().collect();
    assert_eq!(keys, vec!["avg_temp", "max_temp", "pollutants", "aqi"]);

    let pollutant_keys: Vec<String> = dataset.years[0].districts[0].record["pollutants"]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(pollutant_keys, vec!["pm25", "pm10", "no2", "so2", "o3", "co"]);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let temp_dir = TempDir::new().unwrap();
    let mut settings = write_inputs(temp_dir.path());
    settings.seed = Some(2024);

    let first_path = temp_dir.path().join("first.json");
    let second_path = temp_dir.path().join("second.json");

    for path in [&first_path, &second_path] {
        let pipeline = EnrichmentPipeline::new(Settings {
            output_path: path.clone(),
            ..settings.clone()
        });
        let mut jitter = pipeline.jitter_source().unwrap();
        pipeline.run(&mut jitter, None).unwrap();
    }

    let first = read_output(&first_path);
    assert_eq!(first, read_output(&second_path));

    let pm25 = first["2020"]["KORAMANGALA"]["pollutants"]["pm25"]
        .as_f64()
        .unwrap();
    assert!((36.0..=44.0).contains(&pm25));
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let settings = write_inputs(temp_dir.path());
    let output_path = settings.output_path.clone();

    let report = EnrichmentPipeline::new(settings)
        .with_dry_run(true)
        .run(&mut FixedJitter(1.0), None)
        .unwrap();

    assert_eq!(report.enriched_entries, 4);
    assert!(!output_path.exists());
}

#[test]
fn test_missing_input_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let mut settings = write_inputs(temp_dir.path());
    settings.pollutant_path = temp_dir.path().join("missing.csv");
    let output_path = settings.output_path.clone();

    let result = EnrichmentPipeline::new(settings).run(&mut FixedJitter(1.0), None);

    assert!(matches!(result, Err(ProcessingError::Io(_))));
    assert!(!output_path.exists());
}

#[test]
fn test_strict_mode_rejects_uncovered_years() {
    let temp_dir = TempDir::new().unwrap();
    let mut settings = write_inputs(temp_dir.path());
    std::fs::write(
        &settings.temperature_path,
        r#"{"2013": {"Koramangala": {"avg_temp": 22.0}}}"#,
    )
    .unwrap();
    settings.strict = true;
    let output_path = settings.output_path.clone();

    let result = EnrichmentPipeline::new(settings).run(&mut FixedJitter(1.0), None);

    assert!(matches!(result, Err(ProcessingError::MissingData(_))));
    assert!(!output_path.exists());
}

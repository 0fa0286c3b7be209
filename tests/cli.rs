mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::prelude::*;
    use predicates::str::contains;

    use std::fs;
    use std::process::Command;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "velorisk";

    const THEFT_HEADER: &str =
        "ANGELEGT_AM,TATZEIT_ANFANG_DATUM,TATZEIT_ANFANG_STUNDE,LOR,SCHADENSHOEHE,ART_DES_FAHRRADS";

    /// Write a full set of dataset fixtures into a temp directory.
    fn fixture_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();

        // worked example: hours [14,15,14,16,14] for one slice
        let mut thefts = String::from(THEFT_HEADER);
        for hour in [14, 15, 14, 16, 14] {
            thefts.push_str(&format!(
                "\n18.05.2023,17.05.2023,{hour},1011101,500,Fahrrad"
            ));
        }
        thefts.push_str("\n18.05.2023,17.05.2023,3,2022202,250,Mountainbike\n");
        fs::write(dir.path().join("bike_thefts.csv"), thefts).unwrap();

        fs::write(
            dir.path().join("districts.geojson"),
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "properties": {"LOR": "1011101", "NAME": "Alexanderplatz"}, "geometry": null},
                {"type": "Feature", "properties": {"LOR": "2022202", "NAME": "Wedding Zentrum"}, "geometry": null}
            ]}"#,
        )
        .unwrap();

        fs::write(
            dir.path().join("cleaned_dataset.csv"),
            "hour,damage,bike_type\n14,500,Fahrrad\n15,750,Fahrrad\n3,250,Mountainbike\n22,900,Rennrad\n",
        )
        .unwrap();

        fs::write(
            dir.path().join("predictions.csv"),
            "Actual,Predicted\n1,1\n0,0\n1,1\n0,1\n",
        )
        .unwrap();

        dir
    }

    fn velorisk(dir: &tempfile::TempDir) -> Command {
        let mut cmd = Command::cargo_bin(NAME).unwrap();
        cmd.arg("--data-dir").arg(dir.path()).arg("--no-config");
        cmd
    }

    #[test]
    fn test_shell__fails_without_terminal() {
        let dir = fixture_dir();
        // no subcommand starts the interactive shell, which needs a tty
        velorisk(&dir).assert().failure();
    }

    #[test]
    fn test_output__summary_page() -> TestResult {
        let dir = fixture_dir();
        velorisk(&dir)
            .arg("summary")
            .assert()
            .success()
            .stdout(contains("Theft records: 6"))
            .stdout(contains("Fahrrad: 5"))
            .stdout(contains("2023-05-17 to 2023-05-17"));
        Ok(())
    }

    #[test]
    fn test_predict__high_risk_when_hour_near_mode() -> TestResult {
        let dir = fixture_dir();
        velorisk(&dir)
            .arg("--format")
            .arg("minimal")
            .arg("predict")
            .arg("--bike-type")
            .arg("Fahrrad")
            .arg("--district")
            .arg("Alexanderplatz")
            .arg("--hour")
            .arg("15")
            .assert()
            .success()
            .stdout("High Risk\n");
        Ok(())
    }

    #[test]
    fn test_predict__low_risk_when_hour_far_from_mode() -> TestResult {
        let dir = fixture_dir();
        velorisk(&dir)
            .arg("--format")
            .arg("minimal")
            .arg("predict")
            .arg("--bike-type")
            .arg("Fahrrad")
            .arg("--district")
            .arg("Alexanderplatz")
            .arg("--hour")
            .arg("18")
            .assert()
            .success()
            .stdout("Low Risk\n");
        Ok(())
    }

    #[test]
    fn test_predict__accepts_unpadded_location_code() -> TestResult {
        let dir = fixture_dir();
        // unpadded code, case-insensitive bike type
        velorisk(&dir)
            .arg("--format")
            .arg("minimal")
            .arg("predict")
            .arg("--bike-type")
            .arg("fahrrad")
            .arg("--district")
            .arg("1011101")
            .arg("--hour")
            .arg("13")
            .assert()
            .success()
            .stdout("High Risk\n");
        Ok(())
    }

    #[test]
    fn test_predict__low_risk_when_no_matching_records() -> TestResult {
        let dir = fixture_dir();
        // no Rennrad thefts recorded anywhere
        velorisk(&dir)
            .arg("--format")
            .arg("minimal")
            .arg("predict")
            .arg("--bike-type")
            .arg("Rennrad")
            .arg("--district")
            .arg("Alexanderplatz")
            .arg("--hour")
            .arg("14")
            .assert()
            .success()
            .stdout("Low Risk\n");
        Ok(())
    }

    #[test]
    fn test_predict__when_unknown_district_name() {
        let dir = fixture_dir();
        velorisk(&dir)
            .arg("predict")
            .arg("--bike-type")
            .arg("Fahrrad")
            .arg("--district")
            .arg("Atlantis")
            .arg("--hour")
            .arg("12")
            .assert()
            .failure()
            .stderr(contains("unknown district 'Atlantis'"));
    }

    #[test]
    fn test_predict__when_missing_args_without_terminal() {
        let dir = fixture_dir();
        velorisk(&dir)
            .arg("predict")
            .arg("--hour")
            .arg("12")
            .assert()
            .failure()
            .stderr(contains("required when not running interactively"));
    }

    #[test]
    fn test_predict__when_out_of_range_hour() {
        let dir = fixture_dir();
        velorisk(&dir)
            .arg("predict")
            .arg("--hour")
            .arg("24")
            .assert()
            .failure()
            .stderr(contains("invalid value"));
    }

    #[test]
    fn test_predict__json_output() -> TestResult {
        let dir = fixture_dir();
        let output = velorisk(&dir)
            .arg("--format")
            .arg("json")
            .arg("predict")
            .arg("--bike-type")
            .arg("Fahrrad")
            .arg("--district")
            .arg("Alexanderplatz")
            .arg("--hour")
            .arg("15")
            .output()?;

        assert!(output.status.success());
        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(parsed["page"], "prediction");
        assert_eq!(parsed["query"]["location_code"], "01011101");
        assert_eq!(parsed["assessment"]["level"], "High");
        assert_eq!(parsed["assessment"]["mode_hour"], 14);
        assert_eq!(parsed["assessment"]["sample_size"], 5);
        Ok(())
    }

    #[test]
    fn test_output__correlation_page() -> TestResult {
        let dir = fixture_dir();
        velorisk(&dir)
            .arg("correlation")
            .assert()
            .success()
            .stdout(contains("Pearson correlation matrix"))
            .stdout(contains("1.0000"));
        Ok(())
    }

    #[test]
    fn test_correlation__when_no_numeric_columns() {
        let dir = fixture_dir();
        fs::write(
            dir.path().join("cleaned_dataset.csv"),
            "bike_type,color\nFahrrad,rot\nRennrad,blau\n",
        )
        .unwrap();

        velorisk(&dir)
            .arg("correlation")
            .assert()
            .failure()
            .stderr(contains("No numeric columns"));
    }

    #[test]
    fn test_output__performance_page() -> TestResult {
        let dir = fixture_dir();
        velorisk(&dir)
            .arg("performance")
            .assert()
            .success()
            .stdout(contains("Accuracy: 0.7500"))
            .stdout(contains("Confusion matrix"));
        Ok(())
    }

    #[test]
    fn test_performance__when_perfect_predictions() -> TestResult {
        let dir = fixture_dir();
        fs::write(
            dir.path().join("predictions.csv"),
            "Actual,Predicted\n1,1\n0,0\n2,2\n",
        )
        .unwrap();

        velorisk(&dir)
            .arg("--format")
            .arg("minimal")
            .arg("performance")
            .assert()
            .success()
            .stdout(contains("Accuracy: 1.0000"));
        Ok(())
    }

    #[test]
    fn test_performance__when_missing_column() {
        let dir = fixture_dir();
        fs::write(dir.path().join("predictions.csv"), "Actual,Output\n1,1\n").unwrap();

        velorisk(&dir)
            .arg("performance")
            .assert()
            .failure()
            .stderr(contains("column 'Predicted' missing"));
    }

    #[test]
    fn test_output__when_missing_data_files() {
        let dir = tempfile::tempdir().unwrap();
        velorisk(&dir)
            .arg("summary")
            .assert()
            .failure()
            .stderr(contains("File not found"));
    }

    #[test]
    fn test_output__static_pages() -> TestResult {
        let dir = fixture_dir();
        velorisk(&dir)
            .arg("hypotheses")
            .assert()
            .success()
            .stdout(contains("Hypothesis 1"));

        velorisk(&dir)
            .arg("conclusions")
            .assert()
            .success()
            .stdout(contains("Recommendations"));
        Ok(())
    }

    #[test]
    fn test_config__file_discovery() -> TestResult {
        let data_dir = fixture_dir();
        let work_dir = tempfile::tempdir().unwrap();
        fs::write(
            work_dir.path().join(".velorisk.toml"),
            format!(
                "data_dir = \"{}\"\noutput_format = \"minimal\"\n",
                data_dir.path().display()
            ),
        )?;

        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.current_dir(work_dir.path())
            .arg("predict")
            .arg("--bike-type")
            .arg("Fahrrad")
            .arg("--district")
            .arg("1011101")
            .arg("--hour")
            .arg("14")
            .assert()
            .success()
            .stdout("High Risk\n");
        Ok(())
    }

    #[test]
    fn test_config__when_invalid_file() {
        let dir = fixture_dir();
        let config = dir.path().join("broken.toml");
        fs::write(&config, "risk_window = [oops").unwrap();

        let mut cmd = Command::cargo_bin(NAME).unwrap();
        cmd.arg("--config")
            .arg(&config)
            .arg("summary")
            .assert()
            .failure()
            .stderr(contains("Configuration error"));
    }

    #[test]
    fn test_predict__when_wider_risk_window() -> TestResult {
        let dir = fixture_dir();
        // hour 18 is outside ±1 of mode 14 but inside ±4
        velorisk(&dir)
            .arg("--format")
            .arg("minimal")
            .arg("--risk-window")
            .arg("4")
            .arg("predict")
            .arg("--bike-type")
            .arg("Fahrrad")
            .arg("--district")
            .arg("1011101")
            .arg("--hour")
            .arg("18")
            .assert()
            .success()
            .stdout("High Risk\n");
        Ok(())
    }

    #[test]
    fn test_completion__generate() {
        let mut cmd = Command::cargo_bin(NAME).unwrap();
        cmd.arg("completion-generate")
            .arg("bash")
            .assert()
            .success()
            .stdout(contains(NAME));
    }

    #[test]
    fn test_output__show_performance_summary() -> TestResult {
        let dir = fixture_dir();
        velorisk(&dir)
            .arg("--show-performance")
            .arg("summary")
            .assert()
            .success()
            .stdout(contains("Performance summary"));
        Ok(())
    }
}

use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

use socatmeta::cdiac::{ColumnClassifier, VarType};

use super::config::Config;

/// Column names from the header row of a CSV or TSV data file
pub(crate) fn read_header(path: &Path) -> Result<Vec<String>> {
    let is_tsv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("tsv") || ext.eq_ignore_ascii_case("tab"))
        .unwrap_or(false);
    let delimiter = if is_tsv { b'\t' } else { b',' };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open data file: {}", path.display()))?;
    let header = reader
        .headers()
        .with_context(|| format!("Failed to read header row of {}", path.display()))?;

    Ok(header.iter().map(|name| name.trim().to_string()).collect())
}

/// Classify each name, keeping the input order
pub(crate) fn classify_names<'a>(
    classifier: &ColumnClassifier,
    names: &'a [String],
) -> Vec<(&'a str, VarType)> {
    names
        .iter()
        .map(|name| (name.as_str(), classifier.get_var_type_from_column_name(name)))
        .collect()
}

/// Print the variable type guessed for each column name
pub fn run(names: Vec<String>, header: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let config = Config::load(config.as_deref())?;
    let mut classifier = ColumnClassifier::new();
    config.apply_to(&mut classifier)?;

    let mut names = names;
    if let Some(path) = header {
        names.extend(read_header(&path)?);
    }
    if names.is_empty() {
        anyhow::bail!("No column names given (pass names or --header FILE)");
    }

    let classified = classify_names(&classifier, &names);
    let recognized = classified
        .iter()
        .filter(|(_, var_type)| *var_type != VarType::Other)
        .count();
    for (name, var_type) in &classified {
        println!("{}\t{}", name, var_type);
    }
    info!("{} of {} column names recognized", recognized, classified.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_csv_header() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "Expocode,xCO2_ATM (ppm), SST (C) ,WOCE_QC_FLAG").unwrap();
        writeln!(file, "33RO20150114,398.2,24.1,2").unwrap();

        let names = read_header(file.path()).unwrap();
        assert_eq!(names, ["Expocode", "xCO2_ATM (ppm)", "SST (C)", "WOCE_QC_FLAG"]);
    }

    #[test]
    fn test_read_tsv_header() {
        let mut file = tempfile::Builder::new().suffix(".tsv").tempfile().unwrap();
        writeln!(file, "xCO2,Water,SST\tDepth").unwrap();

        let names = read_header(file.path()).unwrap();
        assert_eq!(names, ["xCO2,Water,SST", "Depth"]);
    }

    #[test]
    fn test_classify_names() {
        let names = vec!["xCO2,Water,SST".to_string(), "Depth".to_string()];
        let mut classifier = ColumnClassifier::new();

        let classified = classify_names(&classifier, &names);
        assert_eq!(
            classified,
            [("xCO2,Water,SST", VarType::Xco2WaterSst), ("Depth", VarType::Other)]
        );

        classifier.associate_column_name_with_var_type("DEPTH", VarType::Salinity);
        assert_eq!(classify_names(&classifier, &names)[1], ("Depth", VarType::Salinity));
    }
}

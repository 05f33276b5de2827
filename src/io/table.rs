//! Chi-squared profile loading.
//!
//! The profile CSV has one header row and columns
//! `alpha, chi2_<method0>, chi2_<method1>, ...`. Only `alpha` and the selected
//! method column are kept.
//!
//! Unlike the bond ingest this is all-or-nothing: a single bad row means the
//! profile cannot be trusted, so the whole load fails.

use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use crate::error::LikelihoodError;
use crate::math::interp;

/// Tabulated `chi2(alpha)` profile.
///
/// Invariants (checked on construction):
/// - at least two rows
/// - `alpha` strictly increasing
/// - `chi2 >= 0`, everything finite
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationTable {
    alpha: Vec<f64>,
    chi2: Vec<f64>,
    method: String,
    methods: Vec<String>,
}

impl CalibrationTable {
    /// Build a table from in-memory columns.
    pub fn from_columns(alpha: Vec<f64>, chi2: Vec<f64>) -> Result<Self, LikelihoodError> {
        check_columns(&alpha, &chi2).map_err(LikelihoodError::InvalidTable)?;
        Ok(Self {
            alpha,
            chi2,
            method: "chi2".to_string(),
            methods: vec!["chi2".to_string()],
        })
    }

    /// Load `alpha` (column 0) and `chi2` (column `column`) from a CSV profile.
    pub fn load(path: &Path, column: usize) -> Result<Self, LikelihoodError> {
        let fail = |reason: String| LikelihoodError::data_load(path, reason);

        let file = File::open(path).map_err(|e| fail(format!("cannot open file: {e}")))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| fail(format!("cannot read header row: {e}")))?
            .clone();
        let names = header_names(&headers);

        if column == 0 {
            return Err(fail("column 0 holds alpha; pick a chi2 column >= 1".to_string()));
        }
        if column >= names.len() {
            return Err(fail(format!(
                "chi2 column {column} requested but the file has {} columns",
                names.len()
            )));
        }

        let mut alpha = Vec::new();
        let mut chi2 = Vec::new();

        for (idx, result) in reader.records().enumerate() {
            // records() starts after the header; report 1-based file lines.
            let line = idx + 2;
            let record = result.map_err(|e| fail(format!("line {line}: CSV parse error: {e}")))?;
            alpha.push(parse_cell(&record, 0).map_err(|e| fail(format!("line {line}: {e}")))?);
            chi2.push(parse_cell(&record, column).map_err(|e| fail(format!("line {line}: {e}")))?);
        }

        check_columns(&alpha, &chi2).map_err(fail)?;

        Ok(Self {
            alpha,
            chi2,
            method: names[column].clone(),
            methods: names[1..].to_vec(),
        })
    }

    pub fn alpha(&self) -> &[f64] {
        &self.alpha
    }

    pub fn chi2(&self) -> &[f64] {
        &self.chi2
    }

    pub fn len(&self) -> usize {
        self.alpha.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alpha.is_empty()
    }

    /// `(alpha_min, alpha_max)` covered by the table.
    pub fn alpha_range(&self) -> (f64, f64) {
        (self.alpha[0], self.alpha[self.alpha.len() - 1])
    }

    /// Name of the selected chi2 method column.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// All chi2 method columns present in the source file.
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// `chi2` at `alpha`, linearly interpolated and clamped to the boundary
    /// values outside the tabulated range.
    ///
    /// A non-finite `alpha` (e.g. from `rdrag == 0`) returns `NaN` instead of
    /// the clamped boundary value.
    pub fn chi2_at(&self, alpha: f64) -> f64 {
        if !alpha.is_finite() {
            return f64::NAN;
        }
        interp(alpha, &self.alpha, &self.chi2)
    }
}

fn header_names(headers: &StringRecord) -> Vec<String> {
    headers
        .iter()
        .map(|name| {
            // Spreadsheet exports sometimes prefix the first header with a BOM.
            name.trim().trim_start_matches('\u{feff}').to_string()
        })
        .collect()
}

fn parse_cell(record: &StringRecord, idx: usize) -> Result<f64, String> {
    let raw = record
        .get(idx)
        .ok_or_else(|| format!("missing column {idx} (row has {} fields)", record.len()))?;
    raw.parse::<f64>()
        .map_err(|_| format!("column {idx}: '{raw}' is not a number"))
}

fn check_columns(alpha: &[f64], chi2: &[f64]) -> Result<(), String> {
    if alpha.len() != chi2.len() {
        return Err(format!(
            "alpha and chi2 lengths differ ({} vs {})",
            alpha.len(),
            chi2.len()
        ));
    }
    if alpha.len() < 2 {
        return Err(format!("need at least 2 rows, found {}", alpha.len()));
    }
    if let Some(i) = alpha.iter().position(|v| !v.is_finite()) {
        return Err(format!("row {i}: alpha is not finite"));
    }
    if let Some(i) = chi2.iter().position(|v| !v.is_finite() || *v < 0.0) {
        return Err(format!("row {i}: chi2 must be finite and >= 0, got {}", chi2[i]));
    }
    if let Some(i) = alpha.windows(2).position(|w| w[1] <= w[0]) {
        return Err(format!(
            "alpha must be strictly increasing (row {} = {} follows {})",
            i + 1,
            alpha[i + 1],
            alpha[i]
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const PROFILE: &str = "\
alpha,chi2_template,chi2_cosmolike
0.8,12.0,10.0
1.0,1.0,0.0
1.2,14.0,10.0
";

    #[test]
    fn loads_selected_column() {
        let file = write_csv(PROFILE);
        let table = CalibrationTable::load(file.path(), 1).unwrap();
        assert_eq!(table.alpha(), &[0.8, 1.0, 1.2]);
        assert_eq!(table.chi2(), &[12.0, 1.0, 14.0]);
        assert_eq!(table.method(), "chi2_template");
        assert_eq!(table.methods(), &["chi2_template".to_string(), "chi2_cosmolike".to_string()]);
        assert_eq!(table.alpha_range(), (0.8, 1.2));

        let table = CalibrationTable::load(file.path(), 2).unwrap();
        assert_eq!(table.chi2(), &[10.0, 0.0, 10.0]);
    }

    #[test]
    fn strips_bom_from_header() {
        let file = write_csv("\u{feff}alpha, chi2_a\n0.9,1.0\n1.1,2.0\n");
        let table = CalibrationTable::load(file.path(), 1).unwrap();
        assert_eq!(table.method(), "chi2_a");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn missing_file_is_data_load_error() {
        let err = CalibrationTable::load(Path::new("/nonexistent/profile.csv"), 1).unwrap_err();
        assert!(matches!(err, LikelihoodError::DataLoad { .. }));
    }

    #[test]
    fn rejects_too_few_rows() {
        let file = write_csv("alpha,chi2\n1.0,0.0\n");
        let err = CalibrationTable::load(file.path(), 1).unwrap_err();
        assert!(err.to_string().contains("at least 2 rows"), "{err}");

        let header_only = write_csv("alpha,chi2\n");
        assert!(CalibrationTable::load(header_only.path(), 1).is_err());
    }

    #[test]
    fn rejects_malformed_rows() {
        let file = write_csv("alpha,chi2\n0.9,1.0\n1.0,abc\n");
        let err = CalibrationTable::load(file.path(), 1).unwrap_err();
        assert!(err.to_string().contains("line 3"), "{err}");
    }

    #[test]
    fn rejects_out_of_range_column() {
        let file = write_csv(PROFILE);
        assert!(CalibrationTable::load(file.path(), 3).is_err());
        assert!(CalibrationTable::load(file.path(), 0).is_err());
    }

    #[test]
    fn rejects_unsorted_or_negative() {
        let unsorted = write_csv("alpha,chi2\n1.0,1.0\n0.9,2.0\n");
        assert!(CalibrationTable::load(unsorted.path(), 1).is_err());

        let duplicate = CalibrationTable::from_columns(vec![1.0, 1.0], vec![0.0, 1.0]);
        assert!(matches!(duplicate, Err(LikelihoodError::InvalidTable(_))));

        let negative = CalibrationTable::from_columns(vec![0.9, 1.0], vec![0.0, -1.0]);
        assert!(negative.is_err());
    }

    #[test]
    fn chi2_lookup_clamps_and_rejects_non_finite() {
        let table = CalibrationTable::from_columns(vec![0.8, 1.0, 1.2], vec![10.0, 0.0, 10.0]).unwrap();
        assert_eq!(table.chi2_at(0.8), 10.0);
        assert_eq!(table.chi2_at(0.1), 10.0);
        assert_eq!(table.chi2_at(1.2), 10.0);
        assert_eq!(table.chi2_at(5.0), 10.0);
        assert!(table.chi2_at(f64::INFINITY).is_nan());
        assert!(table.chi2_at(f64::NAN).is_nan());
    }
}

//! Importing parameter files from disk

use plant_onboard_core::Category;
use plant_onboard_csv::{CsvError, ImportFormat, ImportOptions, ParameterImporter};
use pretty_assertions::assert_eq;
use std::io::Write;

fn write_file(name: &str, contents: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::File::create(&path)
        .unwrap()
        .write_all(contents)
        .unwrap();
    (dir, path)
}

/// Tab separated uploads use the tab delimiter
#[test]
fn test_import_tsv_file() {
    let (_dir, path) = write_file(
        "params.tsv",
        b"name\tdisplay_name\tunit\tcategory\tsection\n\
          kiln_temperature\tKiln Temperature\t\xc2\xb0C\tinput\tKILN\n\
          clinker_production\tClinker Production\tTPD\toutput\tKILN\n",
    );

    let format = ImportFormat::from_filename(path.to_str().unwrap()).unwrap();
    let outcome = ParameterImporter::read_file(&path, &ImportOptions::for_format(format)).unwrap();

    assert_eq!(outcome.count(), 2);
    assert_eq!(outcome.parameters[0].parameter.unit, "°C");
    assert_eq!(outcome.parameters[1].parameter.category, Category::Output);
}

/// A comma separated file read as TSV has no recognizable columns
#[test]
fn test_wrong_delimiter_reports_missing_columns() {
    let (_dir, path) = write_file(
        "params.csv",
        b"name,display_name,unit,category,section\nflow,Flow,TPH,input,S\n",
    );

    let options = ImportOptions::for_format(ImportFormat::Tsv);
    let err = ParameterImporter::read_file(&path, &options).unwrap_err();
    assert!(matches!(err, CsvError::MissingColumns(cols) if cols.len() == 5));
}

/// Quoted fields may contain the delimiter
#[test]
fn test_quoted_fields() {
    let (_dir, path) = write_file(
        "params.txt",
        b"name,display_name,unit,category,section\n\
          heat_rate,\"Heat Rate, Gross\",kcal/kWh,calculated,\"PLANT SUMMARY\"\n",
    );

    let outcome = ParameterImporter::read_file(&path, &ImportOptions::default()).unwrap();
    let p = &outcome.parameters[0].parameter;
    assert_eq!(p.display_name, "Heat Rate, Gross");
    assert_eq!(p.section, "PLANT SUMMARY");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ParameterImporter::read_file(dir.path().join("nope.csv"), &ImportOptions::default())
        .unwrap_err();
    assert!(matches!(err, CsvError::Io(_)));
}

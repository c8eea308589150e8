//! Integration tests for dataset loading.

use roadstat_ingest::{load_all, load_dataset, read_csv_table};
use roadstat_model::Dataset;
use tempfile::TempDir;

fn write_file(dir: &TempDir, relative: &str, contents: &[u8]) {
    let path = dir.path().join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

#[test]
fn loads_single_table_dataset() {
    let dir = TempDir::new().unwrap();
    write_file(
        &dir,
        "Traffic_Accidents_Time/table_1a6.csv",
        b"Sl. No.,State/UT,Road Accidents - 0000 hrs to 0300 hrs (Night)\n1,StateA,5\n",
    );

    let table = load_dataset(dir.path(), Dataset::AccidentsTime).unwrap();
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.headers[1], "State/UT");
}

#[test]
fn concatenates_per_city_files() {
    let dir = TempDir::new().unwrap();
    write_file(
        &dir,
        "Vehicles Registrations/city_a.csv",
        b"City,Cars\nCityA,\"1,234\"\n",
    );
    write_file(
        &dir,
        "Vehicles Registrations/city_b.csv",
        b"City,Cars,Jeeps\nCityB,55,7\n",
    );

    let table = load_dataset(dir.path(), Dataset::VehicleRegistrations).unwrap();
    assert_eq!(table.headers, vec!["City", "Cars", "Jeeps"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cell(0, 1), "1,234");
    assert_eq!(table.cell(0, 2), "");
}

#[test]
fn latin1_encoded_file_decodes() {
    let dir = TempDir::new().unwrap();
    // "Pondichéry" with an ISO-8859-1 e-acute.
    write_file(
        &dir,
        "Vehicles Registrations/south.csv",
        b"City,Cars\nPondich\xe9ry,10\n",
    );

    let table = load_dataset(dir.path(), Dataset::VehicleRegistrations).unwrap();
    assert_eq!(table.cell(0, 0), "Pondichéry");
}

#[test]
fn load_all_skips_missing_datasets() {
    let dir = TempDir::new().unwrap();
    write_file(
        &dir,
        "Traffic_Accidents_Month/table_1a5.csv",
        b"State/UT,Road Accidents - January\nStateA,3\n",
    );

    let tables = load_all(dir.path());
    assert_eq!(tables.len(), 1);
    assert!(tables.contains_key("accidents_month"));
}

#[test]
fn read_csv_table_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.csv");
    assert!(read_csv_table(&missing).is_err());
}

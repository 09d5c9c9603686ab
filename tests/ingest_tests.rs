use std::io::Cursor;

use focus_chart::api::{ChartConfig, ChartEngine};
use focus_chart::core::{
    IngestOptions, SeriesStore, YearValue, load_series_from_path, load_series_from_reader,
};
use focus_chart::render::NullRenderer;
use focus_chart::{ChartError, ChartResult};

const FERTILITY_SAMPLE: &str = "\
Country Name,Country Code,Indicator Name,1960,1961,1962,1963
Kenya,KEN,Fertility rate,7.95,8.0,,8.1
Japan,JPN,Fertility rate,2.0,1.96,1.98,2.0
Nowhere,NWH,Fertility rate,,,..,
Kenya,KEN2,Fertility rate,1.0,1.0,1.0,1.0
";

fn load(input: &str) -> ChartResult<SeriesStore> {
    load_series_from_reader(Cursor::new(input), &IngestOptions::default())
}

#[test]
fn wide_table_becomes_series_store() {
    let store = load(FERTILITY_SAMPLE).expect("store");

    assert_eq!(store.names().collect::<Vec<_>>(), vec!["Kenya", "Japan"]);
    assert_eq!(store.years(), &[1960, 1961, 1962, 1963]);

    let kenya = store.get("Kenya").expect("kenya");
    assert_eq!(kenya.code(), "KEN");
    assert_eq!(
        kenya.points(),
        &[
            YearValue::new(1960, 7.95),
            YearValue::new(1961, 8.0),
            YearValue::new(1963, 8.1),
        ]
    );
    assert_eq!(store.value_extent(), (1.96, 8.1));
}

#[test]
fn rows_without_a_name_are_dropped() {
    let store = load("Country Name,Country Code,1960,1961\n,XXX,1.0,2.0\nKenya,KEN,7.9,7.8\n")
        .expect("store");
    assert_eq!(store.names().collect::<Vec<_>>(), vec!["Kenya"]);
    assert_eq!(store.value_extent(), (7.8, 7.9));

    let err = load("Country Name,Country Code,1960\n,XXX,1.0\n").expect_err("only nameless rows");
    assert!(matches!(err, ChartError::EmptyDataset(_)));
}

#[test]
fn missing_name_column_is_invalid() {
    let err = load("Name,Country Code,1960\nKenya,KEN,1.0\n").expect_err("missing column");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn table_without_year_columns_is_empty() {
    let err = load("Country Name,Country Code,Note\nKenya,KEN,x\n").expect_err("no years");
    assert!(matches!(err, ChartError::EmptyDataset(_)));
}

#[test]
fn table_without_values_is_empty() {
    let err = load("Country Name,Country Code,1960,1961\nKenya,KEN,,\n").expect_err("no values");
    assert!(matches!(err, ChartError::EmptyDataset(_)));

    let err = load("Country Name,Country Code,1960\n").expect_err("no rows");
    assert!(matches!(err, ChartError::EmptyDataset(_)));
}

#[test]
fn custom_columns_and_delimiter() {
    let options = IngestOptions {
        name_column: "Region".to_owned(),
        code_column: "Id".to_owned(),
        delimiter: b';',
    };
    let store = load_series_from_reader(
        Cursor::new("Region;Id;2000;2001\nNorth;N;1,5;2\nSouth;S;3;4\n"),
        &options,
    );
    // "1,5" is not a number with a `.` decimal separator, so North keeps 2001 only.
    let store = store.expect("store");
    assert_eq!(
        store.get("North").expect("north").points(),
        &[YearValue::new(2001, 2.0)]
    );
    assert_eq!(store.len(), 2);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_series_from_path("/definitely/not/here.csv", &IngestOptions::default())
        .expect_err("missing file");
    assert!(matches!(err, ChartError::Io(_)));
}

#[test]
fn engine_loads_from_csv_file() {
    let dir = std::env::temp_dir().join(format!("focus-chart-ingest-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("fertility.csv");
    std::fs::write(&path, FERTILITY_SAMPLE).expect("write csv");

    let engine = ChartEngine::from_csv_path(
        NullRenderer::default(),
        &path,
        &IngestOptions::default(),
        ChartConfig::default(),
    )
    .expect("engine");
    assert_eq!(engine.store().len(), 2);
    assert_eq!(engine.context_domain(), (1960.0, 1963.0));
    assert_eq!(engine.renderer().last_focus_line_count, 2);

    std::fs::remove_dir_all(&dir).expect("cleanup");
}

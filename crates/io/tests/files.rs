//! File round-trip tests across the readers and the writer.

use std::io::Write;

use hydrec_io::{present, read_soil_profile, read_water_levels, write_series};

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn water_levels_survive_a_write_read_cycle() {
    let source = write_temp("time,level\n0,1.52\n1,1.56\n3,1.61\n");
    let series = read_water_levels(source.path()).unwrap();

    let copy = tempfile::NamedTempFile::new().unwrap();
    write_series(
        copy.path(),
        &[
            ("time", present(series.time())),
            ("level", present(series.levels())),
        ],
    )
    .unwrap();

    let reread = read_water_levels(copy.path()).unwrap();
    assert_eq!(reread, series);
}

#[test]
fn soil_profile_feeds_recharge_types() {
    let file = write_temp("1.5\tsand\t0.25\n6.0\tsilt\t0.10\n");
    let column = read_soil_profile(file.path()).unwrap();
    // The parsed profile is directly usable by the recharge crate.
    assert_eq!(column.profile().n_layers(), 2);
    assert_eq!(column.profile().layer_at(2.0), 1);
    assert_eq!(column.profile().max_depth(), 6.0);
}

#[test]
fn gap_columns_round_trip_as_missing() {
    let path = tempfile::NamedTempFile::new().unwrap();
    write_series(
        path.path(),
        &[
            ("time", present(&[0.0, 1.0, 2.0])),
            ("level", vec![Some(1.5), None, Some(1.7)]),
        ],
    )
    .unwrap();

    let series = read_water_levels(path.path()).unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series.time(), &[0.0, 2.0]);
    assert_eq!(series.levels(), &[1.5, 1.7]);
}

//! Export of created points as CSV.
//!
//! Every point becomes one record `job,index,x,y,z`. The `z` column stays empty for 2D points.
use crate::{
    document::JobResult,
    error::{GeoError, GeoResult},
    surfaces::SurfacePoint,
};
use log::info;
use serde::Serialize;
use std::{io::Write, path::Path};

#[derive(Serialize)]
struct PointRecord<'a> {
    job: &'a str,
    index: usize,
    x: f64,
    y: f64,
    z: Option<f64>,
}
impl<'a> PointRecord<'a> {
    fn new(job: &'a str, index: usize, point: &SurfacePoint) -> Self {
        match point {
            SurfacePoint::Planar(p) => Self {
                job,
                index,
                x: p.x,
                y: p.y,
                z: None,
            },
            SurfacePoint::Spatial(p) => Self {
                job,
                index,
                x: p.x,
                y: p.y,
                z: Some(p.z),
            },
        }
    }
}

/// Write the points of the given job results as CSV (with header) into `writer`.
///
/// # Errors
///
/// This function will return an error if a record cannot be written.
pub fn write_csv<W: Write>(writer: W, results: &[JobResult]) -> GeoResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    // header is only emitted together with the first record
    if results.iter().all(|r| r.points.is_empty()) {
        csv_writer
            .write_record(["job", "index", "x", "y", "z"])
            .map_err(|e| GeoError::Export(format!("writing csv header failed: {e}")))?;
    }
    for result in results {
        for (index, point) in result.points.iter().enumerate() {
            csv_writer
                .serialize(PointRecord::new(&result.name, index, point))
                .map_err(|e| {
                    GeoError::Export(format!(
                        "writing point {index} of job {} failed: {e}",
                        result.name
                    ))
                })?;
        }
    }
    csv_writer
        .flush()
        .map_err(|e| GeoError::Export(format!("flushing csv output failed: {e}")))
}

/// Write the points of the given job results into a CSV file.
///
/// An existing file is overwritten.
///
/// # Errors
///
/// This function will return an error if the file cannot be created or written.
pub fn write_csv_file(path: &Path, results: &[JobResult]) -> GeoResult<()> {
    let file = std::fs::File::create(path).map_err(|e| {
        GeoError::Export(format!(
            "could not create file path: {}. Error: {e}",
            path.display()
        ))
    })?;
    write_csv(file, results)?;
    let nr_of_points: usize = results.iter().map(|r| r.points.len()).sum();
    info!("{nr_of_points} points written to {}", path.display());
    Ok(())
}

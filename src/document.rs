#![warn(missing_docs)]
//! Job documents for batch point creation.
//!
//! A [`PointJobDocument`] holds an optional random seed and a list of [`PointJob`]s. Each job
//! names a surface with its (not yet validated) parameters and the number of points to create
//! on it. Documents are stored as YAML:
//!
//! ```yaml
//! seed: 42
//! jobs:
//!   - name: ring
//!     surface: { type: circle2d, center_x: 3.0, center_y: 5.0, radius: 10.0 }
//!     points: 5
//!   - surface: { type: plane_hessian, normal: [1, 0, 0], d_origin: 5.0, radius: 3.0 }
//!     points: 100
//! ```
use crate::{
    error::{GeoError, GeoResult},
    surfaces::{Circle2D, Plane, Sphere, SurfacePoint, SurfaceType, UniformSource},
    validation::{check_point_count, Param, PointCount},
};
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

/// Surface description of a [`PointJob`] as found in a job document.
///
/// All values are kept as loosely-typed [`Param`]s and only validated by [`SurfaceSpec::build`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurfaceSpec {
    /// a [`Circle2D`]
    #[serde(rename = "circle2d")]
    Circle2D {
        /// x coordinate of the center
        center_x: Param,
        /// y coordinate of the center
        center_y: Param,
        /// circle radius
        radius: Param,
    },
    /// a [`Sphere`]
    Sphere {
        /// x coordinate of the center
        center_x: Param,
        /// y coordinate of the center
        center_y: Param,
        /// z coordinate of the center
        center_z: Param,
        /// sphere radius
        radius: Param,
    },
    /// a [`Plane`] given in general form (see [`Plane::new`])
    Plane {
        /// normal vector
        normal: Param,
        /// signed distance from the origin
        d_origin: Param,
        /// reference point on the plane
        ref_point: Param,
        /// radius of the point creation disk
        radius: Param,
    },
    /// a [`Plane`] given in normal form (see [`Plane::from_normal_form`])
    PlaneNormalForm {
        /// normal vector
        normal: Param,
        /// position vector of a point on the plane
        position: Param,
        /// radius of the point creation disk
        radius: Param,
    },
    /// a [`Plane`] given in Hessian normal form (see [`Plane::from_hessian_normal_form`])
    PlaneHessian {
        /// normal vector
        normal: Param,
        /// signed distance from the origin
        d_origin: Param,
        /// radius of the point creation disk
        radius: Param,
    },
}
impl SurfaceSpec {
    /// Validate the parameters and create the described surface.
    ///
    /// # Errors
    ///
    /// This function will return an error if a parameter fails validation
    /// ([`GeoError::InvalidType`] or [`GeoError::InvalidValue`]).
    pub fn build(&self) -> GeoResult<SurfaceType> {
        let surface = match self {
            Self::Circle2D {
                center_x,
                center_y,
                radius,
            } => Circle2D::from_params(center_x, center_y, radius)?.into(),
            Self::Sphere {
                center_x,
                center_y,
                center_z,
                radius,
            } => Sphere::from_params(center_x, center_y, center_z, radius)?.into(),
            Self::Plane {
                normal,
                d_origin,
                ref_point,
                radius,
            } => Plane::from_params(normal, d_origin, ref_point, radius)?.into(),
            Self::PlaneNormalForm {
                normal,
                position,
                radius,
            } => Plane::from_normal_form_params(normal, position, radius)?.into(),
            Self::PlaneHessian {
                normal,
                d_origin,
                radius,
            } => Plane::from_hessian_normal_form_params(normal, d_origin, radius)?.into(),
        };
        Ok(surface)
    }
}

/// A single point creation job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointJob {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    surface: SurfaceSpec,
    points: Param,
}
impl PointJob {
    /// Creates a new [`PointJob`].
    #[must_use]
    pub fn new(name: Option<&str>, surface: SurfaceSpec, points: impl Into<Param>) -> Self {
        Self {
            name: name.map(ToString::to_string),
            surface,
            points: points.into(),
        }
    }
    /// Returns the name of this [`PointJob`], if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    /// Returns the surface description of this [`PointJob`].
    #[must_use]
    pub const fn surface(&self) -> &SurfaceSpec {
        &self.surface
    }
    /// Returns the requested number of points of this [`PointJob`] (not validated).
    #[must_use]
    pub const fn points(&self) -> &Param {
        &self.points
    }
}

/// The points created by one job of a [`PointJobDocument`].
#[derive(Debug, Clone, PartialEq)]
pub struct JobResult {
    /// job name (the given one or `job_<index>`)
    pub name: String,
    /// the created points
    pub points: Vec<SurfacePoint>,
}

/// A document describing a batch of point creation jobs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointJobDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    #[serde(default)]
    jobs: Vec<PointJob>,
}

fn job_name(job: &PointJob, idx: usize) -> String {
    job.name.clone().unwrap_or_else(|| format!("job_{idx}"))
}

/// Prefix a validation error message with the job it belongs to, keeping the error kind.
fn in_job(err: GeoError, name: &str) -> GeoError {
    match err {
        GeoError::InvalidType(msg) => GeoError::InvalidType(format!("job {name}: {msg}")),
        GeoError::InvalidValue(msg) => GeoError::InvalidValue(format!("job {name}: {msg}")),
        other => other,
    }
}

impl PointJobDocument {
    /// Creates a new, empty [`PointJobDocument`] with an optional random seed.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seed,
            jobs: Vec::new(),
        }
    }
    /// Create a new [`PointJobDocument`] from a YAML file.
    ///
    /// # Errors
    ///
    /// This function will return an error if the file cannot be read or its contents cannot be parsed.
    pub fn from_file(path: &Path) -> GeoResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            GeoError::Document(format!("cannot read file {} : {}", path.display(), e))
        })?;
        Self::from_string(&contents)
    }
    /// Create a new [`PointJobDocument`] from a YAML string.
    ///
    /// Only the document structure is checked here. Surface parameters and point counts are
    /// validated by [`PointJobDocument::build`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the string cannot be parsed.
    pub fn from_string(document: &str) -> GeoResult<Self> {
        serde_yaml::from_str(document)
            .map_err(|e| GeoError::Document(format!("parsing of job document failed: {e}")))
    }
    /// Serialize this [`PointJobDocument`] into a YAML string.
    ///
    /// # Errors
    ///
    /// This function will return an error if the serialization fails.
    pub fn to_yaml_string(&self) -> GeoResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| GeoError::Document(format!("serialization of job document failed: {e}")))
    }
    /// Save this [`PointJobDocument`] to a YAML file.
    ///
    /// # Errors
    ///
    /// This function will return an error if the file cannot be created or written.
    pub fn save_to_file(&self, path: &Path) -> GeoResult<()> {
        let serialized = self.to_yaml_string()?;
        let mut output = File::create(path).map_err(|e| {
            GeoError::Document(format!(
                "could not create file path: {}. Error: {e}",
                path.display()
            ))
        })?;
        write!(output, "{serialized}").map_err(|e| {
            GeoError::Document(format!(
                "writing to file path {} failed. Error: {e}",
                path.display()
            ))
        })?;
        Ok(())
    }
    /// Returns the random seed of this [`PointJobDocument`], if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }
    /// Returns the jobs of this [`PointJobDocument`].
    #[must_use]
    pub fn jobs(&self) -> &[PointJob] {
        &self.jobs
    }
    /// Append a job to this [`PointJobDocument`].
    pub fn add_job(&mut self, job: PointJob) {
        self.jobs.push(job);
    }
    /// Validate all jobs and return the surfaces together with their point counts.
    ///
    /// # Errors
    ///
    /// This function will return an error for the first job whose surface parameters or point
    /// count fail validation. The error message is prefixed with the job name.
    pub fn build(&self) -> GeoResult<Vec<(String, SurfaceType, PointCount)>> {
        self.jobs
            .iter()
            .enumerate()
            .map(|(idx, job)| {
                let name = job_name(job, idx);
                let surface = job.surface.build().map_err(|e| in_job(e, &name))?;
                let nr_of_points = check_point_count(&job.points).map_err(|e| in_job(e, &name))?;
                Ok((name, surface, nr_of_points))
            })
            .collect()
    }
    /// Validate all jobs and create their points.
    ///
    /// Nothing is created unless every job is valid. Jobs are processed in document order, all
    /// drawing from the same random source.
    ///
    /// # Errors
    ///
    /// This function will return an error if [`PointJobDocument::build`] fails.
    pub fn run<R: UniformSource + ?Sized>(&self, rng: &mut R) -> GeoResult<Vec<JobResult>> {
        let jobs = self.build()?;
        if jobs.is_empty() {
            info!("No jobs defined in document. Stopping here.");
        }
        Ok(jobs
            .into_iter()
            .map(|(name, surface, nr_of_points)| {
                info!("job {name}: create {nr_of_points} points on {surface}");
                let points = surface.create_random_points(nr_of_points, rng);
                JobResult { name, points }
            })
            .collect())
    }
}

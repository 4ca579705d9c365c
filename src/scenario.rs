//! Report scenarios
//!
//! Each scenario takes its inputs from [`AppConfig`], runs them through the
//! rotation core once, and returns the formatted lines. The core never reports
//! degenerate input, so the checks for it live here.

use rot3d_math::{mat4, slerp, Quaternion, Vec3, NORMALIZE_EPSILON};

use crate::config::{AppConfig, AxisAngleConfig, DirectionConfig, InterpolationConfig, QuaternionConfig};
use crate::report::Formatter;

/// A titled group of report lines
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub lines: Vec<String>,
}

/// Build every report section from the configuration
pub fn build_report(config: &AppConfig) -> Vec<Section> {
    let f = Formatter::from(&config.display);
    vec![
        quaternion_primitives(&config.quaternion, &f),
        axis_angle(&config.axis_angle, &f),
        direction_to_direction(&config.direction, &f),
        interpolation(&config.interpolation, &f),
    ]
}

/// Identity, conjugate, inverse, normalize, both product orders, and norm
pub fn quaternion_primitives(cfg: &QuaternionConfig, f: &Formatter) -> Section {
    let q1 = Quaternion::from(cfg.q1);
    let q2 = Quaternion::from(cfg.q2);

    if q1.norm_squared() == 0.0 {
        log::debug!("q1 is the zero quaternion; inverse and normalize fall back to identity");
    }

    let lines = vec![
        f.quaternion_line(Quaternion::identity(), "Identity"),
        f.quaternion_line(q1.conjugate(), "Conjugate"),
        f.quaternion_line(q1.inverse(), "Inverse"),
        f.quaternion_line(q1.normalize(), "Normalize"),
        f.quaternion_line(q1 * q2, "Multiply(q1, q2)"),
        f.quaternion_line(q2 * q1, "Multiply(q2, q1)"),
        f.scalar_line(q1.norm(), "Norm"),
    ];

    Section { title: "Quaternion", lines }
}

/// Rotation matrix and quaternion for one axis-angle pair, with the probe
/// vector pushed through both
pub fn axis_angle(cfg: &AxisAngleConfig, f: &Formatter) -> Section {
    let raw_axis = Vec3::from(cfg.axis);
    if raw_axis.length() < NORMALIZE_EPSILON {
        log::debug!("rotation axis {:?} has no direction; rotation degenerates", cfg.axis);
    }
    let axis = raw_axis.normalized();
    let probe = Vec3::from(cfg.probe);

    let m = mat4::rotate_axis_angle(axis, cfg.angle);
    let q = Quaternion::from_axis_angle(axis, cfg.angle);
    let from_q = mat4::from_quaternion(q);

    let mut lines = Vec::new();
    lines.extend(f.matrix_block(m, "rotation matrix"));
    lines.push(f.quaternion_line(q, "rotation quaternion"));
    lines.extend(f.matrix_block(from_q, "rotation matrix (from quaternion)"));
    lines.push(f.vector_line(mat4::transform(probe, m), "probe * matrix"));
    lines.push(f.vector_line(q.rotate_vector(probe), "probe rotated by quaternion"));

    Section { title: "Axis-angle", lines }
}

/// Minimal rotation between the configured directions
pub fn direction_to_direction(cfg: &DirectionConfig, f: &Formatter) -> Section {
    let from = Vec3::from(cfg.from);
    let to = Vec3::from(cfg.to);

    if from.normalized().dot(to.normalized()) < mat4::ANTIPARALLEL_COS {
        log::debug!("directions {:?} and {:?} are opposite; using a half turn", cfg.from, cfg.to);
    }

    let m = mat4::direction_to_direction(from, to);

    let mut lines = f.matrix_block(m, "direction to direction");
    lines.push(f.vector_line(mat4::transform(from.normalized(), m), "from * matrix"));

    Section { title: "Direction to direction", lines }
}

/// SLERP samples at evenly spaced t, both endpoints included
pub fn interpolation(cfg: &InterpolationConfig, f: &Formatter) -> Section {
    let q0 = Quaternion::from(cfg.from).normalize();
    let q1 = Quaternion::from(cfg.to).normalize();
    let steps = cfg.steps.max(2);

    let lines = (0..steps)
        .map(|i| {
            let t = i as f32 / (steps - 1) as f32;
            f.quaternion_line(slerp(q0, q1, t), &format!("slerp t = {}", f.number(t).trim()))
        })
        .collect();

    Section { title: "Slerp", lines }
}

use super::{Error, bounds::Region};

/// Builds the clamped points of the initial simplex.
///
/// Point 0 is the clamped start. Point `i + 1` adds `steps[0..=i]` to the
/// first `i + 1` coordinates of point 0 and is clamped again. Without steps,
/// every step is `1.0`.
///
/// # Errors
///
/// Returns [`Error::Dimension`] if the steps do not match the start point,
/// and [`Error::DegenerateSimplex`] if a step is zero. Points that coincide
/// only after clamping against a bound are kept; the search moves them apart.
pub(super) fn start_points(
    start: &[f64],
    steps: Option<&[f64]>,
    region: &Region,
) -> Result<Vec<Vec<f64>>, Error> {
    let n = start.len();
    let steps = match steps {
        Some(steps) if steps.len() != n => {
            return Err(Error::Dimension {
                expected: n,
                actual: steps.len(),
            });
        }
        Some(steps) => steps.to_vec(),
        None => vec![1.0; n],
    };

    if let Some(i) = steps.iter().position(|&step| step == 0.0) {
        return Err(Error::DegenerateSimplex {
            first: i,
            second: i + 1,
        });
    }

    let mut origin = start.to_vec();
    region.clamp(&mut origin);

    let mut points = Vec::with_capacity(n + 1);
    points.push(origin.clone());
    for i in 0..n {
        let mut point = origin.clone();
        for (x, step) in point.iter_mut().zip(&steps[..=i]) {
            *x += step;
        }
        region.clamp(&mut point);
        points.push(point);
    }

    Ok(points)
}

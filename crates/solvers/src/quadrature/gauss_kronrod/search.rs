use log::{debug, trace};
use planck_core::{Model, Observer};

use super::{
    Action, Config, Domain, Error, Event, Solution, Status,
    integrand::Integrand,
    rule::kronrod15,
    segment::{self, Segment},
};

/// Core adaptive subdivision loop.
pub(super) fn search<M, Obs>(
    model: &M,
    domain: Domain,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = f64>,
    Obs: Observer<Event, Action>,
{
    config.validate()?;
    domain.validate()?;

    let ([lower, upper], sign) = domain.interval();

    #[allow(clippy::float_cmp)]
    if lower == upper {
        return Ok(Solution {
            status: Status::Converged,
            value: 0.0,
            abs_error: 0.0,
            subdivisions: 0,
            evaluations: 0,
        });
    }

    let mut integrand = Integrand::new(model, domain);
    let mut segments = vec![kronrod15(|t| integrand.eval(t), lower, upper)?];
    let mut subdivisions = 0;

    let status = loop {
        let (value, abs_error) = segment::totals(&segments);
        if abs_error <= config.error_bound(value) {
            break Status::Converged;
        }
        if subdivisions >= config.max_subdivisions {
            break Status::MaxSubdivisions;
        }

        let Some(index) = segment::worst(&segments) else {
            break Status::Converged;
        };
        if !segments[index].is_splittable() {
            break Status::Roundoff;
        }

        let split = segments.swap_remove(index);
        let (left, right) = bisect(&mut integrand, &split)?;
        segments.push(left);
        segments.push(right);
        subdivisions += 1;

        let (value, abs_error) = segment::totals(&segments);
        trace!(
            "subdivision {subdivisions}: split [{}, {}], estimate {value:e} ± {abs_error:e}",
            split.lower, split.upper,
        );

        let event = Event {
            subdivision: subdivisions,
            split,
            value: sign * value,
            abs_error,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            break Status::StoppedByObserver;
        }
    };

    let (value, abs_error) = segment::totals(&segments);
    let evaluations = integrand.evaluations();
    debug!(
        "gauss-kronrod finished with {status:?}: {:e} ± {abs_error:e} after {subdivisions} subdivisions, {evaluations} evaluations",
        sign * value,
    );

    Ok(Solution {
        status,
        value: sign * value,
        abs_error,
        subdivisions,
        evaluations,
    })
}

/// Splits a segment at its midpoint and estimates both halves.
fn bisect<M>(integrand: &mut Integrand<'_, M>, segment: &Segment) -> Result<(Segment, Segment), Error>
where
    M: Model<Input = f64, Output = f64>,
{
    let mid = segment.midpoint();
    let left = kronrod15(|t| integrand.eval(t), segment.lower, mid)?;
    let right = kronrod15(|t| integrand.eval(t), mid, segment.upper)?;
    Ok((left, right))
}

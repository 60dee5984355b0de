//! Turning an unordered VERS constraint list into intervals

use crate::constraint::{Bound, Constraint, Interval, Operator, Side};
use crate::version::Version;

/// Normalize constraints into exact, bounded and exclude intervals.
///
/// `=` and `!=` become [`Interval::Exact`] and [`Interval::Exclude`] directly. The remaining
/// bounds are sorted by version and grouped into runs of the same side. Runs are taken two at
/// a time: a lower run and an upper run, in either order, fuse into one interval made of the
/// tightest bound of each, which is empty when the upper run comes first. A trailing run
/// without a partner keeps each of its bounds as a one-sided interval.
pub(crate) fn normalize<V: Version>(constraints: &[Constraint<V>]) -> Vec<Interval<V>> {
    let mut intervals: Vec<Interval<V>> = Vec::new();
    let mut bounds: Vec<(Side, Bound<V>)> = Vec::new();

    for constraint in constraints {
        let version = constraint.version().clone();
        let interval = match constraint.operator() {
            Operator::Equal => Interval::Exact(version),
            Operator::NotEqual => Interval::Exclude(version),
            Operator::GreaterThanOrEqual => {
                bounds.push((Side::Lower, Bound::inclusive(version)));
                continue;
            }
            Operator::GreaterThan => {
                bounds.push((Side::Lower, Bound::exclusive(version)));
                continue;
            }
            Operator::LessThanOrEqual => {
                bounds.push((Side::Upper, Bound::inclusive(version)));
                continue;
            }
            Operator::LessThan => {
                bounds.push((Side::Upper, Bound::exclusive(version)));
                continue;
            }
        };
        if !intervals.contains(&interval) {
            intervals.push(interval);
        }
    }

    // stable, so bounds at one version keep the order they were written in
    bounds.sort_by(|(_, a), (_, b)| a.version().cmp(b.version()));
    let bounds = merge_duplicates(bounds);
    log::trace!("Sorted VERS bounds: {:?}", bounds);

    // neighbouring runs always face opposite directions
    let runs = runs(bounds);
    for pair in runs.chunks(2) {
        match pair {
            [(first_side, first), (_, second)] => {
                let (lowers, uppers) = match first_side {
                    Side::Lower => (first, second),
                    Side::Upper => (second, first),
                };
                let interval = Interval::Bounded {
                    lower: tightest(lowers, Side::Lower),
                    upper: tightest(uppers, Side::Upper),
                };
                if interval.is_empty() {
                    log::debug!("Bounds {} match no version", interval);
                }
                intervals.push(interval);
            }
            [(side, run)] => {
                intervals.extend(run.iter().cloned().map(|bound| match side {
                    Side::Lower => Interval::lower(bound),
                    Side::Upper => Interval::upper(bound),
                }));
            }
            _ => {}
        }
    }

    intervals
}

/// Drop a bound when the same side already has one at an equal version; inclusive wins
fn merge_duplicates<V: Version>(bounds: Vec<(Side, Bound<V>)>) -> Vec<(Side, Bound<V>)> {
    let mut merged: Vec<(Side, Bound<V>)> = Vec::with_capacity(bounds.len());
    for (side, bound) in bounds {
        // equal versions are adjacent after sorting
        let existing = merged
            .iter_mut()
            .rev()
            .take_while(|(_, kept)| kept.version() == bound.version())
            .find(|(kept_side, _)| *kept_side == side);
        match existing {
            Some((_, kept)) => {
                if bound.is_inclusive() && !kept.is_inclusive() {
                    *kept = bound;
                }
            }
            None => merged.push((side, bound)),
        }
    }
    merged
}

/// Group consecutive bounds on the same side
fn runs<V: Version>(bounds: Vec<(Side, Bound<V>)>) -> Vec<(Side, Vec<Bound<V>>)> {
    let mut runs: Vec<(Side, Vec<Bound<V>>)> = Vec::new();
    for (side, bound) in bounds {
        match runs.last_mut() {
            Some((run_side, run)) if *run_side == side => run.push(bound),
            _ => runs.push((side, vec![bound])),
        }
    }
    runs
}

fn tightest<V: Version>(run: &[Bound<V>], side: Side) -> Option<Bound<V>> {
    run.iter()
        .fold(None::<&Bound<V>>, |best, bound| match best {
            Some(best) if !bound.is_tighter_than(best, side) => Some(best),
            _ => Some(bound),
        })
        .cloned()
}

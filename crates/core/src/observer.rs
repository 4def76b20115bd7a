/// Receives solver events and decides how the iteration should proceed.
///
/// Observers let callers monitor or steer a solver without changing its API,
/// enabling logging, early stopping, or recovery from failed evaluations.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Halt {
        Now,
    }

    fn drive<Obs: Observer<f64, Halt>>(mut observer: Obs, values: &[f64]) -> Option<usize> {
        values
            .iter()
            .position(|value| observer.observe(value) == Some(Halt::Now))
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), &[1.0, 2.0, 3.0]), None);
    }

    #[test]
    fn closure_observer_can_act() {
        let mut seen = 0;
        let observer = |value: &f64| {
            seen += 1;
            (*value < 0.5).then_some(Halt::Now)
        };

        assert_eq!(drive(observer, &[3.0, 1.0, 0.25, 0.1]), Some(2));
        assert_eq!(seen, 3);
    }
}

use crate::domain::InstanceEvent;

/// Port receiving each materializer action as it happens.
pub trait ActionReporter {
    fn report(&self, event: &InstanceEvent);
}

/// Reporter that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ActionReporter for NoopReporter {
    fn report(&self, _event: &InstanceEvent) {}
}

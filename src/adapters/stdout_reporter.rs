use tracing::warn;

use crate::domain::InstanceEvent;
use crate::ports::ActionReporter;

/// Prints one line per action on standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl ActionReporter for StdoutReporter {
    fn report(&self, event: &InstanceEvent) {
        if event.is_warning() {
            warn!(%event, "existing file left untouched");
        }
        println!("{}", event);
    }
}

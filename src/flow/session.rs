use super::Flow;

/// Identifies one accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    id: u64,
    flow: Flow,
}

impl Ticket {
    pub fn id(self) -> u64 {
        self.id
    }

    pub fn flow(self) -> Flow {
        self.flow
    }
}

/// Tracks the single request whose result may still reach the display.
///
/// Beginning a submission supersedes any outstanding one; completions for a
/// superseded ticket are dropped. The loading indicator is shown exactly
/// while a ticket is outstanding.
#[derive(Debug, Default)]
pub struct Session {
    last_id: u64,
    in_flight: Option<Ticket>,
}

impl Session {
    pub fn begin(&mut self, flow: Flow) -> Ticket {
        self.last_id += 1;
        let ticket = Ticket {
            id: self.last_id,
            flow,
        };
        if let Some(previous) = self.in_flight.replace(ticket) {
            log::info!(
                "{} request #{} superseded by {} request #{}",
                previous.flow.name(),
                previous.id,
                flow.name(),
                ticket.id
            );
        }
        ticket
    }

    /// Returns `true` when `ticket` is current, clearing it.
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
            true
        } else {
            log::warn!(
                "dropping stale {} response for request #{}",
                ticket.flow.name(),
                ticket.id
            );
            false
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<Ticket> {
        self.in_flight
    }
}

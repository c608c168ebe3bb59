//! Bring-up report.
//!
//! Bring-up never stops at the first failing step. Every step is attempted
//! and recorded here, and the overall status is the most severe failure
//! seen (the earliest one when several share a severity).

use drivers::error::{Error, Result};

const CAPACITY: usize = 24;

/// One bring-up step.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    /// Generated system configuration.
    SystemConfig,
    /// On-board LED, by position in the board table.
    Led(u8),
    /// On-board button, by position in the board table.
    Button(u8),
    /// Fail-fast check over the LED and button steps.
    IndicatorCheck,
    /// Standard output retargeting.
    Retarget,
}

impl Step {
    /// LEDs and buttons: the board's core indicator hardware.
    pub const fn is_indicator(&self) -> bool {
        matches!(self, Step::Led(_) | Step::Button(_))
    }
}

/// A recorded step and its outcome.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub step: Step,
    pub result: Result<()>,
}

/// Fixed-capacity record of a bring-up run.
#[derive(Debug)]
pub struct InitReport {
    steps: [Option<StepOutcome>; CAPACITY],
    len: usize,
    dropped: usize,
    worst: Option<Error>,
}

impl InitReport {
    pub const fn new() -> Self {
        Self {
            steps: [None; CAPACITY],
            len: 0,
            dropped: 0,
            worst: None,
        }
    }

    /// Record `step`. The overall status is updated even if the step list
    /// is already full.
    pub fn record(&mut self, step: Step, result: Result<()>) {
        if let Err(err) = result {
            log::warn!("bring-up: {:?} failed: {}", step, err);
            match self.worst {
                Some(worst) if worst.severity() >= err.severity() => {}
                _ => self.worst = Some(err),
            }
        }

        if self.len < CAPACITY {
            self.steps[self.len] = Some(StepOutcome { step, result });
            self.len += 1;
        } else {
            self.dropped += 1;
        }
    }

    /// Overall result so far.
    pub fn status(&self) -> Result<()> {
        match self.worst {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Recorded steps, in execution order.
    pub fn steps(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps[..self.len].iter().flatten()
    }

    pub fn outcome(&self, step: Step) -> Option<Result<()>> {
        self.steps().find(|o| o.step == step).map(|o| o.result)
    }

    /// Number of failed steps matching `filter`.
    pub fn failures(&self, filter: impl Fn(&Step) -> bool) -> usize {
        self.steps()
            .filter(|o| filter(&o.step) && o.result.is_err())
            .count()
    }

    /// Steps that did not fit in the report.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl Default for InitReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drivers::error::{Fault, HwStatus};

    const HW: Error = Error::HardwareFailure(HwStatus::GPIO_BAD_PIN);
    const HW2: Error = Error::HardwareFailure(HwStatus::HWMGR_IN_USE);

    #[test]
    fn empty_report_is_success() {
        let report = InitReport::new();
        assert_eq!(report.status(), Ok(()));
        assert_eq!(report.steps().count(), 0);
    }

    #[test]
    fn failure_does_not_hide_later_steps() {
        let mut report = InitReport::new();
        report.record(Step::Led(0), Err(HW));
        report.record(Step::Led(1), Ok(()));
        report.record(Step::Button(0), Ok(()));

        assert_eq!(report.status(), Err(HW));
        assert_eq!(report.steps().count(), 3);
        assert_eq!(report.outcome(Step::Led(1)), Some(Ok(())));
        assert_eq!(report.failures(Step::is_indicator), 1);
    }

    #[test]
    fn keeps_first_of_equal_severity() {
        let mut report = InitReport::new();
        report.record(Step::Led(0), Err(HW));
        report.record(Step::Led(1), Err(HW2));
        assert_eq!(report.status(), Err(HW));
    }

    #[test]
    fn keeps_most_severe() {
        let mut report = InitReport::new();
        report.record(Step::SystemConfig, Err(Error::BadArgument));
        report.record(Step::Led(0), Err(HW));
        report.record(
            Step::IndicatorCheck,
            Err(Error::Fatal(Fault::Indicators { failed: 1 })),
        );
        report.record(Step::Retarget, Err(HW2));
        assert_eq!(
            report.status(),
            Err(Error::Fatal(Fault::Indicators { failed: 1 }))
        );
    }

    #[test]
    fn overflow_still_counts_toward_status() {
        let mut report = InitReport::new();
        for i in 0..CAPACITY {
            report.record(Step::Led(i as u8), Ok(()));
        }
        report.record(Step::Retarget, Err(HW));
        assert_eq!(report.dropped(), 1);
        assert_eq!(report.status(), Err(HW));
        assert_eq!(report.outcome(Step::Retarget), None);
    }
}

//! Sequential suite runner
use super::fixtures::{ExpectedResult, TestCase, get_chat_history_cases, send_message_cases};
use crate::api::types::{CallOutcome, GatewayRequest};
use crate::client::Gateway;
use crate::error::Result;
use reqwest::StatusCode;
use serde::Serialize;
use std::fmt;
use tracing::{debug, error, info};

/// Runner switches
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Also require every `ExpectedResult::contains` fragment in the response body
    pub check_contains: bool,
}

/// Outcome of one case
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    Passed,
    /// Gateway answered 429
    RateLimited,
    /// Gateway answered 500
    ServerError,
    /// No response was received
    Transport { message: String },
    StatusMismatch {
        expected: StatusCode,
        actual: StatusCode,
    },
    MissingFragment { fragment: &'static str },
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Passed)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Passed => write!(f, "passed"),
            Verdict::RateLimited => write!(f, "Too many requests, try again"),
            Verdict::ServerError => write!(f, "Internal Server error, try again"),
            Verdict::Transport { message } => {
                write!(f, "Internal Server error, try again (transport: {message})")
            }
            Verdict::StatusMismatch { expected, actual } => write!(
                f,
                "expected status {}, got {}",
                expected.as_u16(),
                actual.as_u16()
            ),
            Verdict::MissingFragment { fragment } => {
                write!(f, "response body does not contain {fragment:?}")
            }
        }
    }
}

/// Judge a single call.
///
/// 429 and 500 always fail, whatever status the case expects.
pub fn evaluate(expected: &ExpectedResult, outcome: &CallOutcome, options: &RunOptions) -> Verdict {
    let (status, body) = match outcome {
        CallOutcome::Transport { message } => {
            return Verdict::Transport {
                message: message.clone(),
            };
        }
        CallOutcome::Http { status, body } => (*status, body),
    };

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Verdict::RateLimited;
    }
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        return Verdict::ServerError;
    }
    if status != expected.status {
        return Verdict::StatusMismatch {
            expected: expected.status,
            actual: status,
        };
    }
    if options.check_contains {
        if let Some(fragment) = expected.contains.iter().copied().find(|f| !body.contains(*f)) {
            return Verdict::MissingFragment { fragment };
        }
    }
    Verdict::Passed
}

#[derive(Clone, Debug)]
pub struct CaseReport {
    pub name: &'static str,
    pub verdict: Verdict,
}

/// Results of one suite, in case order
#[derive(Clone, Debug)]
pub struct SuiteReport {
    pub method: &'static str,
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    pub fn passed(&self) -> bool {
        self.cases.iter().all(|c| c.verdict.is_pass())
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseReport> {
        self.cases.iter().filter(|c| !c.verdict.is_pass())
    }
}

#[derive(Clone, Debug, Default)]
pub struct RunReport {
    pub suites: Vec<SuiteReport>,
}

impl RunReport {
    /// Conjunction of every case outcome
    pub fn passed(&self) -> bool {
        self.suites.iter().all(SuiteReport::passed)
    }

    pub fn failure_count(&self) -> usize {
        self.suites.iter().map(|s| s.failures().count()).sum()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for suite in &self.suites {
            for case in &suite.cases {
                writeln!(f, "{} [{}]: {}", suite.method, case.name, case.verdict)?;
            }
        }
        let total: usize = self.suites.iter().map(|s| s.cases.len()).sum();
        write!(f, "{} of {} cases failed", self.failure_count(), total)
    }
}

/// Run every case of a suite in order. A failing case never stops the suite.
///
/// ## Errors
/// - `HarnessError::Serialization` - a case input could not be encoded
#[tracing::instrument(skip_all, fields(method = Rq::METHOD))]
pub async fn run_suite<Rq>(
    gateway: &Gateway,
    cases: &[TestCase<Rq>],
    options: &RunOptions,
) -> Result<SuiteReport>
where
    Rq: GatewayRequest + Serialize + fmt::Debug,
{
    let mut reports = Vec::with_capacity(cases.len());
    for case in cases {
        let outcome = gateway.send_api_request(&case.input).await?;
        let verdict = evaluate(&case.expected, &outcome, options);
        if verdict.is_pass() {
            debug!("{} [{}]: passed", Rq::METHOD, case.name);
        } else {
            error!("{} [{}]: {}", Rq::METHOD, case.name, verdict);
        }
        reports.push(CaseReport {
            name: case.name,
            verdict,
        });
    }
    Ok(SuiteReport {
        method: Rq::METHOD,
        cases: reports,
    })
}

/// Run the `sendMessage` suite, then the `getChatHistory` suite
pub async fn run_all(gateway: &Gateway, options: &RunOptions) -> Result<RunReport> {
    let send = run_suite(gateway, &send_message_cases(), options).await?;
    let history = run_suite(gateway, &get_chat_history_cases(), options).await?;
    let report = RunReport {
        suites: vec![send, history],
    };
    info!(
        "Gateway run finished: {} failure(s)",
        report.failure_count()
    );
    Ok(report)
}

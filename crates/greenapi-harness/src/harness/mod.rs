//! Gateway suites: fixed cases and the runner that checks them
pub mod fixtures;
pub mod runner;

pub use fixtures::{
    ExpectedResult, INVALID_CHAT_ID, TestCase, VALID_CHAT_ID, get_chat_history_cases,
    send_message_cases,
};
pub use runner::{
    CaseReport, RunOptions, RunReport, SuiteReport, Verdict, evaluate, run_all, run_suite,
};

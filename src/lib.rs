//! Runs the axe accessibility CLI against a URL and summarizes the
//! violations it reports.
pub mod function;

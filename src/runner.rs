//! Running drills with or without step tracing.

use crate::config::DrillsConfig;
use crate::drill::Drill;
use crate::error::DrillResult;
use crate::logging::LogTracer;
use crate::report::Report;
use dsa_kernels::{NoTrace, Tracer};

/// Run one drill and wrap the result in a [`Report`].
///
/// With `trace` set, intermediate states are logged at debug level.
pub fn run_drill(
    drill: Drill,
    input: Vec<i64>,
    offset: Option<i64>,
    trace: bool,
) -> DrillResult<Report> {
    let mut log_tracer;
    let mut no_trace = NoTrace;
    let tracer: &mut dyn Tracer = if trace {
        log_tracer = LogTracer::new(drill.name());
        &mut log_tracer
    } else {
        &mut no_trace
    };

    let outcome = drill.run(input.clone(), offset, tracer)?;
    Ok(Report::new(drill, input, offset, outcome))
}

/// Inputs to replay for `drill`: the configured override, else the built-ins.
pub fn sample_inputs(config: &DrillsConfig, drill: Drill) -> Vec<(Vec<i64>, Option<i64>)> {
    match config.sample_for(drill) {
        Some(custom) => vec![(custom.input.clone(), custom.offset)],
        None => drill
            .samples()
            .iter()
            .map(|s| (s.input.to_vec(), s.offset))
            .collect(),
    }
}

/// Replay the samples of every drill, in registry order.
///
/// A failing sample does not stop the rest; its error is returned in place.
pub fn run_samples(config: &DrillsConfig, trace: bool) -> Vec<DrillResult<Report>> {
    Drill::ALL
        .into_iter()
        .flat_map(|drill| {
            sample_inputs(config, drill)
                .into_iter()
                .map(move |(input, offset)| run_drill(drill, input, offset, trace))
        })
        .collect()
}
